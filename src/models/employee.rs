//! Employee account models for the admin surface.

use serde::{Deserialize, Serialize};

/// New-employee form fields; doubles as the wire payload for
/// POST /admin/employees, which sends the form as-is.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub username: String,
    pub full_name: String,
    pub password: String,
}

/// An employee account as returned by GET /admin/employees.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub role: Option<String>,
}
