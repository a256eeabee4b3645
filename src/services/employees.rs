//! Admin surface: employee accounts.

use crate::client::ApiClient;
use crate::error::Error;
use crate::latch::{FetchSequence, SubmitLatch};
use crate::models::employee::{Employee, EmployeeInput};
use crate::validation::validate_employee;

/// List employee accounts.
///
/// `Ok(None)` means this response lost the race to a newer fetch.
pub async fn list(
    client: &ApiClient,
    seq: &FetchSequence,
) -> Result<Option<Vec<Employee>>, Error> {
    let ticket = seq.begin();
    let employees: Vec<Employee> = client
        .get_auth("/admin/employees", "Failed to fetch employees")
        .await?;

    if !seq.commit(ticket) {
        tracing::debug!("discarding stale employee list response");
        return Ok(None);
    }
    Ok(Some(employees))
}

/// Create an employee account.
///
/// All three fields must be non-empty; the form is sent as-is. Guarded by
/// the same in-flight latch contract as payment submission.
pub async fn create(
    client: &ApiClient,
    latch: &SubmitLatch,
    input: &EmployeeInput,
) -> Result<Employee, Error> {
    let errors = validate_employee(input);
    if !errors.is_empty() {
        return Err(Error::Validation(errors));
    }

    let _guard = latch.try_acquire().ok_or(Error::SubmissionInFlight)?;

    client
        .post_auth("/admin/employees", input, "Failed to create employee")
        .await
}

/// Delete an employee account. Success body is an empty object.
pub async fn delete(client: &ApiClient, id: &str) -> Result<(), Error> {
    let _: serde_json::Value = client
        .delete_auth(
            &format!("/admin/employees/{id}"),
            "Failed to delete employee",
        )
        .await?;
    Ok(())
}
