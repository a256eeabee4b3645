//! Customer account models: registration, login, and the auth response.

use serde::{Deserialize, Serialize};

use crate::sanitize::strip_symbols;

/// Raw registration form fields.
#[derive(Debug, Clone, Default)]
pub struct RegistrationInput {
    pub full_name: String,
    pub id_number: String,
    pub account_number: String,
    pub password: String,
}

impl RegistrationInput {
    /// Build the wire payload from validated input.
    ///
    /// Identity fields get the symbol-stripping pass; the password is sent
    /// exactly as typed.
    pub fn to_payload(&self) -> RegisterPayload {
        RegisterPayload {
            full_name: strip_symbols(&self.full_name),
            id_number: strip_symbols(&self.id_number),
            account_number: strip_symbols(&self.account_number),
            password: self.password.clone(),
        }
    }
}

/// Wire payload for POST /auth/register.
///
/// # JSON Example
///
/// ```json
/// {
///   "fullName": "John Doe",
///   "idNumber": "1234567890123",
///   "accountNumber": "12345",
///   "password": "Str0ngEnough"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub full_name: String,
    pub id_number: String,
    pub account_number: String,
    pub password: String,
}

/// Raw login form fields.
#[derive(Debug, Clone, Default)]
pub struct LoginInput {
    pub account_number: String,
    pub password: String,
}

impl LoginInput {
    pub fn to_payload(&self) -> LoginPayload {
        LoginPayload {
            account_number: strip_symbols(&self.account_number),
            password: self.password.clone(),
        }
    }
}

/// Wire payload for POST /auth/login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub account_number: String,
    pub password: String,
}

/// Response body of POST /auth/register and POST /auth/login.
///
/// The user object is kept opaque: its shape belongs to the backend, and
/// it is stored in the session verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_payload_strips_symbols_but_not_password() {
        let input = RegistrationInput {
            full_name: "John. Doe".to_string(),
            id_number: "1234567890123".to_string(),
            account_number: "$12345".to_string(),
            password: "Pa$s.w0rdX".to_string(),
        };
        let payload = input.to_payload();
        assert_eq!(payload.full_name, "John Doe");
        assert_eq!(payload.account_number, "12345");
        assert_eq!(payload.password, "Pa$s.w0rdX");
    }

    #[test]
    fn payload_uses_camel_case_field_names() {
        let json = serde_json::to_value(
            LoginInput {
                account_number: "12345".to_string(),
                password: "hunter2A".to_string(),
            }
            .to_payload(),
        )
        .unwrap();
        assert!(json.get("accountNumber").is_some());
        assert!(json.get("password").is_some());
    }
}
