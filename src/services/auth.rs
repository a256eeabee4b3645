//! Registration, login, and logout.

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::user::{AuthResponse, LoginInput, RegistrationInput};
use crate::session::{TOKEN_KEY, USER_KEY};
use crate::validation::{validate_login, validate_registration};

/// Create a customer account.
///
/// # Flow
///
/// 1. Validate the form; any failing field blocks the request entirely.
/// 2. Strip `$`/`.` from the identity fields, send POST /auth/register.
/// 3. On success, store the token and the user object in the session.
///
/// # Errors
///
/// - `Error::Validation` with the failing fields; nothing was sent
/// - `Error::Request` with the backend's `msg` or "Registration failed"
pub async fn register(client: &ApiClient, input: &RegistrationInput) -> Result<AuthResponse, Error> {
    let errors = validate_registration(input);
    if !errors.is_empty() {
        return Err(Error::Validation(errors));
    }

    let auth: AuthResponse = client
        .post_public("/auth/register", &input.to_payload(), "Registration failed")
        .await?;

    store_session(client, &auth);
    tracing::info!("registered and signed in");
    Ok(auth)
}

/// Sign in with account number and password.
///
/// On success the token and user object land in the session, same as
/// [`register`].
pub async fn login(client: &ApiClient, input: &LoginInput) -> Result<AuthResponse, Error> {
    let errors = validate_login(input);
    if !errors.is_empty() {
        return Err(Error::Validation(errors));
    }

    let auth: AuthResponse = client
        .post_public("/auth/login", &input.to_payload(), "Login failed")
        .await?;

    store_session(client, &auth);
    tracing::info!("signed in");
    Ok(auth)
}

/// Drop the session. Every key goes; the next authenticated call fails
/// with `Error::NotAuthenticated` until a fresh login.
pub fn logout(client: &ApiClient) {
    client.session().clear();
    tracing::info!("signed out");
}

fn store_session(client: &ApiClient, auth: &AuthResponse) {
    let session = client.session();
    session.set(TOKEN_KEY, &auth.token);
    // The user object is opaque; stored verbatim as JSON text.
    session.set(USER_KEY, &auth.user.to_string());
}
