//! Data models for form input, wire payloads, and backend records.

/// Employee accounts (admin surface)
pub mod employee;
/// Payments and the review lifecycle
pub mod payment;
/// Customer registration/login and the auth response
pub mod user;
