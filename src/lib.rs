//! Client library for the PayPortal international payments backend.
//!
//! PayPortal is a two-surface product: customers register, log in, and
//! submit SWIFT payments; employees review pending payments and
//! administrators manage employee accounts. This crate is the typed client
//! for that REST backend.
//!
//! # Architecture
//!
//! - **Validation**: declarative rule tables per entity ([`validation`]),
//!   evaluated without short-circuiting so every failing field surfaces at
//!   once. A request is only sent when the error map is empty.
//! - **Sanitization**: symbol- and markup-stripping passes ([`sanitize`])
//!   applied to outgoing fields and to fetched payment records.
//! - **Transport**: a single `reqwest`-backed [`client::ApiClient`] that
//!   injects the bearer token from a swappable [`session::SessionStore`]
//!   and classifies every response into a typed success or a user-facing
//!   failure message.
//! - **Guards**: an in-flight latch and a fetch sequence ([`latch`]) make
//!   "one submission at a time" and "last list refresh wins" explicit
//!   guarantees.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use payportal::client::ApiClient;
//! use payportal::config::Config;
//! use payportal::latch::SubmitLatch;
//! use payportal::models::payment::PaymentInput;
//! use payportal::services::payments;
//! use payportal::session::{MemorySession, SessionStore};
//!
//! # async fn demo() -> Result<(), payportal::error::Error> {
//! let config = Config::from_env().expect("API_BASE_URL must be set");
//! let session: Arc<dyn SessionStore> = Arc::new(MemorySession::new());
//! let client = ApiClient::new(&config, session)?;
//!
//! let latch = SubmitLatch::new();
//! let input = PaymentInput {
//!     amount: "100.50".into(),
//!     currency: "usd".into(),
//!     provider: "swift".into(),
//!     recipient_account: "12345".into(),
//!     swift_code: "abcdus33xxx".into(),
//! };
//! let record = payments::submit(&client, &latch, &input).await?;
//! println!("created payment {}", record.id);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod latch;
pub mod models;
pub mod sanitize;
pub mod services;
pub mod session;
pub mod validation;
