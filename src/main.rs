//! PayPortal CLI - Main Entry Point
//!
//! Terminal front-end for the PayPortal payments backend, covering both
//! surfaces of the product: the customer flows (register, login, submit and
//! list payments) and the employee/admin flows (review pending payments,
//! processed history, employee accounts).
//!
//! # Startup Flow
//!
//! 1. Initialize logging
//! 2. Load configuration from environment variables
//! 3. Open the file-backed session store (token survives between runs)
//! 4. Build the API client and dispatch the subcommand

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use payportal::client::ApiClient;
use payportal::config::Config;
use payportal::latch::{FetchSequence, SubmitLatch};
use payportal::models::employee::EmployeeInput;
use payportal::models::payment::{Decision, PaymentInput};
use payportal::models::user::{LoginInput, RegistrationInput};
use payportal::services::{auth, employees, payments, review};
use payportal::session::{FileSession, SessionStore};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // The message is the user-facing failure text.
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;

    let session: Arc<dyn SessionStore> = Arc::new(FileSession::open(&config.session_file));
    let client = ApiClient::new(&config, session)?;

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "register" => {
            let input = RegistrationInput {
                full_name: required(&args, 1, "full name")?.to_string(),
                id_number: required(&args, 2, "ID number")?.to_string(),
                account_number: required(&args, 3, "account number")?.to_string(),
                password: required(&args, 4, "password")?.to_string(),
            };
            auth::register(&client, &input).await?;
            println!("Account created; you are signed in.");
        }
        "login" => {
            let input = LoginInput {
                account_number: required(&args, 1, "account number")?.to_string(),
                password: required(&args, 2, "password")?.to_string(),
            };
            auth::login(&client, &input).await?;
            println!("Signed in.");
        }
        "logout" => {
            auth::logout(&client);
            println!("Signed out.");
        }
        "pay" => {
            let input = PaymentInput {
                amount: required(&args, 1, "amount")?.to_string(),
                currency: required(&args, 2, "currency")?.to_string(),
                provider: required(&args, 3, "provider")?.to_string(),
                recipient_account: required(&args, 4, "recipient account")?.to_string(),
                swift_code: required(&args, 5, "SWIFT code")?.to_string(),
            };
            let latch = SubmitLatch::new();
            let record = payments::submit(&client, &latch, &input).await?;
            println!("Payment created: {} ({})", record.id, record.status);
        }
        "payments" => {
            let seq = FetchSequence::new();
            if let Some(records) = payments::list(&client, &seq).await? {
                for p in &records {
                    println!(
                        "{}  {:>12.2} {}  {} -> {}  {}",
                        p.id, p.amount, p.currency, p.provider, p.recipient_account, p.status
                    );
                }
                println!("{} payment(s)", records.len());
            }
        }
        "pending" => {
            let seq = FetchSequence::new();
            if let Some(records) = review::pending(&client, &seq).await? {
                for p in &records {
                    println!(
                        "{}  {}  {:>12.2}  {}",
                        p.id,
                        p.account_number.as_deref().unwrap_or("-"),
                        p.amount,
                        p.status
                    );
                }
                println!("{} pending payment(s)", records.len());
            }
        }
        "approve" | "deny" => {
            let id = required(&args, 1, "payment id")?;
            let decision = if command == "approve" {
                Decision::Approve
            } else {
                Decision::Deny
            };

            let seq = FetchSequence::new();
            let records = review::pending(&client, &seq)
                .await?
                .unwrap_or_default();
            let payment = records
                .iter()
                .find(|p| p.id == id)
                .with_context(|| format!("no pending payment with id {id}"))?;

            let updated = review::decide(&client, payment, decision).await?;
            println!("Payment {} is now {}", updated.id, updated.status);
        }
        "history" => {
            let seq = FetchSequence::new();
            if let Some(records) = review::history(&client, &seq).await? {
                for p in &records {
                    println!(
                        "{}  {}  {:>12.2}  {}  processed by {}",
                        p.id,
                        p.account_number.as_deref().unwrap_or("-"),
                        p.amount,
                        p.status,
                        p.processed_by.as_deref().unwrap_or("System")
                    );
                }
            }
        }
        "employees" => {
            let seq = FetchSequence::new();
            if let Some(list) = employees::list(&client, &seq).await? {
                for e in &list {
                    println!("{}  {}  {}", e.id, e.username, e.full_name);
                }
                println!("{} employee(s)", list.len());
            }
        }
        "employee-add" => {
            let input = EmployeeInput {
                username: required(&args, 1, "username")?.to_string(),
                full_name: required(&args, 2, "full name")?.to_string(),
                password: required(&args, 3, "password")?.to_string(),
            };
            let latch = SubmitLatch::new();
            let employee = employees::create(&client, &latch, &input).await?;
            println!("Employee created: {} ({})", employee.username, employee.id);
        }
        "employee-rm" => {
            let id = required(&args, 1, "employee id")?;
            employees::delete(&client, id).await?;
            println!("Employee deleted.");
        }
        other => {
            print_usage();
            anyhow::bail!("unknown command: {other}");
        }
    }

    Ok(())
}

fn required<'a>(args: &'a [String], index: usize, name: &str) -> anyhow::Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .with_context(|| format!("missing argument: {name}"))
}

fn print_usage() {
    println!(
        "usage: payportal <command>

customer:
  register <full name> <id number> <account number> <password>
  login <account number> <password>
  logout
  pay <amount> <currency> <provider> <recipient account> <swift code>
  payments

employee:
  pending
  approve <payment id>
  deny <payment id>
  history

admin:
  employees
  employee-add <username> <full name> <password>
  employee-rm <employee id>

environment: API_BASE_URL (required), REQUEST_TIMEOUT_SECS, SESSION_FILE"
    );
}
