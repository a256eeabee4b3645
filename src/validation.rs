//! Declarative field validation.
//!
//! Every form in the product validates the same way: a table of rules per
//! entity, where each rule names a field, a predicate, and the message shown
//! when the predicate fails. A validation pass evaluates **every** rule (no
//! short-circuiting), so multiple errors can surface at once, and returns a
//! field → message map. An empty map means "proceed to submit".
//!
//! Validation is pure and synchronous. A request is only transmitted when
//! all fields pass; partial submission is impossible.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::FieldErrors;
use crate::models::employee::EmployeeInput;
use crate::models::payment::PaymentInput;
use crate::models::user::{LoginInput, RegistrationInput};

/// One row of a rule table: the field it guards, the predicate that must
/// hold, and the message reported when it does not.
pub struct Rule<T> {
    pub field: &'static str,
    pub check: fn(&T) -> bool,
    pub message: &'static str,
}

/// A rule table for one entity.
pub struct RuleSet<T: 'static> {
    rules: &'static [Rule<T>],
}

impl<T> RuleSet<T> {
    /// Run every rule against the input and collect the failures.
    ///
    /// Evaluates all rules unconditionally; rules are independent and each
    /// guards its own field.
    pub fn validate(&self, input: &T) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for rule in self.rules {
            if !(rule.check)(input) {
                errors.insert(rule.field, rule.message);
            }
        }
        errors
    }
}

// Character classes are spelled as ASCII ranges rather than \d: only ASCII
// digits pass, never other Unicode digits.

fn amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$").unwrap())
}

fn digits_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+$").unwrap())
}

fn id_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{13}$").unwrap())
}

fn swift_code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z0-9]{8,11}$").unwrap())
}

fn full_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z ]+$").unwrap())
}

/// Password policy: at least 8 characters with one lowercase letter, one
/// uppercase letter, and one digit. Checked directly; `regex` has no
/// lookahead.
fn password_meets_policy(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

static PAYMENT_RULES: RuleSet<PaymentInput> = RuleSet {
    rules: &[
        Rule {
            field: "amount",
            check: |p| amount_re().is_match(&p.amount),
            message: "Enter a valid amount",
        },
        Rule {
            field: "currency",
            check: |p| {
                let upper = p.currency.to_uppercase();
                upper == "USD" || upper == "EUR" || upper == "ZAR"
            },
            message: "Currency must be USD, EUR, or ZAR",
        },
        Rule {
            field: "provider",
            check: |p| p.provider.to_uppercase() == "SWIFT",
            message: "Provider must be SWIFT",
        },
        Rule {
            field: "recipientAccount",
            check: |p| digits_re().is_match(&p.recipient_account),
            message: "Recipient account must be numeric",
        },
        Rule {
            field: "swiftCode",
            check: |p| swift_code_re().is_match(&p.swift_code.to_uppercase()),
            message: "SWIFT Code must be 8-11 uppercase alphanumeric characters",
        },
    ],
};

static REGISTRATION_RULES: RuleSet<RegistrationInput> = RuleSet {
    rules: &[
        Rule {
            field: "fullName",
            check: |r| full_name_re().is_match(&r.full_name),
            message: "Only letters and spaces allowed",
        },
        Rule {
            field: "idNumber",
            check: |r| id_number_re().is_match(&r.id_number),
            message: "ID must be 13 digits",
        },
        Rule {
            field: "accountNumber",
            check: |r| digits_re().is_match(&r.account_number),
            message: "Account number must be numeric",
        },
        Rule {
            field: "password",
            check: |r| password_meets_policy(&r.password),
            message: "Password must have min 8 chars, 1 uppercase, 1 lowercase, 1 number",
        },
    ],
};

static LOGIN_RULES: RuleSet<LoginInput> = RuleSet {
    rules: &[
        Rule {
            field: "accountNumber",
            check: |l| digits_re().is_match(&l.account_number),
            message: "Account number must be numeric",
        },
        Rule {
            field: "password",
            check: |l| !l.password.is_empty(),
            message: "Password is required",
        },
    ],
};

static EMPLOYEE_RULES: RuleSet<EmployeeInput> = RuleSet {
    rules: &[
        Rule {
            field: "username",
            check: |e| !e.username.is_empty(),
            message: "Username is required",
        },
        Rule {
            field: "fullName",
            check: |e| !e.full_name.is_empty(),
            message: "Full name is required",
        },
        Rule {
            field: "password",
            check: |e| !e.password.is_empty(),
            message: "Password is required",
        },
    ],
};

/// Validate a payment form. Empty result ⇒ safe to submit.
pub fn validate_payment(input: &PaymentInput) -> FieldErrors {
    PAYMENT_RULES.validate(input)
}

/// Validate an account registration form.
pub fn validate_registration(input: &RegistrationInput) -> FieldErrors {
    REGISTRATION_RULES.validate(input)
}

/// Validate a login form.
pub fn validate_login(input: &LoginInput) -> FieldErrors {
    LOGIN_RULES.validate(input)
}

/// Validate an admin "create employee" form.
pub fn validate_employee(input: &EmployeeInput) -> FieldErrors {
    EMPLOYEE_RULES.validate(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(amount: &str) -> PaymentInput {
        PaymentInput {
            amount: amount.to_string(),
            currency: "usd".to_string(),
            provider: "swift".to_string(),
            recipient_account: "12345".to_string(),
            swift_code: "abcdus33xxx".to_string(),
        }
    }

    #[test]
    fn mixed_case_payment_passes() {
        let errors = validate_payment(&payment("100.50"));
        assert!(errors.is_empty(), "unexpected errors: {errors}");
    }

    #[test]
    fn bad_amounts_are_rejected() {
        for bad in ["12.345", "-5", "abc", "", "1,000", ".50", "5."] {
            let errors = validate_payment(&payment(bad));
            assert_eq!(
                errors.get("amount"),
                Some("Enter a valid amount"),
                "amount {bad:?} should fail"
            );
        }
    }

    #[test]
    fn whole_and_two_decimal_amounts_pass() {
        for good in ["0", "100", "100.5", "100.50"] {
            assert!(validate_payment(&payment(good)).is_empty(), "{good:?}");
        }
    }

    #[test]
    fn currency_outside_allow_list_is_rejected() {
        let mut input = payment("10");
        input.currency = "GBP".to_string();
        let errors = validate_payment(&input);
        assert_eq!(
            errors.get("currency"),
            Some("Currency must be USD, EUR, or ZAR")
        );
    }

    #[test]
    fn provider_must_be_swift() {
        let mut input = payment("10");
        input.provider = "SEPA".to_string();
        let errors = validate_payment(&input);
        assert_eq!(errors.get("provider"), Some("Provider must be SWIFT"));
    }

    #[test]
    fn short_swift_code_is_rejected() {
        let mut input = payment("10");
        input.swift_code = "AB1".to_string();
        let errors = validate_payment(&input);
        assert_eq!(
            errors.get("swiftCode"),
            Some("SWIFT Code must be 8-11 uppercase alphanumeric characters")
        );
    }

    #[test]
    fn non_numeric_recipient_is_rejected() {
        let mut input = payment("10");
        input.recipient_account = "12a45".to_string();
        let errors = validate_payment(&input);
        assert_eq!(
            errors.get("recipientAccount"),
            Some("Recipient account must be numeric")
        );
    }

    #[test]
    fn all_failures_surface_at_once() {
        let input = PaymentInput {
            amount: "abc".to_string(),
            currency: "GBP".to_string(),
            provider: "SEPA".to_string(),
            recipient_account: "12a45".to_string(),
            swift_code: "AB1".to_string(),
        };
        let errors = validate_payment(&input);
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn validation_is_idempotent() {
        let input = payment("12.345");
        assert_eq!(validate_payment(&input), validate_payment(&input));
    }

    #[test]
    fn registration_id_number_must_be_13_digits() {
        let input = RegistrationInput {
            full_name: "John Doe".to_string(),
            id_number: "123".to_string(),
            account_number: "12345".to_string(),
            password: "Passw0rd".to_string(),
        };
        let errors = validate_registration(&input);
        assert_eq!(errors.get("idNumber"), Some("ID must be 13 digits"));

        let input = RegistrationInput {
            id_number: "1234567890123".to_string(),
            ..input
        };
        assert!(validate_registration(&input).is_empty());
    }

    #[test]
    fn registration_name_and_password_policy() {
        let input = RegistrationInput {
            full_name: "J0hn".to_string(),
            id_number: "1234567890123".to_string(),
            account_number: "12345".to_string(),
            password: "password".to_string(),
        };
        let errors = validate_registration(&input);
        assert_eq!(errors.get("fullName"), Some("Only letters and spaces allowed"));
        assert_eq!(
            errors.get("password"),
            Some("Password must have min 8 chars, 1 uppercase, 1 lowercase, 1 number")
        );

        // Policy needs all three character classes, not just length.
        for bad in ["Sh0rt", "alllower1", "ALLUPPER1", "NoDigits"] {
            assert!(!password_meets_policy(bad), "{bad:?} should fail policy");
        }
        assert!(password_meets_policy("Str0ngEnough"));
    }

    #[test]
    fn login_requires_numeric_account_and_password() {
        let input = LoginInput {
            account_number: "12a45".to_string(),
            password: String::new(),
        };
        let errors = validate_login(&input);
        assert_eq!(
            errors.get("accountNumber"),
            Some("Account number must be numeric")
        );
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn employee_fields_must_be_non_empty() {
        let input = EmployeeInput {
            username: String::new(),
            full_name: "Jane Roe".to_string(),
            password: String::new(),
        };
        let errors = validate_employee(&input);
        assert_eq!(errors.get("username"), Some("Username is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
        assert_eq!(errors.get("fullName"), None);
    }
}
