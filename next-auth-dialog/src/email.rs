//! Email address validation and the caller-replaceable email hooks.

use regex::Regex;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::sync::OnceLock;

/// Future produced by an asynchronous validator
pub type ValidationFuture = Pin<Box<dyn Future<Output = bool>>>;

/// Future produced by a custom email submitter
pub type SubmissionFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(
            r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
        )
        .expect("email pattern is a valid regex")
    })
}

/// Returns true when `email` is a syntactically valid address.
///
/// Accepts a dot-separated local part without special characters or a quoted
/// local part, followed by either a bracketed IPv4 literal or a domain whose
/// last label has at least two letters. Empty input is never valid.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() {
        return false;
    }
    email_pattern().is_match(email)
}

/// Result of running a validator on the current input
pub enum Validation {
    /// The validator answered synchronously
    Ready(bool),
    /// The validator answers later
    Pending(ValidationFuture),
}

/// Decides whether the typed email may be submitted.
///
/// A custom validator fully replaces the built-in check; the two are never combined.
#[derive(Clone, Default)]
pub enum EmailValidator {
    /// [`is_valid_email`]
    #[default]
    Builtin,
    Sync(Rc<dyn Fn(&str) -> bool>),
    Async(Rc<dyn Fn(String) -> ValidationFuture>),
}

impl EmailValidator {
    pub fn sync(check: impl Fn(&str) -> bool + 'static) -> Self {
        EmailValidator::Sync(Rc::new(check))
    }

    pub fn from_async<F, Fut>(check: F) -> Self
    where
        F: Fn(String) -> Fut + 'static,
        Fut: Future<Output = bool> + 'static,
    {
        EmailValidator::Async(Rc::new(move |email| Box::pin(check(email))))
    }

    pub fn check(&self, email: &str) -> Validation {
        match self {
            EmailValidator::Builtin => Validation::Ready(is_valid_email(email)),
            EmailValidator::Sync(check) => Validation::Ready(check(email)),
            EmailValidator::Async(check) => Validation::Pending(check(email.to_string())),
        }
    }
}

impl PartialEq for EmailValidator {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (EmailValidator::Builtin, EmailValidator::Builtin) => true,
            (EmailValidator::Sync(a), EmailValidator::Sync(b)) => Rc::ptr_eq(a, b),
            (EmailValidator::Async(a), EmailValidator::Async(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for EmailValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmailValidator::Builtin => write!(f, "EmailValidator::Builtin"),
            EmailValidator::Sync(_) => write!(f, "EmailValidator::Sync(..)"),
            EmailValidator::Async(_) => write!(f, "EmailValidator::Async(..)"),
        }
    }
}

/// Replaces the default email sign-in, e.g. to send links through a third-party API
#[derive(Clone)]
pub struct EmailSubmitter(Rc<dyn Fn(String) -> SubmissionFuture>);

impl EmailSubmitter {
    pub fn new<F, Fut>(submit: F) -> Self
    where
        F: Fn(String) -> Fut + 'static,
        Fut: Future<Output = Result<(), String>> + 'static,
    {
        EmailSubmitter(Rc::new(move |email| Box::pin(submit(email))))
    }

    pub fn submit(&self, email: String) -> SubmissionFuture {
        (self.0)(email)
    }
}

impl PartialEq for EmailSubmitter {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for EmailSubmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EmailSubmitter(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_invalid() {
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_missing_at_sign_is_invalid() {
        for input in ["plainaddress", "user.example.com", "\"quoted\"", "[1.2.3.4]"] {
            assert!(!is_valid_email(input), "{} should be invalid", input);
        }
    }

    #[test]
    fn test_common_addresses_are_valid() {
        for input in [
            "user@example.com",
            "first.last@sub-domain.example.io",
            "user+tag@mail.example.co.uk",
            "x@a1.de",
        ] {
            assert!(is_valid_email(input), "{} should be valid", input);
        }
    }

    #[test]
    fn test_ip_literal_domain() {
        assert!(is_valid_email("user@[192.168.0.1]"));
        assert!(!is_valid_email("user@[192.168.0]"));
    }

    #[test]
    fn test_quoted_local_part() {
        assert!(is_valid_email("\"john doe\"@example.org"));
    }

    #[test]
    fn test_rejects_bad_domains_and_local_parts() {
        for input in [
            "user@localhost",
            "user@example.c",
            "user@example.c0m",
            "a..b@example.com",
            ".user@example.com",
            "us er@example.com",
            "user@@example.com",
            "user@exa_mple.com",
        ] {
            assert!(!is_valid_email(input), "{} should be invalid", input);
        }
    }

    #[test]
    fn test_custom_sync_validator_replaces_builtin() {
        let validator = EmailValidator::sync(|email| email.ends_with("@corp.test"));
        assert!(matches!(validator.check("anyone@corp.test"), Validation::Ready(true)));
        assert!(matches!(validator.check("user@example.com"), Validation::Ready(false)));
    }

    #[tokio::test]
    async fn test_async_validator_resolves_later() {
        let validator = EmailValidator::from_async(|email: String| async move { email.len() > 3 });
        match validator.check("abcd") {
            Validation::Pending(fut) => assert!(fut.await),
            Validation::Ready(_) => panic!("async validator answered synchronously"),
        }
    }

    #[test]
    fn test_validator_equality_is_identity() {
        let a = EmailValidator::sync(|_| true);
        let b = EmailValidator::sync(|_| true);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(EmailValidator::Builtin, EmailValidator::default());
    }
}
