//! Built-in validation rules.
//!
//! Each rule is a variant of the [`Validator`] enum, and evaluation
//! dispatches by matching on the variant. Rules are parametrized by their
//! variant payload (e.g. the minimum length) and are deterministic given the
//! same `(value, label)` pair; they hold no state and perform no I/O.
//!
//! The [`Validator::Custom`] variant accepts a caller-supplied predicate for
//! rules the built-in set does not cover.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::outcome::ValidationOutcome;

/// The symbol set accepted by the password rule's special-character stage.
pub const PASSWORD_SYMBOLS: &str = "~`!@#$%^&*()_-+={[}]|\\:;\"'<,>.?/";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").expect("valid regex")
});

/// A single validation rule attached to a field.
///
/// Validators run in the order they are attached to a field. Length-based
/// rules count Unicode scalar values, not bytes.
///
/// # Examples
///
/// ```
/// use formwork_core::Validator;
///
/// let rule = Validator::MinLength(3);
/// assert!(rule.validate("abc", "Username").is_valid());
/// assert_eq!(
///     rule.validate("ab", "Username").message(),
///     Some("Username is too short"),
/// );
/// ```
#[derive(Debug, Clone)]
pub enum Validator {
    /// The value must be non-blank (non-empty after trimming whitespace).
    Required,
    /// The value must contain at least this many characters.
    MinLength(usize),
    /// The value must contain at most this many characters.
    MaxLength(usize),
    /// The value must look like an email address.
    Email,
    /// The value must be exactly ten characters long.
    PhoneNumber,
    /// Staged password-strength rule; see [`Validator::validate`].
    Password,
    /// A caller-supplied rule.
    Custom(CustomValidator),
}

impl Validator {
    /// Evaluates this rule against a field value.
    ///
    /// `label` is interpolated into the error messages of the labeled rules
    /// (`Required`, `MinLength`, ...). The `Password` rule ignores it and
    /// checks its stages in a fixed priority order, reporting only the first
    /// failing stage: blank, missing capital letter, missing small letter,
    /// missing digit, missing symbol, then length.
    pub fn validate(&self, value: &str, label: &str) -> ValidationOutcome {
        match self {
            Self::Required => {
                if value.trim().is_empty() {
                    ValidationOutcome::error(format!("{label} cannot be empty"))
                } else {
                    ValidationOutcome::valid(value)
                }
            }
            Self::MinLength(min) => {
                if value.chars().count() < *min {
                    ValidationOutcome::error(format!("{label} is too short"))
                } else {
                    ValidationOutcome::valid(value)
                }
            }
            Self::MaxLength(max) => {
                if value.chars().count() > *max {
                    ValidationOutcome::error(format!("{label} is too long"))
                } else {
                    ValidationOutcome::valid(value)
                }
            }
            Self::Email => {
                if EMAIL_RE.is_match(value) {
                    ValidationOutcome::valid(value)
                } else {
                    ValidationOutcome::error(format!("{label} is not a valid email"))
                }
            }
            Self::PhoneNumber => {
                if value.chars().count() == 10 {
                    ValidationOutcome::valid(value)
                } else {
                    ValidationOutcome::error(format!("{label} is not a valid phone number"))
                }
            }
            Self::Password => validate_password(value),
            Self::Custom(custom) => custom.validate(value, label),
        }
    }

    /// Returns a human-readable name for this rule.
    pub fn name(&self) -> &str {
        match self {
            Self::Required => "Required",
            Self::MinLength(_) => "MinLength",
            Self::MaxLength(_) => "MaxLength",
            Self::Email => "Email",
            Self::PhoneNumber => "PhoneNumber",
            Self::Password => "Password",
            Self::Custom(custom) => custom.name(),
        }
    }

    /// Creates a custom rule from a boolean predicate and a fixed message.
    pub fn predicate(
        name: impl Into<String>,
        check: impl Fn(&str) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        Self::Custom(CustomValidator::from_predicate(name, check, message))
    }
}

fn validate_password(value: &str) -> ValidationOutcome {
    if value.trim().is_empty() {
        return ValidationOutcome::error("Password cannot be empty");
    }

    let mut has_capital = false;
    let mut has_small = false;
    let mut has_digit = false;
    let mut has_symbol = false;

    for ch in value.chars() {
        if ch.is_ascii_uppercase() {
            has_capital = true;
        }
        if ch.is_ascii_lowercase() {
            has_small = true;
        }
        if ch.is_ascii_digit() {
            has_digit = true;
        }
        if PASSWORD_SYMBOLS.contains(ch) {
            has_symbol = true;
        }
    }

    if !has_capital {
        ValidationOutcome::error("Password must contain a capital letter, A-Z")
    } else if !has_small {
        ValidationOutcome::error("Password must contain a small letter, a-z")
    } else if !has_digit {
        ValidationOutcome::error("Password must contain a number, 0-9")
    } else if !has_symbol {
        ValidationOutcome::error(format!(
            "Password must contain a special character, {PASSWORD_SYMBOLS}"
        ))
    } else if value.chars().count() < 8 {
        ValidationOutcome::error("Password must be longer than 8 characters")
    } else {
        ValidationOutcome::valid(value)
    }
}

/// The function type backing a [`CustomValidator`].
pub type CustomFn = Arc<dyn Fn(&str, &str) -> ValidationOutcome + Send + Sync>;

/// A named, caller-supplied validation rule.
///
/// The closure receives `(value, label)` and must be deterministic and
/// side-effect free, like the built-in rules.
#[derive(Clone)]
pub struct CustomValidator {
    name: String,
    check: CustomFn,
}

impl CustomValidator {
    /// Creates a custom rule from a closure producing a full outcome.
    pub fn new(
        name: impl Into<String>,
        check: impl Fn(&str, &str) -> ValidationOutcome + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            check: Arc::new(check),
        }
    }

    /// Creates a custom rule from a boolean predicate and a fixed message.
    pub fn from_predicate(
        name: impl Into<String>,
        check: impl Fn(&str) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        let message = message.into();
        Self::new(name, move |value, _label| {
            if check(value) {
                ValidationOutcome::valid(value)
            } else {
                ValidationOutcome::error(message.clone())
            }
        })
    }

    /// Evaluates this rule against a field value.
    pub fn validate(&self, value: &str, label: &str) -> ValidationOutcome {
        (self.check)(value, label)
    }

    /// Returns the rule's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for CustomValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomValidator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
