//! Validation services for the registration form.
//!
//! This module provides the client-side checks that gate a submission:
//! a blank-field predicate for required fields and a tiered password
//! policy with per-rule feedback messages.

use regex::Regex;

use super::errors::{DomainError, DomainResult, PasswordViolation};
use super::models::{Field, RegistrationForm};

/// Minimum password length, inclusive.
pub const PASSWORD_MIN_LEN: usize = 8;
/// Maximum password length, inclusive.
pub const PASSWORD_MAX_LEN: usize = 16;

/// Returns true when a value is missing for form purposes: empty or
/// whitespace only.
///
/// # Examples
///
/// ```
/// use onyx_signup::domain::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank("   "));
/// assert!(!is_blank("HAPPY_GUY"));
/// ```
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Checks passwords against the signup policy.
///
/// The policy has five rules, checked in a fixed order so the user is
/// always told about the first unmet one: an uppercase letter, a
/// lowercase letter, a digit, a symbol, and a length of 8 to 16
/// characters.
///
/// # Examples
///
/// ```
/// use onyx_signup::domain::PasswordValidator;
///
/// let validator = PasswordValidator::new();
/// assert!(validator.check("Abcd123$#").is_ok());
/// assert!(validator.check("abcd123$#").is_err());
/// ```
#[derive(Debug)]
pub struct PasswordValidator {
    uppercase: Regex,
    lowercase: Regex,
    digit: Regex,
    symbol: Regex,
}

impl PasswordValidator {
    pub fn new() -> Self {
        PasswordValidator {
            uppercase: Regex::new(r"[A-Z]").expect("uppercase regex"),
            lowercase: Regex::new(r"[a-z]").expect("lowercase regex"),
            digit: Regex::new(r"\d").expect("digit regex"),
            symbol: Regex::new(r#"[`!@#$%^&*()_+\-=\[\]{};':"\\|,.<>/?~]"#)
                .expect("symbol regex"),
        }
    }

    /// Evaluates the policy rules in order and reports the first
    /// violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use onyx_signup::domain::{PasswordValidator, PasswordViolation};
    ///
    /// let validator = PasswordValidator::new();
    /// assert_eq!(validator.check("Abcd123$#"), Ok(()));
    /// // Short and missing a digit: the digit rule reports first.
    /// assert_eq!(validator.check("Abc"), Err(PasswordViolation::MissingDigit));
    /// ```
    pub fn check(&self, password: &str) -> Result<(), PasswordViolation> {
        if !self.uppercase.is_match(password) {
            return Err(PasswordViolation::MissingUppercase);
        }
        if !self.lowercase.is_match(password) {
            return Err(PasswordViolation::MissingLowercase);
        }
        if !self.digit.is_match(password) {
            return Err(PasswordViolation::MissingDigit);
        }
        if !self.symbol.is_match(password) {
            return Err(PasswordViolation::MissingSymbol);
        }
        let length = password.chars().count();
        if length < PASSWORD_MIN_LEN || length > PASSWORD_MAX_LEN {
            return Err(PasswordViolation::LengthOutOfRange);
        }
        Ok(())
    }

    /// Inline feedback for the password field: the first unmet rule's
    /// message, or None once the password satisfies the policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use onyx_signup::domain::PasswordValidator;
    ///
    /// let validator = PasswordValidator::new();
    /// assert_eq!(
    ///     validator.feedback("abc").as_deref(),
    ///     Some("Password must contain at least one upper case character")
    /// );
    /// assert_eq!(validator.feedback("Abcd123$#"), None);
    /// ```
    pub fn feedback(&self, password: &str) -> Option<String> {
        self.check(password).err().map(|v| v.to_string())
    }

    pub fn meets_policy(&self, password: &str) -> bool {
        self.check(password).is_ok()
    }
}

impl Default for PasswordValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates a whole form before submission.
///
/// # Examples
///
/// ```
/// use onyx_signup::domain::{FormValidator, PasswordValidator, RegistrationForm};
///
/// let form = RegistrationForm {
///     screen_name: "HAPPY_GUY".to_string(),
///     email: "hap@hap.com".to_string(),
///     password: "Abcd123$#".to_string(),
///     ..RegistrationForm::default()
/// };
/// let passwords = PasswordValidator::new();
/// assert!(FormValidator::new(&form, &passwords).validate_submission().is_ok());
/// ```
pub struct FormValidator<'a> {
    form: &'a RegistrationForm,
    passwords: &'a PasswordValidator,
}

impl<'a> FormValidator<'a> {
    pub fn new(form: &'a RegistrationForm, passwords: &'a PasswordValidator) -> Self {
        FormValidator { form, passwords }
    }

    /// Runs the submission gate: required fields first, then the
    /// password policy. The first failure wins.
    pub fn validate_submission(&self) -> DomainResult<()> {
        if is_blank(&self.form.screen_name) {
            return Err(DomainError::EmptyRequiredField(Field::ScreenName));
        }
        if is_blank(&self.form.email) {
            return Err(DomainError::EmptyRequiredField(Field::Email));
        }
        if !self.passwords.meets_policy(&self.form.password) {
            return Err(DomainError::PasswordConditionsNotMet);
        }
        Ok(())
    }
}
