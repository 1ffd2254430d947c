use super::models::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordViolation {
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSymbol,
    LengthOutOfRange,
}

impl std::fmt::Display for PasswordViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PasswordViolation::MissingUppercase => {
                write!(f, "Password must contain at least one upper case character")
            }
            PasswordViolation::MissingLowercase => {
                write!(f, "Password must contain at least one lower case character")
            }
            PasswordViolation::MissingDigit => {
                write!(f, "Password must contain at least one number")
            }
            PasswordViolation::MissingSymbol => {
                write!(
                    f,
                    "Password must contain at least one special character (e.g. $, -, #, etc.)"
                )
            }
            PasswordViolation::LengthOutOfRange => {
                write!(f, "Password should be of 8 - 16 characters long!")
            }
        }
    }
}

impl std::error::Error for PasswordViolation {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    EmptyRequiredField(Field),
    PasswordConditionsNotMet,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::EmptyRequiredField(field) => {
                write!(f, "{} cannot be empty", field.label())
            }
            DomainError::PasswordConditionsNotMet => {
                write!(f, "Password conditions not met")
            }
        }
    }
}

impl std::error::Error for DomainError {}

pub type DomainResult<T> = Result<T, DomainError>;
