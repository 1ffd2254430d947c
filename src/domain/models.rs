use serde::{Deserialize, Serialize};

use super::services::is_blank;

/// Identifies one input field of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ScreenName,
    Email,
    Password,
    FirstName,
    MiddleName,
    LastName,
    Phone,
}

impl Field {
    /// All form fields in render order.
    pub const ALL: [Field; 7] = [
        Field::ScreenName,
        Field::Email,
        Field::Password,
        Field::FirstName,
        Field::MiddleName,
        Field::LastName,
        Field::Phone,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::ScreenName => "Screen Name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::FirstName => "First Name",
            Field::MiddleName => "Middle Name",
            Field::LastName => "Last Name",
            Field::Phone => "Phone number",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Field::ScreenName | Field::Email | Field::Password)
    }

    /// The phone field is a numeric input: only digits are accepted.
    pub fn digits_only(&self) -> bool {
        matches!(self, Field::Phone)
    }

    /// Masked fields render bullets instead of their value.
    pub fn is_masked(&self) -> bool {
        matches!(self, Field::Password)
    }
}

/// Form-state holder for the signup page. Values are kept exactly as
/// typed; normalization happens when the payload is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub screen_name: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub phone: String,
}

impl RegistrationForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::ScreenName => &self.screen_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::FirstName => &self.first_name,
            Field::MiddleName => &self.middle_name,
            Field::LastName => &self.last_name,
            Field::Phone => &self.phone,
        }
    }

    pub fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::ScreenName => self.screen_name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::FirstName => self.first_name = value,
            Field::MiddleName => self.middle_name = value,
            Field::LastName => self.last_name = value,
            Field::Phone => self.phone = value,
        }
    }

    /// Builds the wire payload, normalizing blank optional fields to the
    /// null marker the backend expects.
    pub fn to_payload(&self) -> RegistrationPayload {
        RegistrationPayload {
            screen_name: self.screen_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            first_name: optional(&self.first_name),
            middle_name: optional(&self.middle_name),
            last_name: optional(&self.last_name),
            phone: optional(&self.phone),
        }
    }
}

fn optional(value: &str) -> Option<String> {
    if is_blank(value) {
        None
    } else {
        Some(value.to_string())
    }
}

/// JSON body POSTed to the registration endpoint. Field names follow the
/// backend contract, not Rust conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    #[serde(rename = "screenName")]
    pub screen_name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "fname")]
    pub first_name: Option<String>,
    #[serde(rename = "mname")]
    pub middle_name: Option<String>,
    #[serde(rename = "lname")]
    pub last_name: Option<String>,
    pub phone: Option<String>,
}
