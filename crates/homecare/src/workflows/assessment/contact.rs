use std::fmt;

use serde::{Deserialize, Serialize};

/// Contact fields exactly as the visitor typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub zip: String,
}

/// Trimmed contact details that passed intake validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedContact {
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email: String,
    pub phone: String,
    pub zip: ZipCode,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("missing required contact fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("'{0}' is not a valid e-mail address")]
    InvalidEmail(String),
    #[error(transparent)]
    InvalidZip(#[from] ZipCodeError),
}

impl ContactDetails {
    /// First name, e-mail, phone and ZIP are required; last name is optional.
    pub fn validate(&self) -> Result<ValidatedContact, ContactError> {
        let first_name = self.first_name.trim();
        let email = self.email.trim();
        let phone = self.phone.trim();
        let zip = self.zip.trim();

        let missing: Vec<&'static str> = [
            ("first_name", first_name),
            ("email", email),
            ("phone", phone),
            ("zip", zip),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(ContactError::MissingFields(missing));
        }

        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }

        let last_name = Some(self.last_name.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        Ok(ValidatedContact {
            first_name: first_name.to_string(),
            last_name,
            email: email.to_string(),
            phone: phone.to_string(),
            zip: ZipCode::parse(zip)?,
        })
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Five-digit US ZIP code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZipCode(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid 5-digit ZIP code")]
pub struct ZipCodeError(pub String);

impl ZipCode {
    /// Accepts `12345` and ZIP+4 (`12345-6789`); the +4 suffix is dropped.
    pub fn parse(raw: &str) -> Result<Self, ZipCodeError> {
        let trimmed = raw.trim();
        let base = match trimmed.split_once('-') {
            Some((base, suffix))
                if suffix.len() == 4 && suffix.bytes().all(|byte| byte.is_ascii_digit()) =>
            {
                base
            }
            Some(_) => return Err(ZipCodeError(trimmed.to_string())),
            None => trimmed,
        };

        if base.len() == 5 && base.bytes().all(|byte| byte.is_ascii_digit()) {
            Ok(Self(base.to_string()))
        } else {
            Err(ZipCodeError(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ZipCode {
    type Error = ZipCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ZipCode> for String {
    fn from(value: ZipCode) -> Self {
        value.0
    }
}
