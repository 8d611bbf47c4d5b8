//! Contact field validation
//!
//! name: non-empty, email: `local@domain.tld` shape, phone: exactly 10 ASCII digits

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

/// Email shape: non-whitespace, `@`, non-whitespace, `.`, non-whitespace
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("invalid email regex"));

/// Exactly ten ASCII digits (`\d` would also accept non-ASCII digits)
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("invalid phone regex"));

/// Validated contact name (non-empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a contact name. Only the empty string is rejected.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated email address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create an email address, checking the `local@domain.tld` shape.
    ///
    /// # Example
    /// ```
    /// use contactbook_server::models::EmailAddress;
    ///
    /// assert!(EmailAddress::new("ann@x.com").is_ok());
    /// assert!(EmailAddress::new("bad").is_err());
    /// assert!(EmailAddress::new("ann@localhost").is_err());  // no dot after @
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if !EMAIL_RE.is_match(s) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must look like local@domain.tld",
            });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated phone number (10 digits, no formatting)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a phone number.
    ///
    /// # Example
    /// ```
    /// use contactbook_server::models::PhoneNumber;
    ///
    /// assert!(PhoneNumber::new("1234567890").is_ok());
    /// assert!(PhoneNumber::new("123-456-7890").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if !PHONE_RE.is_match(s) {
            return Err(ValidationError::InvalidFormat {
                field: "phone",
                reason: "must be exactly 10 digits",
            });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A contact that passed validation and is ready to insert.
///
/// The repository only accepts this type, so nothing unvalidated
/// reaches the `contacts` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: ContactName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
}

impl NewContact {
    /// Validate all three fields, reporting the first failure.
    pub fn new(name: &str, email: &str, phone: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            email: EmailAddress::new(email)?,
            phone: PhoneNumber::new(phone)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_contact() {
        let contact = NewContact::new("Ann", "ann@x.com", "1234567890").unwrap();
        assert_eq!(contact.name.as_str(), "Ann");
        assert_eq!(contact.email.as_str(), "ann@x.com");
        assert_eq!(contact.phone.as_str(), "1234567890");
    }

    #[test]
    fn rejects_empty_name() {
        let err = NewContact::new("", "ann@x.com", "1234567890").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "name" });
    }

    #[test]
    fn whitespace_name_is_not_empty() {
        assert!(ContactName::new(" ").is_ok());
    }

    #[test]
    fn valid_emails() {
        assert!(EmailAddress::new("a@b.c").is_ok());
        assert!(EmailAddress::new("first.last@sub.example.org").is_ok());
        assert!(EmailAddress::new("x+tag@mail.co.uk").is_ok());
    }

    #[test]
    fn rejects_bad_emails() {
        for email in ["", "bad", "ann@", "@x.com", "ann@x", "ann x@y.com", "ann@x.", "ann@.com "] {
            let err = EmailAddress::new(email).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidFormat { field: "email", .. }),
                "accepted {email:?}"
            );
        }
    }

    #[test]
    fn rejects_bad_phones() {
        for phone in ["", "123456789", "12345678901", "12345abcde", " 1234567890", "123 456 7890"] {
            let err = PhoneNumber::new(phone).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidFormat { field: "phone", .. }),
                "accepted {phone:?}"
            );
        }
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // Arabic-Indic digits
        assert!(PhoneNumber::new("٠١٢٣٤٥٦٧٨٩").is_err());
    }

    #[test]
    fn reports_first_invalid_field() {
        let err = NewContact::new("Ann", "bad", "123").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { field: "email", .. }));
    }
}
