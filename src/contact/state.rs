// Form state and lifecycle for the emergency contact dialog
use crate::config::constants::contact::{DEFAULT_PREFIX, MIN_CONTACT_LEN};
use thiserror::Error;

/// What the dialog produced. Created once, when the form reaches a terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactResult {
    pub contact_number: String,
    pub prefer_whatsapp: bool,
    pub cancelled: bool,
}

impl ContactResult {
    pub fn confirmed(contact_number: String, prefer_whatsapp: bool) -> Self {
        Self {
            contact_number,
            prefer_whatsapp,
            cancelled: false,
        }
    }

    pub fn cancelled() -> Self {
        Self {
            contact_number: String::new(),
            prefer_whatsapp: false,
            cancelled: true,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid phone number with at least {min} digits.")]
    TooShort { min: usize, actual: usize },
}

/// Trim the input and check it is long enough to be a phone number.
pub fn validate_contact(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    let actual = trimmed.chars().count();

    if actual < MIN_CONTACT_LEN {
        return Err(ValidationError::TooShort {
            min: MIN_CONTACT_LEN,
            actual,
        });
    }

    Ok(trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogPhase {
    Open,
    Closed(ContactResult),
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub contact_input: String,
    pub prefer_whatsapp: bool,
    /// Last rejected confirm, shown under the input until the text changes
    pub validation_error: Option<ValidationError>,
    phase: DialogPhase,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            contact_input: DEFAULT_PREFIX.to_string(),
            prefer_whatsapp: false,
            validation_error: None,
            phase: DialogPhase::Open,
        }
    }
}

impl ContactForm {
    pub fn phase(&self) -> &DialogPhase {
        &self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == DialogPhase::Open
    }

    /// Confirm action. Invalid input keeps the form open and returns the error.
    /// Ignored once the form is closed.
    pub fn confirm(&mut self) -> Result<(), ValidationError> {
        if !self.is_open() {
            return Ok(());
        }

        match validate_contact(&self.contact_input) {
            Ok(contact_number) => {
                self.validation_error = None;
                self.phase =
                    DialogPhase::Closed(ContactResult::confirmed(contact_number, self.prefer_whatsapp));
                Ok(())
            }
            Err(err) => {
                self.validation_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Cancel action. Ignored once the form is closed.
    pub fn cancel(&mut self) {
        if self.is_open() {
            self.phase = DialogPhase::Closed(ContactResult::cancelled());
        }
    }

    /// The window's close control behaves exactly like cancel.
    pub fn close_requested(&mut self) {
        self.cancel();
    }

    pub fn clear_validation_error(&mut self) {
        self.validation_error = None;
    }

    /// What the caller gets: the result on confirm, `None` for cancel, close,
    /// or a form that never finished.
    pub fn into_outcome(self) -> Option<ContactResult> {
        match self.phase {
            DialogPhase::Closed(result) if !result.cancelled => Some(result),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form() {
        let form = ContactForm::default();
        assert!(form.is_open());
        assert_eq!(form.contact_input, "+91 ");
        assert!(!form.prefer_whatsapp);
        assert!(form.validation_error.is_none());
    }

    #[test]
    fn test_validate_trims_whitespace() {
        assert_eq!(
            validate_contact("  +91 9876543210  "),
            Ok("+91 9876543210".to_string())
        );
    }

    #[test]
    fn test_validate_boundary() {
        assert!(validate_contact("123456789").is_err());
        assert_eq!(validate_contact("1234567890"), Ok("1234567890".to_string()));
        // Padding does not count towards the length
        assert!(validate_contact("   123456789   ").is_err());
    }

    #[test]
    fn test_validate_counts_characters_not_bytes() {
        // Ten characters, more than ten bytes
        assert!(validate_contact("९८७६५४३२१०").is_ok());
        assert!(validate_contact("९८७६५").is_err());
    }

    #[test]
    fn test_validation_error_message() {
        let err = validate_contact("12345").unwrap_err();
        assert_eq!(err, ValidationError::TooShort { min: 10, actual: 5 });
        assert_eq!(
            err.to_string(),
            "Please enter a valid phone number with at least 10 digits."
        );
    }

    #[test]
    fn test_cancelled_result_has_empty_contact() {
        let result = ContactResult::cancelled();
        assert!(result.cancelled);
        assert!(result.contact_number.is_empty());
    }

    #[test]
    fn test_clear_validation_error() {
        let mut form = ContactForm::default();
        assert!(form.confirm().is_err());
        assert!(form.validation_error.is_some());

        form.clear_validation_error();
        assert!(form.validation_error.is_none());
    }
}
