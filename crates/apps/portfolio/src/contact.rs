//! Contact form validation and `mailto:` hand-off.

use thiserror::Error;

pub const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactFormError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter a valid e-mail address.")]
    InvalidEmail,
    #[error("Your message should be at least {min} characters.")]
    MessageTooShort { min: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Checks fields in display order and reports the first problem.
    pub fn validate(&self) -> Result<(), ContactFormError> {
        if self.name.trim().is_empty() {
            return Err(ContactFormError::MissingName);
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactFormError::InvalidEmail);
        }
        if self.message.trim().chars().count() < MIN_MESSAGE_CHARS {
            return Err(ContactFormError::MessageTooShort {
                min: MIN_MESSAGE_CHARS,
            });
        }
        Ok(())
    }

    /// Builds a `mailto:` URL addressed to `recipient` after validating the form.
    pub fn mailto_url(&self, recipient: &str) -> Result<String, ContactFormError> {
        self.validate()?;
        let name = self.name.trim();
        let subject = format!("Portfolio contact from {name}");
        let body = format!(
            "{}\n\n- {} <{}>",
            self.message.trim(),
            name,
            self.email.trim()
        );
        Ok(format!(
            "mailto:{recipient}?subject={}&body={}",
            percent_encode(&subject),
            percent_encode(&body)
        ))
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < domain.len(),
        None => false,
    }
}

/// RFC 3986 percent-encoding of everything outside the unreserved set.
fn percent_encode(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn first_invalid_field_is_reported() {
        assert_eq!(
            form("  ", "bad", "short").validate(),
            Err(ContactFormError::MissingName)
        );
        assert_eq!(
            form("Ada", "ada.example.com", "long enough message").validate(),
            Err(ContactFormError::InvalidEmail)
        );
        assert_eq!(
            form("Ada", "ada@example.com", "too short").validate(),
            Err(ContactFormError::MessageTooShort { min: 10 })
        );
        assert_eq!(form("Ada", "ada@example.com", "exactly 10").validate(), Ok(()));
    }

    #[test]
    fn email_needs_a_dot_after_the_at_sign() {
        assert!(is_plausible_email("a@b.co"));
        assert!(is_plausible_email("first.last@sub.example.org"));
        assert!(!is_plausible_email("a.b@localhost"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("a@.com"));
        assert!(!is_plausible_email("a@example."));
        assert!(!is_plausible_email("a@b@c.com"));
        assert!(!is_plausible_email("a b@c.com"));
    }

    #[test]
    fn mailto_url_percent_encodes_subject_and_body() {
        let url = form("Ada L", "ada@example.com", "Hi there & hello!")
            .mailto_url("me@site.dev")
            .expect("valid form");
        assert_eq!(
            url,
            "mailto:me@site.dev?subject=Portfolio%20contact%20from%20Ada%20L\
             &body=Hi%20there%20%26%20hello%21%0A%0A-%20Ada%20L%20%3Cada%40example.com%3E"
        );
    }

    #[test]
    fn mailto_url_rejects_invalid_forms() {
        let err = form("", "", "").mailto_url("me@site.dev").unwrap_err();
        assert_eq!(err.to_string(), "Please enter your name.");
    }

    #[test]
    fn non_ascii_is_encoded_per_utf8_byte() {
        assert_eq!(percent_encode("é"), "%C3%A9");
        assert_eq!(percent_encode("a-b_c.d~"), "a-b_c.d~");
    }
}
