//! Client-side input validation
//!
//! The backend rejects contact forms with a 400 when a field is empty, the
//! email is malformed, or the message is shorter than ten characters. These
//! checks mirror those rules so a form can be rejected before it is sent.
//! Like the backend, a whitespace-only field counts as present.
//! Validation is opt-in: [`crate::Client::submit_contact`] posts whatever it
//! is given.
//!
//! # Examples
//!
//! ```rust
//! use senwork::types::ContactForm;
//!
//! let form = ContactForm::new("张三", "zhang@example.com", "咨询", "想了解一下后端开发服务");
//! assert!(form.validate().is_ok());
//!
//! let short = ContactForm::new("张三", "zhang@example.com", "咨询", "你好");
//! assert!(short.validate().is_err());
//! ```

use crate::error::{Error, Result};
use crate::types::ContactForm;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Minimum message length, in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

/// Validate a contact form before sending it.
///
/// # Errors
///
/// Returns `Error::InvalidRequest` naming the first rule the form breaks.
pub fn validate_contact_form(form: &ContactForm) -> Result<()> {
    debug!(
        name_len = form.name.len(),
        subject_len = form.subject.len(),
        message_len = form.message.len(),
        "Validating contact form"
    );

    for (field, value) in [
        ("name", &form.name),
        ("email", &form.email),
        ("subject", &form.subject),
        ("message", &form.message),
    ] {
        if value.is_empty() {
            return Err(Error::InvalidRequest(format!("{field} is required")));
        }
    }

    if !EMAIL_PATTERN.is_match(&form.email) {
        return Err(Error::InvalidRequest(format!(
            "'{}' is not a valid email address",
            form.email
        )));
    }

    let message_chars = form.message.chars().count();
    if message_chars < MIN_MESSAGE_CHARS {
        return Err(Error::InvalidRequest(format!(
            "message must be at least {MIN_MESSAGE_CHARS} characters, got {message_chars}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn form() -> ContactForm {
        ContactForm::new(
            "张三",
            "zhang@example.com",
            "咨询",
            "这是一条足够长的测试消息内容",
        )
    }

    #[test]
    fn test_valid_form() {
        assert!(validate_contact_form(&form()).is_ok());
    }

    #[rstest]
    #[case("name")]
    #[case("email")]
    #[case("subject")]
    #[case("message")]
    fn test_empty_fields_are_rejected(#[case] field: &str) {
        let mut form = form();
        match field {
            "name" => form.name.clear(),
            "email" => form.email.clear(),
            "subject" => form.subject.clear(),
            _ => form.message.clear(),
        }

        let err = validate_contact_form(&form).unwrap_err();
        assert_eq!(err.to_string(), format!("Invalid request: {field} is required"));
    }

    #[test]
    fn test_whitespace_fields_count_as_present() {
        let mut form = form();
        form.name = "  ".to_string();
        form.subject = "\t".to_string();
        assert!(validate_contact_form(&form).is_ok());

        // Ten spaces meet the minimum length
        form.message = " ".repeat(MIN_MESSAGE_CHARS);
        assert!(validate_contact_form(&form).is_ok());
    }

    #[rstest]
    #[case("plainaddress")]
    #[case("@example.com")]
    #[case("zhang@")]
    #[case("zhang@example")]
    #[case("zh ang@example.com")]
    #[case(" zhang@example.com")]
    fn test_malformed_emails_are_rejected(#[case] email: &str) {
        let mut form = form();
        form.email = email.to_string();
        assert!(matches!(
            validate_contact_form(&form),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_message_length_counts_characters() {
        let mut form = form();
        // Eight CJK characters are 24 bytes but still too short
        form.message = "这是一条测试消息".to_string();
        assert!(validate_contact_form(&form).is_err());

        form.message = "这是一条测试消息，谢谢".to_string();
        assert!(validate_contact_form(&form).is_ok());
    }
}
