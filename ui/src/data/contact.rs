use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn key(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    /// Shown under the form when this field is rejected.
    pub fn problem(&self) -> &'static str {
        match self {
            ContactField::Name => "يرجى إدخال الاسم الكامل",
            ContactField::Email => "يرجى إدخال بريد إلكتروني صحيح",
            ContactField::Message => "يرجى كتابة رسالتك",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
}

impl ContactMessage {
    /// Checks fields in form order and reports the first bad one.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation { field: ContactField::Name });
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(Error::Validation { field: ContactField::Email });
        }
        if self.message.trim().is_empty() {
            return Err(Error::Validation { field: ContactField::Message });
        }
        Ok(())
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "سارة".into(),
            email: "sara@example.com".into(),
            phone: None,
            message: "أريد حجز حصة".into(),
        }
    }

    fn rejected(msg: &ContactMessage) -> Option<ContactField> {
        match msg.validate() {
            Err(Error::Validation { field }) => Some(field),
            _ => None,
        }
    }

    #[test]
    fn complete_message_is_valid() {
        assert!(message().validate().is_ok());
    }

    #[test]
    fn blank_name_is_rejected_first() {
        let msg = ContactMessage {
            name: "   ".into(),
            email: "nope".into(),
            ..message()
        };
        assert_eq!(rejected(&msg), Some(ContactField::Name));
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["", "sara", "@example.com", "sara@", "sara@example", "sara@.com", "sara@example.", "a@b@c.com", "sa ra@example.com"] {
            let msg = ContactMessage { email: email.into(), ..message() };
            assert_eq!(rejected(&msg), Some(ContactField::Email), "accepted {email:?}");
        }
    }

    #[test]
    fn surrounding_whitespace_in_email_is_tolerated() {
        let msg = ContactMessage { email: "  sara@example.com ".into(), ..message() };
        assert!(msg.validate().is_ok());
    }

    #[test]
    fn blank_message_is_rejected() {
        let msg = ContactMessage { message: "\n".into(), ..message() };
        assert_eq!(rejected(&msg), Some(ContactField::Message));
    }

    #[test]
    fn phone_is_optional() {
        let msg = ContactMessage { phone: Some(String::new()), ..message() };
        assert!(msg.validate().is_ok());
    }
}
