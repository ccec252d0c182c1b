use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        && !s.chars().any(char::is_whitespace)
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField("Full name"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingField("Email address"));
        }
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingField("Message"));
        }
        Ok(())
    }

    /// There is no delivery endpoint yet; a valid submission is logged.
    pub fn submit(&self) -> Result<(), ContactError> {
        self.validate()?;
        match serde_json::to_string(self) {
            Ok(payload) => log::info!("contact form submitted: {payload}"),
            Err(e) => log::warn!("couldn't serialize contact form: {e}"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello!".to_string(),
        }
    }

    #[test]
    fn test_binding_by_field_name() {
        let mut form = ContactForm::default();
        for (name, value) in [("name", "Ada"), ("email", "a@b.co"), ("message", "hi")] {
            let field = ContactField::from_name(name).expect("known field");
            form.set(field, value.to_string());
        }
        assert_eq!(form.name, "Ada");
        assert_eq!(form.email, "a@b.co");
        assert_eq!(form.message, "hi");
        assert!(ContactField::from_name("phone").is_none());
    }

    #[test]
    fn test_validation() {
        assert_eq!(filled().validate(), Ok(()));

        let mut form = filled();
        form.name = "   ".to_string();
        assert_eq!(form.validate(), Err(ContactError::MissingField("Full name")));

        let mut form = filled();
        form.email = "ada@example".to_string();
        assert_eq!(
            form.validate(),
            Err(ContactError::InvalidEmail("ada@example".to_string()))
        );

        let mut form = filled();
        form.message.clear();
        assert_eq!(form.submit(), Err(ContactError::MissingField("Message")));
    }

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@@b.co"));
        assert!(!looks_like_email("a b@c.de"));
        assert!(!looks_like_email("a@.de"));
    }
}
