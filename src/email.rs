use serde::{Deserialize, Serialize};

/// One `{name, email}` pair of the `users` list of a transactional send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub name: String,
    pub email: String,
}

impl Recipient {
    pub fn new(name: String, email: String) -> Self {
        Self { name, email }
    }
}

/// An email to hand over to [`Mailer::send`](crate::Mailer::send).
///
/// Plain data holder: construct it, fill in the fields, send it once.
/// `txt_body` defaults to an empty string; when `sender_email`/`sender_name`
/// are left out, the client falls back to its configured default sender.
/// An empty recipients list is passed through as-is, the service is the one
/// validating it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Email {
    pub recipients: Vec<Recipient>,
    pub subject: String,
    pub html_body: String,
    pub txt_body: String,
    pub sender_email: Option<String>,
    pub sender_name: Option<String>,
}

impl Email {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_email_with_empty_txt_body() {
        let email = Email::new();

        assert_eq!("", email.txt_body);
        assert!(email.recipients.is_empty());
        assert_eq!(None, email.sender_email);
        assert_eq!(None, email.sender_name);
    }
}
