use crate::mailer::credentials::Credentials;
use derive_getters::Getters;
use std::time::Duration;

/// Connection configuration of a [`Mailer`](crate::Mailer).
///
/// Captured once at construction, never mutated afterward. [`new`] covers
/// the mandatory part; every optional capability has its own `with_*`
/// toggle.
///
/// [`new`]: MailerConfig::new
#[derive(Debug, Clone, Getters)]
pub struct MailerConfig {
    /// Root URL of the mailer API instance, e.g. `https://mailer-api.example.net/api/v1/`.
    api_root: String,
    /// Identifier of the site using the API.
    site: String,
    /// Default sent-from email, used when the caller supplies none.
    default_sender_email: String,
    /// Default sent-from name, used when the caller supplies none.
    default_sender_name: String,
    credentials: Option<Credentials>,
    subject_prefix: Option<String>,
    truncate_subject: bool,
    verify_ssl: bool,
    timeout: Option<Duration>,
}

impl MailerConfig {
    pub fn new(
        api_root: String,
        site: String,
        default_sender_email: String,
        default_sender_name: String,
    ) -> Self {
        Self {
            api_root,
            site,
            default_sender_email,
            default_sender_name,
            credentials: None,
            subject_prefix: None,
            truncate_subject: false,
            verify_ssl: true,
            timeout: None,
        }
    }

    /// Authenticate every request with HTTP basic auth.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Prefix every outgoing subject with `"<prefix>: "`.
    /// An empty prefix leaves subjects untouched.
    #[must_use]
    pub fn with_subject_prefix(mut self, prefix: String) -> Self {
        self.subject_prefix = Some(prefix);
        self
    }

    /// Truncate outgoing subjects to their first
    /// [`SUBJECT_MAX_LENGTH`](crate::mailer::SUBJECT_MAX_LENGTH) characters.
    #[must_use]
    pub fn with_subject_truncation(mut self) -> Self {
        self.truncate_subject = true;
        self
    }

    /// Skip TLS certificate verification for requests made by this client.
    /// Meant for staging instances with self-signed certificates.
    #[must_use]
    pub fn with_ssl_verification_disabled(mut self) -> Self {
        self.verify_ssl = false;
        self
    }

    /// Abort any request still running after `timeout`, surfacing it as a
    /// transport error. Without it, the transport's own behavior applies.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MailerConfig {
        MailerConfig::new(
            "https://mailer-api.example.net/api/v1/".to_owned(),
            "test-site".to_owned(),
            "noreply@example.net".to_owned(),
            "Test Sender".to_owned(),
        )
    }

    #[test]
    fn should_create_config_with_every_option_off() {
        let config = config();

        assert_eq!(&None, config.credentials());
        assert_eq!(&None, config.subject_prefix());
        assert!(!*config.truncate_subject());
        assert!(*config.verify_ssl());
        assert_eq!(&None, config.timeout());
    }

    #[test]
    fn should_enable_options_independently() {
        let config = config()
            .with_credentials(Credentials::new("login".to_owned(), "password".to_owned()))
            .with_subject_prefix("Site".to_owned())
            .with_subject_truncation()
            .with_ssl_verification_disabled()
            .with_timeout(Duration::from_secs(10));

        assert_eq!(
            &Some(Credentials::new("login".to_owned(), "password".to_owned())),
            config.credentials()
        );
        assert_eq!(&Some("Site".to_owned()), config.subject_prefix());
        assert!(*config.truncate_subject());
        assert!(!*config.verify_ssl());
        assert_eq!(&Some(Duration::from_secs(10)), config.timeout());
    }
}
