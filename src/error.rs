use derive_getters::Getters;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

pub type Result<T, E = MailerError> = std::result::Result<T, E>;

/// Answer of the mailer API with a status outside {200, 201}.
///
/// Carries the parsed response body when there was one (an unparseable body
/// is tolerated and stored as `None`), the HTTP status and a composed
/// message of the form `Mailer returned an error: <status>`, followed by the
/// `detail` field of the body when the service supplied one.
#[derive(Debug, PartialEq, Error, Getters)]
#[error("API error: {message}")]
pub struct ApiError {
    response: Option<Value>,
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub(crate) fn new(response: Option<Value>, status: StatusCode) -> Self {
        let mut message = format!("Mailer returned an error: {}", status.as_u16());
        if let Some(detail) = response.as_ref().and_then(|body| body.get("detail")) {
            let detail = match detail.as_str() {
                Some(text) => text.to_owned(),
                None => detail.to_string(),
            };
            message.push(' ');
            message.push_str(&detail);
        }

        Self {
            response,
            status,
            message,
        }
    }
}

#[derive(Debug, Error)]
pub enum MailerError {
    /// The mailer API answered, but with an error status.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The round trip never yielded a usable response: connection refused,
    /// DNS or TLS failure, timeout, or a success body that couldn't be
    /// decoded. Distinct from [`MailerError::Api`], never unified with it.
    #[error("The request to the mailer API couldn't complete.")]
    Transport(#[source] reqwest::Error),
    /// The underlying HTTP client couldn't be created.
    #[error("HTTP client couldn't be created.")]
    CantCreateClient(#[source] reqwest::Error),
}
