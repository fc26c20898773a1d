use crate::error::{MailerError, Result};
use crate::tools::log_message_and_map;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use std::time::Duration;

pub fn build_client(verify_ssl: bool, timeout: Option<Duration>) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut builder = reqwest::ClientBuilder::new().default_headers(headers);
    if !verify_ssl {
        builder = builder.danger_accept_invalid_certs(true);
    }
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder.build().map_err(log_message_and_map(
        "Can't build HTTP client.",
        MailerError::CantCreateClient,
    ))
}
