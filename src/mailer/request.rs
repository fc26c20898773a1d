use crate::email::Recipient;
use serde::Serialize;

/// Body of `POST send_transactional`. Field names are the wire keys.
#[derive(Debug, Serialize)]
pub(crate) struct TransactionalEmailRequest<'a> {
    pub users: &'a [Recipient],
    pub purpose: &'a str,
    pub site: &'a str,
    pub subject: &'a str,
    pub html_body: &'a str,
    pub txt_body: &'a str,
    pub sender_email: &'a str,
    pub sender_name: &'a str,
}

/// Body of `POST subscription`.
#[derive(Debug, Serialize)]
pub(crate) struct SubscriptionRequest<'a> {
    pub email: &'a str,
    pub subscription_list: &'a str,
    pub send_confirmation: bool,
}
