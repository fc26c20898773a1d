//! Client for a transactional-mailer HTTP API.
//!
//! The remote service does the actual delivery; this crate only speaks the
//! client side of the contract: build an [`Email`], hand it to a [`Mailer`]
//! and get back the decoded JSON answer of the service.
//!
//! ```no_run
//! use mailer_client::{Email, Mailer, MailerConfig, Recipient};
//!
//! # async fn example() -> mailer_client::Result<()> {
//! let config = MailerConfig::new(
//!     "https://mailer-api.example.net/api/v1/".to_owned(),
//!     "my-site".to_owned(),
//!     "noreply@example.net".to_owned(),
//!     "Example".to_owned(),
//! );
//! let mailer = Mailer::new(config)?;
//!
//! let mut email = Email::new();
//! email
//!     .recipients
//!     .push(Recipient::new("Bob".to_owned(), "bob@example.net".to_owned()));
//! email.subject = "Welcome!".to_owned();
//! email.html_body = "<p>Welcome aboard.</p>".to_owned();
//!
//! let response = mailer.send(&email, "welcome email").await?;
//! println!("{response}");
//! # Ok(())
//! # }
//! ```
//!
//! Failures come in two distinct kinds which are never unified: an answer of
//! the service with a non-success status is a [`MailerError::Api`] carrying
//! the decoded body, while a round trip that never yielded a usable response
//! (DNS, connection, TLS, timeout) is a [`MailerError::Transport`] wrapping
//! the underlying HTTP error.

pub mod email;
pub mod error;
pub mod mailer;

mod tools;

#[cfg(feature = "demo")]
pub mod demo_mailer_server;

pub use email::{Email, Recipient};
pub use error::{ApiError, MailerError, Result};
pub use mailer::Mailer;
pub use mailer::config::MailerConfig;
pub use mailer::credentials::Credentials;
