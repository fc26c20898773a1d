use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

/// Basic-auth credentials for the mailer API.
#[derive(Serialize, Deserialize, Getters, PartialEq, Clone, Default)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Credentials {{username={}, password=MASKED}}",
            self.username
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_credentials() {
        let credentials = Credentials::new("login".to_owned(), "password".to_owned());
        assert_eq!(
            "Credentials {username=login, password=MASKED}",
            format!("{credentials:?}")
        );
    }
}
