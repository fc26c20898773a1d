use std::fmt::Debug;

use log::error;

pub mod web;

pub fn log_error_and_map<E: Debug, T>(map: impl FnOnce(E) -> T) -> impl FnOnce(E) -> T {
    |e| {
        error!("{e:#?}");
        map(e)
    }
}

pub fn log_message_and_map<E: Debug, T>(
    message: &str,
    map: impl FnOnce(E) -> T,
) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        map(e)
    }
}

#[cfg(test)]
mod tests {
    use crate::tools::{log_error_and_map, log_message_and_map};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn should_log_error_and_return_mapped_value() {
        init();

        let result = log_error_and_map(|code: u16| format!("mapped {code}"))(404);

        assert_eq!("mapped 404", result);
    }

    #[test]
    fn should_log_message_and_return_mapped_value() {
        init();

        let result = log_message_and_map("This is a test message", |code: u16| {
            format!("mapped {code}")
        })(404);

        assert_eq!("mapped 404", result);
    }
}
