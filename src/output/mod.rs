pub mod formatter;

pub use formatter::Formatter;

use colored::*;

use crate::api::ApiError;

/// Render an API failure for the terminal
pub fn format_failure(error: &ApiError) -> String {
    match error.message() {
        Some(message) => format!("{} {}: {}", "❌".red(), error.kind().to_string().red(), message),
        None => format!("{} {}", "❌".red(), error.kind().to_string().red()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiErrorKind;

    #[test]
    fn test_format_failure() {
        colored::control::set_override(false);
        let error = ApiError::from_message(Some("Specified Spotlight couldn't be found."));
        assert_eq!(
            format_failure(&error),
            "❌ SpotlightNotFound: Specified Spotlight couldn't be found."
        );

        let error = ApiError::new(ApiErrorKind::UserNotFound, None);
        assert_eq!(format_failure(&error), "❌ UserNotFound");
    }
}
