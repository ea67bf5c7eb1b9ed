//! The success/failure container returned by every endpoint.

use std::fmt;

use super::errors::{ApiError, ApiErrorKind};

/// Result of an osu! API request.
///
/// A request that reached the API and got a meaningful answer is either a
/// `Success` carrying the (possibly `null`) value or a `Failure` carrying the
/// classified [`ApiError`]. Transport and decoding problems are not
/// represented here; they surface as [`OsuError`](crate::error::OsuError).
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    Success(Option<T>),
    Failure(ApiError),
}

impl<T> ApiResult<T> {
    pub fn success(value: Option<T>) -> Self {
        Self::Success(value)
    }

    pub fn failure(error: ApiError) -> Self {
        Self::Failure(error)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The returned value.
    ///
    /// # Panics
    ///
    /// Panics if the result is a failure. Check [`is_success`](Self::is_success)
    /// or use [`ok`](Self::ok) / [`match_with`](Self::match_with) instead.
    #[track_caller]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => value.as_ref(),
            Self::Failure(error) => panic!("Cannot access the value of a failed ApiResult: {}", error),
        }
    }

    /// Owned variant of [`value`](Self::value).
    ///
    /// # Panics
    ///
    /// Panics if the result is a failure.
    #[track_caller]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic!("Cannot access the value of a failed ApiResult: {}", error),
        }
    }

    /// The value, or `None` on failure.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Run `on_success` or `on_failure` depending on the outcome.
    pub fn match_with<R>(
        self,
        on_success: impl FnOnce(Option<T>) -> R,
        on_failure: impl FnOnce(ApiError) -> R,
    ) -> R {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResult<U> {
        match self {
            Self::Success(value) => ApiResult::Success(value.map(f)),
            Self::Failure(error) => ApiResult::Failure(error),
        }
    }

    /// Replace a [`ApiErrorKind::Null`] error kind with `kind`.
    ///
    /// Successful results and failures of any other kind are returned
    /// unchanged, so applying the fallback twice is the same as applying it
    /// once.
    pub fn with_error_fallback(self, kind: ApiErrorKind) -> Self {
        match self {
            Self::Failure(error) => Self::Failure(error.with_fallback(kind)),
            success => success,
        }
    }

    pub(crate) fn with_prefix_kind(self, prefix: &str, kind: ApiErrorKind) -> Self {
        match self {
            Self::Failure(error) => Self::Failure(error.with_prefix_kind(prefix, kind)),
            success => success,
        }
    }
}

impl<T> From<ApiError> for ApiResult<T> {
    fn from(error: ApiError) -> Self {
        Self::Failure(error)
    }
}

impl<T: fmt::Debug> fmt::Display for ApiResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Success: {:?}", value),
            Self::Failure(error) => write!(f, "Failure: {}", error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> ApiResult<u32> {
        ApiResult::failure(ApiError::from_message(None))
    }

    #[test]
    fn test_success_and_failure_are_exclusive() {
        let ok = ApiResult::success(Some(5));
        assert!(ok.is_success());
        assert!(!ok.is_failure());
        assert_eq!(ok.value(), Some(&5));

        let failed = not_found();
        assert!(failed.is_failure());
        assert!(!failed.is_success());
        assert_eq!(failed.error().unwrap().kind(), ApiErrorKind::Null);
    }

    #[test]
    fn test_success_may_be_empty() {
        let ok: ApiResult<u32> = ApiResult::success(None);
        assert!(ok.is_success());
        assert!(ok.error().is_none());
        assert_eq!(ok.into_value(), None);
    }

    #[test]
    #[should_panic(expected = "Cannot access the value of a failed ApiResult")]
    fn test_value_of_failure_panics() {
        let failed = not_found();
        let _ = failed.value();
    }

    #[test]
    #[should_panic(expected = "Cannot access the value of a failed ApiResult")]
    fn test_into_value_of_failure_panics() {
        let _ = not_found().into_value();
    }

    #[test]
    fn test_match_with() {
        let described = ApiResult::success(Some(2)).match_with(
            |value| format!("value {}", value.unwrap_or_default()),
            |error| format!("error {}", error.kind()),
        );
        assert_eq!(described, "value 2");

        let described = not_found()
            .with_error_fallback(ApiErrorKind::UserNotFound)
            .match_with(|_| String::new(), |error| format!("error {}", error.kind()));
        assert_eq!(described, "error UserNotFound");
    }

    #[test]
    fn test_fallback_is_idempotent() {
        let once = not_found().with_error_fallback(ApiErrorKind::BeatmapNotFound);
        let twice = not_found()
            .with_error_fallback(ApiErrorKind::BeatmapNotFound)
            .with_error_fallback(ApiErrorKind::UserNotFound);

        assert_eq!(once, twice);
        assert_eq!(twice.error().unwrap().kind(), ApiErrorKind::BeatmapNotFound);
    }

    #[test]
    fn test_fallback_keeps_classified_kind() {
        let result: ApiResult<u32> =
            ApiResult::failure(ApiError::from_message(Some("Specified Spotlight couldn't be found.")));
        let result = result.with_error_fallback(ApiErrorKind::UserNotFound);
        assert_eq!(result.error().unwrap().kind(), ApiErrorKind::SpotlightNotFound);
    }

    #[test]
    fn test_fallback_leaves_success_untouched() {
        let result = ApiResult::success(Some(1)).with_error_fallback(ApiErrorKind::UserNotFound);
        assert_eq!(result, ApiResult::success(Some(1)));
    }

    #[test]
    fn test_into_result_and_map() {
        assert_eq!(ApiResult::success(Some(3)).map(|v| v * 2).into_result(), Ok(Some(6)));
        assert!(not_found().map(|v| v * 2).into_result().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ApiResult::success(Some(7)).to_string(), "Success: Some(7)");
        let failed: ApiResult<u32> = ApiError::from_message(Some("nope")).into();
        assert_eq!(failed.to_string(), "Failure: (Unknown) nope");
    }
}
