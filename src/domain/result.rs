//! Result type alias for SA Requests

use super::errors::RequestsError;

/// Result type alias for SA Requests operations
///
/// # Examples
///
/// ```
/// use sa_requests::domain::result::Result;
/// use sa_requests::domain::errors::RequestsError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(RequestsError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, RequestsError>;
