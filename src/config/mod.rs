//! Environment configuration helpers.

/// Current deployment environment, from the `ENVIRONMENT` variable.
///
/// Defaults to `sandbox` when unset so local runs get readable logs.
pub fn get_environment() -> String {
    std::env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}
