//! Result type alias for PrenaTrack

use super::errors::PrenatalError;

/// Result type alias for PrenaTrack operations
///
/// # Examples
///
/// ```
/// use prenatrack::domain::result::Result;
/// use prenatrack::domain::errors::PrenatalError;
///
/// fn parse_week(raw: &str) -> Result<u32> {
///     raw.trim()
///         .parse()
///         .map_err(|_| PrenatalError::invalid_input("utz_weeks", raw))
/// }
///
/// assert_eq!(parse_week(" 12 ").unwrap(), 12);
/// assert!(parse_week("twelve").is_err());
/// ```
pub type Result<T> = std::result::Result<T, PrenatalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(PrenatalError::Validation("test error".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
