//! Error types for the payroll calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Errors only arise at the configuration boundary: the calculation
//! functions themselves are total over well-formed input and return plain
//! values, so malformed statutory data must be rejected here before it
//! ever reaches the engine.

use thiserror::Error;

/// The main error type for the payroll calculation engine.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/statutory.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/statutory.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The tax band schedule violates a structural invariant.
    #[error("Invalid tax band schedule: {message}")]
    InvalidTaxBands {
        /// A description of the violated invariant.
        message: String,
    },

    /// A statutory value is outside its permitted range.
    #[error("Invalid statutory value '{field}': {message}")]
    InvalidStatutoryValue {
        /// The field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/statutory.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/statutory.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_tax_bands_displays_message() {
        let error = EngineError::InvalidTaxBands {
            message: "no unbounded top band".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid tax band schedule: no unbounded top band"
        );
    }

    #[test]
    fn test_invalid_statutory_value_displays_field_and_message() {
        let error = EngineError::InvalidStatutoryValue {
            field: "pension.rate".to_string(),
            message: "must be between 0 and 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid statutory value 'pension.rate': must be between 0 and 1"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
