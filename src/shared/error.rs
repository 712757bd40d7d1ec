use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Lets scripts tell a missing product apart from a broken store or bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Document generated
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (store unreachable, malformed data, file I/O error, etc.)
    ApplicationError = 3,
    /// The requested product code does not exist in the product store
    ProductNotFound = 4,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
            ExitCode::ProductNotFound => write!(f, "Product Not Found (4)"),
        }
    }
}

/// Application-specific errors for formula aggregation and document output.
#[derive(Debug, Error)]
pub enum LabdocError {
    #[error("Product not found: {product_code}\n\n💡 Hint: Check the product code (e.g. the code shown on the product list)")]
    ProductNotFound { product_code: String },

    #[error("Store request failed: {resource}\nDetails: {details}\n\n💡 Hint: Check the store URL, the API key and your network connection")]
    StoreRequest { resource: String, details: String },

    #[error("Malformed store response: {resource}\nDetails: {details}")]
    MalformedResponse { resource: String, details: String },

    #[error("Failed to read data file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and contains a valid formula snapshot")]
    DataFileError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Store is not configured\n\n💡 Hint: {hint}")]
    StoreNotConfigured { hint: String },

    /// Validation error for request and configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl LabdocError {
    /// Maps an error to the exit code the CLI should terminate with
    pub fn exit_code(&self) -> ExitCode {
        match self {
            LabdocError::ProductNotFound { .. } => ExitCode::ProductNotFound,
            _ => ExitCode::ApplicationError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
        assert_eq!(ExitCode::ProductNotFound.as_i32(), 4);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ProductNotFound),
            "Product Not Found (4)"
        );
    }

    #[test]
    fn test_product_not_found_display() {
        let error = LabdocError::ProductNotFound {
            product_code: "P-404".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Product not found"));
        assert!(display.contains("P-404"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_store_request_display() {
        let error = LabdocError::StoreRequest {
            resource: "bom_master".to_string(),
            details: "connection refused".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("bom_master"));
        assert!(display.contains("connection refused"));
    }

    #[test]
    fn test_data_file_error_display() {
        let error = LabdocError::DataFileError {
            path: PathBuf::from("/tmp/formula.json"),
            details: "expected value".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("/tmp/formula.json"));
        assert!(display.contains("expected value"));
    }

    #[test]
    fn test_exit_code_mapping() {
        let not_found = LabdocError::ProductNotFound {
            product_code: "X".to_string(),
        };
        assert_eq!(not_found.exit_code(), ExitCode::ProductNotFound);

        let validation = LabdocError::Validation {
            message: "bad".to_string(),
        };
        assert_eq!(validation.exit_code(), ExitCode::ApplicationError);
    }
}
