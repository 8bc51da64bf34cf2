//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    App(#[from] ApplicationError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::App(e) => match e {
                ApplicationError::Domain(DomainError::DegenerateTriangle { .. }) => {
                    crate::exitcode::DATAERR
                }
                // Malformed and out-of-range values never leave the read
                // loops; one surfacing here means a broken internal contract.
                ApplicationError::Domain(_) => crate::exitcode::SOFTWARE,
                ApplicationError::InputClosed => crate::exitcode::NOINPUT,
                ApplicationError::Io { .. } => crate::exitcode::IOERR,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exitcode;

    #[test]
    fn given_degenerate_triangle_when_mapping_then_dataerr() {
        let err = CliError::App(ApplicationError::Domain(DomainError::DegenerateTriangle {
            a: 1.0,
            b: 1.0,
            c: 2.0,
        }));
        assert_eq!(err.exit_code(), exitcode::DATAERR);
    }

    #[test]
    fn given_escaped_input_error_when_mapping_then_software() {
        let err = CliError::App(ApplicationError::Domain(DomainError::SideOutOfRange {
            value: 0.0,
        }));
        assert_eq!(err.exit_code(), exitcode::SOFTWARE);
    }

    #[test]
    fn given_closed_input_when_mapping_then_noinput() {
        let err = CliError::App(ApplicationError::InputClosed);
        assert_eq!(err.exit_code(), exitcode::NOINPUT);
    }

    #[test]
    fn given_io_failure_when_mapping_then_ioerr() {
        let err = CliError::App(ApplicationError::Io {
            context: "write prompt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"),
        });
        assert_eq!(err.exit_code(), exitcode::IOERR);
    }
}
