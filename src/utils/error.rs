use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed input: {reason}")]
    MalformedInput { reason: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Worker error: {message}")]
    Worker { message: String },
}

impl AuditError {
    /// Exit code for fatal errors. An invalid grid is not an error and the
    /// process exits 0 after reporting it; these codes only cover runs that
    /// abort before a verdict exists.
    pub fn exit_code(&self) -> i32 {
        match self {
            AuditError::Io(_) | AuditError::Worker { .. } => 1,
            AuditError::MalformedInput { .. } | AuditError::Config { .. } => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AuditError::Io(err) => format!("Could not read the input file: {}", err),
            AuditError::MalformedInput { reason } => {
                format!("The input is not a valid grid file: {}", reason)
            }
            AuditError::Config { message } => format!("Invalid configuration: {}", message),
            AuditError::Worker { message } => format!("A validation worker failed: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_exit_1_parse_errors_exit_2() {
        let io = AuditError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.exit_code(), 1);

        let malformed = AuditError::MalformedInput {
            reason: "too short".into(),
        };
        assert_eq!(malformed.exit_code(), 2);
    }
}
