use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    /// Returns `true` if this is an `InvalidArgument` error for the argument `name`.
    pub fn is_invalid_arg(&self, name: &str) -> bool {
        matches!(self.kind(), ErrorKind::InvalidArgument { name: n, .. } if n == name)
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_arg_display() {
        let err = Error::invalid_arg("step", "step != 0");
        assert_eq!(err.to_string(), "invalid argument step: step != 0");
        assert!(err.is_invalid_arg("step"));
        assert!(!err.is_invalid_arg("start"));
    }

    #[test]
    fn test_into_kind() {
        let ErrorKind::InvalidArgument { name, message } =
            Error::invalid_arg("name", "Unrecognized strategy: quick").into_kind();
        assert_eq!(name, "name");
        assert_eq!(message, "Unrecognized strategy: quick");
    }
}
