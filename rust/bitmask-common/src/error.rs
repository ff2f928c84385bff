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

    pub fn out_of_range(index: isize, len: usize) -> Error {
        Error(ErrorKind::OutOfRange { index, len }.into())
    }

    pub fn length_mismatch(expected: usize, actual: usize) -> Error {
        Error(ErrorKind::LengthMismatch { expected, actual }.into())
    }

    pub fn empty_collection(operation: impl Into<String>) -> Error {
        Error(
            ErrorKind::EmptyCollection {
                operation: operation.into(),
            }
            .into(),
        )
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

    /// Returns `true` for [`ErrorKind::OutOfRange`].
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutOfRange { .. })
    }

    /// Returns `true` for [`ErrorKind::LengthMismatch`].
    pub fn is_length_mismatch(&self) -> bool {
        matches!(self.kind(), ErrorKind::LengthMismatch { .. })
    }

    /// Returns `true` for [`ErrorKind::EmptyCollection`].
    pub fn is_empty_collection(&self) -> bool {
        matches!(self.kind(), ErrorKind::EmptyCollection { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: isize, len: usize },

    #[error("shape mismatch: expected length {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("attempt to compute {operation} of an empty sequence")]
    EmptyCollection { operation: String },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
