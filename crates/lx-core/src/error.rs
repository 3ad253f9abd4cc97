use derive_more::From;
use orion_error::{ErrorCode, StructError, UvsReason};

#[derive(Debug, Clone, PartialEq, thiserror::Error, From)]
pub enum XformReason {
    #[error("input read error")]
    Input,
    #[error("output write error")]
    Output,
    #[error("output check error")]
    Check,
    #[error("fallback range error")]
    Fallback,
    #[error("{0}")]
    Uvs(UvsReason),
}

impl ErrorCode for XformReason {
    fn error_code(&self) -> i32 {
        match self {
            Self::Input => 3001,
            Self::Output => 3002,
            Self::Check => 3003,
            Self::Fallback => 3004,
            Self::Uvs(u) => u.error_code(),
        }
    }
}

pub type XformError = StructError<XformReason>;
pub type XformResult<T> = Result<T, XformError>;
