use madsim_aws_shape::ValidationErrors;

pub type Result<T> = std::result::Result<T, Error>;

/// An error raised by the simulated service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),
    #[error("Requested resource not found: Table: {0} not found")]
    TableNotFound(String),
    #[error("Requested resource not found: Index: {index} not found for table: {table}")]
    IndexNotFound { table: String, index: String },
    #[error("Table already exists: {0}")]
    TableExists(String),
    #[error("Attempt to change a resource which is still in use: {0}")]
    ResourceInUse(String),
    #[error("Subscriber limit exceeded: {0}")]
    LimitExceeded(String),
    #[error("{0}")]
    InternalServerError(String),
    #[error("failed to load snapshot: {0}")]
    Load(#[from] toml::de::Error),
    #[error("failed to dump snapshot: {0}")]
    Dump(#[from] toml::ser::Error),
}

impl Error {
    /// The exception name reported to clients.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Validation(_) => "ValidationException",
            Error::TableNotFound(_) | Error::IndexNotFound { .. } => "ResourceNotFoundException",
            Error::TableExists(_) | Error::ResourceInUse(_) => "ResourceInUseException",
            Error::LimitExceeded(_) => "LimitExceededException",
            Error::InternalServerError(_) | Error::Load(_) | Error::Dump(_) => {
                "InternalServerError"
            }
        }
    }

    pub(crate) fn invalid(msg: impl std::fmt::Display) -> Self {
        Error::Validation(format!("One or more parameter values were invalid: {}", msg))
    }
}

impl From<ValidationErrors> for Error {
    fn from(e: ValidationErrors) -> Self {
        Error::Validation(e.to_string())
    }
}
