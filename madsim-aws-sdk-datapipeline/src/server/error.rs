use madsim_aws_shape::ValidationErrors;

pub type Result<T> = std::result::Result<T, Error>;

/// An error raised by the simulated service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("Pipeline {0} does not exist")]
    PipelineNotFound(String),
    #[error("Pipeline {0} was deleted")]
    PipelineDeleted(String),
    #[error("{0}")]
    InternalServiceError(String),
    #[error("failed to load snapshot: {0}")]
    Load(#[from] toml::de::Error),
    #[error("failed to dump snapshot: {0}")]
    Dump(#[from] toml::ser::Error),
}

impl Error {
    /// The exception name reported to clients.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidRequest(_) => "InvalidRequestException",
            Error::PipelineNotFound(_) => "PipelineNotFoundException",
            Error::PipelineDeleted(_) => "PipelineDeletedException",
            Error::InternalServiceError(_) | Error::Load(_) | Error::Dump(_) => {
                "InternalServiceError"
            }
        }
    }
}

impl From<ValidationErrors> for Error {
    fn from(e: ValidationErrors) -> Self {
        Error::InvalidRequest(e.to_string())
    }
}
