//! Errors returned by DataPipeline operations.

madsim_aws_shape::operation_error! {
    /// Error of `ValidatePipelineDefinition`.
    ValidatePipelineDefinitionError, ValidatePipelineDefinitionErrorKind {
        InternalServiceError => ServerError,
        /// The request was malformed, or the pipeline id is not valid.
        InvalidRequestException,
        PipelineNotFoundException,
        /// The pipeline was deleted.
        PipelineDeletedException,
    }
}

madsim_aws_shape::operation_error! {
    /// Error of `CreatePipeline`.
    CreatePipelineError, CreatePipelineErrorKind {
        InternalServiceError => ServerError,
        InvalidRequestException,
    }
}

madsim_aws_shape::operation_error! {
    /// Error of `DeletePipeline`.
    DeletePipelineError, DeletePipelineErrorKind {
        InternalServiceError => ServerError,
        InvalidRequestException,
        PipelineNotFoundException,
    }
}

macro_rules! from_service_error {
    ($($name:ident),*) => {$(
        impl From<crate::server::Error> for $name {
            fn from(e: crate::server::Error) -> Self {
                $name::from_code(e.code(), e.to_string())
            }
        }
    )*};
}

from_service_error!(
    ValidatePipelineDefinitionError,
    CreatePipelineError,
    DeletePipelineError
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::Error;
    use aws_smithy_types::retry::{ErrorKind, ProvideErrorKind};

    #[test]
    fn service_errors_map_to_modeled_kinds() {
        let err = ValidatePipelineDefinitionError::from(Error::PipelineDeleted("df-1".into()));
        assert!(matches!(
            err.kind(),
            ValidatePipelineDefinitionErrorKind::PipelineDeletedException
        ));
        assert_eq!(err.code(), Some("PipelineDeletedException"));
        assert_eq!(err.message(), Some("Pipeline df-1 was deleted"));

        let err = ValidatePipelineDefinitionError::from(Error::InternalServiceError(
            "request timed out".into(),
        ));
        assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ServerError));
    }

    #[test]
    fn unmodeled_code_is_unhandled() {
        // CreatePipeline has no PipelineNotFoundException
        let err = CreatePipelineError::from(Error::PipelineNotFound("df-1".into()));
        assert!(matches!(err.kind(), CreatePipelineErrorKind::Unhandled(_)));
        assert_eq!(err.retryable_error_kind(), None);
    }
}
