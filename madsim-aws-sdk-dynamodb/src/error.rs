//! Errors returned by DynamoDB operations.

madsim_aws_shape::operation_error! {
    /// Error of `UpdateTable`.
    UpdateTableError, UpdateTableErrorKind {
        /// The table or index is being created, updated or deleted.
        ResourceInUseException,
        ResourceNotFoundException,
        /// Too many indexes, or too many throughput decreases today.
        LimitExceededException,
        InternalServerError => ServerError,
        ValidationException,
    }
}

madsim_aws_shape::operation_error! {
    /// Error of `CreateTable`.
    CreateTableError, CreateTableErrorKind {
        ResourceInUseException,
        LimitExceededException,
        InternalServerError => ServerError,
        ValidationException,
    }
}

madsim_aws_shape::operation_error! {
    /// Error of `DescribeTable`.
    DescribeTableError, DescribeTableErrorKind {
        ResourceNotFoundException,
        InternalServerError => ServerError,
        ValidationException,
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

from_service_error!(UpdateTableError, CreateTableError, DescribeTableError);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::Error;
    use aws_smithy_types::retry::{ErrorKind, ProvideErrorKind};

    #[test]
    fn service_errors_map_to_modeled_kinds() {
        let err = UpdateTableError::from(Error::TableNotFound("orders".into()));
        assert!(matches!(
            err.kind(),
            UpdateTableErrorKind::ResourceNotFoundException
        ));
        assert_eq!(err.code(), Some("ResourceNotFoundException"));
        assert_eq!(
            err.message(),
            Some("Requested resource not found: Table: orders not found")
        );

        let err = UpdateTableError::from(Error::InternalServerError("request timed out".into()));
        assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ServerError));
    }

    #[test]
    fn unmodeled_code_is_unhandled() {
        // CreateTable has no ResourceNotFoundException
        let err = CreateTableError::from(Error::TableNotFound("orders".into()));
        assert!(matches!(err.kind(), CreateTableErrorKind::Unhandled(_)));
        assert_eq!(err.retryable_error_kind(), None);
    }
}
