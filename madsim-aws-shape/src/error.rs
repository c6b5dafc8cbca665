use std::fmt::{self, Display, Formatter};

pub use aws_smithy_types::error::operation::BuildError;

/// Failure of a request sent through a simulated client.
#[derive(Debug)]
pub enum SdkError<E> {
    /// The request could not be built.
    ConstructionFailure(BuildError),
    /// The request never reached the service, or the response was lost.
    DispatchFailure(std::io::Error),
    /// The service answered with a modeled or unhandled error.
    ServiceError(E),
}

impl<E> SdkError<E> {
    pub fn construction_failure(err: BuildError) -> Self {
        SdkError::ConstructionFailure(err)
    }

    pub fn service_error(err: E) -> Self {
        SdkError::ServiceError(err)
    }

    pub fn as_service_error(&self) -> Option<&E> {
        match self {
            SdkError::ServiceError(e) => Some(e),
            _ => None,
        }
    }

    pub fn into_service_error(self) -> Option<E> {
        match self {
            SdkError::ServiceError(e) => Some(e),
            _ => None,
        }
    }
}

impl<E> From<std::io::Error> for SdkError<E> {
    fn from(e: std::io::Error) -> Self {
        SdkError::DispatchFailure(e)
    }
}

impl<E: Display> Display for SdkError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(e) => write!(f, "failed to construct request: {}", e),
            SdkError::DispatchFailure(e) => write!(f, "dispatch failure: {}", e),
            SdkError::ServiceError(e) => write!(f, "service error: {}", e),
        }
    }
}

impl<E> std::error::Error for SdkError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(e) => Some(e),
            SdkError::DispatchFailure(e) => Some(e),
            SdkError::ServiceError(e) => Some(e),
        }
    }
}

/// Defines the error of one operation.
///
/// Each variant names a modeled exception; its wire code is the variant name.
/// `=> Kind` attaches a retry class from [`aws_smithy_types::retry::ErrorKind`].
///
/// ```
/// madsim_aws_shape::operation_error! {
///     /// Error of `DescribeTable`.
///     DescribeTableError, DescribeTableErrorKind {
///         ResourceNotFoundException,
///         InternalServerError => ServerError,
///     }
/// }
///
/// let err = DescribeTableError::from_code("ResourceNotFoundException", "no such table");
/// assert!(matches!(err.kind(), DescribeTableErrorKind::ResourceNotFoundException));
/// assert_eq!(err.to_string(), "ResourceNotFoundException: no such table");
/// ```
#[macro_export]
macro_rules! operation_error {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:ident {
            $( $(#[$vmeta:meta])* $variant:ident $(=> $retry:ident)? ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(Debug)]
        pub struct $name {
            pub kind: $kind,
            pub(crate) meta: $crate::__private::ErrorMetadata,
        }

        #[non_exhaustive]
        #[derive(Debug)]
        pub enum $kind {
            $( $(#[$vmeta])* $variant, )*
            /// An error not described by the service model.
            Unhandled(::std::boxed::Box<dyn ::std::error::Error + Send + Sync + 'static>),
        }

        impl $name {
            pub fn new(kind: $kind, meta: $crate::__private::ErrorMetadata) -> Self {
                Self { kind, meta }
            }

            /// Builds the error from a wire code; unknown codes become `Unhandled`.
            pub fn from_code(code: &str, message: impl Into<::std::string::String>) -> Self {
                let message = message.into();
                let meta = $crate::__private::ErrorMetadata::builder()
                    .code(code)
                    .message(message.clone())
                    .build();
                let kind = $( if code == stringify!($variant) {
                    $kind::$variant
                } else )* {
                    $kind::Unhandled(format!("{}: {}", code, message).into())
                };
                Self { kind, meta }
            }

            pub fn unhandled(
                err: impl Into<::std::boxed::Box<dyn ::std::error::Error + Send + Sync + 'static>>,
            ) -> Self {
                Self {
                    kind: $kind::Unhandled(err.into()),
                    meta: ::std::default::Default::default(),
                }
            }

            pub fn kind(&self) -> &$kind {
                &self.kind
            }

            pub fn code(&self) -> Option<&str> {
                self.meta.code()
            }

            pub fn message(&self) -> Option<&str> {
                self.meta.message()
            }

            pub fn meta(&self) -> &$crate::__private::ErrorMetadata {
                &self.meta
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match &self.kind {
                    $kind::Unhandled(inner) => ::std::fmt::Display::fmt(inner, f),
                    _ => {
                        write!(f, "{}", self.code().unwrap_or("Unknown"))?;
                        if let Some(message) = self.message() {
                            write!(f, ": {}", message)?;
                        }
                        Ok(())
                    }
                }
            }
        }

        impl ::std::error::Error for $name {
            fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
                match &self.kind {
                    $kind::Unhandled(inner) => Some(inner.as_ref()),
                    _ => None,
                }
            }
        }

        impl $crate::__private::ProvideErrorKind for $name {
            fn code(&self) -> Option<&str> {
                $name::code(self)
            }

            fn retryable_error_kind(&self) -> Option<$crate::__private::ErrorKind> {
                match &self.kind {
                    $( $kind::$variant => $crate::operation_error!(@retry $($retry)?), )*
                    $kind::Unhandled(_) => None,
                }
            }
        }

        impl $crate::__private::ProvideErrorMetadata for $name {
            fn meta(&self) -> &$crate::__private::ErrorMetadata {
                &self.meta
            }
        }
    };
    (@retry) => { None };
    (@retry $retry:ident) => { Some($crate::__private::ErrorKind::$retry) };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::__private::{ErrorKind, ProvideErrorKind};
    use std::error::Error as _;

    crate::operation_error! {
        GetThingError, GetThingErrorKind {
            NotFoundException,
            InternalServerError => ServerError,
        }
    }

    #[test]
    fn from_code() {
        let err = GetThingError::from_code("NotFoundException", "thing not found");
        assert!(matches!(err.kind(), GetThingErrorKind::NotFoundException));
        assert_eq!(err.code(), Some("NotFoundException"));
        assert_eq!(err.message(), Some("thing not found"));
        assert_eq!(err.to_string(), "NotFoundException: thing not found");
        assert!(err.source().is_none());
        assert_eq!(err.retryable_error_kind(), None);
    }

    #[test]
    fn retry_class() {
        let err = GetThingError::from_code("InternalServerError", "try again");
        assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ServerError));
    }

    #[test]
    fn unknown_code_is_unhandled() {
        let err = GetThingError::from_code("SomethingElse", "boom");
        assert!(matches!(err.kind(), GetThingErrorKind::Unhandled(_)));
        assert_eq!(err.code(), Some("SomethingElse"));
        assert_eq!(err.to_string(), "SomethingElse: boom");
        assert!(err.source().is_some());
    }

    #[test]
    fn sdk_error() {
        let err: SdkError<GetThingError> =
            SdkError::service_error(GetThingError::from_code("NotFoundException", "gone"));
        assert_eq!(err.to_string(), "service error: NotFoundException: gone");
        assert!(err.as_service_error().is_some());
        assert!(err.source().is_some());

        let err: SdkError<GetThingError> =
            std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset").into();
        assert!(matches!(err, SdkError::DispatchFailure(_)));
        assert!(err.into_service_error().is_none());

        let err: SdkError<GetThingError> =
            SdkError::construction_failure(BuildError::missing_field("table_name", "required"));
        assert!(err.to_string().starts_with("failed to construct request"));
    }
}
