//! Shape metadata shared by the AWS service simulators.
//!
//! A *shape* is the API model's description of one structure: its members,
//! their types and the constraints the service enforces on them. The request
//! and response types of the simulated clients carry their shape as
//! [`Shape`] metadata. Building a request never checks it; the simulated
//! services run a [`Validator`] over incoming requests and reject them the way
//! the real endpoints do.

mod enums;
mod error;
mod member;
mod validate;

pub use self::enums::StringEnum;
pub use self::error::{BuildError, SdkError};
pub use self::member::{Member, Shape};
pub use self::validate::{validate, ConstraintViolation, Validate, ValidationErrors, Validator};

#[doc(hidden)]
pub mod __private {
    pub use aws_smithy_types::error::metadata::ProvideErrorMetadata;
    pub use aws_smithy_types::error::ErrorMetadata;
    pub use aws_smithy_types::retry::{ErrorKind, ProvideErrorKind};
    pub use serde;
}
