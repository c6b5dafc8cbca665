//! AWS Data Pipeline on madsim.
//!
//! Covers creating and deleting pipelines and validating pipeline definitions.
//! The network client and [`SimServer`] exist only when built with `--cfg madsim`.

pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod server;

pub use self::config::Config;
pub use madsim_aws_shape::{BuildError, SdkError};

#[cfg(madsim)]
mod sim;
#[cfg(madsim)]
pub use sim::*;
