//! The in-memory pipeline registry behind the simulated service.

mod definition;
mod error;
mod service;

pub use error::{Error, Result};
pub use service::DataPipelineService;
