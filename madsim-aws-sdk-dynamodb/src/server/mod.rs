//! The in-memory table catalog behind the simulated service.

mod error;
mod service;

pub use error::{Error, Result};
pub use service::{DynamoDbService, MAX_DECREASES_PER_DAY, MAX_GLOBAL_SECONDARY_INDEXES};
