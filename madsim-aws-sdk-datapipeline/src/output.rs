//! Operation outputs.

use crate::model::{ValidationError, ValidationWarning};
use serde::{Deserialize, Serialize};

/// Result of `ValidatePipelineDefinition`.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatePipelineDefinitionOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<Vec<ValidationError>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_warnings: Option<Vec<ValidationWarning>>,
    /// Whether any validation error was found.
    pub errored: bool,
}

impl ValidatePipelineDefinitionOutput {
    pub fn validation_errors(&self) -> &[ValidationError] {
        self.validation_errors.as_deref().unwrap_or_default()
    }

    pub fn validation_warnings(&self) -> &[ValidationWarning] {
        self.validation_warnings.as_deref().unwrap_or_default()
    }

    pub fn errored(&self) -> bool {
        self.errored
    }
}

#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePipelineOutput {
    pub pipeline_id: String,
}

impl CreatePipelineOutput {
    /// The generated id, in the form `df-` followed by 20 hex digits.
    pub fn pipeline_id(&self) -> &str {
        &self.pipeline_id
    }
}

#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct DeletePipelineOutput {}
