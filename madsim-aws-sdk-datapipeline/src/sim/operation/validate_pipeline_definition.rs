pub use crate::error::{ValidatePipelineDefinitionError, ValidatePipelineDefinitionErrorKind};
pub use crate::input::ValidatePipelineDefinitionInput;
pub use crate::output::ValidatePipelineDefinitionOutput;

pub mod builders {
    use super::*;
    use crate::input::validate_pipeline_definition_input::Builder as ValidatePipelineDefinitionInputBuilder;
    use crate::model::{ParameterObject, ParameterValue, PipelineObject};
    use crate::sim::server::Request;
    use crate::{Client, SdkError};

    impl Client {
        /// Validates a pipeline definition without saving it.
        pub fn validate_pipeline_definition(&self) -> ValidatePipelineDefinitionFluentBuilder {
            ValidatePipelineDefinitionFluentBuilder {
                client: self.clone(),
                inner: Default::default(),
            }
        }
    }

    pub struct ValidatePipelineDefinitionFluentBuilder {
        client: Client,
        inner: ValidatePipelineDefinitionInputBuilder,
    }

    impl ValidatePipelineDefinitionFluentBuilder {
        pub async fn send(
            self,
        ) -> Result<ValidatePipelineDefinitionOutput, SdkError<ValidatePipelineDefinitionError>>
        {
            let input = self.inner.build().map_err(SdkError::construction_failure)?;
            self.client
                .send_request(Request::ValidatePipelineDefinition(input))
                .await
        }

        pub fn pipeline_id(mut self, input: impl Into<String>) -> Self {
            self.inner = self.inner.pipeline_id(input);
            self
        }

        pub fn set_pipeline_id(mut self, input: Option<String>) -> Self {
            self.inner = self.inner.set_pipeline_id(input);
            self
        }

        /// Appends an item to `pipeline_objects`.
        pub fn pipeline_objects(mut self, input: PipelineObject) -> Self {
            self.inner = self.inner.pipeline_objects(input);
            self
        }

        pub fn set_pipeline_objects(mut self, input: Option<Vec<PipelineObject>>) -> Self {
            self.inner = self.inner.set_pipeline_objects(input);
            self
        }

        /// Appends an item to `parameter_objects`.
        pub fn parameter_objects(mut self, input: ParameterObject) -> Self {
            self.inner = self.inner.parameter_objects(input);
            self
        }

        pub fn set_parameter_objects(mut self, input: Option<Vec<ParameterObject>>) -> Self {
            self.inner = self.inner.set_parameter_objects(input);
            self
        }

        /// Appends an item to `parameter_values`.
        pub fn parameter_values(mut self, input: ParameterValue) -> Self {
            self.inner = self.inner.parameter_values(input);
            self
        }

        pub fn set_parameter_values(mut self, input: Option<Vec<ParameterValue>>) -> Self {
            self.inner = self.inner.set_parameter_values(input);
            self
        }
    }
}
