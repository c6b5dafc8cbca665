pub use crate::error::{CreatePipelineError, CreatePipelineErrorKind};
pub use crate::input::CreatePipelineInput;
pub use crate::output::CreatePipelineOutput;

pub mod builders {
    use super::*;
    use crate::input::create_pipeline_input::Builder as CreatePipelineInputBuilder;
    use crate::sim::server::Request;
    use crate::{Client, SdkError};

    impl Client {
        pub fn create_pipeline(&self) -> CreatePipelineFluentBuilder {
            CreatePipelineFluentBuilder {
                client: self.clone(),
                inner: Default::default(),
            }
        }
    }

    pub struct CreatePipelineFluentBuilder {
        client: Client,
        inner: CreatePipelineInputBuilder,
    }

    impl CreatePipelineFluentBuilder {
        pub async fn send(self) -> Result<CreatePipelineOutput, SdkError<CreatePipelineError>> {
            let input = self.inner.build().map_err(SdkError::construction_failure)?;
            self.client.send_request(Request::CreatePipeline(input)).await
        }

        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.inner = self.inner.name(input);
            self
        }

        pub fn unique_id(mut self, input: impl Into<String>) -> Self {
            self.inner = self.inner.unique_id(input);
            self
        }

        pub fn description(mut self, input: impl Into<String>) -> Self {
            self.inner = self.inner.description(input);
            self
        }
    }
}
