pub use crate::error::{DeletePipelineError, DeletePipelineErrorKind};
pub use crate::input::DeletePipelineInput;
pub use crate::output::DeletePipelineOutput;

pub mod builders {
    use super::*;
    use crate::input::delete_pipeline_input::Builder as DeletePipelineInputBuilder;
    use crate::sim::server::Request;
    use crate::{Client, SdkError};

    impl Client {
        pub fn delete_pipeline(&self) -> DeletePipelineFluentBuilder {
            DeletePipelineFluentBuilder {
                client: self.clone(),
                inner: Default::default(),
            }
        }
    }

    pub struct DeletePipelineFluentBuilder {
        client: Client,
        inner: DeletePipelineInputBuilder,
    }

    impl DeletePipelineFluentBuilder {
        pub async fn send(self) -> Result<DeletePipelineOutput, SdkError<DeletePipelineError>> {
            let input = self.inner.build().map_err(SdkError::construction_failure)?;
            self.client.send_request(Request::DeletePipeline(input)).await
        }

        pub fn pipeline_id(mut self, input: impl Into<String>) -> Self {
            self.inner = self.inner.pipeline_id(input);
            self
        }
    }
}
