pub use crate::error::{UpdateTableError, UpdateTableErrorKind};
pub use crate::input::UpdateTableInput;
pub use crate::output::UpdateTableOutput;

pub mod builders {
    use super::*;
    use crate::input::update_table_input::Builder as UpdateTableInputBuilder;
    use crate::model::{AttributeDefinition, GlobalSecondaryIndexUpdate, ProvisionedThroughput};
    use crate::sim::server::Request;
    use crate::{Client, SdkError};

    impl Client {
        /// Modifies the provisioned throughput or global secondary indexes of a table.
        pub fn update_table(&self) -> UpdateTableFluentBuilder {
            UpdateTableFluentBuilder {
                client: self.clone(),
                inner: Default::default(),
            }
        }
    }

    pub struct UpdateTableFluentBuilder {
        client: Client,
        inner: UpdateTableInputBuilder,
    }

    impl UpdateTableFluentBuilder {
        pub async fn send(self) -> Result<UpdateTableOutput, SdkError<UpdateTableError>> {
            let input = self.inner.build().map_err(SdkError::construction_failure)?;
            self.client.send_request(Request::UpdateTable(input)).await
        }

        pub fn as_input(&self) -> &UpdateTableInputBuilder {
            &self.inner
        }

        pub fn attribute_definitions(mut self, input: AttributeDefinition) -> Self {
            self.inner = self.inner.attribute_definitions(input);
            self
        }

        pub fn set_attribute_definitions(mut self, input: Option<Vec<AttributeDefinition>>) -> Self {
            self.inner = self.inner.set_attribute_definitions(input);
            self
        }

        pub fn table_name(mut self, input: impl Into<String>) -> Self {
            self.inner = self.inner.table_name(input);
            self
        }

        pub fn set_table_name(mut self, input: Option<String>) -> Self {
            self.inner = self.inner.set_table_name(input);
            self
        }

        pub fn provisioned_throughput(mut self, input: ProvisionedThroughput) -> Self {
            self.inner = self.inner.provisioned_throughput(input);
            self
        }

        pub fn set_provisioned_throughput(mut self, input: Option<ProvisionedThroughput>) -> Self {
            self.inner = self.inner.set_provisioned_throughput(input);
            self
        }

        pub fn global_secondary_index_updates(mut self, input: GlobalSecondaryIndexUpdate) -> Self {
            self.inner = self.inner.global_secondary_index_updates(input);
            self
        }

        pub fn set_global_secondary_index_updates(
            mut self,
            input: Option<Vec<GlobalSecondaryIndexUpdate>>,
        ) -> Self {
            self.inner = self.inner.set_global_secondary_index_updates(input);
            self
        }
    }
}
