pub use crate::error::{CreateTableError, CreateTableErrorKind};
pub use crate::input::CreateTableInput;
pub use crate::output::CreateTableOutput;

pub mod builders {
    use super::*;
    use crate::input::create_table_input::Builder as CreateTableInputBuilder;
    use crate::model::{
        AttributeDefinition, GlobalSecondaryIndex, KeySchemaElement, ProvisionedThroughput,
    };
    use crate::sim::server::Request;
    use crate::{Client, SdkError};

    impl Client {
        pub fn create_table(&self) -> CreateTableFluentBuilder {
            CreateTableFluentBuilder {
                client: self.clone(),
                inner: Default::default(),
            }
        }
    }

    pub struct CreateTableFluentBuilder {
        client: Client,
        inner: CreateTableInputBuilder,
    }

    impl CreateTableFluentBuilder {
        pub async fn send(self) -> Result<CreateTableOutput, SdkError<CreateTableError>> {
            let input = self.inner.build().map_err(SdkError::construction_failure)?;
            self.client.send_request(Request::CreateTable(input)).await
        }

        pub fn attribute_definitions(mut self, input: AttributeDefinition) -> Self {
            self.inner = self.inner.attribute_definitions(input);
            self
        }

        pub fn table_name(mut self, input: impl Into<String>) -> Self {
            self.inner = self.inner.table_name(input);
            self
        }

        pub fn key_schema(mut self, input: KeySchemaElement) -> Self {
            self.inner = self.inner.key_schema(input);
            self
        }

        pub fn global_secondary_indexes(mut self, input: GlobalSecondaryIndex) -> Self {
            self.inner = self.inner.global_secondary_indexes(input);
            self
        }

        pub fn provisioned_throughput(mut self, input: ProvisionedThroughput) -> Self {
            self.inner = self.inner.provisioned_throughput(input);
            self
        }
    }
}
