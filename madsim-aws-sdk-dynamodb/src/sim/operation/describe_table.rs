pub use crate::error::{DescribeTableError, DescribeTableErrorKind};
pub use crate::input::DescribeTableInput;
pub use crate::output::DescribeTableOutput;

pub mod builders {
    use super::*;
    use crate::input::describe_table_input::Builder as DescribeTableInputBuilder;
    use crate::sim::server::Request;
    use crate::{Client, SdkError};

    impl Client {
        pub fn describe_table(&self) -> DescribeTableFluentBuilder {
            DescribeTableFluentBuilder {
                client: self.clone(),
                inner: Default::default(),
            }
        }
    }

    pub struct DescribeTableFluentBuilder {
        client: Client,
        inner: DescribeTableInputBuilder,
    }

    impl DescribeTableFluentBuilder {
        pub async fn send(self) -> Result<DescribeTableOutput, SdkError<DescribeTableError>> {
            let input = self.inner.build().map_err(SdkError::construction_failure)?;
            self.client.send_request(Request::DescribeTable(input)).await
        }

        pub fn table_name(mut self, input: impl Into<String>) -> Self {
            self.inner = self.inner.table_name(input);
            self
        }
    }
}
