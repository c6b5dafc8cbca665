//! Operation outputs.

use crate::model::TableDescription;
use serde::{Deserialize, Serialize};

#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateTableOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_description: Option<TableDescription>,
}

impl UpdateTableOutput {
    /// The table after the update was accepted, usually `UPDATING`.
    pub fn table_description(&self) -> Option<&TableDescription> {
        self.table_description.as_ref()
    }
}

#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTableOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_description: Option<TableDescription>,
}

impl CreateTableOutput {
    pub fn table_description(&self) -> Option<&TableDescription> {
        self.table_description.as_ref()
    }
}

#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTableOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableDescription>,
}

impl DescribeTableOutput {
    pub fn table(&self) -> Option<&TableDescription> {
        self.table.as_ref()
    }
}
