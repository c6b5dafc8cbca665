//! Operation inputs.

use crate::model::*;
use madsim_aws_shape::{BuildError, Member, Shape, Validate, Validator};
use serde::{Deserialize, Serialize};

pub(crate) mod table {
    use super::*;

    pub const TABLE_NAME: Member = Member::new("TableName")
        .required()
        .length(3, 255)
        .pattern(NAME_PATTERN);
    pub const ATTRIBUTE_DEFINITIONS: Member = Member::new("AttributeDefinitions");
    pub const PROVISIONED_THROUGHPUT: Member = Member::new("ProvisionedThroughput");
}

/// Parameters of `UpdateTable`.
///
/// Changes the provisioned throughput of a table, or creates, updates and
/// deletes its global secondary indexes. Every member is optional here;
/// `table_name` is required by the service.
///
/// List members keep their presence: `None` was never set, `Some(vec![])`
/// was explicitly set to an empty list. The slice accessors read both as
/// empty and never modify the input.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateTableInput {
    /// Attributes referenced by keys of new indexes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_definitions: Option<Vec<AttributeDefinition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_secondary_index_updates: Option<Vec<GlobalSecondaryIndexUpdate>>,
}

impl UpdateTableInput {
    /// Creates an input that changes the throughput of `table_name`.
    pub fn new(table_name: impl Into<String>, provisioned_throughput: ProvisionedThroughput) -> Self {
        UpdateTableInput {
            table_name: Some(table_name.into()),
            provisioned_throughput: Some(provisioned_throughput),
            ..Default::default()
        }
    }

    pub fn attribute_definitions(&self) -> &[AttributeDefinition] {
        self.attribute_definitions.as_deref().unwrap_or_default()
    }

    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }

    pub fn provisioned_throughput(&self) -> Option<&ProvisionedThroughput> {
        self.provisioned_throughput.as_ref()
    }

    pub fn global_secondary_index_updates(&self) -> &[GlobalSecondaryIndexUpdate] {
        self.global_secondary_index_updates
            .as_deref()
            .unwrap_or_default()
    }

    pub fn builder() -> update_table_input::Builder {
        update_table_input::Builder::default()
    }
}

pub mod update_table_input {
    use super::*;

    pub const GLOBAL_SECONDARY_INDEX_UPDATES: Member = Member::new("GlobalSecondaryIndexUpdates");

    /// A builder for [`UpdateTableInput`].
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) attribute_definitions: Option<Vec<AttributeDefinition>>,
        pub(crate) table_name: Option<String>,
        pub(crate) provisioned_throughput: Option<ProvisionedThroughput>,
        pub(crate) global_secondary_index_updates: Option<Vec<GlobalSecondaryIndexUpdate>>,
    }

    impl Builder {
        /// Appends an item to `attribute_definitions`.
        pub fn attribute_definitions(mut self, input: AttributeDefinition) -> Self {
            self.attribute_definitions
                .get_or_insert_with(Vec::new)
                .push(input);
            self
        }

        /// Replaces `attribute_definitions`, including with `None`.
        pub fn set_attribute_definitions(mut self, input: Option<Vec<AttributeDefinition>>) -> Self {
            self.attribute_definitions = input;
            self
        }

        pub fn get_attribute_definitions(&self) -> &Option<Vec<AttributeDefinition>> {
            &self.attribute_definitions
        }

        pub fn table_name(mut self, input: impl Into<String>) -> Self {
            self.table_name = Some(input.into());
            self
        }

        pub fn set_table_name(mut self, input: Option<String>) -> Self {
            self.table_name = input;
            self
        }

        pub fn get_table_name(&self) -> &Option<String> {
            &self.table_name
        }

        pub fn provisioned_throughput(mut self, input: ProvisionedThroughput) -> Self {
            self.provisioned_throughput = Some(input);
            self
        }

        pub fn set_provisioned_throughput(mut self, input: Option<ProvisionedThroughput>) -> Self {
            self.provisioned_throughput = input;
            self
        }

        pub fn get_provisioned_throughput(&self) -> &Option<ProvisionedThroughput> {
            &self.provisioned_throughput
        }

        /// Appends an item to `global_secondary_index_updates`.
        pub fn global_secondary_index_updates(mut self, input: GlobalSecondaryIndexUpdate) -> Self {
            self.global_secondary_index_updates
                .get_or_insert_with(Vec::new)
                .push(input);
            self
        }

        pub fn set_global_secondary_index_updates(
            mut self,
            input: Option<Vec<GlobalSecondaryIndexUpdate>>,
        ) -> Self {
            self.global_secondary_index_updates = input;
            self
        }

        pub fn get_global_secondary_index_updates(&self) -> &Option<Vec<GlobalSecondaryIndexUpdate>> {
            &self.global_secondary_index_updates
        }

        /// Consumes the builder. Member constraints are checked by the service, not here.
        pub fn build(self) -> Result<UpdateTableInput, BuildError> {
            Ok(UpdateTableInput {
                attribute_definitions: self.attribute_definitions,
                table_name: self.table_name,
                provisioned_throughput: self.provisioned_throughput,
                global_secondary_index_updates: self.global_secondary_index_updates,
            })
        }
    }
}

impl Shape for UpdateTableInput {
    const NAME: &'static str = "UpdateTableInput";
    const MEMBERS: &'static [&'static Member] = &[
        &table::ATTRIBUTE_DEFINITIONS,
        &table::TABLE_NAME,
        &table::PROVISIONED_THROUGHPUT,
        &update_table_input::GLOBAL_SECONDARY_INDEX_UPDATES,
    ];
}

impl Validate for UpdateTableInput {
    fn validate(&self, v: &mut Validator) {
        v.list(
            &table::ATTRIBUTE_DEFINITIONS,
            self.attribute_definitions.as_deref(),
        );
        v.string(&table::TABLE_NAME, self.table_name.as_deref());
        v.structure(
            &table::PROVISIONED_THROUGHPUT,
            self.provisioned_throughput.as_ref(),
        );
        v.list(
            &update_table_input::GLOBAL_SECONDARY_INDEX_UPDATES,
            self.global_secondary_index_updates.as_deref(),
        );
    }
}

/// Parameters of `CreateTable`.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTableInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_definitions: Option<Vec<AttributeDefinition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_schema: Option<Vec<KeySchemaElement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_secondary_indexes: Option<Vec<GlobalSecondaryIndex>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughput>,
}

impl CreateTableInput {
    pub fn attribute_definitions(&self) -> &[AttributeDefinition] {
        self.attribute_definitions.as_deref().unwrap_or_default()
    }

    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }

    pub fn key_schema(&self) -> &[KeySchemaElement] {
        self.key_schema.as_deref().unwrap_or_default()
    }

    pub fn global_secondary_indexes(&self) -> &[GlobalSecondaryIndex] {
        self.global_secondary_indexes.as_deref().unwrap_or_default()
    }

    pub fn provisioned_throughput(&self) -> Option<&ProvisionedThroughput> {
        self.provisioned_throughput.as_ref()
    }

    pub fn builder() -> create_table_input::Builder {
        create_table_input::Builder::default()
    }
}

pub mod create_table_input {
    use super::*;

    pub const ATTRIBUTE_DEFINITIONS: Member = Member::new("AttributeDefinitions").required();
    pub const KEY_SCHEMA: Member = Member::new("KeySchema").required().length(1, 2);
    pub const GLOBAL_SECONDARY_INDEXES: Member = Member::new("GlobalSecondaryIndexes");
    pub const PROVISIONED_THROUGHPUT: Member = Member::new("ProvisionedThroughput").required();

    /// A builder for [`CreateTableInput`].
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) attribute_definitions: Option<Vec<AttributeDefinition>>,
        pub(crate) table_name: Option<String>,
        pub(crate) key_schema: Option<Vec<KeySchemaElement>>,
        pub(crate) global_secondary_indexes: Option<Vec<GlobalSecondaryIndex>>,
        pub(crate) provisioned_throughput: Option<ProvisionedThroughput>,
    }

    impl Builder {
        pub fn attribute_definitions(mut self, input: AttributeDefinition) -> Self {
            self.attribute_definitions
                .get_or_insert_with(Vec::new)
                .push(input);
            self
        }

        pub fn set_attribute_definitions(mut self, input: Option<Vec<AttributeDefinition>>) -> Self {
            self.attribute_definitions = input;
            self
        }

        pub fn table_name(mut self, input: impl Into<String>) -> Self {
            self.table_name = Some(input.into());
            self
        }

        pub fn set_table_name(mut self, input: Option<String>) -> Self {
            self.table_name = input;
            self
        }

        pub fn key_schema(mut self, input: KeySchemaElement) -> Self {
            self.key_schema.get_or_insert_with(Vec::new).push(input);
            self
        }

        pub fn set_key_schema(mut self, input: Option<Vec<KeySchemaElement>>) -> Self {
            self.key_schema = input;
            self
        }

        pub fn global_secondary_indexes(mut self, input: GlobalSecondaryIndex) -> Self {
            self.global_secondary_indexes
                .get_or_insert_with(Vec::new)
                .push(input);
            self
        }

        pub fn set_global_secondary_indexes(mut self, input: Option<Vec<GlobalSecondaryIndex>>) -> Self {
            self.global_secondary_indexes = input;
            self
        }

        pub fn provisioned_throughput(mut self, input: ProvisionedThroughput) -> Self {
            self.provisioned_throughput = Some(input);
            self
        }

        pub fn set_provisioned_throughput(mut self, input: Option<ProvisionedThroughput>) -> Self {
            self.provisioned_throughput = input;
            self
        }

        pub fn build(self) -> Result<CreateTableInput, BuildError> {
            Ok(CreateTableInput {
                attribute_definitions: self.attribute_definitions,
                table_name: self.table_name,
                key_schema: self.key_schema,
                global_secondary_indexes: self.global_secondary_indexes,
                provisioned_throughput: self.provisioned_throughput,
            })
        }
    }
}

impl Shape for CreateTableInput {
    const NAME: &'static str = "CreateTableInput";
    const MEMBERS: &'static [&'static Member] = &[
        &create_table_input::ATTRIBUTE_DEFINITIONS,
        &table::TABLE_NAME,
        &create_table_input::KEY_SCHEMA,
        &create_table_input::GLOBAL_SECONDARY_INDEXES,
        &create_table_input::PROVISIONED_THROUGHPUT,
    ];
}

impl Validate for CreateTableInput {
    fn validate(&self, v: &mut Validator) {
        v.list(
            &create_table_input::ATTRIBUTE_DEFINITIONS,
            self.attribute_definitions.as_deref(),
        );
        v.string(&table::TABLE_NAME, self.table_name.as_deref());
        v.list(&create_table_input::KEY_SCHEMA, self.key_schema.as_deref());
        v.list(
            &create_table_input::GLOBAL_SECONDARY_INDEXES,
            self.global_secondary_indexes.as_deref(),
        );
        v.structure(
            &create_table_input::PROVISIONED_THROUGHPUT,
            self.provisioned_throughput.as_ref(),
        );
    }
}

/// Parameters of `DescribeTable`.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTableInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
}

impl DescribeTableInput {
    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }

    pub fn builder() -> describe_table_input::Builder {
        describe_table_input::Builder::default()
    }
}

pub mod describe_table_input {
    use super::*;

    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) table_name: Option<String>,
    }

    impl Builder {
        pub fn table_name(mut self, input: impl Into<String>) -> Self {
            self.table_name = Some(input.into());
            self
        }

        pub fn set_table_name(mut self, input: Option<String>) -> Self {
            self.table_name = input;
            self
        }

        pub fn build(self) -> Result<DescribeTableInput, BuildError> {
            Ok(DescribeTableInput {
                table_name: self.table_name,
            })
        }
    }
}

impl Shape for DescribeTableInput {
    const NAME: &'static str = "DescribeTableInput";
    const MEMBERS: &'static [&'static Member] = &[&table::TABLE_NAME];
}

impl Validate for DescribeTableInput {
    fn validate(&self, v: &mut Validator) {
        v.string(&table::TABLE_NAME, self.table_name.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash<T: Hash>(value: &T) -> u64 {
        let mut h = DefaultHasher::new();
        value.hash(&mut h);
        h.finish()
    }

    fn throughput(read: i64, write: i64) -> ProvisionedThroughput {
        ProvisionedThroughput::builder()
            .read_capacity_units(read)
            .write_capacity_units(write)
            .build()
            .unwrap()
    }

    fn def(name: &str) -> AttributeDefinition {
        AttributeDefinition::builder()
            .attribute_name(name)
            .attribute_type(ScalarAttributeType::S)
            .build()
            .unwrap()
    }

    #[test]
    fn get_after_set() {
        let input = UpdateTableInput::builder()
            .table_name("orders")
            .provisioned_throughput(throughput(10, 5))
            .build()
            .unwrap();
        assert_eq!(input.table_name(), Some("orders"));
        assert_eq!(input.provisioned_throughput(), Some(&throughput(10, 5)));

        let builder = UpdateTableInput::builder().table_name("orders");
        assert_eq!(builder.get_table_name().as_deref(), Some("orders"));
        assert!(builder.get_provisioned_throughput().is_none());
    }

    #[test]
    fn constructor_sets_name_and_throughput() {
        let input = UpdateTableInput::new("orders", throughput(1, 1));
        let built = UpdateTableInput::builder()
            .table_name("orders")
            .provisioned_throughput(throughput(1, 1))
            .build()
            .unwrap();
        assert_eq!(input, built);
        assert!(input.attribute_definitions.is_none());
        assert!(input.global_secondary_index_updates.is_none());
    }

    #[test]
    fn equal_inputs_hash_equal() {
        let a = UpdateTableInput::builder()
            .table_name("orders")
            .attribute_definitions(def("pk"))
            .build()
            .unwrap();
        let b = UpdateTableInput::builder()
            .attribute_definitions(def("pk"))
            .table_name("orders")
            .build()
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(hash(&a), hash(&b));

        let c = UpdateTableInput::builder()
            .table_name("orders")
            .build()
            .unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn append_keeps_call_order() {
        let input = UpdateTableInput::builder()
            .attribute_definitions(def("a"))
            .attribute_definitions(def("b"))
            .set_global_secondary_index_updates(None)
            .attribute_definitions(def("c"))
            .build()
            .unwrap();
        let names: Vec<_> = input
            .attribute_definitions()
            .iter()
            .map(|d| d.attribute_name())
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn set_replaces_list() {
        let input = UpdateTableInput::builder()
            .attribute_definitions(def("a"))
            .set_attribute_definitions(Some(vec![def("z")]))
            .build()
            .unwrap();
        assert_eq!(input.attribute_definitions(), [def("z")]);

        let input = UpdateTableInput::builder()
            .attribute_definitions(def("a"))
            .set_attribute_definitions(None)
            .build()
            .unwrap();
        assert!(input.attribute_definitions.is_none());
    }

    #[test]
    fn unset_list_reads_empty_without_mutation() {
        let input = UpdateTableInput::builder().build().unwrap();
        assert!(input.global_secondary_index_updates().is_empty());
        assert!(input.global_secondary_index_updates.is_none());
        assert_eq!(input, UpdateTableInput::default());

        let empty = UpdateTableInput::builder()
            .set_global_secondary_index_updates(Some(vec![]))
            .build()
            .unwrap();
        assert!(empty.global_secondary_index_updates().is_empty());
        assert_ne!(input, empty);
    }

    #[test]
    fn clone_is_independent() {
        let original = UpdateTableInput::builder()
            .table_name("orders")
            .attribute_definitions(def("a"))
            .build()
            .unwrap();
        let mut copy = original.clone();
        assert_eq!(copy, original);
        copy.attribute_definitions
            .get_or_insert_with(Vec::new)
            .push(def("b"));
        copy.table_name = Some("other".into());
        assert_eq!(original.attribute_definitions().len(), 1);
        assert_eq!(original.table_name(), Some("orders"));
        assert_ne!(copy, original);
    }

    #[test]
    fn debug_lists_members() {
        let input = UpdateTableInput::new("orders", throughput(3, 4));
        let s = format!("{:?}", input);
        assert!(s.contains("table_name: Some(\"orders\")"));
        assert!(s.contains("read_capacity_units: 3"));
        assert!(s.contains("attribute_definitions: None"));
    }

    #[test]
    fn build_does_not_validate() {
        let input = UpdateTableInput::builder()
            .table_name("x")
            .provisioned_throughput(throughput(0, 1))
            .build()
            .unwrap();
        let err = madsim_aws_shape::validate(&input).unwrap_err();
        assert_eq!(err.len(), 2);
        assert_eq!(err.violations()[0].path(), "tableName");
        assert_eq!(
            err.violations()[1].path(),
            "provisionedThroughput.readCapacityUnits"
        );
    }

    #[test]
    fn table_name_metadata() {
        let m = UpdateTableInput::member("TableName").unwrap();
        assert!(m.is_required());
        assert_eq!(m.length_bounds(), Some((3, 255)));
        assert_eq!(m.pattern_source(), Some("[a-zA-Z0-9_.-]+"));

        let input = UpdateTableInput::builder()
            .table_name("bad name!")
            .build()
            .unwrap();
        let err = madsim_aws_shape::validate(&input).unwrap_err();
        assert!(err.to_string().contains("regular expression pattern"));
    }

    #[test]
    fn describe_requires_name() {
        let err = madsim_aws_shape::validate(&DescribeTableInput::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "1 validation error detected: Value null at 'tableName' failed to satisfy constraint: Member must not be null"
        );
    }
}
