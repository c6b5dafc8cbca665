//! Structures nested in DynamoDB requests and responses.

use madsim_aws_shape::{BuildError, Member, Shape, Validate, Validator};
use serde::{Deserialize, Serialize};

/// Pattern shared by table and index names.
pub(crate) const NAME_PATTERN: &str = "[a-zA-Z0-9_.-]+";

madsim_aws_shape::string_enum! {
    /// Data type of a key attribute.
    pub enum ScalarAttributeType {
        B = "B",
        N = "N",
        S = "S",
    }
}

madsim_aws_shape::string_enum! {
    /// Role of an attribute in a key schema.
    pub enum KeyType {
        /// Partition key.
        Hash = "HASH",
        /// Sort key.
        Range = "RANGE",
    }
}

madsim_aws_shape::string_enum! {
    /// Attributes copied from the table into an index.
    pub enum ProjectionType {
        All = "ALL",
        Include = "INCLUDE",
        KeysOnly = "KEYS_ONLY",
    }
}

madsim_aws_shape::string_enum! {
    pub enum TableStatus {
        Active = "ACTIVE",
        Creating = "CREATING",
        Deleting = "DELETING",
        Updating = "UPDATING",
    }
}

madsim_aws_shape::string_enum! {
    pub enum IndexStatus {
        Active = "ACTIVE",
        Creating = "CREATING",
        Deleting = "DELETING",
        Updating = "UPDATING",
    }
}

/// An attribute of a key schema, with its data type.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeDefinition {
    pub attribute_name: String,
    pub attribute_type: ScalarAttributeType,
}

impl AttributeDefinition {
    pub fn attribute_name(&self) -> &str {
        &self.attribute_name
    }

    pub fn attribute_type(&self) -> &ScalarAttributeType {
        &self.attribute_type
    }

    pub fn builder() -> attribute_definition::Builder {
        attribute_definition::Builder::default()
    }
}

pub mod attribute_definition {
    use super::*;

    pub const ATTRIBUTE_NAME: Member = Member::new("AttributeName").required().length(1, 255);
    pub const ATTRIBUTE_TYPE: Member = Member::new("AttributeType").required();

    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) attribute_name: Option<String>,
        pub(crate) attribute_type: Option<ScalarAttributeType>,
    }

    impl Builder {
        pub fn attribute_name(mut self, input: impl Into<String>) -> Self {
            self.attribute_name = Some(input.into());
            self
        }

        pub fn set_attribute_name(mut self, input: Option<String>) -> Self {
            self.attribute_name = input;
            self
        }

        pub fn attribute_type(mut self, input: ScalarAttributeType) -> Self {
            self.attribute_type = Some(input);
            self
        }

        pub fn set_attribute_type(mut self, input: Option<ScalarAttributeType>) -> Self {
            self.attribute_type = input;
            self
        }

        pub fn build(self) -> Result<AttributeDefinition, BuildError> {
            Ok(AttributeDefinition {
                attribute_name: self.attribute_name.ok_or_else(|| {
                    BuildError::missing_field("attribute_name", "AttributeDefinition needs a name")
                })?,
                attribute_type: self.attribute_type.ok_or_else(|| {
                    BuildError::missing_field("attribute_type", "AttributeDefinition needs a type")
                })?,
            })
        }
    }
}

impl Shape for AttributeDefinition {
    const NAME: &'static str = "AttributeDefinition";
    const MEMBERS: &'static [&'static Member] = &[
        &attribute_definition::ATTRIBUTE_NAME,
        &attribute_definition::ATTRIBUTE_TYPE,
    ];
}

impl Validate for AttributeDefinition {
    fn validate(&self, v: &mut Validator) {
        v.string(&attribute_definition::ATTRIBUTE_NAME, Some(self.attribute_name.as_str()));
        v.enum_value(&attribute_definition::ATTRIBUTE_TYPE, Some(&self.attribute_type));
    }
}

/// One element of a primary key or index key.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeySchemaElement {
    pub attribute_name: String,
    pub key_type: KeyType,
}

impl KeySchemaElement {
    pub fn attribute_name(&self) -> &str {
        &self.attribute_name
    }

    pub fn key_type(&self) -> &KeyType {
        &self.key_type
    }

    pub fn builder() -> key_schema_element::Builder {
        key_schema_element::Builder::default()
    }
}

pub mod key_schema_element {
    use super::*;

    pub const ATTRIBUTE_NAME: Member = Member::new("AttributeName").required().length(1, 255);
    pub const KEY_TYPE: Member = Member::new("KeyType").required();

    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) attribute_name: Option<String>,
        pub(crate) key_type: Option<KeyType>,
    }

    impl Builder {
        pub fn attribute_name(mut self, input: impl Into<String>) -> Self {
            self.attribute_name = Some(input.into());
            self
        }

        pub fn set_attribute_name(mut self, input: Option<String>) -> Self {
            self.attribute_name = input;
            self
        }

        pub fn key_type(mut self, input: KeyType) -> Self {
            self.key_type = Some(input);
            self
        }

        pub fn set_key_type(mut self, input: Option<KeyType>) -> Self {
            self.key_type = input;
            self
        }

        pub fn build(self) -> Result<KeySchemaElement, BuildError> {
            Ok(KeySchemaElement {
                attribute_name: self.attribute_name.ok_or_else(|| {
                    BuildError::missing_field("attribute_name", "KeySchemaElement needs a name")
                })?,
                key_type: self.key_type.ok_or_else(|| {
                    BuildError::missing_field("key_type", "KeySchemaElement needs a key type")
                })?,
            })
        }
    }
}

impl Shape for KeySchemaElement {
    const NAME: &'static str = "KeySchemaElement";
    const MEMBERS: &'static [&'static Member] = &[
        &key_schema_element::ATTRIBUTE_NAME,
        &key_schema_element::KEY_TYPE,
    ];
}

impl Validate for KeySchemaElement {
    fn validate(&self, v: &mut Validator) {
        v.string(&key_schema_element::ATTRIBUTE_NAME, Some(self.attribute_name.as_str()));
        v.enum_value(&key_schema_element::KEY_TYPE, Some(&self.key_type));
    }
}

/// Attributes projected into an index besides its keys.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Projection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection_type: Option<ProjectionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_key_attributes: Option<Vec<String>>,
}

impl Projection {
    pub fn projection_type(&self) -> Option<&ProjectionType> {
        self.projection_type.as_ref()
    }

    /// Non-key attribute names; empty when unset.
    ///
    /// Use `.non_key_attributes.is_none()` to tell an unset list from an empty one.
    pub fn non_key_attributes(&self) -> &[String] {
        self.non_key_attributes.as_deref().unwrap_or_default()
    }

    pub fn builder() -> projection::Builder {
        projection::Builder::default()
    }
}

pub mod projection {
    use super::*;

    pub const PROJECTION_TYPE: Member = Member::new("ProjectionType");
    pub const NON_KEY_ATTRIBUTES: Member = Member::new("NonKeyAttributes").length(1, 20);
    pub const NON_KEY_ATTRIBUTE: Member = Member::new("Member").length(1, 255);

    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) projection_type: Option<ProjectionType>,
        pub(crate) non_key_attributes: Option<Vec<String>>,
    }

    impl Builder {
        pub fn projection_type(mut self, input: ProjectionType) -> Self {
            self.projection_type = Some(input);
            self
        }

        pub fn set_projection_type(mut self, input: Option<ProjectionType>) -> Self {
            self.projection_type = input;
            self
        }

        /// Appends one attribute name.
        pub fn non_key_attributes(mut self, input: impl Into<String>) -> Self {
            self.non_key_attributes
                .get_or_insert_with(Vec::new)
                .push(input.into());
            self
        }

        pub fn set_non_key_attributes(mut self, input: Option<Vec<String>>) -> Self {
            self.non_key_attributes = input;
            self
        }

        pub fn build(self) -> Projection {
            Projection {
                projection_type: self.projection_type,
                non_key_attributes: self.non_key_attributes,
            }
        }
    }
}

impl Shape for Projection {
    const NAME: &'static str = "Projection";
    const MEMBERS: &'static [&'static Member] =
        &[&projection::PROJECTION_TYPE, &projection::NON_KEY_ATTRIBUTES];
}

impl Validate for Projection {
    fn validate(&self, v: &mut Validator) {
        if let Some(t) = &self.projection_type {
            v.enum_value(&projection::PROJECTION_TYPE, Some(t));
        }
        v.string_list(
            &projection::NON_KEY_ATTRIBUTES,
            &projection::NON_KEY_ATTRIBUTE,
            self.non_key_attributes.as_deref(),
        );
    }
}

/// Read and write capacity of a table or index.
#[non_exhaustive]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvisionedThroughput {
    pub read_capacity_units: i64,
    pub write_capacity_units: i64,
}

impl ProvisionedThroughput {
    pub fn read_capacity_units(&self) -> i64 {
        self.read_capacity_units
    }

    pub fn write_capacity_units(&self) -> i64 {
        self.write_capacity_units
    }

    pub fn builder() -> provisioned_throughput::Builder {
        provisioned_throughput::Builder::default()
    }
}

pub mod provisioned_throughput {
    use super::*;

    pub const READ_CAPACITY_UNITS: Member = Member::new("ReadCapacityUnits")
        .required()
        .range(1, i64::MAX);
    pub const WRITE_CAPACITY_UNITS: Member = Member::new("WriteCapacityUnits")
        .required()
        .range(1, i64::MAX);

    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) read_capacity_units: Option<i64>,
        pub(crate) write_capacity_units: Option<i64>,
    }

    impl Builder {
        pub fn read_capacity_units(mut self, input: i64) -> Self {
            self.read_capacity_units = Some(input);
            self
        }

        pub fn set_read_capacity_units(mut self, input: Option<i64>) -> Self {
            self.read_capacity_units = input;
            self
        }

        pub fn write_capacity_units(mut self, input: i64) -> Self {
            self.write_capacity_units = Some(input);
            self
        }

        pub fn set_write_capacity_units(mut self, input: Option<i64>) -> Self {
            self.write_capacity_units = input;
            self
        }

        pub fn build(self) -> Result<ProvisionedThroughput, BuildError> {
            Ok(ProvisionedThroughput {
                read_capacity_units: self.read_capacity_units.ok_or_else(|| {
                    BuildError::missing_field(
                        "read_capacity_units",
                        "ProvisionedThroughput needs read capacity",
                    )
                })?,
                write_capacity_units: self.write_capacity_units.ok_or_else(|| {
                    BuildError::missing_field(
                        "write_capacity_units",
                        "ProvisionedThroughput needs write capacity",
                    )
                })?,
            })
        }
    }
}

impl Shape for ProvisionedThroughput {
    const NAME: &'static str = "ProvisionedThroughput";
    const MEMBERS: &'static [&'static Member] = &[
        &provisioned_throughput::READ_CAPACITY_UNITS,
        &provisioned_throughput::WRITE_CAPACITY_UNITS,
    ];
}

impl Validate for ProvisionedThroughput {
    fn validate(&self, v: &mut Validator) {
        v.long(
            &provisioned_throughput::READ_CAPACITY_UNITS,
            Some(self.read_capacity_units),
        );
        v.long(
            &provisioned_throughput::WRITE_CAPACITY_UNITS,
            Some(self.write_capacity_units),
        );
    }
}

/// Members shared by the shapes that name an index.
pub(crate) mod index {
    use super::*;

    pub const INDEX_NAME: Member = Member::new("IndexName")
        .required()
        .length(3, 255)
        .pattern(NAME_PATTERN);
    pub const KEY_SCHEMA: Member = Member::new("KeySchema").required().length(1, 2);
    pub const PROJECTION: Member = Member::new("Projection").required();
    pub const PROVISIONED_THROUGHPUT: Member = Member::new("ProvisionedThroughput").required();
}

/// A global secondary index declared in `CreateTable`.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlobalSecondaryIndex {
    pub index_name: String,
    pub key_schema: Vec<KeySchemaElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection: Option<Projection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughput>,
}

impl GlobalSecondaryIndex {
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn key_schema(&self) -> &[KeySchemaElement] {
        &self.key_schema
    }

    pub fn projection(&self) -> Option<&Projection> {
        self.projection.as_ref()
    }

    pub fn provisioned_throughput(&self) -> Option<&ProvisionedThroughput> {
        self.provisioned_throughput.as_ref()
    }

    pub fn builder() -> global_secondary_index::Builder {
        global_secondary_index::Builder::default()
    }
}

pub mod global_secondary_index {
    use super::*;

    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) index_name: Option<String>,
        pub(crate) key_schema: Option<Vec<KeySchemaElement>>,
        pub(crate) projection: Option<Projection>,
        pub(crate) provisioned_throughput: Option<ProvisionedThroughput>,
    }

    impl Builder {
        pub fn index_name(mut self, input: impl Into<String>) -> Self {
            self.index_name = Some(input.into());
            self
        }

        pub fn set_index_name(mut self, input: Option<String>) -> Self {
            self.index_name = input;
            self
        }

        /// Appends one key element.
        pub fn key_schema(mut self, input: KeySchemaElement) -> Self {
            self.key_schema.get_or_insert_with(Vec::new).push(input);
            self
        }

        pub fn set_key_schema(mut self, input: Option<Vec<KeySchemaElement>>) -> Self {
            self.key_schema = input;
            self
        }

        pub fn projection(mut self, input: Projection) -> Self {
            self.projection = Some(input);
            self
        }

        pub fn set_projection(mut self, input: Option<Projection>) -> Self {
            self.projection = input;
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

        pub fn build(self) -> Result<GlobalSecondaryIndex, BuildError> {
            Ok(GlobalSecondaryIndex {
                index_name: self.index_name.ok_or_else(|| {
                    BuildError::missing_field("index_name", "GlobalSecondaryIndex needs a name")
                })?,
                key_schema: self.key_schema.ok_or_else(|| {
                    BuildError::missing_field("key_schema", "GlobalSecondaryIndex needs a key schema")
                })?,
                projection: self.projection,
                provisioned_throughput: self.provisioned_throughput,
            })
        }
    }
}

impl Shape for GlobalSecondaryIndex {
    const NAME: &'static str = "GlobalSecondaryIndex";
    const MEMBERS: &'static [&'static Member] = &[
        &index::INDEX_NAME,
        &index::KEY_SCHEMA,
        &index::PROJECTION,
        &index::PROVISIONED_THROUGHPUT,
    ];
}

impl Validate for GlobalSecondaryIndex {
    fn validate(&self, v: &mut Validator) {
        v.string(&index::INDEX_NAME, Some(self.index_name.as_str()));
        v.list(&index::KEY_SCHEMA, Some(self.key_schema.as_slice()));
        v.structure(&index::PROJECTION, self.projection.as_ref());
        v.structure(
            &index::PROVISIONED_THROUGHPUT,
            self.provisioned_throughput.as_ref(),
        );
    }
}

/// Adds a global secondary index to an existing table.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGlobalSecondaryIndexAction {
    pub index_name: String,
    pub key_schema: Vec<KeySchemaElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection: Option<Projection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughput>,
}

impl CreateGlobalSecondaryIndexAction {
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn key_schema(&self) -> &[KeySchemaElement] {
        &self.key_schema
    }

    pub fn projection(&self) -> Option<&Projection> {
        self.projection.as_ref()
    }

    pub fn provisioned_throughput(&self) -> Option<&ProvisionedThroughput> {
        self.provisioned_throughput.as_ref()
    }

    pub fn builder() -> create_global_secondary_index_action::Builder {
        create_global_secondary_index_action::Builder::default()
    }
}

pub mod create_global_secondary_index_action {
    use super::*;

    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        inner: global_secondary_index::Builder,
    }

    impl Builder {
        pub fn index_name(mut self, input: impl Into<String>) -> Self {
            self.inner = self.inner.index_name(input);
            self
        }

        pub fn set_index_name(mut self, input: Option<String>) -> Self {
            self.inner = self.inner.set_index_name(input);
            self
        }

        /// Appends one key element.
        pub fn key_schema(mut self, input: KeySchemaElement) -> Self {
            self.inner = self.inner.key_schema(input);
            self
        }

        pub fn set_key_schema(mut self, input: Option<Vec<KeySchemaElement>>) -> Self {
            self.inner = self.inner.set_key_schema(input);
            self
        }

        pub fn projection(mut self, input: Projection) -> Self {
            self.inner = self.inner.projection(input);
            self
        }

        pub fn provisioned_throughput(mut self, input: ProvisionedThroughput) -> Self {
            self.inner = self.inner.provisioned_throughput(input);
            self
        }

        pub fn build(self) -> Result<CreateGlobalSecondaryIndexAction, BuildError> {
            let index = self.inner.build()?;
            Ok(CreateGlobalSecondaryIndexAction {
                index_name: index.index_name,
                key_schema: index.key_schema,
                projection: index.projection,
                provisioned_throughput: index.provisioned_throughput,
            })
        }
    }
}

impl Shape for CreateGlobalSecondaryIndexAction {
    const NAME: &'static str = "CreateGlobalSecondaryIndexAction";
    const MEMBERS: &'static [&'static Member] = GlobalSecondaryIndex::MEMBERS;
}

impl Validate for CreateGlobalSecondaryIndexAction {
    fn validate(&self, v: &mut Validator) {
        v.string(&index::INDEX_NAME, Some(self.index_name.as_str()));
        v.list(&index::KEY_SCHEMA, Some(self.key_schema.as_slice()));
        v.structure(&index::PROJECTION, self.projection.as_ref());
        v.structure(
            &index::PROVISIONED_THROUGHPUT,
            self.provisioned_throughput.as_ref(),
        );
    }
}

impl From<CreateGlobalSecondaryIndexAction> for GlobalSecondaryIndex {
    fn from(action: CreateGlobalSecondaryIndexAction) -> Self {
        GlobalSecondaryIndex {
            index_name: action.index_name,
            key_schema: action.key_schema,
            projection: action.projection,
            provisioned_throughput: action.provisioned_throughput,
        }
    }
}

/// Changes the provisioned throughput of an existing index.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateGlobalSecondaryIndexAction {
    pub index_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughput>,
}

impl UpdateGlobalSecondaryIndexAction {
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn provisioned_throughput(&self) -> Option<&ProvisionedThroughput> {
        self.provisioned_throughput.as_ref()
    }

    pub fn builder() -> update_global_secondary_index_action::Builder {
        update_global_secondary_index_action::Builder::default()
    }
}

pub mod update_global_secondary_index_action {
    use super::*;

    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) index_name: Option<String>,
        pub(crate) provisioned_throughput: Option<ProvisionedThroughput>,
    }

    impl Builder {
        pub fn index_name(mut self, input: impl Into<String>) -> Self {
            self.index_name = Some(input.into());
            self
        }

        pub fn set_index_name(mut self, input: Option<String>) -> Self {
            self.index_name = input;
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

        pub fn build(self) -> Result<UpdateGlobalSecondaryIndexAction, BuildError> {
            Ok(UpdateGlobalSecondaryIndexAction {
                index_name: self.index_name.ok_or_else(|| {
                    BuildError::missing_field(
                        "index_name",
                        "UpdateGlobalSecondaryIndexAction needs an index name",
                    )
                })?,
                provisioned_throughput: self.provisioned_throughput,
            })
        }
    }
}

impl Shape for UpdateGlobalSecondaryIndexAction {
    const NAME: &'static str = "UpdateGlobalSecondaryIndexAction";
    const MEMBERS: &'static [&'static Member] =
        &[&index::INDEX_NAME, &index::PROVISIONED_THROUGHPUT];
}

impl Validate for UpdateGlobalSecondaryIndexAction {
    fn validate(&self, v: &mut Validator) {
        v.string(&index::INDEX_NAME, Some(self.index_name.as_str()));
        v.structure(
            &index::PROVISIONED_THROUGHPUT,
            self.provisioned_throughput.as_ref(),
        );
    }
}

/// Removes a global secondary index.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteGlobalSecondaryIndexAction {
    pub index_name: String,
}

impl DeleteGlobalSecondaryIndexAction {
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn builder() -> delete_global_secondary_index_action::Builder {
        delete_global_secondary_index_action::Builder::default()
    }
}

pub mod delete_global_secondary_index_action {
    use super::*;

    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) index_name: Option<String>,
    }

    impl Builder {
        pub fn index_name(mut self, input: impl Into<String>) -> Self {
            self.index_name = Some(input.into());
            self
        }

        pub fn set_index_name(mut self, input: Option<String>) -> Self {
            self.index_name = input;
            self
        }

        pub fn build(self) -> Result<DeleteGlobalSecondaryIndexAction, BuildError> {
            Ok(DeleteGlobalSecondaryIndexAction {
                index_name: self.index_name.ok_or_else(|| {
                    BuildError::missing_field(
                        "index_name",
                        "DeleteGlobalSecondaryIndexAction needs an index name",
                    )
                })?,
            })
        }
    }
}

impl Shape for DeleteGlobalSecondaryIndexAction {
    const NAME: &'static str = "DeleteGlobalSecondaryIndexAction";
    const MEMBERS: &'static [&'static Member] = &[&index::INDEX_NAME];
}

impl Validate for DeleteGlobalSecondaryIndexAction {
    fn validate(&self, v: &mut Validator) {
        v.string(&index::INDEX_NAME, Some(self.index_name.as_str()));
    }
}

/// One change to the global secondary indexes of a table.
///
/// Exactly one of `create`, `update` and `delete` should be set; the service
/// rejects anything else.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlobalSecondaryIndexUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<UpdateGlobalSecondaryIndexAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<CreateGlobalSecondaryIndexAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<DeleteGlobalSecondaryIndexAction>,
}

impl GlobalSecondaryIndexUpdate {
    pub fn update(&self) -> Option<&UpdateGlobalSecondaryIndexAction> {
        self.update.as_ref()
    }

    pub fn create(&self) -> Option<&CreateGlobalSecondaryIndexAction> {
        self.create.as_ref()
    }

    pub fn delete(&self) -> Option<&DeleteGlobalSecondaryIndexAction> {
        self.delete.as_ref()
    }

    pub fn builder() -> global_secondary_index_update::Builder {
        global_secondary_index_update::Builder::default()
    }
}

pub mod global_secondary_index_update {
    use super::*;

    pub const UPDATE: Member = Member::new("Update");
    pub const CREATE: Member = Member::new("Create");
    pub const DELETE: Member = Member::new("Delete");

    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) update: Option<UpdateGlobalSecondaryIndexAction>,
        pub(crate) create: Option<CreateGlobalSecondaryIndexAction>,
        pub(crate) delete: Option<DeleteGlobalSecondaryIndexAction>,
    }

    impl Builder {
        pub fn update(mut self, input: UpdateGlobalSecondaryIndexAction) -> Self {
            self.update = Some(input);
            self
        }

        pub fn set_update(mut self, input: Option<UpdateGlobalSecondaryIndexAction>) -> Self {
            self.update = input;
            self
        }

        pub fn create(mut self, input: CreateGlobalSecondaryIndexAction) -> Self {
            self.create = Some(input);
            self
        }

        pub fn set_create(mut self, input: Option<CreateGlobalSecondaryIndexAction>) -> Self {
            self.create = input;
            self
        }

        pub fn delete(mut self, input: DeleteGlobalSecondaryIndexAction) -> Self {
            self.delete = Some(input);
            self
        }

        pub fn set_delete(mut self, input: Option<DeleteGlobalSecondaryIndexAction>) -> Self {
            self.delete = input;
            self
        }

        pub fn build(self) -> GlobalSecondaryIndexUpdate {
            GlobalSecondaryIndexUpdate {
                update: self.update,
                create: self.create,
                delete: self.delete,
            }
        }
    }
}

impl Shape for GlobalSecondaryIndexUpdate {
    const NAME: &'static str = "GlobalSecondaryIndexUpdate";
    const MEMBERS: &'static [&'static Member] = &[
        &global_secondary_index_update::UPDATE,
        &global_secondary_index_update::CREATE,
        &global_secondary_index_update::DELETE,
    ];
}

impl Validate for GlobalSecondaryIndexUpdate {
    fn validate(&self, v: &mut Validator) {
        v.structure(&global_secondary_index_update::UPDATE, self.update.as_ref());
        v.structure(&global_secondary_index_update::CREATE, self.create.as_ref());
        v.structure(&global_secondary_index_update::DELETE, self.delete.as_ref());
    }
}

/// Current throughput settings of a table or index.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvisionedThroughputDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_decreases_today: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_capacity_units: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_capacity_units: Option<i64>,
}

impl ProvisionedThroughputDescription {
    pub fn number_of_decreases_today(&self) -> Option<i64> {
        self.number_of_decreases_today
    }

    pub fn read_capacity_units(&self) -> Option<i64> {
        self.read_capacity_units
    }

    pub fn write_capacity_units(&self) -> Option<i64> {
        self.write_capacity_units
    }
}

/// State of one global secondary index.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlobalSecondaryIndexDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_schema: Option<Vec<KeySchemaElement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection: Option<Projection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_status: Option<IndexStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughputDescription>,
}

impl GlobalSecondaryIndexDescription {
    pub fn index_name(&self) -> Option<&str> {
        self.index_name.as_deref()
    }

    pub fn key_schema(&self) -> &[KeySchemaElement] {
        self.key_schema.as_deref().unwrap_or_default()
    }

    pub fn projection(&self) -> Option<&Projection> {
        self.projection.as_ref()
    }

    pub fn index_status(&self) -> Option<&IndexStatus> {
        self.index_status.as_ref()
    }

    pub fn provisioned_throughput(&self) -> Option<&ProvisionedThroughputDescription> {
        self.provisioned_throughput.as_ref()
    }
}

/// State of a table as reported by `DescribeTable`, `CreateTable` and `UpdateTable`.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_definitions: Option<Vec<AttributeDefinition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_schema: Option<Vec<KeySchemaElement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_status: Option<TableStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughputDescription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_secondary_indexes: Option<Vec<GlobalSecondaryIndexDescription>>,
}

impl TableDescription {
    pub fn attribute_definitions(&self) -> &[AttributeDefinition] {
        self.attribute_definitions.as_deref().unwrap_or_default()
    }

    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }

    pub fn key_schema(&self) -> &[KeySchemaElement] {
        self.key_schema.as_deref().unwrap_or_default()
    }

    pub fn table_status(&self) -> Option<&TableStatus> {
        self.table_status.as_ref()
    }

    pub fn provisioned_throughput(&self) -> Option<&ProvisionedThroughputDescription> {
        self.provisioned_throughput.as_ref()
    }

    pub fn global_secondary_indexes(&self) -> &[GlobalSecondaryIndexDescription] {
        self.global_secondary_indexes.as_deref().unwrap_or_default()
    }

    /// Finds an index by name.
    pub fn global_secondary_index(&self, name: &str) -> Option<&GlobalSecondaryIndexDescription> {
        self.global_secondary_indexes()
            .iter()
            .find(|i| i.index_name() == Some(name))
    }
}
