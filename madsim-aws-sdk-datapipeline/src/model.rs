//! Structures of pipeline definitions.

use madsim_aws_shape::{BuildError, Member, Shape, Validate, Validator};
use serde::{Deserialize, Serialize};

/// Any XML 1.0 character, which covers every string member of the service.
pub(crate) const TEXT_PATTERN: &str =
    r"[\x{0020}-\x{D7FF}\x{E000}-\x{FFFD}\x{10000}-\x{10FFFF}\r\n\t]*";

/// A key-value pair of a pipeline object.
///
/// The value is either a literal `string_value` or a `ref_value` naming
/// another object of the same definition.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_value: Option<String>,
}

impl Field {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn string_value(&self) -> Option<&str> {
        self.string_value.as_deref()
    }

    pub fn ref_value(&self) -> Option<&str> {
        self.ref_value.as_deref()
    }

    pub fn builder() -> field::Builder {
        field::Builder::default()
    }
}

pub mod field {
    use super::*;

    pub const KEY: Member = Member::new("Key")
        .required()
        .length(1, 256)
        .pattern(TEXT_PATTERN);
    pub const STRING_VALUE: Member = Member::new("StringValue")
        .length(0, 10240)
        .pattern(TEXT_PATTERN);
    pub const REF_VALUE: Member = Member::new("RefValue")
        .length(1, 256)
        .pattern(TEXT_PATTERN);

    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) key: Option<String>,
        pub(crate) string_value: Option<String>,
        pub(crate) ref_value: Option<String>,
    }

    impl Builder {
        pub fn key(mut self, input: impl Into<String>) -> Self {
            self.key = Some(input.into());
            self
        }

        pub fn set_key(mut self, input: Option<String>) -> Self {
            self.key = input;
            self
        }

        pub fn string_value(mut self, input: impl Into<String>) -> Self {
            self.string_value = Some(input.into());
            self
        }

        pub fn set_string_value(mut self, input: Option<String>) -> Self {
            self.string_value = input;
            self
        }

        pub fn ref_value(mut self, input: impl Into<String>) -> Self {
            self.ref_value = Some(input.into());
            self
        }

        pub fn set_ref_value(mut self, input: Option<String>) -> Self {
            self.ref_value = input;
            self
        }

        pub fn build(self) -> Result<Field, BuildError> {
            Ok(Field {
                key: self
                    .key
                    .ok_or_else(|| BuildError::missing_field("key", "Field needs a key"))?,
                string_value: self.string_value,
                ref_value: self.ref_value,
            })
        }
    }
}

impl Shape for Field {
    const NAME: &'static str = "Field";
    const MEMBERS: &'static [&'static Member] = &[&field::KEY, &field::STRING_VALUE, &field::REF_VALUE];
}

impl Validate for Field {
    fn validate(&self, v: &mut Validator) {
        v.string(&field::KEY, Some(self.key.as_str()));
        v.string(&field::STRING_VALUE, self.string_value.as_deref());
        v.string(&field::REF_VALUE, self.ref_value.as_deref());
    }
}

/// One object of a pipeline definition, such as an activity, a schedule or a data node.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineObject {
    pub id: String,
    pub name: String,
    pub fields: Vec<Field>,
}

impl PipelineObject {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// The first field with `key`.
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn builder() -> pipeline_object::Builder {
        pipeline_object::Builder::default()
    }
}

pub mod pipeline_object {
    use super::*;

    pub const ID: Member = Member::new("Id")
        .required()
        .length(1, 1024)
        .pattern(TEXT_PATTERN);
    pub const NAME: Member = Member::new("Name")
        .required()
        .length(1, 1024)
        .pattern(TEXT_PATTERN);
    pub const FIELDS: Member = Member::new("Fields").required();

    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) id: Option<String>,
        pub(crate) name: Option<String>,
        pub(crate) fields: Option<Vec<Field>>,
    }

    impl Builder {
        pub fn id(mut self, input: impl Into<String>) -> Self {
            self.id = Some(input.into());
            self
        }

        pub fn set_id(mut self, input: Option<String>) -> Self {
            self.id = input;
            self
        }

        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }

        pub fn set_name(mut self, input: Option<String>) -> Self {
            self.name = input;
            self
        }

        /// Appends a field.
        pub fn fields(mut self, input: Field) -> Self {
            self.fields.get_or_insert_with(Vec::new).push(input);
            self
        }

        pub fn set_fields(mut self, input: Option<Vec<Field>>) -> Self {
            self.fields = input;
            self
        }

        pub fn build(self) -> Result<PipelineObject, BuildError> {
            Ok(PipelineObject {
                id: self
                    .id
                    .ok_or_else(|| BuildError::missing_field("id", "PipelineObject needs an id"))?,
                name: self.name.ok_or_else(|| {
                    BuildError::missing_field("name", "PipelineObject needs a name")
                })?,
                fields: self.fields.ok_or_else(|| {
                    BuildError::missing_field("fields", "PipelineObject needs fields")
                })?,
            })
        }
    }
}

impl Shape for PipelineObject {
    const NAME: &'static str = "PipelineObject";
    const MEMBERS: &'static [&'static Member] = &[
        &pipeline_object::ID,
        &pipeline_object::NAME,
        &pipeline_object::FIELDS,
    ];
}

impl Validate for PipelineObject {
    fn validate(&self, v: &mut Validator) {
        v.string(&pipeline_object::ID, Some(self.id.as_str()));
        v.string(&pipeline_object::NAME, Some(self.name.as_str()));
        v.list(&pipeline_object::FIELDS, Some(self.fields.as_slice()));
    }
}

/// An attribute of a parameter declaration, e.g. `type`, `default` or `optional`.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterAttribute {
    pub key: String,
    pub string_value: String,
}

impl ParameterAttribute {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn string_value(&self) -> &str {
        &self.string_value
    }

    pub fn builder() -> parameter_attribute::Builder {
        parameter_attribute::Builder::default()
    }
}

pub mod parameter_attribute {
    use super::*;

    pub const KEY: Member = Member::new("Key")
        .required()
        .length(1, 256)
        .pattern(TEXT_PATTERN);
    pub const STRING_VALUE: Member = Member::new("StringValue")
        .required()
        .length(0, 10240)
        .pattern(TEXT_PATTERN);

    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) key: Option<String>,
        pub(crate) string_value: Option<String>,
    }

    impl Builder {
        pub fn key(mut self, input: impl Into<String>) -> Self {
            self.key = Some(input.into());
            self
        }

        pub fn set_key(mut self, input: Option<String>) -> Self {
            self.key = input;
            self
        }

        pub fn string_value(mut self, input: impl Into<String>) -> Self {
            self.string_value = Some(input.into());
            self
        }

        pub fn set_string_value(mut self, input: Option<String>) -> Self {
            self.string_value = input;
            self
        }

        pub fn build(self) -> Result<ParameterAttribute, BuildError> {
            Ok(ParameterAttribute {
                key: self.key.ok_or_else(|| {
                    BuildError::missing_field("key", "ParameterAttribute needs a key")
                })?,
                string_value: self.string_value.ok_or_else(|| {
                    BuildError::missing_field("string_value", "ParameterAttribute needs a value")
                })?,
            })
        }
    }
}

impl Shape for ParameterAttribute {
    const NAME: &'static str = "ParameterAttribute";
    const MEMBERS: &'static [&'static Member] =
        &[&parameter_attribute::KEY, &parameter_attribute::STRING_VALUE];
}

impl Validate for ParameterAttribute {
    fn validate(&self, v: &mut Validator) {
        v.string(&parameter_attribute::KEY, Some(self.key.as_str()));
        v.string(
            &parameter_attribute::STRING_VALUE,
            Some(self.string_value.as_str()),
        );
    }
}

/// Declaration of a parameter that pipeline objects reference as `#{myName}`.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterObject {
    pub id: String,
    pub attributes: Vec<ParameterAttribute>,
}

impl ParameterObject {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn attributes(&self) -> &[ParameterAttribute] {
        &self.attributes
    }

    /// The value of the first attribute with `key`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.string_value.as_str())
    }

    pub fn builder() -> parameter_object::Builder {
        parameter_object::Builder::default()
    }
}

pub mod parameter_object {
    use super::*;

    pub const ID: Member = Member::new("Id")
        .required()
        .length(1, 256)
        .pattern(TEXT_PATTERN);
    pub const ATTRIBUTES: Member = Member::new("Attributes").required();

    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) id: Option<String>,
        pub(crate) attributes: Option<Vec<ParameterAttribute>>,
    }

    impl Builder {
        pub fn id(mut self, input: impl Into<String>) -> Self {
            self.id = Some(input.into());
            self
        }

        pub fn set_id(mut self, input: Option<String>) -> Self {
            self.id = input;
            self
        }

        /// Appends an attribute.
        pub fn attributes(mut self, input: ParameterAttribute) -> Self {
            self.attributes.get_or_insert_with(Vec::new).push(input);
            self
        }

        pub fn set_attributes(mut self, input: Option<Vec<ParameterAttribute>>) -> Self {
            self.attributes = input;
            self
        }

        pub fn build(self) -> Result<ParameterObject, BuildError> {
            Ok(ParameterObject {
                id: self.id.ok_or_else(|| {
                    BuildError::missing_field("id", "ParameterObject needs an id")
                })?,
                attributes: self.attributes.ok_or_else(|| {
                    BuildError::missing_field("attributes", "ParameterObject needs attributes")
                })?,
            })
        }
    }
}

impl Shape for ParameterObject {
    const NAME: &'static str = "ParameterObject";
    const MEMBERS: &'static [&'static Member] =
        &[&parameter_object::ID, &parameter_object::ATTRIBUTES];
}

impl Validate for ParameterObject {
    fn validate(&self, v: &mut Validator) {
        v.string(&parameter_object::ID, Some(self.id.as_str()));
        v.list(
            &parameter_object::ATTRIBUTES,
            Some(self.attributes.as_slice()),
        );
    }
}

/// The value given to a declared parameter.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterValue {
    pub id: String,
    pub string_value: String,
}

impl ParameterValue {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn string_value(&self) -> &str {
        &self.string_value
    }

    pub fn builder() -> parameter_value::Builder {
        parameter_value::Builder::default()
    }
}

pub mod parameter_value {
    use super::*;

    pub const ID: Member = Member::new("Id")
        .required()
        .length(1, 256)
        .pattern(TEXT_PATTERN);
    pub const STRING_VALUE: Member = Member::new("StringValue")
        .required()
        .length(0, 10240)
        .pattern(TEXT_PATTERN);

    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) id: Option<String>,
        pub(crate) string_value: Option<String>,
    }

    impl Builder {
        pub fn id(mut self, input: impl Into<String>) -> Self {
            self.id = Some(input.into());
            self
        }

        pub fn set_id(mut self, input: Option<String>) -> Self {
            self.id = input;
            self
        }

        pub fn string_value(mut self, input: impl Into<String>) -> Self {
            self.string_value = Some(input.into());
            self
        }

        pub fn set_string_value(mut self, input: Option<String>) -> Self {
            self.string_value = input;
            self
        }

        pub fn build(self) -> Result<ParameterValue, BuildError> {
            Ok(ParameterValue {
                id: self
                    .id
                    .ok_or_else(|| BuildError::missing_field("id", "ParameterValue needs an id"))?,
                string_value: self.string_value.ok_or_else(|| {
                    BuildError::missing_field("string_value", "ParameterValue needs a value")
                })?,
            })
        }
    }
}

impl Shape for ParameterValue {
    const NAME: &'static str = "ParameterValue";
    const MEMBERS: &'static [&'static Member] =
        &[&parameter_value::ID, &parameter_value::STRING_VALUE];
}

impl Validate for ParameterValue {
    fn validate(&self, v: &mut Validator) {
        v.string(&parameter_value::ID, Some(self.id.as_str()));
        v.string(&parameter_value::STRING_VALUE, Some(self.string_value.as_str()));
    }
}

/// Errors found in one object of a definition.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ValidationError {
    /// Id of the pipeline object, parameter object or parameter value.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn errors(&self) -> &[String] {
        self.errors.as_deref().unwrap_or_default()
    }
}

/// Warnings found in one object of a definition.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationWarning {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}

impl ValidationWarning {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn warnings(&self) -> &[String] {
        self.warnings.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use madsim_aws_shape::validate;

    #[test]
    fn required_members() {
        let err = PipelineObject::builder()
            .id("Default")
            .name("Default")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("fields"));

        // an empty list is present
        let obj = PipelineObject::builder()
            .id("Default")
            .name("Default")
            .set_fields(Some(vec![]))
            .build()
            .unwrap();
        assert!(obj.fields().is_empty());

        assert!(ParameterValue::builder().id("myName").build().is_err());
        assert!(Field::builder().string_value("x").build().is_err());
    }

    #[test]
    fn field_lookup() {
        let obj = PipelineObject::builder()
            .id("Schedule")
            .name("Every day")
            .fields(Field::builder().key("type").string_value("Schedule").build().unwrap())
            .fields(Field::builder().key("period").string_value("1 day").build().unwrap())
            .build()
            .unwrap();
        assert_eq!(obj.field("period").unwrap().string_value(), Some("1 day"));
        assert!(obj.field("startAt").is_none());
        assert_eq!(obj.fields()[0].key(), "type");
    }

    #[test]
    fn text_pattern() {
        let ok = Field::builder()
            .key("command")
            .string_value("echo \"héllo\"\n\tdone")
            .build()
            .unwrap();
        assert_eq!(validate(&ok), Ok(()));

        let control = Field::builder()
            .key("command")
            .string_value("bell\u{7}")
            .build()
            .unwrap();
        let err = validate(&control).unwrap_err();
        assert_eq!(err.violations()[0].path(), "stringValue");
    }

    #[test]
    fn nested_paths() {
        let obj = PipelineObject::builder()
            .id("Activity")
            .name("")
            .fields(Field::builder().key("").build().unwrap())
            .build()
            .unwrap();
        let err = validate(&obj).unwrap_err();
        let paths: Vec<_> = err.violations().iter().map(|v| v.path()).collect();
        assert_eq!(paths, ["name", "fields.1.member.key"]);
    }

    #[test]
    fn parameter_attributes() {
        let param = ParameterObject::builder()
            .id("myInput")
            .attributes(
                ParameterAttribute::builder()
                    .key("type")
                    .string_value("AWS::S3::ObjectKey")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        assert_eq!(param.attribute("type"), Some("AWS::S3::ObjectKey"));
        assert_eq!(param.attribute("default"), None);
    }
}
