//! Operation inputs.

use crate::model::*;
use madsim_aws_shape::{BuildError, Member, Shape, Validate, Validator};
use serde::{Deserialize, Serialize};

pub(crate) const PIPELINE_ID: Member = Member::new("PipelineId")
    .required()
    .length(1, 1024)
    .pattern(TEXT_PATTERN);

/// Parameters of `ValidatePipelineDefinition`.
///
/// Asks the service to check a pipeline definition without saving it. Every
/// member is optional here; `pipeline_id` and `pipeline_objects` are
/// required by the service.
///
/// List members keep their presence: `None` was never set, `Some(vec![])`
/// was explicitly set to an empty list. The slice accessors read both as
/// empty and never modify the input.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatePipelineDefinitionInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_objects: Option<Vec<PipelineObject>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_objects: Option<Vec<ParameterObject>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_values: Option<Vec<ParameterValue>>,
}

impl ValidatePipelineDefinitionInput {
    /// The ID of the pipeline.
    pub fn pipeline_id(&self) -> Option<&str> {
        self.pipeline_id.as_deref()
    }

    /// The objects that define the pipeline changes to validate.
    pub fn pipeline_objects(&self) -> &[PipelineObject] {
        self.pipeline_objects.as_deref().unwrap_or_default()
    }

    pub fn parameter_objects(&self) -> &[ParameterObject] {
        self.parameter_objects.as_deref().unwrap_or_default()
    }

    pub fn parameter_values(&self) -> &[ParameterValue] {
        self.parameter_values.as_deref().unwrap_or_default()
    }

    pub fn builder() -> validate_pipeline_definition_input::Builder {
        validate_pipeline_definition_input::Builder::default()
    }
}

pub mod validate_pipeline_definition_input {
    use super::*;

    pub const PIPELINE_OBJECTS: Member = Member::new("PipelineObjects").required();
    pub const PARAMETER_OBJECTS: Member = Member::new("ParameterObjects");
    pub const PARAMETER_VALUES: Member = Member::new("ParameterValues");

    /// A builder for [`ValidatePipelineDefinitionInput`].
    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) pipeline_id: Option<String>,
        pub(crate) pipeline_objects: Option<Vec<PipelineObject>>,
        pub(crate) parameter_objects: Option<Vec<ParameterObject>>,
        pub(crate) parameter_values: Option<Vec<ParameterValue>>,
    }

    impl Builder {
        pub fn pipeline_id(mut self, input: impl Into<String>) -> Self {
            self.pipeline_id = Some(input.into());
            self
        }

        pub fn set_pipeline_id(mut self, input: Option<String>) -> Self {
            self.pipeline_id = input;
            self
        }

        pub fn get_pipeline_id(&self) -> &Option<String> {
            &self.pipeline_id
        }

        /// Appends an item to `pipeline_objects`.
        pub fn pipeline_objects(mut self, input: PipelineObject) -> Self {
            self.pipeline_objects.get_or_insert_with(Vec::new).push(input);
            self
        }

        /// Replaces `pipeline_objects`, including with `None`.
        pub fn set_pipeline_objects(mut self, input: Option<Vec<PipelineObject>>) -> Self {
            self.pipeline_objects = input;
            self
        }

        pub fn get_pipeline_objects(&self) -> &Option<Vec<PipelineObject>> {
            &self.pipeline_objects
        }

        /// Appends an item to `parameter_objects`.
        pub fn parameter_objects(mut self, input: ParameterObject) -> Self {
            self.parameter_objects.get_or_insert_with(Vec::new).push(input);
            self
        }

        pub fn set_parameter_objects(mut self, input: Option<Vec<ParameterObject>>) -> Self {
            self.parameter_objects = input;
            self
        }

        pub fn get_parameter_objects(&self) -> &Option<Vec<ParameterObject>> {
            &self.parameter_objects
        }

        /// Appends an item to `parameter_values`.
        pub fn parameter_values(mut self, input: ParameterValue) -> Self {
            self.parameter_values.get_or_insert_with(Vec::new).push(input);
            self
        }

        pub fn set_parameter_values(mut self, input: Option<Vec<ParameterValue>>) -> Self {
            self.parameter_values = input;
            self
        }

        pub fn get_parameter_values(&self) -> &Option<Vec<ParameterValue>> {
            &self.parameter_values
        }

        /// Consumes the builder. Member constraints are checked by the service, not here.
        pub fn build(self) -> Result<ValidatePipelineDefinitionInput, BuildError> {
            Ok(ValidatePipelineDefinitionInput {
                pipeline_id: self.pipeline_id,
                pipeline_objects: self.pipeline_objects,
                parameter_objects: self.parameter_objects,
                parameter_values: self.parameter_values,
            })
        }
    }
}

impl Shape for ValidatePipelineDefinitionInput {
    const NAME: &'static str = "ValidatePipelineDefinitionInput";
    const MEMBERS: &'static [&'static Member] = &[
        &PIPELINE_ID,
        &validate_pipeline_definition_input::PIPELINE_OBJECTS,
        &validate_pipeline_definition_input::PARAMETER_OBJECTS,
        &validate_pipeline_definition_input::PARAMETER_VALUES,
    ];
}

impl Validate for ValidatePipelineDefinitionInput {
    fn validate(&self, v: &mut Validator) {
        use validate_pipeline_definition_input::*;

        v.string(&PIPELINE_ID, self.pipeline_id.as_deref());
        v.list(&PIPELINE_OBJECTS, self.pipeline_objects.as_deref());
        v.list(&PARAMETER_OBJECTS, self.parameter_objects.as_deref());
        v.list(&PARAMETER_VALUES, self.parameter_values.as_deref());
    }
}

/// Parameters of `CreatePipeline`.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePipelineInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Makes the request idempotent: a retry with the same id and name returns the same pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreatePipelineInput {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn unique_id(&self) -> Option<&str> {
        self.unique_id.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn builder() -> create_pipeline_input::Builder {
        create_pipeline_input::Builder::default()
    }
}

pub mod create_pipeline_input {
    use super::*;

    pub const NAME: Member = Member::new("Name")
        .required()
        .length(1, 1024)
        .pattern(TEXT_PATTERN);
    pub const UNIQUE_ID: Member = Member::new("UniqueId")
        .required()
        .length(1, 1024)
        .pattern(TEXT_PATTERN);
    pub const DESCRIPTION: Member = Member::new("Description")
        .length(0, 1024)
        .pattern(TEXT_PATTERN);

    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) name: Option<String>,
        pub(crate) unique_id: Option<String>,
        pub(crate) description: Option<String>,
    }

    impl Builder {
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }

        pub fn set_name(mut self, input: Option<String>) -> Self {
            self.name = input;
            self
        }

        pub fn unique_id(mut self, input: impl Into<String>) -> Self {
            self.unique_id = Some(input.into());
            self
        }

        pub fn set_unique_id(mut self, input: Option<String>) -> Self {
            self.unique_id = input;
            self
        }

        pub fn description(mut self, input: impl Into<String>) -> Self {
            self.description = Some(input.into());
            self
        }

        pub fn set_description(mut self, input: Option<String>) -> Self {
            self.description = input;
            self
        }

        pub fn build(self) -> Result<CreatePipelineInput, BuildError> {
            Ok(CreatePipelineInput {
                name: self.name,
                unique_id: self.unique_id,
                description: self.description,
            })
        }
    }
}

impl Shape for CreatePipelineInput {
    const NAME: &'static str = "CreatePipelineInput";
    const MEMBERS: &'static [&'static Member] = &[
        &create_pipeline_input::NAME,
        &create_pipeline_input::UNIQUE_ID,
        &create_pipeline_input::DESCRIPTION,
    ];
}

impl Validate for CreatePipelineInput {
    fn validate(&self, v: &mut Validator) {
        v.string(&create_pipeline_input::NAME, self.name.as_deref());
        v.string(&create_pipeline_input::UNIQUE_ID, self.unique_id.as_deref());
        v.string(&create_pipeline_input::DESCRIPTION, self.description.as_deref());
    }
}

/// Parameters of `DeletePipeline`.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePipelineInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,
}

impl DeletePipelineInput {
    pub fn pipeline_id(&self) -> Option<&str> {
        self.pipeline_id.as_deref()
    }

    pub fn builder() -> delete_pipeline_input::Builder {
        delete_pipeline_input::Builder::default()
    }
}

pub mod delete_pipeline_input {
    use super::*;

    #[derive(Default, Clone, PartialEq, Debug)]
    pub struct Builder {
        pub(crate) pipeline_id: Option<String>,
    }

    impl Builder {
        pub fn pipeline_id(mut self, input: impl Into<String>) -> Self {
            self.pipeline_id = Some(input.into());
            self
        }

        pub fn set_pipeline_id(mut self, input: Option<String>) -> Self {
            self.pipeline_id = input;
            self
        }

        pub fn build(self) -> Result<DeletePipelineInput, BuildError> {
            Ok(DeletePipelineInput {
                pipeline_id: self.pipeline_id,
            })
        }
    }
}

impl Shape for DeletePipelineInput {
    const NAME: &'static str = "DeletePipelineInput";
    const MEMBERS: &'static [&'static Member] = &[&PIPELINE_ID];
}

impl Validate for DeletePipelineInput {
    fn validate(&self, v: &mut Validator) {
        v.string(&PIPELINE_ID, self.pipeline_id.as_deref());
    }
}
