use std::collections::BTreeMap;

use madsim_aws_shape::{validate, Member};
use serde::{Deserialize, Serialize};
use spin::Mutex;

use super::definition;
use super::{Error, Result};
use crate::input::*;
use crate::output::*;

/// An in-memory DataPipeline control plane.
///
/// Only pipeline identities are kept. Definitions are checked by
/// [`validate_pipeline_definition`](DataPipelineService::validate_pipeline_definition)
/// and never stored.
#[derive(Debug, Default)]
pub struct DataPipelineService {
    inner: Mutex<Registry>,
}

impl DataPipelineService {
    pub fn new() -> Self {
        DataPipelineService::default()
    }

    /// Restores a registry written by [`dump`](DataPipelineService::dump).
    pub fn load(data: &str) -> Result<Self> {
        let registry: Registry = toml::from_str(data)?;
        tracing::debug!(pipelines = registry.pipelines.len(), "registry loaded");
        Ok(DataPipelineService {
            inner: Mutex::new(registry),
        })
    }

    /// Serializes the registry to TOML.
    pub fn dump(&self) -> Result<String> {
        Ok(toml::to_string(&*self.inner.lock())?)
    }

    pub fn create_pipeline(&self, input: CreatePipelineInput) -> Result<CreatePipelineOutput> {
        tracing::trace!(name = ?input.name(), unique_id = ?input.unique_id(), "create_pipeline");
        validate(&input)?;
        self.inner.lock().create_pipeline(input)
    }

    pub fn delete_pipeline(&self, input: DeletePipelineInput) -> Result<DeletePipelineOutput> {
        tracing::trace!(pipeline = ?input.pipeline_id(), "delete_pipeline");
        validate(&input)?;
        self.inner.lock().delete_pipeline(input)
    }

    pub fn validate_pipeline_definition(
        &self,
        input: ValidatePipelineDefinitionInput,
    ) -> Result<ValidatePipelineDefinitionOutput> {
        tracing::trace!(
            pipeline = ?input.pipeline_id(),
            objects = input.pipeline_objects().len(),
            parameters = input.parameter_objects().len(),
            values = input.parameter_values().len(),
            "validate_pipeline_definition"
        );
        validate(&input)?;
        let id = required(input.pipeline_id(), &PIPELINE_ID)?;
        self.inner.lock().get(id)?;
        let output = definition::check(
            input.pipeline_objects(),
            input.parameter_objects(),
            input.parameter_values(),
        );
        tracing::debug!(pipeline = id, errored = output.errored(), "definition checked");
        Ok(output)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Registry {
    #[serde(default)]
    next_id: u64,
    #[serde(default)]
    pipelines: BTreeMap<String, Pipeline>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Pipeline {
    name: String,
    unique_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    deleted: bool,
}

impl Registry {
    fn create_pipeline(&mut self, input: CreatePipelineInput) -> Result<CreatePipelineOutput> {
        let CreatePipelineInput {
            name,
            unique_id,
            description,
        } = input;
        let name = required(name, &create_pipeline_input::NAME)?;
        let unique_id = required(unique_id, &create_pipeline_input::UNIQUE_ID)?;

        let existing = self
            .pipelines
            .iter()
            .find(|(_, p)| !p.deleted && p.unique_id == unique_id);
        if let Some((id, pipeline)) = existing {
            if pipeline.name != name {
                return Err(Error::InvalidRequest(format!(
                    "Pipeline {} already exists with unique id '{}' and a different name",
                    id, unique_id
                )));
            }
            return Ok(CreatePipelineOutput {
                pipeline_id: id.clone(),
            });
        }

        self.next_id += 1;
        let id = format!("df-{:020X}", self.next_id);
        tracing::debug!(pipeline = %id, %name, "pipeline created");
        self.pipelines.insert(
            id.clone(),
            Pipeline {
                name,
                unique_id,
                description,
                deleted: false,
            },
        );
        Ok(CreatePipelineOutput { pipeline_id: id })
    }

    fn delete_pipeline(&mut self, input: DeletePipelineInput) -> Result<DeletePipelineOutput> {
        let id = required(input.pipeline_id, &PIPELINE_ID)?;
        match self.pipelines.get_mut(&id) {
            Some(pipeline) if !pipeline.deleted => {
                pipeline.deleted = true;
                tracing::debug!(pipeline = %id, "pipeline deleted");
                Ok(DeletePipelineOutput {})
            }
            _ => Err(Error::PipelineNotFound(id)),
        }
    }

    /// Looks up a pipeline that has not been deleted.
    fn get(&self, id: &str) -> Result<&Pipeline> {
        match self.pipelines.get(id) {
            None => Err(Error::PipelineNotFound(id.to_string())),
            Some(p) if p.deleted => Err(Error::PipelineDeleted(id.to_string())),
            Some(p) => Ok(p),
        }
    }
}

fn required<T>(value: Option<T>, member: &Member) -> Result<T> {
    value.ok_or_else(|| {
        Error::InvalidRequest(format!(
            "1 validation error detected: Value null at '{}' failed to satisfy constraint: Member must not be null",
            member.path_name()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;

    fn create(service: &DataPipelineService, name: &str, unique_id: &str) -> Result<String> {
        let input = CreatePipelineInput::builder()
            .name(name)
            .unique_id(unique_id)
            .build()
            .unwrap();
        Ok(service.create_pipeline(input)?.pipeline_id)
    }

    fn delete(service: &DataPipelineService, id: &str) -> Result<DeletePipelineOutput> {
        service.delete_pipeline(DeletePipelineInput::builder().pipeline_id(id).build().unwrap())
    }

    fn default_object() -> PipelineObject {
        PipelineObject::builder()
            .id("Default")
            .name("Default")
            .fields(
                Field::builder()
                    .key("scheduleType")
                    .string_value("ondemand")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    fn definition(id: &str) -> validate_pipeline_definition_input::Builder {
        ValidatePipelineDefinitionInput::builder()
            .pipeline_id(id)
            .pipeline_objects(default_object())
    }

    #[test]
    fn create_is_idempotent() {
        let service = DataPipelineService::new();
        let id = create(&service, "nightly", "token-1").unwrap();
        assert_eq!(id, "df-00000000000000000001");
        assert_eq!(id.len(), 23);
        assert_eq!(create(&service, "nightly", "token-1").unwrap(), id);

        let err = create(&service, "hourly", "token-1").unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));

        let other = create(&service, "nightly", "token-2").unwrap();
        assert_eq!(other, "df-00000000000000000002");
    }

    #[test]
    fn create_requires_members() {
        let service = DataPipelineService::new();
        let input = CreatePipelineInput::builder().name("nightly").build().unwrap();
        let err = service.create_pipeline(input).unwrap_err();
        assert_eq!(err.code(), "InvalidRequestException");
        assert!(err.to_string().contains("uniqueId"));
    }

    #[test]
    fn delete_keeps_tombstone() {
        let service = DataPipelineService::new();
        let id = create(&service, "nightly", "token-1").unwrap();
        delete(&service, &id).unwrap();

        let err = delete(&service, &id).unwrap_err();
        assert!(matches!(err, Error::PipelineNotFound(_)));

        let err = service
            .validate_pipeline_definition(definition(&id).build().unwrap())
            .unwrap_err();
        assert!(matches!(err, Error::PipelineDeleted(_)));

        // the unique id is free again
        let again = create(&service, "nightly", "token-1").unwrap();
        assert_ne!(again, id);
    }

    #[test]
    fn validate_definition() {
        let service = DataPipelineService::new();
        let id = create(&service, "nightly", "token-1").unwrap();

        let out = service
            .validate_pipeline_definition(definition(&id).build().unwrap())
            .unwrap();
        assert!(!out.errored());

        let input = definition(&id)
            .parameter_objects(
                ParameterObject::builder()
                    .id("myInput")
                    .attributes(
                        ParameterAttribute::builder()
                            .key("type")
                            .string_value("String")
                            .build()
                            .unwrap(),
                    )
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        let out = service.validate_pipeline_definition(input).unwrap();
        assert!(out.errored());
        assert_eq!(out.validation_errors()[0].id(), Some("myInput"));
    }

    #[test]
    fn validate_rejects_bad_requests() {
        let service = DataPipelineService::new();
        let err = service
            .validate_pipeline_definition(definition("df-missing").build().unwrap())
            .unwrap_err();
        assert!(matches!(err, Error::PipelineNotFound(_)));

        let input = ValidatePipelineDefinitionInput::builder()
            .pipeline_id("df-missing")
            .build()
            .unwrap();
        let err = service.validate_pipeline_definition(input).unwrap_err();
        assert_eq!(err.code(), "InvalidRequestException");
        assert!(err.to_string().contains("pipelineObjects"));

        let input = ValidatePipelineDefinitionInput::builder()
            .pipeline_objects(default_object())
            .build()
            .unwrap();
        let err = service.validate_pipeline_definition(input).unwrap_err();
        assert!(err.to_string().contains("pipelineId"));
    }

    #[test]
    fn dump_and_load() {
        let service = DataPipelineService::new();
        let id = create(&service, "nightly", "token-1").unwrap();
        let gone = create(&service, "hourly", "token-2").unwrap();
        delete(&service, &gone).unwrap();

        let data = service.dump().unwrap();
        let service = DataPipelineService::load(&data).unwrap();
        assert_eq!(create(&service, "nightly", "token-1").unwrap(), id);
        assert!(matches!(
            delete(&service, &gone).unwrap_err(),
            Error::PipelineNotFound(_)
        ));
        assert_eq!(
            create(&service, "weekly", "token-3").unwrap(),
            "df-00000000000000000003"
        );
    }

    #[test]
    fn load_rejects_garbage() {
        let err = DataPipelineService::load("pipelines = 1").unwrap_err();
        assert_eq!(err.code(), "InternalServiceError");
    }
}
