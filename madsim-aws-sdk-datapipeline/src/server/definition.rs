//! Semantic checks of a pipeline definition.

use std::collections::{HashMap, HashSet};

use crate::model::*;
use crate::output::ValidatePipelineDefinitionOutput;

/// Types a parameter object may declare.
const PARAMETER_TYPES: &[&str] = &["String", "Integer", "Double", "AWS::S3::ObjectKey"];

/// Checks a definition and reports problems per object id.
pub(crate) fn check(
    objects: &[PipelineObject],
    parameters: &[ParameterObject],
    values: &[ParameterValue],
) -> ValidatePipelineDefinitionOutput {
    let mut report = Report::default();

    let mut object_ids = HashSet::new();
    for object in objects {
        if !object_ids.insert(object.id()) {
            report.error(object.id(), "Object id is defined more than once");
        }
    }

    let mut declared = HashMap::new();
    for param in parameters {
        if declared.insert(param.id(), param).is_some() {
            report.error(param.id(), "Parameter id is defined more than once");
        }
        if !param.id().starts_with("my") {
            report.error(param.id(), "Parameter id must start with 'my'");
        }
        if let Some(ty) = param.attribute("type") {
            if !PARAMETER_TYPES.contains(&ty) {
                report.error(param.id(), format!("Unsupported parameter type '{ty}'"));
            }
        }
    }

    for object in objects {
        if object.id() != "Default" && object.field("type").is_none() {
            report.warning(object.id(), "Object has no 'type' field");
        }
        for field in object.fields() {
            match (field.string_value(), field.ref_value()) {
                (Some(_), Some(_)) | (None, None) => report.error(
                    object.id(),
                    format!(
                        "Field '{}' must set exactly one of stringValue and refValue",
                        field.key()
                    ),
                ),
                (None, Some(target)) => {
                    if !object_ids.contains(target) {
                        report.error(
                            object.id(),
                            format!(
                                "Field '{}' refers to undefined object '{}'",
                                field.key(),
                                target
                            ),
                        );
                    }
                }
                (Some(s), None) => {
                    for name in parameter_references(s) {
                        if !declared.contains_key(name) {
                            report.error(
                                object.id(),
                                format!(
                                    "Field '{}' refers to undeclared parameter '{}'",
                                    field.key(),
                                    name
                                ),
                            );
                        }
                    }
                }
            }
        }
    }

    let mut assigned = HashSet::new();
    for value in values {
        assigned.insert(value.id());
        let Some(param) = declared.get(value.id()) else {
            report.error(value.id(), "Value is given for an undeclared parameter");
            continue;
        };
        let parses = match param.attribute("type") {
            Some("Integer") => value.string_value().trim().parse::<i64>().is_ok(),
            Some("Double") => value.string_value().trim().parse::<f64>().is_ok(),
            _ => true,
        };
        if !parses {
            report.error(
                value.id(),
                format!(
                    "Value '{}' is not a valid {}",
                    value.string_value(),
                    param.attribute("type").unwrap_or_default()
                ),
            );
        }
    }

    for param in parameters {
        let optional = param.attribute("optional") == Some("true");
        if !optional && param.attribute("default").is_none() && !assigned.contains(param.id()) {
            report.error(param.id(), "Missing value for required parameter");
        }
    }

    report.into_output()
}

/// Names of the `#{myName}` parameter references in `s`.
///
/// Other expressions such as `#{@scheduledStartTime}` are skipped.
fn parameter_references(s: &str) -> Vec<&str> {
    let mut names = vec![];
    let mut rest = s;
    while let Some(start) = rest.find("#{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            break;
        };
        let name = after[..end].trim();
        if name.starts_with("my") && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            names.push(name);
        }
        rest = &after[end + 1..];
    }
    names
}

/// Messages grouped per id, in the order ids were first reported.
#[derive(Debug, Default)]
struct Report {
    errors: Vec<(String, Vec<String>)>,
    warnings: Vec<(String, Vec<String>)>,
}

impl Report {
    fn error(&mut self, id: &str, msg: impl Into<String>) {
        push(&mut self.errors, id, msg.into());
    }

    fn warning(&mut self, id: &str, msg: impl Into<String>) {
        push(&mut self.warnings, id, msg.into());
    }

    fn into_output(self) -> ValidatePipelineDefinitionOutput {
        let errored = !self.errors.is_empty();
        let errors: Vec<_> = self
            .errors
            .into_iter()
            .map(|(id, errors)| ValidationError {
                id: Some(id),
                errors: Some(errors),
            })
            .collect();
        let warnings: Vec<_> = self
            .warnings
            .into_iter()
            .map(|(id, warnings)| ValidationWarning {
                id: Some(id),
                warnings: Some(warnings),
            })
            .collect();
        ValidatePipelineDefinitionOutput {
            validation_errors: (!errors.is_empty()).then_some(errors),
            validation_warnings: (!warnings.is_empty()).then_some(warnings),
            errored,
        }
    }
}

fn push(groups: &mut Vec<(String, Vec<String>)>, id: &str, msg: String) {
    match groups.iter_mut().find(|(g, _)| g.as_str() == id) {
        Some((_, msgs)) => msgs.push(msg),
        None => groups.push((id.to_string(), vec![msg])),
    }
}
