pub mod create_pipeline;
pub mod delete_pipeline;
pub mod validate_pipeline_definition;
