#![cfg(madsim)]

use aws_smithy_types::retry::{ErrorKind, ProvideErrorKind};
use madsim::{net::NetSim, runtime::Handle, time::sleep};
use madsim_aws_sdk_datapipeline::error::{
    CreatePipelineErrorKind, DeletePipelineErrorKind, ValidatePipelineDefinitionErrorKind,
};
use madsim_aws_sdk_datapipeline::model::*;
use madsim_aws_sdk_datapipeline::{Client, Config, SimServer};
use std::time::Duration;

fn client() -> Client {
    Client::from_conf(
        Config::builder()
            .endpoint_url("https://datapipeline:443")
            .build(),
    )
}

fn field(key: &str, value: &str) -> Field {
    Field::builder()
        .key(key)
        .string_value(value)
        .build()
        .unwrap()
}

fn object(id: &str, fields: Vec<Field>) -> PipelineObject {
    PipelineObject::builder()
        .id(id)
        .name(id)
        .set_fields(Some(fields))
        .build()
        .unwrap()
}

fn start_server(builder: SimServer) {
    let _ = tracing_subscriber::fmt::try_init();
    let handle = Handle::current();
    let ip = "10.0.0.1".parse().unwrap();
    let server = handle.create_node().name("server").ip(ip).build();
    NetSim::current().add_dns_record("datapipeline", ip);
    server.spawn(async move {
        builder.serve("10.0.0.1:443".parse().unwrap()).await.unwrap();
    });
}

#[madsim::test]
async fn validate_definition() {
    start_server(SimServer::builder());
    sleep(Duration::from_secs(1)).await;

    let handle = Handle::current();
    let client_node = handle
        .create_node()
        .name("client")
        .ip("10.0.0.2".parse().unwrap())
        .build();
    let task = client_node.spawn(async move {
        let client = client();
        let id = client
            .create_pipeline()
            .name("nightly-copy")
            .unique_id("nightly-copy-1")
            .send()
            .await
            .unwrap()
            .pipeline_id()
            .to_string();

        let out = client
            .validate_pipeline_definition()
            .pipeline_id(&id)
            .pipeline_objects(object("Default", vec![field("scheduleType", "ondemand")]))
            .pipeline_objects(object(
                "Copy",
                vec![
                    field("type", "ShellCommandActivity"),
                    field("command", "aws s3 cp #{myInput} #{myOutput}"),
                ],
            ))
            .parameter_objects(
                ParameterObject::builder()
                    .id("myInput")
                    .attributes(
                        ParameterAttribute::builder()
                            .key("type")
                            .string_value("AWS::S3::ObjectKey")
                            .build()
                            .unwrap(),
                    )
                    .build()
                    .unwrap(),
            )
            .parameter_values(
                ParameterValue::builder()
                    .id("myInput")
                    .string_value("s3://bucket/in")
                    .build()
                    .unwrap(),
            )
            .send()
            .await
            .unwrap();
        assert!(out.errored());
        let errors = out.validation_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].id(), Some("Copy"));
        assert_eq!(
            errors[0].errors(),
            ["Field 'command' refers to undeclared parameter 'myOutput'"]
        );

        client.delete_pipeline().pipeline_id(&id).send().await.unwrap();
        let err = client
            .validate_pipeline_definition()
            .pipeline_id(&id)
            .pipeline_objects(object("Default", vec![]))
            .send()
            .await
            .unwrap_err()
            .into_service_error()
            .unwrap();
        assert!(matches!(
            err.kind(),
            ValidatePipelineDefinitionErrorKind::PipelineDeletedException
        ));
    });
    task.await.unwrap();
}

#[madsim::test]
async fn invalid_requests() {
    start_server(SimServer::builder());
    sleep(Duration::from_secs(1)).await;

    let handle = Handle::current();
    let client_node = handle
        .create_node()
        .name("client")
        .ip("10.0.0.2".parse().unwrap())
        .build();
    let task = client_node.spawn(async move {
        let client = client();

        // the builder accepts a request without pipeline objects
        let err = client
            .validate_pipeline_definition()
            .pipeline_id("df-00000000000000000001")
            .send()
            .await
            .unwrap_err()
            .into_service_error()
            .unwrap();
        assert!(matches!(
            err.kind(),
            ValidatePipelineDefinitionErrorKind::InvalidRequestException
        ));
        assert!(err.message().unwrap().contains("pipelineObjects"));

        let err = client
            .delete_pipeline()
            .pipeline_id("df-00000000000000000001")
            .send()
            .await
            .unwrap_err()
            .into_service_error()
            .unwrap();
        assert!(matches!(
            err.kind(),
            DeletePipelineErrorKind::PipelineNotFoundException
        ));
    });
    task.await.unwrap();
}

#[madsim::test]
async fn load() {
    start_server(SimServer::builder().load(
        r#"
nextId = 7

[pipelines.df-00000000000000000007]
name = "nightly-copy"
uniqueId = "nightly-copy-1"
"#
        .to_string(),
    ));
    sleep(Duration::from_secs(1)).await;

    let handle = Handle::current();
    let client_node = handle
        .create_node()
        .name("client")
        .ip("10.0.0.2".parse().unwrap())
        .build();
    let task = client_node.spawn(async move {
        let client = client();
        let out = client
            .create_pipeline()
            .name("nightly-copy")
            .unique_id("nightly-copy-1")
            .send()
            .await
            .unwrap();
        assert_eq!(out.pipeline_id(), "df-00000000000000000007");

        let out = client
            .create_pipeline()
            .name("hourly")
            .unique_id("hourly-1")
            .send()
            .await
            .unwrap();
        assert_eq!(out.pipeline_id(), "df-00000000000000000008");
    });
    task.await.unwrap();
}

#[madsim::test]
async fn timeout() {
    start_server(SimServer::builder().timeout_rate(1.0));
    sleep(Duration::from_secs(1)).await;

    let handle = Handle::current();
    let client_node = handle
        .create_node()
        .name("client")
        .ip("10.0.0.2".parse().unwrap())
        .build();
    let task = client_node.spawn(async move {
        let start = madsim::time::Instant::now();
        let err = client()
            .create_pipeline()
            .name("nightly-copy")
            .unique_id("nightly-copy-1")
            .send()
            .await
            .unwrap_err()
            .into_service_error()
            .unwrap();
        assert!(start.elapsed() >= Duration::from_secs(5));
        assert!(matches!(
            err.kind(),
            CreatePipelineErrorKind::InternalServiceError
        ));
        assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ServerError));
    });
    task.await.unwrap();
}
