#![cfg(madsim)]

use madsim::{net::NetSim, runtime::Handle, time::sleep};
use madsim_aws_sdk_dynamodb::error::UpdateTableErrorKind;
use madsim_aws_sdk_dynamodb::model::*;
use aws_smithy_types::retry::{ErrorKind, ProvideErrorKind};
use madsim_aws_sdk_dynamodb::{Client, Config, SdkError, SimServer};
use std::time::Duration;

fn init_logger() {
    let _ = tracing_subscriber::fmt::try_init();
}

fn throughput(read: i64, write: i64) -> ProvisionedThroughput {
    ProvisionedThroughput::builder()
        .read_capacity_units(read)
        .write_capacity_units(write)
        .build()
        .unwrap()
}

fn client() -> Client {
    Client::from_conf(Config::builder().endpoint_url("http://dynamodb:8000").build())
}

#[madsim::test]
async fn update_table() {
    init_logger();
    let handle = Handle::current();
    let ip1 = "10.0.0.1".parse().unwrap();
    let ip2 = "10.0.0.2".parse().unwrap();
    let server = handle.create_node().name("server").ip(ip1).build();
    let client_node = handle.create_node().name("client").ip(ip2).build();
    NetSim::current().add_dns_record("dynamodb", ip1);

    server.spawn(async move {
        SimServer::builder()
            .serve("10.0.0.1:8000".parse().unwrap())
            .await
            .unwrap();
    });
    sleep(Duration::from_secs(1)).await;

    let task = client_node.spawn(async move {
        let client = client();
        let out = client
            .create_table()
            .table_name("orders")
            .attribute_definitions(
                AttributeDefinition::builder()
                    .attribute_name("pk")
                    .attribute_type(ScalarAttributeType::S)
                    .build()
                    .unwrap(),
            )
            .key_schema(
                KeySchemaElement::builder()
                    .attribute_name("pk")
                    .key_type(KeyType::Hash)
                    .build()
                    .unwrap(),
            )
            .provisioned_throughput(throughput(5, 5))
            .send()
            .await
            .unwrap();
        let table = out.table_description().unwrap();
        assert_eq!(table.table_status(), Some(&TableStatus::Creating));

        // still creating
        let err = client
            .update_table()
            .table_name("orders")
            .provisioned_throughput(throughput(10, 10))
            .send()
            .await
            .unwrap_err();
        let err = err.into_service_error().unwrap();
        assert!(matches!(
            err.kind(),
            UpdateTableErrorKind::ResourceInUseException
        ));

        sleep(Duration::from_secs(2)).await;
        let out = client
            .update_table()
            .table_name("orders")
            .provisioned_throughput(throughput(10, 10))
            .send()
            .await
            .unwrap();
        let table = out.table_description().unwrap();
        assert_eq!(table.table_status(), Some(&TableStatus::Updating));

        sleep(Duration::from_secs(2)).await;
        let out = client
            .describe_table()
            .table_name("orders")
            .send()
            .await
            .unwrap();
        let table = out.table().unwrap();
        assert_eq!(table.table_status(), Some(&TableStatus::Active));
        assert_eq!(
            table.provisioned_throughput().unwrap().read_capacity_units(),
            Some(10)
        );
    });
    task.await.unwrap();
}

#[madsim::test]
async fn errors() {
    init_logger();
    let handle = Handle::current();
    let ip1 = "10.0.0.1".parse().unwrap();
    let ip2 = "10.0.0.2".parse().unwrap();
    let server = handle.create_node().name("server").ip(ip1).build();
    let client_node = handle.create_node().name("client").ip(ip2).build();
    NetSim::current().add_dns_record("dynamodb", ip1);

    server.spawn(async move {
        SimServer::builder()
            .serve("10.0.0.1:8000".parse().unwrap())
            .await
            .unwrap();
    });
    sleep(Duration::from_secs(1)).await;

    let task = client_node.spawn(async move {
        let client = client();
        let err = client
            .update_table()
            .table_name("missing")
            .provisioned_throughput(throughput(1, 1))
            .send()
            .await
            .unwrap_err();
        let err = err.into_service_error().unwrap();
        assert!(matches!(
            err.kind(),
            UpdateTableErrorKind::ResourceNotFoundException
        ));

        // invalid name, rejected by the service and not by the builder
        let err = client
            .update_table()
            .table_name("a")
            .provisioned_throughput(throughput(1, 1))
            .send()
            .await
            .unwrap_err();
        let err = err.into_service_error().unwrap();
        assert!(matches!(err.kind(), UpdateTableErrorKind::ValidationException));
        assert!(err.message().unwrap().contains("tableName"));

        let err = client
            .describe_table()
            .table_name("missing")
            .send()
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::ServiceError(_)));
    });
    task.await.unwrap();
}

#[madsim::test]
async fn load() {
    init_logger();
    let handle = Handle::current();
    let ip1 = "10.0.0.1".parse().unwrap();
    let ip2 = "10.0.0.2".parse().unwrap();
    let server = handle.create_node().name("server").ip(ip1).build();
    let client_node = handle.create_node().name("client").ip(ip2).build();
    NetSim::current().add_dns_record("dynamodb", ip1);

    let data = r#"
[tables.orders]
Status = "ACTIVE"

[tables.orders.Throughput]
ReadCapacityUnits = 3
WriteCapacityUnits = 3

[[tables.orders.AttributeDefinitions]]
AttributeName = "pk"
AttributeType = "S"

[[tables.orders.KeySchema]]
AttributeName = "pk"
KeyType = "HASH"
"#;
    server.spawn(async move {
        SimServer::builder()
            .load(data.to_string())
            .serve("10.0.0.1:8000".parse().unwrap())
            .await
            .unwrap();
    });
    sleep(Duration::from_secs(1)).await;

    let task = client_node.spawn(async move {
        let out = client()
            .describe_table()
            .table_name("orders")
            .send()
            .await
            .unwrap();
        let table = out.table().unwrap();
        assert_eq!(table.table_status(), Some(&TableStatus::Active));
        assert_eq!(table.key_schema().len(), 1);
        assert_eq!(
            table.provisioned_throughput().unwrap().write_capacity_units(),
            Some(3)
        );
    });
    task.await.unwrap();
}

#[madsim::test]
async fn timeout() {
    init_logger();
    let handle = Handle::current();
    let ip1 = "10.0.0.1".parse().unwrap();
    let ip2 = "10.0.0.2".parse().unwrap();
    let server = handle.create_node().name("server").ip(ip1).build();
    let client_node = handle.create_node().name("client").ip(ip2).build();
    NetSim::current().add_dns_record("dynamodb", ip1);

    server.spawn(async move {
        SimServer::builder()
            .timeout_rate(1.0)
            .serve("10.0.0.1:8000".parse().unwrap())
            .await
            .unwrap();
    });
    sleep(Duration::from_secs(1)).await;

    let task = client_node.spawn(async move {
        let start = madsim::time::Instant::now();
        let err = client()
            .update_table()
            .table_name("orders")
            .provisioned_throughput(throughput(1, 1))
            .send()
            .await
            .unwrap_err()
            .into_service_error()
            .unwrap();
        assert!(start.elapsed() >= Duration::from_secs(5));
        assert!(matches!(err.kind(), UpdateTableErrorKind::InternalServerError));
        assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ServerError));
    });
    task.await.unwrap();
}
