use std::collections::{BTreeMap, BTreeSet};

use madsim_aws_shape::{validate, Member};
use serde::{Deserialize, Serialize};
use spin::Mutex;

use super::{Error, Result};
use crate::input::*;
use crate::model::*;
use crate::output::*;

/// Global secondary indexes a table may have.
pub const MAX_GLOBAL_SECONDARY_INDEXES: usize = 5;

/// Throughput decreases allowed per table or index until [`DynamoDbService::reset_daily_limits`].
pub const MAX_DECREASES_PER_DAY: i64 = 4;

/// An in-memory DynamoDB control plane.
///
/// Requests change the catalog immediately and leave the touched tables and
/// indexes in a transitional status; [`tick`](DynamoDbService::tick) settles them.
#[derive(Debug, Default)]
pub struct DynamoDbService {
    inner: Mutex<Catalog>,
}

impl DynamoDbService {
    pub fn new() -> Self {
        DynamoDbService::default()
    }

    /// Restores a catalog written by [`dump`](DynamoDbService::dump).
    pub fn load(data: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(data)?;
        tracing::debug!(tables = catalog.tables.len(), "catalog loaded");
        Ok(DynamoDbService {
            inner: Mutex::new(catalog),
        })
    }

    /// Serializes the catalog to TOML.
    pub fn dump(&self) -> Result<String> {
        Ok(toml::to_string(&*self.inner.lock())?)
    }

    pub fn create_table(&self, input: CreateTableInput) -> Result<CreateTableOutput> {
        tracing::trace!(table = ?input.table_name(), "create_table");
        validate(&input)?;
        self.inner.lock().create_table(input)
    }

    pub fn describe_table(&self, input: DescribeTableInput) -> Result<DescribeTableOutput> {
        tracing::trace!(table = ?input.table_name(), "describe_table");
        validate(&input)?;
        self.inner.lock().describe_table(input)
    }

    /// Applies every change in `input`, or none of them.
    pub fn update_table(&self, input: UpdateTableInput) -> Result<UpdateTableOutput> {
        tracing::trace!(
            table = ?input.table_name(),
            throughput = ?input.provisioned_throughput(),
            index_updates = input.global_secondary_index_updates().len(),
            "update_table"
        );
        validate(&input)?;
        self.inner.lock().update_table(input)
    }

    /// Completes pending transitions. The simulator calls this every second.
    pub fn tick(&self) {
        self.inner.lock().tick();
    }

    /// Starts a new day for the throughput decrease limit.
    pub fn reset_daily_limits(&self) {
        for table in self.inner.lock().tables.values_mut() {
            table.throughput.decreases_today = 0;
            for index in &mut table.indexes {
                index.throughput.decreases_today = 0;
            }
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Catalog {
    #[serde(default)]
    tables: BTreeMap<String, Table>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Table {
    status: TableStatus,
    throughput: Throughput,
    attribute_definitions: Vec<AttributeDefinition>,
    key_schema: Vec<KeySchemaElement>,
    #[serde(default)]
    indexes: Vec<Index>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Index {
    name: String,
    status: IndexStatus,
    throughput: Throughput,
    key_schema: Vec<KeySchemaElement>,
    projection: Projection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Throughput {
    read_capacity_units: i64,
    write_capacity_units: i64,
    #[serde(default)]
    decreases_today: i64,
}

impl Catalog {
    fn create_table(&mut self, input: CreateTableInput) -> Result<CreateTableOutput> {
        let CreateTableInput {
            attribute_definitions,
            table_name,
            key_schema,
            global_secondary_indexes,
            provisioned_throughput,
        } = input;
        let name = required(table_name, &table::TABLE_NAME)?;
        if self.tables.contains_key(&name) {
            return Err(Error::TableExists(name));
        }
        let definitions = required(
            attribute_definitions,
            &create_table_input::ATTRIBUTE_DEFINITIONS,
        )?;
        let key_schema = required(key_schema, &create_table_input::KEY_SCHEMA)?;
        let throughput = required(
            provisioned_throughput,
            &create_table_input::PROVISIONED_THROUGHPUT,
        )?;
        check_duplicate_definitions(&definitions)?;
        check_key_schema(&key_schema, &definitions)?;

        let requested = global_secondary_indexes.unwrap_or_default();
        if requested.len() > MAX_GLOBAL_SECONDARY_INDEXES {
            return Err(Error::LimitExceeded(format!(
                "The number of global secondary indexes ({}) exceeds the maximum of {}",
                requested.len(),
                MAX_GLOBAL_SECONDARY_INDEXES
            )));
        }
        let mut indexes: Vec<Index> = Vec::with_capacity(requested.len());
        for gsi in requested {
            if indexes.iter().any(|i| i.name == gsi.index_name) {
                return Err(Error::invalid(format!(
                    "Duplicate index name: {}",
                    gsi.index_name
                )));
            }
            indexes.push(Index::create(gsi, &definitions)?);
        }

        let table = Table {
            status: TableStatus::Creating,
            throughput: Throughput::new(&throughput),
            attribute_definitions: definitions,
            key_schema,
            indexes,
        };
        table.check_definitions_used()?;
        tracing::debug!(table = %name, indexes = table.indexes.len(), "creating table");
        let description = table.describe(&name);
        self.tables.insert(name, table);
        Ok(CreateTableOutput {
            table_description: Some(description),
        })
    }

    fn describe_table(&self, input: DescribeTableInput) -> Result<DescribeTableOutput> {
        let name = required(input.table_name, &table::TABLE_NAME)?;
        let table = self
            .tables
            .get(&name)
            .ok_or_else(|| Error::TableNotFound(name.clone()))?;
        Ok(DescribeTableOutput {
            table: Some(table.describe(&name)),
        })
    }

    fn update_table(&mut self, input: UpdateTableInput) -> Result<UpdateTableOutput> {
        let UpdateTableInput {
            attribute_definitions,
            table_name,
            provisioned_throughput,
            global_secondary_index_updates,
        } = input;
        let name = required(table_name, &table::TABLE_NAME)?;
        let current = self
            .tables
            .get(&name)
            .ok_or_else(|| Error::TableNotFound(name.clone()))?;
        if current.status != TableStatus::Active {
            return Err(Error::ResourceInUse(format!(
                "Table: {} is in {} state",
                name, current.status
            )));
        }
        let updates = global_secondary_index_updates.unwrap_or_default();
        if provisioned_throughput.is_none() && updates.is_empty() {
            return Err(Error::Validation(
                "At least one of ProvisionedThroughput or GlobalSecondaryIndexUpdates is required"
                    .to_string(),
            ));
        }

        // all changes go to a copy that replaces the table only if every step succeeds
        let mut table = current.clone();
        if let Some(definitions) = attribute_definitions {
            table.merge_definitions(definitions)?;
        }
        if let Some(throughput) = &provisioned_throughput {
            table.throughput.change(throughput, "table")?;
        }
        let mut online_changes = 0;
        for update in updates {
            match (update.create, update.update, update.delete) {
                (Some(create), None, None) => {
                    online_changes += 1;
                    check_online_changes(online_changes)?;
                    table.create_index(create)?;
                }
                (None, Some(update), None) => table.update_index(&name, update)?,
                (None, None, Some(delete)) => {
                    online_changes += 1;
                    check_online_changes(online_changes)?;
                    table.delete_index(&name, delete)?;
                }
                _ => {
                    return Err(Error::invalid(
                        "One of GlobalSecondaryIndexUpdate.Create, Update, or Delete must be specified",
                    ))
                }
            }
        }
        table.check_definitions_used()?;
        table.status = TableStatus::Updating;

        tracing::debug!(table = %name, "updating table");
        let description = table.describe(&name);
        self.tables.insert(name, table);
        Ok(UpdateTableOutput {
            table_description: Some(description),
        })
    }

    fn tick(&mut self) {
        for (name, table) in &mut self.tables {
            let before = table.indexes.len();
            table.indexes.retain(|index| {
                let deleting = index.status == IndexStatus::Deleting;
                if deleting {
                    tracing::debug!(table = %name, index = %index.name, "index deleted");
                }
                !deleting
            });
            if table.indexes.len() != before {
                table.prune_definitions();
            }
            for index in &mut table.indexes {
                if index.status != IndexStatus::Active {
                    tracing::debug!(table = %name, index = %index.name, "index active");
                    index.status = IndexStatus::Active;
                }
            }
            if table.status != TableStatus::Active {
                tracing::debug!(table = %name, "table active");
                table.status = TableStatus::Active;
            }
        }
    }
}

impl Table {
    fn describe(&self, name: &str) -> TableDescription {
        TableDescription {
            attribute_definitions: Some(self.attribute_definitions.clone()),
            table_name: Some(name.to_string()),
            key_schema: Some(self.key_schema.clone()),
            table_status: Some(self.status.clone()),
            provisioned_throughput: Some(self.throughput.describe()),
            global_secondary_indexes: if self.indexes.is_empty() {
                None
            } else {
                Some(self.indexes.iter().map(Index::describe).collect())
            },
        }
    }

    /// Names of all attributes used by the table key or an index key.
    fn key_attributes(&self) -> BTreeSet<&str> {
        self.key_schema
            .iter()
            .chain(self.indexes.iter().flat_map(|i| i.key_schema.iter()))
            .map(|k| k.attribute_name.as_str())
            .collect()
    }

    fn check_definitions_used(&self) -> Result<()> {
        let used = self.key_attributes();
        if self
            .attribute_definitions
            .iter()
            .all(|d| used.contains(d.attribute_name.as_str()))
        {
            return Ok(());
        }
        Err(Error::invalid(format!(
            "Some AttributeDefinitions are not used. AttributeDefinitions: [{}], keys used: [{}]",
            join(self.attribute_definitions.iter().map(|d| d.attribute_name.as_str())),
            join(used.into_iter()),
        )))
    }

    fn prune_definitions(&mut self) {
        let used: BTreeSet<String> = self
            .key_attributes()
            .into_iter()
            .map(str::to_string)
            .collect();
        self.attribute_definitions
            .retain(|d| used.contains(&d.attribute_name));
    }

    fn merge_definitions(&mut self, definitions: Vec<AttributeDefinition>) -> Result<()> {
        check_duplicate_definitions(&definitions)?;
        for def in definitions {
            match self
                .attribute_definitions
                .iter()
                .find(|d| d.attribute_name == def.attribute_name)
            {
                Some(existing) if existing.attribute_type != def.attribute_type => {
                    return Err(Error::invalid(format!(
                        "Cannot change the type of attribute {} from {} to {}",
                        def.attribute_name, existing.attribute_type, def.attribute_type
                    )));
                }
                Some(_) => {}
                None => self.attribute_definitions.push(def),
            }
        }
        Ok(())
    }

    fn create_index(&mut self, action: CreateGlobalSecondaryIndexAction) -> Result<()> {
        if self.indexes.iter().any(|i| i.name == action.index_name) {
            return Err(Error::invalid(format!(
                "Attempting to create an index which already exists: {}",
                action.index_name
            )));
        }
        if self.indexes.len() >= MAX_GLOBAL_SECONDARY_INDEXES {
            return Err(Error::LimitExceeded(format!(
                "The number of global secondary indexes exceeds the maximum of {}",
                MAX_GLOBAL_SECONDARY_INDEXES
            )));
        }
        let index = Index::create(action.into(), &self.attribute_definitions)?;
        self.indexes.push(index);
        Ok(())
    }

    fn update_index(&mut self, table: &str, action: UpdateGlobalSecondaryIndexAction) -> Result<()> {
        let target = self.active_index(table, &action.index_name)?;
        let throughput = required(
            action.provisioned_throughput,
            &index::PROVISIONED_THROUGHPUT,
        )?;
        target.throughput.change(&throughput, "index")?;
        target.status = IndexStatus::Updating;
        Ok(())
    }

    fn delete_index(&mut self, table: &str, action: DeleteGlobalSecondaryIndexAction) -> Result<()> {
        let target = self.active_index(table, &action.index_name)?;
        target.status = IndexStatus::Deleting;
        Ok(())
    }

    fn active_index(&mut self, table: &str, name: &str) -> Result<&mut Index> {
        let index = self
            .indexes
            .iter_mut()
            .find(|i| i.name == name)
            .ok_or_else(|| Error::IndexNotFound {
                table: table.to_string(),
                index: name.to_string(),
            })?;
        if index.status != IndexStatus::Active {
            return Err(Error::ResourceInUse(format!(
                "Index: {} is in {} state",
                name, index.status
            )));
        }
        Ok(index)
    }
}

impl Index {
    fn create(gsi: GlobalSecondaryIndex, definitions: &[AttributeDefinition]) -> Result<Self> {
        check_key_schema(&gsi.key_schema, definitions)?;
        let projection = required(gsi.projection, &index::PROJECTION)?;
        check_projection(&projection)?;
        let throughput = required(gsi.provisioned_throughput, &index::PROVISIONED_THROUGHPUT)?;
        Ok(Index {
            name: gsi.index_name,
            status: IndexStatus::Creating,
            throughput: Throughput::new(&throughput),
            key_schema: gsi.key_schema,
            projection,
        })
    }

    fn describe(&self) -> GlobalSecondaryIndexDescription {
        GlobalSecondaryIndexDescription {
            index_name: Some(self.name.clone()),
            key_schema: Some(self.key_schema.clone()),
            projection: Some(self.projection.clone()),
            index_status: Some(self.status.clone()),
            provisioned_throughput: Some(self.throughput.describe()),
        }
    }
}

impl Throughput {
    fn new(t: &ProvisionedThroughput) -> Self {
        Throughput {
            read_capacity_units: t.read_capacity_units,
            write_capacity_units: t.write_capacity_units,
            decreases_today: 0,
        }
    }

    fn change(&mut self, to: &ProvisionedThroughput, what: &str) -> Result<()> {
        if to.read_capacity_units == self.read_capacity_units
            && to.write_capacity_units == self.write_capacity_units
        {
            return Err(Error::Validation(format!(
                "The provisioned throughput for the {what} will not change. The requested value equals the current value. \
                 Current ReadCapacityUnits provisioned for the {what}: {}. Requested ReadCapacityUnits: {}. \
                 Current WriteCapacityUnits provisioned for the {what}: {}. Requested WriteCapacityUnits: {}.",
                self.read_capacity_units,
                to.read_capacity_units,
                self.write_capacity_units,
                to.write_capacity_units,
            )));
        }
        if to.read_capacity_units < self.read_capacity_units
            || to.write_capacity_units < self.write_capacity_units
        {
            if self.decreases_today >= MAX_DECREASES_PER_DAY {
                return Err(Error::LimitExceeded(format!(
                    "Provisioned throughput decreases are limited within a given UTC day. \
                     Number of decreases today for the {what}: {}",
                    self.decreases_today
                )));
            }
            self.decreases_today += 1;
        }
        self.read_capacity_units = to.read_capacity_units;
        self.write_capacity_units = to.write_capacity_units;
        Ok(())
    }

    fn describe(&self) -> ProvisionedThroughputDescription {
        ProvisionedThroughputDescription {
            number_of_decreases_today: Some(self.decreases_today),
            read_capacity_units: Some(self.read_capacity_units),
            write_capacity_units: Some(self.write_capacity_units),
        }
    }
}

/// Unwraps a member the shape validation already required.
fn required<T>(value: Option<T>, member: &Member) -> Result<T> {
    value.ok_or_else(|| {
        Error::Validation(format!(
            "1 validation error detected: Value null at '{}' failed to satisfy constraint: Member must not be null",
            member.path_name()
        ))
    })
}

fn check_online_changes(n: usize) -> Result<()> {
    if n > 1 {
        return Err(Error::LimitExceeded(
            "Only 1 online index can be created or deleted simultaneously per table".to_string(),
        ));
    }
    Ok(())
}

fn check_duplicate_definitions(definitions: &[AttributeDefinition]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for def in definitions {
        if !seen.insert(def.attribute_name.as_str()) {
            return Err(Error::invalid(format!(
                "Duplicate AttributeName: {}",
                def.attribute_name
            )));
        }
    }
    Ok(())
}

/// A key is one HASH element, optionally followed by one RANGE element, over defined attributes.
fn check_key_schema(keys: &[KeySchemaElement], definitions: &[AttributeDefinition]) -> Result<()> {
    match keys.first() {
        Some(k) if k.key_type == KeyType::Hash => {}
        _ => {
            return Err(Error::invalid(
                "Invalid KeySchema: The first KeySchemaElement is not a HASH key type",
            ))
        }
    }
    if let Some(k) = keys.get(1) {
        if k.key_type != KeyType::Range {
            return Err(Error::invalid(
                "Invalid KeySchema: The second KeySchemaElement is not a RANGE key type",
            ));
        }
        if k.attribute_name == keys[0].attribute_name {
            return Err(Error::invalid(
                "Both the Hash Key and the Range Key element in the KeySchema have the same name",
            ));
        }
    }
    if keys.len() > 2 {
        return Err(Error::invalid("Too many KeySchemaElements"));
    }
    let defined = |k: &KeySchemaElement| {
        definitions
            .iter()
            .any(|d| d.attribute_name == k.attribute_name)
    };
    if !keys.iter().all(defined) {
        return Err(Error::invalid(format!(
            "Some index key attributes are not defined in AttributeDefinitions. Keys: [{}], AttributeDefinitions: [{}]",
            join(keys.iter().map(|k| k.attribute_name.as_str())),
            join(definitions.iter().map(|d| d.attribute_name.as_str())),
        )));
    }
    Ok(())
}

fn check_projection(projection: &Projection) -> Result<()> {
    match (&projection.projection_type, &projection.non_key_attributes) {
        (Some(ProjectionType::Include), None) => Err(Error::invalid(
            "ProjectionType is INCLUDE, but NonKeyAttributes is not specified",
        )),
        (Some(ProjectionType::Include), Some(_)) => Ok(()),
        (Some(other), Some(_)) => Err(Error::invalid(format!(
            "ProjectionType is {}, but NonKeyAttributes is specified",
            other
        ))),
        (None, Some(_)) => Err(Error::invalid(
            "NonKeyAttributes is specified without a ProjectionType",
        )),
        (_, None) => Ok(()),
    }
}

fn join<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}
