/*!
Configuration of the BigQuery metastore catalog.

The configuration can be built with [BigQueryCatalogConfigBuilder] or parsed from the
catalog properties:

| Property                       | Default |
|--------------------------------|---------|
| `gcp.bigquery.project-id`      | required |
| `gcp.bigquery.location`        | `us`    |
| `warehouse`                    | none    |
| `gcp.bigquery.list-all-tables` | `true`  |
*/

use std::collections::HashMap;

use derive_builder::Builder;
use derive_getters::Getters;

use crate::error::Error;

/// Property key of the Google Cloud project
pub const PROJECT_ID: &str = "gcp.bigquery.project-id";
/// Property key of the geographic location of new datasets
pub const GCP_LOCATION: &str = "gcp.bigquery.location";
/// Property key of the warehouse location
pub const WAREHOUSE: &str = "warehouse";
/// Property key controlling whether non Iceberg tables are listed
pub const LIST_ALL_TABLES: &str = "gcp.bigquery.list-all-tables";

pub(crate) const DEFAULT_GCP_LOCATION: &str = "us";

#[derive(Debug, Clone, PartialEq, Eq, Builder, Getters)]
#[builder(build_fn(error = "Error"), setter(prefix = "with", into))]
pub struct BigQueryCatalogConfig {
    /// Google Cloud project that owns the datasets
    project_id: String,
    /// Location of newly created datasets
    #[builder(default = "DEFAULT_GCP_LOCATION.to_string()")]
    location: String,
    /// Root location for the default storage location of datasets
    #[builder(setter(strip_option), default)]
    warehouse: Option<String>,
    /// List all tables of a dataset instead of only Iceberg tables
    #[builder(default = "true")]
    list_all_tables: bool,
}

impl BigQueryCatalogConfig {
    /// Default storage location of a dataset below the warehouse.
    pub fn default_storage_location_uri(&self, dataset_id: &str) -> Result<String, Error> {
        let warehouse = self
            .warehouse
            .as_deref()
            .ok_or(Error::NotFound(format!("Property {WAREHOUSE}")))?;
        Ok(format!(
            "{}/{}.db",
            warehouse.trim_end_matches('/'),
            dataset_id
        ))
    }
}

impl TryFrom<&HashMap<String, String>> for BigQueryCatalogConfig {
    type Error = Error;
    fn try_from(properties: &HashMap<String, String>) -> Result<Self, Self::Error> {
        let mut builder = BigQueryCatalogConfigBuilder::default();
        builder.with_project_id(
            properties
                .get(PROJECT_ID)
                .ok_or(Error::NotFound(format!("Property {PROJECT_ID}")))?,
        );
        if let Some(location) = properties.get(GCP_LOCATION) {
            builder.with_location(location);
        }
        if let Some(warehouse) = properties.get(WAREHOUSE) {
            builder.with_warehouse(warehouse);
        }
        if let Some(list_all_tables) = properties.get(LIST_ALL_TABLES) {
            builder.with_list_all_tables(list_all_tables.trim().parse::<bool>()?);
        }
        builder.build()
    }
}
