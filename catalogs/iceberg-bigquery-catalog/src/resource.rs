/*!
Conversion between Iceberg tables and namespaces and BigQuery metastore resources.

An Iceberg namespace maps to a BigQuery dataset and therefore has to consist of exactly one level.
*/

use std::collections::HashMap;

use iceberg_rust::catalog::{identifier::Identifier, namespace::Namespace};
use tracing::{debug, instrument};

use crate::{
    config::BigQueryCatalogConfig,
    error::Error,
    models::{Dataset, DatasetReference, Table, TableReference},
    utils::{
        create_external_catalog_dataset_options, create_external_catalog_table_options,
        get_parameters, ICEBERG, METADATA_LOCATION, PREVIOUS_METADATA_LOCATION, TABLE_TYPE,
    },
};

/// Namespace property holding the default storage location of a dataset
pub const LOCATION: &str = "location";

impl DatasetReference {
    pub fn try_new(project_id: &str, namespace: &Namespace) -> Result<Self, Error> {
        match &namespace[..] {
            [dataset_id] if !dataset_id.is_empty() => Ok(DatasetReference {
                project_id: project_id.to_owned(),
                dataset_id: dataset_id.to_owned(),
            }),
            _ => Err(Error::Text(format!(
                "BigQuery dataset requires a single level namespace, got \"{namespace}\""
            ))),
        }
    }
}

impl TableReference {
    pub fn try_new(project_id: &str, identifier: &Identifier) -> Result<Self, Error> {
        let DatasetReference {
            project_id,
            dataset_id,
        } = DatasetReference::try_new(project_id, identifier.namespace())?;
        Ok(TableReference {
            project_id,
            dataset_id,
            table_id: identifier.name().to_owned(),
        })
    }
}

/// Builds the table resource registering an Iceberg table with the metadata file at `metadata_location`.
#[instrument(level = "debug", skip(config, properties), fields(project_id = %config.project_id()))]
pub fn table_resource(
    config: &BigQueryCatalogConfig,
    identifier: &Identifier,
    table_location: &str,
    metadata_location: &str,
    previous_metadata_location: Option<&str>,
    properties: &HashMap<String, String>,
) -> Result<Table, Error> {
    let table_reference = TableReference::try_new(config.project_id(), identifier)?;

    let options = create_external_catalog_table_options(
        table_location.to_owned(),
        get_parameters(metadata_location, previous_metadata_location, properties),
    );

    debug!(
        dataset_id = %table_reference.dataset_id,
        table_id = %table_reference.table_id,
        "built BigQuery table resource"
    );

    Ok(Table {
        table_reference,
        external_catalog_table_options: Some(options),
        etag: None,
    })
}

/// Builds the dataset resource for a namespace.
///
/// The default storage location is taken from the `location` property and falls back to the warehouse.
#[instrument(level = "debug", skip(config, properties), fields(project_id = %config.project_id()))]
pub fn dataset_resource(
    config: &BigQueryCatalogConfig,
    namespace: &Namespace,
    properties: &HashMap<String, String>,
) -> Result<Dataset, Error> {
    let dataset_reference = DatasetReference::try_new(config.project_id(), namespace)?;

    let mut parameters = properties.clone();
    let default_storage_location_uri = match parameters.remove(LOCATION) {
        Some(location) => location,
        None => config.default_storage_location_uri(&dataset_reference.dataset_id)?,
    };

    debug!(
        dataset_id = %dataset_reference.dataset_id,
        location = %config.location(),
        "built BigQuery dataset resource"
    );

    Ok(Dataset {
        dataset_reference,
        location: Some(config.location().to_owned()),
        external_catalog_dataset_options: Some(create_external_catalog_dataset_options(
            default_storage_location_uri,
            parameters,
        )),
        etag: None,
    })
}

impl Table {
    /// Parameters of the external catalog table options
    pub fn parameters(&self) -> Option<&HashMap<String, String>> {
        self.external_catalog_table_options
            .as_ref()
            .map(|options| &options.parameters)
    }
    /// Location of the current metadata file
    pub fn metadata_location(&self) -> Result<&str, Error> {
        self.parameters()
            .and_then(|parameters| parameters.get(METADATA_LOCATION))
            .map(String::as_str)
            .ok_or(Error::NotFound(format!(
                "Metadata location of table {}",
                self.table_reference.table_id
            )))
    }
    /// Location of the metadata file replaced by the last commit
    pub fn previous_metadata_location(&self) -> Option<&str> {
        self.parameters()
            .and_then(|parameters| parameters.get(PREVIOUS_METADATA_LOCATION))
            .map(String::as_str)
    }
    /// Whether the table is registered as an Iceberg table
    pub fn is_iceberg(&self) -> bool {
        self.parameters()
            .and_then(|parameters| parameters.get(TABLE_TYPE))
            .is_some_and(|table_type| table_type.eq_ignore_ascii_case(ICEBERG))
    }
}

impl Dataset {
    /// Namespace properties stored in the dataset, including its default storage `location`.
    pub fn namespace_properties(&self) -> HashMap<String, String> {
        let Some(options) = &self.external_catalog_dataset_options else {
            return HashMap::new();
        };
        let mut properties = options.parameters.clone();
        if !options.default_storage_location_uri.is_empty() {
            properties.insert(
                LOCATION.to_owned(),
                options.default_storage_location_uri.clone(),
            );
        }
        properties
    }
}
