use std::collections::HashMap;

use crate::models::{
    ExternalCatalogDatasetOptions, ExternalCatalogTableOptions, SerDeInfo, StorageDescriptor,
};

/// Serialization library of Iceberg tables registered in the metastore
pub const HIVE_SERIALIZATION_LIBRARY: &str = "org.apache.iceberg.mr.hive.HiveIcebergSerDe";
/// Input format of Iceberg tables registered in the metastore
pub const HIVE_FILE_INPUT_FORMAT: &str = "org.apache.iceberg.mr.hive.HiveIcebergInputFormat";
/// Output format of Iceberg tables registered in the metastore
pub const HIVE_FILE_OUTPUT_FORMAT: &str = "org.apache.iceberg.mr.hive.HiveIcebergOutputFormat";

/// Parameter key `metadata_location` for `ExternalCatalogTableOptions`
pub(crate) const METADATA_LOCATION: &str = "metadata_location";
/// Parameter key `previous_metadata_location` for `ExternalCatalogTableOptions`
pub(crate) const PREVIOUS_METADATA_LOCATION: &str = "previous_metadata_location";
/// Parameter key `table_type` for `ExternalCatalogTableOptions`
pub(crate) const TABLE_TYPE: &str = "table_type";
/// Parameter value `table_type` for `ExternalCatalogTableOptions`
pub(crate) const ICEBERG: &str = "iceberg";
/// Parameter key `EXTERNAL` for `ExternalCatalogTableOptions`
pub(crate) const EXTERNAL: &str = "EXTERNAL";

/// Creates table options populated with the Iceberg SerDe and file formats and the given parameters.
pub fn create_external_catalog_table_options(
    location_uri: String,
    parameters: HashMap<String, String>,
) -> ExternalCatalogTableOptions {
    let serde_info = SerDeInfo::new(HIVE_SERIALIZATION_LIBRARY.to_owned());

    let storage_descriptor = StorageDescriptor::new(
        location_uri,
        HIVE_FILE_INPUT_FORMAT.to_owned(),
        HIVE_FILE_OUTPUT_FORMAT.to_owned(),
        serde_info,
    );

    ExternalCatalogTableOptions::new(storage_descriptor, parameters)
}

/// Creates dataset options with the default storage location of the dataset and its metadata parameters.
pub fn create_external_catalog_dataset_options(
    default_storage_location_uri: String,
    metadata_parameters: HashMap<String, String>,
) -> ExternalCatalogDatasetOptions {
    ExternalCatalogDatasetOptions::new(default_storage_location_uri, metadata_parameters)
}

/// Table parameters pointing the metastore at the current metadata file.
///
/// Reserved keys take precedence over table properties with the same name.
pub fn get_parameters(
    metadata_location: &str,
    previous_metadata_location: Option<&str>,
    properties: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut parameters = properties.clone();
    parameters.insert(EXTERNAL.to_string(), "TRUE".to_string());
    parameters.insert(TABLE_TYPE.to_string(), ICEBERG.to_string());
    parameters.insert(METADATA_LOCATION.to_string(), metadata_location.to_string());
    if let Some(previous) = previous_metadata_location {
        parameters.insert(PREVIOUS_METADATA_LOCATION.to_string(), previous.to_string());
    } else {
        parameters.remove(PREVIOUS_METADATA_LOCATION);
    }
    parameters
}
