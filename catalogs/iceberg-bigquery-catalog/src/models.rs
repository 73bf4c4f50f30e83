/*!
BigQuery metastore resources as they appear in the BigQuery REST API.

Only the fields the Iceberg integration reads or writes are modeled. All types
serialize with the camelCase field names of the API.
*/

use std::{collections::HashMap, fmt, str};

use serde_derive::{Deserialize, Serialize};

use crate::error::Error;

/// Serializer and deserializer information of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerDeInfo {
    /// Fully qualified class name of the serialization library.
    pub serialization_library: String,
    /// Name of the SerDe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Key-value pairs that define the initialization parameters of the serialization library.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, String>>,
}

impl SerDeInfo {
    pub fn new(serialization_library: String) -> SerDeInfo {
        SerDeInfo {
            serialization_library,
            name: None,
            parameters: None,
        }
    }
}

/// Physical storage information of the data of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageDescriptor {
    /// The physical location of the table.
    pub location_uri: String,
    /// Fully qualified class name of the input format.
    pub input_format: String,
    /// Fully qualified class name of the output format.
    pub output_format: String,
    /// Serializer and deserializer information.
    pub serde_info: SerDeInfo,
}

impl StorageDescriptor {
    pub fn new(
        location_uri: String,
        input_format: String,
        output_format: String,
        serde_info: SerDeInfo,
    ) -> StorageDescriptor {
        StorageDescriptor {
            location_uri,
            input_format,
            output_format,
            serde_info,
        }
    }
}

/// Metadata about open source compatible table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalCatalogTableOptions {
    /// Storage descriptor of the table.
    pub storage_descriptor: StorageDescriptor,
    /// Key-value pairs of table properties.
    #[serde(default)]
    pub parameters: HashMap<String, String>,
    /// Connection used to read external storage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<String>,
}

impl ExternalCatalogTableOptions {
    pub fn new(
        storage_descriptor: StorageDescriptor,
        parameters: HashMap<String, String>,
    ) -> ExternalCatalogTableOptions {
        ExternalCatalogTableOptions {
            storage_descriptor,
            parameters,
            connection_id: None,
        }
    }
}

/// Options defining open source compatible datasets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalCatalogDatasetOptions {
    /// The storage location URI for all tables in the dataset.
    pub default_storage_location_uri: String,
    /// Key-value pairs of dataset properties.
    #[serde(default)]
    pub parameters: HashMap<String, String>,
}

impl ExternalCatalogDatasetOptions {
    pub fn new(
        default_storage_location_uri: String,
        parameters: HashMap<String, String>,
    ) -> ExternalCatalogDatasetOptions {
        ExternalCatalogDatasetOptions {
            default_storage_location_uri,
            parameters,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableReference {
    pub project_id: String,
    pub dataset_id: String,
    pub table_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetReference {
    pub project_id: String,
    pub dataset_id: String,
}

/// Table resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub table_reference: TableReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_catalog_table_options: Option<ExternalCatalogTableOptions>,
    /// Hash of the resource, used for optimistic concurrency on updates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

/// Dataset resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub dataset_reference: DatasetReference,
    /// Geographic location of the dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_catalog_dataset_options: Option<ExternalCatalogDatasetOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            &serde_json::to_string(self).map_err(|_| fmt::Error)?,
        )
    }
}

impl str::FromStr for Table {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map_err(Error::from)
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            &serde_json::to_string(self).map_err(|_| fmt::Error)?,
        )
    }
}

impl str::FromStr for Dataset {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::{json, Value};

    use super::*;

    #[test]
    fn test_storage_descriptor_field_names() {
        let descriptor = StorageDescriptor::new(
            "gs://bucket/table".to_owned(),
            "input".to_owned(),
            "output".to_owned(),
            SerDeInfo::new("serde".to_owned()),
        );
        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(
            value,
            json!({
                "locationUri": "gs://bucket/table",
                "inputFormat": "input",
                "outputFormat": "output",
                "serdeInfo": { "serializationLibrary": "serde" }
            })
        );
    }

    #[test]
    fn test_empty_parameters_serialized() {
        let options = ExternalCatalogDatasetOptions::new(String::new(), HashMap::new());
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(
            value,
            json!({ "defaultStorageLocationUri": "", "parameters": {} })
        );
    }

    #[test]
    fn test_missing_parameters_default() {
        let options: ExternalCatalogDatasetOptions =
            serde_json::from_value(json!({ "defaultStorageLocationUri": "gs://bucket/" }))
                .unwrap();
        assert!(options.parameters.is_empty());
    }

    #[test]
    fn test_table_from_str() {
        let table: Table = r#"{
            "tableReference": {
                "projectId": "project",
                "datasetId": "dataset",
                "tableId": "table"
            },
            "etag": "abc"
        }"#
        .parse()
        .unwrap();
        assert_eq!(table.table_reference.table_id, "table");
        assert_eq!(table.etag.as_deref(), Some("abc"));
        assert!(table.external_catalog_table_options.is_none());

        let value: Value = serde_json::from_str(&table.to_string()).unwrap();
        assert_eq!(value["tableReference"]["datasetId"], "dataset");
        assert!(value.get("externalCatalogTableOptions").is_none());
    }

    #[test]
    fn test_dataset_from_str_invalid() {
        assert!(matches!(
            "{\"location\": \"us\"}".parse::<Dataset>(),
            Err(Error::JSONSerde(_))
        ));
    }
}
