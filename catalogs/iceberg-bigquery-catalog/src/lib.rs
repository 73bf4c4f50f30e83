//! BigQuery metastore catalog support for Iceberg tables.
//!
//! This crate shapes the resources the BigQuery metastore stores for Iceberg tables and namespaces:
//!
//! - `utils`: External catalog table and dataset options with the Iceberg SerDe and file formats
//! - `models`: BigQuery REST resources (tables, datasets and their options)
//! - `resource`: Table and dataset resources from Iceberg identifiers and namespaces
//! - `config`: Catalog configuration read from the catalog properties
//! - `error`: Error types and handling
//!
pub mod config;
pub mod error;
pub mod models;
pub mod resource;
pub mod utils;

pub use config::{BigQueryCatalogConfig, BigQueryCatalogConfigBuilder};
pub use resource::{dataset_resource, table_resource};
pub use utils::{create_external_catalog_dataset_options, create_external_catalog_table_options};
