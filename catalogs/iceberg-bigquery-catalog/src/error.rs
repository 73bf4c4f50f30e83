/*!
Error type for the BigQuery metastore catalog
*/

use iceberg_rust::error::Error as IcebergError;
use thiserror::Error;

#[derive(Error, Debug)]
/// BigQuery catalog error
pub enum Error {
    /// Generic error message
    #[error("{0}")]
    Text(String),
    /// Not found
    #[error("{0} not found.")]
    NotFound(String),
    /// Parse bool error
    #[error(transparent)]
    ParseBool(#[from] std::str::ParseBoolError),
    /// Serde json
    #[error(transparent)]
    JSONSerde(#[from] serde_json::Error),
    /// derive builder
    #[error(transparent)]
    DeriveBuilder(#[from] derive_builder::UninitializedFieldError),
}

impl From<Error> for IcebergError {
    fn from(value: Error) -> Self {
        IcebergError::InvalidFormat(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use iceberg_rust::error::Error as IcebergError;

    use super::Error;

    #[test]
    fn test_into_iceberg_error() {
        let error: IcebergError = Error::NotFound("Property warehouse".to_owned()).into();
        assert!(matches!(
            error,
            IcebergError::InvalidFormat(message) if message == "Property warehouse not found."
        ));
    }
}
