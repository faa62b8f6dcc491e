use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog JSON failure: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("catalog YAML failure: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),
}
