use thiserror::Error;

#[derive(Error, Debug)]
pub enum CellError {
    #[error("Invalid cell type: {label:?} (expected Stem, Differentiated or Cancer)")]
    InvalidCellType { label: String },

    #[error("Unknown cell type in table row: {label:?}")]
    UnknownCellType { label: String },

    #[error("Phase length mismatch: before has {before} rows, after has {after} rows")]
    PhaseLengthMismatch { before: usize, after: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CellError {
    /// Domain errors signal a broken invariant and abort the run.
    pub fn is_recoverable(&self) -> bool {
        match self {
            CellError::Io(_) => true,
            CellError::Csv(_) => true,
            CellError::ConfigParse(_) => true,
            CellError::InvalidConfig(_) => false,
            CellError::InvalidCellType { .. } => false,
            CellError::UnknownCellType { .. } => false,
            CellError::PhaseLengthMismatch { .. } => false,
        }
    }
}

impl From<serde_yaml::Error> for CellError {
    fn from(err: serde_yaml::Error) -> Self {
        CellError::ConfigParse(err.to_string())
    }
}

impl From<serde_json::Error> for CellError {
    fn from(err: serde_json::Error) -> Self {
        CellError::ConfigParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CellError>;
