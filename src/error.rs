use thiserror::Error;

/// Every failure reported by this crate.
///
/// Validation errors (estimator, pair selection, network consistency) are raised
/// before anything is rendered.
#[derive(Error, Debug)]
pub enum DualRegulonError {
    #[error("unknown estimator `{0}`; expected one of 'pearson', 'spearman' or 'kendall'")]
    UnknownEstimator(String),

    #[error("none of the requested dual regulons were found in the results table")]
    PairsNotFound,

    #[error("some of the requested dual regulons are not in the results table: {}", .missing.join(", "))]
    PartialMatch { missing: Vec<String> },

    #[error("network is not fully processed: {0}")]
    IncompleteNetwork(String),

    #[error("networks do not share the same gene universe: {0}")]
    GeneUniverseMismatch(String),

    #[error("regulators appear in both networks: {}", .0.join(", "))]
    OverlappingRegulators(Vec<String>),

    #[error("unknown regulator `{0}`")]
    UnknownRegulator(String),

    #[error("unknown gene `{0}`")]
    UnknownGene(String),

    #[error("duplicate identifier `{0}`")]
    DuplicateId(String),

    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("missing column `{0}`")]
    MissingColumn(String),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid colour `{0}`; expected `#RRGGBB`")]
    InvalidColor(String),

    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("rendering failed: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DualRegulonError>;
