use std::path::PathBuf;
use thiserror::Error;

/// Error type for catalog loading.
///
/// Every variant is fatal for the load in progress: a catalog is either built
/// completely or not at all.
#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Malformed name template '{template}': {reason}")]
    MalformedTemplate { template: String, reason: String },
    #[error("Unresolved placeholder '{{{placeholder}}}' in {field} of model '{model}'")]
    UnresolvedPlaceholder {
        model: String,
        field: &'static str,
        placeholder: String,
    },
    #[error("Parameter '{parameter}' of model '{model}' declares no values")]
    EmptyParameter { model: String, parameter: String },
    #[error("Parameter '{parameter}' is declared more than once for model '{model}'")]
    DuplicateParameter { model: String, parameter: String },
    #[error("Scenario '{scenario}' of model '{model}' declares year {year} more than once")]
    DuplicateYear {
        model: String,
        scenario: String,
        year: i32,
    },
    #[error("Cannot format field '{field}' with '{spec}': {reason}")]
    InvalidFormat {
        field: String,
        spec: String,
        reason: String,
    },
    #[error("Validation error: hash {computed} different to specified hash {expected} ({key}, scenario {scenario}, year {year})")]
    PeriodKeyMismatch {
        key: String,
        scenario: String,
        year: i32,
        computed: String,
        expected: String,
    },
    #[error("Recorded period for year {recorded} does not line up with declared year {declared} ({key}, scenario {scenario})")]
    PeriodYearMismatch {
        key: String,
        scenario: String,
        declared: i32,
        recorded: i32,
    },
    #[error("Scenario {scenario} of {key} records {recorded} periods but declares only {declared} years")]
    TooManyRecordedPeriods {
        key: String,
        scenario: String,
        declared: usize,
        recorded: usize,
    },
    #[error("Duplicate resource key '{key}'")]
    DuplicateResourceKey { key: String },
    #[error("Colormap '{name}' is supplied by more than one catalog source")]
    DuplicateColormap { name: String },
    #[error("Could not decode catalog document: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type for `Result<T, InventoryError>`.
pub type InventoryResult<T> = Result<T, InventoryError>;
