/// Result alias used across the crate; domain errors are `LabdocError` wrapped in `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
