use std::path::PathBuf;

/// Error type for a generation run.
///
/// Every variant is fatal: it aborts the run before the helper file is
/// written. Per-class problems are deliberately *not* represented here;
/// they are collected as [`ManifestIssue`](crate::manifest::ManifestIssue)s
/// and the affected class is skipped while the run continues.
#[derive(Debug)]
pub enum GenerateError {
    /// The class map artifact does not exist at the expected path.
    ClassMapMissing(PathBuf),
    /// The class map exists but could not be read.
    ClassMapLoad { path: PathBuf, message: String },
    /// The macro manifest does not exist at the expected path.
    ManifestMissing(PathBuf),
    /// The macro manifest exists but could not be read or is not valid JSON.
    ManifestLoad { path: PathBuf, message: String },
    /// The configuration file exists but could not be read or parsed.
    ConfigLoad { path: PathBuf, message: String },
    /// The generated helper file could not be written.
    OutputWrite { path: PathBuf, message: String },
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::ClassMapMissing(path) => {
                write!(f, "class map not found: {}", path.display())
            }
            GenerateError::ClassMapLoad { path, message } => {
                write!(f, "failed to load class map {}: {message}", path.display())
            }
            GenerateError::ManifestMissing(path) => {
                write!(f, "macro manifest not found: {}", path.display())
            }
            GenerateError::ManifestLoad { path, message } => {
                write!(f, "failed to load macro manifest {}: {message}", path.display())
            }
            GenerateError::ConfigLoad { path, message } => {
                write!(f, "failed to load config {}: {message}", path.display())
            }
            GenerateError::OutputWrite { path, message } => {
                write!(f, "failed to write {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for GenerateError {}
