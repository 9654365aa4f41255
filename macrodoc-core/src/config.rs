use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::GenerateError;

/// Namespace prefixes scanned when no configuration overrides them.
pub const DEFAULT_NAMESPACES: &[&str] = &["App\\", "Illuminate\\"];

/// Classes excluded by default even when they match an allowed prefix.
///
/// `Illuminate\Filesystem\Cache` is the one exclusion the IDE-helper
/// ecosystem ships out of the box: reflecting it errors on several framework
/// versions.
pub const DEFAULT_REJECTS: &[&str] = &["Illuminate\\Filesystem\\Cache"];

/// Name of the generated helper file, relative to the project root.
pub const DEFAULT_FILENAME: &str = "_macro_ide_helper.php";

const DEFAULT_CLASS_MAP: &str = "vendor/composer/autoload_classmap.php";
const DEFAULT_MANIFEST: &str = "bootstrap/cache/macros.json";
const CONFIG_FILE: &str = "macrodoc.yaml";

/// Settings for one generation run.
///
/// Consumed once at the start of the run; there is no global configuration
/// access anywhere in the pipeline. Build one with [`GeneratorConfig::new`]
/// (defaults only) or [`GeneratorConfig::load`] (defaults merged with an
/// optional `macrodoc.yaml` at the project root), then adjust fields
/// directly.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Project root. Relative artifact paths resolve against it, and macro
    /// source locations are reported relative to it.
    pub base_path: PathBuf,
    /// Allowed namespace prefixes. A class must start with one of these.
    pub namespaces: Vec<String>,
    /// Fully-qualified class names excluded from the output.
    pub rejects: Vec<String>,
    /// Output file, relative to `base_path` unless absolute.
    pub filename: PathBuf,
    /// Class map artifact, relative to `base_path` unless absolute.
    pub class_map: PathBuf,
    /// Macro manifest artifact, relative to `base_path` unless absolute.
    pub manifest: PathBuf,
}

/// On-disk shape of `macrodoc.yaml`. All keys optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    namespaces: Option<Vec<String>>,
    rejects: Option<Vec<String>>,
    filename: Option<PathBuf>,
    class_map: Option<PathBuf>,
    manifest: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Built-in defaults for the given project root.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            namespaces: DEFAULT_NAMESPACES.iter().map(|s| s.to_string()).collect(),
            rejects: DEFAULT_REJECTS.iter().map(|s| s.to_string()).collect(),
            filename: PathBuf::from(DEFAULT_FILENAME),
            class_map: PathBuf::from(DEFAULT_CLASS_MAP),
            manifest: PathBuf::from(DEFAULT_MANIFEST),
        }
    }

    /// Defaults merged with the project's config file.
    ///
    /// When `config_file` is `Some`, that file must exist and parse. When it
    /// is `None`, `<base_path>/macrodoc.yaml` is merged if present and
    /// silently skipped if absent.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::ConfigLoad`] if the file cannot be read or
    /// is not valid YAML.
    pub fn load(
        base_path: impl Into<PathBuf>,
        config_file: Option<&Path>,
    ) -> Result<Self, GenerateError> {
        let mut config = Self::new(base_path);

        let path = match config_file {
            Some(explicit) => explicit.to_path_buf(),
            None => {
                let default = config.base_path.join(CONFIG_FILE);
                if !default.exists() {
                    return Ok(config);
                }
                default
            }
        };

        let contents = std::fs::read_to_string(&path).map_err(|e| GenerateError::ConfigLoad {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let file: ConfigFile =
            serde_yaml::from_str(&contents).map_err(|e| GenerateError::ConfigLoad {
                path: path.clone(),
                message: e.to_string(),
            })?;

        if let Some(namespaces) = file.namespaces {
            config.namespaces = namespaces;
        }
        if let Some(rejects) = file.rejects {
            config.rejects = rejects;
        }
        if let Some(filename) = file.filename {
            config.filename = filename;
        }
        if let Some(class_map) = file.class_map {
            config.class_map = class_map;
        }
        if let Some(manifest) = file.manifest {
            config.manifest = manifest;
        }

        Ok(config)
    }

    /// Absolute path of the class map artifact.
    pub fn class_map_path(&self) -> PathBuf {
        self.base_path.join(&self.class_map)
    }

    /// Absolute path of the macro manifest artifact.
    pub fn manifest_path(&self) -> PathBuf {
        self.base_path.join(&self.manifest)
    }

    /// Absolute path of the generated helper file.
    pub fn output_path(&self) -> PathBuf {
        self.base_path.join(&self.filename)
    }
}
