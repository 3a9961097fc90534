use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use kycheck_core::models::NegativePhraseSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::classifier::OutcomeClassifier;
use crate::error::ConfigError;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding step in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

/// On-disk classifier configuration.
///
/// Phrase lists are kept as plain strings here and validated when the
/// classifier is built, so a bad phrase is reported as
/// [`ConfigError::Invalid`] rather than a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Replaces the built-in list when present.
    #[serde(
        rename = "negativePhrases",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub negative_phrases: Option<Vec<String>>,
    /// Per-provider replacement lists, keyed by provider id.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub providers: BTreeMap<String, Vec<String>>,
}

impl ClassifierConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        // Parse as raw JSON so we can run migrations before deserializing.
        let json: Value = serde_json::from_str(contents)?;
        let on_disk_version = json
            .get("config_version")
            .and_then(Value::as_u64)
            .unwrap_or(0);
        let on_disk_version = u32::try_from(on_disk_version).unwrap_or(u32::MAX);

        let migrated = migrate(json, on_disk_version)?;
        Ok(serde_json::from_value(migrated)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(io_err)?;
        }

        // Always write the current version, regardless of what was loaded.
        let mut stamped = self.clone();
        stamped.config_version = CURRENT_VERSION;

        let json = serde_json::to_string_pretty(&stamped)?;

        // Write to a temp file then rename for atomicity
        let mut tmp_name = path.as_os_str().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);
        std::fs::write(&tmp_path, json.as_bytes()).map_err(io_err)?;
        std::fs::rename(&tmp_path, path).map_err(io_err)?;

        tracing::info!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Validate the phrase lists and build a classifier from them.
    pub fn into_classifier(self) -> Result<OutcomeClassifier, ConfigError> {
        let base = match self.negative_phrases {
            Some(phrases) => NegativePhraseSet::new(phrases)?,
            None => NegativePhraseSet::default(),
        };

        let mut classifier = OutcomeClassifier::new(base);
        for (provider, phrases) in self.providers {
            classifier = classifier.with_provider(provider, NegativePhraseSet::new(phrases)?);
        }
        Ok(classifier)
    }
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: Value, from_version: u32) -> Result<Value, ConfigError> {
    if from_version > CURRENT_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: `negative_phrases` renamed to `negativePhrases`
    if from_version < 1 {
        let obj = json.as_object_mut().ok_or(ConfigError::NotAnObject)?;
        if let Some(legacy) = obj.remove("negative_phrases") {
            obj.entry("negativePhrases").or_insert(legacy);
        }
        obj.insert("config_version".to_string(), Value::Number(1.into()));
        tracing::info!("migrated config v0 → v1 (renamed negative_phrases)");
    }

    Ok(json)
}
