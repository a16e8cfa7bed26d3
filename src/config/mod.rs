use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::ItemVariant;
use crate::errors::{LibraryError, LibraryResult};
use crate::utils::DEFAULT_LOG_FILTER;

const APP_DIR_NAME: &str = "lending_core";
const CONFIG_FILE: &str = "config.json";
const HOME_ENV: &str = "LENDING_CORE_HOME";
const TMP_SUFFIX: &str = "tmp";

/// Startup settings for a library instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibraryConfig {
    #[serde(default = "LibraryConfig::default_log_filter")]
    pub log_filter: String,
    #[serde(default = "LibraryConfig::default_seed_items")]
    pub seed_items: Vec<SeedItem>,
}

impl LibraryConfig {
    pub fn default_log_filter() -> String {
        DEFAULT_LOG_FILTER.to_string()
    }

    /// The two titles every fresh catalog starts with.
    pub fn default_seed_items() -> Vec<SeedItem> {
        vec![
            SeedItem {
                kind: ItemVariant::Regular,
                title: "1984".into(),
                author: "George Orwell".into(),
                issue_date: None,
            },
            SeedItem {
                kind: ItemVariant::Periodical,
                title: "Scientific American".into(),
                author: "Various".into(),
                issue_date: NaiveDate::from_ymd_opt(2024, 10, 1),
            },
        ]
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            log_filter: Self::default_log_filter(),
            seed_items: Self::default_seed_items(),
        }
    }
}

/// Catalog entry created when a library starts up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedItem {
    pub kind: ItemVariant,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<NaiveDate>,
}

/// Loads and saves [`LibraryConfig`] as JSON under an application directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Uses `$LENDING_CORE_HOME` when set, else the platform config directory.
    pub fn new() -> LibraryResult<Self> {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return Ok(Self::with_base_dir(PathBuf::from(custom)));
        }
        let base = dirs::config_dir()
            .ok_or(LibraryError::ConfigDirUnavailable)?
            .join(APP_DIR_NAME);
        Ok(Self::with_base_dir(base))
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            path: base.join(CONFIG_FILE),
        }
    }

    /// Reads the config file, falling back to defaults when it does not exist.
    pub fn load(&self) -> LibraryResult<LibraryConfig> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(LibraryConfig::default())
        }
    }

    pub fn save(&self, config: &LibraryConfig) -> LibraryResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> LibraryResult<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_path_appends_suffix() {
        let tmp = tmp_path(Path::new("/tmp/lib/config.json"));
        assert_eq!(tmp, PathBuf::from("/tmp/lib/config.json.tmp"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: LibraryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LibraryConfig::default());
        assert_eq!(config.seed_items.len(), 2);
        assert_eq!(config.log_filter, "lending_core=info");
    }

    #[test]
    fn seed_items_parse_from_json() {
        let config: LibraryConfig = serde_json::from_str(
            r#"{"seed_items":[{"kind":"periodical","title":"Nature","issue_date":"2025-01-15"}]}"#,
        )
        .unwrap();
        assert_eq!(config.seed_items.len(), 1);
        let seed = &config.seed_items[0];
        assert_eq!(seed.kind, ItemVariant::Periodical);
        assert_eq!(seed.author, "");
        assert_eq!(seed.issue_date, NaiveDate::from_ymd_opt(2025, 1, 15));
    }
}
