//! INI configuration file loading.
//!
//! Options are read from the `[DEFAULT]` section (or from keys outside any
//! section). A missing option takes its off-fallback; a malformed value takes
//! its off-fallback and produces a [`ConfigWarning`]; neither aborts loading.

use std::fs;
use std::path::{Path, PathBuf};

use ::config::{Config, File, FileFormat, Source, ValueKind};
use serde::Serialize;

use super::{OptionName, OptionValue, Options};
use crate::error::{Error, Result};

/// Section holding the options.
pub const DEFAULT_SECTION: &str = "DEFAULT";

const CONFIG_DIR: &str = ".abbacus";
const CONFIG_FILE: &str = "config.ini";

/// Location of the per-user configuration file (`~/.abbacus/config.ini`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Where a resolved configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from an existing file
    File(PathBuf),
    /// A default file was written and its values used
    CreatedDefault(PathBuf),
}

/// A malformed option value that was replaced by its off-fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigWarning {
    /// Option that was malformed
    pub option: OptionName,
    /// Raw value found in the file
    pub value: String,
    /// Value used instead
    pub fallback: OptionValue,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid value '{}' set for {}, defaulting to off: {}",
            self.value, self.option, self.fallback
        )
    }
}

/// Options resolved from a configuration source.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Fully populated options
    pub options: Options,

    /// Values that were replaced by their off-fallback
    pub warnings: Vec<ConfigWarning>,

    /// Keys in the source that are not recognized options
    pub unrecognized: Vec<String>,
}

impl ResolvedConfig {
    /// Look up an option by name.
    ///
    /// Keys present in the source but not implemented are an error here,
    /// not at load time.
    pub fn get(&self, name: &str) -> Result<OptionValue> {
        if self
            .unrecognized
            .iter()
            .any(|key| key.eq_ignore_ascii_case(name))
        {
            return Err(Error::UnknownOption(name.to_string()));
        }
        self.options.value(name)
    }
}

/// Resolve raw key/value pairs against the recognized options.
pub fn resolve_entries<I, K, V>(entries: I) -> ResolvedConfig
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut options = Options::new();
    let mut seen = Vec::new();
    let mut warnings = Vec::new();
    let mut unrecognized = Vec::new();

    for (key, raw) in entries {
        let key = key.as_ref();
        let raw = raw.as_ref();
        let Ok(name) = key.parse::<OptionName>() else {
            log::warn!("Unrecognized option '{}' in config", key);
            unrecognized.push(key.to_string());
            continue;
        };
        seen.push(name);

        match name.parse_value(raw) {
            Some(value) => options.assign(name, value),
            None => {
                let warning = ConfigWarning {
                    option: name,
                    value: raw.to_string(),
                    fallback: name.off_fallback(),
                };
                log::warn!("{}", warning);
                options.assign(name, name.off_fallback());
                warnings.push(warning);
            }
        }
    }

    for name in OptionName::ALL {
        if !seen.contains(&name) {
            log::info!(
                "{} not found in config, defaulting to off value: {}",
                name,
                name.off_fallback()
            );
        }
    }

    ResolvedConfig {
        options,
        warnings,
        unrecognized,
    }
}

/// Contents of a freshly created configuration file.
pub fn default_config_ini() -> String {
    let options = Options::enabled_defaults();
    let mut ini = format!("[{}]\n", DEFAULT_SECTION);
    for name in OptionName::ALL {
        ini.push_str(&format!("{} = {}\n", name, options.get(name)));
    }
    ini
}

/// Write the default configuration file, creating its directory.
pub fn write_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, default_config_ini())?;
    log::info!("Default configuration created at {}", path.display());
    Ok(())
}

/// Loads options from an INI file.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
    default_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Loader for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            default_path: default_config_path(),
        }
    }

    /// Loader for the per-user default file.
    pub fn from_default_path() -> Result<Self> {
        let path = default_config_path()
            .ok_or_else(|| Error::ConfigNotFound(PathBuf::from("~").join(CONFIG_DIR)))?;
        Ok(Self::new(path))
    }

    /// Override which path counts as the default location.
    ///
    /// A missing file at the default location is created instead of failing.
    pub fn with_default_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_path = Some(path.into());
        self
    }

    /// The file this loader reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and resolve the configuration.
    pub fn load(&self) -> Result<(ResolvedConfig, ConfigSource)> {
        if !self.path.is_file() {
            if self.default_path.as_deref() != Some(self.path.as_path()) {
                return Err(Error::ConfigNotFound(self.path.clone()));
            }
            log::info!("Writing a new default config");
            write_default_config(&self.path)?;
            let resolved = ResolvedConfig {
                options: Options::enabled_defaults(),
                warnings: Vec::new(),
                unrecognized: Vec::new(),
            };
            return Ok((resolved, ConfigSource::CreatedDefault(self.path.clone())));
        }

        log::info!("Reading config");
        let entries = read_entries(&self.path)?;
        let resolved = resolve_entries(entries);
        log::info!(
            "Read config. Running with the following:\n{}",
            resolved.options
        );
        Ok((resolved, ConfigSource::File(self.path.clone())))
    }
}

/// Load options from a file; see [`ConfigLoader`].
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ResolvedConfig> {
    ConfigLoader::new(path.as_ref())
        .load()
        .map(|(resolved, _)| resolved)
}

fn read_entries(path: &Path) -> Result<Vec<(String, String)>> {
    let settings = Config::builder()
        .add_source(File::from(path).format(FileFormat::Ini).required(true))
        .build()?;

    let mut entries = Vec::new();
    for (key, value) in settings.collect()? {
        match value.kind {
            ValueKind::Table(_) if key.eq_ignore_ascii_case(DEFAULT_SECTION) => {
                for (k, v) in value.into_table()? {
                    entries.push((k, v.into_string()?));
                }
            }
            ValueKind::Table(_) => log::debug!("Ignoring config section [{}]", key),
            _ => entries.push((key, value.into_string()?)),
        }
    }
    Ok(entries)
}
