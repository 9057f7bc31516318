//! Settings file and baseline snapshot management.
//!
//! Both files live under `<home>/.config/` and are created on first run.
//! The baseline is captured exactly once from the live hosts file and is
//! never rewritten afterwards; deleting it by hand triggers a recapture.

use crate::error::{ConfigSource, Error, Result};
use crate::render::BLOCKED_HEADER;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Marker line heading every baseline snapshot.
pub const BASELINE_MARKER: &str = "# workplay baseline: original hosts file captured by workplay";

/// Default system hosts file.
const DEFAULT_SYSTEM_HOSTS: &str = "/etc/hosts";

const SETTINGS_FILE: &str = "workplay.conf";
const BASELINE_FILE: &str = "workplay.hosts";

/// Settings written on first run.
pub const DEFAULT_SETTINGS: &str = r#"# workplay settings
#
# verbosity: "verbose" or "silent"
# blocked_domains: resolved to 127.0.0.1 by `workplay work`
verbosity = "verbose"
blocked_domains = [
    "twitter.com",
    "reddit.com",
]
"#;

/// Whether informational lines are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Silent,
    Verbose,
}

/// User settings, loaded fresh on every invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub verbosity: Verbosity,
    /// Domains mapped to loopback in work mode, in file order.
    pub blocked_domains: Vec<String>,
}

impl Settings {
    /// Parses settings text. Both fields are required.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming `path` if the text is not valid.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|e| config_error(path, e))
    }
}

/// What [`ConfigStore::ensure`] had to create.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[must_use]
pub struct Provisioned {
    pub settings: bool,
    pub baseline: bool,
    /// The baseline was recaptured from a live file we had installed.
    pub recaptured_marked: bool,
}

impl Provisioned {
    /// Logs the created files. Called once a subscriber is installed.
    pub fn log(self, store: &ConfigStore) {
        if self.settings {
            tracing::info!(path = %store.settings_path().display(), "Created default settings");
        }
        if self.baseline {
            tracing::info!(
                path = %store.baseline_path().display(),
                source = %store.system_hosts_path().display(),
                "Captured baseline hosts file"
            );
        }
        if self.recaptured_marked {
            tracing::warn!(
                path = %store.system_hosts_path().display(),
                "Live hosts file already carried the baseline marker, recaptured it without its blocked section"
            );
        }
    }
}

/// Owns the settings file and the baseline snapshot.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    settings_path: PathBuf,
    baseline_path: PathBuf,
    system_hosts: PathBuf,
}

impl ConfigStore {
    /// Creates a store for the invoking user's `~/.config/` and `/etc/hosts`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HomeNotFound`] if the home directory is unknown.
    pub fn from_home() -> Result<Self> {
        let home = home::home_dir().ok_or(Error::HomeNotFound)?;
        Ok(Self::in_dir(home.join(".config"), DEFAULT_SYSTEM_HOSTS))
    }

    /// Creates a store keeping its files in `config_dir`.
    #[must_use]
    pub fn in_dir(config_dir: impl AsRef<Path>, system_hosts: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.as_ref();
        Self::with_paths(
            config_dir.join(SETTINGS_FILE),
            config_dir.join(BASELINE_FILE),
            system_hosts,
        )
    }

    /// Creates a store with explicit paths (useful for testing).
    #[must_use]
    pub fn with_paths(
        settings_path: impl Into<PathBuf>,
        baseline_path: impl Into<PathBuf>,
        system_hosts: impl Into<PathBuf>,
    ) -> Self {
        Self {
            settings_path: settings_path.into(),
            baseline_path: baseline_path.into(),
            system_hosts: system_hosts.into(),
        }
    }

    #[must_use]
    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    #[must_use]
    pub fn baseline_path(&self) -> &Path {
        &self.baseline_path
    }

    #[must_use]
    pub fn system_hosts_path(&self) -> &Path {
        &self.system_hosts
    }

    /// Creates whichever of the settings file and baseline is missing.
    ///
    /// Existing files are left untouched, so running this repeatedly never
    /// loses the original hosts mapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if a file cannot be read or written.
    pub fn ensure(&self) -> Result<Provisioned> {
        let mut provisioned = Provisioned::default();

        if !self.settings_path.exists() {
            create_parent(&self.settings_path)?;
            std::fs::write(&self.settings_path, DEFAULT_SETTINGS)?;
            provisioned.settings = true;
        }

        if !self.baseline_path.exists() {
            let live = std::fs::read(&self.system_hosts)?;
            create_parent(&self.baseline_path)?;
            let (baseline, marked) = capture_baseline(&live);
            std::fs::write(&self.baseline_path, baseline)?;
            provisioned.baseline = true;
            provisioned.recaptured_marked = marked;
        }

        Ok(provisioned)
    }

    /// Reads and validates the settings file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file is missing, or [`Error::Config`]
    /// if it exists but is unreadable or malformed.
    pub fn load(&self) -> Result<Settings> {
        let text = match std::fs::read_to_string(&self.settings_path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(e.into()),
            Err(e) => return Err(config_error(&self.settings_path, e)),
        };
        Settings::parse(&text, &self.settings_path)
    }

    /// Reads the baseline snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the snapshot cannot be read.
    pub fn baseline(&self) -> Result<Vec<u8>> {
        Ok(std::fs::read(&self.baseline_path)?)
    }
}

fn config_error(path: &Path, source: impl Into<ConfigSource>) -> Error {
    Error::Config {
        path: path.display().to_string(),
        source: source.into(),
    }
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Builds baseline content from the live hosts file.
///
/// The result always starts with exactly one marker line. A live file that
/// already starts with the marker was installed by us: it is kept as-is,
/// minus a trailing blocked section if one was rendered into it, and the
/// returned flag is set. Rendering newline-terminates the baseline, so a
/// stripped file always ends with a newline.
fn capture_baseline(live: &[u8]) -> (Vec<u8>, bool) {
    let first_line = live.split(|b| *b == b'\n').next().unwrap_or_default();
    if first_line == BASELINE_MARKER.as_bytes() {
        return (strip_blocked_section(live).to_vec(), true);
    }

    let mut out = Vec::with_capacity(BASELINE_MARKER.len() + 1 + live.len());
    out.extend_from_slice(BASELINE_MARKER.as_bytes());
    out.push(b'\n');
    out.extend_from_slice(live);
    (out, false)
}

/// Cuts a rendered blocked section off the end of `content`.
fn strip_blocked_section(content: &[u8]) -> &[u8] {
    let separator = format!("\n\n{BLOCKED_HEADER}\n\n");
    content
        .windows(separator.len())
        .rposition(|w| w == separator.as_bytes())
        .map_or(content, |at| &content[..=at])
}
