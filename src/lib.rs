//! # workplay
//!
//! Toggle the system hosts file between two states:
//!
//! - **work**: the saved baseline plus one `127.0.0.1  <domain>` line for
//!   every blocked domain, so those sites stop resolving.
//! - **play**: the saved baseline, byte for byte.
//!
//! ## Files
//!
//! - `~/.config/workplay.conf`: TOML settings (`verbosity`,
//!   `blocked_domains`), created with defaults on first run.
//! - `~/.config/workplay.hosts`: the original hosts file, captured once on
//!   first run behind a marker line and never rewritten. Delete it to
//!   recapture.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use workplay::{Command, ConfigStore, SudoExecutor, SystemInstaller};
//!
//! let store = ConfigStore::from_home()?;
//! store.ensure()?.log(&store);
//! let settings = Command::Work.load_settings(&store)?;
//!
//! let installer = SystemInstaller::new(store.system_hosts_path(), SudoExecutor);
//! Command::Work.execute(&store, settings.as_ref(), &installer)?;
//! ```
//!
//! ## Permissions
//!
//! Writing `/etc/hosts` requires root. [`SudoExecutor`] copies directly when
//! already root and goes through `sudo cp` otherwise. Concurrent runs are
//! not coordinated; the last writer wins.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod installer;
pub mod render;
pub mod util;

pub use cli::{Args, Command};
pub use config::{BASELINE_MARKER, ConfigStore, Provisioned, Settings, Verbosity};
pub use error::{ConfigSource, Error, Result};
pub use installer::{DirectExecutor, PrivilegedExecutor, SudoExecutor, SystemInstaller};
pub use render::render;
