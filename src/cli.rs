//! Command-line surface and dispatch.

use crate::config::{ConfigStore, Settings};
use crate::error::Result;
use crate::installer::{PrivilegedExecutor, SystemInstaller};
use crate::render::render;
use clap::{Parser, Subcommand};

/// Switch /etc/hosts between work mode and play mode.
///
/// Settings live in ~/.config/workplay.conf and the saved original hosts
/// file in ~/.config/workplay.hosts. Both are created on first run.
#[derive(Parser, Debug)]
#[command(name = "workplay", version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Resolve every blocked domain to 127.0.0.1
    Work,
    /// Restore the saved original hosts file
    Play,
}

impl Command {
    /// Loads the settings this command needs. Only `work` reads them, so a
    /// broken settings file never blocks `play`.
    ///
    /// # Errors
    ///
    /// Returns whatever [`ConfigStore::load`] returns for `work`.
    pub fn load_settings(self, store: &ConfigStore) -> Result<Option<Settings>> {
        match self {
            Self::Work => store.load().map(Some),
            Self::Play => Ok(None),
        }
    }

    /// Runs the transition against an already ensured store.
    ///
    /// `work` loads the settings itself when `settings` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings or baseline cannot be read, or the
    /// installer fails.
    pub fn execute<E: PrivilegedExecutor>(
        self,
        store: &ConfigStore,
        settings: Option<&Settings>,
        installer: &SystemInstaller<E>,
    ) -> Result<()> {
        let baseline = store.baseline()?;
        match self {
            Self::Work => {
                let loaded;
                let settings = match settings {
                    Some(settings) => settings,
                    None => {
                        loaded = store.load()?;
                        &loaded
                    }
                };
                tracing::info!(domains = settings.blocked_domains.len(), "Entering work mode");
                installer.install(&render(&baseline, &settings.blocked_domains))
            }
            Self::Play => {
                tracing::info!("Entering play mode");
                installer.restore(&baseline)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_arguments_parses_to_none() {
        let args = Args::try_parse_from(["workplay"]).unwrap();
        assert_eq!(args.command, None);
    }

    #[test]
    fn parses_work_and_play() {
        let work = Args::try_parse_from(["workplay", "work"]).unwrap();
        assert_eq!(work.command, Some(Command::Work));
        let play = Args::try_parse_from(["workplay", "play"]).unwrap();
        assert_eq!(play.command, Some(Command::Play));
    }

    #[test]
    fn help_exits_zero() {
        for flag in ["-h", "--help"] {
            let err = Args::try_parse_from(["workplay", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
            assert_eq!(err.exit_code(), 0);
        }
    }

    #[test]
    fn extra_argument_is_usage_error() {
        let err = Args::try_parse_from(["workplay", "work", "play"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn only_work_loads_settings() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::in_dir(dir.path(), dir.path().join("hosts"));
        std::fs::write(store.settings_path(), "blocked_domains = []\n").unwrap();

        assert!(Command::Play.load_settings(&store).unwrap().is_none());
        assert!(Command::Work.load_settings(&store).is_err());
    }

    #[test]
    fn unknown_command_is_usage_error() {
        let err = Args::try_parse_from(["workplay", "sleep"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
