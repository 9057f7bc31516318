use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use workplay::{Args, Command, ConfigStore, SudoExecutor, SystemInstaller, Verbosity};

fn init_logs(verbosity: Verbosity) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{fmt, registry};

    let level = match verbosity {
        Verbosity::Verbose => LevelFilter::INFO,
        Verbosity::Silent => LevelFilter::ERROR,
    };

    let _ = registry()
        .with(level)
        .with(
            fmt::layer()
                .without_time()
                .with_target(false)
                .with_ansi(cfg!(debug_assertions)),
        )
        .try_init();
}

fn run(command: Command) -> workplay::Result<()> {
    let store = ConfigStore::from_home()?;
    let provisioned = store.ensure()?;
    let settings = command.load_settings(&store)?;

    init_logs(settings.as_ref().map_or(Verbosity::Verbose, |s| s.verbosity));
    provisioned.log(&store);

    let installer = SystemInstaller::new(store.system_hosts_path(), SudoExecutor);
    command.execute(&store, settings.as_ref(), &installer)
}

fn main() -> ExitCode {
    let args = Args::parse();
    let Some(command) = args.command else {
        if Args::command().print_help().is_err() {
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    };

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("workplay: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
