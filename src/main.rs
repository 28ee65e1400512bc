use afterflix::{
    catalogue,
    config::Config,
    db::{FileBackend, UserStore},
    shell::Shell,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the menu
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        users_file = %config.users_file.display(),
        registration_fee = config.registration_fee,
        "Starting Afterflix"
    );

    let store = UserStore::load(
        FileBackend::new(config.users_file.clone()),
        config.registration_fee,
    )?;

    let stdin = std::io::stdin();
    let mut shell = Shell::new(store, catalogue::seed(), stdin.lock(), std::io::stdout());
    shell.run()?;

    Ok(())
}
