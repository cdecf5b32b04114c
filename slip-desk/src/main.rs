use clap::Parser;
use slip_desk::DeskConfig;
use slip_desk::cli::{self, Cli};
use slip_desk::utils::logger::init_logger;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply_overrides(DeskConfig::from_env());
    let _guard = init_logger(&config.log_level, config.log_dir.as_deref());
    tracing::debug!(?config, "configuration loaded");

    let mut stdout = std::io::stdout().lock();
    cli::run(cli, config, &mut stdout).await?;
    Ok(())
}
