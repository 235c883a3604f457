use anyhow::Context;
use tracing_subscriber::EnvFilter;

use domolect::config::Config;
use domolect::repl::Repl;
use domolect_adapter_virtual::VirtualDriver;
use domolect_app::services::command_service::CommandService;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    let driver = VirtualDriver::default();
    let mut repl = Repl::new(&config, CommandService::default());
    if config.driver.virtual_enabled {
        tracing::info!("virtual driver enabled");
        repl = repl.with_driver(&driver);
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl.run(stdin.lock(), stdout.lock())
        .context("running the REPL")?;

    Ok(())
}
