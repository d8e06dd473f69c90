use anyhow::Context;
use clap::Parser;
use shoe_stock::core::ConfigProvider;
use shoe_stock::utils::{logger, validation::Validate};
use shoe_stock::{CliConfig, Console, InventoryFile, LocalStorage, Session};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入並合併配置
    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.log_format() == "json" {
        logger::init_json_logger(config.verbose());
    } else {
        logger::init_cli_logger(config.verbose());
    }

    tracing::info!("Starting shoe-stock with inventory file {}", config.inventory_path());
    tracing::debug!("Effective config: {:?}", config);

    let file = InventoryFile::new(LocalStorage::default(), config.inventory_path());
    let mut session = Session::new(file);

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    session
        .run(&mut console)
        .context("terminal input/output failed")?;

    tracing::info!("Session ended with {} shoes in memory", session.inventory().len());
    Ok(())
}
