use anyhow::Context;
use clap::Parser;
use small_catalog::utils::{logger, validation::Validate};
use small_catalog::{Catalog, CatalogError, CliConfig, MenuSession};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if let Err(e) = cli.validate() {
        report_and_exit(&e);
    }

    // 載入並合併配置
    let config = match cli.resolve().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => report_and_exit(&e),
    };

    // 初始化日誌
    logger::init_logger(config.verbose(), config.json_logging());

    tracing::info!("Starting small-catalog");
    tracing::debug!("Resolved config: {:?}", config);

    let format = match config.display_format() {
        Ok(format) => format,
        Err(e) => report_and_exit(&e),
    };

    let mut catalog = Catalog::new();
    if config.seed_example() {
        catalog.seed_fixed_example();
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let catalog = MenuSession::new(catalog, stdin.lock(), stdout.lock())
        .with_format(format)
        .run()
        .context("menu session failed")?;

    tracing::info!("Exiting with {} components in memory", catalog.len());
    Ok(())
}

fn report_and_exit(e: &CatalogError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}
