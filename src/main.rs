use anyhow::Context;
use clap::Parser;
use image_tag::config::OutputFormat;
use image_tag::utils::error::{ErrorSeverity, TagError};
use image_tag::utils::{logger, validation::Validate};
use image_tag::{CliConfig, MarkupRenderer, Point, Session, TagController, TomlConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting image-tag");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli) {
        match e.downcast_ref::<TagError>() {
            Some(tag_error) => exit_with(tag_error, &e),
            None => return Err(e),
        }
    }

    Ok(())
}

fn run(cli: &CliConfig) -> anyhow::Result<()> {
    cli.validate()?;

    tracing::info!("📁 Loading configuration from: {}", cli.config);
    let config = TomlConfig::from_file(&cli.config)?;
    config.validate()?;

    let tag_config = config.tag_config();
    let surface = config.surface()?;
    let renderer = MarkupRenderer::new(&tag_config);
    let mut controller = TagController::new(renderer, tag_config, surface);
    tracing::info!(
        "✅ Loaded {} seeded points on a {}x{} surface",
        controller.points().count(),
        surface.width(),
        surface.height()
    );

    if let Some(path) = &cli.session {
        tracing::info!("▶️ Replaying session: {}", path);
        let session = Session::from_file(path)?;
        session.run(&mut controller)?;
    }

    match cli.format {
        OutputFormat::Markup => print!("{}", controller.renderer().render()),
        OutputFormat::Json => {
            let points: Vec<&Point> = controller.points().collect();
            let json = serde_json::to_string_pretty(&points).context("serializing points")?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn exit_with(error: &TagError, report: &anyhow::Error) -> ! {
    tracing::error!(
        "❌ image-tag failed: {:#} (Category: {:?}, Severity: {:?})",
        report,
        error.category(),
        error.severity()
    );
    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 {}", error.recovery_suggestion());

    let exit_code = match error.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
