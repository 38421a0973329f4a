use clap::Parser;
use pnr_status::utils::{logger, validation::Validate};
use pnr_status::{CliArgs, HttpStatusClient, PnrEngine, PnrError, Settings, TomlConfig};

fn fail(e: &PnrError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("{}", e.user_friendly_message());
    std::process::exit(1);
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = CliArgs::parse();

    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting pnr-status");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let mut settings = Settings::default();
    if let Some(path) = &args.config {
        tracing::info!("📁 Loading configuration from: {}", path.display());
        match TomlConfig::from_file(path) {
            Ok(file) => settings = settings.apply(file.overrides()),
            Err(e) => fail(&e),
        }
    }
    let settings = settings.apply(args.overrides());

    if let Err(e) = settings.validate() {
        fail(&e);
    }
    tracing::debug!("Resolved settings: {:?}", settings);

    let client = match HttpStatusClient::from_config(&settings) {
        Ok(client) => client,
        Err(e) => fail(&e),
    };

    let engine = PnrEngine::new(client, settings);
    match engine.run(std::io::stdout()).await {
        Ok(summary) => {
            tracing::info!(
                "✅ Done: {}/{} PNR(s) rendered",
                summary.rendered,
                summary.total
            );
        }
        Err(e) => fail(&e),
    }
}
