use clap::Parser;
use triage_carpool::utils::{logger, validation::Validate};
use triage_carpool::{CliConfig, Team, TriageEngine, TriagePipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting triage-carpool");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    tracing::debug!("Loading team from {}", config.team_file);
    let team = match Team::from_file(&config.team_file) {
        Ok(team) => team,
        Err(e) => {
            tracing::error!("❌ Could not load team file '{}': {}", config.team_file, e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let output_path = config.output_path.clone();
    let pipeline = TriagePipeline::new(team, config);
    let engine = TriageEngine::new(pipeline);

    match engine.run().await {
        Ok(Some(report)) => {
            let text = report.to_text();
            println!("{}", text);
            if let Some(path) = output_path {
                std::fs::write(&path, &text)?;
                tracing::info!("📁 Report saved to: {}", path);
            }
            tracing::info!("✅ Triage list generated");
        }
        Ok(None) => {
            println!("No bugs for triage! \\o/");
        }
        Err(e) => {
            tracing::error!("❌ Triage run failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
