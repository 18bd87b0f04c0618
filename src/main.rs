use clap::Parser;
use tictactoe_report::core::report::progress_line;
use tictactoe_report::utils::{logger, validation::Validate};
use tictactoe_report::{
    CliConfig, HttpTournamentClient, ReportConfig, Reporter, TournamentAggregator,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting tictactoe-report");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message(""));
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    if let Err(e) = run(&config).await {
        match e.downcast_ref::<tictactoe_report::ReportError>() {
            Some(report_error) => {
                tracing::error!(
                    "❌ Tournament run aborted: {} (Category: {:?})",
                    report_error,
                    report_error.category()
                );
                eprintln!("\n❌ {}", report_error.user_friendly_message(&config.base_url));
                eprintln!("💡 {}", report_error.recovery_suggestion());
                std::process::exit(report_error.exit_code());
            }
            None => {
                tracing::error!("❌ Unexpected error: {:#}", e);
                eprintln!("\n❌ Unexpected error: {:#}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

async fn run(config: &ReportConfig) -> anyhow::Result<()> {
    let client = HttpTournamentClient::new(config)?;
    let aggregator = TournamentAggregator::new(client, config)
        .with_progress(|games| println!("{}", progress_line(games)));
    let mut reporter = Reporter::stdout();

    let participants = aggregator.load_participants().await?;
    reporter.participants(&participants)?;

    let report = aggregator.score(participants).await?;
    tracing::info!(
        "✅ Scored {} games for {} active participants",
        report.games_analyzed,
        report.tally.len()
    );

    reporter.results(&report.standings)?;
    Ok(())
}
