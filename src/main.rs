use anyhow::Context;
use clap::Parser;
use scope_lifecycle::utils::logger;
use scope_lifecycle::{
    expected_transcript, run, CliConfig, ConsoleSink, OutputFormat, RecordingSink, Transcript,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    match config.format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
        OutputFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::debug!("CLI config: {:?}", config);

    let params = config.params();
    let console = ConsoleSink::stdout(config.format);

    if !config.check {
        run(&console, &params);
        return Ok(());
    }

    let recorder = RecordingSink::new();
    run(&(&console, &recorder), &params);

    let transcript = Transcript::from(recorder);
    transcript
        .verify()
        .and_then(|()| transcript.matches(&expected_transcript(&params)))
        .context("lifecycle check failed")?;

    tracing::info!(
        "✅ {} lifecycle events in the expected order",
        transcript.events().len()
    );
    Ok(())
}
