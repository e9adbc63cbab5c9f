use anyhow::Context;
use clap::Parser;
use origin_remap::utils::logger::{self, LogFormat};
use origin_remap::utils::validation::Validate;
use origin_remap::{
    format_output, CliConfig, LocalStorage, Mode, RemapEngine, RemapError, RemapPipeline,
    TomlConfig,
};

fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    if let Some(path) = config.config.clone() {
        let file = TomlConfig::from_file(&path).and_then(|file| file.validate().map(|_| file));
        match file {
            Ok(file) => config.merge_toml(&file),
            Err(e) => {
                println!("Failed to load config file '{}': {}", path, e);
                std::process::exit(e.exit_code());
            }
        }
    }

    logger::init_logger(LogFormat::from_flag(config.json_logs), config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let mode = config.mode;
    let storage = LocalStorage::new(config.base_path().to_string());
    let engine = RemapEngine::new(RemapPipeline::new(storage, config));

    match mode {
        Mode::Remap => match engine.run() {
            Ok(output) => println!("{}", format_output(&output)),
            Err(e) => fail(&e),
        },
        Mode::Summary => match engine.summarize() {
            Ok(summary) => {
                let output = serde_json::to_string_pretty(&summary)
                    .context("failed to render mapping summary")?;
                println!("{}", output);
            }
            Err(e) => fail(&e),
        },
    }

    Ok(())
}

fn fail(e: &RemapError) -> ! {
    tracing::error!(
        "Origin remap failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
    println!("{}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}
