use anyhow::Result;
use clap::{CommandFactory, Parser};
use owo_colors::OwoColorize;
use retell::app::{NarrateOptions, run_narrate_command};
use retell::cli::{Cli, Commands};
use retell::config::Config;
use retell::diagnostics::check_dependencies;

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    match cli.command.take() {
        None => {
            let config = load_config(&cli)?;
            let options = NarrateOptions {
                reference: cli.reference,
                input: cli.input,
                quiet: cli.quiet,
                verbosity: cli.verbose,
            };

            if let Err(e) = run_narrate_command(config, options).await {
                eprintln!(
                    "{}",
                    format!("Error during {}: {}", e.stage(), e).red()
                );
                std::process::exit(1);
            }
        }
        Some(Commands::Check) => {
            let config = load_config(&cli)?;
            println!("retell {}", retell::version_string());
            if !check_dependencies(&config) {
                std::process::exit(1);
            }
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "retell", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// Priority order:
/// 1. Custom config path from CLI (--config)
/// 2. Default config path (~/.config/retell/config.toml)
/// 3. Built-in defaults with environment variable overrides
///
/// CLI flags override whatever the file and environment provided.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(path) = cli.config.as_deref() {
        Config::load(path)?
    } else {
        Config::load_or_default(&Config::default_path())?
    }
    .with_env_overrides();

    if let Some(dir) = &cli.out_dir {
        config.output.directory = Some(dir.clone());
    }
    if let Some(command) = &cli.synth_command {
        config.synth.command = command.clone();
    }
    if cli.extended {
        config.segmenter.split_on_clauses = true;
    }
    if let Some(pause) = cli.sentence_pause {
        config.segmenter.sentence_pause_secs = pause;
    }
    if let Some(pause) = cli.default_pause {
        config.segmenter.default_pause_secs = pause;
    }
    if cli.no_intro {
        config.script.intro = false;
    }
    if cli.no_outro {
        config.script.outro = false;
    }

    Ok(config)
}
