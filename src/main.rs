use clap::{ArgAction, Parser, builder::styling};
use eyre::Result;
use gha_workflows::{
    Settings,
    cli::{compile_workflows, resolve_settings},
};
use std::path::PathBuf;

// CLI Styling
const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::BrightWhite.on_default())
    .usage(styling::AnsiColor::BrightWhite.on_default())
    .literal(styling::AnsiColor::Green.on_default())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// Compile GitHub Actions workflows with YAML anchors and aliases into plain YAML
///
/// Settings under the "gha-workflows" key of the nearest package.json take
/// precedence over these flags.
#[derive(Parser)]
#[command(
    name = "gha-workflows",
    version,
    disable_version_flag = true,
    styles = STYLES
)]
struct Cli {
    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,

    /// Add a header comment
    #[arg(short, long)]
    comments: Option<String>,

    /// The source directory YAML files or single YAML file that will be "compiled"
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// The output directory where "compiled" YAML files will be written to
    #[arg(short, long)]
    destination: Option<PathBuf>,

    /// More verbose logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.debug {
        true => "debug",
        false => "info",
    };
    let env = env_logger::Env::default().filter_or("LOG_LEVEL", log_level);
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .init();

    let settings = resolve_settings(
        Settings::from_cli(cli.source, cli.destination, cli.comments),
        std::env::current_dir()?,
    )?;

    let settings = match settings.validate() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    };

    compile_workflows(&settings).await?;

    Ok(())
}
