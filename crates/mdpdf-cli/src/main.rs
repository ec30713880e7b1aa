//! mdpdf - Markdown to PDF converter

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::Parser;

use mdpdf_config::Config;
use mdpdf_engine::{
    ConvertOptions, FontSettings, convert, default_output_path, parse_document, read_input,
};

const USAGE: &str = "Usage: mdpdf <input.md> [output.pdf]";

#[derive(Parser, Debug)]
#[command(name = "mdpdf")]
#[command(version, about = "Convert a Markdown file to PDF", long_about = None)]
#[command(after_help = "EXAMPLES:
    mdpdf README.md                 Write README.pdf next to the input
    mdpdf notes.md out/notes.pdf    Write to an explicit path
    mdpdf --print-blocks notes.md   Show how the file was parsed")]
struct Cli {
    /// Markdown file to convert
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// PDF to write (defaults to INPUT with a .pdf extension)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Directory holding the TrueType font files
    #[arg(long, value_name = "DIR")]
    font_dir: Option<PathBuf>,

    /// Config file to use instead of ~/.config/mdpdf/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Suppress the success message
    #[arg(short, long)]
    quiet: bool,

    /// Print the parsed blocks instead of writing a PDF
    #[arg(long)]
    print_blocks: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Usage errors exit 1 rather than clap's 2
        Err(e) if e.use_stderr() => {
            if let Err(err) = e.print() {
                log::warn!("failed to print usage error: {err}");
            }
            return ExitCode::FAILURE;
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    let Some(input) = cli.input.as_deref() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    match run(&cli, input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, input: &Path) -> Result<()> {
    if cli.print_blocks {
        let doc = parse_document(&read_input(input)?);
        println!("{}", doc.dump());
        return Ok(());
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(input));
    let options = ConvertOptions {
        fonts: font_settings(load_config(cli.config.as_deref())?, cli.font_dir.clone()),
        ..ConvertOptions::default()
    };

    convert(input, &output, &options)?;

    if !cli.quiet {
        println!(
            "✓ Successfully converted {} to {}",
            input.display(),
            output.display()
        );
    }
    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("Config file '{}' not found", path.display());
            }
            Config::load_from_path(path)?
        }
        None => {
            log::debug!("config path: {}", Config::config_path().display());
            Config::load()?
        }
    };
    Ok(config.unwrap_or_default())
}

/// `--font-dir` wins over the config file, which wins over the defaults.
fn font_settings(config: Config, font_dir: Option<PathBuf>) -> FontSettings {
    let defaults = FontSettings::default();
    FontSettings {
        dir: font_dir.or(config.font_dir).unwrap_or(defaults.dir),
        family: config.font_family.unwrap_or(defaults.family),
        code_family: config.code_font_family.unwrap_or(defaults.code_family),
    }
}
