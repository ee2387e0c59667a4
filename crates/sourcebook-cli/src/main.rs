use anyhow::{Context, Result, bail};
use clap::Parser;
use sourcebook_config::Config;
use sourcebook_engine::book::{self, BookOptions};
use sourcebook_engine::io;
use sourcebook_engine::rendering::source_to_markdown;
use sourcebook_engine::scanning::scan_source;
use std::io::Read;
use std::path::PathBuf;

/// Turn a commented source tree into one readable markdown book.
///
/// With a project directory, the assembled book is written next to the
/// input as `<PATH>_ebook.md`. With a single source file (or `-` for
/// stdin), the rendered markdown goes to stdout.
#[derive(Debug, Parser)]
#[command(name = "sourcebook", version, about)]
struct Cli {
    /// Project directory, source file, or `-` for stdin
    path: String,

    /// Where to write the book (directory input only)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fence language tag, overriding the config file
    #[arg(long)]
    language: Option<String>,

    /// Explicit config file instead of ~/.config/sourcebook/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the scanned segments as JSON instead of markdown (file/stdin input only)
    #[arg(long)]
    segments: bool,

    /// Show scanner tracing on stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(filter)
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("config file not found: {}", path.display()))?,
        None => Config::load()?.unwrap_or_default(),
    };

    let mut options = config.book_options();
    if let Some(language) = cli.language {
        options.render.language = language;
    }

    if cli.path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("reading stdin")?;
        return emit_single(&source, &options, cli.segments);
    }

    let path = PathBuf::from(&cli.path);
    if path.is_file() {
        let source = io::read_file(&path)?;
        return emit_single(&source, &options, cli.segments);
    }

    if cli.segments {
        bail!("--segments needs a single file or stdin input");
    }

    let book = book::build_book(&path, &options)?;
    let output = cli
        .output
        .unwrap_or_else(|| default_output_path(&cli.path));
    std::fs::write(&output, book)
        .with_context(|| format!("writing {}", output.display()))?;
    log::info!("wrote {}", output.display());
    Ok(())
}

fn emit_single(source: &str, options: &BookOptions, segments: bool) -> Result<()> {
    if segments {
        let segments = scan_source(source);
        println!("{}", serde_json::to_string_pretty(&segments)?);
    } else {
        print!("{}", source_to_markdown(source, &options.render));
    }
    Ok(())
}

/// `src/` and `src` both become `src_ebook.md`, next to the input.
fn default_output_path(input: &str) -> PathBuf {
    PathBuf::from(format!("{}_ebook.md", input.trim_end_matches('/')))
}
