//! Command line front end: check, normalize or dump SubRip files
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use subrip::{render, CueReader, CueText, Options, Subtitle};
use tracing::Level;

#[derive(Parser)]
#[command(name = "subrip")]
#[command(about = "Check, normalize or dump SubRip subtitle files")]
struct Args {
    /// TOML file with reader and writer options
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// More logs, repeat for even more
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse every file and report OK or KO for each
    Check {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Rewrite a file with canonical numbering, timings and markup
    Fmt {
        /// Input file, `-` for stdin
        path: PathBuf,
    },
    /// Print the cues of a file as JSON
    Dump {
        /// Input file, `-` for stdin
        path: PathBuf,
    },
}

fn open(path: &Path) -> Result<Box<dyn BufRead>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

fn styled_spans(subtitle: &Subtitle) -> usize {
    let mut spans = 0;
    for cue in subtitle.cues.iter() {
        cue.text().walk(&mut |node: &CueText| {
            if !node.styles().is_empty() {
                spans += 1;
            }
        });
    }
    spans
}

fn check(paths: &[PathBuf], options: &Options) -> Result<ExitCode> {
    let mut failures = 0;
    for path in paths {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let subtitle =
            open(path).and_then(|reader| Ok(Subtitle::from_reader(reader, options)?));
        match subtitle {
            Ok(subtitle) => {
                tracing::info!(
                    "{} cues, {} styled spans in {}",
                    subtitle.cues.len(),
                    styled_spans(&subtitle),
                    path.display()
                );
                println!("OK: {name}");
            }
            Err(e) => {
                failures += 1;
                println!("KO: {name}: {e:#}");
            }
        }
    }
    tracing::info!("{} of {} files failed", failures, paths.len());
    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn fmt(path: &Path, options: &Options) -> Result<()> {
    let reader = CueReader::from_reader(open(path)?).with_options(options.reader.clone());
    let mut failure = None;
    let cues = reader.map_while(|cue| cue.map_err(|e| failure = Some(e)).ok());
    render::write_to(cues, options.writer.clone(), io::stdout().lock())
        .context("failed to write cues")?;
    if let Some(e) = failure {
        return Err(e).with_context(|| format!("failed to read {}", path.display()));
    }
    Ok(())
}

fn dump(path: &Path, options: &Options) -> Result<()> {
    let subtitle = Subtitle::from_reader(open(path)?, options)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::to_writer_pretty(io::stdout().lock(), &subtitle)?;
    println!();
    Ok(())
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let options = match &args.config {
        Some(path) => Options::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Options::default(),
    };

    match &args.command {
        Command::Check { paths } => check(paths, &options),
        Command::Fmt { path } => fmt(path, &options).map(|_| ExitCode::SUCCESS),
        Command::Dump { path } => dump(path, &options).map(|_| ExitCode::SUCCESS),
    }
}
