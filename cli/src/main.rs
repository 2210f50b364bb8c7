//! reflow CLI - reading-order paragraph reconstruction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use reflow::{CutoffTable, JsonFormat, Reflow};

#[derive(Parser)]
#[command(name = "reflow")]
#[command(version)]
#[command(about = "Reconstruct reading-order paragraphs from positioned token files", long_about = None)]
struct Cli {
    /// Cutoff table JSON file (source identifier -> cutoff triple)
    #[arg(long, value_name = "FILE", global = true)]
    cutoffs: Option<PathBuf>,

    /// Disable parallel page processing
    #[arg(long, global = true)]
    sequential: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a token file to plain text
    Text {
        /// Input token file (JSON array of pages)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Omit page-marker lines
        #[arg(long)]
        no_markers: bool,
    },

    /// Render a token file to JSON
    Json {
        /// Input token file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input token file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Scan a directory and decode token files without a .txt sibling
    Scan {
        /// Directory containing token files
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let table = match load_table(cli.cutoffs.as_deref()) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Text {
            input,
            output,
            no_markers,
        } => cmd_text(&input, output.as_deref(), no_markers, &table, cli.sequential),
        Commands::Json {
            input,
            output,
            compact,
        } => cmd_json(&input, output.as_deref(), compact, &table, cli.sequential),
        Commands::Info { input } => cmd_info(&input, &table, cli.sequential),
        Commands::Scan { dir } => cmd_scan(&dir, &table, cli.sequential),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_table(path: Option<&Path>) -> Result<CutoffTable, Box<dyn std::error::Error>> {
    match path {
        Some(p) => Ok(CutoffTable::load(p)?),
        None => Ok(CutoffTable::new()),
    }
}

fn builder(input: &Path, table: &CutoffTable, sequential: bool) -> Reflow {
    let reflow = Reflow::new().with_cutoffs_for(table, input);
    if sequential {
        reflow.sequential()
    } else {
        reflow.parallel()
    }
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    no_markers: bool,
    table: &CutoffTable,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = builder(input, table, sequential)
        .with_page_markers(!no_markers)
        .process(input)?
        .to_text()?;
    write_output(&text, output)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    table: &CutoffTable,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = builder(input, table, sequential)
        .process(input)?
        .to_json(format)?;
    write_output(&json, output)
}

fn cmd_info(
    input: &Path,
    table: &CutoffTable,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = builder(input, table, sequential).process(input)?.document;

    println!("{}", "Document Information".bold());
    println!("  File:       {}", input.display());
    if let Some(id) = reflow::source_id(input) {
        println!("  Source:     {}", id);
    }
    println!("  Pages:      {}", doc.page_count());
    println!("  Paragraphs: {}", doc.paragraph_count());
    println!("  Tokens:     {}", doc.token_count());
    Ok(())
}

/// Decode every token file in `dir` that has no `.txt` sibling yet,
/// writing the rendered text next to it.
fn cmd_scan(
    dir: &Path,
    table: &CutoffTable,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut decoded = 0usize;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let txt_path = path.with_extension("txt");
        if txt_path.exists() {
            continue;
        }

        log::info!("Found new file {} that needs to be decoded", path.display());
        // A file that fails to decode is skipped, not fatal for the scan
        match builder(&path, table, sequential)
            .process(&path)
            .and_then(|r| r.to_text())
        {
            Ok(text) => {
                fs::write(&txt_path, text)?;
                println!("{} {}", "Decoded".green(), path.display());
                decoded += 1;
            }
            Err(e) => {
                eprintln!("{} {}: {}", "Skipped".yellow(), path.display(), e);
            }
        }
    }

    if decoded == 0 {
        println!("{}", "No new token files to decode".yellow());
    }
    Ok(())
}

fn write_output(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            println!("{} {}", "Wrote".green(), path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}
