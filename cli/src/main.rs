//! pdf-blockifier CLI - turn PDFs into page-tagged text blocks

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use pdf_blockifier::render::{to_json, to_text};
use pdf_blockifier::{
    BlockBuilder, Blockifier, BlockifierConfig, BlockifyRequest, EmptyCheck, File, JsonFormat,
    Loader, PageExtractor, PdfBlockifier,
};

#[derive(Parser)]
#[command(name = "pdf-blockifier")]
#[command(version)]
#[command(about = "Turn text PDFs into page-tagged text blocks", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// PDF parsing backend
    #[arg(long, value_enum, env = "PDF_BLOCKIFIER_LOADER", global = true)]
    loader: Option<LoaderArg>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write blocks as JSON
    Blocks {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Keep pages that contain nothing but null characters
        #[arg(long)]
        keep_null_pages: bool,
    },

    /// Write blocks as plain text with page markers
    Text {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Omit the page marker lines
        #[arg(long)]
        no_markers: bool,
    },

    /// Show page and block statistics
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum LoaderArg {
    /// lopdf per-page extraction (default)
    Lopdf,
    /// pdf-extract layout-following extraction
    PdfExtract,
}

impl From<LoaderArg> for Loader {
    fn from(arg: LoaderArg) -> Self {
        match arg {
            LoaderArg::Lopdf => Loader::Lopdf,
            LoaderArg::PdfExtract => Loader::PdfExtract,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let loader: Loader = cli.loader.map(Into::into).unwrap_or_default();

    let result = match cli.command {
        Some(Commands::Blocks {
            input,
            output,
            compact,
            keep_null_pages,
        }) => cmd_blocks(&input, output.as_deref(), loader, compact, keep_null_pages),
        Some(Commands::Text {
            input,
            output,
            no_markers,
        }) => cmd_text(&input, output.as_deref(), loader, !no_markers),
        Some(Commands::Info { input }) => cmd_info(&input, loader),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: print blocks if input is provided
            if let Some(input) = cli.input {
                cmd_blocks(&input, None, loader, false, false)
            } else {
                println!("{}", "Usage: pdf-blockifier <FILE>".yellow());
                println!("       pdf-blockifier --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn blockify(input: &Path, config: BlockifierConfig) -> Result<File, Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let response = PdfBlockifier::new(config).run(&BlockifyRequest::pdf(data))?;
    Ok(response.file)
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_blocks(
    input: &Path,
    output: Option<&Path>,
    loader: Loader,
    compact: bool,
    keep_null_pages: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let empty_check = if keep_null_pages {
        EmptyCheck::Raw
    } else {
        EmptyCheck::Normalized
    };
    let config = BlockifierConfig::new()
        .with_loader(loader)
        .with_empty_check(empty_check);
    let file = blockify(input, config)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = to_json(&file, format)?;
    write_or_print(output, &json)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    loader: Loader,
    page_markers: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = blockify(input, BlockifierConfig::new().with_loader(loader))?;
    let text = to_text(&file, page_markers);
    write_or_print(output, &text)
}

fn cmd_info(input: &Path, loader: Loader) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let version = pdf_blockifier::pdf_version(&data)?;
    let extractor = PageExtractor::new(&data, loader)?;
    let page_count = extractor.page_count();

    let mut builder = BlockBuilder::new();
    let mut dropped = Vec::new();
    let mut nulls = 0;
    for page in extractor {
        let page = page?;
        nulls += pdf_blockifier::normalize::null_count(&page.text);
        let index = page.index;
        if !builder.push_raw(page, EmptyCheck::Normalized) {
            dropped.push(index);
        }
    }
    let blocks = builder.finish();

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: PDF {}", "Format".bold(), version);
    println!("{}: {}", "Loader".bold(), loader);
    println!("{}: {}", "Pages".bold(), page_count);

    println!();
    println!("{}", "Block Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let chars: usize = blocks.iter().map(|b| b.char_count()).sum();
    let words: usize = blocks.iter().map(|b| b.text.split_whitespace().count()).sum();

    println!("{}: {}", "Blocks".bold(), blocks.len());
    println!("{}: {}", "Words".bold(), words);
    println!("{}: {}", "Characters".bold(), chars);
    println!("{}: {}", "Null characters stripped".bold(), nulls);

    if dropped.is_empty() {
        println!("{}: none", "Blank pages".bold());
    } else {
        let list: Vec<String> = dropped.iter().map(|i| i.to_string()).collect();
        println!("{}: {}", "Blank pages".bold(), list.join(", "));
    }

    Ok(())
}

fn cmd_version() {
    println!(
        "{} {}",
        "pdf-blockifier".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Page-tagged text blocks from PDF documents");
    println!();
    println!("Loaders: {}", Loader::ALL.map(|l| l.as_str()).join(", "));
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_blocks_command() {
        let cli = Cli::try_parse_from([
            "pdf-blockifier",
            "blocks",
            "doc.pdf",
            "--compact",
            "--loader",
            "pdf-extract",
        ])
        .unwrap();

        assert!(matches!(cli.loader, Some(LoaderArg::PdfExtract)));
        match cli.command {
            Some(Commands::Blocks {
                input,
                compact,
                keep_null_pages,
                ..
            }) => {
                assert_eq!(input, PathBuf::from("doc.pdf"));
                assert!(compact);
                assert!(!keep_null_pages);
            }
            _ => panic!("expected blocks command"),
        }
    }

    #[test]
    fn test_cli_default_input() {
        let cli = Cli::try_parse_from(["pdf-blockifier", "doc.pdf"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("doc.pdf")));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_loader_arg_conversion() {
        assert_eq!(Loader::from(LoaderArg::Lopdf), Loader::Lopdf);
        assert_eq!(Loader::from(LoaderArg::PdfExtract), Loader::PdfExtract);
    }

    #[test]
    fn test_blockify_rejects_non_pdf_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.pdf");
        fs::write(&path, "not really a pdf").unwrap();

        let result = blockify(&path, BlockifierConfig::default());
        assert!(result.is_err());
    }
}
