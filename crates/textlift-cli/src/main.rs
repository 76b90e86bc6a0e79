use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use textlift_core::{Session, UploadedFile};
use textlift_ingest::Extractor;
use textlift_pdf::PdfDecoder;

/// Extract the text of a PDF, DOCX, or TXT file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the file to extract
    file_path: PathBuf,

    /// Path to write the extracted text (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Separator between text items on a PDF page
    #[arg(long, default_value = " ")]
    item_separator: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let name = cli
        .file_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .context("file path has no file name")?;

    // The single buffered read: the whole file enters memory here.
    let data = tokio::fs::read(&cli.file_path)
        .await
        .with_context(|| format!("failed to read {}", cli.file_path.display()))?;

    let extractor = Extractor::new(PdfDecoder::new().with_item_separator(cli.item_separator));
    let mut session = Session::new();
    session.select_file(UploadedFile::new(name, data))?;

    let attempt = session.begin_extraction()?;
    let outcome = extractor.extract(session.selected_file()).await;
    session.settle(attempt, outcome);

    match session.outcome() {
        Some(Ok(text)) => {
            let mut writer: Box<dyn Write> = match cli.output {
                Some(ref path) => Box::new(
                    std::fs::File::create(path)
                        .with_context(|| format!("failed to create {}", path.display()))?,
                ),
                None => Box::new(std::io::stdout()),
            };
            writer.write_all(text.as_bytes())?;
            Ok(())
        }
        Some(Err(err)) => anyhow::bail!("{err}"),
        None => anyhow::bail!("extraction did not settle"),
    }
}
