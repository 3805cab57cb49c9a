use clap::Parser;
use deezer_preview::fetcher::{DEFAULT_OUTPUT, DEFAULT_PREVIEW_URL};
use deezer_preview::logging::init_logging;
use deezer_preview::{FetchOutcome, PreviewFetcher};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "preview-fetch")]
#[command(about = "Download one Deezer preview clip for manual checking", long_about = None)]
struct Cli {
    /// Preview URL (CDN links expire, see the hdnea=exp= token)
    #[arg(long, env = "PREVIEW_URL", default_value = DEFAULT_PREVIEW_URL)]
    url: String,

    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging();

    let fetcher = PreviewFetcher::new()?;
    let outcome = fetcher.fetch_to_file(&cli.url, &cli.output).await?;

    println!("Status code: {}", outcome.status().as_u16());
    match outcome {
        FetchOutcome::Saved { path, size } => {
            println!(
                "Downloaded {} bytes, open {} to check it.",
                size,
                path.display()
            );
        }
        FetchOutcome::Rejected { status, body } => {
            println!("Download failed: {}", status.as_u16());
            println!("{}", body);
        }
    }

    Ok(())
}
