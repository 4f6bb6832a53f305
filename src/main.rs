// Javadoc to Markdown scraper
//
// Fetches a Javadoc tree (full URL or `<module>/<version>` shorthand for the
// vendor's hosted docs) and writes it as a single Markdown document.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use kodegen_tools_javadoc::utils::{DEFAULT_MAX_ATTEMPTS, DEFAULT_REQUEST_TIMEOUT_SECS};
use kodegen_tools_javadoc::{ScrapeConfig, ScrapeReport};

#[derive(Parser)]
#[command(name = "kodegen-javadoc")]
#[command(version)]
#[command(about = "Convert Javadoc HTML into a single Markdown reference", long_about = None)]
struct Cli {
    /// Javadoc URL or `<module>/<version>` shorthand (e.g. `ix/23`)
    source: String,

    /// Directory the output file is written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Fetch attempts per page, first attempt included
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    retries: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    timeout: u64,

    /// Document title
    #[arg(long)]
    title: Option<String>,

    /// Also write the document tree as JSON next to the Markdown file
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    fn into_config(self) -> Result<ScrapeConfig> {
        let mut builder = ScrapeConfig::builder()
            .source(self.source)
            .output_dir(self.output_dir)
            .max_attempts(self.retries)
            .request_timeout_secs(self.timeout)
            .save_json(self.json);
        if let Some(title) = self.title {
            builder = builder.title(title);
        }
        Ok(builder.build()?)
    }
}

fn print_summary(report: &ScrapeReport) {
    println!(
        "Wrote {} ({} packages, {} classes, {} layout)",
        report.output_path.display(),
        report.packages,
        report.classes,
        report.format
    );
    if let Some(json) = &report.json_path {
        println!("Wrote {}", json.display());
    }

    if !report.skipped.is_empty() {
        eprintln!("Skipped {} classes:", report.skipped.len());
        for skip in &report.skipped {
            eprintln!("  {}.{}: {}", skip.package, skip.class, skip.reason);
        }
    }
}

async fn run(cli: Cli) -> Result<ScrapeReport> {
    let config = cli.into_config().context("invalid arguments")?;
    log::info!(
        "Scraping {} into {}",
        config.target().index_url,
        config.output_path().display()
    );
    let report = kodegen_tools_javadoc::scrape(config)
        .await
        .context("scrape failed")?;
    Ok(report)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_filter())).init();

    match run(cli).await {
        Ok(report) => {
            print_summary(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            // stderr regardless of the log filter
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

fn failure_message(error: &anyhow::Error) -> String {
    format!("error: {error:#}")
}
