pub mod config;
pub mod content_saver;
pub mod document;
pub mod errors;
pub mod extractor;
pub mod fetcher;
pub mod renderer;
pub mod scrape_engine;
pub mod utils;

pub use config::ScrapeConfig;
pub use content_saver::{save_json, save_markdown};
pub use document::{
    ClassDoc, ClassKind, Document, FieldDoc, MemberDoc, MemberKind, MemberRef, Package,
    Parameter, SkippedClass, TableOfContents, TocEntry, assemble,
};
pub use errors::{ScrapeError, ScrapeResult};
pub use extractor::{JavadocFormat, JavadocLayout, detect_format};
pub use fetcher::{HttpFetcher, PageFetcher, RetryPolicy, fetch_with_retry};
pub use renderer::render;
pub use scrape_engine::{
    LogProgress, NoOpProgress, ProgressReporter, ScrapeReport, ScrapeState, run, scrape_document,
};
pub use utils::{ResolvedTarget, resolve_target};

/// Scrape the configured source over HTTP and write the Markdown file
pub async fn scrape(config: ScrapeConfig) -> ScrapeResult<ScrapeReport> {
    scrape_engine::run_http(&config).await
}
