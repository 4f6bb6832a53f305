//! The scrape pipeline: index → packages → classes → document → file.
//!
//! Pages are fetched one at a time in navigation order. Only class pages
//! may fail without aborting the run; they become [`SkippedClass`]
//! entries. Parsed `Html` trees never live across an `.await`.

use scraper::Html;
use url::Url;

use super::progress::{LogProgress, ProgressReporter};
use super::state::{ScrapeReport, ScrapeState};
use crate::config::ScrapeConfig;
use crate::content_saver::{save_json, save_markdown};
use crate::document::{ClassDoc, Document, Package, SkippedClass};
use crate::errors::{ScrapeError, ScrapeResult};
use crate::extractor::{ClassLink, JavadocFormat, JavadocLayout, detect_format, frame_target};
use crate::fetcher::{HttpFetcher, PageFetcher, RetryPolicy, fetch_with_retry};
use crate::renderer::render;

/// Fetch and extract everything, returning the assembled document
///
/// # Errors
///
/// Fails on the first index or package page that cannot be fetched, and
/// with [`ScrapeError::UnsupportedFormat`] when the index page is not a
/// recognized Javadoc layout or lists no packages.
pub async fn scrape_document<F, P>(
    config: &ScrapeConfig,
    fetcher: &F,
    progress: &P,
) -> ScrapeResult<(Document, JavadocFormat)>
where
    F: PageFetcher,
    P: ProgressReporter,
{
    let policy = config.retry_policy();
    let (index_url, index_html) = load_index(fetcher, &config.target().index_url, &policy).await?;

    let (format, package_links) = {
        let index = Html::parse_document(&index_html);
        let format = detect_format(&index)?;
        (format, format.layout().package_links(&index, &index_url))
    };
    if package_links.is_empty() {
        return Err(ScrapeError::UnsupportedFormat(format!(
            "no package links found on {index_url}"
        )));
    }
    progress.report_index_loaded(index_url.as_str(), format, package_links.len());

    let layout = format.layout();
    let mut state = ScrapeState::new();

    for package_link in &package_links {
        let page_html = fetch_with_retry(fetcher, &package_link.url, &policy).await?;
        let class_links = {
            let page = Html::parse_document(&page_html);
            layout.class_links(&page, package_link)
        };
        progress.report_package_started(&package_link.name, class_links.len());

        let mut package = Package::new(package_link.name.clone());
        for class_link in &class_links {
            match scrape_class(fetcher, layout, class_link, &policy).await {
                Ok(class) => {
                    progress.report_class_extracted(&package.name, &class.name);
                    package.classes.push(class);
                }
                Err(skipped) => {
                    progress.report_class_skipped(&skipped);
                    state.add_skip(skipped);
                }
            }
        }
        state.add_package(package);
    }

    let source_url = config.target().index_url.to_string();
    Ok((state.into_document(config.title(), Some(source_url)), format))
}

/// Scrape, render and write the output files
///
/// # Errors
///
/// Everything [`scrape_document`] fails on, plus
/// [`ScrapeError::Io`] when an output file cannot be written.
pub async fn run<F, P>(config: &ScrapeConfig, fetcher: &F, progress: &P) -> ScrapeResult<ScrapeReport>
where
    F: PageFetcher,
    P: ProgressReporter,
{
    let (document, format) = scrape_document(config, fetcher, progress).await?;

    let output_path = config.output_path();
    save_markdown(&output_path, &render(&document)).await?;

    let json_path = if config.save_json() {
        let path = config.json_output_path();
        save_json(&path, &document).await?;
        Some(path)
    } else {
        None
    };

    progress.report_completed(document.class_count(), document.skipped().len());

    Ok(ScrapeReport {
        format,
        output_path,
        json_path,
        packages: document.packages().len(),
        classes: document.class_count(),
        skipped: document.skipped().to_vec(),
    })
}

/// [`run`] over HTTP with log-based progress
///
/// # Errors
///
/// See [`run`]; also fails when the HTTP client cannot be built.
pub async fn run_http(config: &ScrapeConfig) -> ScrapeResult<ScrapeReport> {
    let fetcher = HttpFetcher::from_config(config)?;
    run(config, &fetcher, &LogProgress).await
}

/// Fetch the index page, following a frameset to its content frame
async fn load_index<F: PageFetcher>(
    fetcher: &F,
    url: &Url,
    policy: &RetryPolicy,
) -> ScrapeResult<(Url, String)> {
    let html = fetch_with_retry(fetcher, url, policy).await?;
    let frame = frame_target(&Html::parse_document(&html), url);

    match frame {
        Some(frame_url) if frame_url != *url => {
            log::debug!("Index {url} is a frameset, following {frame_url}");
            let html = fetch_with_retry(fetcher, &frame_url, policy).await?;
            Ok((frame_url, html))
        }
        _ => Ok((url.clone(), html)),
    }
}

async fn scrape_class<F: PageFetcher>(
    fetcher: &F,
    layout: &dyn JavadocLayout,
    link: &ClassLink,
    policy: &RetryPolicy,
) -> Result<ClassDoc, SkippedClass> {
    let skip = |error: ScrapeError| SkippedClass {
        package: link.package.clone(),
        class: link.name.clone(),
        url: link.url.to_string(),
        reason: error.to_string(),
    };

    let html = fetch_with_retry(fetcher, &link.url, policy)
        .await
        .map_err(skip)?;
    let page = Html::parse_document(&html);
    layout.extract_class_page(&page, link).map_err(skip)
}
