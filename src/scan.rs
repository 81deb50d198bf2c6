use anyhow::{Context, Result};
use tracing::info;

use crate::extract;
use crate::fetch::{Fetcher, PAGE_TIMEOUT};
use crate::judge::ResponseJudge;
use crate::probe::{self, ValidKeyRecord};
use crate::vendor;

/// What one scan run found.
pub struct ScanOutcome {
    pub links_found: usize,
    pub valid: Vec<ValidKeyRecord>,
}

/// Run the full pipeline against one page: fetch, extract, then classify and
/// probe each link in order.
///
/// The page fetch is the only fatal failure. Everything after it degrades per
/// link or per probe, and the loop always reaches the end of the list.
pub async fn scan_page(
    fetcher: &dyn Fetcher,
    judge: &ResponseJudge,
    page_url: &str,
) -> Result<ScanOutcome> {
    info!("fetching page source: {}", page_url);
    let html = fetcher
        .fetch(page_url, PAGE_TIMEOUT)
        .await
        .with_context(|| format!("Page request failed: {}", page_url))?;

    let links = extract::extract(&html);
    if links.is_empty() {
        return Ok(ScanOutcome {
            links_found: 0,
            valid: Vec::new(),
        });
    }
    info!("found {} suspected key links", links.len());

    let mut valid = Vec::new();
    for link in &links {
        info!("link: {} (key: {})", link.domain_path, link.key);
        let v = vendor::classify(&link.domain_path);
        let records = probe::probe_key(fetcher, judge, v, &link.key, &link.domain_path).await;
        valid.extend(records);
    }

    Ok(ScanOutcome {
        links_found: links.len(),
        valid,
    })
}
