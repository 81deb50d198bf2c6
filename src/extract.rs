use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static KEY_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(https?:)?//([^\s"'<>]+?(?:key|ak)=([A-Za-z0-9_-]+))"#).unwrap()
});

/// A suspected key-bearing link found in page text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedLink {
    /// Authority + path of the matched URL, query discarded.
    pub domain_path: String,
    pub key: String,
}

/// Scan raw HTML for URL-embedded `key=` / `ak=` assignments.
///
/// Matches are returned in order of appearance and never deduplicated.
/// Key values are restricted to `[A-Za-z0-9_-]`; characters outside that set
/// (`+`, `/`, ...) end the match, an intentional scope restriction.
pub fn extract(html: &str) -> Vec<ExtractedLink> {
    KEY_LINK_RE
        .captures_iter(html)
        .filter_map(|cap| {
            let link = cap.get(2)?.as_str();
            let key = cap.get(3)?.as_str().to_string();
            Some(ExtractedLink {
                domain_path: domain_path(link)?,
                key,
            })
        })
        .collect()
}

/// Authority + path of a schemeless link, query and fragment discarded.
fn domain_path(link: &str) -> Option<String> {
    let parsed = Url::parse(&format!("http://{}", link)).ok()?;
    Some(format!("{}{}", parsed.authority(), parsed.path()))
}
