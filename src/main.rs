mod catalog;
mod extract;
mod fetch;
mod judge;
mod probe;
mod scan;
mod store;
mod vendor;

use std::path::Path;
use std::time::Instant;

use clap::Parser;

use fetch::HttpFetcher;
use judge::ResponseJudge;

#[derive(Parser)]
#[command(
    name = "mapkey_scanner",
    about = "Scan a page for embedded map-service API keys and probe them"
)]
struct Cli {
    /// Domain or URL to scan (http:// is assumed when no scheme is given)
    target: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let target = normalize_target(&cli.target);

    let fetcher = HttpFetcher::new();
    let judge = ResponseJudge::default();

    println!("Scanning {} ...", target);
    let outcome = scan::scan_page(&fetcher, &judge, &target).await?;

    if outcome.links_found == 0 {
        println!("No links carrying key= or ak= found.");
        return Ok(());
    }
    println!("Found {} suspected key links.", outcome.links_found);

    if outcome.valid.is_empty() {
        println!("No usable keys found.");
    } else {
        store::persist_to_file(Path::new(store::OUTPUT_FILE), &outcome.valid)?;
        println!(
            "Found {} usable key endpoints, saved to {}",
            outcome.valid.len(),
            store::OUTPUT_FILE
        );
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("Done in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}

/// Bare domains are accepted; default to http like the interactive prompt did.
fn normalize_target(input: &str) -> String {
    let t = input.trim();
    if t.starts_with("http") {
        t.to_string()
    } else {
        format!("http://{}", t)
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_target;

    #[test]
    fn scheme_defaulting() {
        assert_eq!(normalize_target("example.com"), "http://example.com");
        assert_eq!(normalize_target("https://example.com"), "https://example.com");
        assert_eq!(normalize_target(" example.com "), "http://example.com");
    }
}
