use tracing::{info, warn};

use crate::catalog;
use crate::fetch::{Fetcher, PROBE_TIMEOUT};
use crate::judge::{ProbeOutcome, ResponseJudge};
use crate::vendor::Vendor;

/// A key confirmed working against one vendor endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidKeyRecord {
    pub vendor: Vendor,
    pub api_name: String,
    pub key: String,
    /// domain+path of the page link the key was extracted from.
    pub source: String,
    pub tested_url: String,
}

/// One probe attempt: a judged response or a transport failure.
enum ProbeAttempt {
    Judged(ProbeOutcome),
    TransportError(String),
}

async fn attempt(fetcher: &dyn Fetcher, judge: &ResponseJudge, url: &str) -> ProbeAttempt {
    match fetcher.fetch(url, PROBE_TIMEOUT).await {
        Ok(body) => ProbeAttempt::Judged(judge.judge(&body)),
        Err(e) => ProbeAttempt::TransportError(e.to_string()),
    }
}

/// Probe a key against every catalog endpoint of its vendor, in catalog order.
///
/// A transport failure or a negative outcome on one endpoint never stops the
/// remaining endpoints. The returned records are the endpoints the key
/// answered cleanly: zero, one, or several per key.
pub async fn probe_key(
    fetcher: &dyn Fetcher,
    judge: &ResponseJudge,
    vendor: Vendor,
    key: &str,
    source: &str,
) -> Vec<ValidKeyRecord> {
    let mut valid = Vec::new();

    let Some(templates) = catalog::templates(vendor) else {
        warn!("unknown vendor for {}, skipping probe", source);
        return valid;
    };

    info!("testing {} key: {}", vendor.tag().to_uppercase(), key);
    for template in templates {
        let tested_url = template.render(key);
        match attempt(fetcher, judge, &tested_url).await {
            ProbeAttempt::Judged(ProbeOutcome::Valid) => {
                info!("usable -> {}", template.api_name);
                valid.push(ValidKeyRecord {
                    vendor,
                    api_name: template.api_name.to_string(),
                    key: key.to_string(),
                    source: source.to_string(),
                    tested_url,
                });
            }
            ProbeAttempt::Judged(ProbeOutcome::Invalid) => {
                info!("not usable -> {}", template.api_name);
            }
            ProbeAttempt::Judged(ProbeOutcome::ParameterError) => {
                warn!("parameter problem -> {}", template.api_name);
            }
            ProbeAttempt::TransportError(e) => {
                warn!("request failed -> {}: {}", template.api_name, e);
            }
        }
    }

    valid
}


#[cfg(test)]
mod tests {
    use super::test_support::ScriptedFetcher;
    use super::*;

    #[tokio::test]
    async fn unknown_vendor_issues_no_network_calls() {
        let fetcher = ScriptedFetcher::new(vec![]);
        let judge = ResponseJudge::default();

        let records =
            probe_key(&fetcher, &judge, Vendor::Unknown, "k1", "example.com/page").await;

        assert!(records.is_empty());
        assert_eq!(fetcher.call_count(), 0);
    }

    #[tokio::test]
    async fn transport_failure_is_isolated_per_template() {
        // amap has three templates: fail, valid, invalid.
        let fetcher = ScriptedFetcher::new(vec![
            Err("connect timeout".into()),
            Ok(r#"{"status":"1","info":"OK"}"#.into()),
            Ok("INVALID_USER_KEY".into()),
        ]);
        let judge = ResponseJudge::default();

        let records =
            probe_key(&fetcher, &judge, Vendor::Amap, "k123", "restapi.amap.com/v3/x").await;

        assert_eq!(fetcher.call_count(), 3);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].api_name, "高德 JS API");
        assert_eq!(records[0].key, "k123");
        assert!(records[0].tested_url.contains("key=k123"));
    }

    #[tokio::test]
    async fn tested_url_matches_rendered_template() {
        let fetcher = ScriptedFetcher::new(vec![Ok("{}".into())]);
        let judge = ResponseJudge::default();

        let records =
            probe_key(&fetcher, &judge, Vendor::Tencent, "TKEY", "apis.map.qq.com/ws").await;

        assert_eq!(records.len(), 1);
        let expected = catalog::templates(Vendor::Tencent).unwrap()[0].render("TKEY");
        assert_eq!(records[0].tested_url, expected);
        assert_eq!(fetcher.calls(), vec![expected]);
    }

    #[tokio::test]
    async fn negative_outcomes_produce_no_records() {
        let fetcher = ScriptedFetcher::new(vec![
            Ok("无效的ak".into()),
            Ok("缺少参数 query".into()),
        ]);
        let judge = ResponseJudge::default();

        let records =
            probe_key(&fetcher, &judge, Vendor::Baidu, "bk", "api.map.baidu.com/x").await;

        assert!(records.is_empty());
        assert_eq!(fetcher.call_count(), 2);
    }
}
