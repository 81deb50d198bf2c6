/// Outcome of probing one endpoint with one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Valid,
    Invalid,
    ParameterError,
}

const INVALID_KEY_HINTS: &[&str] = &[
    "INVALID_USER_KEY",
    "INVALID_USERAK",
    "key is illegal",
    "ak非法",
    "无效的ak",
    "无效的key",
    "权限校验失败",
    "开发者权限",
    "未授权",
];

const PARAMETER_ERROR_HINTS: &[&str] = &[
    "参数不存在",
    "参数错误",
    "缺少参数",
    "禁用",
    "parameter missing",
    "disabled",
];

/// Classifies probe response bodies by substring hints.
///
/// Hints are ordered data on the judge, so new vendor error strings can be
/// added without touching the matching logic. Precedence is strict: any
/// invalid hint beats any parameter-error hint regardless of position, and a
/// body containing neither counts as valid. That default is a known
/// false-positive risk (a WAF page or generic success envelope with no
/// recognizable error text also lands on valid).
pub struct ResponseJudge {
    invalid_hints: Vec<String>,
    parameter_error_hints: Vec<String>,
}

impl Default for ResponseJudge {
    fn default() -> Self {
        Self::new(INVALID_KEY_HINTS, PARAMETER_ERROR_HINTS)
    }
}

impl ResponseJudge {
    pub fn new(invalid_hints: &[&str], parameter_error_hints: &[&str]) -> Self {
        Self {
            invalid_hints: invalid_hints.iter().map(|h| h.to_lowercase()).collect(),
            parameter_error_hints: parameter_error_hints
                .iter()
                .map(|h| h.to_lowercase())
                .collect(),
        }
    }

    /// Classify a response body. Matching is case-insensitive.
    pub fn judge(&self, body: &str) -> ProbeOutcome {
        let text = body.to_lowercase();
        if self.invalid_hints.iter().any(|h| text.contains(h)) {
            ProbeOutcome::Invalid
        } else if self.parameter_error_hints.iter().any(|h| text.contains(h)) {
            ProbeOutcome::ParameterError
        } else {
            ProbeOutcome::Valid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_hint_wins() {
        let judge = ResponseJudge::default();
        assert_eq!(judge.judge("INVALID_USER_KEY: bad key"), ProbeOutcome::Invalid);
        assert_eq!(judge.judge(r#"{"status":"AK非法"}"#), ProbeOutcome::Invalid);
    }

    #[test]
    fn invalid_beats_parameter_error_regardless_of_position() {
        let judge = ResponseJudge::default();
        assert_eq!(
            judge.judge("缺少参数 city, 并且 权限校验失败"),
            ProbeOutcome::Invalid
        );
    }

    #[test]
    fn parameter_error_hints() {
        let judge = ResponseJudge::default();
        assert_eq!(judge.judge("缺少参数 city"), ProbeOutcome::ParameterError);
        assert_eq!(
            judge.judge("Service Disabled for this app"),
            ProbeOutcome::ParameterError
        );
    }

    #[test]
    fn no_hint_defaults_to_valid() {
        let judge = ResponseJudge::default();
        assert_eq!(
            judge.judge(r#"{"status":"0","results":[{"name":"x"}]}"#),
            ProbeOutcome::Valid
        );
        assert_eq!(judge.judge(""), ProbeOutcome::Valid);
    }

    #[test]
    fn hint_lists_are_configurable() {
        let judge = ResponseJudge::new(&["quota exceeded"], &[]);
        assert_eq!(judge.judge("Quota Exceeded"), ProbeOutcome::Invalid);
        assert_eq!(judge.judge("缺少参数"), ProbeOutcome::Valid);
    }
}
