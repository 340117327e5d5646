use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use talk_admin_core::{AdminError, AdminResult};

/// Which backend job to rerun for a talk session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisKind {
    /// Opinion-group clustering.
    Group,
    /// The AI-written report.
    Report,
}

impl AnalysisKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Report => "report",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisKind {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "group" => Ok(Self::Group),
            "report" => Ok(Self::Report),
            _ => Err(AdminError::validation(format!(
                "Invalid analysis kind '{}'. Valid values: group, report",
                s
            ))),
        }
    }
}

/// Body returned by the report-visibility and regenerate endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub code: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
}

impl ActionResponse {
    pub fn is_success(&self) -> bool {
        matches!(self.status.as_deref(), Some("success") | Some("ok"))
    }

    /// Turns a non-success status into an error naming the failed action.
    pub fn into_result(self, action: &str) -> AdminResult<Self> {
        if self.is_success() {
            return Ok(self);
        }
        let detail = match (&self.status, &self.code) {
            (Some(status), _) => format!("status '{}'", status),
            (None, Some(code)) if !code.is_null() => format!("code {}", code),
            _ => "no status".to_string(),
        };
        Err(AdminError::Internal(format!("{} failed: {}", action, detail)))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportResponse {
    #[serde(default, skip_serializing_if = "is_absent")]
    pub code: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
}

impl ReportResponse {
    /// The report markdown, provided the backend sent one and no error code.
    pub fn into_report(self) -> AdminResult<String> {
        if let Some(code) = self.code.filter(|code| !code.is_null()) {
            return Err(AdminError::NotFound(format!(
                "report unavailable (code {})",
                code
            )));
        }
        self.report
            .ok_or_else(|| AdminError::NotFound("report has not been generated yet".to_string()))
    }
}

/// Form body for `POST .../analysis/report`.
pub fn visibility_form(hidden: bool) -> Vec<(&'static str, String)> {
    vec![("hidden", hidden.to_string())]
}

/// Form body for `POST .../analysis/regenerate`.
pub fn regenerate_form(kind: AnalysisKind) -> Vec<(&'static str, String)> {
    vec![("type", kind.as_str().to_string())]
}

fn is_absent(value: &Option<Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analysis_kind() {
        assert_eq!("group".parse::<AnalysisKind>().unwrap(), AnalysisKind::Group);
        assert_eq!("REPORT".parse::<AnalysisKind>().unwrap(), AnalysisKind::Report);
        assert!("summary".parse::<AnalysisKind>().is_err());
    }

    #[test]
    fn test_action_success_statuses() {
        for status in ["success", "ok"] {
            let resp: ActionResponse =
                serde_json::from_str(&format!(r#"{{"status":"{}"}}"#, status)).unwrap();
            assert!(resp.is_success());
            assert!(resp.into_result("toggle").is_ok());
        }
    }

    #[test]
    fn test_action_failure_is_error() {
        let resp: ActionResponse = serde_json::from_str(r#"{"status":"error"}"#).unwrap();
        let err = resp.into_result("regenerate").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Internal error: regenerate failed: status 'error'"
        );

        let resp: ActionResponse = serde_json::from_str(r#"{"code":"E001"}"#).unwrap();
        let err = resp.into_result("toggle").unwrap_err();
        assert!(err.to_string().contains("code \"E001\""));
    }

    #[test]
    fn test_report_response() {
        let ok: ReportResponse = serde_json::from_str(r##"{"report":"# Summary"}"##).unwrap();
        assert_eq!(ok.into_report().unwrap(), "# Summary");

        let with_code: ReportResponse =
            serde_json::from_str(r#"{"code":404,"report":"stale"}"#).unwrap();
        assert!(matches!(
            with_code.into_report(),
            Err(AdminError::NotFound(_))
        ));

        let missing: ReportResponse = serde_json::from_str("{}").unwrap();
        assert!(missing.into_report().is_err());

        let null_code: ReportResponse =
            serde_json::from_str(r#"{"code":null,"report":"ok"}"#).unwrap();
        assert_eq!(null_code.into_report().unwrap(), "ok");
    }

    #[test]
    fn test_forms() {
        assert_eq!(visibility_form(true), vec![("hidden", "true".to_string())]);
        assert_eq!(visibility_form(false), vec![("hidden", "false".to_string())]);
        assert_eq!(
            regenerate_form(AnalysisKind::Group),
            vec![("type", "group".to_string())]
        );
    }
}
