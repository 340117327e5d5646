use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use talk_admin_core::{AdminError, AdminResult, PageWindow};
use uuid::Uuid;

pub type TalkSessionId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    #[serde(rename = "DisplayName", alias = "displayName")]
    pub display_name: String,
    #[serde(rename = "DisplayID", alias = "displayID")]
    pub display_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalkSession {
    #[serde(rename = "TalkSessionID", alias = "talkSessionID")]
    pub id: TalkSessionId,
    #[serde(rename = "Theme", alias = "theme")]
    pub theme: String,
    /// Whether the generated report is hidden from participants.
    #[serde(rename = "Hidden", alias = "hidden", default)]
    pub hidden: bool,
    #[serde(rename = "Owner", alias = "owner")]
    pub owner: Owner,
    #[serde(rename = "CreatedAt", alias = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "ScheduledEndTime", alias = "scheduledEndTime")]
    pub scheduled_end_time: DateTime<Utc>,
    #[serde(rename = "OpinionCount", alias = "opinionCount", default)]
    pub opinion_count: i64,
    #[serde(rename = "VoteCount", alias = "voteCount", default)]
    pub vote_count: i64,
    #[serde(rename = "VoteUserCount", alias = "voteUserCount", default)]
    pub vote_user_count: i64,
}

impl TalkSession {
    /// Seed opinions may only be posted by the session owner.
    pub fn is_owned_by(&self, display_id: &str) -> bool {
        self.owner.display_id == display_id
    }

    pub fn can_preview_report(&self) -> bool {
        self.opinion_count > 0
    }

    pub fn ensure_report_previewable(&self) -> AdminResult<()> {
        if self.can_preview_report() {
            Ok(())
        } else {
            Err(AdminError::validation(format!(
                "talk session {} has no opinions yet, so there is no report to preview",
                self.id
            )))
        }
    }

    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        self.scheduled_end_time <= now
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TalkSessionList {
    #[serde(rename = "TotalCount", alias = "totalCount", default)]
    pub total_count: i64,
    #[serde(rename = "TalkSessionStats", alias = "talkSessionStats", default)]
    pub sessions: Vec<TalkSession>,
}

/// A 1-indexed page of a listing together with its page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: u32,
}

impl PageRequest {
    pub fn new(page: i64, per_page: u32) -> AdminResult<Self> {
        if page < 1 {
            return Err(AdminError::validation(format!(
                "page must be 1 or greater (got {})",
                page
            )));
        }
        if per_page == 0 {
            return Err(AdminError::validation("page size must be greater than 0"));
        }
        if (page - 1).checked_mul(i64::from(per_page)).is_none() {
            return Err(AdminError::validation(format!(
                "page {} with page size {} is out of range",
                page, per_page
            )));
        }
        Ok(Self { page, per_page })
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    /// Saturates for hand-built requests that skipped `new`.
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.limit())
    }
}

pub fn total_pages(total_count: i64, per_page: u32) -> i64 {
    if total_count <= 0 || per_page == 0 {
        return 0;
    }
    let per_page = i64::from(per_page);
    total_count / per_page + i64::from(total_count % per_page != 0)
}

/// One fetched page of talk sessions plus the pagination window to show with it.
#[derive(Debug, Clone, Serialize)]
pub struct SessionPage {
    pub request: PageRequest,
    pub total_count: i64,
    pub sessions: Vec<TalkSession>,
    pub window: PageWindow,
}

impl SessionPage {
    pub fn from_list(list: TalkSessionList, request: PageRequest) -> AdminResult<Self> {
        let total = total_pages(list.total_count, request.per_page);
        if total > 0 && request.page > total {
            return Err(AdminError::validation(format!(
                "page {} is beyond the last page {}",
                request.page, total
            )));
        }
        if total == 0 && request.page != 1 {
            return Err(AdminError::validation(format!(
                "page {} requested but there are no talk sessions",
                request.page
            )));
        }

        let window = PageWindow::calculate(request.page, total)?;
        Ok(Self {
            request,
            total_count: list.total_count,
            sessions: list.sessions,
            window,
        })
    }

    pub fn total_pages(&self) -> i64 {
        self.window.total_pages
    }

    /// The pagination bar is only worth showing with more than one page.
    pub fn show_pagination(&self) -> bool {
        self.total_pages() > 1
    }
}
