use async_trait::async_trait;
use talk_admin_core::AdminResult;
use talk_admin_domain::{
    ActionResponse, AnalysisKind, Organization, ReportResponse, SeedOpinion, StatsQuery,
    TalkSessionId, TalkSessionList, TokenInfo, UserStats, UserStatsTotal,
};

/// Operations the admin backend exposes.
/// Implementations decide transport; the workflows only see this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// `GET /v1/manage/talksessions/list`
    async fn list_talk_sessions(&self, limit: i64, offset: i64) -> AdminResult<TalkSessionList>;

    /// `POST /v1/manage/talksessions/{id}/analysis/report`
    async fn set_report_visibility(
        &self,
        id: TalkSessionId,
        hidden: bool,
    ) -> AdminResult<ActionResponse>;

    /// `POST /v1/manage/talksessions/{id}/analysis/regenerate`
    async fn regenerate_analysis(
        &self,
        id: TalkSessionId,
        kind: AnalysisKind,
    ) -> AdminResult<ActionResponse>;

    /// `GET /v1/manage/talksessions/{id}/analysis/report`
    async fn get_report(&self, id: TalkSessionId) -> AdminResult<ReportResponse>;

    /// `POST /opinions`
    async fn post_seed_opinion(&self, opinion: &SeedOpinion) -> AdminResult<()>;

    /// `GET /v1/manage/users/stats/list`, newest bucket first.
    async fn user_stats(&self, query: StatsQuery) -> AdminResult<Vec<UserStats>>;

    /// `GET /v1/manage/users/stats/total`
    async fn user_stats_total(&self) -> AdminResult<UserStatsTotal>;

    /// `GET /auth/token/info`
    async fn token_info(&self) -> AdminResult<TokenInfo>;

    /// `GET /organizations`
    async fn organizations(&self) -> AdminResult<Vec<Organization>>;

    /// `POST /auth/revoke`
    async fn logout(&self) -> AdminResult<()>;
}
