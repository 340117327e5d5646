use async_trait::async_trait;
use reqwest::header::COOKIE;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use talk_admin_core::{AdminConfig, AdminError, AdminResult};
use talk_admin_domain::auth::SESSION_COOKIE_NAME;
use talk_admin_domain::report::{regenerate_form, visibility_form};
use talk_admin_domain::{
    ActionResponse, AnalysisKind, OpinionRejection, Organization, OrganizationsResponse,
    ReportResponse, SeedOpinion, StatsQuery, TalkSessionId, TalkSessionList, TokenInfo, UserStats,
    UserStatsTotal,
};

use crate::api::AdminApi;

/// reqwest-backed client for the admin backend.
pub struct HttpAdminClient {
    client: reqwest::Client,
    base_url: String,
    session_cookie: Option<String>,
}

impl HttpAdminClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AdminResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(AdminError::network)?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session_cookie: None,
        })
    }

    pub fn from_config(config: &AdminConfig) -> AdminResult<Self> {
        let client = Self::new(
            config.effective_base_url(),
            Duration::from_secs(config.effective_timeout_secs()),
        )?;
        Ok(client.with_session_cookie(config.session_cookie.clone()))
    }

    pub fn with_session_cookie(mut self, cookie: Option<String>) -> Self {
        self.session_cookie = cookie.filter(|c| !c.is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "Sending admin API request");
        let builder = self.client.request(method, url);
        match &self.session_cookie {
            Some(cookie) => builder.header(COOKIE, format!("{}={}", SESSION_COOKIE_NAME, cookie)),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> AdminResult<Response> {
        builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, "Admin API request failed");
            AdminError::network(e)
        })
    }

    /// Sends the request and decodes a JSON body, mapping non-2xx statuses to errors.
    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> AdminResult<T> {
        let resp = self.send(builder).await?;
        let resp = check_status(resp).await?;
        decode_json(resp).await
    }

    fn talk_session_path(id: TalkSessionId, suffix: &str) -> String {
        format!("/v1/manage/talksessions/{}/{}", id, suffix)
    }
}

async fn check_status(resp: Response) -> AdminResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), body = %body, "Admin API returned an error");
    Err(status_error(status, body))
}

fn status_error(status: StatusCode, body: String) -> AdminError {
    match status {
        StatusCode::FORBIDDEN => AdminError::Forbidden(non_empty_or(body, "login required")),
        StatusCode::UNAUTHORIZED => AdminError::Unauthenticated(non_empty_or(body, "login required")),
        StatusCode::NOT_FOUND => AdminError::NotFound(non_empty_or(body, "resource not found")),
        _ => AdminError::Api {
            status: status.as_u16(),
            message: body,
        },
    }
}

fn non_empty_or(body: String, fallback: &str) -> String {
    if body.trim().is_empty() {
        fallback.to_string()
    } else {
        body
    }
}

async fn decode_json<T: DeserializeOwned>(resp: Response) -> AdminResult<T> {
    let bytes = resp.bytes().await.map_err(AdminError::network)?;
    serde_json::from_slice(&bytes).map_err(AdminError::serialization)
}

#[async_trait]
impl AdminApi for HttpAdminClient {
    async fn list_talk_sessions(&self, limit: i64, offset: i64) -> AdminResult<TalkSessionList> {
        let builder = self
            .request(Method::GET, "/v1/manage/talksessions/list")
            .query(&[("limit", limit), ("offset", offset)]);
        let list: TalkSessionList = self.send_json(builder).await?;
        tracing::debug!(
            total = list.total_count,
            returned = list.sessions.len(),
            "Fetched talk sessions"
        );
        Ok(list)
    }

    async fn set_report_visibility(
        &self,
        id: TalkSessionId,
        hidden: bool,
    ) -> AdminResult<ActionResponse> {
        let builder = self
            .request(Method::POST, &Self::talk_session_path(id, "analysis/report"))
            .form(&visibility_form(hidden));
        self.send_json(builder).await
    }

    async fn regenerate_analysis(
        &self,
        id: TalkSessionId,
        kind: AnalysisKind,
    ) -> AdminResult<ActionResponse> {
        let builder = self
            .request(Method::POST, &Self::talk_session_path(id, "analysis/regenerate"))
            .form(&regenerate_form(kind));
        self.send_json(builder).await
    }

    async fn get_report(&self, id: TalkSessionId) -> AdminResult<ReportResponse> {
        let builder = self.request(Method::GET, &Self::talk_session_path(id, "analysis/report"));
        self.send_json(builder).await
    }

    async fn post_seed_opinion(&self, opinion: &SeedOpinion) -> AdminResult<()> {
        let form = opinion
            .form_fields()
            .into_iter()
            .fold(reqwest::multipart::Form::new(), |form, (name, value)| {
                form.text(name, value)
            });

        let resp = self
            .send(self.request(Method::POST, "/opinions").multipart(form))
            .await?;
        let status = resp.status();
        if status.is_success() {
            tracing::info!(talk_session_id = %opinion.talk_session_id, "Posted seed opinion");
            return Ok(());
        }

        let bytes = resp.bytes().await.unwrap_or_default();
        let rejection: OpinionRejection = serde_json::from_slice(&bytes).unwrap_or_default();
        Err(rejection.into_error(status.as_u16()))
    }

    async fn user_stats(&self, query: StatsQuery) -> AdminResult<Vec<UserStats>> {
        let builder = self
            .request(Method::GET, "/v1/manage/users/stats/list")
            .query(&query.query_pairs());
        self.send_json(builder).await
    }

    async fn user_stats_total(&self) -> AdminResult<UserStatsTotal> {
        let builder = self.request(Method::GET, "/v1/manage/users/stats/total");
        self.send_json(builder).await
    }

    async fn token_info(&self) -> AdminResult<TokenInfo> {
        let resp = self
            .send(self.request(Method::GET, "/auth/token/info"))
            .await?;
        let status = resp.status();
        if status == StatusCode::FORBIDDEN {
            return Err(AdminError::Forbidden("login required".to_string()));
        }
        if !status.is_success() {
            return Err(AdminError::Unauthenticated(format!(
                "token info request returned status {}",
                status.as_u16()
            )));
        }
        decode_json(resp).await
    }

    async fn organizations(&self) -> AdminResult<Vec<Organization>> {
        let resp: OrganizationsResponse = self
            .send_json(self.request(Method::GET, "/organizations"))
            .await?;
        Ok(resp.organizations)
    }

    async fn logout(&self) -> AdminResult<()> {
        let resp = self.send(self.request(Method::POST, "/auth/revoke")).await?;
        check_status(resp).await?;
        Ok(())
    }
}
