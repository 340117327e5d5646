//! Admin actions composed from raw API calls.
//!
//! Each function applies the checks the admin screens apply before and after
//! talking to the backend, so callers get either a usable value or an error.

use talk_admin_core::{AdminError, AdminResult};
use talk_admin_domain::stats::chronological;
use talk_admin_domain::{
    ActionResponse, AnalysisKind, CurrentUser, Organization, PageRequest, SeedOpinion,
    SessionPage, StatsQuery, TalkSession, TalkSessionId, UserStats,
};

use crate::api::AdminApi;

pub async fn fetch_session_page(
    api: &dyn AdminApi,
    request: PageRequest,
) -> AdminResult<SessionPage> {
    let list = api
        .list_talk_sessions(request.limit(), request.offset())
        .await?;
    SessionPage::from_list(list, request)
}

/// Walks the listing page by page until the session turns up.
pub async fn find_session(
    api: &dyn AdminApi,
    id: TalkSessionId,
    per_page: u32,
) -> AdminResult<TalkSession> {
    let mut request = PageRequest::new(1, per_page)?;
    loop {
        let list = api
            .list_talk_sessions(request.limit(), request.offset())
            .await?;
        let exhausted = list.sessions.is_empty()
            || request.offset().saturating_add(request.limit()) >= list.total_count;
        if let Some(session) = list.sessions.into_iter().find(|s| s.id == id) {
            return Ok(session);
        }
        if exhausted {
            return Err(AdminError::NotFound(format!("talk session {}", id)));
        }
        request = PageRequest::new(request.page + 1, per_page)?;
    }
}

pub async fn set_report_visibility(
    api: &dyn AdminApi,
    id: TalkSessionId,
    hidden: bool,
) -> AdminResult<ActionResponse> {
    let action = if hidden { "hide report" } else { "show report" };
    let resp = api.set_report_visibility(id, hidden).await?.into_result(action)?;
    tracing::info!(talk_session_id = %id, hidden, "Report visibility updated");
    Ok(resp)
}

pub async fn regenerate(
    api: &dyn AdminApi,
    id: TalkSessionId,
    kind: AnalysisKind,
) -> AdminResult<ActionResponse> {
    let resp = api
        .regenerate_analysis(id, kind)
        .await?
        .into_result(&format!("regenerate {}", kind))?;
    tracing::info!(talk_session_id = %id, %kind, "Regeneration requested");
    Ok(resp)
}

/// Fetches the report markdown; sessions without opinions are refused locally.
pub async fn preview_report(api: &dyn AdminApi, session: &TalkSession) -> AdminResult<String> {
    session.ensure_report_previewable()?;
    api.get_report(session.id).await?.into_report()
}

pub async fn current_user(api: &dyn AdminApi) -> AdminResult<CurrentUser> {
    CurrentUser::from_token_info(api.token_info().await?)
}

/// Posts a seed opinion after checking the signed-in user owns the session.
pub async fn post_seed_opinion(
    api: &dyn AdminApi,
    user: &CurrentUser,
    session: &TalkSession,
    opinion: &SeedOpinion,
) -> AdminResult<()> {
    let owns = user
        .display_id
        .as_deref()
        .is_some_and(|display_id| session.is_owned_by(display_id));
    if !owns {
        return Err(AdminError::Forbidden(format!(
            "only the owner of talk session {} can post seed opinions",
            session.id
        )));
    }
    if opinion.talk_session_id != session.id {
        return Err(AdminError::validation(
            "seed opinion targets a different talk session",
        ));
    }
    api.post_seed_opinion(opinion).await
}

/// User stats in chronological order, ready for charting.
pub async fn user_stats(api: &dyn AdminApi, query: StatsQuery) -> AdminResult<Vec<UserStats>> {
    Ok(chronological(api.user_stats(query).await?))
}

/// Organizations for the login picker. A failed lookup yields an empty list.
pub async fn organizations_or_empty(api: &dyn AdminApi) -> Vec<Organization> {
    match api.organizations().await {
        Ok(orgs) => orgs,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to fetch organizations");
            Vec::new()
        }
    }
}
