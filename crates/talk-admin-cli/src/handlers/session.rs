use serde::Serialize;
use talk_admin_client::workflows;
use talk_admin_domain::{PageRequest, TalkSession};

use crate::cli::SessionAction;
use crate::context::CliContext;
use crate::output::{self, PaginationView};

#[derive(Serialize)]
struct SessionListView {
    page: i64,
    per_page: u32,
    total_count: i64,
    total_pages: i64,
    sessions: Vec<TalkSession>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pagination: Option<PaginationView>,
}

pub async fn handle(ctx: &CliContext, action: SessionAction) -> anyhow::Result<()> {
    match action {
        SessionAction::List { page, per_page } => {
            let per_page = per_page.unwrap_or_else(|| ctx.per_page());
            let request = match PageRequest::new(page, per_page) {
                Ok(request) => request,
                Err(e) => return output::output_error(&e.to_string()),
            };
            let page = workflows::fetch_session_page(ctx.api(), request).await?;
            let total_pages = page.total_pages();
            let pagination = page
                .show_pagination()
                .then(|| PaginationView::from(page.window.clone()));
            output::output_success(SessionListView {
                page: page.request.page,
                per_page: page.request.per_page,
                total_count: page.total_count,
                total_pages,
                sessions: page.sessions,
                pagination,
            });
        }
        SessionAction::Get { id } => {
            let session = workflows::find_session(ctx.api(), id, ctx.per_page()).await?;
            output::output_success(&session);
        }
    }
    Ok(())
}
