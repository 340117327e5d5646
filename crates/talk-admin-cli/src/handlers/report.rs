use talk_admin_client::workflows;
use talk_admin_domain::AnalysisKind;

use crate::cli::{AnalysisAction, ReportAction};
use crate::context::CliContext;
use crate::output;

pub async fn handle(ctx: &CliContext, action: ReportAction) -> anyhow::Result<()> {
    match action {
        ReportAction::Get { id } => {
            let session = workflows::find_session(ctx.api(), id, ctx.per_page()).await?;
            let report = workflows::preview_report(ctx.api(), &session).await?;
            output::output_success(serde_json::json!({
                "id": id.to_string(),
                "theme": session.theme,
                "report": report,
            }));
        }
        ReportAction::Show { id } => set_visibility(ctx, id, false).await?,
        ReportAction::Hide { id } => set_visibility(ctx, id, true).await?,
    }
    Ok(())
}

async fn set_visibility(ctx: &CliContext, id: uuid::Uuid, hidden: bool) -> anyhow::Result<()> {
    let resp = workflows::set_report_visibility(ctx.api(), id, hidden).await?;
    output::output_success(serde_json::json!({
        "id": id.to_string(),
        "hidden": hidden,
        "status": resp.status,
    }));
    Ok(())
}

pub async fn handle_analysis(ctx: &CliContext, action: AnalysisAction) -> anyhow::Result<()> {
    match action {
        AnalysisAction::Regenerate { id, kind } => {
            let kind: AnalysisKind = match kind.parse() {
                Ok(kind) => kind,
                Err(e) => return output::output_error(&format!("{}", e)),
            };
            let resp = workflows::regenerate(ctx.api(), id, kind).await?;
            output::output_success(serde_json::json!({
                "id": id.to_string(),
                "kind": kind,
                "status": resp.status,
            }));
        }
    }
    Ok(())
}
