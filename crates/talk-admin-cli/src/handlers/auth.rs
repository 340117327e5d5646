use talk_admin_client::workflows;

use crate::cli::AuthAction;
use crate::context::CliContext;
use crate::output;

pub async fn handle(ctx: &CliContext, action: AuthAction) -> anyhow::Result<()> {
    match action {
        AuthAction::Whoami => {
            let user = workflows::current_user(ctx.api()).await?;
            output::output_success(&user);
        }
        AuthAction::Orgs => {
            let orgs = workflows::organizations_or_empty(ctx.api()).await;
            output::output_list(orgs);
        }
        AuthAction::Logout => {
            ctx.api().logout().await?;
            output::output_success(serde_json::json!({"logged_out": true}));
        }
    }
    Ok(())
}
