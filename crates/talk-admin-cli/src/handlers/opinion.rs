use talk_admin_client::workflows;
use talk_admin_domain::SeedOpinion;

use crate::cli::OpinionAction;
use crate::context::CliContext;
use crate::output;

pub async fn handle(ctx: &CliContext, action: OpinionAction) -> anyhow::Result<()> {
    match action {
        OpinionAction::Seed {
            id,
            content,
            reference_url,
        } => {
            let opinion = match SeedOpinion::new(id, content, reference_url) {
                Ok(opinion) => opinion,
                Err(e) => return output::output_error(&e.to_string()),
            };
            let user = workflows::current_user(ctx.api()).await?;
            let session = workflows::find_session(ctx.api(), id, ctx.per_page()).await?;
            workflows::post_seed_opinion(ctx.api(), &user, &session, &opinion).await?;
            output::output_success(&opinion);
        }
    }
    Ok(())
}
