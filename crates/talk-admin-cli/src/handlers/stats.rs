use talk_admin_client::workflows;
use talk_admin_domain::{StatsQuery, StatsRange};

use crate::cli::StatsAction;
use crate::context::CliContext;
use crate::output;

pub async fn handle(ctx: &CliContext, action: StatsAction) -> anyhow::Result<()> {
    match action {
        StatsAction::List { range, limit } => {
            let query = match range
                .parse::<StatsRange>()
                .and_then(|range| StatsQuery::new(range, limit))
            {
                Ok(query) => query,
                Err(e) => return output::output_error(&e.to_string()),
            };
            let stats = workflows::user_stats(ctx.api(), query).await?;
            output::output_list(stats);
        }
        StatsAction::Total => {
            let total = ctx.api().user_stats_total().await?;
            output::output_success(&total);
        }
    }
    Ok(())
}
