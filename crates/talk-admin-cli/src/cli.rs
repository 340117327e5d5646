use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "talk-admin")]
#[command(about = "Administer Kotohiro talk sessions from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Backend base URL (or set TALK_ADMIN_URL env var)
    #[arg(long, global = true, env = "TALK_ADMIN_URL")]
    pub base_url: Option<String>,

    /// SessionId cookie value (or set TALK_ADMIN_SESSION env var)
    #[arg(long, global = true, env = "TALK_ADMIN_SESSION", hide_env_values = true)]
    pub session: Option<String>,

    /// Config file (defaults to talk-admin/config.toml in the user config dir)
    #[arg(long, global = true, env = "TALK_ADMIN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the pagination window for a page
    Pages {
        #[arg(long, allow_negative_numbers = true)]
        current: i64,
        #[arg(long, allow_negative_numbers = true)]
        total: i64,
    },
    /// Talk session listing
    Session(SessionCommand),
    /// Report preview and visibility
    Report(ReportCommand),
    /// Analysis jobs
    Analysis(AnalysisCommand),
    /// Seed opinions
    Opinion(OpinionCommand),
    /// User statistics
    Stats(StatsCommand),
    /// Sign-in state
    Auth(AuthCommand),
    /// Push notification routing
    Push(PushCommand),
    /// Print version and build commit
    Version,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// Session commands
#[derive(Args)]
pub struct SessionCommand {
    #[command(subcommand)]
    pub action: SessionAction,
}

#[derive(Subcommand)]
pub enum SessionAction {
    /// List one page of talk sessions
    List {
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,
        #[arg(long)]
        per_page: Option<u32>,
    },
    /// Find a talk session by id
    Get {
        #[arg(long)]
        id: Uuid,
    },
}

// Report commands
#[derive(Args)]
pub struct ReportCommand {
    #[command(subcommand)]
    pub action: ReportAction,
}

#[derive(Subcommand)]
pub enum ReportAction {
    /// Print the generated report markdown
    Get {
        #[arg(long)]
        id: Uuid,
    },
    /// Make the report visible to participants
    Show {
        #[arg(long)]
        id: Uuid,
    },
    /// Hide the report from participants
    Hide {
        #[arg(long)]
        id: Uuid,
    },
}

// Analysis commands
#[derive(Args)]
pub struct AnalysisCommand {
    #[command(subcommand)]
    pub action: AnalysisAction,
}

#[derive(Subcommand)]
pub enum AnalysisAction {
    /// Rerun opinion-group analysis or report generation
    Regenerate {
        #[arg(long)]
        id: Uuid,
        /// group or report
        #[arg(long)]
        kind: String,
    },
}

// Opinion commands
#[derive(Args)]
pub struct OpinionCommand {
    #[command(subcommand)]
    pub action: OpinionAction,
}

#[derive(Subcommand)]
pub enum OpinionAction {
    /// Post a seed opinion to a session you own
    Seed {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        content: String,
        #[arg(long)]
        reference_url: Option<String>,
    },
}

// Stats commands
#[derive(Args)]
pub struct StatsCommand {
    #[command(subcommand)]
    pub action: StatsAction,
}

#[derive(Subcommand)]
pub enum StatsAction {
    /// Daily or weekly user activity, oldest first
    List {
        #[arg(long, default_value = "daily")]
        range: String,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Platform-wide totals
    Total,
}

// Auth commands
#[derive(Args)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub action: AuthAction,
}

#[derive(Subcommand)]
pub enum AuthAction {
    /// Show the signed-in administrator
    Whoami,
    /// List organizations available for login
    Orgs,
    /// Revoke the current session
    Logout,
}

// Push commands
#[derive(Args)]
pub struct PushCommand {
    #[command(subcommand)]
    pub action: PushAction,
}

#[derive(Subcommand, Clone)]
pub enum PushAction {
    /// Build the notification shown for a push payload
    Render {
        /// Payload JSON file (reads stdin when omitted)
        #[arg(long)]
        file: Option<PathBuf>,
        /// Treat the payload as a raw push event instead of a background message
        #[arg(long)]
        raw: bool,
    },
    /// Resolve what clicking a notification opens
    Click {
        /// Notification data as a JSON object
        #[arg(long)]
        data: Option<String>,
        #[arg(long)]
        action: Option<String>,
    },
}
