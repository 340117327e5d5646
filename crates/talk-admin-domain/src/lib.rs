pub mod auth;
pub mod opinion;
pub mod push;
pub mod report;
pub mod session;
pub mod stats;

pub use auth::{CurrentUser, Organization, OrganizationsResponse, TokenInfo};
pub use opinion::{OpinionRejection, SeedOpinion};
pub use push::{ClickOutcome, ControlMessage, LogForwarder, Notification, PushPayload};
pub use report::{ActionResponse, AnalysisKind, ReportResponse};
pub use session::{Owner, PageRequest, SessionPage, TalkSession, TalkSessionId, TalkSessionList};
pub use stats::{StatsQuery, StatsRange, UserStats, UserStatsTotal};
