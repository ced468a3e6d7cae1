pub mod auth;
pub mod comments;
pub mod posts;
pub mod serde_time;
pub mod settings;

pub use auth::{AdminProfileDto, AuthenticatedAdmin, IssuedSession, SessionDto};
pub use comments::CommentDto;
pub use posts::{CategoryDto, DashboardStatsDto, PostDto};
pub use settings::DomainSettingsDto;
