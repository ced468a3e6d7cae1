use super::PostQueryService;
use crate::{
    application::dto::DashboardStatsDto,
    domain::post::{PostFilter, PostStats},
};

impl PostQueryService {
    pub async fn dashboard_stats(&self) -> DashboardStatsDto {
        let posts = self.fetch_posts(&PostFilter::all(), "dashboard_stats").await;
        let stats = posts.iter().fold(PostStats::default(), |mut stats, post| {
            stats.total += 1;
            if post.is_published {
                stats.published += 1;
            } else {
                stats.drafts += 1;
            }
            if post.is_trending {
                stats.trending += 1;
            }
            stats
        });
        stats.into()
    }
}
