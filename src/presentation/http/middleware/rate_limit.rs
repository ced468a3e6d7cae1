// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

const REPLENISH_EVERY_SECS: u64 = 2;
const BURST_SIZE: u32 = 10;

pub type PublicWriteLimit = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client limit for anonymous writes (comments, votes, contact, sign-in).
/// The client key is taken from forwarding headers, falling back to the peer
/// address, so the server must be run with connect info.
pub fn public_write_limit() -> Option<PublicWriteLimit> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(REPLENISH_EVERY_SECS);
    builder.burst_size(BURST_SIZE);
    let Some(config) = builder.key_extractor(SmartIpKeyExtractor).finish() else {
        tracing::warn!("invalid rate limit configuration, public writes are unthrottled");
        return None;
    };
    Some(GovernorLayer::new(config))
}
