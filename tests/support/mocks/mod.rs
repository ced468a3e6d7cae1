// tests/support/mocks/mod.rs
pub mod repos;
pub mod security;
pub mod time;

pub use repos::FailingStore;
pub use security::DummyPasswordHasher;
pub use time::{TickingClock, fixed_now};
