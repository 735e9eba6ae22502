pub mod error;
pub mod feed;
pub mod http;
mod retry;
pub mod subscription;
pub mod wire;

pub use error::FeedError;
pub use feed::{CategoryFilter, ProviderFeed, StaticProviderFeed};
pub use http::HttpProviderFeed;
pub use subscription::{FeedSnapshot, FeedState, FeedSubscription};
pub use wire::decode_providers;
