//! In-memory storage for videos.
//!
//! Nothing is persisted: the store lives as long as the process does and is
//! seeded from [`crate::model::seed_videos`] at startup.

mod video_store;

pub use video_store::VideoStore;
