//! Data models for vidql.
//!
//! - [`Video`]: a video record (id, title, duration in seconds, watched flag)
//! - [`seed_videos`]: the records a fresh store starts with

mod video;

pub use video::{Video, seed_videos};
