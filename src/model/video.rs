use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,

    /// Length in seconds
    pub duration: i32,

    #[serde(default)]
    pub watched: bool,
}

impl Video {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        duration: i32,
        watched: bool,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration,
            watched,
        }
    }

    /// Build a video whose id is derived from its title.
    ///
    /// Two videos with the same title end up with the same id. Nothing
    /// downstream rejects that.
    pub fn from_title(title: impl Into<String>, duration: i32, watched: bool) -> Self {
        let title = title.into();
        Self::new(Self::id_for_title(&title), title, duration, watched)
    }

    pub fn id_for_title(title: &str) -> String {
        STANDARD.encode(title.as_bytes())
    }
}

/// The records every fresh store starts with.
///
/// The last two share an id.
pub fn seed_videos() -> Vec<Video> {
    vec![
        Video::new("a", "Create a GraphQL Schema", 120, true),
        Video::new("b", "Ember.js CLI", 240, false),
        Video::new("b", "Relay Connections", 180, false),
    ]
}
