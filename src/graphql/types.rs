use crate::model::Video as ModelVideo;
use async_graphql::{ID, InputObject, Object, SimpleObject};

use super::node::{VIDEO_TYPE, to_global_id};

/// A video on the site.
#[derive(Clone)]
pub struct Video(pub ModelVideo);

#[Object]
impl Video {
    /// The global id of the video
    pub async fn id(&self) -> ID {
        to_global_id(VIDEO_TYPE, &self.0.id)
    }

    /// The title of the video
    pub async fn title(&self) -> &str {
        &self.0.title
    }

    /// The duration of the video, in seconds
    pub async fn duration(&self) -> i32 {
        self.0.duration
    }

    /// Whether or not the viewer has watched the video
    pub async fn watched(&self) -> bool {
        self.0.watched
    }
}

impl From<ModelVideo> for Video {
    fn from(v: ModelVideo) -> Self {
        Video(v)
    }
}

#[derive(SimpleObject)]
pub struct VideoConnectionFields {
    /// Number of videos across all pages
    pub total_count: usize,
}

#[derive(InputObject)]
pub struct CreateVideoInput {
    /// The title of the video
    pub title: String,
    /// The duration of the video, in seconds
    pub duration: i32,
    /// Whether or not the video has been watched
    pub watched: bool,
    pub client_mutation_id: Option<String>,
}

#[derive(SimpleObject)]
pub struct CreateVideoPayload {
    pub video: Video,
    pub client_mutation_id: Option<String>,
}
