use std::sync::Arc;
use std::time::Duration;

use async_graphql::connection::{self, Connection, Edge};
use async_graphql::{Context, EmptySubscription, ID, Object, Schema};
use chrono::SecondsFormat;

use crate::config::DataSettings;
use crate::model::Video as ModelVideo;
use crate::storage::VideoStore;

use super::extension::RunTime;
use super::node::{Node, VIDEO_TYPE, from_global_id, video_local_id};
use super::pagination::{OffsetCursor, page_bounds};
use super::types::*;

pub type VidqlSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub type VideoConnection = Connection<OffsetCursor, Video, VideoConnectionFields>;

pub struct AppState {
    pub store: Arc<VideoStore>,
    pub deferred_value_delay: Duration,
}

pub fn build_schema(store: Arc<VideoStore>, data: &DataSettings) -> VidqlSchema {
    let state = Arc::new(AppState {
        store,
        deferred_value_delay: data.deferred_value_delay(),
    });

    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .extension(RunTime)
        .finish()
}

/// Schema backed by a freshly seeded store.
pub fn build_default_schema(data: &DataSettings) -> VidqlSchema {
    build_schema(Arc::new(VideoStore::seeded(data.latency())), data)
}

fn get_state<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<AppState>> {
    ctx.data::<Arc<AppState>>()
}

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// A plain value, resolved synchronously
    async fn foo(&self) -> &'static str {
        "Hello Value"
    }

    /// A value that only becomes available after a delay
    async fn bar(&self, ctx: &Context<'_>) -> async_graphql::Result<String> {
        let delay = get_state(ctx)?.deferred_value_delay;
        tokio::time::sleep(delay).await;
        let now = chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        Ok(format!("Promise Value: {}", now))
    }

    /// Get a single video by its global or local ID
    async fn video(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Video>> {
        let store = &get_state(ctx)?.store;
        let local_id = video_local_id(&id);
        Ok(store.get(&local_id).await.map(Video::from))
    }

    /// All available videos
    async fn videos(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        before: Option<String>,
        first: Option<i32>,
        last: Option<i32>,
    ) -> async_graphql::Result<VideoConnection> {
        if first.is_some() && last.is_some() {
            return Err("Passing both first and last is not supported".into());
        }

        let store = get_state(ctx)?.store.clone();

        connection::query(
            after,
            before,
            first,
            last,
            |after: Option<OffsetCursor>, before: Option<OffsetCursor>, first, last| async move {
                let videos = store.list().await;
                let total_count = videos.len();
                let page = page_bounds(
                    total_count,
                    after.map(|c| c.0),
                    before.map(|c| c.0),
                    first,
                    last,
                );

                let mut conn = Connection::with_additional_fields(
                    page.has_previous_page,
                    page.has_next_page,
                    VideoConnectionFields { total_count },
                );
                let offset = page.range.start;
                conn.edges.extend(
                    videos
                        .into_iter()
                        .skip(offset)
                        .take(page.range.len())
                        .enumerate()
                        .map(|(i, v)| Edge::new(OffsetCursor(offset + i), Video::from(v))),
                );
                Ok::<_, async_graphql::Error>(conn)
            },
        )
        .await
    }

    /// Fetches an object given its ID
    async fn node(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Node>> {
        let Some((type_name, local_id)) = from_global_id(&id) else {
            return Ok(None);
        };

        match type_name.as_str() {
            VIDEO_TYPE => {
                let store = &get_state(ctx)?.store;
                Ok(store.get(&local_id).await.map(|v| Node::Video(v.into())))
            }
            _ => Ok(None),
        }
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a video. Its ID is derived from the title.
    async fn create_video(
        &self,
        ctx: &Context<'_>,
        input: CreateVideoInput,
    ) -> async_graphql::Result<CreateVideoPayload> {
        let store = &get_state(ctx)?.store;
        let video = ModelVideo::from_title(input.title, input.duration, input.watched);
        let video = store.create(video).await;

        Ok(CreateVideoPayload {
            video: video.into(),
            client_mutation_id: input.client_mutation_id,
        })
    }
}
