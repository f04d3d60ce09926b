use crate::model::{Video, seed_videos};
use std::time::Duration;
use tokio::sync::RwLock;

/// Process-local list of videos.
///
/// Ids are not unique. Lookups return the first record in insertion order.
pub struct VideoStore {
    videos: RwLock<Vec<Video>>,
    latency: Duration,
}

impl VideoStore {
    pub fn new(videos: Vec<Video>, latency: Duration) -> Self {
        Self {
            videos: RwLock::new(videos),
            latency,
        }
    }

    pub fn seeded(latency: Duration) -> Self {
        Self::new(seed_videos(), latency)
    }

    /// Simulated round trip to a backing data source.
    async fn fetch_delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    pub async fn list(&self) -> Vec<Video> {
        self.fetch_delay().await;
        self.videos.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Video> {
        self.fetch_delay().await;
        self.videos
            .read()
            .await
            .iter()
            .find(|v| v.id == id)
            .cloned()
    }

    pub async fn create(&self, video: Video) -> Video {
        self.fetch_delay().await;
        let mut videos = self.videos.write().await;
        videos.push(video.clone());
        tracing::debug!(id = %video.id, total = videos.len(), "video created");
        video
    }

    pub async fn len(&self) -> usize {
        self.videos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.videos.read().await.is_empty()
    }
}

impl Default for VideoStore {
    fn default() -> Self {
        Self::seeded(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_returns_seed_in_order() {
        let store = VideoStore::default();
        let ids: Vec<_> = store.list().await.into_iter().map(|v| v.id).collect();
        assert_eq!(ids, vec!["a", "b", "b"]);
    }

    #[tokio::test]
    async fn test_get_returns_first_match() {
        let store = VideoStore::default();
        assert_eq!(store.get("b").await.unwrap().title, "Ember.js CLI");
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        let store = VideoStore::default();
        assert!(store.get("zzz").await.is_none());
    }

    #[tokio::test]
    async fn test_create_keeps_duplicates() {
        let store = VideoStore::new(Vec::new(), Duration::ZERO);
        assert!(store.is_empty().await);

        store.create(Video::from_title("Same", 10, false)).await;
        store.create(Video::from_title("Same", 20, true)).await;

        assert_eq!(store.len().await, 2);
        let found = store.get(&Video::id_for_title("Same")).await.unwrap();
        assert_eq!(found.duration, 10);
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_applied() {
        let store = VideoStore::seeded(Duration::from_millis(500));
        let start = tokio::time::Instant::now();
        store.list().await;
        assert!(start.elapsed() >= Duration::from_millis(500));
    }
}
