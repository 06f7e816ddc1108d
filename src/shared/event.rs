/**
 * News Events
 *
 * This module defines the event types broadcast through the notifier by the
 * news-feed screens: a news item and the like/dislike events raised on it.
 */
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A news item shown on several screens at once
///
/// Equality and hashing use `id` only: two copies of the same item with
/// different like counts are still the same item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: u64,
    pub title: String,
    pub likes_count: i64,
}

impl NewsItem {
    pub fn new(id: u64, title: impl Into<String>, likes_count: i64) -> Self {
        Self {
            id,
            title: title.into(),
            likes_count,
        }
    }
}

impl PartialEq for NewsItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for NewsItem {}

impl Hash for NewsItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A like being added to or removed from a news item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "news", rename_all = "snake_case")]
pub enum LikeEvent {
    LikeAdded(NewsItem),
    LikeRemoved(NewsItem),
}

impl LikeEvent {
    /// The news item the event refers to
    pub fn news(&self) -> &NewsItem {
        match self {
            LikeEvent::LikeAdded(news) | LikeEvent::LikeRemoved(news) => news,
        }
    }

    /// +1 for an added like, -1 for a removed one
    pub fn delta(&self) -> i64 {
        match self {
            LikeEvent::LikeAdded(_) => 1,
            LikeEvent::LikeRemoved(_) => -1,
        }
    }
}
