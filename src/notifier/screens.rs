//! # News Screens
//!
//! Three screens that stay in sync on news likes without knowing about each
//! other. Every screen keeps its own copy of the data it shows and updates it
//! when a `LikeEvent` arrives through the shared `Notifier`.
//!
//! - **News feed**: the full list of items, can like/dislike them all
//! - **News detail**: a single item
//! - **Profile**: the number of likes the user has given
//!
//! The feed holds only a `Weak` handle to the notifier it publishes through.

use crate::notifier::registry::{Notifier, PublishReport};
use crate::notifier::subscriber::Subscriber;
use crate::shared::{LikeEvent, NewsItem, SubscriberError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Notifier carrying news like events between screens
pub type ScreenMediator = Notifier<LikeEvent>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct NewsFeedScreen {
    news: Mutex<Vec<NewsItem>>,
    mediator: Weak<ScreenMediator>,
}

impl NewsFeedScreen {
    pub fn new(mediator: &Arc<ScreenMediator>, news: Vec<NewsItem>) -> Arc<Self> {
        Arc::new(Self {
            news: Mutex::new(news),
            mediator: Arc::downgrade(mediator),
        })
    }

    /// Current copy of the feed
    pub fn news(&self) -> Vec<NewsItem> {
        lock(&self.news).clone()
    }

    /// Like count of item `id`, if the feed shows it
    pub fn likes_of(&self, id: u64) -> Option<i64> {
        lock(&self.news)
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.likes_count)
    }

    /// The user liked every item in the feed
    pub fn like_all(&self) -> PublishReport {
        tracing::info!("[Screen] News Feed: user liked all news");
        self.broadcast(LikeEvent::LikeAdded)
    }

    /// The user removed their like from every item in the feed
    pub fn dislike_all(&self) -> PublishReport {
        tracing::info!("[Screen] News Feed: user disliked all news");
        self.broadcast(LikeEvent::LikeRemoved)
    }

    fn broadcast(&self, make_event: fn(NewsItem) -> LikeEvent) -> PublishReport {
        let mut report = PublishReport::default();
        let Some(mediator) = self.mediator.upgrade() else {
            tracing::warn!("[Screen] News Feed: mediator is gone, nothing published");
            return report;
        };
        // Our own lock must be free: the feed receives its own events.
        let news = self.news();
        for item in news {
            report.merge(mediator.publish(make_event(item)));
        }
        report
    }
}

impl Subscriber<LikeEvent> for NewsFeedScreen {
    fn name(&self) -> &str {
        "news_feed"
    }

    fn receive(&self, event: &LikeEvent) -> Result<(), SubscriberError> {
        let target = event.news();
        tracing::info!("[Screen] News Feed: received {} for news {}", event_label(event), target.id);
        let mut news = lock(&self.news);
        if let Some(item) = news.iter_mut().find(|item| **item == *target) {
            item.likes_count += event.delta();
        }
        Ok(())
    }
}

pub struct NewsDetailScreen {
    news: Mutex<NewsItem>,
}

impl NewsDetailScreen {
    pub fn new(news: NewsItem) -> Arc<Self> {
        Arc::new(Self {
            news: Mutex::new(news),
        })
    }

    pub fn news(&self) -> NewsItem {
        lock(&self.news).clone()
    }
}

impl Subscriber<LikeEvent> for NewsDetailScreen {
    fn name(&self) -> &str {
        "news_detail"
    }

    fn receive(&self, event: &LikeEvent) -> Result<(), SubscriberError> {
        let target = event.news();
        tracing::info!("[Screen] News Detail: received {} for news {}", event_label(event), target.id);
        let mut news = lock(&self.news);
        if *news == *target {
            news.likes_count += event.delta();
        }
        Ok(())
    }
}

pub struct ProfileScreen {
    given_likes: Mutex<i64>,
}

impl ProfileScreen {
    pub fn new(given_likes: i64) -> Arc<Self> {
        Arc::new(Self {
            given_likes: Mutex::new(given_likes),
        })
    }

    pub fn given_likes(&self) -> i64 {
        *lock(&self.given_likes)
    }
}

impl Subscriber<LikeEvent> for ProfileScreen {
    fn name(&self) -> &str {
        "profile"
    }

    fn receive(&self, event: &LikeEvent) -> Result<(), SubscriberError> {
        tracing::info!("[Screen] Profile: received {} for news {}", event_label(event), event.news().id);
        *lock(&self.given_likes) += event.delta();
        Ok(())
    }
}

fn event_label(event: &LikeEvent) -> &'static str {
    match event {
        LikeEvent::LikeAdded(_) => "like_added",
        LikeEvent::LikeRemoved(_) => "like_removed",
    }
}
