//! End-to-end scenarios: configured auth chains and news-feed mediation

use crate::{assert_accepts, assert_rejects};
use authflow::chain::{
    login_chain, signup_chain, Capabilities, CapabilityCheck, ChainBuilder, LocationHandler,
    StaticCapability,
};
use authflow::notifier::{NewsDetailScreen, NewsFeedScreen, ProfileScreen, ScreenMediator};
use authflow::shared::{ChainConfig, NewsItem, Request, ValidationError};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn vasya() -> Request {
    Request::sign_up("Vasya", "Pupkin", "vasya.pupkin@gmail.com", "123HardPass", "123HardPass")
}

#[test]
fn test_signup_flow_with_notifications_off() {
    let config = ChainConfig::from_toml_str("notifications_enabled = false").unwrap();
    let chain = signup_chain(&config, &Capabilities::from_config(&config));
    assert_rejects!(chain, vasya(), ValidationError::NotificationsDisabled);

    // Entering at the location node skips the signup rules entirely.
    let location = chain.node(1).unwrap();
    assert_eq!(location.name(), "location");
    assert_rejects!(location, Request::default(), ValidationError::NotificationsDisabled);
}

#[test]
fn test_login_flow_with_live_capability() {
    let location_on = Arc::new(AtomicBool::new(false));
    let location: Arc<dyn CapabilityCheck> = {
        let flag = Arc::clone(&location_on);
        Arc::new(move || flag.load(Ordering::SeqCst))
    };
    let capabilities = Capabilities::new(location, Arc::new(StaticCapability::enabled()));
    let chain = login_chain(&capabilities);
    let request = Request::login("smth@gmail.com", "123HardPass");

    assert_rejects!(chain, request, ValidationError::LocationDisabled);
    location_on.store(true, Ordering::SeqCst);
    assert_accepts!(chain, request);
}

#[test]
fn test_profile_required_signup() {
    let config = ChainConfig::builder().require_profile(true).build().unwrap();
    let chain = signup_chain(&config, &Capabilities::from_config(&config));
    let nameless = Request::builder()
        .last_name("Pupkin")
        .email("a@b.com")
        .password("12345678")
        .repeated_password("12345678")
        .build();
    assert_rejects!(chain, nameless, ValidationError::EmptyFirstName);
    assert_accepts!(chain, vasya());
}

#[test]
fn test_capability_handler_standalone() {
    let handler_chain = ChainBuilder::new()
        .then(LocationHandler::from_check(StaticCapability::disabled()))
        .build();
    assert_rejects!(handler_chain, vasya(), ValidationError::LocationDisabled);
}

#[test]
fn test_news_mediation_round_trip() {
    let news = vec![NewsItem::new(1, "News1", 1), NewsItem::new(2, "News2", 2)];
    let mediator = Arc::new(ScreenMediator::new());
    let feed = NewsFeedScreen::new(&mediator, news.clone());
    let detail = NewsDetailScreen::new(news[0].clone());
    let profile = ProfileScreen::new(3);
    mediator.subscribe(&feed);
    mediator.subscribe(&detail);
    mediator.subscribe(&profile);

    let liked = feed.like_all();
    assert_eq!((liked.events, liked.delivered), (2, 6));
    assert_eq!(
        feed.news().iter().map(|n| n.likes_count).collect::<Vec<_>>(),
        vec![2, 3]
    );
    assert_eq!(detail.news().likes_count, 2);
    assert_eq!(profile.given_likes(), 5);

    feed.dislike_all();
    assert_eq!(
        feed.news().iter().map(|n| n.likes_count).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert_eq!(detail.news().likes_count, 1);
    assert_eq!(profile.given_likes(), 3);
}

#[test]
fn test_dropped_screen_leaves_mediator() {
    let mediator = Arc::new(ScreenMediator::new());
    let feed = NewsFeedScreen::new(&mediator, vec![NewsItem::new(1, "News1", 0)]);
    let profile = ProfileScreen::new(0);
    mediator.subscribe(&feed);
    mediator.subscribe(&profile);
    assert_eq!(mediator.len(), 2);

    drop(profile);
    let report = feed.like_all();
    assert_eq!(report.delivered, 1);
    assert_eq!(mediator.len(), 1);
    assert_eq!(feed.likes_of(1), Some(1));
}
