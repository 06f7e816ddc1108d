/**
 * authflow demo entry point
 *
 * Runs the login and signup validation flows and the news-feed like
 * mediation, logging every step.
 */

#[cfg(feature = "demo")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use authflow::chain::{login_chain, signup_chain, Capabilities};
    use authflow::notifier::{NewsDetailScreen, NewsFeedScreen, ProfileScreen, ScreenMediator};
    use authflow::shared::{ChainConfig, LikeEvent, NewsItem, Request};
    use std::sync::Arc;

    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    // The catalog scenario runs with notifications switched off
    let scenario = ChainConfig::builder().notifications_enabled(false).build()?;
    let config = ChainConfig::load_with(scenario)?;
    let capabilities = Capabilities::from_config(&config);

    tracing::info!("Client: Let's test Login flow!");
    let login = login_chain(&capabilities);
    let request = Request::login("smth@gmail.com", "123HardPass");
    match login.handle(&request) {
        Some(error) => tracing::warn!("Login: Error -> {}", error),
        None => tracing::info!("Login: Preconditions are successfully validated"),
    }

    tracing::info!("Client: Let's test SignUp flow!");
    let signup = signup_chain(&config, &capabilities);
    let request = Request::sign_up(
        "Vasya",
        "Pupkin",
        "vasya.pupkin@gmail.com",
        "123HardPass",
        "123HardPass",
    );
    match signup.handle(&request) {
        Some(error) => tracing::warn!("SignUp: Error -> {}", error),
        None => tracing::info!("SignUp: Preconditions are successfully validated"),
    }

    // Any node can be entered directly; the sub-chain skips everything before it.
    let mut node = signup.head();
    while let Some(entry) = node {
        let outcome = entry
            .handle(&request)
            .map_or_else(|| "ok".to_string(), |error| error.kind().to_string());
        tracing::info!("SignUp: sub-chain from {} -> {}", entry.name(), outcome);
        node = entry.next();
    }

    tracing::info!("Client: Let's test news feed mediation!");
    let news = vec![NewsItem::new(1, "News1", 1), NewsItem::new(2, "News2", 2)];
    let given_likes: i64 = news.iter().map(|item| item.likes_count).sum();

    let mediator = Arc::new(ScreenMediator::new());
    let feed = NewsFeedScreen::new(&mediator, news.clone());
    let detail = NewsDetailScreen::new(news[0].clone());
    let profile = ProfileScreen::new(given_likes);
    mediator.subscribe(&feed);
    mediator.subscribe(&detail);
    mediator.subscribe(&profile);

    let preview = LikeEvent::LikeAdded(news[0].clone());
    tracing::debug!("Sample event: {}", serde_json::to_string(&preview)?);

    let liked = feed.like_all();
    tracing::info!(
        "Liked all: {} events, {} deliveries, {} failures; profile has given {} likes",
        liked.events,
        liked.delivered,
        liked.failures.len(),
        profile.given_likes()
    );
    let disliked = feed.dislike_all();
    tracing::info!(
        "Disliked all: {} events, {} deliveries, {} failures; profile has given {} likes",
        disliked.events,
        disliked.delivered,
        disliked.failures.len(),
        profile.given_likes()
    );
    tracing::info!("Feed now shows: {}", serde_json::to_string(&feed.news())?);
    tracing::info!("Detail now shows: {}", serde_json::to_string(&detail.news())?);

    Ok(())
}

#[cfg(not(feature = "demo"))]
fn main() {
    eprintln!("The demo requires the 'demo' feature to be enabled.");
    eprintln!("Run with: cargo run --bin authflow-demo --features demo");
    std::process::exit(1);
}
