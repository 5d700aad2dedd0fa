//! # Corkboard Feed Demo
//!
//! A scripted headless session against the in-memory store: attach the
//! feed, create a post, edit it, delete it with confirmation, and
//! render the feed between steps.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use corkboard_core::domain::{CurrentUser, PostDraft};
use corkboard_core::ports::PostStore;
use corkboard_infra::MemoryPostStore;
use corkboard_ui::{CreatePostForm, Feed, LogAlerts, PostCard, render};

mod config;

use config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(config.json_logs);

    tracing::info!(
        signed_in = config.user.is_some(),
        "Starting corkboard feed demo"
    );

    let store: Arc<dyn PostStore> = Arc::new(MemoryPostStore::new());
    seed_posts(store.as_ref())
        .await
        .context("seeding the feed failed")?;

    let mut feed = Feed::new(Arc::clone(&store), Arc::new(LogAlerts));
    feed.attach().await.context("feed subscription failed")?;
    settle().await;

    let mut form = CreatePostForm::new();
    print_feed(&feed, &form, config.user.as_ref());

    if let Some(user) = &config.user {
        run_signed_in_session(store.as_ref(), &feed, &mut form, user).await;
    } else {
        tracing::info!("No USER_UID set; browsing signed out");
    }

    feed.detach();
    Ok(())
}

/// Create, edit, and delete one post as the signed-in user.
async fn run_signed_in_session(
    store: &dyn PostStore,
    feed: &Feed,
    form: &mut CreatePostForm,
    user: &CurrentUser,
) {
    form.set_title("Hello from the demo");
    form.set_content("A first post, soon to be edited.");
    if !form.submit(store, user).await {
        tracing::warn!(error = ?form.error(), "Create was rejected");
        print_feed(feed, form, Some(user));
        return;
    }
    settle().await;
    print_feed(feed, form, Some(user));

    let Some(post) = feed
        .posts()
        .into_iter()
        .find(|post| post.author_id == user.uid)
    else {
        return;
    };

    let mut card = PostCard::new(post.clone());
    card.begin_edit();
    if let Some(editor) = card.editor_mut() {
        editor.set_content("A first post, now edited in place.");
    }
    card.save_edit(store).await;
    settle().await;
    print_feed(feed, form, Some(user));

    let confirmed = card.confirm_delete(|post| {
        tracing::info!(title = %post.title, "Confirming delete");
        true
    });
    if confirmed {
        feed.delete_post(&post.id).await;
        settle().await;
        print_feed(feed, form, Some(user));
    }
}

async fn seed_posts(store: &dyn PostStore) -> Result<(), corkboard_core::StoreError> {
    for (title, content) in [
        ("Welcome to corkboard", "Pin anything you like here."),
        ("Second pin", "Posts arrive newest first."),
    ] {
        store
            .create(PostDraft {
                title: title.to_owned(),
                content: content.to_owned(),
                author: "Board Keeper".to_owned(),
                author_id: "u-keeper".to_owned(),
            })
            .await?;
    }
    Ok(())
}

fn print_feed(feed: &Feed, form: &CreatePostForm, viewer: Option<&CurrentUser>) {
    let cards: Vec<PostCard> = feed.posts().into_iter().map(PostCard::new).collect();
    if let Some(panel) = render::create_panel(form, viewer) {
        println!("{panel}");
    }
    println!("{}", render::feed(&cards, viewer));
}

/// Give the live query a moment to push the latest snapshot.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}

fn init_tracing(json_logs: bool) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,feed_demo=debug,corkboard_infra=debug"));

    if json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
