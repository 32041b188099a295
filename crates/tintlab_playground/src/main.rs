//! Headless playground demonstration
//!
//! Simulates a color-wheel drag against a manual clock, then prints the
//! projected stylesheet and the persisted snapshot.

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tintlab_playground::{PlaygroundConfig, PlaygroundSession};
use tintlab_preview::ManualClock;
use tintlab_store::{InMemoryRemote, LocalCache, PersistenceGateway};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = PlaygroundConfig {
        debounce_ms: 100,
        cache_path: Some(std::env::temp_dir().join("tintlab-demo").join("themes.json")),
        ..PlaygroundConfig::default()
    };

    let remote = Arc::new(InMemoryRemote::new());
    let gateway = PersistenceGateway::new(
        LocalCache::new(config.resolve_cache_path()?),
        Arc::clone(&remote),
    );

    let clock = ManualClock::new();
    let mut session = PlaygroundSession::new(&config, gateway, clock.clone(), None);

    // A drag across the color wheel: dozens of proposals, one commit
    tracing::info!("simulating a drag on the primary color wheel");
    for step in 0..30u32 {
        let value = format!("rgb({}, 40, {})", 40 + step * 7, 240 - step * 7);
        session.propose("primaryColor", &value);
        clock.advance(Duration::from_millis(8));
        session.tick();
    }

    // A couple of setting tweaks while we are here
    session.propose("cornerRadius", "12");
    session.propose("hoverEffect", "lift");

    // The user lets go; the debounce settles everything
    clock.advance(Duration::from_millis(150));
    session.tick();

    // Let the fire-and-forget remote write land
    tokio::task::yield_now().await;

    println!("--- projected stylesheet ---");
    println!("{}", session.stylesheet());
    println!("--- persistence ---");
    println!("remote documents: {}", remote.len());
    println!(
        "displayed primaryColor: {}",
        session.displayed_value("primaryColor").unwrap_or("<none>")
    );

    Ok(())
}
