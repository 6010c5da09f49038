// tests/support/builders.rs
use std::sync::Arc;
use std::time::Duration;

use slug_sync::application::ports::{FieldHostPort, SlugGeneratorPort};
use slug_sync::config::WidgetConfig;
use slug_sync::infrastructure::{DefaultSlugGenerator, InMemoryFieldHost};
use slug_sync::SlugSyncWidget;

pub const TITLE: &str = "title";
pub const LOCALE: &str = "en-US";

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Mount a widget with default config and the `slug`-crate generator.
pub fn mount(host: InMemoryFieldHost) -> (Arc<InMemoryFieldHost>, SlugSyncWidget) {
    mount_with(host, Arc::new(DefaultSlugGenerator), WidgetConfig::default())
}

pub fn mount_with(
    host: InMemoryFieldHost,
    slugger: Arc<SlugGeneratorPort>,
    config: WidgetConfig,
) -> (Arc<InMemoryFieldHost>, SlugSyncWidget) {
    let host = Arc::new(host);
    let port: Arc<FieldHostPort> = host.clone();
    let widget = SlugSyncWidget::mount(port, slugger, config);
    (host, widget)
}

/// Let the quiet period elapse and the timer task finish.
pub async fn settle() {
    tokio::time::sleep(ms(1_000)).await;
}
