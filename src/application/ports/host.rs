// src/application/ports/host.rs
use crate::application::ApplicationResult;
use crate::domain::entry::EntrySys;
use async_trait::async_trait;
use tokio::sync::mpsc;

/// The editor environment a slug field is embedded in.
///
/// Reads are synchronous snapshots of host state. Writes may cross an async
/// boundary and are only considered committed once the returned future resolves.
#[async_trait]
pub trait FieldHost: Send + Sync {
    /// Stable identifier of the slug field, used as the input id.
    fn field_id(&self) -> String;

    /// Current stored slug, if any.
    fn value(&self) -> Option<String>;

    async fn set_value(&self, value: &str) -> ApplicationResult<()>;

    async fn remove_value(&self) -> ApplicationResult<()>;

    /// Current value of a sibling field in the given locale.
    fn sibling_value(&self, field: &str, locale: &str) -> Option<String>;

    /// Subscribe to changes of a sibling field. Dropping the returned
    /// receiver unsubscribes.
    fn watch_sibling(&self, field: &str, locale: &str) -> SiblingChanges;

    fn entry_sys(&self) -> EntrySys;

    /// Ask the host to keep its embedding surface sized to the widget.
    fn start_auto_resizer(&self);
}

/// Host side of a sibling-field subscription.
#[derive(Debug, Clone)]
pub struct SiblingNotifier {
    tx: mpsc::UnboundedSender<()>,
}

impl SiblingNotifier {
    /// Returns false once the subscriber has gone away.
    pub fn notify(&self) -> bool {
        self.tx.send(()).is_ok()
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Widget side of a sibling-field subscription.
#[derive(Debug)]
pub struct SiblingChanges {
    rx: mpsc::UnboundedReceiver<()>,
}

impl SiblingChanges {
    pub fn channel() -> (SiblingNotifier, SiblingChanges) {
        let (tx, rx) = mpsc::unbounded_channel();
        (SiblingNotifier { tx }, SiblingChanges { rx })
    }

    /// Wait for the next change. Returns false when the host closed the subscription.
    pub async fn changed(&mut self) -> bool {
        self.rx.recv().await.is_some()
    }
}
