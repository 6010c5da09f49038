// src/application/widget/mod.rs
//! The slug field widget: mirrors the entry title into the slug field after a
//! quiet period unless the entry has been published, and normalizes anything
//! typed into the field directly.

mod reactor;

pub use reactor::{Reactor, ReactorPhase};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::application::ports::{FieldHostPort, SlugGeneratorPort};
use crate::application::{ApplicationError, ApplicationResult};
use crate::config::WidgetConfig;
use crate::domain::slug::compose_slug;
use crate::presentation::field::FieldView;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

struct Shared {
    host: Arc<FieldHostPort>,
    slugger: Arc<SlugGeneratorPort>,
    config: WidgetConfig,
    field_id: String,
    value: Mutex<String>,
    reactor: Mutex<Reactor>,
}

impl Shared {
    fn schedule(self: &Arc<Self>) {
        let quiet_period = self.config.debounce();
        let mut reactor = lock(&self.reactor);
        let armed = reactor.arm(|generation| {
            let shared = Arc::clone(self);
            tokio::spawn(async move {
                tokio::time::sleep(quiet_period).await;
                shared.fire(generation).await;
            })
        });
        if armed {
            debug!(field_id = %self.field_id, ?quiet_period, "debounce timer armed");
        }
    }

    async fn fire(&self, generation: u64) {
        if !lock(&self.reactor).fire(generation) {
            return;
        }

        let sys = self.host.entry_sys();
        if sys.is_locked() {
            debug!(field_id = %self.field_id, state = %sys.state(), "entry published; slug left untouched");
            return;
        }

        let title = self
            .host
            .sibling_value(self.config.title_field(), self.config.title_locale())
            .unwrap_or_default();

        match self.commit(&title).await {
            Ok(_) => {}
            Err(ApplicationError::Detached) => {
                debug!(field_id = %self.field_id, "unmounted before commit; slug left untouched");
            }
            Err(err) => {
                error!(field_id = %self.field_id, error = %err, "failed to sync slug from title");
            }
        }
    }

    fn ensure_attached(&self) -> ApplicationResult<()> {
        if lock(&self.reactor).is_detached() {
            Err(ApplicationError::Detached)
        } else {
            Ok(())
        }
    }

    /// Write the slug for `text` to the host, then to local state. Nothing is
    /// written once the reactor is detached.
    async fn commit(&self, text: &str) -> ApplicationResult<String> {
        let slug = compose_slug(self.slugger.as_ref(), text)?;
        self.ensure_attached()?;
        let committed = match slug {
            Some(slug) => {
                self.host.set_value(slug.as_str()).await?;
                String::from(slug)
            }
            None => {
                self.host.remove_value().await?;
                String::new()
            }
        };

        self.ensure_attached()?;
        info!(field_id = %self.field_id, slug = %committed, "slug committed");
        *lock(&self.value) = committed.clone();
        Ok(committed)
    }
}

/// A mounted slug field bound to a [`FieldHost`](crate::application::ports::host::FieldHost).
///
/// Mounting must happen inside a tokio runtime: the title subscription and the
/// debounce timer run as spawned tasks. Dropping the widget unmounts it.
pub struct SlugSyncWidget {
    shared: Arc<Shared>,
    listener: Mutex<Option<JoinHandle<()>>>,
}

impl SlugSyncWidget {
    pub fn mount(
        host: Arc<FieldHostPort>,
        slugger: Arc<SlugGeneratorPort>,
        config: WidgetConfig,
    ) -> Self {
        host.start_auto_resizer();

        let field_id = host.field_id();
        let value = host.value().unwrap_or_default();
        let mut changes = host.watch_sibling(config.title_field(), config.title_locale());

        let shared = Arc::new(Shared {
            host,
            slugger,
            config,
            field_id,
            value: Mutex::new(value),
            reactor: Mutex::new(Reactor::new()),
        });

        let listener = {
            let shared = Arc::clone(&shared);
            tokio::spawn(async move {
                while changes.changed().await {
                    shared.schedule();
                }
                debug!(field_id = %shared.field_id, "title subscription closed by host");
            })
        };

        debug!(field_id = %shared.field_id, "slug widget mounted");
        Self {
            shared,
            listener: Mutex::new(Some(listener)),
        }
    }

    pub fn field_id(&self) -> &str {
        &self.shared.field_id
    }

    /// The slug currently shown in the input.
    pub fn value(&self) -> String {
        lock(&self.shared.value).clone()
    }

    pub fn phase(&self) -> ReactorPhase {
        lock(&self.shared.reactor).phase()
    }

    pub fn is_locked(&self) -> bool {
        self.shared.host.entry_sys().is_locked()
    }

    /// React to a title change pushed by the host outside the subscription.
    pub fn title_changed(&self) {
        self.shared.schedule();
    }

    /// Handle text typed straight into the slug input. Skips both the
    /// debounce and the publish lock.
    pub async fn input(&self, text: &str) -> ApplicationResult<String> {
        self.shared.commit(text).await
    }

    pub fn view(&self) -> FieldView {
        FieldView::new(self.field_id(), self.value())
    }

    /// Cancel pending work and detach from the host. Safe to call repeatedly.
    pub fn unmount(&self) {
        let was_attached = lock(&self.shared.reactor).detach();
        if let Some(listener) = lock(&self.listener).take() {
            listener.abort();
        }
        if was_attached {
            debug!(field_id = %self.shared.field_id, "slug widget unmounted");
        }
    }
}

impl Drop for SlugSyncWidget {
    fn drop(&mut self) {
        self.unmount();
    }
}
