// tests/support/mocks.rs
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use slug_sync::application::ApplicationResult;
use slug_sync::application::ports::host::{FieldHost, SiblingChanges};
use slug_sync::application::ports::util::SlugGenerator;
use slug_sync::domain::entry::EntrySys;
use slug_sync::infrastructure::InMemoryFieldHost;
use slug_sync::SlugSyncWidget;

/// Lowercases segments and remembers every segment it was asked to slugify.
#[derive(Default)]
pub struct RecordingSlug {
    seen: Mutex<Vec<String>>,
}

impl RecordingSlug {
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl SlugGenerator for RecordingSlug {
    fn slugify(&self, s: &str) -> String {
        self.seen.lock().unwrap().push(s.to_string());
        s.trim().to_lowercase().replace(' ', "")
    }
}

/// Delegates to an [`InMemoryFieldHost`] but unmounts the registered widget
/// the first time the entry metadata is read, i.e. while a timer is firing.
pub struct UnmountingHost {
    inner: Arc<InMemoryFieldHost>,
    widget: Mutex<Option<Arc<SlugSyncWidget>>>,
}

impl UnmountingHost {
    pub fn new(inner: Arc<InMemoryFieldHost>) -> Self {
        Self {
            inner,
            widget: Mutex::new(None),
        }
    }

    pub fn unmount_on_fire(&self, widget: Arc<SlugSyncWidget>) {
        *self.widget.lock().unwrap() = Some(widget);
    }
}

#[async_trait]
impl FieldHost for UnmountingHost {
    fn field_id(&self) -> String {
        self.inner.field_id()
    }

    fn value(&self) -> Option<String> {
        self.inner.value()
    }

    async fn set_value(&self, value: &str) -> ApplicationResult<()> {
        self.inner.set_value(value).await
    }

    async fn remove_value(&self) -> ApplicationResult<()> {
        self.inner.remove_value().await
    }

    fn sibling_value(&self, field: &str, locale: &str) -> Option<String> {
        self.inner.sibling_value(field, locale)
    }

    fn watch_sibling(&self, field: &str, locale: &str) -> SiblingChanges {
        self.inner.watch_sibling(field, locale)
    }

    fn entry_sys(&self) -> EntrySys {
        let widget = self.widget.lock().unwrap().take();
        if let Some(widget) = widget {
            widget.unmount();
        }
        self.inner.entry_sys()
    }

    fn start_auto_resizer(&self) {
        self.inner.start_auto_resizer();
    }
}
