use crate::application::ports::host::{FieldHost, SiblingChanges, SiblingNotifier};
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::entry::EntrySys;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A write the host received for the slug field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostWrite {
    Set(String),
    Remove,
}

type SiblingKey = (String, String);

fn key(field: &str, locale: &str) -> SiblingKey {
    (field.to_string(), locale.to_string())
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Process-local host holding one entry.
///
/// Version counters only move through [`set_sys`](Self::set_sys),
/// [`publish`](Self::publish) and [`edit`](Self::edit).
#[derive(Default)]
pub struct InMemoryFieldHost {
    field_id: String,
    value: Mutex<Option<String>>,
    siblings: Mutex<HashMap<SiblingKey, String>>,
    watchers: Mutex<Vec<(SiblingKey, SiblingNotifier)>>,
    sys: Mutex<EntrySys>,
    writes: Mutex<Vec<HostWrite>>,
    auto_resizer: AtomicBool,
    fail_writes: AtomicBool,
}

impl InMemoryFieldHost {
    pub fn new(field_id: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            sys: Mutex::new(EntrySys::draft(1)),
            ..Self::default()
        }
    }

    pub fn with_value(self, value: impl Into<String>) -> Self {
        *lock(&self.value) = Some(value.into());
        self
    }

    pub fn with_sys(self, sys: EntrySys) -> Self {
        *lock(&self.sys) = sys;
        self
    }

    /// Store a sibling value and notify its subscribers.
    pub fn set_sibling(&self, field: &str, locale: &str, value: impl Into<String>) {
        lock(&self.siblings).insert(key(field, locale), value.into());
        self.notify(field, locale);
    }

    pub fn clear_sibling(&self, field: &str, locale: &str) {
        lock(&self.siblings).remove(&key(field, locale));
        self.notify(field, locale);
    }

    fn notify(&self, field: &str, locale: &str) {
        let target = key(field, locale);
        lock(&self.watchers).retain(|(watched, notifier)| {
            if *watched == target {
                notifier.notify()
            } else {
                !notifier.is_closed()
            }
        });
    }

    pub fn set_sys(&self, sys: EntrySys) {
        *lock(&self.sys) = sys;
    }

    /// Publish the current version. The entry version advances past it.
    pub fn publish(&self) -> EntrySys {
        let mut sys = lock(&self.sys);
        sys.published_version = Some(sys.version);
        sys.version += 1;
        *sys
    }

    /// Record an edit to the entry.
    pub fn edit(&self) -> EntrySys {
        let mut sys = lock(&self.sys);
        sys.version += 1;
        *sys
    }

    pub fn stored_value(&self) -> Option<String> {
        lock(&self.value).clone()
    }

    pub fn writes(&self) -> Vec<HostWrite> {
        lock(&self.writes).clone()
    }

    /// Live subscriptions across all sibling fields.
    pub fn watcher_count(&self) -> usize {
        let mut watchers = lock(&self.watchers);
        watchers.retain(|(_, notifier)| !notifier.is_closed());
        watchers.len()
    }

    pub fn auto_resizer_started(&self) -> bool {
        self.auto_resizer.load(Ordering::SeqCst)
    }

    /// Make subsequent writes fail until switched off again.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> ApplicationResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(ApplicationError::host(format!(
                "field {} rejected the write",
                self.field_id
            )))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl FieldHost for InMemoryFieldHost {
    fn field_id(&self) -> String {
        self.field_id.clone()
    }

    fn value(&self) -> Option<String> {
        self.stored_value()
    }

    async fn set_value(&self, value: &str) -> ApplicationResult<()> {
        self.check_writable()?;
        *lock(&self.value) = Some(value.to_string());
        lock(&self.writes).push(HostWrite::Set(value.to_string()));
        Ok(())
    }

    async fn remove_value(&self) -> ApplicationResult<()> {
        self.check_writable()?;
        *lock(&self.value) = None;
        lock(&self.writes).push(HostWrite::Remove);
        Ok(())
    }

    fn sibling_value(&self, field: &str, locale: &str) -> Option<String> {
        lock(&self.siblings).get(&key(field, locale)).cloned()
    }

    fn watch_sibling(&self, field: &str, locale: &str) -> SiblingChanges {
        let (notifier, changes) = SiblingChanges::channel();
        lock(&self.watchers).push((key(field, locale), notifier));
        changes
    }

    fn entry_sys(&self) -> EntrySys {
        *lock(&self.sys)
    }

    fn start_auto_resizer(&self) {
        self.auto_resizer.store(true, Ordering::SeqCst);
    }
}
