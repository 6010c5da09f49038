//! Title-to-slug field widget for CMS entry editors.
//!
//! [`SlugSyncWidget`] watches the entry title through a [`FieldHost`], waits
//! for a quiet period, and writes a normalized slug back unless the entry has
//! already been published.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::ports::host::FieldHost;
pub use application::widget::SlugSyncWidget;
pub use config::WidgetConfig;
