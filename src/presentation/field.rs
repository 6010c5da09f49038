// src/presentation/field.rs
use serde::Serialize;

pub const SLUG_ARIA_LABEL: &str = "Slug";

pub const SLUG_FIELD_NOTE: &str = "This field is not unique. It determines the slug of the \
attached page or segment for child items. When this is saved, it auto updates the slug \
reference all attached pages and descendants that have pages.";

/// Render model for the slug input and its help note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    pub id: String,
    pub value: String,
    pub aria_label: &'static str,
    pub required: bool,
    pub note: &'static str,
}

impl FieldView {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            aria_label: SLUG_ARIA_LABEL,
            required: true,
            note: SLUG_FIELD_NOTE,
        }
    }
}
