// src/domain/slug.rs
use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Separator the user types to split a title into independently slugified segments.
pub const SEGMENT_SEPARATOR: char = '-';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSlug(String);

impl FieldSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == SEGMENT_SEPARATOR)
        {
            return Err(DomainError::Validation(format!(
                "slug must be lowercase ascii: {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<FieldSlug> for String {
    fn from(value: FieldSlug) -> Self {
        value.0
    }
}

/// Build the slug for `text`, slugifying every hyphen-separated segment on its
/// own and joining the results back with hyphens.
///
/// Returns `Ok(None)` when there is nothing to store, in which case the field
/// must be cleared rather than written.
pub fn compose_slug(generator: &dyn SlugGenerator, text: &str) -> DomainResult<Option<FieldSlug>> {
    if text.is_empty() {
        return Ok(None);
    }

    let joined = text
        .split(SEGMENT_SEPARATOR)
        .map(|part| generator.slugify(part))
        .collect::<Vec<_>>()
        .join("-");

    if joined.is_empty() {
        Ok(None)
    } else {
        FieldSlug::new(joined).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::util::DefaultSlugGenerator;

    fn slug(text: &str) -> String {
        compose_slug(&DefaultSlugGenerator, text)
            .unwrap()
            .map(String::from)
            .unwrap_or_default()
    }

    #[test]
    fn empty_text_clears() {
        assert!(compose_slug(&DefaultSlugGenerator, "").unwrap().is_none());
    }

    #[test]
    fn punctuation_only_clears() {
        assert!(compose_slug(&DefaultSlugGenerator, "!!! ???").unwrap().is_none());
    }

    #[test]
    fn hyphen_free_titles_are_normalized() {
        for title in [
            "Hello World",
            "  Leading and trailing  ",
            "Crème Brûlée à la Carte",
            "Ünïcödé & Friends!!",
            "multiple   spaces___and...dots",
            "ALL CAPS 2024",
        ] {
            let out = slug(title);
            assert!(!out.is_empty(), "{title}");
            assert!(out.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'), "{out}");
            assert!(!out.starts_with('-') && !out.ends_with('-'), "{out}");
            assert!(!out.contains("--"), "{out}");
        }
        assert_eq!(slug("Hello World"), "hello-world");
        assert_eq!(slug("Crème Brûlée"), "creme-brulee");
        assert_eq!(slug("Ünïcödé & Friends!!"), "unicode-friends");
        assert_eq!(slug("fooBar"), "foobar");
    }

    #[test]
    fn segments_are_slugified_independently() {
        let pairs = [("Hello World", "Part Two"), ("Crème", "Brûlée"), ("a", "b c")];
        for (a, b) in pairs {
            let joined = format!("{a}-{b}");
            assert_eq!(slug(&joined), format!("{}-{}", slug(a), slug(b)));
        }
    }

    #[test]
    fn empty_segments_keep_their_separator() {
        assert_eq!(slug("news--archive"), "news--archive");
        assert_eq!(slug("Title - Subtitle"), "title-subtitle");
    }

    #[test]
    fn rejects_non_ascii_slug() {
        assert!(FieldSlug::new("Bad Slug").is_err());
        assert!(FieldSlug::new("").is_err());
        assert!(FieldSlug::new("good-slug-2").is_ok());
    }
}
