// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Slugify a single hyphen-free segment.
    fn slugify(&self, input: &str) -> String;
}
