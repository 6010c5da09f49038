use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Slugifies with the `slug` crate: transliterates to ASCII, lowercases, and
/// collapses every non-alphanumeric run into a single hyphen.
#[derive(Debug, Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}
