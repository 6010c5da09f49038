pub mod entry;
pub mod errors;
pub mod slug;

pub use self::entry::{EntrySys, PublicationState};
pub use self::slug::{FieldSlug, compose_slug};
