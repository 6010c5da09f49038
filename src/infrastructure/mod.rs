pub mod host;
pub mod util;

pub use host::InMemoryFieldHost;
pub use util::DefaultSlugGenerator;
