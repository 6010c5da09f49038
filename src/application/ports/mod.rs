// src/application/ports/mod.rs
pub mod host;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type FieldHostPort = dyn host::FieldHost;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
