//! Domain entities - the core business objects.

mod sample;

pub use sample::Sample;
