//! Database entities module

pub mod album;
pub mod song;

pub use album::Entity as Album;
pub use song::Entity as Song;
