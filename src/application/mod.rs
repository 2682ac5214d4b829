//! Application layer: catalog use-cases orchestrating the repositories

pub mod catalog;

pub use catalog::{AlbumService, SongService};
