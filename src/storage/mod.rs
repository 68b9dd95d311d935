// Image availability cache storage.

pub mod cache;
mod eviction;


// Re-export main types
pub use cache::{Cache, ImageCache};
