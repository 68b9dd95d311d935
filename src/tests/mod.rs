//! Integration cases for the image availability cache.
//!
//! These walk the cache through the load-lifecycle sequences the gallery
//! UI produces: retry storms, list refreshes over confirmed images,
//! TTL expiry and manual resets.


pub mod support;
