//! Process-wide caches.

pub mod views;
