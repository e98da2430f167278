//! Madlibs — word-list driven story templates.
//!
//! Loads named word lists, reads story templates containing `<key>`
//! placeholders, and fills each placeholder with a random word from the
//! matching list.

pub mod config;
pub mod core;
pub mod session;
