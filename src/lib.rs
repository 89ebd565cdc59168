//! Radio Site Library
//!
//! Content loaders, views and routes for the radio show site. Exposed as a
//! library for the binary and for integration testing.

pub mod config;
pub mod error;
pub mod handlers;
pub mod loaders;
pub mod models;
pub mod services;
pub mod state;
pub mod templates;
pub mod test_utils;
pub mod utils;
