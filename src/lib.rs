//! Article Params Library
//!
//! This library provides the article settings panel and the terminal article
//! reader around it: the option catalog, the draft/committed editing
//! protocol, outside-click dismissal, configuration, and logging setup.

// Module declarations
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod shortcuts;
pub mod tui;
