//! Data models for article display settings.
//!
//! This module contains the option catalog, the settings record shared
//! between the application shell and the settings panel, and the article text.
//! Models are independent of UI and terminal handling.

pub mod article;
pub mod article_state;
pub mod catalog;
pub mod rgb;
pub mod setting_option;

// Re-export all model types
pub use article::Article;
pub use article_state::{ArticleState, SettingField};
pub use rgb::RgbColor;
pub use setting_option::SettingOption;
