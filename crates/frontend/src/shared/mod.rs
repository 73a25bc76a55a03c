pub mod api_utils;
pub mod config;
pub mod error;
pub mod format;
pub mod icons;
pub mod modal;
pub mod notice;
