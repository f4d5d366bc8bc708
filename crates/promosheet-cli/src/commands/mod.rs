//! Command handlers. Each handler wires adapters from [`AppConfig`] and
//! reports through the [`OutputManager`].
//!
//! [`AppConfig`]: crate::config::AppConfig
//! [`OutputManager`]: crate::output::OutputManager

pub mod generate;
