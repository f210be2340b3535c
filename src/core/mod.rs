//! Core logic of the landing page: server configuration and the motion engine

#[cfg(feature = "ssr")]
pub mod config;
pub mod motion;
