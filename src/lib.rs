//! casebook - browse customer case studies in the terminal
//!
//! The library exposes the TUI building blocks (components, actions, view
//! state) plus the HTTP server that serves the case-study catalog. The two
//! binaries, `casebook` and `casebook-server`, are thin shells over it.

pub mod action;
pub mod app;
pub mod component;
pub mod components;
pub mod config;
pub mod model;
pub mod server;
pub mod services;
pub mod tui;
