//! lifedash: an interactive terminal dashboard for food inventory,
//! subscriptions, and academic deadlines.
//!
//! The dashboard keeps three in-memory collections, applies every edit
//! optimistically, and persists them in the background to a remote category
//! store identified by an opaque session token. A single-threaded event loop
//! processes one event at a time: a key press or the result of a previously
//! dispatched background task.

pub mod app;
pub mod config;
pub mod fixtures;
pub mod form;
pub mod model;
pub mod remote;
pub mod ui;
