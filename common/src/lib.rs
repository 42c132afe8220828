//! Shared core of the inventory dashboard: wire models, the REST client and
//! the view-state machines the frontend components are built on.

pub mod api;
pub mod config;
pub mod model;
pub mod view;
