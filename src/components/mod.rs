//! Leptos components and DOM behaviors.

pub mod force_graph;
pub mod tooltip;
