//! Read models for CQRS-lite pattern
//!
//! View-optimized structs handed to the formatters.

pub mod graph_read_model;
pub mod graph_read_model_builder;

pub use graph_read_model::{GraphReadModel, NodeView};
pub use graph_read_model_builder::GraphReadModelBuilder;
