//! Source emission
//!
//! Turns a fully resolved wiring graph into generated Java source. Emission
//! is split in two stages so output correctness can be asserted structurally
//! in tests, not just by string diff:
//!
//! 1. [`ContainerModel::build`] - all ordering, naming, and import decisions;
//!    fallible (post-construction hooks are validated here).
//! 2. [`render`] - pure model → text, via the indentation-tracking writer.
//!
//! ## Module Organization
//!
//! - `config.rs` - [`EmitConfig`], [`WiringMode`]
//! - `model.rs` - structured container model built from a resolved registry
//! - `render.rs` - model → Java text
//! - `writer.rs` - output writer with indentation tracking

pub mod config;
pub mod model;
pub mod render;
pub mod writer;

pub use config::{EmitConfig, WiringMode};
pub use model::{Accessor, ContainerModel, CtorParam, CtorStmt, EmitError, FieldDecl, LazyInit, SetterCall};
pub use render::render;
pub use writer::Writer;
