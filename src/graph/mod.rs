//! Wiring graph: registry of nodes and the dependency resolver
//!
//! A node is one unit of the wiring graph, corresponding to one generated
//! field/accessor. Explicit nodes are registered by the caller before
//! resolution begins; implicit nodes are created on demand when no existing
//! node satisfies a dependency.
//!
//! ## Module Organization
//!
//! - `node.rs` - [`Node`], [`Parameter`], [`SetterDependency`], [`ConstructorCall`]
//! - `registry.rs` - [`Registry`]: node arena, registration order, type index
//! - `resolver.rs` - [`Resolver`]: one resolution pass over a registry
//! - `error.rs` - [`ResolveError`]

pub mod error;
pub mod node;
pub mod registry;
pub mod resolver;

pub use error::ResolveError;
pub use node::{ConstructorCall, Initialization, Node, NodeId, Parameter, SetterDependency};
pub use registry::Registry;
pub use resolver::Resolver;
