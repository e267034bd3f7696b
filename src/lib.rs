#![forbid(unsafe_code)]
//! Dependency-injection container source generator
//!
//! wiregen takes a declared set of component types and their relationships,
//! resolves a complete wiring graph (which concrete type satisfies which
//! dependency, via constructor or setter injection), and emits the source of
//! a single generated container class that instantiates and wires every
//! component — eagerly at construction time or lazily on first access.
//!
//! Everything is resolved statically, once, at generation time: there is no
//! runtime container, no scopes, no proxies in the output. Type metadata
//! comes in through the [`meta::TypeProvider`] boundary, so the resolver
//! never touches runtime reflection.
//!
//! ## Pipeline
//!
//! ```text
//! registration → Resolver (wiring graph) → ContainerModel → Java source
//! ```
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **Generated code**: the emitter writes Java text; nothing in that text is
//!   executed by this crate.

pub mod emit;
pub mod generator;
pub mod graph;
pub mod meta;

pub use emit::{ContainerModel, EmitConfig, WiringMode};
pub use generator::{ContainerGenerator, GeneratorConfig, GeneratorError};
pub use graph::{Initialization, NodeId, Registry, ResolveError, Resolver};
pub use meta::{ClassKind, ClassMeta, ConstructorMeta, MemoryTypeProvider, MethodMeta, TypeDescriptor, TypeProvider};
