//! Type metadata boundary
//!
//! The resolver never inspects language-runtime reflection. Everything it
//! needs to know about a nominal type — constructors, methods, supertype
//! relations, primitiveness — comes in through the [`TypeProvider`] trait,
//! supplied by the caller.
//!
//! ## Module Organization
//!
//! - `descriptor.rs` - [`TypeDescriptor`]: nominal type + generic arguments,
//!   assignability, derived names
//! - `provider.rs` - [`TypeProvider`] trait and the metadata records
//! - `memory.rs` - [`MemoryTypeProvider`], the in-memory reference implementation

pub mod descriptor;
pub mod memory;
pub mod provider;

pub use descriptor::TypeDescriptor;
pub use memory::MemoryTypeProvider;
pub use provider::{ClassKind, ClassMeta, ConstructorMeta, MethodMeta, TypeProvider};

/// Package whose types the target language imports implicitly.
///
/// Types from this package are never imported, and the resolver refuses to
/// auto-construct them: they must always be explicit parameters.
pub const IMPLICIT_PACKAGE: &str = "java.lang";
