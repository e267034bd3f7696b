//! Resolution error types
//!
//! Every resolution failure is fatal and immediate: the generator never
//! attempts partial generation or best-effort output. Messages carry the
//! requesting context and the resolution chain that led to the failure, so
//! the caller can fix the registration or the metadata and rerun.

use thiserror::Error;

/// Error during wiring-graph resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Two or more registered nodes satisfy one requested type.
    #[error("ambiguous dependency on {requested}: candidates are {}; {context}", .candidates.join(", "))]
    Ambiguous {
        requested: String,
        /// Every candidate, as `name: type`.
        candidates: Vec<String>,
        context: String,
    },

    /// Zero candidates for a primitive/built-in type. Such types can never be
    /// auto-constructed and must be supplied as explicit parameters.
    #[error("cannot create implicit node for built-in type {requested}; declare it as a parameter; {context}")]
    Unsatisfiable { requested: String, context: String },

    /// The requested type is an interface or an abstract class and no
    /// explicit node was registered for it.
    #[error("cannot instantiate {kind} {ty}; {context}")]
    Uninstantiable {
        kind: &'static str,
        ty: String,
        context: String,
    },

    /// The target type has no declared constructor, or its first declared
    /// constructor is not public.
    #[error("no usable public constructor on {ty}; {context}")]
    NoUsableConstructor { ty: String, context: String },

    /// The provider has no metadata entry for a type the graph needs.
    #[error("no type metadata for {ty}; {context}")]
    MissingMetadata { ty: String, context: String },
}
