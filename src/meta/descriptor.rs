//! Nominal type descriptors
//!
//! A [`TypeDescriptor`] identifies a type the wiring graph can talk about: a
//! qualified nominal name plus an ordered list of generic arguments (each a
//! descriptor itself). Assignability is evaluated against a
//! [`TypeProvider`](super::TypeProvider), which supplies the supertype
//! relation between the underlying nominal names.

use super::provider::TypeProvider;

/// Java primitive type names. These never carry a package and can never be
/// auto-constructed by the resolver.
const PRIMITIVES: &[&str] = &[
    "boolean", "byte", "short", "int", "long", "char", "float", "double", "void",
];

/// A nominal type plus its generic arguments.
///
/// The underlying name is fully qualified (`com.acme.Engine`); primitives and
/// unqualified names have an empty [`package`](TypeDescriptor::package).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    name: String,
    params: Vec<TypeDescriptor>,
}

impl TypeDescriptor {
    /// Create a descriptor for a non-generic type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Create a descriptor with generic arguments.
    pub fn generic(name: impl Into<String>, params: Vec<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// The qualified nominal name, without generic arguments.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The generic arguments, in declaration order.
    pub fn params(&self) -> &[TypeDescriptor] {
        &self.params
    }

    /// The name after the last `.` (the whole name when unqualified).
    pub fn simple_name(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) => &self.name[idx + 1..],
            None => &self.name,
        }
    }

    /// The package prefix, empty for unqualified names and primitives.
    pub fn package(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) => &self.name[..idx],
            None => "",
        }
    }

    /// Whether this is a primitive type of the target language.
    pub fn is_primitive(&self) -> bool {
        self.params.is_empty() && PRIMITIVES.contains(&self.name.as_str())
    }

    /// Whether this type must always be supplied by the caller: primitives
    /// and types from the implicitly imported package.
    pub fn is_builtin(&self) -> bool {
        self.is_primitive() || self.package() == super::IMPLICIT_PACKAGE
    }

    /// Assignability test used for dependency matching.
    ///
    /// `target.is_assignable_from(candidate)` holds when the underlying names
    /// are compatible (identity or supertype relation, per the provider) and
    /// each corresponding generic argument is assignable. Arity mismatches
    /// are never assignable.
    pub fn is_assignable_from<P: TypeProvider + ?Sized>(&self, candidate: &TypeDescriptor, provider: &P) -> bool {
        if !provider.is_subtype(&candidate.name, &self.name) {
            return false;
        }
        if self.params.len() != candidate.params.len() {
            return false;
        }
        self.params
            .iter()
            .zip(&candidate.params)
            .all(|(target, cand)| target.is_assignable_from(cand, provider))
    }

    /// Rendered type text with simple names, e.g. `Map<String, Engine>`.
    pub fn simple_text(&self) -> String {
        if self.params.is_empty() {
            return self.simple_name().to_string();
        }
        let params = self
            .params
            .iter()
            .map(TypeDescriptor::simple_text)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}<{}>", self.simple_name(), params)
    }

    /// Variable name derived deterministically from the type: decapitalized
    /// simple name, with an `Of<P1><P2>...` suffix when generic (each
    /// argument name derived recursively and capitalized).
    pub fn var_name(&self) -> String {
        let mut name = decapitalize(self.simple_name());
        if !self.params.is_empty() {
            name.push_str("Of");
            for param in &self.params {
                name.push_str(&capitalize(&param.var_name()));
            }
        }
        name
    }
}

impl std::fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.params.is_empty() {
            let params = self.params.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
            write!(f, "<{}>", params)?;
        }
        Ok(())
    }
}

/// Lowercase the first character, unless the first two characters are both
/// uppercase (so acronym-led names like `URL` keep their capitalization).
pub(crate) fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    if let Some(second) = chars.next() {
        if first.is_uppercase() && second.is_uppercase() {
            return name.to_string();
        }
    }
    first.to_lowercase().chain(name.chars().skip(1)).collect()
}

/// Uppercase the first character.
pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
