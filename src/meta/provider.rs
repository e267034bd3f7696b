//! Type metadata provider boundary
//!
//! [`TypeProvider`] is the abstract capability the resolver and emitter use
//! in place of runtime reflection: per nominal type it exposes the declared
//! constructors (parameter types in declaration order), the declared methods
//! (with the setter-injection and post-construction markers), and the
//! supertype relation needed to evaluate assignability. The generator never
//! mutates this metadata.

use super::descriptor::TypeDescriptor;

/// What kind of type a [`ClassMeta`] describes.
///
/// Interfaces and abstract classes cannot be auto-constructed by the
/// resolver; they must be satisfied by an explicitly registered node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Class,
    AbstractClass,
    Interface,
}

/// A declared constructor: parameter types in declaration order.
#[derive(Debug, Clone)]
pub struct ConstructorMeta {
    pub public: bool,
    pub params: Vec<TypeDescriptor>,
}

impl ConstructorMeta {
    pub fn public(params: Vec<TypeDescriptor>) -> Self {
        Self { public: true, params }
    }

    pub fn non_public(params: Vec<TypeDescriptor>) -> Self {
        Self { public: false, params }
    }
}

/// A declared method, carrying the two markers the generator cares about:
/// setter injection and post-construction hooks.
#[derive(Debug, Clone)]
pub struct MethodMeta {
    pub name: String,
    pub params: Vec<TypeDescriptor>,
    /// Marked for setter injection. Only `set*` methods with exactly one
    /// parameter are actually wired.
    pub setter_inject: bool,
    /// Invoked with no arguments after the component is constructed and its
    /// setters have run (eager wiring only).
    pub post_construct: bool,
}

impl MethodMeta {
    pub fn new(name: impl Into<String>, params: Vec<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            params,
            setter_inject: false,
            post_construct: false,
        }
    }

    /// A single-parameter method marked for setter injection.
    pub fn inject_setter(name: impl Into<String>, param: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            params: vec![param],
            setter_inject: true,
            post_construct: false,
        }
    }

    /// A no-argument post-construction hook.
    pub fn post_construct(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            setter_inject: false,
            post_construct: true,
        }
    }
}

/// Everything the generator knows about one nominal type.
#[derive(Debug, Clone)]
pub struct ClassMeta {
    pub name: String,
    pub kind: ClassKind,
    pub primitive: bool,
    pub constructors: Vec<ConstructorMeta>,
    pub methods: Vec<MethodMeta>,
    pub supertypes: Vec<String>,
}

impl ClassMeta {
    fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            primitive: false,
            constructors: Vec::new(),
            methods: Vec::new(),
            supertypes: Vec::new(),
        }
    }

    /// A concrete class. Without an explicit constructor the type counts as
    /// having none; register one with [`with_constructor`](Self::with_constructor)
    /// (use an empty parameter list for a default constructor).
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, ClassKind::Class)
    }

    pub fn abstract_class(name: impl Into<String>) -> Self {
        Self::new(name, ClassKind::AbstractClass)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, ClassKind::Interface)
    }

    pub fn with_constructor(mut self, ctor: ConstructorMeta) -> Self {
        self.constructors.push(ctor);
        self
    }

    /// Shorthand for a public constructor taking the given parameter types.
    pub fn with_public_constructor(self, params: Vec<TypeDescriptor>) -> Self {
        self.with_constructor(ConstructorMeta::public(params))
    }

    pub fn with_method(mut self, method: MethodMeta) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_supertype(mut self, supertype: impl Into<String>) -> Self {
        self.supertypes.push(supertype.into());
        self
    }
}

/// The metadata capability the generator is generic over.
pub trait TypeProvider {
    /// Metadata for one nominal type, if known.
    fn class(&self, name: &str) -> Option<&ClassMeta>;

    /// Whether `candidate` is `target` or a (transitive) declared supertype
    /// of it. Identity must hold even for types the provider does not know.
    fn is_subtype(&self, candidate: &str, target: &str) -> bool;
}
