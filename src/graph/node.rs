//! Wiring graph node definitions

use crate::meta::TypeDescriptor;

/// Index of a node in its [`Registry`](super::Registry) arena.
///
/// Nodes reference each other by id rather than by ownership: constructor
/// arguments and setter edges can then share a dependency node without
/// duplicating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// How a node's value is produced.
#[derive(Debug, Clone)]
pub enum Initialization {
    /// Stored directly from a caller-supplied constructor parameter. The
    /// index points into the registry's parameter list.
    Parameter(usize),
    /// Constructed by calling the type's chosen constructor.
    Constructor(ConstructorCall),
    /// A verbatim initialization expression supplied at registration, e.g.
    /// `TraceFactory.EMPTY`. Skips constructor selection but still receives
    /// setter injection.
    Given(String),
}

/// The chosen constructor plus one resolved argument node per parameter, in
/// declaration order.
#[derive(Debug, Clone)]
pub struct ConstructorCall {
    pub args: Vec<NodeId>,
}

/// A directed edge: the owning node must receive `dependency` through
/// `setter` after construction.
#[derive(Debug, Clone)]
pub struct SetterDependency {
    pub setter: String,
    pub dependency: NodeId,
}

/// One unit of the wiring graph: one generated field/accessor.
#[derive(Debug, Clone)]
pub struct Node {
    pub descriptor: TypeDescriptor,
    pub name: String,
    /// Public nodes get a public accessor on the generated container;
    /// internal nodes exist only to wire others.
    pub public: bool,
    /// Unset until the resolver (or the caller, for given expressions and
    /// parameters) decides how the value is produced.
    pub init: Option<Initialization>,
    /// Setter edges in deterministic (setter-name-sorted) order.
    pub setters: Vec<SetterDependency>,
    /// Present when this node is backed by a caller-supplied parameter.
    /// Parameter-backed nodes are graph leaves: they are never resolved
    /// further.
    pub backs_parameter: Option<usize>,
}

impl Node {
    pub(crate) fn new(descriptor: TypeDescriptor, name: String, public: bool) -> Self {
        Self {
            descriptor,
            name,
            public,
            init: None,
            setters: Vec::new(),
            backs_parameter: None,
        }
    }

    /// Accessor method name for this node, e.g. `getEngine`.
    pub fn getter_name(&self) -> String {
        format!("get{}", crate::meta::descriptor::capitalize(&self.name))
    }
}

/// A caller-supplied input to the generated container's constructor.
#[derive(Debug, Clone)]
pub struct Parameter {
    pub descriptor: TypeDescriptor,
    pub name: String,
    /// Required parameters carry a not-null contract in the generated
    /// constructor signature.
    pub required: bool,
    /// The node this parameter backs.
    pub node: NodeId,
}
