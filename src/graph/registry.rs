//! Node registry: arena, registration order, type index
//!
//! Registration order is a correctness requirement, not an implementation
//! detail: field declaration order, constructor statement order, and accessor
//! order in the generated source all derive from it. The type index is an
//! insertion-ordered multi-valued map for the same reason — candidate lookup
//! must never depend on hash order.

use tracing::debug;

use crate::meta::TypeDescriptor;

use super::node::{Initialization, Node, NodeId, Parameter};

/// The set of nodes in the wiring graph, plus the caller-supplied parameters.
#[derive(Debug, Default)]
pub struct Registry {
    nodes: Vec<Node>,
    /// Node ids in registration order. Implicit nodes are appended as the
    /// resolver creates them.
    fields: Vec<NodeId>,
    /// Caller-supplied inputs in registration order; this order becomes the
    /// generated constructor's parameter order.
    parameters: Vec<Parameter>,
    /// Insertion-ordered multi-valued type index: a type may have 0, 1, or
    /// many candidate nodes.
    type_index: Vec<(TypeDescriptor, NodeId)>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an internal node backed by a new constructor parameter.
    pub fn add_parameter(&mut self, descriptor: TypeDescriptor, required: bool) -> NodeId {
        self.add_parameter_node(false, descriptor, required)
    }

    /// Register a public node backed by a new constructor parameter.
    pub fn add_public_parameter(&mut self, descriptor: TypeDescriptor, required: bool) -> NodeId {
        self.add_parameter_node(true, descriptor, required)
    }

    fn add_parameter_node(&mut self, public: bool, descriptor: TypeDescriptor, required: bool) -> NodeId {
        let id = self.add_field_with(public, descriptor.clone(), None, None);
        let index = self.parameters.len();
        let name = self.nodes[id.0].name.clone();
        self.parameters.push(Parameter {
            descriptor,
            name,
            required,
            node: id,
        });
        let node = &mut self.nodes[id.0];
        node.init = Some(Initialization::Parameter(index));
        node.backs_parameter = Some(index);
        id
    }

    /// Register an internal component node.
    pub fn add_field(&mut self, descriptor: TypeDescriptor) -> NodeId {
        self.add_field_with(false, descriptor, None, None)
    }

    /// Register a public component node.
    pub fn add_public_field(&mut self, descriptor: TypeDescriptor) -> NodeId {
        self.add_field_with(true, descriptor, None, None)
    }

    /// Register a node, optionally pre-supplying its name and initialization
    /// strategy. The default name is derived deterministically from the type.
    pub fn add_field_with(
        &mut self,
        public: bool,
        descriptor: TypeDescriptor,
        name: Option<String>,
        init: Option<Initialization>,
    ) -> NodeId {
        let name = name.unwrap_or_else(|| descriptor.var_name());
        debug!(ty = %descriptor, name = %name, public, "register node");
        let id = NodeId(self.nodes.len());
        let mut node = Node::new(descriptor.clone(), name, public);
        node.init = init;
        self.nodes.push(node);
        self.fields.push(id);
        self.type_index.push((descriptor, id));
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Node ids in registration order.
    pub fn fields(&self) -> &[NodeId] {
        &self.fields
    }

    /// Caller-supplied parameters in registration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// All candidate nodes whose type satisfies `requested`, in insertion
    /// order.
    pub fn candidates_for<P: crate::meta::TypeProvider + ?Sized>(
        &self,
        requested: &TypeDescriptor,
        provider: &P,
    ) -> Vec<NodeId> {
        self.type_index
            .iter()
            .filter(|(ty, _)| requested.is_assignable_from(ty, provider))
            .map(|&(_, id)| id)
            .collect()
    }
}
