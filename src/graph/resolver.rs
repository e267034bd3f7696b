//! Dependency resolver
//!
//! Walks from each explicitly registered node, discovering its construction
//! strategy (constructor call, given expression, or pre-supplied parameter)
//! and its setter dependencies, creating implicit nodes on demand, and
//! failing on ambiguity or unsatisfiable requirements.
//!
//! One `Resolver` is one resolution pass: it owns the visited set and the
//! resolution chain, and is consumed by [`Resolver::run`]. Nothing about the
//! pass lives in ambient state, so a registry can be resolved and inspected
//! in isolation.
//!
//! A node reachable a second time is skipped by the visited-set guard. This
//! also short-circuits genuine cycles (A needs B needs A): resolution
//! terminates and the node closing the cycle keeps whatever wiring it had at
//! that point, matching the long-standing behavior of the generated
//! containers this replaces.

use std::collections::HashSet;

use tracing::debug;

use crate::meta::{ClassKind, TypeDescriptor, TypeProvider};

use super::error::ResolveError;
use super::node::{ConstructorCall, Initialization, NodeId, SetterDependency};
use super::registry::Registry;

/// A single resolution pass over a [`Registry`].
pub struct Resolver<'a, P: TypeProvider + ?Sized> {
    provider: &'a P,
    registry: &'a mut Registry,
    visited: HashSet<NodeId>,
    /// Human-readable stack of the nodes currently being resolved, rendered
    /// into every error.
    chain: Vec<String>,
}

impl<'a, P: TypeProvider + ?Sized> Resolver<'a, P> {
    pub fn new(provider: &'a P, registry: &'a mut Registry) -> Self {
        Self {
            provider,
            registry,
            visited: HashSet::new(),
            chain: Vec::new(),
        }
    }

    /// Resolve every explicitly registered node, in registration order.
    ///
    /// On success every non-parameter node has an initialization strategy and
    /// a deterministic setter-dependency list. On failure the registry may
    /// contain partially resolved state and must not be emitted.
    #[tracing::instrument(skip_all)]
    pub fn run(mut self) -> Result<(), ResolveError> {
        let roots: Vec<NodeId> = self.registry.fields().to_vec();
        for id in roots {
            self.satisfy(id)?;
        }
        Ok(())
    }

    fn satisfy(&mut self, id: NodeId) -> Result<(), ResolveError> {
        if !self.visited.insert(id) {
            return Ok(());
        }
        let node = self.registry.node(id);
        if node.backs_parameter.is_some() {
            // Caller-supplied leaf; its dependencies are never computed.
            return Ok(());
        }
        self.chain.push(format!("{} ({})", node.descriptor, node.name));
        if self.registry.node(id).init.is_none() {
            self.init_by_constructor(id)?;
        }
        self.wire_setters(id)?;
        self.chain.pop();
        Ok(())
    }

    /// Choose a constructor for `id` and resolve one argument node per
    /// constructor parameter. Overload choice is positional: the first
    /// declared constructor is the one used.
    fn init_by_constructor(&mut self, id: NodeId) -> Result<(), ResolveError> {
        let descriptor = self.registry.node(id).descriptor.clone();
        let class = self
            .provider
            .class(descriptor.name())
            .ok_or_else(|| ResolveError::MissingMetadata {
                ty: descriptor.to_string(),
                context: self.path(),
            })?;
        match class.kind {
            ClassKind::Interface => {
                return Err(ResolveError::Uninstantiable {
                    kind: "interface",
                    ty: descriptor.to_string(),
                    context: self.path(),
                });
            }
            ClassKind::AbstractClass => {
                return Err(ResolveError::Uninstantiable {
                    kind: "abstract class",
                    ty: descriptor.to_string(),
                    context: self.path(),
                });
            }
            ClassKind::Class => {}
        }

        let Some(constructor) = class.constructors.first() else {
            return Err(ResolveError::NoUsableConstructor {
                ty: descriptor.to_string(),
                context: self.path(),
            });
        };
        if !constructor.public {
            return Err(ResolveError::NoUsableConstructor {
                ty: descriptor.to_string(),
                context: self.path(),
            });
        }

        let param_types = constructor.params.clone();
        let mut args = Vec::with_capacity(param_types.len());
        for (index, param_type) in param_types.iter().enumerate() {
            let requirer = format!("constructor parameter {index} of {descriptor}");
            let dependency = self.find_or_create(param_type, &requirer)?;
            args.push(dependency);
        }
        self.registry.node_mut(id).init = Some(Initialization::Constructor(ConstructorCall { args }));
        Ok(())
    }

    /// Resolve a dependency node for every setter-injectable method of `id`,
    /// in method-name order (source declaration order is not stable, sorted
    /// names are).
    fn wire_setters(&mut self, id: NodeId) -> Result<(), ResolveError> {
        let descriptor = self.registry.node(id).descriptor.clone();
        let class = self
            .provider
            .class(descriptor.name())
            .ok_or_else(|| ResolveError::MissingMetadata {
                ty: descriptor.to_string(),
                context: self.path(),
            })?;

        let mut setters: Vec<(String, TypeDescriptor)> = class
            .methods
            .iter()
            .filter(|m| m.setter_inject && m.name.starts_with("set") && m.params.len() == 1)
            .map(|m| (m.name.clone(), m.params[0].clone()))
            .collect();
        setters.sort_by(|a, b| a.0.cmp(&b.0));

        for (setter, param_type) in setters {
            let requirer = format!("setter {setter} on {descriptor}");
            let dependency = self.find_or_create(&param_type, &requirer)?;
            self.registry
                .node_mut(id)
                .setters
                .push(SetterDependency { setter, dependency });
        }
        Ok(())
    }

    /// Find the single registered node satisfying `requested`, or create an
    /// implicit one when none exists.
    fn find_or_create(&mut self, requested: &TypeDescriptor, requirer: &str) -> Result<NodeId, ResolveError> {
        let candidates = self.registry.candidates_for(requested, self.provider);
        match candidates.as_slice() {
            [] => {
                if requested.is_builtin() {
                    return Err(ResolveError::Unsatisfiable {
                        requested: requested.to_string(),
                        context: format!("{requirer}; {}", self.path()),
                    });
                }
                debug!(ty = %requested, requirer, "create implicit node");
                let id = self.registry.add_field_with(false, requested.clone(), None, None);
                self.satisfy(id)?;
                Ok(id)
            }
            [single] => Ok(*single),
            many => Err(ResolveError::Ambiguous {
                requested: requested.to_string(),
                candidates: many
                    .iter()
                    .map(|&id| {
                        let node = self.registry.node(id);
                        format!("{}: {}", node.name, node.descriptor)
                    })
                    .collect(),
                context: format!("{requirer}; {}", self.path()),
            }),
        }
    }

    fn path(&self) -> String {
        if self.chain.is_empty() {
            "at registration root".to_string()
        } else {
            format!("resolution path: {}", self.chain.join(" -> "))
        }
    }
}
