//! Structured container model
//!
//! [`ContainerModel`] is the declaration/statement record form of one
//! generated container: field declarations, one constructor, and one
//! accessor per emitted field. Building the model makes every ordering,
//! naming, and import decision; rendering it is pure text layout. Tests
//! assert on the model where ordering matters and on the text where layout
//! matters.

use std::collections::HashSet;

use thiserror::Error;

use crate::graph::{Initialization, NodeId, Registry};
use crate::meta::{TypeDescriptor, TypeProvider};

use super::config::{EmitConfig, WiringMode};

/// Error during container model construction.
#[derive(Debug, Error)]
pub enum EmitError {
    /// A post-construction hook must take no arguments.
    #[error("post-construction method {method} on {ty} must have no arguments")]
    PostConstructArity { ty: String, method: String },
}

/// One storage field of the generated container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub java_type: String,
    pub name: String,
    /// Parameter-backed fields are assigned exactly once, in the
    /// constructor, and are declared `final`.
    pub is_final: bool,
}

/// One generated constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtorParam {
    pub java_type: String,
    pub name: String,
    /// Required parameters carry the configured not-null annotation.
    pub not_null: bool,
}

/// One constructor body statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CtorStmt {
    /// `this.<field> = <expr>;`
    AssignField { field: String, expr: String },
    /// `<java_type> <name> = <expr>;` — internal components without storage
    /// fields live in constructor locals.
    DeclareLocal { java_type: String, name: String, expr: String },
    /// `<receiver>.<method>(<args>);`
    Invoke {
        receiver: String,
        method: String,
        args: Vec<String>,
    },
}

/// One setter invocation inside a lazy accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetterCall {
    pub method: String,
    /// Argument expression; always the dependency's own accessor call so
    /// nested laziness composes.
    pub arg: String,
}

/// First-access memoization recipe of a lazy accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyInit {
    pub expr: String,
    pub setters: Vec<SetterCall>,
}

/// One accessor method of the generated container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    pub public: bool,
    pub java_type: String,
    pub method: String,
    pub field: String,
    /// Present for lazy-mode accessors of non-parameter nodes.
    pub lazy: Option<LazyInit>,
}

/// The complete structured form of one generated container source file.
#[derive(Debug, Clone)]
pub struct ContainerModel {
    pub package: String,
    pub class_name: String,
    /// License header text, verbatim; may be empty.
    pub header: String,
    pub generated_by: String,
    /// Deduplicated imports in first-occurrence order.
    pub imports: Vec<String>,
    /// Whether the class declares the lock object for synchronized lazy
    /// accessors.
    pub lock_field: bool,
    pub fields: Vec<FieldDecl>,
    pub ctor_params: Vec<CtorParam>,
    /// Constructor body as statement groups; groups are separated by blank
    /// lines in the rendered output.
    pub ctor_body: Vec<Vec<CtorStmt>>,
    pub accessors: Vec<Accessor>,
}

impl ContainerModel {
    /// Build the model from a fully resolved registry.
    ///
    /// All iteration is over registration order or explicitly sorted keys,
    /// never hash order: the same registry and metadata always produce the
    /// same model.
    pub fn build<P: TypeProvider + ?Sized>(
        registry: &Registry,
        provider: &P,
        config: &EmitConfig,
        package: &str,
        class_name: &str,
        header: String,
    ) -> Result<Self, EmitError> {
        let lazy = config.mode == WiringMode::Lazy;

        let imports = collect_imports(registry, package, config);
        let fields = field_decls(registry, lazy);
        let ctor_params = ctor_params(registry);
        let ctor_body = if lazy {
            lazy_ctor_body(registry)
        } else {
            eager_ctor_body(registry, provider)?
        };
        let accessors = accessors(registry, lazy);
        let lock_field = lazy && config.synchronized_lazy && accessors.iter().any(|a| a.lazy.is_some());

        Ok(Self {
            package: package.to_string(),
            class_name: class_name.to_string(),
            header,
            generated_by: config.generated_by.clone(),
            imports,
            lock_field,
            fields,
            ctor_params,
            ctor_body,
            accessors,
        })
    }
}

/// Deduplicated imports in first-occurrence order: field types in
/// registration order (generic arguments recursively), then parameter types,
/// then the not-null annotation if any parameter is required. Primitives,
/// the implicitly imported package, and the container's own package are
/// skipped.
fn collect_imports(registry: &Registry, own_package: &str, config: &EmitConfig) -> Vec<String> {
    let mut imports = Vec::new();
    let mut seen = HashSet::new();
    for &id in registry.fields() {
        collect_type_imports(&registry.node(id).descriptor, own_package, &mut imports, &mut seen);
    }
    for parameter in registry.parameters() {
        collect_type_imports(&parameter.descriptor, own_package, &mut imports, &mut seen);
    }
    if registry.parameters().iter().any(|p| p.required) {
        let annotation = TypeDescriptor::new(config.not_null_annotation.clone());
        collect_type_imports(&annotation, own_package, &mut imports, &mut seen);
    }
    imports
}

fn collect_type_imports(ty: &TypeDescriptor, own_package: &str, imports: &mut Vec<String>, seen: &mut HashSet<String>) {
    let package = ty.package();
    let importable =
        !ty.is_primitive() && !package.is_empty() && package != crate::meta::IMPLICIT_PACKAGE && package != own_package;
    if importable && seen.insert(ty.name().to_string()) {
        imports.push(ty.name().to_string());
    }
    for param in ty.params() {
        collect_type_imports(param, own_package, imports, seen);
    }
}

/// Storage field declarations: every node in lazy mode, public nodes only in
/// eager mode.
fn field_decls(registry: &Registry, lazy: bool) -> Vec<FieldDecl> {
    registry
        .fields()
        .iter()
        .map(|&id| registry.node(id))
        .filter(|node| lazy || node.public)
        .map(|node| FieldDecl {
            java_type: node.descriptor.simple_text(),
            name: node.name.clone(),
            is_final: node.backs_parameter.is_some(),
        })
        .collect()
}

fn ctor_params(registry: &Registry) -> Vec<CtorParam> {
    registry
        .parameters()
        .iter()
        .map(|p| CtorParam {
            java_type: p.descriptor.simple_text(),
            name: p.name.clone(),
            not_null: p.required,
        })
        .collect()
}

/// Lazy constructors only remember the caller-supplied parameters.
fn lazy_ctor_body(registry: &Registry) -> Vec<Vec<CtorStmt>> {
    let stores: Vec<CtorStmt> = registry
        .parameters()
        .iter()
        .map(|p| CtorStmt::AssignField {
            field: registry.node(p.node).name.clone(),
            expr: p.name.clone(),
        })
        .collect();
    if stores.is_empty() { Vec::new() } else { vec![stores] }
}

/// Eager constructor body: initialization statements (dependencies first,
/// otherwise registration order), then setter invocations in node-then-edge
/// order, then post-construction hooks in node registration order.
fn eager_ctor_body<P: TypeProvider + ?Sized>(
    registry: &Registry,
    provider: &P,
) -> Result<Vec<Vec<CtorStmt>>, EmitError> {
    let mut groups = Vec::new();

    let mut inits = Vec::new();
    let mut emitted = HashSet::new();
    for &id in registry.fields() {
        push_init(registry, id, &mut emitted, &mut inits);
    }
    if !inits.is_empty() {
        groups.push(inits);
    }

    for &id in registry.fields() {
        let node = registry.node(id);
        if node.setters.is_empty() {
            continue;
        }
        let receiver = if node.public {
            format!("this.{}", node.name)
        } else {
            node.name.clone()
        };
        let calls = node
            .setters
            .iter()
            .map(|s| CtorStmt::Invoke {
                receiver: receiver.clone(),
                method: s.setter.clone(),
                args: vec![registry.node(s.dependency).name.clone()],
            })
            .collect::<Vec<_>>();
        groups.push(calls);
    }

    for &id in registry.fields() {
        let node = registry.node(id);
        let Some(class) = provider.class(node.descriptor.name()) else {
            continue;
        };
        let mut hooks: Vec<&crate::meta::MethodMeta> = class.methods.iter().filter(|m| m.post_construct).collect();
        hooks.sort_by(|a, b| a.name.cmp(&b.name));
        let mut calls = Vec::new();
        for hook in hooks {
            if !hook.params.is_empty() {
                return Err(EmitError::PostConstructArity {
                    ty: node.descriptor.to_string(),
                    method: hook.name.clone(),
                });
            }
            calls.push(CtorStmt::Invoke {
                receiver: node.name.clone(),
                method: hook.name.clone(),
                args: Vec::new(),
            });
        }
        if !calls.is_empty() {
            groups.push(calls);
        }
    }

    Ok(groups)
}

/// Emit the initialization statement for `id`, after the statements for its
/// constructor arguments. Keeps registration order among independent nodes
/// while guaranteeing definition-before-use for implicit dependencies.
fn push_init(registry: &Registry, id: NodeId, emitted: &mut HashSet<NodeId>, stmts: &mut Vec<CtorStmt>) {
    if !emitted.insert(id) {
        return;
    }
    let node = registry.node(id);
    match &node.init {
        Some(Initialization::Parameter(_)) => {
            // Internal parameter-backed nodes have no storage field; the
            // constructor argument itself is referenced by name.
            if node.public {
                stmts.push(CtorStmt::AssignField {
                    field: node.name.clone(),
                    expr: node.name.clone(),
                });
            }
        }
        Some(Initialization::Constructor(call)) => {
            for &arg in &call.args {
                push_init(registry, arg, emitted, stmts);
            }
            let args = call
                .args
                .iter()
                .map(|&arg| registry.node(arg).name.clone())
                .collect::<Vec<_>>()
                .join(", ");
            let expr = format!("new {}({})", node.descriptor.simple_text(), args);
            stmts.push(init_stmt(node, expr));
        }
        Some(Initialization::Given(text)) => {
            stmts.push(init_stmt(node, text.clone()));
        }
        // The resolver guarantees an initialization for every non-parameter
        // node it visits.
        None => {}
    }
}

fn init_stmt(node: &crate::graph::Node, expr: String) -> CtorStmt {
    if node.public {
        CtorStmt::AssignField {
            field: node.name.clone(),
            expr,
        }
    } else {
        CtorStmt::DeclareLocal {
            java_type: node.descriptor.simple_text(),
            name: node.name.clone(),
            expr,
        }
    }
}

/// Accessors: public nodes only in eager mode; every node in lazy mode, with
/// first-access memoization for non-parameter nodes.
fn accessors(registry: &Registry, lazy: bool) -> Vec<Accessor> {
    let mut accessors = Vec::new();
    for &id in registry.fields() {
        let node = registry.node(id);
        if !lazy && !node.public {
            continue;
        }
        let lazy_init = if lazy && node.backs_parameter.is_none() {
            node.init.as_ref().map(|init| LazyInit {
                expr: lazy_expr(registry, node, init),
                setters: node
                    .setters
                    .iter()
                    .map(|s| SetterCall {
                        method: s.setter.clone(),
                        arg: format!("{}()", registry.node(s.dependency).getter_name()),
                    })
                    .collect(),
            })
        } else {
            None
        };
        accessors.push(Accessor {
            public: node.public,
            java_type: node.descriptor.simple_text(),
            method: node.getter_name(),
            field: node.name.clone(),
            lazy: lazy_init,
        });
    }
    accessors
}

/// Lazy initialization expression: constructor arguments go through the
/// dependency's accessor so nested laziness composes.
fn lazy_expr(registry: &Registry, node: &crate::graph::Node, init: &Initialization) -> String {
    match init {
        Initialization::Constructor(call) => {
            let args = call
                .args
                .iter()
                .map(|&arg| format!("{}()", registry.node(arg).getter_name()))
                .collect::<Vec<_>>()
                .join(", ");
            format!("new {}({})", node.descriptor.simple_text(), args)
        }
        Initialization::Given(text) => text.clone(),
        // Parameter-backed nodes never memoize; unreachable by construction.
        Initialization::Parameter(_) => node.name.clone(),
    }
}
