//! Container model → Java text
//!
//! Pure layout: every decision about what to emit and in which order was
//! already made while building the [`ContainerModel`]. Given the same model
//! and config this produces byte-identical text.

use crate::meta::TypeDescriptor;

use super::config::EmitConfig;
use super::model::{Accessor, ContainerModel, CtorStmt};
use super::writer::Writer;

/// Name of the lock object guarding synchronized lazy accessors.
const LOCK_NAME: &str = "__lock__";

/// Render a container model to Java source text.
pub fn render(model: &ContainerModel, config: &EmitConfig) -> String {
    let mut w = Writer::new(config.indent_width);

    if !model.header.is_empty() {
        w.writeln(model.header.trim_end());
        w.newline();
    }

    w.writeln(&format!("package {};", model.package));
    w.newline();

    if !model.imports.is_empty() {
        for import in &model.imports {
            w.writeln(&format!("import {};", import));
        }
        w.newline();
    }

    w.writeln(&format!("/* This file is generated by {}. DO NOT EDIT! */", model.generated_by));
    w.writeln(&format!("public class {} {{", model.class_name));
    w.indent();
    w.newline();

    if model.lock_field {
        w.writeln(&format!("private static final Object {} = new Object();", LOCK_NAME));
        w.newline();
    }

    if !model.fields.is_empty() {
        for field in &model.fields {
            let final_kw = if field.is_final { "final " } else { "" };
            w.writeln(&format!("private {}{} {};", final_kw, field.java_type, field.name));
        }
        w.newline();
    }

    render_constructor(&mut w, model, config);

    for accessor in &model.accessors {
        w.newline();
        render_accessor(&mut w, accessor, config);
    }

    w.dedent();
    w.writeln("}");
    w.finish()
}

fn render_constructor(w: &mut Writer, model: &ContainerModel, config: &EmitConfig) {
    if model.ctor_params.is_empty() {
        w.writeln(&format!("public {}() {{", model.class_name));
    } else {
        let annotation = TypeDescriptor::new(config.not_null_annotation.clone());
        w.writeln(&format!("public {}(", model.class_name));
        w.indent();
        let last = model.ctor_params.len() - 1;
        for (index, param) in model.ctor_params.iter().enumerate() {
            let not_null = if param.not_null {
                format!("@{} ", annotation.simple_name())
            } else {
                String::new()
            };
            let comma = if index < last { "," } else { "" };
            w.writeln(&format!("{}{} {}{}", not_null, param.java_type, param.name, comma));
        }
        w.dedent();
        w.writeln(") {");
    }

    w.indent();
    for (index, group) in model.ctor_body.iter().enumerate() {
        if index > 0 {
            w.newline();
        }
        for stmt in group {
            render_stmt(w, stmt);
        }
    }
    w.dedent();
    w.writeln("}");
}

fn render_stmt(w: &mut Writer, stmt: &CtorStmt) {
    match stmt {
        CtorStmt::AssignField { field, expr } => {
            w.writeln(&format!("this.{} = {};", field, expr));
        }
        CtorStmt::DeclareLocal { java_type, name, expr } => {
            w.writeln(&format!("{} {} = {};", java_type, name, expr));
        }
        CtorStmt::Invoke { receiver, method, args } => {
            w.writeln(&format!("{}.{}({});", receiver, method, args.join(", ")));
        }
    }
}

fn render_accessor(w: &mut Writer, accessor: &Accessor, config: &EmitConfig) {
    let visibility = if accessor.public { "public" } else { "private" };
    w.writeln(&format!("{} {} {}() {{", visibility, accessor.java_type, accessor.method));
    w.indent();

    if let Some(lazy) = &accessor.lazy {
        let guard = format!("if (this.{} == null) {{", accessor.field);
        if config.synchronized_lazy {
            // Double-checked locking: outer check, lock, inner check.
            w.writeln(&guard);
            w.indent();
            w.writeln(&format!("synchronized ({}) {{", LOCK_NAME));
            w.indent();
            w.writeln(&guard);
            w.indent();
            render_lazy_body(w, accessor, lazy);
            w.dedent();
            w.writeln("}");
            w.dedent();
            w.writeln("}");
            w.dedent();
            w.writeln("}");
        } else {
            w.writeln(&guard);
            w.indent();
            render_lazy_body(w, accessor, lazy);
            w.dedent();
            w.writeln("}");
        }
    }

    w.writeln(&format!("return this.{};", accessor.field));
    w.dedent();
    w.writeln("}");
}

fn render_lazy_body(w: &mut Writer, accessor: &Accessor, lazy: &super::model::LazyInit) {
    w.writeln(&format!("this.{} = {};", accessor.field, lazy.expr));
    for setter in &lazy.setters {
        w.writeln(&format!("this.{}.{}({});", accessor.field, setter.method, setter.arg));
    }
}
