//! End-to-end tests for the container generator

use std::fs;

use wiregen::{
    ClassMeta, ContainerGenerator, EmitConfig, GeneratorConfig, GeneratorError, Initialization, MemoryTypeProvider,
    MethodMeta, ResolveError, TypeDescriptor, WiringMode,
};

fn ty(name: &str) -> TypeDescriptor {
    TypeDescriptor::new(name)
}

/// Metadata for the Engine/Car pair used across scenarios: `Engine` has a
/// public no-arg constructor, `Car`'s sole constructor takes one `Engine`.
fn engine_car_provider() -> MemoryTypeProvider {
    let mut provider = MemoryTypeProvider::new();
    provider.insert(ClassMeta::class("com.acme.Engine").with_public_constructor(vec![]));
    provider.insert(ClassMeta::class("com.acme.Car").with_public_constructor(vec![ty("com.acme.Engine")]));
    provider
}

fn lazy_config() -> GeneratorConfig {
    GeneratorConfig::new().with_emit(EmitConfig::new().with_mode(WiringMode::Lazy))
}

// ============================================================================
// Wiring scenarios
// ============================================================================

#[test]
fn test_explicit_engine_and_car_eager() {
    let mut generator = ContainerGenerator::new(engine_car_provider());
    generator.add_public_field(ty("com.acme.Engine"));
    generator.add_public_field(ty("com.acme.Car"));
    let source = generator.generate_to_string("com.acme.app", "CarContainer").unwrap();

    // One field per component, Engine constructed before Car, Car receives
    // the Engine instance.
    assert!(source.contains("private Engine engine;"), "source was:\n{source}");
    assert!(source.contains("private Car car;"), "source was:\n{source}");
    let engine_init = source.find("this.engine = new Engine();").expect("engine init");
    let car_init = source.find("this.car = new Car(engine);").expect("car init");
    assert!(engine_init < car_init, "engine must be initialized before car:\n{source}");
}

#[test]
fn test_implicit_engine_created_automatically() {
    let mut generator = ContainerGenerator::new(engine_car_provider());
    generator.add_public_field(ty("com.acme.Car"));
    let source = generator.generate_to_string("com.acme.app", "CarContainer").unwrap();

    let engine_init = source.find("Engine engine = new Engine();").expect("implicit engine init");
    let car_init = source.find("this.car = new Car(engine);").expect("car init");
    assert!(engine_init < car_init, "engine must be initialized before car:\n{source}");
}

#[test]
fn test_builtin_dependency_fails_naming_both_types() {
    let mut provider = MemoryTypeProvider::new();
    provider.insert(ClassMeta::class("com.acme.Car").with_public_constructor(vec![ty("int")]));
    let mut generator = ContainerGenerator::new(provider);
    generator.add_public_field(ty("com.acme.Car"));
    let err = generator.generate_to_string("com.acme.app", "CarContainer").unwrap_err();

    let GeneratorError::Resolve(resolve) = &err else {
        panic!("expected resolution failure, got {err}");
    };
    assert!(matches!(resolve, ResolveError::Unsatisfiable { .. }));
    let message = err.to_string();
    assert!(message.contains("int"), "message was: {message}");
    assert!(message.contains("com.acme.Car"), "message was: {message}");
}

#[test]
fn test_ambiguous_dependency_fails_listing_candidates() {
    let mut generator = ContainerGenerator::new(engine_car_provider());
    generator.add_field(ty("com.acme.Engine"));
    generator.add_field_with(false, ty("com.acme.Engine"), Some("spare".into()), None);
    generator.add_public_field(ty("com.acme.Car"));
    let err = generator.generate_to_string("com.acme.app", "CarContainer").unwrap_err();

    let message = err.to_string();
    assert!(message.contains("engine"), "message was: {message}");
    assert!(message.contains("spare"), "message was: {message}");
}

#[test]
fn test_parameter_order_is_registration_order() {
    let mut provider = MemoryTypeProvider::new();
    for name in ["com.acme.P1", "com.acme.P2", "com.acme.P3"] {
        provider.insert(ClassMeta::class(name));
    }
    let mut generator = ContainerGenerator::new(provider);
    generator.add_parameter(ty("com.acme.P1"), true);
    generator.add_parameter(ty("com.acme.P2"), true);
    generator.add_parameter(ty("com.acme.P3"), true);
    let source = generator.generate_to_string("com.acme.app", "Params").unwrap();

    let p1 = source.find("P1 p1,").expect("p1");
    let p2 = source.find("P2 p2,").expect("p2");
    let p3 = source.find("P3 p3\n").expect("p3");
    assert!(p1 < p2 && p2 < p3, "parameters out of order:\n{source}");
}

#[test]
fn test_setter_invocations_sorted_by_name() {
    let mut provider = MemoryTypeProvider::new();
    provider.insert(ClassMeta::class("com.acme.A").with_public_constructor(vec![]));
    provider.insert(ClassMeta::class("com.acme.B").with_public_constructor(vec![]));
    provider.insert(ClassMeta::class("com.acme.C").with_public_constructor(vec![]));
    provider.insert(
        ClassMeta::class("com.acme.Hub")
            .with_public_constructor(vec![])
            .with_method(MethodMeta::inject_setter("setB", ty("com.acme.B")))
            .with_method(MethodMeta::inject_setter("setA", ty("com.acme.A")))
            .with_method(MethodMeta::inject_setter("setC", ty("com.acme.C"))),
    );
    let mut generator = ContainerGenerator::new(provider);
    generator.add_public_field(ty("com.acme.Hub"));
    let source = generator.generate_to_string("com.acme.app", "HubContainer").unwrap();

    let a = source.find("this.hub.setA(a);").expect("setA");
    let b = source.find("this.hub.setB(b);").expect("setB");
    let c = source.find("this.hub.setC(c);").expect("setC");
    assert!(a < b && b < c, "setter calls out of order:\n{source}");
}

#[test]
fn test_post_construct_called_after_setters() {
    let mut provider = MemoryTypeProvider::new();
    provider.insert(ClassMeta::class("com.acme.Clock").with_public_constructor(vec![]));
    provider.insert(
        ClassMeta::class("com.acme.Hub")
            .with_public_constructor(vec![])
            .with_method(MethodMeta::inject_setter("setClock", ty("com.acme.Clock")))
            .with_method(MethodMeta::post_construct("start")),
    );
    let mut generator = ContainerGenerator::new(provider);
    generator.add_public_field(ty("com.acme.Hub"));
    let source = generator.generate_to_string("com.acme.app", "HubContainer").unwrap();

    let setter = source.find("this.hub.setClock(clock);").expect("setter");
    let hook = source.find("hub.start();").expect("post-construct hook");
    assert!(setter < hook, "hook must run after setters:\n{source}");
}

#[test]
fn test_lazy_mode_memoizes_on_first_access() {
    let mut generator = ContainerGenerator::with_config(engine_car_provider(), lazy_config());
    generator.add_public_field(ty("com.acme.Car"));
    let source = generator.generate_to_string("com.acme.app", "CarContainer").unwrap();

    assert!(source.contains("if (this.car == null) {"), "source was:\n{source}");
    assert!(source.contains("this.car = new Car(getEngine());"), "source was:\n{source}");
    assert!(source.contains("private Engine getEngine() {"), "source was:\n{source}");
    // Plain lazy accessors carry no locking.
    assert!(!source.contains("synchronized"), "source was:\n{source}");
}

#[test]
fn test_given_expression_initializes_field_verbatim() {
    let mut provider = MemoryTypeProvider::new();
    provider.insert(ClassMeta::class("com.acme.Clock").with_public_constructor(vec![]));
    provider.insert(
        ClassMeta::interface("com.acme.Trace")
            .with_method(MethodMeta::inject_setter("setClock", ty("com.acme.Clock"))),
    );
    let mut generator = ContainerGenerator::new(provider);
    generator.add_field_with(
        true,
        ty("com.acme.Trace"),
        None,
        Some(Initialization::Given("TraceFactory.EMPTY".into())),
    );
    let source = generator.generate_to_string("com.acme.app", "TraceContainer").unwrap();

    // The expression is emitted as written; the interface is never
    // constructed, but it still receives setter injection.
    assert!(source.contains("this.trace = TraceFactory.EMPTY;"), "source was:\n{source}");
    assert!(source.contains("this.trace.setClock(clock);"), "source was:\n{source}");
}

#[test]
fn test_given_expression_in_lazy_accessor() {
    let mut provider = MemoryTypeProvider::new();
    provider.insert(ClassMeta::interface("com.acme.Trace"));
    let mut generator = ContainerGenerator::with_config(provider, lazy_config());
    generator.add_field_with(
        true,
        ty("com.acme.Trace"),
        None,
        Some(Initialization::Given("TraceFactory.EMPTY".into())),
    );
    let source = generator.generate_to_string("com.acme.app", "TraceContainer").unwrap();

    assert!(source.contains("if (this.trace == null) {"), "source was:\n{source}");
    assert!(source.contains("this.trace = TraceFactory.EMPTY;"), "source was:\n{source}");
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_generation_is_byte_identical_across_runs() {
    let build = || {
        let mut generator = ContainerGenerator::new(engine_car_provider());
        generator.add_parameter(ty("com.acme.Engine"), true);
        generator.add_public_field(ty("com.acme.Car"));
        generator.generate_to_string("com.acme.app", "CarContainer").unwrap()
    };
    assert_eq!(build(), build());
}

#[test]
fn test_repeated_generation_from_one_generator_is_stable() {
    let mut generator = ContainerGenerator::new(engine_car_provider());
    generator.add_public_field(ty("com.acme.Car"));
    let first = generator.generate_to_string("com.acme.app", "CarContainer").unwrap();
    let second = generator.generate_to_string("com.acme.app", "CarContainer").unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// File output
// ============================================================================

#[test]
fn test_generate_writes_file_and_creates_directories() {
    let root = tempfile::tempdir().unwrap();
    let mut generator = ContainerGenerator::new(engine_car_provider());
    generator.add_public_field(ty("com.acme.Car"));
    let path = generator.generate(root.path(), "com.acme.app", "CarContainer").unwrap();

    assert_eq!(path, root.path().join("com/acme/app/CarContainer.java"));
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("public class CarContainer {"));
    // No temporary file left behind.
    assert!(!root.path().join("com/acme/app/CarContainer.java.tmp").exists());
}

#[test]
fn test_license_header_is_prepended() {
    let root = tempfile::tempdir().unwrap();
    let header = root.path().join("copyright.txt");
    fs::write(&header, "/* Copyright 2026 Acme */\n").unwrap();

    let config = GeneratorConfig::new().with_header_path(&header);
    let mut generator = ContainerGenerator::with_config(engine_car_provider(), config);
    generator.add_public_field(ty("com.acme.Car"));
    let path = generator.generate(root.path(), "com.acme.app", "CarContainer").unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("/* Copyright 2026 Acme */\n"), "written was:\n{written}");
}

#[test]
fn test_resolution_failure_leaves_previous_file_untouched() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("com/acme/app");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("CarContainer.java");
    fs::write(&path, "previous version").unwrap();

    let mut provider = MemoryTypeProvider::new();
    provider.insert(ClassMeta::class("com.acme.Car").with_public_constructor(vec![ty("int")]));
    let mut generator = ContainerGenerator::new(provider);
    generator.add_public_field(ty("com.acme.Car"));
    let err = generator.generate(root.path(), "com.acme.app", "CarContainer").unwrap_err();
    assert!(matches!(err, GeneratorError::Resolve(_)));

    assert_eq!(fs::read_to_string(&path).unwrap(), "previous version");
    assert!(!dir.join("CarContainer.java.tmp").exists());
}

#[test]
fn test_failed_rename_leaves_final_path_unchanged() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("com/acme/app");
    // Occupy the final path with a non-empty directory so the rename step
    // fails after the temporary file has been fully written.
    let final_path = dir.join("CarContainer.java");
    fs::create_dir_all(&final_path).unwrap();
    fs::write(final_path.join("sentinel"), "keep").unwrap();

    let mut generator = ContainerGenerator::new(engine_car_provider());
    generator.add_public_field(ty("com.acme.Car"));
    let err = generator.generate(root.path(), "com.acme.app", "CarContainer").unwrap_err();
    assert!(matches!(err, GeneratorError::Rename { .. }), "got: {err}");

    // The temporary file was written, the final path is untouched.
    assert!(dir.join("CarContainer.java.tmp").exists());
    assert_eq!(fs::read_to_string(final_path.join("sentinel")).unwrap(), "keep");
}

#[test]
fn test_generated_file_matches_in_memory_rendering() {
    let root = tempfile::tempdir().unwrap();

    let mut generator = ContainerGenerator::new(engine_car_provider());
    generator.add_public_field(ty("com.acme.Car"));
    let expected = generator.generate_to_string("com.acme.app", "CarContainer").unwrap();

    let mut generator = ContainerGenerator::new(engine_car_provider());
    generator.add_public_field(ty("com.acme.Car"));
    let path = generator.generate(root.path(), "com.acme.app", "CarContainer").unwrap();

    assert_eq!(fs::read_to_string(path).unwrap(), expected);
}
