//! Generator orchestrator
//!
//! [`ContainerGenerator`] ties the pieces together: it owns the registration
//! API, runs the resolver to completion, builds and renders the container
//! model, and performs the atomic file write. Resolution happens fully
//! before emission begins; any failure aborts the run before any output file
//! is touched, so a reader only ever observes the previous complete file or
//! the new complete file.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::emit::{ContainerModel, EmitConfig, EmitError, render};
use crate::graph::{Initialization, NodeId, Registry, ResolveError, Resolver};
use crate::meta::{TypeDescriptor, TypeProvider};

/// Error during container generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to rename {} to {}: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

/// Generator configuration
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    pub emit: EmitConfig,
    /// License header file, prepended verbatim to every generated source.
    /// No header is emitted when unset.
    pub header_path: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the emission config
    pub fn with_emit(mut self, emit: EmitConfig) -> Self {
        self.emit = emit;
        self
    }

    /// Set the license header path
    pub fn with_header_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.header_path = Some(path.into());
        self
    }
}

/// Builds one generated container: register components and parameters, then
/// call [`generate`](Self::generate).
///
/// All state is per-generator: two generators never share registries or
/// visited sets, and a generator is meant to produce exactly one container.
pub struct ContainerGenerator<P: TypeProvider> {
    provider: P,
    registry: Registry,
    config: GeneratorConfig,
    resolved: bool,
}

impl<P: TypeProvider> ContainerGenerator<P> {
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, GeneratorConfig::default())
    }

    pub fn with_config(provider: P, config: GeneratorConfig) -> Self {
        Self {
            provider,
            registry: Registry::new(),
            config,
            resolved: false,
        }
    }

    /// Register an internal caller-supplied input.
    pub fn add_parameter(&mut self, descriptor: TypeDescriptor, required: bool) -> NodeId {
        self.registry.add_parameter(descriptor, required)
    }

    /// Register a caller-supplied input exposed through a public accessor.
    pub fn add_public_parameter(&mut self, descriptor: TypeDescriptor, required: bool) -> NodeId {
        self.registry.add_public_parameter(descriptor, required)
    }

    /// Register an internal component.
    pub fn add_field(&mut self, descriptor: TypeDescriptor) -> NodeId {
        self.registry.add_field(descriptor)
    }

    /// Register a component exposed through a public accessor.
    pub fn add_public_field(&mut self, descriptor: TypeDescriptor) -> NodeId {
        self.registry.add_public_field(descriptor)
    }

    /// Register a component with an explicit name and/or initialization.
    pub fn add_field_with(
        &mut self,
        public: bool,
        descriptor: TypeDescriptor,
        name: Option<String>,
        init: Option<Initialization>,
    ) -> NodeId {
        self.registry.add_field_with(public, descriptor, name, init)
    }

    /// The wiring graph built so far (after [`generate`](Self::generate) it
    /// also contains the implicit nodes).
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Resolve the wiring graph. Idempotent: the pass runs once per
    /// generator, later calls are no-ops.
    fn resolve(&mut self) -> Result<(), ResolveError> {
        if !self.resolved {
            Resolver::new(&self.provider, &mut self.registry).run()?;
            self.resolved = true;
        }
        Ok(())
    }

    /// Resolve and build the structured container model without rendering.
    pub fn build_model(&mut self, package: &str, class_name: &str) -> Result<ContainerModel, GeneratorError> {
        self.resolve()?;
        let header = match &self.config.header_path {
            Some(path) => fs::read_to_string(path)?,
            None => String::new(),
        };
        let model = ContainerModel::build(&self.registry, &self.provider, &self.config.emit, package, class_name, header)?;
        Ok(model)
    }

    /// Resolve, build, and render the container source without touching the
    /// filesystem (apart from reading the license header).
    pub fn generate_to_string(&mut self, package: &str, class_name: &str) -> Result<String, GeneratorError> {
        let model = self.build_model(package, class_name)?;
        Ok(render(&model, &self.config.emit))
    }

    /// Generate the container source file at
    /// `<target_source_root>/<package-as-path>/<class_name>.java`.
    ///
    /// The file is written next to its final location with a `.tmp` suffix
    /// and renamed into place once complete. On failure no rename occurs and
    /// any previous file at the final path is untouched.
    #[tracing::instrument(skip_all, fields(class = class_name))]
    pub fn generate(
        &mut self,
        target_source_root: &Path,
        package: &str,
        class_name: &str,
    ) -> Result<PathBuf, GeneratorError> {
        let source = self.generate_to_string(package, class_name)?;

        let dir = target_source_root.join(package.replace('.', "/"));
        fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{class_name}.java"));
        let tmp = dir.join(format!("{class_name}.java.tmp"));

        // The temporary file is fully written and closed before the rename;
        // a crash in between leaves only the previous complete file.
        fs::write(&tmp, &source)?;
        debug!(tmp = %tmp.display(), "temporary container source written");
        fs::rename(&tmp, &path).map_err(|source| GeneratorError::Rename {
            from: tmp.clone(),
            to: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "container source written");
        Ok(path)
    }
}
