//! Emission configuration

/// Whole-container wiring strategy, chosen once per generated container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WiringMode {
    /// Every component is constructed and wired in the container's
    /// constructor.
    #[default]
    Eager,
    /// Components are constructed on first access, with unsynchronized
    /// memoization (see [`EmitConfig::synchronized_lazy`]).
    Lazy,
}

/// Emission configuration
#[derive(Debug, Clone)]
pub struct EmitConfig {
    /// Wiring strategy for the generated container.
    pub mode: WiringMode,
    /// Emit double-checked locking around lazy accessors. Off by default:
    /// plain lazy accessors are not thread-safe, and that is a documented
    /// property of the generated artifact.
    pub synchronized_lazy: bool,
    /// Number of spaces per indentation level in the generated source.
    pub indent_width: usize,
    /// Qualified name of the annotation placed on required constructor
    /// parameters.
    pub not_null_annotation: String,
    /// Name stamped into the `DO NOT EDIT` banner of every generated file.
    pub generated_by: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            mode: WiringMode::Eager,
            synchronized_lazy: false,
            indent_width: 4,
            not_null_annotation: "org.jetbrains.annotations.NotNull".to_string(),
            generated_by: "wiregen".to_string(),
        }
    }
}

impl EmitConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wiring mode
    pub fn with_mode(mut self, mode: WiringMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable or disable double-checked locking for lazy accessors
    pub fn with_synchronized_lazy(mut self, synchronized: bool) -> Self {
        self.synchronized_lazy = synchronized;
        self
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the not-null annotation type
    pub fn with_not_null_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.not_null_annotation = annotation.into();
        self
    }

    /// Set the generated-by marker
    pub fn with_generated_by(mut self, marker: impl Into<String>) -> Self {
        self.generated_by = marker.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Default config tests
    // ========================================

    #[test]
    fn test_default_mode_is_eager() {
        assert_eq!(EmitConfig::default().mode, WiringMode::Eager);
    }

    #[test]
    fn test_default_lazy_is_unsynchronized() {
        assert!(!EmitConfig::default().synchronized_lazy);
    }

    #[test]
    fn test_default_indent_width() {
        assert_eq!(EmitConfig::default().indent_width, 4);
    }

    #[test]
    fn test_default_not_null_annotation() {
        assert_eq!(EmitConfig::default().not_null_annotation, "org.jetbrains.annotations.NotNull");
    }

    // ========================================
    // Builder method tests
    // ========================================

    #[test]
    fn test_builder_chain() {
        let config = EmitConfig::new()
            .with_mode(WiringMode::Lazy)
            .with_synchronized_lazy(true)
            .with_indent_width(2)
            .with_not_null_annotation("javax.annotation.Nonnull")
            .with_generated_by("acme-di");

        assert_eq!(config.mode, WiringMode::Lazy);
        assert!(config.synchronized_lazy);
        assert_eq!(config.indent_width, 2);
        assert_eq!(config.not_null_annotation, "javax.annotation.Nonnull");
        assert_eq!(config.generated_by, "acme-di");
    }
}
