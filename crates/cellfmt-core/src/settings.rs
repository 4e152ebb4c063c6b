//! Registry configuration

/// How strictly numeric style fields are checked when a style is registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Store and emit whatever the style holds
    #[default]
    Permissive,
    /// Reject font sizes, rotations and indents spreadsheet applications
    /// would refuse to load
    Strict,
}

/// Style registry settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySettings {
    /// Validation applied by `register_style` / `register_differential_style`
    pub validation: Validation,
    /// Expected number of distinct cell styles, used to presize tables
    pub initial_capacity: usize,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            validation: Validation::Permissive,
            initial_capacity: 64,
        }
    }
}

impl RegistrySettings {
    /// Default settings with [`Validation::Strict`]
    pub fn strict() -> Self {
        Self {
            validation: Validation::Strict,
            ..Self::default()
        }
    }
}
