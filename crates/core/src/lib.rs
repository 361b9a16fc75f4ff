pub mod cancel;
pub mod config;
pub mod error;
pub mod merge;
pub mod selector;
pub mod types;

// Re-export commonly used types
pub use cancel::CancellationToken;
pub use config::{
    ContentConfig, CorePlugins, DarkMode, PluginDescriptor, ThemeConfig, UserConfig,
};
pub use error::{CancelledError, ConfigError, GenerateError, ScanWarning, ScanWarningKind};
pub use merge::merge_declarations;
pub use selector::{class_selector, escape_class_name};
pub use types::{CandidateToken, Declaration, Layer, Rule};
