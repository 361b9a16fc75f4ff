//! Crosswind 工具注册表与变体引擎
//!
//! - `UtilityRegistry`：token → 生成器，内置工具组与插件工具两类来源
//! - `VariantEngine`：修饰符解析，选择器与 at-rule 包裹

pub mod builtin;
pub mod generator;
mod matcher;
pub mod plugin;
pub mod registry;
pub mod value;
pub mod variant;

pub use builtin::{is_builtin_group, GROUPS};
pub use generator::{FnUtility, GeneratedRule, UtilityGenerator, UtilityMatch, UtilityPattern};
pub use plugin::{Plugin, PluginRegistrar};
pub use registry::{MatchedGenerator, Origin, UtilityRegistry};
pub use value::ValueKind;
pub use variant::{Expanded, Modifier, Rejection, Screen, VariantEngine, VariantSpec};
