//! Crosswind：从源码中提取工具类并生成 CSS
//!
//! 一次构建依次经过：
//! 1. 主题解析（默认主题 + `theme` 覆盖）
//! 2. 注册表构建（内置工具组 + 插件）
//! 3. 内容扫描（`content` glob，并行读取）
//! 4. 逐 token：修饰符拆分 → 生成 → 选择器与 at-rule 包裹
//! 5. 去重、分层排序、序列化
//!
//! ```
//! use crosswind::{CancellationToken, Configuration, Generator};
//!
//! let config = Configuration::from_json_str(r#"{ "content": [] }"#).unwrap();
//! let output = Generator::new()
//!     .generate(&config, &CancellationToken::new())
//!     .unwrap();
//! assert!(output.is_empty());
//! assert_eq!(output.text, "\n");
//! ```

pub mod cache;
pub mod config;
pub mod generator;

pub use cache::BuildCache;
pub use config::{Configuration, PluginCatalog};
pub use generator::Generator;

// Re-exports
pub use crosswind_core::{
    CancellationToken, CancelledError, ConfigError, DarkMode, GenerateError, ScanWarning,
    ScanWarningKind, UserConfig,
};
pub use crosswind_css::{Attribution, CssOutput};
pub use crosswind_registry::{
    FnUtility, GeneratedRule, Plugin, PluginRegistrar, UtilityGenerator, UtilityMatch,
    UtilityPattern,
};
pub use crosswind_theme::{ThemeTable, ThemeValue};

/// 一次性完整构建，不保留缓存
pub fn generate(config: &Configuration) -> Result<CssOutput, GenerateError> {
    Generator::new().generate(config, &CancellationToken::new())
}
