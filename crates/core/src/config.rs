//! 用户配置模型
//!
//! 与 `tailwind.config.js` 同形的声明式配置：扫描哪些文件、暗色模式策略、
//! 主题覆盖、核心插件开关和第三方插件列表。未知顶层字段一律忽略。

use crate::error::ConfigError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `darkMode: "class"` 时默认的祖先标记类
pub const DEFAULT_DARK_SELECTOR: &str = ".dark";

/// 反序列化后的配置，一次构建内不可变
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConfig {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub dark_mode: DarkMode,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub core_plugins: CorePlugins,
    #[serde(default)]
    pub plugins: Vec<PluginDescriptor>,
}

impl UserConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

// ── content ──────────────────────────────────────────────────────────────────

/// 扫描源：glob 列表，或 `{ "files": [...] }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentConfig {
    Patterns(Vec<String>),
    Files { files: Vec<String> },
}

impl ContentConfig {
    /// 按配置顺序返回 glob 模式
    pub fn patterns(&self) -> &[String] {
        match self {
            ContentConfig::Patterns(patterns) => patterns,
            ContentConfig::Files { files } => files,
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        ContentConfig::Patterns(Vec::new())
    }
}

// ── darkMode ─────────────────────────────────────────────────────────────────

/// 暗色模式策略
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDarkMode", into = "RawDarkMode")]
pub enum DarkMode {
    /// `@media (prefers-color-scheme: dark)`
    #[default]
    Media,
    /// 祖先标记类，如 `.dark .dark\:bg-black`
    Class { selector: String },
    /// 含 `dark:` 的 token 全部丢弃
    Off,
}

impl DarkMode {
    pub fn class() -> Self {
        DarkMode::Class {
            selector: DEFAULT_DARK_SELECTOR.to_string(),
        }
    }
}

/// 配置文件中 darkMode 允许的几种写法
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawDarkMode {
    Flag(bool),
    Name(String),
    Custom(Vec<String>),
}

impl TryFrom<RawDarkMode> for DarkMode {
    type Error = ConfigError;

    fn try_from(raw: RawDarkMode) -> Result<Self, Self::Error> {
        match raw {
            RawDarkMode::Flag(false) => Ok(DarkMode::Off),
            RawDarkMode::Flag(true) => Err(ConfigError::DarkMode("true".to_string())),
            RawDarkMode::Name(name) => match name.as_str() {
                "media" => Ok(DarkMode::Media),
                "class" | "selector" => Ok(DarkMode::class()),
                "off" => Ok(DarkMode::Off),
                other => Err(ConfigError::DarkMode(format!("'{}'", other))),
            },
            RawDarkMode::Custom(parts) => match parts.as_slice() {
                [strategy, selector]
                    if (strategy == "class" || strategy == "selector")
                        && !selector.trim().is_empty() =>
                {
                    Ok(DarkMode::Class {
                        selector: selector.trim().to_string(),
                    })
                }
                _ => Err(ConfigError::DarkMode(format!("{:?}", parts))),
            },
        }
    }
}

impl From<DarkMode> for RawDarkMode {
    fn from(mode: DarkMode) -> Self {
        match mode {
            DarkMode::Media => RawDarkMode::Name("media".to_string()),
            DarkMode::Off => RawDarkMode::Name("off".to_string()),
            DarkMode::Class { selector } if selector == DEFAULT_DARK_SELECTOR => {
                RawDarkMode::Name("class".to_string())
            }
            DarkMode::Class { selector } => RawDarkMode::Custom(vec!["class".to_string(), selector]),
        }
    }
}

// ── theme ────────────────────────────────────────────────────────────────────

/// 主题覆盖树
///
/// - `extend` 下的分类与默认值逐叶合并
/// - 顶层的其他分类整体替换默认分类
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub extend: IndexMap<String, Value>,
    #[serde(flatten)]
    pub replace: IndexMap<String, Value>,
}

// ── corePlugins ──────────────────────────────────────────────────────────────

/// 内置工具组开关
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorePlugins {
    /// `{ "padding": false }`，未列出的组使用默认值
    Toggles(IndexMap<String, bool>),
    /// `["padding", "margin"]`，只启用列出的组
    Allow(Vec<String>),
}

impl CorePlugins {
    pub fn is_enabled(&self, group: &str, enabled_by_default: bool) -> bool {
        match self {
            CorePlugins::Toggles(map) => map.get(group).copied().unwrap_or(enabled_by_default),
            CorePlugins::Allow(list) => list.iter().any(|name| name == group),
        }
    }

    /// 配置中显式提到的组名
    pub fn named_groups(&self) -> Vec<&str> {
        match self {
            CorePlugins::Toggles(map) => map.keys().map(|k| k.as_str()).collect(),
            CorePlugins::Allow(list) => list.iter().map(|k| k.as_str()).collect(),
        }
    }
}

impl Default for CorePlugins {
    fn default() -> Self {
        CorePlugins::Toggles(IndexMap::new())
    }
}

// ── plugins ──────────────────────────────────────────────────────────────────

/// 插件描述符：名字 + 可选参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPluginDescriptor")]
pub struct PluginDescriptor {
    pub name: String,
    pub options: Value,
}

impl PluginDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Value::Null,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPluginDescriptor {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        options: Value,
    },
}

impl From<RawPluginDescriptor> for PluginDescriptor {
    fn from(raw: RawPluginDescriptor) -> Self {
        match raw {
            RawPluginDescriptor::Name(name) => PluginDescriptor::new(name),
            RawPluginDescriptor::Full { name, options } => PluginDescriptor { name, options },
        }
    }
}
