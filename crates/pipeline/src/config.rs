//! 构建输入：用户配置 + 内容根目录 + 插件实例

use crosswind_core::{ConfigError, PluginDescriptor, UserConfig};
use crosswind_registry::Plugin;
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 一次构建的完整输入，构建期间不可变
///
/// `content` 中的相对模式以 `base_dir` 为根展开。
#[derive(Clone)]
pub struct Configuration {
    user: UserConfig,
    base_dir: PathBuf,
    plugins: Vec<Arc<dyn Plugin>>,
    /// 已由插件目录实例化的描述符名
    resolved: Vec<String>,
}

impl Configuration {
    pub fn from_user_config(user: UserConfig) -> Self {
        Self {
            user,
            base_dir: PathBuf::from("."),
            plugins: Vec::new(),
            resolved: Vec::new(),
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        UserConfig::from_json_str(text).map(Self::from_user_config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str::<UserConfig>(text)
            .map(Self::from_user_config)
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 读取配置文件：`.toml` 按 TOML 解析，其余按 JSON
    ///
    /// 内容根目录取配置文件所在目录。
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&text)?,
            _ => Self::from_json_str(&text)?,
        };

        let base_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Ok(config.with_base_dir(base_dir))
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// 直接挂载插件实例，不经过 `plugins` 描述符
    pub fn with_plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Arc::new(plugin));
        self
    }

    /// 用插件目录实例化 `plugins` 中的每个描述符
    ///
    /// 目录里没有的名字是配置错误。
    pub fn resolve_plugins(mut self, catalog: &PluginCatalog) -> Result<Self, ConfigError> {
        for descriptor in &self.user.plugins {
            if self.resolved.contains(&descriptor.name) {
                continue;
            }
            self.plugins.push(catalog.build(descriptor)?);
            self.resolved.push(descriptor.name.clone());
        }
        Ok(self)
    }

    pub fn user(&self) -> &UserConfig {
        &self.user
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn plugins(&self) -> &[Arc<dyn Plugin>] {
        &self.plugins
    }

    /// 第一个既没被目录实例化、也没有同名插件实例的描述符
    pub(crate) fn unresolved_plugin(&self) -> Option<&PluginDescriptor> {
        self.user.plugins.iter().find(|descriptor| {
            !self.resolved.contains(&descriptor.name)
                && !self.plugins.iter().any(|p| p.name() == descriptor.name)
        })
    }

    /// 配置指纹；变化时增量缓存中的逐 token 结果全部失效
    pub(crate) fn fingerprint(&self) -> Result<blake3::Hash, ConfigError> {
        let user = serde_json::to_vec(&self.user).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let mut hasher = blake3::Hasher::new();
        hasher.update(&user);
        hasher.update(self.base_dir.to_string_lossy().as_bytes());
        for plugin in &self.plugins {
            hasher.update(b"\0");
            hasher.update(plugin.name().as_bytes());
        }
        Ok(hasher.finalize())
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plugins: Vec<&str> = self.plugins.iter().map(|p| p.name()).collect();
        f.debug_struct("Configuration")
            .field("user", &self.user)
            .field("base_dir", &self.base_dir)
            .field("plugins", &plugins)
            .finish()
    }
}

type PluginFactory = Box<dyn Fn(&Value) -> Result<Arc<dyn Plugin>, ConfigError> + Send + Sync>;

/// 插件名 → 工厂
///
/// 由嵌入方注册；工厂收到描述符中的 `options`，可以拒绝不合法的参数。
#[derive(Default)]
pub struct PluginCatalog {
    factories: IndexMap<String, PluginFactory>,
}

impl PluginCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F, P>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&Value) -> Result<P, ConfigError> + Send + Sync + 'static,
        P: Plugin + 'static,
    {
        self.factories.insert(
            name.into(),
            Box::new(move |options| {
                factory(options).map(|plugin| Arc::new(plugin) as Arc<dyn Plugin>)
            }),
        );
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn build(&self, descriptor: &PluginDescriptor) -> Result<Arc<dyn Plugin>, ConfigError> {
        let factory = self
            .factories
            .get(&descriptor.name)
            .ok_or_else(|| ConfigError::UnknownPlugin(descriptor.name.clone()))?;
        factory(&descriptor.options)
    }
}

impl fmt::Debug for PluginCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.factories.keys()).finish()
    }
}
