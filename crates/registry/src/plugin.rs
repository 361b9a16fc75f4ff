use crate::generator::UtilityGenerator;
use crate::registry::UtilityRegistry;
use crosswind_theme::ThemeTable;

/// 第三方插件
///
/// 流水线在主题解析之后、扫描之前调用一次 `register_utilities`。
/// 插件注册的生成器与内置生成器实现同一接口，但不会抢占内置匹配：
/// 同一 token 两边的规则都会生成。
pub trait Plugin: Send + Sync {
    fn name(&self) -> &str;

    fn register_utilities(&self, registry: &mut PluginRegistrar<'_>, theme: &ThemeTable);
}

/// 插件注册期间看到的注册表视图
///
/// 记录生成器来源，供诊断输出使用。
pub struct PluginRegistrar<'a> {
    registry: &'a mut UtilityRegistry,
    plugin: String,
    registered: usize,
}

impl<'a> PluginRegistrar<'a> {
    pub(crate) fn new(registry: &'a mut UtilityRegistry, plugin: &str) -> Self {
        Self {
            registry,
            plugin: plugin.to_string(),
            registered: 0,
        }
    }

    /// 注册插件生成器；`group` 同样受 corePlugins 开关控制
    pub fn register(
        &mut self,
        generator: impl UtilityGenerator + 'static,
        enabled_by_default: bool,
    ) -> bool {
        let added =
            self.registry
                .register_plugin_utility(&self.plugin, Box::new(generator), enabled_by_default);
        self.registered += usize::from(added);
        added
    }

    pub fn plugin(&self) -> &str {
        &self.plugin
    }

    pub fn registered(&self) -> usize {
        self.registered
    }
}
