use crate::builtin;
use crate::generator::{GeneratedRule, UtilityGenerator, UtilityMatch};
use crate::matcher::Matcher;
use crate::plugin::{Plugin, PluginRegistrar};
use crosswind_core::{merge_declarations, CorePlugins};
use crosswind_theme::ThemeTable;
use crosswind_tw_parse::ParsedCandidate;
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace};

/// 生成器来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin<'a> {
    BuiltIn,
    Plugin(&'a str),
}

/// 一次模式命中：生成器 + 绑定后的匹配
pub struct MatchedGenerator<'a> {
    pub origin: Origin<'a>,
    pub generator: &'a dyn UtilityGenerator,
    pub matched: UtilityMatch,
}

struct PluginUtility {
    plugin: String,
    generator: Box<dyn UtilityGenerator>,
}

/// 工具注册表
///
/// 构建期可变（注册内置工具、安装插件），生成期只读，可在线程间共享。
/// 模式在注册时编入索引，匹配不需要遍历生成器。
pub struct UtilityRegistry {
    core_plugins: CorePlugins,
    builtins: Vec<Box<dyn UtilityGenerator>>,
    builtin_index: Matcher,
    plugins: Vec<PluginUtility>,
    plugin_index: Matcher,
    /// 注册过的组名，含被禁用的组
    groups: IndexSet<String>,
}

impl UtilityRegistry {
    /// 空注册表；`core_plugins` 作为注册期过滤器
    pub fn new(core_plugins: CorePlugins) -> Self {
        Self {
            core_plugins,
            builtins: Vec::new(),
            builtin_index: Matcher::default(),
            plugins: Vec::new(),
            plugin_index: Matcher::default(),
            groups: IndexSet::new(),
        }
    }

    /// 注册全部内置工具组
    pub fn with_builtins(core_plugins: CorePlugins) -> Self {
        let mut registry = Self::new(core_plugins);
        let count = builtin::register_builtins(&mut registry);
        debug!(count, "registered built-in utilities");
        registry
    }

    /// 注册内置生成器
    ///
    /// 所属组被 corePlugins 禁用时直接丢弃，返回 false。
    pub fn register(
        &mut self,
        generator: impl UtilityGenerator + 'static,
        enabled_by_default: bool,
    ) -> bool {
        self.groups.insert(generator.group().to_string());
        if !self
            .core_plugins
            .is_enabled(generator.group(), enabled_by_default)
        {
            trace!(group = generator.group(), pattern = generator.pattern().key(), "utility group disabled");
            return false;
        }

        self.builtin_index
            .insert(generator.pattern(), self.builtins.len());
        self.builtins.push(Box::new(generator));
        true
    }

    pub(crate) fn register_plugin_utility(
        &mut self,
        plugin: &str,
        generator: Box<dyn UtilityGenerator>,
        enabled_by_default: bool,
    ) -> bool {
        self.groups.insert(generator.group().to_string());
        if !self
            .core_plugins
            .is_enabled(generator.group(), enabled_by_default)
        {
            trace!(plugin, group = generator.group(), "plugin utility disabled");
            return false;
        }

        self.plugin_index
            .insert(generator.pattern(), self.plugins.len());
        self.plugins.push(PluginUtility {
            plugin: plugin.to_string(),
            generator,
        });
        true
    }

    /// 调用插件的 `register_utilities`，返回其注册的生成器数量
    pub fn install(&mut self, plugin: &dyn Plugin, theme: &ThemeTable) -> usize {
        let before = self.plugins.len();
        let mut registrar = PluginRegistrar::new(self, plugin.name());
        plugin.register_utilities(&mut registrar, theme);
        let added = self.plugins.len() - before;
        debug!(plugin = plugin.name(), added, "installed plugin");
        added
    }

    pub fn builtin_count(&self) -> usize {
        self.builtins.len()
    }

    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    /// 是否有生成器声明过该组（不论是否启用）
    pub fn knows_group(&self, group: &str) -> bool {
        self.groups.contains(group)
    }

    pub fn core_plugins(&self) -> &CorePlugins {
        &self.core_plugins
    }

    /// 所有模式命中，内置在前、插件在后
    pub fn matches(&self, candidate: &ParsedCandidate) -> Vec<MatchedGenerator<'_>> {
        let bind = |value: Option<String>| UtilityMatch {
            utility: candidate.utility.clone(),
            negative: candidate.negative,
            value,
        };

        let builtins = self
            .builtin_index
            .hits(&candidate.utility)
            .into_iter()
            .map(|hit| MatchedGenerator {
                origin: Origin::BuiltIn,
                generator: self.builtins[hit.index].as_ref(),
                matched: bind(hit.value),
            });

        let plugins = self
            .plugin_index
            .hits(&candidate.utility)
            .into_iter()
            .map(|hit| {
                let entry = &self.plugins[hit.index];
                MatchedGenerator {
                    origin: Origin::Plugin(&entry.plugin),
                    generator: entry.generator.as_ref(),
                    matched: bind(hit.value),
                }
            });

        builtins.chain(plugins).collect()
    }

    /// 为一个已去掉修饰符的候选生成规则草稿
    ///
    /// - 内置：按命中顺序取第一个有产出的生成器
    /// - 插件：全部命中的生成器都运行，追加在内置之后
    /// - 选择器后缀相同的草稿合并为一条，后者覆盖同名属性
    ///
    /// 返回空列表表示 token 未匹配。
    pub fn generate(&self, candidate: &ParsedCandidate, theme: &ThemeTable) -> Vec<GeneratedRule> {
        let mut builtin_done = false;
        let mut drafts = Vec::new();

        for hit in self.matches(candidate) {
            if hit.origin == Origin::BuiltIn {
                if builtin_done {
                    continue;
                }
                let rules = hit.generator.generate(&hit.matched, theme);
                builtin_done = !rules.is_empty();
                drafts.extend(rules);
            } else {
                drafts.extend(hit.generator.generate(&hit.matched, theme));
            }
        }

        merge_by_suffix(drafts)
    }
}

fn merge_by_suffix(drafts: Vec<GeneratedRule>) -> Vec<GeneratedRule> {
    if drafts.len() < 2 {
        return drafts.into_iter().filter(|d| !d.declarations.is_empty()).collect();
    }

    let mut groups: IndexMap<String, Vec<_>> = IndexMap::new();
    for draft in drafts {
        groups
            .entry(draft.selector_suffix)
            .or_default()
            .extend(draft.declarations);
    }

    groups
        .into_iter()
        .filter(|(_, decls)| !decls.is_empty())
        .map(|(suffix, decls)| GeneratedRule::with_suffix(suffix, merge_declarations(decls)))
        .collect()
}
