use crosswind_core::Declaration;
use crosswind_theme::ThemeTable;
use crosswind_tw_parse::ArbitraryValue;

/// 工具匹配模式
///
/// - `Literal("flex")` 只匹配 `flex`
/// - `Prefix("bg")` 匹配 `bg-{value}`，value 为单个占位段
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UtilityPattern {
    Literal(String),
    Prefix(String),
}

impl UtilityPattern {
    pub fn literal(name: impl Into<String>) -> Self {
        UtilityPattern::Literal(name.into())
    }

    pub fn prefix(prefix: impl Into<String>) -> Self {
        UtilityPattern::Prefix(prefix.into())
    }

    pub fn key(&self) -> &str {
        match self {
            UtilityPattern::Literal(name) | UtilityPattern::Prefix(name) => name,
        }
    }
}

/// 一次成功的模式匹配
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilityMatch {
    /// 去掉修饰符与负号后的工具名（如 `mt-4`）
    pub utility: String,
    /// token 是否带前导 `-`
    pub negative: bool,
    /// 前缀模式绑定的值（如 `4`）；字面量模式为 None
    pub value: Option<String>,
}

impl UtilityMatch {
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// 值为 `[...]` 时解析为任意值
    pub fn arbitrary(&self) -> Option<ArbitraryValue> {
        self.value.as_deref().and_then(ArbitraryValue::parse)
    }

    /// 拆出颜色的透明度修饰：`red-500/50` → (`red-500`, Some(`50`))
    ///
    /// 整体为任意值时不拆分，`[rgb(0_0_0/0.5)]` 中的 `/` 属于值本身。
    pub fn split_alpha(&self) -> Option<(&str, Option<&str>)> {
        let value = self.value.as_deref()?;
        if value.starts_with('[') && value.ends_with(']') {
            return Some((value, None));
        }
        match value.rsplit_once('/') {
            Some((color, alpha)) if !color.is_empty() && !alpha.is_empty() => {
                Some((color, Some(alpha)))
            }
            _ => Some((value, None)),
        }
    }
}

/// 生成器产出的一条规则草稿
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedRule {
    /// 追加在类选择器之后的部分，如 ` > :not([hidden]) ~ :not([hidden])`
    pub selector_suffix: String,
    pub declarations: Vec<Declaration>,
}

impl GeneratedRule {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self {
            selector_suffix: String::new(),
            declarations,
        }
    }

    pub fn with_suffix(suffix: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            selector_suffix: suffix.into(),
            declarations,
        }
    }
}

/// 工具生成器
///
/// 内置工具和插件工具实现同一个接口。生成器是纯函数：
/// 主题中找不到需要的值时返回空列表，不报错。
pub trait UtilityGenerator: Send + Sync {
    fn pattern(&self) -> &UtilityPattern;

    /// 所属工具组（`corePlugins` 中的名字）
    fn group(&self) -> &str;

    fn generate(&self, matched: &UtilityMatch, theme: &ThemeTable) -> Vec<GeneratedRule>;
}

/// 由闭包构成的生成器，插件最常用的写法
pub struct FnUtility<F> {
    pattern: UtilityPattern,
    group: String,
    func: F,
}

impl<F> FnUtility<F>
where
    F: Fn(&UtilityMatch, &ThemeTable) -> Vec<GeneratedRule> + Send + Sync,
{
    pub fn new(pattern: UtilityPattern, group: impl Into<String>, func: F) -> Self {
        Self {
            pattern,
            group: group.into(),
            func,
        }
    }
}

impl<F> UtilityGenerator for FnUtility<F>
where
    F: Fn(&UtilityMatch, &ThemeTable) -> Vec<GeneratedRule> + Send + Sync,
{
    fn pattern(&self) -> &UtilityPattern {
        &self.pattern
    }

    fn group(&self) -> &str {
        &self.group
    }

    fn generate(&self, matched: &UtilityMatch, theme: &ThemeTable) -> Vec<GeneratedRule> {
        (self.func)(matched, theme)
    }
}
