use serde::{Deserialize, Serialize};

/// 扫描器产出的原始候选 token（逐字保留，不做任何规范化）
pub type CandidateToken = String;

/// CSS 声明
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    /// CSS 属性名（如 "padding"）
    pub property: String,
    /// CSS 属性值（如 "1rem"）
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// 输出层级
///
/// 排序即输出顺序：后面的层在相同优先级下覆盖前面的层。
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Layer {
    /// 无变体的基础规则
    #[default]
    Base,
    /// 响应式断点规则
    Responsive,
    /// 伪类 / 状态规则
    State,
    /// 暗色模式规则
    Dark,
}

/// 最终输出的一条 CSS 规则
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// 完整选择器（已转义，如 `.md\:p-4:hover`）
    pub selector: String,
    /// 包裹规则的 at-rule 链，外层在前（如 `@media (min-width: 768px)`）
    pub at_rules: Vec<String>,
    /// 有序声明列表
    pub declarations: Vec<Declaration>,
    /// 所在输出层
    pub layer: Layer,
    /// 断点序号，0 表示无断点，其余按断点升序从 1 开始
    pub screen_rank: usize,
    /// 产生这条规则的候选 token
    pub tokens: Vec<CandidateToken>,
}

impl Rule {
    pub fn new(selector: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            selector: selector.into(),
            at_rules: Vec::new(),
            declarations,
            layer: Layer::Base,
            screen_rank: 0,
            tokens: Vec::new(),
        }
    }

    /// 完整标识：at-rule 链 + 选择器，用于日志
    ///
    /// 输出去重只看 `selector`。
    pub fn key(&self) -> String {
        if self.at_rules.is_empty() {
            return self.selector.clone();
        }
        let mut key = self.at_rules.join(" ");
        key.push(' ');
        key.push_str(&self.selector);
        key
    }

    /// 输出排序键：先按层，再按断点升序
    pub fn sort_key(&self) -> (Layer, usize) {
        (self.layer, self.screen_rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_key_without_at_rules() {
        let rule = Rule::new(".p-4", vec![Declaration::new("padding", "1rem")]);
        assert_eq!(rule.key(), ".p-4");
    }

    #[test]
    fn test_rule_key_includes_wrappers() {
        let mut rule = Rule::new(".md\\:p-4", vec![Declaration::new("padding", "1rem")]);
        rule.at_rules.push("@media (min-width: 768px)".to_string());
        assert_eq!(rule.key(), "@media (min-width: 768px) .md\\:p-4");
    }

    #[test]
    fn test_layer_ordering() {
        assert!(Layer::Base < Layer::Responsive);
        assert!(Layer::Responsive < Layer::State);
        assert!(Layer::State < Layer::Dark);
    }
}
