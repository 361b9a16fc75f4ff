use serde::{Deserialize, Serialize};

/// 拆分后的候选 token
///
/// `md:dark:hover:-mt-4` →
/// variants = ["md", "dark", "hover"], negative = true, utility = "mt-4"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedCandidate {
    /// 原始 token（用于生成选择器）
    pub raw: String,

    /// 修饰符，按书写顺序（第一个为最外层）
    pub variants: Vec<String>,

    /// 是否为负值（如 -m-4）
    pub negative: bool,

    /// 去掉修饰符和负号后的工具名（如 "m-4"）
    pub utility: String,
}

impl ParsedCandidate {
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    /// 工具部分，负值时带前导 `-`
    pub fn base(&self) -> String {
        if self.negative {
            format!("-{}", self.utility)
        } else {
            self.utility.clone()
        }
    }
}

/// 任意值表示
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArbitraryValue {
    /// 原始值（包含方括号）
    pub raw: String,

    /// 解析后的内容（去除方括号）
    pub content: String,
}

impl ArbitraryValue {
    /// 从 `[...]` 形式的值构建；不是方括号包裹或内容为空时返回 None
    ///
    /// 任意值中的 `_` 会转换为空格，`\_` 保留为字面下划线。
    pub fn parse(raw: &str) -> Option<Self> {
        let stripped = raw.strip_prefix('[')?.strip_suffix(']')?;
        if stripped.is_empty() || stripped.contains(['[', ']']) {
            return None;
        }

        Some(Self {
            raw: raw.to_string(),
            content: convert_underscores(stripped),
        })
    }

    /// 类型提示，如 `[length:2px]` 中的 "length"
    pub fn type_hint(&self) -> Option<(&str, &str)> {
        let (hint, rest) = self.content.split_once(':')?;
        if hint.is_empty() || rest.is_empty() || !hint.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        Some((hint, rest))
    }
}

/// 将任意值中的下划线转换为空格
///
/// 规则：
/// - `_` → 空格
/// - `\_` → 字面下划线 `_`
fn convert_underscores(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' && chars.peek() == Some(&'_') {
            // \_ → 字面下划线
            chars.next();
            result.push('_');
        } else if ch == '_' {
            result.push(' ');
        } else {
            result.push(ch);
        }
    }

    result
}
