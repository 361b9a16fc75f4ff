//! 模式索引
//!
//! 注册时把模式编入两张哈希表：字面量表和前缀表。
//! 匹配时只需一次字面量查找，加上在每个 `-` 处切分后的前缀查找，
//! 不需要逐个尝试生成器。

use crate::generator::UtilityPattern;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub(crate) struct Matcher {
    literals: HashMap<String, Vec<usize>>,
    prefixes: HashMap<String, Vec<usize>>,
}

/// 一个命中：生成器下标 + 绑定值
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Hit {
    pub index: usize,
    pub value: Option<String>,
}

impl Matcher {
    pub fn insert(&mut self, pattern: &UtilityPattern, index: usize) {
        let table = match pattern {
            UtilityPattern::Literal(_) => &mut self.literals,
            UtilityPattern::Prefix(_) => &mut self.prefixes,
        };
        table.entry(pattern.key().to_string()).or_default().push(index);
    }

    /// 按优先级返回所有命中
    ///
    /// 字面量在前；前缀按长度从长到短，同一前缀内按注册顺序。
    pub fn hits(&self, utility: &str) -> Vec<Hit> {
        let mut hits = Vec::new();

        if let Some(indices) = self.literals.get(utility) {
            hits.extend(indices.iter().map(|&index| Hit { index, value: None }));
        }

        for (split, _) in utility.rmatch_indices('-') {
            let (prefix, value) = (&utility[..split], &utility[split + 1..]);
            if prefix.is_empty() || !is_placeholder_value(value) {
                continue;
            }
            if let Some(indices) = self.prefixes.get(prefix) {
                hits.extend(indices.iter().map(|&index| Hit {
                    index,
                    value: Some(value.to_string()),
                }));
            }
        }

        hits
    }
}

/// 占位段允许的字符
///
/// 方括号任意值整体接受；否则只允许字母数字和 `-` `.` `/`，
/// 且首尾不能是分隔符。
fn is_placeholder_value(value: &str) -> bool {
    if value.len() > 2 && value.starts_with('[') && value.contains(']') {
        return true;
    }

    let bytes = value.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) if first.is_ascii_alphanumeric() && last.is_ascii_alphanumeric() => {
            bytes
                .iter()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'/'))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn matcher() -> Matcher {
        let mut matcher = Matcher::default();
        matcher.insert(&UtilityPattern::literal("border"), 0);
        matcher.insert(&UtilityPattern::prefix("border"), 1);
        matcher.insert(&UtilityPattern::prefix("max-w"), 2);
        matcher.insert(&UtilityPattern::prefix("m"), 3);
        matcher
    }

    #[test]
    fn test_literal_hit_has_no_value() {
        assert_eq!(matcher().hits("border"), vec![Hit { index: 0, value: None }]);
    }

    #[test]
    fn test_prefix_binds_remaining_value() {
        assert_eq!(
            matcher().hits("border-red-500"),
            vec![Hit {
                index: 1,
                value: Some("red-500".to_string())
            }]
        );
    }

    #[test]
    fn test_longest_prefix_first() {
        let hits = matcher().hits("max-w-xl");
        assert_eq!(
            hits,
            vec![Hit {
                index: 2,
                value: Some("xl".to_string())
            }]
        );
    }

    #[test]
    fn test_arbitrary_value_with_inner_dash() {
        let mut matcher = Matcher::default();
        matcher.insert(&UtilityPattern::prefix("w"), 0);
        assert_eq!(
            matcher.hits("w-[calc(100%-1rem)]"),
            vec![Hit {
                index: 0,
                value: Some("[calc(100%-1rem)]".to_string())
            }]
        );
    }

    #[test]
    fn test_no_hit() {
        assert!(matcher().hits("flex").is_empty());
        assert!(matcher().hits("m-").is_empty());
    }

    #[test]
    fn test_placeholder_value_class() {
        assert!(is_placeholder_value("4"));
        assert!(is_placeholder_value("1/2"));
        assert!(is_placeholder_value("0.5"));
        assert!(is_placeholder_value("[13px]"));
        assert!(!is_placeholder_value(""));
        assert!(!is_placeholder_value("-4"));
        assert!(!is_placeholder_value("red-"));
    }
}
