use serde::{Deserialize, Serialize};

/// 主题叶子值
///
/// 大多数值是单个字符串；`fontFamily` 这类栈和 `fontSize` 的
/// `[size, lineHeight]` 对是列表。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeValue {
    Scalar(String),
    List(Vec<String>),
}

impl ThemeValue {
    pub fn scalar(value: impl Into<String>) -> Self {
        ThemeValue::Scalar(value.into())
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ThemeValue::List(items.into_iter().map(Into::into).collect())
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            ThemeValue::Scalar(value) => Some(value),
            ThemeValue::List(_) => None,
        }
    }

    /// 标量本身，或列表的第一项
    pub fn first(&self) -> Option<&str> {
        match self {
            ThemeValue::Scalar(value) => Some(value),
            ThemeValue::List(items) => items.first().map(String::as_str),
        }
    }

    /// 列表的第二项（`fontSize` 的行高）
    pub fn second(&self) -> Option<&str> {
        match self {
            ThemeValue::Scalar(_) => None,
            ThemeValue::List(items) => items.get(1).map(String::as_str),
        }
    }

    /// 作为逗号分隔的 CSS 值输出
    ///
    /// 含空白且未加引号的列表项会加上双引号，如 `"Courier Prime", monospace`。
    pub fn to_css_list(&self) -> String {
        match self {
            ThemeValue::Scalar(value) => value.clone(),
            ThemeValue::List(items) => items
                .iter()
                .map(|item| quote_family(item))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl From<&str> for ThemeValue {
    fn from(value: &str) -> Self {
        ThemeValue::Scalar(value.to_string())
    }
}

fn quote_family(item: &str) -> String {
    let already_quoted = item.starts_with('"') || item.starts_with('\'');
    if !already_quoted && item.contains(char::is_whitespace) {
        format!("\"{}\"", item)
    } else {
        item.to_string()
    }
}
