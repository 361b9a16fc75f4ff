//! 配置中的主题覆盖树
//!
//! `theme.colors` 这样的嵌套对象压平为 `red-500` 形式的键：
//!
//! - 嵌套对象的键用 `-` 连接
//! - `DEFAULT` 对应父级名字本身
//! - 数字转为字符串
//! - 数组成为列表值；数组中的对象（如 `fontSize` 的 `{ lineHeight }`）贡献其标量值
//! - `null` / 布尔值是配置错误

use crate::table::ThemeCategory;
use crate::value::ThemeValue;
use crosswind_core::ConfigError;
use indexmap::IndexMap;
use serde_json::Value;

/// 一层覆盖：分类 → 压平后的条目
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeTree {
    categories: IndexMap<String, ThemeCategory>,
}

impl ThemeTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 `theme` 或 `theme.extend` 的原始值构建
    ///
    /// `scope` 只用于错误路径，如 `extend`。
    pub fn from_values(
        scope: Option<&str>,
        values: &IndexMap<String, Value>,
    ) -> Result<Self, ConfigError> {
        let mut tree = Self::new();

        for (category, value) in values {
            let path = match scope {
                Some(scope) => format!("{}.{}", scope, category),
                None => category.clone(),
            };
            let Value::Object(entries) = value else {
                return Err(theme_error(&path, "expected an object of named values"));
            };

            let mut flat = ThemeCategory::new();
            for (name, entry) in entries {
                flatten_entry(&path, "", name, entry, &mut flat)?;
            }
            tree.categories.insert(category.clone(), flat);
        }

        Ok(tree)
    }

    pub fn insert(&mut self, category: impl Into<String>, name: impl Into<String>, value: ThemeValue) {
        self.categories
            .entry(category.into())
            .or_default()
            .insert(name.into(), value);
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &ThemeCategory)> {
        self.categories.iter().map(|(name, entries)| (name.as_str(), entries))
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn flatten_entry(
    path: &str,
    prefix: &str,
    key: &str,
    value: &Value,
    out: &mut ThemeCategory,
) -> Result<(), ConfigError> {
    let name = join_name(prefix, key);
    let entry_path = format!("{}.{}", path, name);

    match value {
        Value::String(s) => {
            out.insert(name, ThemeValue::Scalar(s.clone()));
        }
        Value::Number(n) => {
            out.insert(name, ThemeValue::Scalar(n.to_string()));
        }
        Value::Array(items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                collect_list_item(&entry_path, item, &mut list)?;
            }
            out.insert(name, ThemeValue::List(list));
        }
        Value::Object(children) => {
            for (child_key, child) in children {
                flatten_entry(path, &name, child_key, child, out)?;
            }
        }
        Value::Null | Value::Bool(_) => {
            return Err(theme_error(&entry_path, "expected a string, number or array"));
        }
    }

    Ok(())
}

fn collect_list_item(path: &str, item: &Value, list: &mut Vec<String>) -> Result<(), ConfigError> {
    match item {
        Value::String(s) => list.push(s.clone()),
        Value::Number(n) => list.push(n.to_string()),
        Value::Object(fields) => {
            for field in fields.values() {
                match field {
                    Value::String(s) => list.push(s.clone()),
                    Value::Number(n) => list.push(n.to_string()),
                    _ => return Err(theme_error(path, "nested option values must be scalars")),
                }
            }
        }
        _ => return Err(theme_error(path, "list items must be strings or numbers")),
    }
    Ok(())
}

/// `DEFAULT` 键对应父级名字
fn join_name(prefix: &str, key: &str) -> String {
    match (prefix.is_empty(), key == "DEFAULT") {
        (true, _) => key.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{}-{}", prefix, key),
    }
}

fn theme_error(path: &str, reason: &str) -> ConfigError {
    ConfigError::Theme {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}
