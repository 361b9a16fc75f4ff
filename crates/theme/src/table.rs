use crate::defaults;
use crate::value::ThemeValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 单个分类：名字 → 值，保持插入顺序
pub type ThemeCategory = IndexMap<String, ThemeValue>;

/// 解析完成的主题：分类 → 名字 → 值
///
/// 分类和名字都保持插入顺序；断点排序、默认值优先级都依赖这一点。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeTable {
    categories: IndexMap<String, ThemeCategory>,
}

impl ThemeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 内置默认主题
    pub fn defaults() -> Self {
        let mut table = Self::new();

        for (category, map) in defaults::CATEGORIES {
            for (name, value) in map.entries() {
                table.insert(*category, *name, ThemeValue::scalar(*value));
            }
        }

        for (name, size) in defaults::FONT_SIZE.entries() {
            let value = match defaults::FONT_SIZE_LINE_HEIGHT.get(*name) {
                Some(line_height) => ThemeValue::list([*size, *line_height]),
                None => ThemeValue::scalar(*size),
            };
            table.insert("fontSize", *name, value);
        }

        table
    }

    /// 已存在的键原位替换，新键追加在末尾
    pub fn insert(
        &mut self,
        category: impl Into<String>,
        name: impl Into<String>,
        value: ThemeValue,
    ) -> Option<ThemeValue> {
        self.categories
            .entry(category.into())
            .or_default()
            .insert(name.into(), value)
    }

    /// 整体替换一个分类；分类原本存在时保持其位置
    pub fn replace_category(&mut self, category: impl Into<String>, entries: ThemeCategory) {
        self.categories.insert(category.into(), entries);
    }

    pub fn get(&self, category: &str, name: &str) -> Option<&ThemeValue> {
        self.categories.get(category)?.get(name)
    }

    /// 依次在多个分类中查找，返回第一个命中的值
    ///
    /// 例如 padding 先查 `padding`，再回落到 `spacing`。
    pub fn lookup(&self, categories: &[&str], name: &str) -> Option<&ThemeValue> {
        categories
            .iter()
            .find_map(|category| self.get(category, name))
    }

    pub fn category(&self, category: &str) -> Option<&ThemeCategory> {
        self.categories.get(category)
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &ThemeCategory)> {
        self.categories.iter().map(|(name, entries)| (name.as_str(), entries))
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
