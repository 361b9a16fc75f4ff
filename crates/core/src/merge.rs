use crate::types::Declaration;
use indexmap::map::Entry;
use indexmap::IndexMap;

/// 把多份生成结果的声明合成一条规则
///
/// 内置工具与插件同时命中同一 token、且选择器后缀相同时使用。
/// 同名属性取最后出现的值，位置保留在首次出现处。
pub fn merge_declarations<I>(declarations: I) -> Vec<Declaration>
where
    I: IntoIterator<Item = Declaration>,
{
    let mut merged: IndexMap<String, Declaration> = IndexMap::new();

    for declaration in declarations {
        match merged.entry(declaration.property.clone()) {
            Entry::Occupied(mut slot) => slot.get_mut().value = declaration.value,
            Entry::Vacant(slot) => {
                slot.insert(declaration);
            }
        }
    }

    merged.into_values().collect()
}
