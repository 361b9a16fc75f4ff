use crate::table::ThemeTable;
use crate::tree::ThemeTree;
use crosswind_core::{ConfigError, ThemeConfig};

/// 将覆盖树逐叶合并进默认主题
///
/// - 覆盖树中的叶子替换同名默认值，位置不变
/// - 默认中不存在的键追加在该分类末尾
/// - 默认中不存在的分类追加在末尾
/// - 其余默认值原样保留
pub fn resolve(defaults: &ThemeTable, overrides: &ThemeTree) -> ThemeTable {
    let mut resolved = defaults.clone();
    for (category, entries) in overrides.categories() {
        for (name, value) in entries {
            resolved.insert(category, name.clone(), value.clone());
        }
    }
    resolved
}

/// 整体替换分类，对应 `theme.<category>`
pub fn replace(defaults: &ThemeTable, replacements: &ThemeTree) -> ThemeTable {
    let mut resolved = defaults.clone();
    for (category, entries) in replacements.categories() {
        resolved.replace_category(category, entries.clone());
    }
    resolved
}

/// 从配置中的 `theme` 生成最终主题：先整体替换，再合并 `extend`
pub fn resolve_config(defaults: &ThemeTable, config: &ThemeConfig) -> Result<ThemeTable, ConfigError> {
    let replacements = ThemeTree::from_values(None, &config.replace)?;
    let extensions = ThemeTree::from_values(Some("extend"), &config.extend)?;

    let base = replace(defaults, &replacements);
    Ok(resolve(&base, &extensions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ThemeValue;
    use crosswind_core::UserConfig;
    use pretty_assertions::assert_eq;

    fn colors(pairs: &[(&str, &str)]) -> ThemeTable {
        let mut table = ThemeTable::new();
        for (name, value) in pairs {
            table.insert("colors", *name, ThemeValue::scalar(*value));
        }
        table
    }

    #[test]
    fn test_override_replaces_leaf_and_keeps_others() {
        let defaults = colors(&[("red", "#f00"), ("blue", "#00f")]);
        let mut overrides = ThemeTree::new();
        overrides.insert("colors", "red", ThemeValue::scalar("#e00"));

        let resolved = resolve(&defaults, &overrides);
        assert_eq!(resolved, colors(&[("red", "#e00"), ("blue", "#00f")]));
    }

    #[test]
    fn test_new_keys_append_in_order() {
        let defaults = colors(&[("red", "#f00")]);
        let mut overrides = ThemeTree::new();
        overrides.insert("colors", "brand", ThemeValue::scalar("#123"));
        overrides.insert("spacing", "128", ThemeValue::scalar("32rem"));

        let resolved = resolve(&defaults, &overrides);
        let keys: Vec<&String> = resolved.category("colors").unwrap().keys().collect();
        assert_eq!(keys, vec!["red", "brand"]);
        assert_eq!(
            resolved.get("spacing", "128"),
            Some(&ThemeValue::scalar("32rem"))
        );
    }

    #[test]
    fn test_empty_overrides_return_defaults() {
        let defaults = ThemeTable::defaults();
        assert_eq!(resolve(&defaults, &ThemeTree::new()), defaults);
    }

    #[test]
    fn test_replace_layer_drops_default_entries() {
        let config = UserConfig::from_json_str(
            r##"{ "theme": { "colors": { "brand": "#123456" } } }"##,
        )
        .unwrap();
        let theme = resolve_config(&ThemeTable::defaults(), &config.theme).unwrap();

        assert_eq!(theme.get("colors", "brand"), Some(&ThemeValue::scalar("#123456")));
        assert!(theme.get("colors", "red-500").is_none());
        assert!(theme.get("spacing", "4").is_some());
    }

    #[test]
    fn test_extend_font_family_mono() {
        let config = UserConfig::from_json_str(
            r#"{ "theme": { "extend": { "fontFamily": { "mono": ["Courier Prime", "monospace"] } } } }"#,
        )
        .unwrap();
        let theme = resolve_config(&ThemeTable::defaults(), &config.theme).unwrap();

        assert_eq!(
            theme.get("fontFamily", "mono"),
            Some(&ThemeValue::list(["Courier Prime", "monospace"]))
        );
        assert!(theme.get("fontFamily", "sans").is_some());
    }

    #[test]
    fn test_invalid_extend_value_is_config_error() {
        let config =
            UserConfig::from_json_str(r#"{ "theme": { "extend": { "spacing": { "x": null } } } }"#)
                .unwrap();
        let result = resolve_config(&ThemeTable::defaults(), &config.theme);
        assert!(matches!(result, Err(ConfigError::Theme { .. })));
    }
}
