use crate::generator::{GeneratedRule, UtilityGenerator, UtilityMatch, UtilityPattern};
use crosswind_core::Declaration;
use crosswind_theme::ThemeTable;
use phf::phf_map;

/// 无值类的静态映射：class name → (group, css property, css value)
pub(crate) static STATIC_UTILITIES: phf::Map<&'static str, (&'static str, &'static str, &'static str)> = phf_map! {
    // Display
    "block" => ("display", "display", "block"),
    "inline-block" => ("display", "display", "inline-block"),
    "inline" => ("display", "display", "inline"),
    "flex" => ("display", "display", "flex"),
    "inline-flex" => ("display", "display", "inline-flex"),
    "grid" => ("display", "display", "grid"),
    "inline-grid" => ("display", "display", "inline-grid"),
    "contents" => ("display", "display", "contents"),
    "table" => ("display", "display", "table"),
    "hidden" => ("display", "display", "none"),

    // Position
    "static" => ("position", "position", "static"),
    "fixed" => ("position", "position", "fixed"),
    "absolute" => ("position", "position", "absolute"),
    "relative" => ("position", "position", "relative"),
    "sticky" => ("position", "position", "sticky"),

    // Flex direction
    "flex-row" => ("flexDirection", "flex-direction", "row"),
    "flex-row-reverse" => ("flexDirection", "flex-direction", "row-reverse"),
    "flex-col" => ("flexDirection", "flex-direction", "column"),
    "flex-col-reverse" => ("flexDirection", "flex-direction", "column-reverse"),

    // Flex wrap
    "flex-wrap" => ("flexWrap", "flex-wrap", "wrap"),
    "flex-wrap-reverse" => ("flexWrap", "flex-wrap", "wrap-reverse"),
    "flex-nowrap" => ("flexWrap", "flex-wrap", "nowrap"),

    // Items alignment
    "items-start" => ("alignItems", "align-items", "flex-start"),
    "items-end" => ("alignItems", "align-items", "flex-end"),
    "items-center" => ("alignItems", "align-items", "center"),
    "items-baseline" => ("alignItems", "align-items", "baseline"),
    "items-stretch" => ("alignItems", "align-items", "stretch"),

    // Justify content
    "justify-start" => ("justifyContent", "justify-content", "flex-start"),
    "justify-end" => ("justifyContent", "justify-content", "flex-end"),
    "justify-center" => ("justifyContent", "justify-content", "center"),
    "justify-between" => ("justifyContent", "justify-content", "space-between"),
    "justify-around" => ("justifyContent", "justify-content", "space-around"),
    "justify-evenly" => ("justifyContent", "justify-content", "space-evenly"),

    // Text align
    "text-left" => ("textAlign", "text-align", "left"),
    "text-center" => ("textAlign", "text-align", "center"),
    "text-right" => ("textAlign", "text-align", "right"),
    "text-justify" => ("textAlign", "text-align", "justify"),
    "text-start" => ("textAlign", "text-align", "start"),
    "text-end" => ("textAlign", "text-align", "end"),

    // Font style
    "italic" => ("fontStyle", "font-style", "italic"),
    "not-italic" => ("fontStyle", "font-style", "normal"),

    // Text decoration
    "underline" => ("textDecoration", "text-decoration-line", "underline"),
    "overline" => ("textDecoration", "text-decoration-line", "overline"),
    "line-through" => ("textDecoration", "text-decoration-line", "line-through"),
    "no-underline" => ("textDecoration", "text-decoration-line", "none"),
};

/// 单条声明的字面量工具，如 `flex` → `display: flex`
pub(crate) struct StaticUtility {
    pattern: UtilityPattern,
    group: &'static str,
    property: &'static str,
    value: &'static str,
}

impl StaticUtility {
    pub fn new(
        name: &'static str,
        group: &'static str,
        property: &'static str,
        value: &'static str,
    ) -> Self {
        Self {
            pattern: UtilityPattern::literal(name),
            group,
            property,
            value,
        }
    }
}

impl UtilityGenerator for StaticUtility {
    fn pattern(&self) -> &UtilityPattern {
        &self.pattern
    }

    fn group(&self) -> &str {
        self.group
    }

    fn generate(&self, matched: &UtilityMatch, _theme: &ThemeTable) -> Vec<GeneratedRule> {
        if matched.negative {
            return Vec::new();
        }
        vec![GeneratedRule::new(vec![Declaration::new(
            self.property,
            self.value,
        )])]
    }
}

/// 按名字排序后的静态工具，保证注册顺序稳定
pub(crate) fn static_utilities() -> Vec<StaticUtility> {
    let mut entries: Vec<_> = STATIC_UTILITIES.entries().collect();
    entries.sort_by_key(|(name, _)| **name);
    entries
        .into_iter()
        .map(|(&name, &(group, property, value))| StaticUtility::new(name, group, property, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_static_declaration() {
        let m = UtilityMatch {
            utility: "hidden".to_string(),
            negative: false,
            value: None,
        };
        let (group, property, value) = *STATIC_UTILITIES.get("hidden").unwrap();
        let gen = StaticUtility::new("hidden", group, property, value);
        assert_eq!(
            gen.generate(&m, &ThemeTable::new()),
            vec![GeneratedRule::new(vec![Declaration::new("display", "none")])]
        );
    }

    #[test]
    fn test_static_rejects_negative() {
        let m = UtilityMatch {
            utility: "flex".to_string(),
            negative: true,
            value: None,
        };
        let gen = StaticUtility::new("flex", "display", "display", "flex");
        assert!(gen.generate(&m, &ThemeTable::new()).is_empty());
    }

    #[test]
    fn test_static_utilities_sorted_by_name() {
        let names: Vec<String> = static_utilities()
            .iter()
            .map(|u| u.pattern().key().to_string())
            .take(3)
            .collect();
        assert_eq!(names, vec!["absolute", "block", "contents"]);
    }
}
