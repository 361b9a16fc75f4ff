use crate::generator::{GeneratedRule, UtilityGenerator, UtilityMatch, UtilityPattern};
use crate::value::{resolve_color, resolve_font_size, resolve_scalar, ValueKind};
use crosswind_core::Declaration;
use crosswind_theme::ThemeTable;

/// 主题驱动的前缀工具定义
#[derive(Debug)]
pub(crate) struct ThemedDef {
    pub prefix: &'static str,
    pub group: &'static str,
    /// 查找顺序，如 `["padding", "spacing"]`
    pub categories: &'static [&'static str],
    pub properties: &'static [&'static str],
    pub kind: ValueKind,
    pub negative: bool,
    /// 同时注册不带值的字面量形式（取 `DEFAULT`），如 `rounded`
    pub bare: bool,
    pub selector_suffix: &'static str,
}

const fn def(
    prefix: &'static str,
    group: &'static str,
    categories: &'static [&'static str],
    properties: &'static [&'static str],
    kind: ValueKind,
) -> ThemedDef {
    ThemedDef {
        prefix,
        group,
        categories,
        properties,
        kind,
        negative: false,
        bare: false,
        selector_suffix: "",
    }
}

impl ThemedDef {
    const fn negative(mut self) -> Self {
        self.negative = true;
        self
    }

    const fn bare(mut self) -> Self {
        self.bare = true;
        self
    }

    const fn suffix(mut self, suffix: &'static str) -> Self {
        self.selector_suffix = suffix;
        self
    }
}

const PADDING: &[&str] = &["padding", "spacing"];
const MARGIN: &[&str] = &["margin", "spacing"];
const SPACE: &[&str] = &["space", "spacing"];
const GAP: &[&str] = &["gap", "spacing"];
const INSET: &[&str] = &["inset", "spacing"];
const SPACE_SIBLINGS: &str = " > :not([hidden]) ~ :not([hidden])";

/// 同一前缀下的定义按数组顺序尝试，第一个产出结果的生效
///
/// `text`、`border`、`font` 这类重载前缀依赖这一顺序：颜色在前。
pub(crate) static THEMED: &[ThemedDef] = &[
    // Padding
    def("p", "padding", PADDING, &["padding"], ValueKind::Length),
    def("px", "padding", PADDING, &["padding-left", "padding-right"], ValueKind::Length),
    def("py", "padding", PADDING, &["padding-top", "padding-bottom"], ValueKind::Length),
    def("pt", "padding", PADDING, &["padding-top"], ValueKind::Length),
    def("pr", "padding", PADDING, &["padding-right"], ValueKind::Length),
    def("pb", "padding", PADDING, &["padding-bottom"], ValueKind::Length),
    def("pl", "padding", PADDING, &["padding-left"], ValueKind::Length),
    // Margin
    def("m", "margin", MARGIN, &["margin"], ValueKind::Length).negative(),
    def("mx", "margin", MARGIN, &["margin-left", "margin-right"], ValueKind::Length).negative(),
    def("my", "margin", MARGIN, &["margin-top", "margin-bottom"], ValueKind::Length).negative(),
    def("mt", "margin", MARGIN, &["margin-top"], ValueKind::Length).negative(),
    def("mr", "margin", MARGIN, &["margin-right"], ValueKind::Length).negative(),
    def("mb", "margin", MARGIN, &["margin-bottom"], ValueKind::Length).negative(),
    def("ml", "margin", MARGIN, &["margin-left"], ValueKind::Length).negative(),
    // Space between
    def("space-x", "space", SPACE, &["margin-left"], ValueKind::Length)
        .negative()
        .suffix(SPACE_SIBLINGS),
    def("space-y", "space", SPACE, &["margin-top"], ValueKind::Length)
        .negative()
        .suffix(SPACE_SIBLINGS),
    // Gap
    def("gap", "gap", GAP, &["gap"], ValueKind::Length),
    def("gap-x", "gap", GAP, &["column-gap"], ValueKind::Length),
    def("gap-y", "gap", GAP, &["row-gap"], ValueKind::Length),
    // Sizing
    def("w", "width", &["width", "spacing"], &["width"], ValueKind::Length),
    def("h", "height", &["height", "spacing"], &["height"], ValueKind::Length),
    def("max-w", "maxWidth", &["maxWidth"], &["max-width"], ValueKind::Length),
    // Inset
    def("inset", "inset", INSET, &["inset"], ValueKind::Length).negative(),
    def("inset-x", "inset", INSET, &["left", "right"], ValueKind::Length).negative(),
    def("inset-y", "inset", INSET, &["top", "bottom"], ValueKind::Length).negative(),
    def("top", "inset", INSET, &["top"], ValueKind::Length).negative(),
    def("right", "inset", INSET, &["right"], ValueKind::Length).negative(),
    def("bottom", "inset", INSET, &["bottom"], ValueKind::Length).negative(),
    def("left", "inset", INSET, &["left"], ValueKind::Length).negative(),
    def("z", "zIndex", &["zIndex"], &["z-index"], ValueKind::Plain).negative(),
    // Colors
    def("bg", "backgroundColor", &["backgroundColor", "colors"], &["background-color"], ValueKind::Color),
    def("text", "textColor", &["textColor", "colors"], &["color"], ValueKind::Color),
    def("border", "borderColor", &["borderColor", "colors"], &["border-color"], ValueKind::Color),
    // Borders
    def("border", "borderWidth", &["borderWidth"], &["border-width"], ValueKind::Plain).bare(),
    def("border-t", "borderWidth", &["borderWidth"], &["border-top-width"], ValueKind::Plain).bare(),
    def("border-r", "borderWidth", &["borderWidth"], &["border-right-width"], ValueKind::Plain).bare(),
    def("border-b", "borderWidth", &["borderWidth"], &["border-bottom-width"], ValueKind::Plain).bare(),
    def("border-l", "borderWidth", &["borderWidth"], &["border-left-width"], ValueKind::Plain).bare(),
    def("rounded", "borderRadius", &["borderRadius"], &["border-radius"], ValueKind::Plain).bare(),
    // Typography
    def("font", "fontFamily", &["fontFamily"], &["font-family"], ValueKind::FontFamily),
    def("text", "fontSize", &["fontSize"], &["font-size"], ValueKind::FontSize),
    def("font", "fontWeight", &["fontWeight"], &["font-weight"], ValueKind::Plain),
    def("leading", "lineHeight", &["lineHeight"], &["line-height"], ValueKind::Plain),
    def("tracking", "letterSpacing", &["letterSpacing"], &["letter-spacing"], ValueKind::Plain)
        .negative(),
    def("opacity", "opacity", &["opacity"], &["opacity"], ValueKind::Plain),
];

/// 把 `ThemedDef` 变为生成器；`bare` 定义各生成一个字面量版本
pub(crate) struct ThemedUtility {
    pattern: UtilityPattern,
    def: &'static ThemedDef,
}

impl ThemedUtility {
    pub fn prefixed(def: &'static ThemedDef) -> Self {
        Self {
            pattern: UtilityPattern::prefix(def.prefix),
            def,
        }
    }

    pub fn bare(def: &'static ThemedDef) -> Self {
        Self {
            pattern: UtilityPattern::literal(def.prefix),
            def,
        }
    }

    fn declarations(&self, matched: &UtilityMatch, theme: &ThemeTable) -> Option<Vec<Declaration>> {
        let def = self.def;
        if matched.negative && !def.negative {
            return None;
        }

        let declarations = match def.kind {
            ValueKind::Color => {
                let color = resolve_color(matched, def.categories, theme)?;
                each_property(def.properties, &color)
            }
            ValueKind::FontSize => {
                let (size, line_height) = resolve_font_size(matched, def.categories, theme)?;
                let mut decls = vec![Declaration::new("font-size", size)];
                if let Some(line_height) = line_height {
                    decls.push(Declaration::new("line-height", line_height));
                }
                decls
            }
            kind => {
                let value = resolve_scalar(matched, def.categories, kind, theme)?;
                each_property(def.properties, &value)
            }
        };
        Some(declarations)
    }
}

fn each_property(properties: &[&str], value: &str) -> Vec<Declaration> {
    properties
        .iter()
        .map(|property| Declaration::new(*property, value))
        .collect()
}

impl UtilityGenerator for ThemedUtility {
    fn pattern(&self) -> &UtilityPattern {
        &self.pattern
    }

    fn group(&self) -> &str {
        self.def.group
    }

    fn generate(&self, matched: &UtilityMatch, theme: &ThemeTable) -> Vec<GeneratedRule> {
        match self.declarations(matched, theme) {
            Some(declarations) => vec![GeneratedRule::with_suffix(
                self.def.selector_suffix,
                declarations,
            )],
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn find(prefix: &str, group: &str) -> &'static ThemedDef {
        THEMED
            .iter()
            .find(|d| d.prefix == prefix && d.group == group)
            .unwrap()
    }

    fn matched(value: Option<&str>, negative: bool) -> UtilityMatch {
        UtilityMatch {
            utility: String::new(),
            negative,
            value: value.map(str::to_string),
        }
    }

    #[test]
    fn test_padding_axis() {
        let gen = ThemedUtility::prefixed(find("px", "padding"));
        let rules = gen.generate(&matched(Some("2"), false), &ThemeTable::defaults());
        assert_eq!(
            rules,
            vec![GeneratedRule::new(vec![
                Declaration::new("padding-left", "0.5rem"),
                Declaration::new("padding-right", "0.5rem"),
            ])]
        );
    }

    #[test]
    fn test_negative_only_for_groups_that_allow_it() {
        let theme = ThemeTable::defaults();
        let margin = ThemedUtility::prefixed(find("m", "margin"));
        let padding = ThemedUtility::prefixed(find("p", "padding"));
        assert_eq!(
            margin.generate(&matched(Some("4"), true), &theme)[0].declarations,
            vec![Declaration::new("margin", "-1rem")]
        );
        assert!(padding.generate(&matched(Some("4"), true), &theme).is_empty());
    }

    #[test]
    fn test_space_uses_sibling_suffix() {
        let gen = ThemedUtility::prefixed(find("space-y", "space"));
        let rules = gen.generate(&matched(Some("4"), false), &ThemeTable::defaults());
        assert_eq!(rules[0].selector_suffix, " > :not([hidden]) ~ :not([hidden])");
        assert_eq!(rules[0].declarations, vec![Declaration::new("margin-top", "1rem")]);
    }

    #[test]
    fn test_bare_reads_default_key() {
        let gen = ThemedUtility::bare(find("border", "borderWidth"));
        let rules = gen.generate(&matched(None, false), &ThemeTable::defaults());
        assert_eq!(rules[0].declarations, vec![Declaration::new("border-width", "1px")]);
    }

    #[test]
    fn test_font_size_with_line_height() {
        let gen = ThemedUtility::prefixed(find("text", "fontSize"));
        let rules = gen.generate(&matched(Some("lg"), false), &ThemeTable::defaults());
        assert_eq!(
            rules[0].declarations,
            vec![
                Declaration::new("font-size", "1.125rem"),
                Declaration::new("line-height", "1.75rem"),
            ]
        );
    }

    #[test]
    fn test_missing_theme_key_yields_nothing() {
        let gen = ThemedUtility::prefixed(find("bg", "backgroundColor"));
        assert!(gen
            .generate(&matched(Some("nope-500"), false), &ThemeTable::defaults())
            .is_empty());
    }
}
