//! 修饰符解析与规则包裹
//!
//! `expand` 把 `md:dark:hover:bg-black` 拆成基础工具和修饰符序列，
//! `wrap` 再把生成器的声明包进最终选择器和 at-rule 链。
//! 第一个修饰符是最外层。

use crate::generator::GeneratedRule;
use crosswind_core::{class_selector, DarkMode, Layer, Rule};
use crosswind_theme::ThemeTable;
use crosswind_tw_parse::{parse_candidate, ParseError, ParsedCandidate};
use phf::phf_map;

/// Variant name → CSS pseudo-class（含前导 `:`）
static PSEUDO_CLASSES: phf::Map<&'static str, &'static str> = phf_map! {
    "hover" => ":hover",
    "focus" => ":focus",
    "focus-within" => ":focus-within",
    "focus-visible" => ":focus-visible",
    "active" => ":active",
    "visited" => ":visited",
    "target" => ":target",
    // Shorthand → full CSS pseudo-class
    "first" => ":first-child",
    "last" => ":last-child",
    "only" => ":only-child",
    "odd" => ":nth-child(odd)",
    "even" => ":nth-child(even)",
    "first-of-type" => ":first-of-type",
    "last-of-type" => ":last-of-type",
    "empty" => ":empty",
    // Form states
    "disabled" => ":disabled",
    "enabled" => ":enabled",
    "checked" => ":checked",
    "indeterminate" => ":indeterminate",
    "required" => ":required",
    "invalid" => ":invalid",
    "valid" => ":valid",
    "placeholder-shown" => ":placeholder-shown",
    "read-only" => ":read-only",
};

/// Variant name → CSS pseudo-element
static PSEUDO_ELEMENTS: phf::Map<&'static str, &'static str> = phf_map! {
    "before" => "::before",
    "after" => "::after",
    "placeholder" => "::placeholder",
    "selection" => "::selection",
    "marker" => "::marker",
    "file" => "::file-selector-button",
    "first-line" => "::first-line",
    "first-letter" => "::first-letter",
};

/// 媒体特性修饰符，排在状态层
static MEDIA_STATES: phf::Map<&'static str, &'static str> = phf_map! {
    "motion-safe" => "@media (prefers-reduced-motion: no-preference)",
    "motion-reduce" => "@media (prefers-reduced-motion: reduce)",
    "print" => "@media print",
    "portrait" => "@media (orientation: portrait)",
    "landscape" => "@media (orientation: landscape)",
    "contrast-more" => "@media (prefers-contrast: more)",
    "contrast-less" => "@media (prefers-contrast: less)",
};

const DARK_MEDIA: &str = "@media (prefers-color-scheme: dark)";

/// 单个修饰符
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    Dark,
    /// 响应式断点；`rank` 从 1 开始按断点升序
    Screen { name: String, min_width: String, rank: usize },
    PseudoClass(&'static str),
    PseudoElement(&'static str),
    /// `group-hover` → `.group:hover `
    Group(&'static str),
    /// `peer-focus` → `.peer:focus ~ `
    Peer(&'static str),
    Media(&'static str),
}

impl Modifier {
    fn is_state(&self) -> bool {
        !matches!(self, Modifier::Dark | Modifier::Screen { .. })
    }
}

/// 按书写顺序排列的修饰符
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantSpec {
    pub modifiers: Vec<Modifier>,
}

impl VariantSpec {
    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    pub fn has_dark(&self) -> bool {
        self.modifiers.contains(&Modifier::Dark)
    }

    /// 断点序号，没有断点时为 0
    pub fn screen_rank(&self) -> usize {
        self.modifiers
            .iter()
            .find_map(|m| match m {
                Modifier::Screen { rank, .. } => Some(*rank),
                _ => None,
            })
            .unwrap_or(0)
    }

    /// 输出层：dark > 状态 > 断点 > 基础
    pub fn layer(&self) -> Layer {
        if self.has_dark() {
            Layer::Dark
        } else if self.modifiers.iter().any(Modifier::is_state) {
            Layer::State
        } else if self.screen_rank() > 0 {
            Layer::Responsive
        } else {
            Layer::Base
        }
    }
}

/// `expand` 的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expanded {
    pub candidate: ParsedCandidate,
    pub spec: VariantSpec,
}

/// token 被整体丢弃的原因（不是错误，仅用于 trace 日志）
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    Parse(ParseError),
    UnknownVariant(String),
    MultipleBreakpoints,
    MultiplePseudoElements,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::Parse(err) => write!(f, "{}", err),
            Rejection::UnknownVariant(name) => write!(f, "unknown variant '{}'", name),
            Rejection::MultipleBreakpoints => write!(f, "more than one breakpoint variant"),
            Rejection::MultiplePseudoElements => write!(f, "more than one pseudo-element variant"),
        }
    }
}

/// 断点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub name: String,
    pub min_width: String,
    pub rank: usize,
}

/// 变体引擎：持有断点表和暗色策略，构建后只读
#[derive(Debug, Clone)]
pub struct VariantEngine {
    screens: Vec<Screen>,
    dark_mode: DarkMode,
}

impl VariantEngine {
    pub fn new(theme: &ThemeTable, dark_mode: DarkMode) -> Self {
        Self {
            screens: ordered_screens(theme),
            dark_mode,
        }
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn dark_mode(&self) -> &DarkMode {
        &self.dark_mode
    }

    /// 拆分修饰符；任一修饰符未知则整个 token 不匹配
    pub fn expand(&self, token: &str) -> Result<Expanded, Rejection> {
        let candidate = parse_candidate(token).map_err(Rejection::Parse)?;

        let mut modifiers = Vec::with_capacity(candidate.variants.len());
        let mut screens = 0;
        let mut pseudo_elements = 0;

        for name in &candidate.variants {
            let modifier = self
                .resolve_modifier(name)
                .ok_or_else(|| Rejection::UnknownVariant(name.clone()))?;
            match modifier {
                Modifier::Screen { .. } => screens += 1,
                Modifier::PseudoElement(_) => pseudo_elements += 1,
                _ => {}
            }
            modifiers.push(modifier);
        }

        if screens > 1 {
            return Err(Rejection::MultipleBreakpoints);
        }
        if pseudo_elements > 1 {
            return Err(Rejection::MultiplePseudoElements);
        }

        Ok(Expanded {
            candidate,
            spec: VariantSpec { modifiers },
        })
    }

    fn resolve_modifier(&self, name: &str) -> Option<Modifier> {
        if name == "dark" {
            return Some(Modifier::Dark);
        }
        if let Some(screen) = self.screens.iter().find(|s| s.name == name) {
            return Some(Modifier::Screen {
                name: screen.name.clone(),
                min_width: screen.min_width.clone(),
                rank: screen.rank,
            });
        }
        if let Some(pseudo) = PSEUDO_CLASSES.get(name).copied() {
            return Some(Modifier::PseudoClass(pseudo));
        }
        if let Some(element) = PSEUDO_ELEMENTS.get(name).copied() {
            return Some(Modifier::PseudoElement(element));
        }
        if let Some(media) = MEDIA_STATES.get(name).copied() {
            return Some(Modifier::Media(media));
        }
        if let Some(state) = name.strip_prefix("group-") {
            return PSEUDO_CLASSES.get(state).copied().map(Modifier::Group);
        }
        if let Some(state) = name.strip_prefix("peer-") {
            return PSEUDO_CLASSES.get(state).copied().map(Modifier::Peer);
        }
        None
    }

    /// 生成最终规则
    ///
    /// `darkMode: off` 下带 `dark` 的 token 返回 None。
    pub fn wrap(&self, token: &str, generated: &GeneratedRule, spec: &VariantSpec) -> Option<Rule> {
        if generated.declarations.is_empty() {
            return None;
        }

        let mut at_rules = Vec::new();
        let mut ancestors = String::new();
        let mut pseudo_classes = String::new();
        let mut pseudo_element = "";

        for modifier in &spec.modifiers {
            match modifier {
                Modifier::Dark => match &self.dark_mode {
                    DarkMode::Off => return None,
                    DarkMode::Media => at_rules.push(DARK_MEDIA.to_string()),
                    DarkMode::Class { selector } => {
                        ancestors.push_str(selector);
                        ancestors.push(' ');
                    }
                },
                Modifier::Screen { min_width, .. } => {
                    at_rules.push(format!("@media (min-width: {})", min_width));
                }
                Modifier::PseudoClass(pseudo) => pseudo_classes.push_str(pseudo),
                Modifier::PseudoElement(element) => pseudo_element = *element,
                Modifier::Group(pseudo) => {
                    ancestors.push_str(".group");
                    ancestors.push_str(pseudo);
                    ancestors.push(' ');
                }
                Modifier::Peer(pseudo) => {
                    ancestors.push_str(".peer");
                    ancestors.push_str(pseudo);
                    ancestors.push_str(" ~ ");
                }
                Modifier::Media(query) => at_rules.push(query.to_string()),
            }
        }

        let selector = format!(
            "{}{}{}{}{}",
            ancestors,
            class_selector(token),
            pseudo_classes,
            generated.selector_suffix,
            pseudo_element
        );

        Some(Rule {
            selector,
            at_rules,
            declarations: generated.declarations.clone(),
            layer: spec.layer(),
            screen_rank: spec.screen_rank(),
            tokens: vec![token.to_string()],
        })
    }
}

/// 断点按最小宽度升序；任一值无法换算为 px 时保持主题中的声明顺序
fn ordered_screens(theme: &ThemeTable) -> Vec<Screen> {
    let mut entries: Vec<(String, String)> = theme
        .category("screens")
        .map(|screens| {
            screens
                .iter()
                .filter_map(|(name, value)| Some((name.clone(), value.first()?.to_string())))
                .collect()
        })
        .unwrap_or_default();

    let widths: Option<Vec<f64>> = entries.iter().map(|(_, value)| to_px(value)).collect();
    if let Some(widths) = widths {
        let mut indexed: Vec<(f64, (String, String))> = widths.into_iter().zip(entries).collect();
        indexed.sort_by(|a, b| a.0.total_cmp(&b.0));
        entries = indexed.into_iter().map(|(_, entry)| entry).collect();
    }

    entries
        .into_iter()
        .enumerate()
        .map(|(i, (name, min_width))| Screen {
            name,
            min_width,
            rank: i + 1,
        })
        .collect()
}

fn to_px(value: &str) -> Option<f64> {
    let value = value.trim();
    if let Some(px) = value.strip_suffix("px") {
        return px.trim().parse().ok();
    }
    if let Some(rem) = value.strip_suffix("rem").or_else(|| value.strip_suffix("em")) {
        return rem.trim().parse::<f64>().ok().map(|n| n * 16.0);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crosswind_core::Declaration;
    use crosswind_theme::ThemeValue;
    use pretty_assertions::assert_eq;

    fn engine(dark_mode: DarkMode) -> VariantEngine {
        VariantEngine::new(&ThemeTable::defaults(), dark_mode)
    }

    fn black() -> GeneratedRule {
        GeneratedRule::new(vec![Declaration::new("background-color", "#000")])
    }

    fn wrap(engine: &VariantEngine, token: &str) -> Option<Rule> {
        let expanded = engine.expand(token).unwrap();
        engine.wrap(token, &black(), &expanded.spec)
    }

    #[test]
    fn test_expand_splits_base_and_modifiers() {
        let expanded = engine(DarkMode::Media).expand("md:hover:bg-black").unwrap();
        assert_eq!(expanded.candidate.utility, "bg-black");
        assert_eq!(
            expanded.spec.modifiers,
            vec![
                Modifier::Screen {
                    name: "md".to_string(),
                    min_width: "768px".to_string(),
                    rank: 2
                },
                Modifier::PseudoClass(":hover"),
            ]
        );
    }

    #[test]
    fn test_unknown_variant_rejects_token() {
        assert_eq!(
            engine(DarkMode::Media).expand("wat:bg-black"),
            Err(Rejection::UnknownVariant("wat".to_string()))
        );
    }

    #[test]
    fn test_two_breakpoints_rejected() {
        assert_eq!(
            engine(DarkMode::Media).expand("sm:md:p-4"),
            Err(Rejection::MultipleBreakpoints)
        );
    }

    #[test]
    fn test_dark_media_strategy() {
        let rule = wrap(&engine(DarkMode::Media), "dark:bg-black").unwrap();
        assert_eq!(rule.selector, ".dark\\:bg-black");
        assert_eq!(rule.at_rules, vec!["@media (prefers-color-scheme: dark)"]);
        assert_eq!(rule.layer, Layer::Dark);
    }

    #[test]
    fn test_dark_class_strategy() {
        let rule = wrap(&engine(DarkMode::class()), "dark:bg-black").unwrap();
        assert_eq!(rule.selector, ".dark .dark\\:bg-black");
        assert!(rule.at_rules.is_empty());

        let custom = DarkMode::Class {
            selector: "[data-theme=dark]".to_string(),
        };
        let rule = wrap(&engine(custom), "dark:bg-black").unwrap();
        assert_eq!(rule.selector, "[data-theme=dark] .dark\\:bg-black");
    }

    #[test]
    fn test_dark_off_drops_token() {
        assert!(wrap(&engine(DarkMode::Off), "dark:bg-black").is_none());
        assert!(wrap(&engine(DarkMode::Off), "bg-black").is_some());
    }

    #[test]
    fn test_first_modifier_is_outermost() {
        let rule = wrap(&engine(DarkMode::Media), "md:dark:bg-black").unwrap();
        assert_eq!(
            rule.at_rules,
            vec!["@media (min-width: 768px)", "@media (prefers-color-scheme: dark)"]
        );

        let rule = wrap(&engine(DarkMode::class()), "dark:group-hover:bg-black").unwrap();
        assert_eq!(rule.selector, ".dark .group:hover .dark\\:group-hover\\:bg-black");
    }

    #[test]
    fn test_pseudo_selectors_order() {
        let engine = engine(DarkMode::Media);
        let expanded = engine.expand("before:hover:space-x-4").unwrap();
        let generated = GeneratedRule::with_suffix(
            " > :not([hidden]) ~ :not([hidden])",
            vec![Declaration::new("margin-left", "1rem")],
        );
        let rule = engine
            .wrap("before:hover:space-x-4", &generated, &expanded.spec)
            .unwrap();
        assert_eq!(
            rule.selector,
            ".before\\:hover\\:space-x-4:hover > :not([hidden]) ~ :not([hidden])::before"
        );
        assert_eq!(rule.layer, Layer::State);
    }

    #[test]
    fn test_peer_variant() {
        let rule = wrap(&engine(DarkMode::Media), "peer-focus:bg-black").unwrap();
        assert_eq!(rule.selector, ".peer:focus ~ .peer-focus\\:bg-black");
    }

    #[test]
    fn test_layers_and_ranks() {
        let engine = engine(DarkMode::Media);
        let base = wrap(&engine, "bg-black").unwrap();
        let lg = wrap(&engine, "lg:bg-black").unwrap();
        let print = wrap(&engine, "print:bg-black").unwrap();
        assert_eq!((base.layer, base.screen_rank), (Layer::Base, 0));
        assert_eq!((lg.layer, lg.screen_rank), (Layer::Responsive, 3));
        assert_eq!(print.layer, Layer::State);
        assert_eq!(print.at_rules, vec!["@media print"]);
    }

    #[test]
    fn test_screens_sorted_by_width() {
        let mut theme = ThemeTable::new();
        theme.insert("screens", "wide", ThemeValue::scalar("90rem"));
        theme.insert("screens", "tablet", ThemeValue::scalar("640px"));
        let engine = VariantEngine::new(&theme, DarkMode::Media);
        let names: Vec<&str> = engine.screens().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["tablet", "wide"]);
    }

    #[test]
    fn test_unparseable_screens_keep_declaration_order() {
        let mut theme = ThemeTable::new();
        theme.insert("screens", "b", ThemeValue::scalar("60ch"));
        theme.insert("screens", "a", ThemeValue::scalar("10px"));
        let engine = VariantEngine::new(&theme, DarkMode::Media);
        let ranks: Vec<(&str, usize)> =
            engine.screens().iter().map(|s| (s.name.as_str(), s.rank)).collect();
        assert_eq!(ranks, vec![("b", 1), ("a", 2)]);
    }
}
