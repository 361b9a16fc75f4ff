//! 工具值解析：主题键、任意值、负值和颜色透明度

use crate::generator::UtilityMatch;
use crosswind_theme::{ThemeTable, ThemeValue};
use palette::Srgb;

/// 值的种类决定任意值的接受规则和声明的写法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// 长度类（spacing、width、inset ...）
    Length,
    /// 颜色，支持 `/50` 透明度修饰
    Color,
    /// 字体栈，列表值以逗号连接
    FontFamily,
    /// `[size, lineHeight]`
    FontSize,
    /// 单个值原样输出
    Plain,
}

/// 未带类型提示的任意值是否看起来像颜色
fn looks_like_color(content: &str) -> bool {
    content.starts_with('#')
        || ["rgb(", "rgba(", "hsl(", "hsla(", "oklch(", "oklab("]
            .iter()
            .any(|prefix| content.starts_with(prefix))
}

/// 任意值 `[...]` 的内容；类型不符时为 None
fn arbitrary_content(raw: &str, kind: ValueKind) -> Option<String> {
    let arb = crosswind_tw_parse::ArbitraryValue::parse(raw)?;
    let (hint, content) = match arb.type_hint() {
        Some((hint, rest)) => (Some(hint), rest.to_string()),
        None => (None, arb.content.clone()),
    };

    let is_color = match hint {
        Some(hint) => hint == "color",
        None => looks_like_color(&content),
    };
    (is_color == (kind == ValueKind::Color)).then_some(content)
}

/// 依次在 `categories` 中查找值；字面量模式查 `DEFAULT`
pub fn lookup<'t>(
    matched: &UtilityMatch,
    key: Option<&str>,
    categories: &[&str],
    theme: &'t ThemeTable,
) -> Option<&'t ThemeValue> {
    let key = key.or(matched.value()).unwrap_or("DEFAULT");
    theme.lookup(categories, key)
}

/// 解析为单个 CSS 值，处理任意值和负号
pub fn resolve_scalar(
    matched: &UtilityMatch,
    categories: &[&str],
    kind: ValueKind,
    theme: &ThemeTable,
) -> Option<String> {
    let raw = matched.value();
    let value = match raw.filter(|v| v.starts_with('[')) {
        Some(raw) => arbitrary_content(raw, kind)?,
        None => {
            let found = lookup(matched, None, categories, theme)?;
            match kind {
                ValueKind::FontFamily => found.to_css_list(),
                _ => found.first()?.to_string(),
            }
        }
    };

    if matched.negative {
        Some(negate(&value))
    } else {
        Some(value)
    }
}

/// `fontSize`：返回 (font-size, line-height)
pub fn resolve_font_size(
    matched: &UtilityMatch,
    categories: &[&str],
    theme: &ThemeTable,
) -> Option<(String, Option<String>)> {
    if let Some(raw) = matched.value().filter(|v| v.starts_with('[')) {
        return arbitrary_content(raw, ValueKind::FontSize).map(|size| (size, None));
    }
    let found = lookup(matched, None, categories, theme)?;
    Some((
        found.first()?.to_string(),
        found.second().map(str::to_string),
    ))
}

/// 颜色值，带 `/alpha` 时转为 `rgb(r g b / a)`
pub fn resolve_color(
    matched: &UtilityMatch,
    categories: &[&str],
    theme: &ThemeTable,
) -> Option<String> {
    let (color_key, alpha_key) = matched.split_alpha()?;

    let color = if color_key.starts_with('[') {
        arbitrary_content(color_key, ValueKind::Color)?
    } else {
        lookup(matched, Some(color_key), categories, theme)?
            .as_scalar()?
            .to_string()
    };

    match alpha_key {
        None => Some(color),
        Some(alpha_key) => {
            let alpha = match crosswind_tw_parse::ArbitraryValue::parse(alpha_key) {
                Some(arb) => arb.content,
                None => theme.get("opacity", alpha_key)?.as_scalar()?.to_string(),
            };
            with_alpha(&color, &alpha)
        }
    }
}

/// 给 hex 颜色加透明度；非 hex 颜色（`currentColor`、`var(...)`）无法处理，返回 None
pub fn with_alpha(color: &str, alpha: &str) -> Option<String> {
    let rgb: Srgb<u8> = color.trim().parse().ok()?;
    Some(format!(
        "rgb({} {} {} / {})",
        rgb.red, rgb.green, rgb.blue, alpha
    ))
}

/// 负值：`1rem` → `-1rem`；零值保持不变
pub fn negate(value: &str) -> String {
    if let Some(positive) = value.strip_prefix('-') {
        return positive.to_string();
    }
    if value.trim_start_matches('0').trim_end_matches("px").is_empty() {
        return value.to_string();
    }
    if value.starts_with("calc(") || value.starts_with("var(") {
        return format!("calc({} * -1)", value);
    }
    format!("-{}", value)
}
