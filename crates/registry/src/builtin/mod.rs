//! 内置工具组
//!
//! 每个组对应 `corePlugins` 中的一个名字，默认全部启用。

mod statics;
mod themed;

use crate::registry::UtilityRegistry;
use statics::static_utilities;
use themed::{ThemedUtility, THEMED};

/// 所有内置组名，按文档顺序
pub const GROUPS: &[&str] = &[
    "display",
    "position",
    "flexDirection",
    "flexWrap",
    "alignItems",
    "justifyContent",
    "textAlign",
    "fontStyle",
    "textDecoration",
    "padding",
    "margin",
    "space",
    "gap",
    "width",
    "height",
    "maxWidth",
    "inset",
    "zIndex",
    "backgroundColor",
    "textColor",
    "borderColor",
    "borderWidth",
    "borderRadius",
    "fontFamily",
    "fontSize",
    "fontWeight",
    "lineHeight",
    "letterSpacing",
    "opacity",
];

pub fn is_builtin_group(name: &str) -> bool {
    GROUPS.contains(&name)
}

/// 注册全部内置工具，返回实际注册（未被 corePlugins 禁用）的数量
pub fn register_builtins(registry: &mut UtilityRegistry) -> usize {
    let mut registered = 0;

    for utility in static_utilities() {
        registered += usize::from(registry.register(utility, true));
    }

    for def in THEMED {
        if def.bare {
            registered += usize::from(registry.register(ThemedUtility::bare(def), true));
        }
        registered += usize::from(registry.register(ThemedUtility::prefixed(def), true));
    }

    registered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_definition_belongs_to_a_known_group() {
        for def in THEMED {
            assert!(is_builtin_group(def.group), "unknown group {}", def.group);
        }
        for (group, _, _) in statics::STATIC_UTILITIES.values() {
            assert!(is_builtin_group(group), "unknown group {}", group);
        }
    }

    #[test]
    fn test_every_group_has_generators() {
        for group in GROUPS {
            let themed = THEMED.iter().any(|d| d.group == *group);
            let fixed = statics::STATIC_UTILITIES
                .values()
                .any(|(g, _, _)| g == group);
            assert!(themed || fixed, "group {} has no generators", group);
        }
    }
}
