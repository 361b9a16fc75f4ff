//! Crosswind 主题解析
//!
//! 默认主题（`ThemeTable::defaults()`）与配置中的 `theme` 覆盖合并，
//! 得到供工具生成器查询的 `ThemeTable`。

pub mod defaults;
pub mod resolve;
pub mod table;
pub mod tree;
pub mod value;

pub use resolve::{replace, resolve, resolve_config};
pub use table::{ThemeCategory, ThemeTable};
pub use tree::ThemeTree;
pub use value::ThemeValue;
