//! CSS 输出：去重、分层排序和序列化

pub mod emit;
pub mod output;

pub use emit::{emit, serialize};
pub use output::{Attribution, CssOutput};
