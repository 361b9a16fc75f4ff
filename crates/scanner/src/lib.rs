//! Crosswind 内容扫描
//!
//! glob 展开 → 并行读取 → 词法提取候选 token。
//! 不理解任何模板语言，提取结果是过度近似的。

pub mod extract;
pub mod pattern;
pub mod scan;

pub use extract::extract_tokens;
pub use pattern::{ContentPatterns, FileSet};
pub use scan::{scan, scan_files, FileOutcome, FileScan, Fingerprint, ScanReport};
