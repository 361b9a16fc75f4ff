use crosswind_core::{CandidateToken, Rule, ScanWarning};
use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;

/// 一条规则的来源
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attribution {
    pub tokens: Vec<CandidateToken>,
    pub files: Vec<PathBuf>,
}

/// 一次构建的产物
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CssOutput {
    /// 最终样式表，UTF-8，非空时以换行结尾
    pub text: String,
    /// 去重、排序后的规则，与 `text` 一一对应
    pub rules: Vec<Rule>,
    /// 规则键（`Rule::key`）→ 来源 token 和文件
    pub attribution: IndexMap<String, Attribution>,
    pub warnings: Vec<ScanWarning>,
    /// 没有匹配任何生成器的候选 token，按扫描顺序
    pub unmatched: Vec<CandidateToken>,
    /// `text` 的 blake3 摘要（hex）
    pub digest: String,
}

impl CssOutput {
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 根据 token → 文件表补全每条规则的来源文件
    pub fn with_sources(mut self, sources: &IndexMap<CandidateToken, Vec<PathBuf>>) -> Self {
        for attribution in self.attribution.values_mut() {
            let mut files: Vec<PathBuf> = Vec::new();
            for token in &attribution.tokens {
                for file in sources.get(token).into_iter().flatten() {
                    if !files.contains(file) {
                        files.push(file.clone());
                    }
                }
            }
            attribution.files = files;
        }
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<ScanWarning>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn with_unmatched(mut self, unmatched: Vec<CandidateToken>) -> Self {
        self.unmatched = unmatched;
        self
    }
}
