use crosswind_core::{CandidateToken, Rule};
use crosswind_scanner::{FileOutcome, Fingerprint, ScanReport};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// 增量构建缓存
///
/// - token 集合只增不减，直到 `Generator::reset` 或下一次完整构建
/// - 记录每个文件的内容指纹，内容未变的文件不重新提取
/// - 缓存每个 token 生成的规则；配置指纹变化时整体失效
#[derive(Debug, Clone, Default)]
pub struct BuildCache {
    config: Option<blake3::Hash>,
    /// token → 出现过的文件，按首次扫描顺序
    tokens: IndexMap<CandidateToken, Vec<PathBuf>>,
    fingerprints: HashMap<PathBuf, Fingerprint>,
    /// token → 规则；空列表表示未匹配
    rules: HashMap<CandidateToken, Vec<Rule>>,
}

impl BuildCache {
    pub(crate) fn new(config: blake3::Hash) -> Self {
        Self {
            config: Some(config),
            ..Self::default()
        }
    }

    /// 还没有任何一次成功的构建
    pub fn is_empty(&self) -> bool {
        self.config.is_none()
    }

    pub fn matches_config(&self, config: &blake3::Hash) -> bool {
        self.config.as_ref() == Some(config)
    }

    pub fn tokens(&self) -> &IndexMap<CandidateToken, Vec<PathBuf>> {
        &self.tokens
    }

    pub fn fingerprints(&self) -> &HashMap<PathBuf, Fingerprint> {
        &self.fingerprints
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// 并入一次扫描的结果
    ///
    /// 重新扫描过的文件只会追加 token，从不移除旧 token。
    pub(crate) fn absorb(&mut self, report: &ScanReport) {
        for file in &report.files {
            match &file.outcome {
                FileOutcome::Scanned {
                    fingerprint,
                    tokens,
                } => {
                    self.fingerprints.insert(file.path.clone(), *fingerprint);
                    for token in tokens {
                        let files = self.tokens.entry(token.clone()).or_default();
                        if !files.contains(&file.path) {
                            files.push(file.path.clone());
                        }
                    }
                }
                FileOutcome::Unchanged(_) => {}
                FileOutcome::Unreadable(_) => {
                    self.fingerprints.remove(&file.path);
                }
            }
        }
    }

    /// 文件已不存在；token 保留
    pub(crate) fn forget(&mut self, path: &Path) {
        self.fingerprints.remove(path);
    }

    pub(crate) fn rules_for(&self, token: &str) -> Option<&[Rule]> {
        self.rules.get(token).map(Vec::as_slice)
    }

    pub(crate) fn remember(&mut self, token: CandidateToken, rules: Vec<Rule>) {
        self.rules.insert(token, rules);
    }
}
