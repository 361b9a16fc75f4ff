use crate::extract::extract_tokens;
use crate::pattern::ContentPatterns;
use crosswind_core::{CancellationToken, CancelledError, CandidateToken, ScanWarning};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use tracing::{debug, warn};

/// 文件内容指纹
pub type Fingerprint = blake3::Hash;

/// 单个文件的扫描结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Scanned {
        fingerprint: Fingerprint,
        tokens: Vec<CandidateToken>,
    },
    /// 指纹与上次相同，未重新提取
    Unchanged(Fingerprint),
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileScan {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// 一次扫描的合并结果，顺序与输入文件顺序一致
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub files: Vec<FileScan>,
    pub warnings: Vec<ScanWarning>,
}

impl ScanReport {
    /// token → 出现的文件，按文件顺序、文件内首次出现顺序
    pub fn tokens(&self) -> IndexMap<CandidateToken, Vec<PathBuf>> {
        let mut tokens: IndexMap<CandidateToken, Vec<PathBuf>> = IndexMap::new();
        for file in &self.files {
            if let FileOutcome::Scanned { tokens: found, .. } = &file.outcome {
                for token in found {
                    tokens
                        .entry(token.clone())
                        .or_default()
                        .push(file.path.clone());
                }
            }
        }
        tokens
    }

    pub fn scanned_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::Scanned { .. }))
            .count()
    }
}

/// 展开 `content` 模式并扫描全部文件
pub fn scan(
    patterns: &ContentPatterns,
    cancel: &CancellationToken,
) -> Result<ScanReport, CancelledError> {
    let set = patterns.expand();
    cancel.check()?;

    let mut report = scan_files(&set.files, &HashMap::new(), cancel)?;
    let mut warnings = set.warnings;
    warnings.append(&mut report.warnings);
    report.warnings = warnings;
    Ok(report)
}

/// 并行读取并提取 `paths`
///
/// 每个工作线程从共享下标中领取文件，领取前检查取消信号；
/// 各线程的结果最后按文件下标合并，输出顺序与线程调度无关。
/// `known` 中指纹未变的文件跳过提取。
pub fn scan_files(
    paths: &[PathBuf],
    known: &HashMap<PathBuf, Fingerprint>,
    cancel: &CancellationToken,
) -> Result<ScanReport, CancelledError> {
    if paths.is_empty() {
        return Ok(ScanReport::default());
    }

    let workers = thread::available_parallelism()
        .map_or(1, NonZeroUsize::get)
        .min(paths.len());
    let next = AtomicUsize::new(0);
    let next = &next;

    let shards: Vec<Vec<(usize, FileOutcome)>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                scope.spawn(move || {
                    let mut local = Vec::new();
                    while !cancel.is_cancelled() {
                        let index = next.fetch_add(1, Ordering::Relaxed);
                        let Some(path) = paths.get(index) else {
                            break;
                        };
                        local.push((index, scan_file(path, known.get(path))));
                    }
                    local
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(local) => local,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    });

    cancel.check()?;

    let mut slots: Vec<Option<FileOutcome>> = vec![None; paths.len()];
    for (index, outcome) in shards.into_iter().flatten() {
        slots[index] = Some(outcome);
    }

    let mut report = ScanReport::default();
    for (path, outcome) in paths.iter().zip(slots) {
        let Some(outcome) = outcome else {
            continue;
        };
        if let FileOutcome::Unreadable(reason) = &outcome {
            warn!(path = %path.display(), %reason, "skipped unreadable file");
            report
                .warnings
                .push(ScanWarning::unreadable(path.display().to_string(), reason.clone()));
        }
        report.files.push(FileScan {
            path: path.clone(),
            outcome,
        });
    }

    debug!(
        files = paths.len(),
        scanned = report.scanned_count(),
        workers,
        "scanned content files"
    );
    Ok(report)
}

fn scan_file(path: &Path, known: Option<&Fingerprint>) -> FileOutcome {
    match fs::read(path) {
        Ok(bytes) => {
            let fingerprint = blake3::hash(&bytes);
            if known == Some(&fingerprint) {
                FileOutcome::Unchanged(fingerprint)
            } else {
                FileOutcome::Scanned {
                    fingerprint,
                    tokens: extract_tokens(&bytes),
                }
            }
        }
        Err(err) => FileOutcome::Unreadable(err.to_string()),
    }
}
