use crosswind_core::{ConfigError, ScanWarning};
use globset::{GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{trace, warn};

struct IncludePattern {
    raw: String,
    matcher: GlobMatcher,
    /// 遍历起点：模式中第一个通配段之前的目录
    root: PathBuf,
    absolute: bool,
}

/// 编译后的 `content` 模式
///
/// 普通模式按顺序展开；`!` 开头的模式从所有结果中排除，与它在列表中的位置无关。
/// `base_dir` 在编译时转为绝对路径。
pub struct ContentPatterns {
    base_dir: PathBuf,
    includes: Vec<IncludePattern>,
    excludes: GlobSet,
}

/// 展开后的文件列表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    /// 模式顺序，模式内按路径字母序，跨模式去重
    pub files: Vec<PathBuf>,
    pub warnings: Vec<ScanWarning>,
}

impl ContentPatterns {
    /// 在扫描开始前编译全部模式；任何一个无效即为配置错误
    pub fn compile(patterns: &[String], base_dir: &Path) -> Result<Self, ConfigError> {
        let base_dir = std::path::absolute(base_dir).unwrap_or_else(|_| base_dir.to_path_buf());
        let mut includes = Vec::new();
        let mut excludes = GlobSetBuilder::new();

        for raw in patterns {
            let (negated, pattern) = match raw.strip_prefix('!') {
                Some(rest) => (true, rest),
                None => (false, raw.as_str()),
            };
            let pattern = normalize(pattern);
            if pattern.is_empty() {
                return Err(pattern_error(raw, "empty pattern"));
            }

            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|err| pattern_error(raw, &err.to_string()))?;

            if negated {
                excludes.add(glob);
                continue;
            }

            let absolute = Path::new(pattern).is_absolute();
            let prefix = literal_prefix(pattern);
            let root = if absolute {
                PathBuf::from(prefix)
            } else {
                base_dir.join(prefix)
            };

            includes.push(IncludePattern {
                raw: raw.clone(),
                matcher: glob.compile_matcher(),
                root,
                absolute,
            });
        }

        let excludes = excludes
            .build()
            .map_err(|err| pattern_error(&patterns.join(", "), &err.to_string()))?;

        Ok(Self {
            base_dir,
            includes,
            excludes,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn is_empty(&self) -> bool {
        self.includes.is_empty()
    }

    /// 把外部给出的路径（相对 `base_dir` 或绝对）转成与展开结果相同的绝对形式
    pub fn resolve(&self, path: &Path) -> PathBuf {
        let joined = self.base_dir.join(path);
        std::path::absolute(&joined).unwrap_or(joined)
    }

    /// 单个路径是否属于扫描范围（增量构建用来过滤变更列表）
    pub fn matches(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.base_dir).ok();
        self.includes.iter().any(|include| {
            let candidate = if include.absolute { Some(path) } else { relative };
            candidate.is_some_and(|candidate| {
                include.matcher.is_match(candidate) && !self.excludes.is_match(candidate)
            })
        })
    }

    /// 展开为文件列表；没有匹配任何文件的模式记一条警告
    pub fn expand(&self) -> FileSet {
        let mut set = FileSet::default();
        let mut seen: HashSet<PathBuf> = HashSet::new();

        for include in &self.includes {
            let matched = self.walk(include, &mut set.warnings);
            trace!(pattern = %include.raw, files = matched.len(), "expanded content pattern");

            if matched.is_empty() {
                warn!(pattern = %include.raw, "content pattern matched no files");
                set.warnings.push(ScanWarning::no_matches(include.raw.clone()));
                continue;
            }

            for path in matched {
                let key = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
                if seen.insert(key) {
                    set.files.push(path);
                }
            }
        }

        set
    }

    /// 遍历出错的目录项记为 Unreadable 警告后跳过；
    /// 符号链接按文件处理，失效的链接在读取阶段报告。
    fn walk(&self, include: &IncludePattern, warnings: &mut Vec<ScanWarning>) -> Vec<PathBuf> {
        if !include.root.exists() {
            return Vec::new();
        }

        let mut builder = WalkBuilder::new(&include.root);
        builder.standard_filters(false).follow_links(false);

        let mut matched = Vec::new();
        for entry in builder.build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    record_walk_error(&err, &include.root, warnings);
                    continue;
                }
            };
            let path = entry.path();
            let readable = entry
                .file_type()
                .is_some_and(|ft| ft.is_file() || (ft.is_symlink() && !path.is_dir()));
            if !readable {
                continue;
            }

            let candidate = if include.absolute {
                path
            } else {
                match path.strip_prefix(&self.base_dir) {
                    Ok(relative) => relative,
                    Err(_) => continue,
                }
            };

            if include.matcher.is_match(candidate) && !self.excludes.is_match(candidate) {
                matched.push(path.to_path_buf());
            }
        }

        matched.sort();
        matched
    }
}

fn record_walk_error(err: &ignore::Error, root: &Path, warnings: &mut Vec<ScanWarning>) {
    let target = error_path(err).unwrap_or(root).display().to_string();
    warn!(path = %target, %err, "skipped unreadable content entry");
    warnings.push(ScanWarning::unreadable(target, err.to_string()));
}

/// 错误链里最内层的路径
fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, err } => error_path(err).or(Some(path.as_path())),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        _ => None,
    }
}

/// 去掉前导 `./`
fn normalize(pattern: &str) -> &str {
    let mut pattern = pattern.trim();
    while let Some(rest) = pattern.strip_prefix("./") {
        pattern = rest;
    }
    pattern
}

/// 第一个含通配符的路径段之前的部分
///
/// - `templates/**/*.html` → `templates`
/// - `src/index.html` → `src/index.html`
/// - `*.html` → ``
fn literal_prefix(pattern: &str) -> &str {
    match pattern.find(['*', '?', '[', '{']) {
        None => pattern,
        Some(first_glob) => match pattern[..first_glob].rfind('/') {
            Some(slash) => &pattern[..slash],
            None => "",
        },
    }
}

fn pattern_error(pattern: &str, reason: &str) -> ConfigError {
    ConfigError::Pattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crosswind_core::ScanWarningKind;
    use pretty_assertions::assert_eq;
    use std::io;

    #[test]
    fn test_literal_prefix() {
        assert_eq!(literal_prefix("templates/**/*.html"), "templates");
        assert_eq!(literal_prefix("src/index.html"), "src/index.html");
        assert_eq!(literal_prefix("*.html"), "");
        assert_eq!(literal_prefix("a/b/{c,d}/*.rs"), "a/b");
    }

    #[test]
    fn test_normalize_strips_dot_slash() {
        assert_eq!(normalize("./templates/**/*.html"), "templates/**/*.html");
        assert_eq!(normalize("src/*.rs"), "src/*.rs");
    }

    #[test]
    fn test_invalid_glob_is_config_error() {
        let result = ContentPatterns::compile(&["src/[".to_string()], Path::new("."));
        assert!(matches!(result, Err(ConfigError::Pattern { .. })));
    }

    #[test]
    fn test_missing_root_warns() {
        let dir = tempfile::tempdir().unwrap();
        let patterns =
            ContentPatterns::compile(&["nope/**/*.html".to_string()], dir.path()).unwrap();
        let set = patterns.expand();
        assert!(set.files.is_empty());
        assert_eq!(set.warnings, vec![ScanWarning::no_matches("nope/**/*.html")]);
    }

    #[test]
    fn test_matches_single_path() {
        let base = Path::new("/project");
        let patterns = ContentPatterns::compile(
            &[
                "./templates/**/*.html".to_string(),
                "!templates/vendor/**".to_string(),
            ],
            base,
        )
        .unwrap();

        assert!(patterns.matches(Path::new("/project/templates/index.html")));
        assert!(patterns.matches(Path::new("/project/templates/a/b.html")));
        assert!(!patterns.matches(Path::new("/project/templates/vendor/x.html")));
        assert!(!patterns.matches(Path::new("/project/src/main.rs")));
        assert!(!patterns.matches(Path::new("/elsewhere/templates/index.html")));
    }

    #[test]
    fn test_relative_base_dir_matches_absolute_path() {
        let patterns = ContentPatterns::compile(&["*.html".to_string()], Path::new(".")).unwrap();
        let cwd = std::env::current_dir().unwrap();

        assert!(patterns.base_dir().is_absolute());
        assert!(patterns.matches(&cwd.join("index.html")));
        assert_eq!(patterns.resolve(Path::new("./index.html")), cwd.join("index.html"));
        assert_eq!(patterns.resolve(&cwd.join("index.html")), cwd.join("index.html"));
    }

    #[test]
    fn test_exclude_applies_regardless_of_position() {
        let patterns = ContentPatterns::compile(
            &["!vendor/**".to_string(), "**/*.html".to_string()],
            Path::new("/project"),
        )
        .unwrap();

        assert!(patterns.matches(Path::new("/project/index.html")));
        assert!(!patterns.matches(Path::new("/project/vendor/lib.html")));
    }

    #[test]
    fn test_walk_error_becomes_unreadable_warning() {
        let err = ignore::Error::WithDepth {
            depth: 1,
            err: Box::new(ignore::Error::WithPath {
                path: PathBuf::from("/project/locked"),
                err: Box::new(ignore::Error::Io(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "permission denied",
                ))),
            }),
        };

        let mut warnings = Vec::new();
        record_walk_error(&err, Path::new("/project"), &mut warnings);

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].target, "/project/locked");
        assert!(matches!(
            &warnings[0].kind,
            ScanWarningKind::Unreadable(reason) if reason.contains("permission denied")
        ));
    }

    #[test]
    fn test_walk_error_without_path_falls_back_to_root() {
        let err = ignore::Error::Io(io::Error::new(io::ErrorKind::Other, "boom"));
        let mut warnings = Vec::new();
        record_walk_error(&err, Path::new("/project/templates"), &mut warnings);
        assert_eq!(warnings[0].target, "/project/templates");
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_expanded() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.html"), "p-4").unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.html"), dir.path().join("broken.html"))
            .unwrap();

        let patterns = ContentPatterns::compile(&["*.html".to_string()], dir.path()).unwrap();
        let set = patterns.expand();

        let names: Vec<_> = set
            .files
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.html", "broken.html"]);
        assert!(set.warnings.is_empty());
    }
}
