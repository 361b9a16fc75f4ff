use crate::cache::BuildCache;
use crate::config::Configuration;
use crosswind_core::{
    CancellationToken, CancelledError, CandidateToken, ConfigError, GenerateError, Rule,
    ScanWarning,
};
use crosswind_css::{emit, CssOutput};
use crosswind_registry::{UtilityRegistry, VariantEngine};
use crosswind_scanner::{scan, scan_files, ContentPatterns};
use crosswind_theme::{resolve_config, ThemeTable};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, trace, warn};

/// 匹配阶段每处理这么多 token 检查一次取消信号
const CANCEL_CHECK_INTERVAL: usize = 64;

/// 流水线编排器
///
/// 持有跨调用的增量缓存。`&mut self` 保证同一实例同时只有一次构建在进行；
/// 构建失败或被取消时缓存保持调用前的状态。
#[derive(Debug, Default)]
pub struct Generator {
    cache: BuildCache,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cache(&self) -> &BuildCache {
        &self.cache
    }

    /// 丢弃缓存，下一次 `regenerate` 退化为完整构建
    pub fn reset(&mut self) {
        self.cache = BuildCache::default();
    }

    /// 完整构建：扫描全部 `content` 文件，替换缓存中的 token 集合
    pub fn generate(
        &mut self,
        config: &Configuration,
        cancel: &CancellationToken,
    ) -> Result<CssOutput, GenerateError> {
        let started = Instant::now();
        let setup = Setup::prepare(config, cancel)?;
        self.full_build(&setup, cancel, started)
    }

    /// 增量构建：只重新扫描 `changed` 中的文件，token 与缓存取并集
    ///
    /// `changed` 可以是绝对路径，也可以是相对 `base_dir` 的路径；
    /// 不在 `content` 模式内的路径直接忽略。
    ///
    /// 从文件中删掉的类不会从输出中消失，直到 `reset` 或下一次 `generate`。
    /// 没有缓存或配置已变化时执行完整构建。
    pub fn regenerate(
        &mut self,
        config: &Configuration,
        changed: &[PathBuf],
        cancel: &CancellationToken,
    ) -> Result<CssOutput, GenerateError> {
        let started = Instant::now();
        let setup = Setup::prepare(config, cancel)?;

        if self.cache.is_empty() {
            debug!("no cached build, running a full build");
            return self.full_build(&setup, cancel, started);
        }
        if !self.cache.matches_config(&setup.fingerprint) {
            debug!("configuration changed, running a full build");
            return self.full_build(&setup, cancel, started);
        }

        let mut next = self.cache.clone();
        let mut warnings = Vec::new();
        let mut paths: Vec<PathBuf> = Vec::new();

        for path in changed {
            let path = setup.patterns.resolve(path);
            if !setup.patterns.matches(&path) {
                trace!(path = %path.display(), "changed file is outside content patterns");
                continue;
            }
            if !path.exists() {
                warn!(path = %path.display(), "changed file no longer exists");
                warnings.push(ScanWarning::missing(path.display().to_string()));
                next.forget(&path);
                continue;
            }
            if !paths.contains(&path) {
                paths.push(path);
            }
        }

        let report = scan_files(&paths, next.fingerprints(), cancel)?;
        warnings.extend(report.warnings.iter().cloned());
        next.absorb(&report);
        cancel.check()?;

        let output = render(&setup, &mut next, None, warnings, cancel)?;
        info!(
            changed = changed.len(),
            rescanned = report.scanned_count(),
            tokens = next.token_count(),
            rules = output.rules.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "regenerated stylesheet"
        );

        self.cache = next;
        Ok(output)
    }

    fn full_build(
        &mut self,
        setup: &Setup,
        cancel: &CancellationToken,
        started: Instant,
    ) -> Result<CssOutput, GenerateError> {
        let report = scan(&setup.patterns, cancel)?;
        cancel.check()?;

        let mut next = BuildCache::new(setup.fingerprint);
        next.absorb(&report);

        let previous = self
            .cache
            .matches_config(&setup.fingerprint)
            .then_some(&self.cache);
        let output = render(setup, &mut next, previous, report.warnings.clone(), cancel)?;
        info!(
            files = report.files.len(),
            tokens = next.token_count(),
            rules = output.rules.len(),
            unmatched = output.unmatched.len(),
            warnings = output.warnings.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "generated stylesheet"
        );

        self.cache = next;
        Ok(output)
    }
}

/// 一次构建的只读上下文：扫描开始前全部就绪
struct Setup {
    theme: ThemeTable,
    registry: UtilityRegistry,
    variants: VariantEngine,
    patterns: ContentPatterns,
    fingerprint: blake3::Hash,
}

impl Setup {
    /// 主题 → 模式 → 注册表（内置 + 插件）→ 变体引擎
    ///
    /// 所有配置错误都在这里返回，此时还没有读取任何内容文件。
    fn prepare(config: &Configuration, cancel: &CancellationToken) -> Result<Self, GenerateError> {
        let user = config.user();
        if let Some(descriptor) = config.unresolved_plugin() {
            return Err(ConfigError::UnknownPlugin(descriptor.name.clone()).into());
        }

        let fingerprint = config.fingerprint()?;
        let theme = resolve_config(&ThemeTable::defaults(), &user.theme)?;
        let patterns = ContentPatterns::compile(user.content.patterns(), config.base_dir())?;
        cancel.check()?;

        let mut registry = UtilityRegistry::with_builtins(user.core_plugins.clone());
        for plugin in config.plugins() {
            registry.install(plugin.as_ref(), &theme);
        }
        for group in user.core_plugins.named_groups() {
            if !registry.knows_group(group) {
                warn!(group, "ignoring unknown corePlugins entry");
            }
        }

        let variants = VariantEngine::new(&theme, user.dark_mode.clone());
        debug!(
            builtins = registry.builtin_count(),
            plugins = registry.plugin_count(),
            screens = variants.screens().len(),
            "prepared build"
        );
        cancel.check()?;

        Ok(Self {
            theme,
            registry,
            variants,
            patterns,
            fingerprint,
        })
    }

    /// 单个 token 的完整路径：拆修饰符 → 生成 → 包裹
    ///
    /// 返回空列表即未匹配。
    fn rules_for(&self, token: &str) -> Vec<Rule> {
        let expanded = match self.variants.expand(token) {
            Ok(expanded) => expanded,
            Err(rejection) => {
                trace!(token, %rejection, "token rejected");
                return Vec::new();
            }
        };

        self.registry
            .generate(&expanded.candidate, &self.theme)
            .iter()
            .filter_map(|generated| self.variants.wrap(token, generated, &expanded.spec))
            .collect()
    }
}

/// 对缓存中的全部 token 生成规则并输出
///
/// 逐 token 结果优先取 `cache`，其次取配置相同的 `previous`。
fn render(
    setup: &Setup,
    cache: &mut BuildCache,
    previous: Option<&BuildCache>,
    warnings: Vec<ScanWarning>,
    cancel: &CancellationToken,
) -> Result<CssOutput, CancelledError> {
    let tokens: Vec<CandidateToken> = cache.tokens().keys().cloned().collect();
    let mut rules = Vec::new();
    let mut unmatched = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        if index % CANCEL_CHECK_INTERVAL == 0 {
            cancel.check()?;
        }

        let memo = cache.rules_for(token).map(<[Rule]>::to_vec);
        let produced = match memo {
            Some(memo) => memo,
            None => {
                let fresh = previous
                    .and_then(|previous| previous.rules_for(token))
                    .map(<[Rule]>::to_vec)
                    .unwrap_or_else(|| setup.rules_for(token));
                cache.remember(token.clone(), fresh.clone());
                fresh
            }
        };

        if produced.is_empty() {
            unmatched.push(token.clone());
        } else {
            rules.extend(produced);
        }
    }
    cancel.check()?;

    Ok(emit(rules)
        .with_sources(cache.tokens())
        .with_warnings(warnings)
        .with_unmatched(unmatched))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn config(dir: &std::path::Path, json: &str) -> Configuration {
        Configuration::from_json_str(json)
            .unwrap()
            .with_base_dir(dir)
    }

    #[test]
    fn test_generate_fills_cache() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), r#"<div class="p-4 flex">"#).unwrap();
        let config = config(dir.path(), r#"{ "content": ["*.html"] }"#);

        let mut generator = Generator::new();
        let output = generator
            .generate(&config, &CancellationToken::new())
            .unwrap();

        assert_eq!(output.rules.len(), 2);
        assert!(!generator.cache().is_empty());
        assert!(generator.cache().tokens().contains_key("p-4"));
        assert_eq!(generator.cache().fingerprints().len(), 1);
    }

    #[test]
    fn test_cancelled_build_keeps_previous_cache() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "p-4").unwrap();
        let config = config(dir.path(), r#"{ "content": ["*.html"] }"#);

        let mut generator = Generator::new();
        generator
            .generate(&config, &CancellationToken::new())
            .unwrap();

        fs::write(dir.path().join("index.html"), "p-4 m-2").unwrap();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let err = generator.generate(&config, &cancel).unwrap_err();

        assert!(err.is_cancelled());
        assert_eq!(generator.cache().token_count(), 1);
    }

    #[test]
    fn test_unresolved_plugin_descriptor_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), r#"{ "plugins": ["forms"] }"#);
        let err = Generator::new()
            .generate(&config, &CancellationToken::new())
            .unwrap_err();
        assert!(matches!(
            err,
            GenerateError::Config(ConfigError::UnknownPlugin(name)) if name == "forms"
        ));
    }

    #[test]
    fn test_reset_clears_cache() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "p-4").unwrap();
        let config = config(dir.path(), r#"{ "content": ["*.html"] }"#);

        let mut generator = Generator::new();
        generator
            .generate(&config, &CancellationToken::new())
            .unwrap();
        generator.reset();
        assert!(generator.cache().is_empty());
        assert_eq!(generator.cache().token_count(), 0);
    }
}
