//! 词法提取：不理解任何标记语言，只切出允许字符组成的最长片段
//!
//! 片段末尾的 `.` 会被去掉：`flex.` → `flex`。

use crosswind_core::CandidateToken;
use indexmap::IndexSet;

/// token 字母表：ASCII 字母数字加 `- : / . [ ]`
fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b':' | b'/' | b'.' | b'[' | b']')
}

/// 从文本中提取候选 token，文件内去重并保持首次出现顺序
///
/// 结果是过度近似的：`const`、`./templates` 这类片段也会被提取，
/// 由下游匹配阶段丢弃。不含任何字母数字的片段直接跳过。
pub fn extract_tokens(source: &[u8]) -> Vec<CandidateToken> {
    let mut tokens: IndexSet<CandidateToken> = IndexSet::new();
    let mut start = None;

    for (i, &b) in source.iter().enumerate() {
        match (is_token_byte(b), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                push_run(&source[s..i], &mut tokens);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        push_run(&source[s..], &mut tokens);
    }

    tokens.into_iter().collect()
}

fn push_run(run: &[u8], tokens: &mut IndexSet<CandidateToken>) {
    // 句末的 `.` 不属于类名
    let end = run.iter().rposition(|&b| b != b'.').map_or(0, |i| i + 1);
    let run = &run[..end];

    if run.iter().any(u8::is_ascii_alphanumeric) {
        // run 只含 ASCII
        tokens.insert(run.iter().map(|&b| b as char).collect());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extracts_from_class_attribute() {
        let tokens = extract_tokens(br#"<div class="p-4 md:hover:bg-red-500/50"></div>"#);
        assert_eq!(
            tokens,
            vec!["div", "class", "p-4", "md:hover:bg-red-500/50", "/div"]
        );
    }

    #[test]
    fn test_keeps_arbitrary_values_intact() {
        let tokens = extract_tokens(b"w-[13px] top-[1.5rem]");
        assert_eq!(tokens, vec!["w-[13px]", "top-[1.5rem]"]);
    }

    #[test]
    fn test_dedup_within_file() {
        let tokens = extract_tokens(b"p-4 m-2 p-4");
        assert_eq!(tokens, vec!["p-4", "m-2"]);
    }

    #[test]
    fn test_separator_only_runs_dropped() {
        let tokens = extract_tokens(b"a -- :: / ... b");
        assert_eq!(tokens, vec!["a", "b"]);
    }

    #[test]
    fn test_trailing_period_trimmed() {
        let tokens = extract_tokens(b"Use flex. Then p-0.5");
        assert_eq!(tokens, vec!["Use", "flex", "Then", "p-0.5"]);
    }

    #[test]
    fn test_sentence_ending_class_names() {
        let tokens = extract_tokens(b"Wrap it in w-[1.5rem]. Or use hidden...");
        assert_eq!(tokens, vec!["Wrap", "it", "in", "w-[1.5rem]", "Or", "use", "hidden"]);
    }

    #[test]
    fn test_non_ascii_bytes_are_separators() {
        let tokens = extract_tokens("标题p-4，m-2".as_bytes());
        assert_eq!(tokens, vec!["p-4", "m-2"]);
    }

    #[test]
    fn test_over_approximates_config_like_source() {
        let source = br#"module.exports = { content: ["./templates/**/*.html"] }"#;
        let tokens = extract_tokens(source);
        assert!(tokens.contains(&"module.exports".to_string()));
        assert!(tokens.contains(&"./templates/".to_string()));
    }
}
