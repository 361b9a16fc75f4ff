use crate::output::{Attribution, CssOutput};
use crosswind_core::{Declaration, Rule};
use indexmap::IndexMap;
use tracing::trace;

const INDENT: &str = "  ";

/// 去重、排序并序列化规则
///
/// - 以选择器为键去重，首次出现者保留（包括它的 at-rule 链），后来者的 token 并入其来源
/// - 按 (层, 断点序号) 稳定排序，同键保持输入顺序
/// - 相邻且 at-rule 链相同的规则写进同一个块
///
/// 输出只取决于输入序列：相同输入得到逐字节相同的文本。
pub fn emit(rules: Vec<Rule>) -> CssOutput {
    let input = rules.len();
    let mut unique: IndexMap<String, Rule> = IndexMap::with_capacity(rules.len());

    for rule in rules {
        match unique.get_mut(&rule.selector) {
            Some(first) => {
                if first.at_rules != rule.at_rules {
                    trace!(kept = %first.key(), dropped = %rule.key(), "selector already emitted");
                }
                for token in rule.tokens {
                    if !first.tokens.contains(&token) {
                        first.tokens.push(token);
                    }
                }
            }
            None => {
                unique.insert(rule.selector.clone(), rule);
            }
        }
    }

    let mut ordered: Vec<Rule> = unique.into_values().collect();
    ordered.sort_by_key(Rule::sort_key);
    trace!(input, emitted = ordered.len(), "deduplicated rules");

    let text = serialize(&ordered);
    let attribution = ordered
        .iter()
        .map(|rule| {
            (
                rule.selector.clone(),
                Attribution {
                    tokens: rule.tokens.clone(),
                    files: Vec::new(),
                },
            )
        })
        .collect();

    CssOutput {
        digest: blake3::hash(text.as_bytes()).to_hex().to_string(),
        text,
        rules: ordered,
        attribution,
        warnings: Vec::new(),
        unmatched: Vec::new(),
    }
}

/// 序列化为 CSS 文本，总以换行结尾；空规则集输出单个换行
pub fn serialize(rules: &[Rule]) -> String {
    let mut blocks: Vec<String> = Vec::new();
    let mut start = 0;

    while start < rules.len() {
        let at_rules = &rules[start].at_rules;
        let end = rules[start..]
            .iter()
            .position(|rule| &rule.at_rules != at_rules)
            .map_or(rules.len(), |offset| start + offset);

        blocks.push(write_block(at_rules, &rules[start..end]));
        start = end;
    }

    if blocks.is_empty() {
        return "\n".to_string();
    }
    blocks.join("\n")
}

fn write_block(at_rules: &[String], rules: &[Rule]) -> String {
    let mut css = String::new();

    // Open all at-rules with increasing indent
    for (i, at_rule) in at_rules.iter().enumerate() {
        css.push_str(&format!("{}{} {{\n", INDENT.repeat(i), at_rule));
    }

    let depth = at_rules.len();
    for (i, rule) in rules.iter().enumerate() {
        if i > 0 {
            css.push('\n');
        }
        write_rule(&mut css, &rule.selector, &rule.declarations, depth);
    }

    // Close at-rules in reverse order
    for i in (0..depth).rev() {
        css.push_str(&format!("{}}}\n", INDENT.repeat(i)));
    }

    css
}

fn write_rule(css: &mut String, selector: &str, declarations: &[Declaration], depth: usize) {
    let sel_prefix = INDENT.repeat(depth);
    let decl_prefix = INDENT.repeat(depth + 1);

    css.push_str(&format!("{}{} {{\n", sel_prefix, selector));
    for decl in declarations {
        css.push_str(&format!("{}{}: {};\n", decl_prefix, decl.property, decl.value));
    }
    css.push_str(&format!("{}}}\n", sel_prefix));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crosswind_core::Layer;
    use pretty_assertions::assert_eq;

    fn rule(selector: &str, property: &str, value: &str) -> Rule {
        let mut rule = Rule::new(selector, vec![Declaration::new(property, value)]);
        rule.tokens.push(selector.trim_start_matches('.').to_string());
        rule
    }

    fn at(mut rule: Rule, at_rule: &str, layer: Layer, rank: usize) -> Rule {
        rule.at_rules.push(at_rule.to_string());
        rule.layer = layer;
        rule.screen_rank = rank;
        rule
    }

    #[test]
    fn test_emit_single_rule() {
        let output = emit(vec![rule(".p-4", "padding", "1rem")]);
        assert_eq!(output.text, ".p-4 {\n  padding: 1rem;\n}\n");
    }

    #[test]
    fn test_empty_input_is_single_newline() {
        let output = emit(Vec::new());
        assert_eq!(output.text, "\n");
        assert!(output.is_empty());
        assert!(output.rules.is_empty());
    }

    #[test]
    fn test_first_duplicate_wins_and_merges_tokens() {
        let mut second = rule(".p-4", "padding", "2rem");
        second.tokens = vec!["other".to_string()];
        let output = emit(vec![rule(".p-4", "padding", "1rem"), second]);

        assert_eq!(output.rules.len(), 1);
        assert_eq!(output.rules[0].declarations[0].value, "1rem");
        assert_eq!(output.attribution[".p-4"].tokens, vec!["p-4", "other"]);
    }

    #[test]
    fn test_same_selector_under_other_wrapper_dropped() {
        let base = rule(".x", "color", "red");
        let mut wrapped = at(rule(".x", "color", "blue"), "@media print", Layer::State, 0);
        wrapped.tokens = vec!["print-x".to_string()];

        let output = emit(vec![base, wrapped]);
        assert_eq!(output.rules.len(), 1);
        assert!(output.rules[0].at_rules.is_empty());
        assert_eq!(output.text, ".x {\n  color: red;\n}\n");
        assert_eq!(output.attribution[".x"].tokens, vec!["x", "print-x"]);
    }

    #[test]
    fn test_wrapped_first_occurrence_wins() {
        let wrapped = at(rule(".x", "color", "blue"), "@media print", Layer::State, 0);
        let output = emit(vec![wrapped, rule(".x", "color", "red")]);

        assert_eq!(output.rules.len(), 1);
        assert_eq!(output.rules[0].at_rules, vec!["@media print".to_string()]);
        assert_eq!(output.rules[0].declarations[0].value, "blue");
    }

    #[test]
    fn test_layer_order() {
        let dark = {
            let mut r = rule(".dark .dark\\:x", "color", "white");
            r.layer = Layer::Dark;
            r
        };
        let hover = {
            let mut r = rule(".hover\\:x:hover", "color", "blue");
            r.layer = Layer::State;
            r
        };
        let lg = at(rule(".lg\\:x", "color", "green"), "@media (min-width: 1024px)", Layer::Responsive, 3);
        let sm = at(rule(".sm\\:x", "color", "lime"), "@media (min-width: 640px)", Layer::Responsive, 1);
        let base = rule(".x", "color", "red");

        let output = emit(vec![dark, hover, lg, sm, base]);
        let selectors: Vec<&str> = output.rules.iter().map(|r| r.selector.as_str()).collect();
        assert_eq!(
            selectors,
            vec![".x", ".sm\\:x", ".lg\\:x", ".hover\\:x:hover", ".dark .dark\\:x"]
        );
    }

    #[test]
    fn test_adjacent_rules_share_at_rule_block() {
        let media = "@media (min-width: 768px)";
        let rules = vec![
            at(rule(".md\\:p-4", "padding", "1rem"), media, Layer::Responsive, 2),
            at(rule(".md\\:m-2", "margin", "0.5rem"), media, Layer::Responsive, 2),
        ];
        let expected = "\
@media (min-width: 768px) {
  .md\\:p-4 {
    padding: 1rem;
  }

  .md\\:m-2 {
    margin: 0.5rem;
  }
}
";
        assert_eq!(emit(rules).text, expected);
    }

    #[test]
    fn test_nested_at_rules() {
        let mut r = rule(".md\\:dark\\:x", "color", "white");
        r.at_rules = vec![
            "@media (min-width: 768px)".to_string(),
            "@media (prefers-color-scheme: dark)".to_string(),
        ];
        r.layer = Layer::Dark;
        let expected = "\
.x {
  color: red;
}

@media (min-width: 768px) {
  @media (prefers-color-scheme: dark) {
    .md\\:dark\\:x {
      color: white;
    }
  }
}
";
        assert_eq!(emit(vec![rule(".x", "color", "red"), r]).text, expected);
    }

    #[test]
    fn test_emit_is_idempotent() {
        let rules = vec![
            rule(".p-4", "padding", "1rem"),
            at(rule(".md\\:p-4", "padding", "1rem"), "@media (min-width: 768px)", Layer::Responsive, 2),
        ];
        let first = emit(rules.clone());
        let second = emit(rules);
        assert_eq!(first.text, second.text);
        assert_eq!(first.digest, second.digest);
        assert!(first.text.ends_with('\n'));
    }
}
