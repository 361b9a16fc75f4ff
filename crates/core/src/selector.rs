/// 将候选 token 转义为合法的 CSS 类选择器（不含前导 `.`）
///
/// - 字母、数字、`-`、`_` 和非 ASCII 字符原样保留
/// - 首字符为数字时使用十六进制转义（`2xl` → `\32 xl`）
/// - 其余 ASCII 符号加反斜杠（`md:p-4` → `md\:p-4`）
pub fn escape_class_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);

    for (i, ch) in name.chars().enumerate() {
        match ch {
            '0'..='9' if i == 0 => {
                out.push_str(&format!("\\{:x} ", ch as u32));
            }
            '-' if i == 0 && name.len() == 1 => out.push_str("\\-"),
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => out.push(ch),
            c if !c.is_ascii() => out.push(c),
            c => {
                out.push('\\');
                out.push(c);
            }
        }
    }

    out
}

/// `.` + 转义后的类名
pub fn class_selector(name: &str) -> String {
    format!(".{}", escape_class_name(name))
}
