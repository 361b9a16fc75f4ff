use crate::types::ParsedCandidate;

/// 拆分候选 token 的修饰符与工具部分
///
/// 支持的格式：
/// - 简单类：`p-4`, `flex`, `bg-red-500`
/// - 修饰符：`hover:bg-blue-500`, `md:p-4`, `dark:text-white`
/// - 多修饰符：`md:dark:hover:bg-blue-500`
/// - 负值：`-m-4`, `md:-top-1`
/// - 任意值：`w-[13px]`；方括号内的 `:` 不作为修饰符分隔符
///
/// 这里只做结构拆分，不判断修饰符或工具是否存在。
///
/// # 示例
///
/// ```
/// use crosswind_tw_parse::parse_candidate;
///
/// let parsed = parse_candidate("md:hover:-mt-4").unwrap();
/// assert_eq!(parsed.variants, vec!["md", "hover"]);
/// assert!(parsed.negative);
/// assert_eq!(parsed.utility, "mt-4");
/// ```
pub fn parse_candidate(input: &str) -> Result<ParsedCandidate, ParseError> {
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut parser = Parser::new(input);
    parser.parse()
}

/// 解析错误类型
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    EmptyInput,
    /// 空修饰符（如 `md::p-4` 或 `:p-4`）
    EmptyVariant(usize),
    UnmatchedBracket,
    MissingUtility,
    InvalidFormat(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "Empty input"),
            ParseError::EmptyVariant(pos) => write!(f, "Empty variant at position {}", pos),
            ParseError::UnmatchedBracket => write!(f, "Unmatched bracket in arbitrary value"),
            ParseError::MissingUtility => write!(f, "Missing utility after variants"),
            ParseError::InvalidFormat(msg) => write!(f, "Invalid format: {}", msg),
        }
    }
}

impl std::error::Error for ParseError {}

/// 内部解析器
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn parse(&mut self) -> Result<ParsedCandidate, ParseError> {
        // 1. 按顶层冒号切分
        let mut segments = self.split_segments()?;

        // 2. 最后一段是工具，其余为修饰符
        let utility = segments.pop().ok_or(ParseError::MissingUtility)?;
        if utility.is_empty() {
            return Err(ParseError::MissingUtility);
        }

        // 3. 负值标记
        let (negative, utility) = match utility.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, utility),
        };

        match utility.chars().next() {
            Some(ch) if ch.is_ascii_alphanumeric() => {}
            Some(_) => {
                return Err(ParseError::InvalidFormat(format!(
                    "Utility must start with an alphanumeric character: '{}'",
                    utility
                )))
            }
            None => return Err(ParseError::MissingUtility),
        }

        Ok(ParsedCandidate {
            raw: self.input.to_string(),
            variants: segments.into_iter().map(|s| s.to_string()).collect(),
            negative,
            utility: utility.to_string(),
        })
    }

    /// 以方括号深度为 0 的 `:` 切分
    fn split_segments(&mut self) -> Result<Vec<&'a str>, ParseError> {
        let bytes = self.input.as_bytes();
        let mut segments = Vec::new();
        let mut depth = 0usize;
        let mut start = 0;

        while self.pos < bytes.len() {
            match bytes[self.pos] {
                b'[' => depth += 1,
                b']' => {
                    depth = depth.checked_sub(1).ok_or(ParseError::UnmatchedBracket)?;
                }
                b':' if depth == 0 => {
                    if self.pos == start {
                        return Err(ParseError::EmptyVariant(self.pos));
                    }
                    segments.push(&self.input[start..self.pos]);
                    start = self.pos + 1;
                }
                _ => {}
            }
            self.pos += 1;
        }

        if depth != 0 {
            return Err(ParseError::UnmatchedBracket);
        }

        segments.push(&self.input[start..]);
        Ok(segments)
    }
}
