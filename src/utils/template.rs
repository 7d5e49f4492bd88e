//! 替换模板工具模块
//! 负责解析改写规则的替换模板，并在匹配时根据捕获组展开
//! 支持 \1/\2 、 $1/$2 与 ${1} 三种分组引用格式，`$$` / `\\` 表示字面量

use std::iter::Peekable;
use std::str::Chars;

use regex::{Captures, Replacer};

/// 模板片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    Literal(String),
    Group(usize),
}

/// 解析后的替换模板
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementTemplate {
    parts: Vec<TemplatePart>,
}

impl ReplacementTemplate {
    /// 解析替换模板
    ///
    /// # 返回值
    /// - `Ok(ReplacementTemplate)`: 解析成功
    /// - `Err(String)`: 模板语法错误的原因，由编译器包装为致命错误
    pub fn parse(raw: &str) -> Result<Self, String> {
        let mut parts = Vec::new();
        let mut literal = String::new();
        let mut chars = raw.chars().peekable();

        while let Some(c) = chars.next() {
            let group = match c {
                '$' => match chars.peek().copied() {
                    Some('$') => {
                        chars.next();
                        literal.push('$');
                        continue;
                    }
                    Some('{') => {
                        chars.next();
                        let index = Self::read_index(&mut chars)
                            .ok_or_else(|| format!("`${{` 后缺少组号：{}", raw))?;
                        if chars.next() != Some('}') {
                            return Err(format!("`${{{}` 未闭合：{}", index, raw));
                        }
                        index
                    }
                    Some(d) if d.is_ascii_digit() => Self::read_index(&mut chars)
                        .ok_or_else(|| format!("组号无效：{}", raw))?,
                    _ => return Err(format!("`$` 后必须是组号、`{{` 或 `$`：{}", raw)),
                },
                '\\' => match chars.peek().copied() {
                    Some('\\') => {
                        chars.next();
                        literal.push('\\');
                        continue;
                    }
                    Some(d) if d.is_ascii_digit() => Self::read_index(&mut chars)
                        .ok_or_else(|| format!("组号无效：{}", raw))?,
                    _ => return Err(format!("`\\` 后必须是组号或 `\\`：{}", raw)),
                },
                _ => {
                    literal.push(c);
                    continue;
                }
            };

            if !literal.is_empty() {
                parts.push(TemplatePart::Literal(std::mem::take(&mut literal)));
            }
            parts.push(TemplatePart::Group(group));
        }

        if !literal.is_empty() {
            parts.push(TemplatePart::Literal(literal));
        }

        Ok(Self { parts })
    }

    /// 连续读取 ASCII 数字作为组号
    fn read_index(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
        let mut digits = String::new();
        while let Some(&d) = chars.peek() {
            if !d.is_ascii_digit() {
                break;
            }
            digits.push(d);
            chars.next();
        }
        digits.parse().ok()
    }

    /// 模板引用的最大组号（未引用任何组时为 None）
    pub fn max_group(&self) -> Option<usize> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                TemplatePart::Group(index) => Some(*index),
                TemplatePart::Literal(_) => None,
            })
            .max()
    }

    pub fn parts(&self) -> &[TemplatePart] {
        &self.parts
    }

    /// 按捕获结果展开模板，未参与匹配的分组展开为空串
    pub fn expand(&self, captures: &Captures<'_>, dst: &mut String) {
        for part in &self.parts {
            match part {
                TemplatePart::Literal(text) => dst.push_str(text),
                TemplatePart::Group(index) => {
                    if let Some(matched) = captures.get(*index) {
                        dst.push_str(matched.as_str());
                    }
                }
            }
        }
    }
}

impl Replacer for &ReplacementTemplate {
    fn replace_append(&mut self, caps: &Captures<'_>, dst: &mut String) {
        self.expand(caps, dst);
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_parse_dollar_and_backslash_groups() {
        let template = ReplacementTemplate::parse("\\1-$2-${3}").unwrap();
        assert_eq!(
            template.parts(),
            &[
                TemplatePart::Group(1),
                TemplatePart::Literal("-".to_string()),
                TemplatePart::Group(2),
                TemplatePart::Literal("-".to_string()),
                TemplatePart::Group(3),
            ]
        );
        assert_eq!(template.max_group(), Some(3));
    }

    #[test]
    fn test_group_followed_by_myanmar_letter() {
        // 缅文数字不是 ASCII 数字，不会被当作组号的一部分
        let template = ReplacementTemplate::parse("$1\u{1041}\u{102D}").unwrap();
        assert_eq!(
            template.parts(),
            &[
                TemplatePart::Group(1),
                TemplatePart::Literal("\u{1041}\u{102D}".to_string()),
            ]
        );
    }

    #[test]
    fn test_literal_escapes() {
        let template = ReplacementTemplate::parse("$$\\\\").unwrap();
        assert_eq!(template.parts(), &[TemplatePart::Literal("$\\".to_string())]);
        assert_eq!(template.max_group(), None);
    }

    #[test]
    fn test_invalid_templates() {
        assert!(ReplacementTemplate::parse("$x").is_err());
        assert!(ReplacementTemplate::parse("${1").is_err());
        assert!(ReplacementTemplate::parse("${}").is_err());
        assert!(ReplacementTemplate::parse("trailing$").is_err());
        assert!(ReplacementTemplate::parse("\\n").is_err());
    }

    #[test]
    fn test_expand_with_unmatched_group() {
        let regex = Regex::new(r"(a)?(b)").unwrap();
        let template = ReplacementTemplate::parse("[$1|$2]").unwrap();
        assert_eq!(regex.replace_all("b ab", &template), "[|b] [a|b]");
    }
}
