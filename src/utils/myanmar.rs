//! 缅文字符范围工具

use std::ops::RangeInclusive;

/// 缅文 Unicode 区块 U+1000..=U+109F
pub const MYANMAR_RANGE: RangeInclusive<char> = '\u{1000}'..='\u{109F}';

#[inline]
pub fn is_myanmar(c: char) -> bool {
    MYANMAR_RANGE.contains(&c)
}

/// 文本中是否含有任意缅文码位
pub fn contains_myanmar(text: &str) -> bool {
    text.chars().any(is_myanmar)
}
