//! 工具模块：替换模板解析、缅文字符范围判断
pub mod myanmar;
pub mod template;

pub use self::myanmar::{MYANMAR_RANGE, contains_myanmar, is_myanmar};
pub use self::template::{ReplacementTemplate, TemplatePart};
