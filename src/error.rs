//! 全局错误类型定义

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum ParaError {
    // 规则相关错误
    #[error("规则加载失败：{0}")]
    RuleLoadError(String),

    // 编译相关错误（均为致命的初始化错误）
    #[error("正则编译失败：规则={rule}，{source}")]
    RegexCompileError {
        rule: String,
        #[source]
        source: RegexError,
    },
    #[error("替换模板解析失败：规则={rule}，{reason}")]
    TemplateParseError { rule: String, reason: String },
    #[error("替换模板引用了不存在的捕获组：规则={rule}，引用组={referenced}，可用组数={available}")]
    TemplateGroupError {
        rule: String,
        referenced: usize,
        available: usize,
    },

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("不支持的文件格式：{0}")]
    UnsupportedFormat(String),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type ParaResult<T> = Result<T, ParaError>;
