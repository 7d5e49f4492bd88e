//! 规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑，支持序列化/反序列化

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::error::ParaResult;

/// 编码检测结论
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingVerdict {
    Zawgyi,
    Unicode,
    Unknown,
}

impl EncodingVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            EncodingVerdict::Zawgyi => "zawgyi",
            EncodingVerdict::Unicode => "unicode",
            EncodingVerdict::Unknown => "unknown",
        }
    }
}

// ======== 为 EncodingVerdict 实现 Display trait（用于 CLI 输出） ========
impl fmt::Display for EncodingVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 检测报告（结论 + 双方得分）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionReport {
    pub verdict: EncodingVerdict,
    pub zawgyi_score: u64,
    pub unicode_score: u64,
}

impl DetectionReport {
    /// 无缅文字符时的报告
    pub fn unknown() -> Self {
        Self {
            verdict: EncodingVerdict::Unknown,
            zawgyi_score: 0,
            unicode_score: 0,
        }
    }

    pub fn to_compact_json(&self) -> ParaResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// 带权重的检测模式定义
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedPatternDef {
    pub name: String,
    pub pattern: String,
    pub weight: u32,
}

impl WeightedPatternDef {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            weight,
        }
    }
}

/// 改写规则定义：匹配模式 + 替换模板
/// 模板支持 `$N` / `${N}` / `\N` 引用捕获组，`$$` 与 `\\` 表示字面量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRuleDef {
    pub name: String,
    pub pattern: String,
    pub replacement: String,
}

impl RewriteRuleDef {
    pub fn new(
        name: impl Into<String>,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// 完整规则表（声明式，编译前）
///
/// `conversion_rules` 与 `normalizer_fixes` 的顺序即语义：
/// 第 k 条规则看到的是前 k-1 条规则处理后的文本
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTables {
    #[serde(default)]
    pub zawgyi_patterns: Vec<WeightedPatternDef>,
    #[serde(default)]
    pub unicode_patterns: Vec<WeightedPatternDef>,
    #[serde(default)]
    pub conversion_rules: Vec<RewriteRuleDef>,
    #[serde(default)]
    pub normalizer_fixes: Vec<RewriteRuleDef>,
}

impl RuleTables {
    /// 从 JSON 字符串解析规则表
    pub fn from_json_str(json: &str) -> ParaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_pretty_json(&self) -> ParaResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
