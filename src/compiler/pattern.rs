//! 编译后模式模型
//! 正则编译后的结构，构建后只读，可在线程间共享

use std::borrow::Cow;
use std::sync::Arc;
use regex::Regex;
use tracing::trace;

use crate::utils::ReplacementTemplate;

/// 编译后的带权检测模式
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub name: String,
    pub regex: Regex,
    pub weight: u32,
}

impl CompiledPattern {
    /// 不重叠匹配次数
    pub fn occurrences(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }
}

/// 一组同类检测模式（Zawgyi 特征或 Unicode 特征）
#[derive(Debug, Clone)]
pub struct CompiledPatternSet {
    patterns: Vec<CompiledPattern>,
}

impl CompiledPatternSet {
    pub(crate) fn new(patterns: Vec<CompiledPattern>) -> Self {
        Self { patterns }
    }

    /// 加权得分：Σ 命中次数 × 权重，各模式独立计数
    pub fn score(&self, text: &str) -> u64 {
        self.patterns
            .iter()
            .map(|pattern| pattern.occurrences(text) as u64 * u64::from(pattern.weight))
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// 编译后的改写规则
#[derive(Debug, Clone)]
pub struct CompiledRewriteRule {
    pub name: String,
    pub regex: Regex,
    pub template: ReplacementTemplate,
}

impl CompiledRewriteRule {
    /// 全局替换（所有不重叠匹配），无匹配时借用原文
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.regex.replace_all(text, &self.template)
    }
}

/// 有序规则序列，下标顺序即执行顺序
#[derive(Debug, Clone)]
pub struct CompiledRuleSet {
    rules: Vec<CompiledRewriteRule>,
}

impl CompiledRuleSet {
    pub(crate) fn new(rules: Vec<CompiledRewriteRule>) -> Self {
        Self { rules }
    }

    /// 按表顺序逐条执行，每条规则作用于上一条规则的输出
    pub fn apply(&self, text: &str) -> String {
        let mut buffer = text.to_string();
        for (index, rule) in self.rules.iter().enumerate() {
            if let Cow::Owned(next) = rule.apply(&buffer) {
                trace!("规则命中：#{} {}", index, rule.name);
                buffer = next;
            }
        }
        buffer
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledRewriteRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// 编译后的完整规则表
#[derive(Debug, Clone)]
pub struct CompiledTables {
    pub zawgyi_patterns: Arc<CompiledPatternSet>,
    pub unicode_patterns: Arc<CompiledPatternSet>,
    pub conversion_rules: Arc<CompiledRuleSet>,
    pub normalizer_fixes: Arc<CompiledRuleSet>,
}
