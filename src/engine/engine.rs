//! 转换引擎核心：检测守卫 + 有序规则改写 + 可选规范化
use std::sync::Arc;

use tracing::debug;

use super::normalizer::Normalizer;
use crate::compiler::{CompiledRuleSet, CompiledTables, RuleCompiler};
use crate::config::GlobalConfig;
use crate::detector::EncodingDetector;
use crate::error::ParaResult;
use crate::rule::{DetectionReport, EncodingVerdict, RuleTables};

/// Zawgyi -> Unicode 转换引擎
///
/// 构建后只读，可在线程间共享；每次调用只读写自己的输入缓冲区
#[derive(Debug, Clone)]
pub struct RuleEngine {
    detector: EncodingDetector,
    rules: Arc<CompiledRuleSet>,
    normalizer: Normalizer,
}

impl RuleEngine {
    pub fn new(detector: EncodingDetector, rules: Arc<CompiledRuleSet>, normalizer: Normalizer) -> Self {
        Self {
            detector,
            rules,
            normalizer,
        }
    }

    pub fn from_compiled(tables: &CompiledTables) -> Self {
        Self::new(
            EncodingDetector::from_compiled(tables),
            Arc::clone(&tables.conversion_rules),
            Normalizer::from_compiled(tables),
        )
    }

    /// 编译规则表并创建引擎
    pub fn from_tables(tables: &RuleTables) -> ParaResult<Self> {
        let compiled = RuleCompiler::compile(tables)?;
        Ok(Self::from_compiled(&compiled))
    }

    pub fn detector(&self) -> &EncodingDetector {
        &self.detector
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn classify(&self, text: &str) -> EncodingVerdict {
        self.detector.classify(text)
    }

    pub fn report(&self, text: &str) -> DetectionReport {
        self.detector.report(text)
    }

    pub fn is_zawgyi(&self, text: &str) -> bool {
        self.detector.is_zawgyi(text)
    }

    /// 转换文本
    ///
    /// 未强制且检测结论不是 Zawgyi 时原样返回（不做规范化），
    /// 否则按表顺序执行全部规则，最后按需规范化
    pub fn convert(&self, text: &str, normalize: bool, force: bool) -> String {
        if !force && !self.is_zawgyi(text) {
            debug!("非 Zawgyi 文本，跳过转换");
            return text.to_string();
        }

        let converted = self.rules.apply(text);
        if normalize {
            self.normalizer.normalize(&converted)
        } else {
            converted
        }
    }

    /// 按配置转换文本
    pub fn convert_with_config(&self, text: &str, config: &GlobalConfig) -> String {
        self.convert(text, config.normalize, config.force)
    }

    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }
}
