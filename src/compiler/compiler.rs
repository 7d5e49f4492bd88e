//! 规则编译器核心
//! 负责将声明式规则表编译为可执行的正则模式与替换模板，并校验模板分组引用

use std::sync::Arc;
use std::time::Instant;
use regex::Regex;
use tracing::debug;

use super::pattern::{
    CompiledPattern, CompiledPatternSet, CompiledRewriteRule, CompiledRuleSet, CompiledTables,
};
use crate::error::{ParaError, ParaResult};
use crate::rule::{RewriteRuleDef, RuleTables, WeightedPatternDef};
use crate::utils::ReplacementTemplate;

/// 规则编译器
pub struct RuleCompiler;

impl RuleCompiler {
    /// 编译完整规则表
    pub fn compile(tables: &RuleTables) -> ParaResult<CompiledTables> {
        let start = Instant::now();

        // 1. 编译检测模式
        let zawgyi_patterns = Self::compile_pattern_set(&tables.zawgyi_patterns)?;
        let unicode_patterns = Self::compile_pattern_set(&tables.unicode_patterns)?;

        // 2. 编译有序改写规则
        let conversion_rules = Self::compile_rule_set(&tables.conversion_rules)?;
        let normalizer_fixes = Self::compile_rule_set(&tables.normalizer_fixes)?;

        // 3. 输出编译统计
        debug!("✅ 规则编译完成，总耗时{:?}", start.elapsed());
        debug!(
            "📊 编译统计：Zawgyi模式{}条、Unicode模式{}条、转换规则{}条、规范化修正{}条",
            zawgyi_patterns.len(),
            unicode_patterns.len(),
            conversion_rules.len(),
            normalizer_fixes.len()
        );

        Ok(CompiledTables {
            zawgyi_patterns: Arc::new(zawgyi_patterns),
            unicode_patterns: Arc::new(unicode_patterns),
            conversion_rules: Arc::new(conversion_rules),
            normalizer_fixes: Arc::new(normalizer_fixes),
        })
    }

    /// 编译一组检测模式
    pub fn compile_pattern_set(defs: &[WeightedPatternDef]) -> ParaResult<CompiledPatternSet> {
        let patterns = defs
            .iter()
            .map(Self::compile_single_pattern)
            .collect::<ParaResult<Vec<_>>>()?;
        Ok(CompiledPatternSet::new(patterns))
    }

    /// 编译有序规则序列，保持输入顺序
    pub fn compile_rule_set(defs: &[RewriteRuleDef]) -> ParaResult<CompiledRuleSet> {
        let rules = defs
            .iter()
            .map(Self::compile_single_rule)
            .collect::<ParaResult<Vec<_>>>()?;
        Ok(CompiledRuleSet::new(rules))
    }

    fn compile_single_pattern(def: &WeightedPatternDef) -> ParaResult<CompiledPattern> {
        Ok(CompiledPattern {
            name: def.name.clone(),
            regex: Self::compile_regex(&def.name, &def.pattern)?,
            weight: def.weight,
        })
    }

    /// 编译单条改写规则，模板引用的组号不能超过正则的捕获组数
    fn compile_single_rule(def: &RewriteRuleDef) -> ParaResult<CompiledRewriteRule> {
        let regex = Self::compile_regex(&def.name, &def.pattern)?;
        let template = ReplacementTemplate::parse(&def.replacement).map_err(|reason| {
            ParaError::TemplateParseError {
                rule: def.name.clone(),
                reason,
            }
        })?;

        let available = regex.captures_len() - 1;
        if let Some(referenced) = template.max_group() {
            if referenced > available {
                return Err(ParaError::TemplateGroupError {
                    rule: def.name.clone(),
                    referenced,
                    available,
                });
            }
        }

        Ok(CompiledRewriteRule {
            name: def.name.clone(),
            regex,
            template,
        })
    }

    fn compile_regex(name: &str, pattern: &str) -> ParaResult<Regex> {
        Regex::new(pattern).map_err(|source| ParaError::RegexCompileError {
            rule: name.to_string(),
            source,
        })
    }
}
