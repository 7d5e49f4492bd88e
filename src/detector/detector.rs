//! 检测器核心：按 Zawgyi / Unicode 两组带权模式打分，输出编码结论
use std::cmp::Ordering;
use std::sync::Arc;

use tracing::debug;

use crate::compiler::{CompiledPatternSet, CompiledTables};
use crate::rule::{DetectionReport, EncodingVerdict};
use crate::utils::contains_myanmar;

/// 编码检测器
///
/// 纯函数：只读共享的已编译模式，不保存任何调用状态
#[derive(Debug, Clone)]
pub struct EncodingDetector {
    zawgyi_patterns: Arc<CompiledPatternSet>,
    unicode_patterns: Arc<CompiledPatternSet>,
}

impl EncodingDetector {
    pub fn new(
        zawgyi_patterns: Arc<CompiledPatternSet>,
        unicode_patterns: Arc<CompiledPatternSet>,
    ) -> Self {
        Self {
            zawgyi_patterns,
            unicode_patterns,
        }
    }

    pub fn from_compiled(tables: &CompiledTables) -> Self {
        Self::new(
            Arc::clone(&tables.zawgyi_patterns),
            Arc::clone(&tables.unicode_patterns),
        )
    }

    /// 判定文本编码
    pub fn classify(&self, text: &str) -> EncodingVerdict {
        self.report(text).verdict
    }

    /// 判定文本编码并返回双方得分
    ///
    /// 1. 不含缅文码位：Unknown，得分记 0
    /// 2. 得分相等（含 0:0）：Unknown
    /// 3. 否则得分高者胜出
    pub fn report(&self, text: &str) -> DetectionReport {
        if !contains_myanmar(text) {
            return DetectionReport::unknown();
        }

        let zawgyi_score = self.zawgyi_patterns.score(text);
        let unicode_score = self.unicode_patterns.score(text);

        let verdict = match zawgyi_score.cmp(&unicode_score) {
            Ordering::Equal => EncodingVerdict::Unknown,
            Ordering::Greater => EncodingVerdict::Zawgyi,
            Ordering::Less => EncodingVerdict::Unicode,
        };
        debug!(
            "编码检测：Zawgyi得分={}，Unicode得分={}，结论={}",
            zawgyi_score, unicode_score, verdict
        );

        DetectionReport {
            verdict,
            zawgyi_score,
            unicode_score,
        }
    }

    pub fn is_zawgyi(&self, text: &str) -> bool {
        self.classify(text) == EncodingVerdict::Zawgyi
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::RuleCompiler;
    use crate::rule::{RuleTables, WeightedPatternDef};

    fn builtin_detector() -> EncodingDetector {
        let compiled = RuleCompiler::compile(&RuleTables::builtin()).unwrap();
        EncodingDetector::from_compiled(&compiled)
    }

    #[test]
    fn test_no_myanmar_is_unknown() {
        let detector = builtin_detector();
        assert_eq!(detector.classify(""), EncodingVerdict::Unknown);
        assert_eq!(detector.classify("hello"), EncodingVerdict::Unknown);
        assert_eq!(detector.report("hello"), DetectionReport::unknown());
    }

    #[test]
    fn test_unicode_samples() {
        let detector = builtin_detector();
        // မြန်မာ / မြန်မာစာ
        for sample in [
            "\u{1019}\u{103C}\u{1014}\u{103A}\u{1038}",
            "\u{1019}\u{103C}\u{1014}\u{103A}\u{1038}\u{1005}\u{102C}",
        ] {
            assert_eq!(detector.classify(sample), EncodingVerdict::Unicode);
        }
        let report = detector.report("\u{1019}\u{103C}\u{1014}\u{103A}\u{1038}");
        assert_eq!(report.zawgyi_score, 0);
        assert_eq!(report.unicode_score, 2);
    }

    #[test]
    fn test_zawgyi_samples() {
        let detector = builtin_detector();
        for sample in [
            "\u{1064}",
            "\u{106A}\u{1031}\u{1000}",
            "\u{1031}\u{103B}\u{1000}\u{103A}\u{102C}",
            "\u{1064}\u{102D}\u{1031}\u{1000}",
        ] {
            assert_eq!(detector.classify(sample), EncodingVerdict::Zawgyi, "{:?}", sample);
        }
        assert!(detector.is_zawgyi("\u{106A}\u{1031}\u{1000}"));
    }

    #[test]
    fn test_canonical_greeting_is_unicode() {
        let detector = builtin_detector();
        let report = detector.report("မင်္ဂလာပါ");
        assert_eq!(report.zawgyi_score, 2);
        assert_eq!(report.unicode_score, 3);
        assert_eq!(report.verdict, EncodingVerdict::Unicode);
    }

    #[test]
    fn test_myanmar_without_hits_is_unknown() {
        let detector = builtin_detector();
        let report = detector.report("\u{1010}\u{1014}");
        assert_eq!(report.verdict, EncodingVerdict::Unknown);
        assert_eq!((report.zawgyi_score, report.unicode_score), (0, 0));
    }

    #[test]
    fn test_equal_nonzero_scores_are_unknown() {
        let detector = builtin_detector();
        // 102B 103A 命中 Unicode(2)，103A 103A 命中 Zawgyi(2)
        let report = detector.report("\u{102B}\u{103A} \u{103A}\u{103A}");
        assert_eq!(report.zawgyi_score, 2);
        assert_eq!(report.unicode_score, 2);
        assert_eq!(report.verdict, EncodingVerdict::Unknown);
    }

    #[test]
    fn test_custom_weights() {
        let zawgyi = RuleCompiler::compile_pattern_set(&[WeightedPatternDef::new("z", "\u{1064}", 1)]).unwrap();
        let unicode = RuleCompiler::compile_pattern_set(&[WeightedPatternDef::new("u", "\u{1000}", 1)]).unwrap();
        let detector = EncodingDetector::new(Arc::new(zawgyi), Arc::new(unicode));
        assert_eq!(detector.classify("\u{1064}\u{1000}"), EncodingVerdict::Unknown);
        assert_eq!(detector.classify("\u{1064}\u{1064}\u{1000}"), EncodingVerdict::Zawgyi);
        assert_eq!(detector.classify("\u{1064}\u{1000}\u{1000}"), EncodingVerdict::Unicode);
    }
}
