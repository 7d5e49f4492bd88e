//! 规范化器：NFC 组合 + 固定顺序的缅文重排修正
//!
//! 修正规则只匹配标准 Unicode 中不会出现的序列，已规范的文本必须原样返回。
//! "မင်္ဂလာပါ" 曾被早期的无条件重排破坏，作为回归用例固定在测试中。

use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;

use crate::compiler::{CompiledRuleSet, CompiledTables};

/// 规范化器
#[derive(Debug, Clone)]
pub struct Normalizer {
    fixes: Arc<CompiledRuleSet>,
}

impl Normalizer {
    pub fn new(fixes: Arc<CompiledRuleSet>) -> Self {
        Self { fixes }
    }

    pub fn from_compiled(tables: &CompiledTables) -> Self {
        Self::new(Arc::clone(&tables.normalizer_fixes))
    }

    /// 仅执行 NFC，不做任何重排
    pub fn nfc_only() -> Self {
        Self::new(Arc::new(CompiledRuleSet::new(Vec::new())))
    }

    /// 规范化文本
    ///
    /// 1. NFC 组合
    /// 2. 按表顺序执行重排修正，每条一次
    pub fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let composed: String = text.nfc().collect();
        self.fixes.apply(&composed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::RuleCompiler;
    use crate::rule::RuleTables;
    use proptest::prelude::*;

    fn builtin_normalizer() -> Normalizer {
        let compiled = RuleCompiler::compile(&RuleTables::builtin()).unwrap();
        Normalizer::from_compiled(&compiled)
    }

    #[test]
    fn test_mingalaba_is_unchanged() {
        let normalizer = builtin_normalizer();
        assert_eq!(normalizer.normalize("မင်္ဂလာပါ"), "မင်္ဂလာပါ");
    }

    #[test]
    fn test_canonical_text_is_unchanged() {
        let normalizer = builtin_normalizer();
        for sample in [
            "မြန်မာစာ",
            "ကြော",
            // ကေ + ခ：1031 后紧跟下一音节的辅音是合法写法
            "\u{1000}\u{1031}\u{1001}",
            "\u{1014}\u{1037}\u{103A}",
            "hello မြန်မာ world",
        ] {
            assert_eq!(normalizer.normalize(sample), sample);
        }
    }

    #[test]
    fn test_empty_and_ascii() {
        let normalizer = builtin_normalizer();
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("hello"), "hello");
    }

    #[test]
    fn test_nfc_composition() {
        let normalizer = builtin_normalizer();
        assert_eq!(normalizer.normalize("\u{1025}\u{102E}"), "\u{1026}");
    }

    #[test]
    fn test_kinzi_moved_before_base() {
        let normalizer = builtin_normalizer();
        assert_eq!(
            normalizer.normalize("\u{1002}\u{1004}\u{103A}\u{1039}"),
            "\u{1004}\u{103A}\u{1039}\u{1002}"
        );
        assert_eq!(
            normalizer.normalize("\u{1019}\u{1002}\u{1004}\u{103A}\u{1039}\u{102C}"),
            "\u{1019}\u{1004}\u{103A}\u{1039}\u{1002}\u{102C}"
        );
    }

    #[test]
    fn test_leading_e_vowel_moved_after_base() {
        let normalizer = builtin_normalizer();
        assert_eq!(normalizer.normalize("\u{1031}\u{1000}"), "\u{1000}\u{1031}");
        assert_eq!(normalizer.normalize("a \u{1031}\u{1000}"), "a \u{1000}\u{1031}");
        assert_eq!(
            normalizer.normalize("\u{1031}\u{103C}\u{1000}\u{102C}"),
            "\u{1000}\u{103C}\u{1031}\u{102C}"
        );
    }

    #[test]
    fn test_leading_medial_ra_moved_after_base() {
        let normalizer = builtin_normalizer();
        assert_eq!(
            normalizer.normalize("\u{103C}\u{1000}\u{102C}"),
            "\u{1000}\u{103C}\u{102C}"
        );
    }

    #[test]
    fn test_asat_dot_below_order() {
        let normalizer = builtin_normalizer();
        assert_eq!(
            normalizer.normalize("\u{1014}\u{103A}\u{1037}"),
            "\u{1014}\u{1037}\u{103A}"
        );
    }

    #[test]
    fn test_nfc_only_skips_reordering() {
        let normalizer = Normalizer::nfc_only();
        assert_eq!(normalizer.normalize("\u{1031}\u{1000}"), "\u{1031}\u{1000}");
        assert_eq!(normalizer.normalize("\u{1025}\u{102E}"), "\u{1026}");
        assert_eq!(normalizer.normalize("မင်္ဂလာပါ"), "မင်္ဂလာပါ");
    }

    #[test]
    fn test_idempotent_on_fixed_output() {
        let normalizer = builtin_normalizer();
        for sample in [
            "\u{1031}\u{103C}\u{1000}\u{102C}",
            "\u{1002}\u{1004}\u{103A}\u{1039}",
            "\u{103C}\u{1000}",
        ] {
            let once = normalizer.normalize(sample);
            assert_eq!(normalizer.normalize(&once), once);
        }
    }

    /// 标准顺序的音节：[kinzi] 辅音 [ya|ra] [wa] [ha] [元音] [韵尾辅音 [点] asat]
    fn canonical_syllable() -> impl Strategy<Value = String> {
        (
            any::<bool>(),
            prop::char::range('\u{1000}', '\u{1021}'),
            prop::option::of(prop::sample::select(vec!['\u{103B}', '\u{103C}'])),
            any::<bool>(),
            any::<bool>(),
            prop::option::of(prop::sample::select(vec![
                "\u{1031}",
                "\u{102D}",
                "\u{102F}",
                "\u{102C}",
                "\u{1031}\u{102C}",
            ])),
            prop::option::of((prop::char::range('\u{1000}', '\u{1021}'), any::<bool>())),
        )
            .prop_map(|(kinzi, base, ya_ra, wa, ha, vowel, coda)| {
                let mut syllable = String::new();
                if kinzi {
                    syllable.push_str("\u{1004}\u{103A}\u{1039}");
                }
                syllable.push(base);
                if let Some(medial) = ya_ra {
                    syllable.push(medial);
                }
                if wa {
                    syllable.push('\u{103D}');
                }
                if ha {
                    syllable.push('\u{103E}');
                }
                if let Some(vowel) = vowel {
                    syllable.push_str(vowel);
                }
                if let Some((final_consonant, dot_below)) = coda {
                    syllable.push(final_consonant);
                    if dot_below {
                        syllable.push('\u{1037}');
                    }
                    syllable.push('\u{103A}');
                }
                syllable
            })
    }

    fn canonical_text() -> impl Strategy<Value = String> {
        prop::collection::vec((canonical_syllable(), any::<bool>()), 0..8).prop_map(|parts| {
            parts
                .into_iter()
                .map(|(syllable, space)| if space { format!("{syllable} ") } else { syllable })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn canonical_text_is_fixed_point(text in canonical_text()) {
            let normalizer = builtin_normalizer();
            prop_assert_eq!(normalizer.normalize(&text), text);
        }
    }
}
