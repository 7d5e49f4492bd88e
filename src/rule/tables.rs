//! 内置规则表
//! 检测权重为人工设定的常量；改写规则表按下标顺序执行，顺序即语义，调整顺序会改变输出

use super::model::{RewriteRuleDef, RuleTables, WeightedPatternDef};

/// Zawgyi 特征模式：(名称, 正则, 权重)
pub const ZAWGYI_PATTERNS: &[(&str, &str, u32)] = &[
    ("zawgyi-only-codepoint", r"[\x{105A}\x{1060}-\x{1097}]", 4),
    ("e-vowel-before-medial", r"\x{1031}[\x{103B}-\x{103E}]", 3),
    ("asat-before-e-vowel", r"\x{1039}[\x{1000}-\x{1021}]?\x{1031}", 3),
    ("double-103a", r"\x{103A}\x{103A}", 2),
    ("visible-asat", r"\x{1039}[\x{1000}-\x{109F}]", 2),
    ("e-vowel-wa-ha", r"\x{1031}\x{108A}", 3),
];

/// Unicode 特征模式：(名称, 正则, 权重)
pub const UNICODE_PATTERNS: &[(&str, &str, u32)] = &[
    ("e-vowel-before-consonant", r"\x{1031}[\x{1000}-\x{1021}]", 3),
    ("tall-aa-asat", r"\x{102B}\x{103A}", 2),
    ("medial-ya-ra-wa", r"\x{103B}[\x{103C}\x{103D}]", 2),
    ("medial-ra-ha", r"\x{103C}[\x{103E}]", 2),
    ("dot-below-asat", r"\x{1037}[\x{103A}]", 2),
    ("kinzi-sequence", r"\x{1004}\x{103A}\x{1039}", 3),
    ("consonant-medial-ra", r"[\x{1000}-\x{1021}]\x{103C}", 2),
];

/// Zawgyi -> Unicode 改写规则：(名称, 正则, 替换模板)
///
/// 分段约束：
/// 1. 码位平移必须最先执行，且 103D..1039 从高到低逐个平移，避免同一字符被平移两次
/// 2. 变体归并在平移之后，否则归并出的 103C 会被再次平移
/// 3. 叠字/kinzi 会产出 1039，必须位于 1039 -> 103A 之后
/// 4. 重排规则依赖前面已产出的标准 kinzi / 叠字形式
pub const CONVERSION_RULES: &[(&str, &str, &str)] = &[
    // 1. 码位平移
    ("medial-ha", r"\x{103D}", "\u{103E}"),
    ("medial-wa", r"\x{103C}", "\u{103D}"),
    ("medial-ra", r"\x{103B}", "\u{103C}"),
    ("medial-ya", r"\x{103A}", "\u{103B}"),
    ("asat", r"\x{1039}", "\u{103A}"),
    // 2. 字形变体归并
    ("medial-ra-variants", r"[\x{107E}-\x{1084}]", "\u{103C}"),
    ("medial-ya-variant", r"\x{107D}", "\u{103B}"),
    ("medial-ha-variant", r"\x{1087}", "\u{103E}"),
    ("medial-ha-u", r"\x{1088}", "\u{103E}\u{102F}"),
    ("medial-ha-uu", r"\x{1089}", "\u{103E}\u{1030}"),
    ("medial-wa-ha", r"\x{108A}", "\u{103D}\u{103E}"),
    ("nya", r"\x{106A}", "\u{1009}"),
    ("nnya", r"\x{106B}", "\u{100A}"),
    ("short-na", r"\x{108F}", "\u{1014}"),
    ("short-ra", r"\x{1090}", "\u{101B}"),
    ("i-anusvara", r"\x{108E}", "\u{102D}\u{1036}"),
    ("tall-u", r"\x{1033}", "\u{102F}"),
    ("tall-uu", r"\x{1034}", "\u{1030}"),
    ("tall-aa-asat", r"\x{105A}", "\u{102B}\u{103A}"),
    ("dot-below-variants", r"[\x{1094}\x{1095}]", "\u{1037}"),
    ("great-sa", r"\x{1086}", "\u{103F}"),
    ("u-asat", r"\x{1025}\x{103A}", "\u{1009}\u{103A}"),
    // 3. kinzi：Zawgyi 中 kinzi 写在基字之后
    ("kinzi-i-after-base", r"([\x{1000}-\x{1021}])\x{108B}", "\u{1004}\u{103A}\u{1039}$1\u{102D}"),
    ("kinzi-ii-after-base", r"([\x{1000}-\x{1021}])\x{108C}", "\u{1004}\u{103A}\u{1039}$1\u{102E}"),
    ("kinzi-anusvara-after-base", r"([\x{1000}-\x{1021}])\x{108D}", "\u{1004}\u{103A}\u{1039}$1\u{1036}"),
    ("kinzi-after-base", r"([\x{1000}-\x{1021}])\x{1064}", "\u{1004}\u{103A}\u{1039}$1"),
    ("kinzi-i", r"\x{108B}", "\u{1004}\u{103A}\u{1039}\u{102D}"),
    ("kinzi-ii", r"\x{108C}", "\u{1004}\u{103A}\u{1039}\u{102E}"),
    ("kinzi-anusvara", r"\x{108D}", "\u{1004}\u{103A}\u{1039}\u{1036}"),
    ("kinzi", r"\x{1064}", "\u{1004}\u{103A}\u{1039}"),
    // 4. 叠字
    ("stacked-ka", r"\x{1060}", "\u{1039}\u{1000}"),
    ("stacked-kha", r"\x{1061}", "\u{1039}\u{1001}"),
    ("stacked-ga", r"\x{1062}", "\u{1039}\u{1002}"),
    ("stacked-gha", r"\x{1063}", "\u{1039}\u{1003}"),
    ("stacked-ca", r"\x{1065}", "\u{1039}\u{1005}"),
    ("stacked-cha", r"[\x{1066}\x{1067}]", "\u{1039}\u{1006}"),
    ("stacked-ja", r"\x{1068}", "\u{1039}\u{1007}"),
    ("stacked-jha", r"\x{1069}", "\u{1039}\u{1008}"),
    ("stacked-tta", r"\x{106C}", "\u{1039}\u{100B}"),
    ("stacked-ttha", r"\x{106D}", "\u{1039}\u{100C}"),
    ("stacked-nna", r"\x{1070}", "\u{1039}\u{100F}"),
    ("stacked-ta", r"[\x{1071}\x{1072}]", "\u{1039}\u{1010}"),
    ("stacked-tha", r"[\x{1073}\x{1074}]", "\u{1039}\u{1011}"),
    ("stacked-da", r"\x{1075}", "\u{1039}\u{1012}"),
    ("stacked-dha", r"\x{1076}", "\u{1039}\u{1013}"),
    ("stacked-na", r"\x{1077}", "\u{1039}\u{1014}"),
    ("stacked-pa", r"\x{1078}", "\u{1039}\u{1015}"),
    ("stacked-pha", r"\x{1079}", "\u{1039}\u{1016}"),
    ("stacked-ba", r"\x{107A}", "\u{1039}\u{1017}"),
    ("stacked-bha", r"[\x{107B}\x{1093}]", "\u{1039}\u{1018}"),
    ("stacked-ma", r"\x{107C}", "\u{1039}\u{1019}"),
    ("stacked-la", r"\x{1085}", "\u{1039}\u{101C}"),
    ("stacked-ta-wa", r"\x{1096}", "\u{1039}\u{1010}\u{103D}"),
    ("ligature-dda-dda", r"\x{106E}", "\u{100D}\u{1039}\u{100D}"),
    ("ligature-dda-ddha", r"\x{106F}", "\u{100D}\u{1039}\u{100E}"),
    ("ligature-nna-dda", r"\x{1091}", "\u{100F}\u{1039}\u{100D}"),
    ("ligature-tta-ttha", r"\x{1092}", "\u{100B}\u{1039}\u{100C}"),
    ("ligature-tta-tta", r"\x{1097}", "\u{100B}\u{1039}\u{100B}"),
    // 5. 重排
    (
        "e-vowel-after-syllable",
        r"\x{1031}(\x{103C})?(\x{1004}\x{103A}\x{1039})?([\x{1000}-\x{1021}])(\x{1039}[\x{1000}-\x{1021}])?([\x{103B}\x{103D}\x{103E}]*)",
        "$2$3$4$1$5\u{1031}",
    ),
    (
        "medial-ra-after-base",
        r"\x{103C}([\x{1000}-\x{1021}])(\x{1039}[\x{1000}-\x{1021}])?",
        "$1$2\u{103C}",
    ),
    ("e-vowel-after-medial", r"\x{1031}([\x{103B}-\x{103E}])", "$1\u{1031}"),
    // 6. 尾部符号顺序
    ("dot-below-before-asat", r"\x{103A}\x{1037}", "\u{1037}\u{103A}"),
    ("u-before-anusvara", r"\x{1036}\x{102F}", "\u{102F}\u{1036}"),
];

/// 规范化修正：只匹配标准 Unicode 中不可能出现的序列，对已规范文本为恒等变换
pub const NORMALIZER_FIXES: &[(&str, &str, &str)] = &[
    // kinzi 后必须紧跟被叠的辅音；出现在辅音之后且后面没有辅音时前移
    (
        "kinzi-before-base",
        r"([\x{1000}-\x{1021}])\x{1004}\x{103A}\x{1039}([^\x{1000}-\x{1021}]|$)",
        "\u{1004}\u{103A}\u{1039}$1$2",
    ),
    // 1031 只能跟在辅音簇之后；位于开头或非缅文字符之后即为前置写法
    (
        "e-vowel-after-base",
        r"(^|[^\x{1000}-\x{109F}])\x{1031}(\x{103C})?([\x{1000}-\x{1021}])(\x{1039}[\x{1000}-\x{1021}])?([\x{103B}\x{103D}\x{103E}]*)",
        "$1$3$4$2$5\u{1031}",
    ),
    (
        "medial-ra-after-base",
        r"(^|[^\x{1000}-\x{109F}])\x{103C}([\x{1000}-\x{1021}])",
        "$1$2\u{103C}",
    ),
    ("dot-below-before-asat", r"\x{103A}\x{1037}", "\u{1037}\u{103A}"),
];

impl RuleTables {
    /// 内置规则表
    pub fn builtin() -> Self {
        Self {
            zawgyi_patterns: to_pattern_defs(ZAWGYI_PATTERNS),
            unicode_patterns: to_pattern_defs(UNICODE_PATTERNS),
            conversion_rules: to_rule_defs(CONVERSION_RULES),
            normalizer_fixes: to_rule_defs(NORMALIZER_FIXES),
        }
    }
}

fn to_pattern_defs(raw: &[(&str, &str, u32)]) -> Vec<WeightedPatternDef> {
    raw.iter()
        .map(|(name, pattern, weight)| WeightedPatternDef::new(*name, *pattern, *weight))
        .collect()
}

fn to_rule_defs(raw: &[(&str, &str, &str)]) -> Vec<RewriteRuleDef> {
    raw.iter()
        .map(|(name, pattern, replacement)| RewriteRuleDef::new(*name, *pattern, *replacement))
        .collect()
}
