//! 规则模块：负责规则表的数据模型、内置常量与加载
pub mod model;
pub mod tables;
pub mod loader;

// 导出核心接口
pub use self::model::{
    DetectionReport, EncodingVerdict, RewriteRuleDef, RuleTables, WeightedPatternDef,
};
pub use self::loader::RuleLoader;
