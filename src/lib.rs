//! paraencoder - 缅文 Zawgyi 编码检测与 Zawgyi -> Unicode 转换工具

// 导出全局错误类型
pub use self::error::{ParaError, ParaResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出规则模块核心接口
pub use self::rule::{
    DetectionReport, EncodingVerdict, RewriteRuleDef, RuleTables, WeightedPatternDef,
    RuleLoader,
};

// 导出工具模块核心接口
pub use self::utils::{ReplacementTemplate, contains_myanmar, is_myanmar};

// 导出编译模块核心接口
pub use self::compiler::{
    CompiledPatternSet, CompiledRuleSet, CompiledTables, RuleCompiler,
};

// 导出检测/转换模块核心接口
pub use self::detector::EncodingDetector;
pub use self::engine::{Normalizer, RuleEngine, global_engine, init_para};

// 导出文件处理接口
pub use self::handler::{
    FileFormat, convert_file, is_supported, read_text, supported_extensions, write_text,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod utils;
pub mod compiler;
pub mod detector;
pub mod engine;
pub mod handler;

/// 判定文本编码（使用内置规则表）
pub fn classify(text: &str) -> EncodingVerdict {
    global_engine().classify(text)
}

/// 判定文本编码并返回双方得分
pub fn detect_report(text: &str) -> DetectionReport {
    global_engine().report(text)
}

pub fn is_zawgyi(text: &str) -> bool {
    global_engine().is_zawgyi(text)
}

/// Zawgyi -> Unicode 转换
///
/// force 为 false 时，非 Zawgyi 文本原样返回
pub fn convert(text: &str, normalize: bool, force: bool) -> String {
    global_engine().convert(text, normalize, force)
}

pub fn convert_with_config(text: &str, config: &GlobalConfig) -> String {
    global_engine().convert_with_config(text, config)
}

/// Unicode 文本规范化：NFC + 缅文重排修正
pub fn normalize(text: &str) -> String {
    global_engine().normalize(text)
}
