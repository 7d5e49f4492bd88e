//! 转换模块：规则引擎、规范化器与全局单例
pub mod engine;
pub mod global;
pub mod normalizer;

// 导出核心接口
pub use self::engine::RuleEngine;
pub use self::global::{global_engine, init_para};
pub use self::normalizer::Normalizer;
