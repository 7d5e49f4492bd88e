//! 全局引擎单例管理
use once_cell::sync::Lazy;

use super::engine::RuleEngine;
use crate::rule::RuleTables;

/// 全局引擎实例：首次使用时编译内置规则表
static GLOBAL_ENGINE: Lazy<RuleEngine> = Lazy::new(|| {
    RuleEngine::from_tables(&RuleTables::builtin()).unwrap_or_else(|e| {
        eprintln!("致命错误: 内置规则表编译失败 - {}", e);
        panic!("内置规则表异常，请检查 rule/tables.rs 中的正则与替换模板");
    })
});

/// 预先编译内置规则表
///
/// 可选调用；未调用时在首次转换/检测时自动编译
pub fn init_para() {
    Lazy::force(&GLOBAL_ENGINE);
}

/// 获取全局引擎
pub fn global_engine() -> &'static RuleEngine {
    &GLOBAL_ENGINE
}
