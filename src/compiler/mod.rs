//! 编译模块：将规则表编译为可执行的正则模式与改写规则
pub mod pattern;
pub mod compiler;

pub use self::pattern::{
    CompiledPattern, CompiledPatternSet, CompiledRewriteRule, CompiledRuleSet, CompiledTables,
};
pub use self::compiler::RuleCompiler;
