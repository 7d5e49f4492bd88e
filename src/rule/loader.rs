//! 规则加载管理器
//! 负责从本地 JSON 文件加载替换内置规则表的自定义规则

use std::path::Path;
use tracing::debug;

use super::model::RuleTables;
use crate::error::{ParaError, ParaResult};

/// 规则加载管理器
pub struct RuleLoader;

impl RuleLoader {
    /// 从 JSON 文件加载规则表
    pub async fn load_from_file(path: &Path) -> ParaResult<RuleTables> {
        let data = tokio::fs::read_to_string(path).await.map_err(|e| {
            ParaError::RuleLoadError(format!("读取规则文件{}失败：{}", path.display(), e))
        })?;

        let tables = Self::load_from_str(&data)?;
        debug!(
            "规则文件加载成功：{}，Zawgyi模式{}条、Unicode模式{}条、转换规则{}条、规范化修正{}条",
            path.display(),
            tables.zawgyi_patterns.len(),
            tables.unicode_patterns.len(),
            tables.conversion_rules.len(),
            tables.normalizer_fixes.len()
        );

        Ok(tables)
    }

    /// 从 JSON 字符串加载并校验规则表
    pub fn load_from_str(json: &str) -> ParaResult<RuleTables> {
        let tables = RuleTables::from_json_str(json)?;
        Self::validate(&tables)?;
        Ok(tables)
    }

    /// 检测与转换都依赖的表不能为空
    fn validate(tables: &RuleTables) -> ParaResult<()> {
        if tables.zawgyi_patterns.is_empty() {
            return Err(ParaError::RuleLoadError("缺少 zawgyi_patterns".to_string()));
        }
        if tables.unicode_patterns.is_empty() {
            return Err(ParaError::RuleLoadError("缺少 unicode_patterns".to_string()));
        }
        if tables.conversion_rules.is_empty() {
            return Err(ParaError::RuleLoadError("缺少 conversion_rules".to_string()));
        }
        Ok(())
    }
}
