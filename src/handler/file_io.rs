//! UTF-8 纯文本文件读写与整文件转换
use std::path::Path;

use tracing::{debug, warn};

use super::format::FileFormat;
use crate::config::GlobalConfig;
use crate::engine::RuleEngine;
use crate::error::{ParaError, ParaResult};

/// 校验文件格式：容器格式直接拒绝，未知扩展名按纯文本兜底
fn ensure_plain_text(path: &Path) -> ParaResult<()> {
    let format = FileFormat::from_path(path);
    if format.is_container() {
        return Err(ParaError::UnsupportedFormat(format!(
            "{}（{}）",
            path.display(),
            format.as_str()
        )));
    }
    if format == FileFormat::Unknown {
        warn!("未知扩展名，按纯文本处理：{}", path.display());
    }
    Ok(())
}

/// 读取 UTF-8 文本文件
pub async fn read_text(path: &Path) -> ParaResult<String> {
    ensure_plain_text(path)?;

    let bytes = tokio::fs::read(path).await?;
    String::from_utf8(bytes).map_err(|e| {
        ParaError::InvalidInput(format!("{} 不是有效的 UTF-8 文本：{}", path.display(), e))
    })
}

/// 写入 UTF-8 文本文件，内容原样写出
pub async fn write_text(path: &Path, data: &str) -> ParaResult<()> {
    ensure_plain_text(path)?;
    tokio::fs::write(path, data.as_bytes()).await?;
    Ok(())
}

/// 转换整个文件
///
/// 返回转换后的文本；指定 output 时同时写入该文件
pub async fn convert_file(
    engine: &RuleEngine,
    input: &Path,
    output: Option<&Path>,
    config: &GlobalConfig,
) -> ParaResult<String> {
    let data = read_text(input).await?;
    let converted = engine.convert_with_config(&data, config);

    if let Some(output) = output {
        write_text(output, &converted).await?;
        debug!("文件转换完成：{} -> {}", input.display(), output.display());
    }

    Ok(converted)
}
