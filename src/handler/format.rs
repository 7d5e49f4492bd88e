//! 文件格式识别：按扩展名区分纯文本与容器格式
use std::path::Path;

/// 已知的纯文本扩展名（小写，不含点）
const PLAIN_TEXT_EXTENSIONS: &[&str] = &[
    // 纯文本
    "txt", "text", "log", "md", "rst", "asc",
    // 标记语言
    "html", "htm", "xhtml", "xml", "csv", "tsv", "json", "yaml", "yml",
    // 文档
    "tex", "latex", "adoc", "org", "wiki", "mediawiki",
    // 配置
    "ini", "cfg", "conf", "properties", "env", "toml", "lock",
    // 源代码
    "py", "js", "ts", "java", "c", "cpp", "h", "cs", "php", "rb", "go", "rs", "sh", "bat",
    "ps1", "sql",
    // 其他
    "note", "eml", "mbox", "srt", "vtt", "sub", "po", "pot", "texi", "man", "nfo", "readme",
];

/// 文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// 已知纯文本扩展名或无扩展名
    PlainText,
    Docx,
    Xlsx,
    Odt,
    Rtf,
    /// 未知扩展名，按纯文本兜底处理
    Unknown,
}

impl FileFormat {
    /// 按扩展名识别格式（不区分大小写）
    pub fn from_path(path: &Path) -> Self {
        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => ext.to_ascii_lowercase(),
            None => return FileFormat::PlainText,
        };

        match ext.as_str() {
            "docx" | "docm" => FileFormat::Docx,
            "xlsx" | "xlsm" => FileFormat::Xlsx,
            "odt" => FileFormat::Odt,
            "rtf" => FileFormat::Rtf,
            other if PLAIN_TEXT_EXTENSIONS.contains(&other) => FileFormat::PlainText,
            _ => FileFormat::Unknown,
        }
    }

    /// 是否为无法按纯文本读写的容器格式
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            FileFormat::Docx | FileFormat::Xlsx | FileFormat::Odt | FileFormat::Rtf
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::PlainText => "plain-text",
            FileFormat::Docx => "docx",
            FileFormat::Xlsx => "xlsx",
            FileFormat::Odt => "odt",
            FileFormat::Rtf => "rtf",
            FileFormat::Unknown => "unknown",
        }
    }
}

/// 是否为明确支持的文件（已知纯文本扩展名或无扩展名）
pub fn is_supported(path: &Path) -> bool {
    FileFormat::from_path(path) == FileFormat::PlainText
}

/// 明确支持的扩展名列表
pub fn supported_extensions() -> &'static [&'static str] {
    PLAIN_TEXT_EXTENSIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_formats() {
        for name in ["notes.txt", "README.MD", "subs.srt", "Makefile", "data.JSON"] {
            assert_eq!(FileFormat::from_path(Path::new(name)), FileFormat::PlainText, "{name}");
            assert!(is_supported(Path::new(name)));
        }
    }

    #[test]
    fn test_container_formats() {
        assert_eq!(FileFormat::from_path(Path::new("a.docx")), FileFormat::Docx);
        assert_eq!(FileFormat::from_path(Path::new("a.DOCM")), FileFormat::Docx);
        assert_eq!(FileFormat::from_path(Path::new("a.xlsm")), FileFormat::Xlsx);
        assert_eq!(FileFormat::from_path(Path::new("a.odt")), FileFormat::Odt);
        assert_eq!(FileFormat::from_path(Path::new("a.rtf")), FileFormat::Rtf);
        assert!(FileFormat::Rtf.is_container());
        assert!(!is_supported(Path::new("a.docx")));
    }

    #[test]
    fn test_unknown_extension() {
        let format = FileFormat::from_path(Path::new("archive.xyz"));
        assert_eq!(format, FileFormat::Unknown);
        assert!(!format.is_container());
        assert!(!is_supported(Path::new("archive.xyz")));
    }

    #[test]
    fn test_supported_extensions() {
        let exts = supported_extensions();
        assert!(exts.contains(&"txt"));
        assert!(exts.contains(&"rs"));
        assert!(!exts.contains(&"docx"));
    }
}
