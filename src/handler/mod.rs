//! 文件处理模块：格式识别与 UTF-8 文本读写
pub mod format;
pub mod file_io;

pub use self::format::{FileFormat, is_supported, supported_extensions};
pub use self::file_io::{convert_file, read_text, write_text};
