//! 检测模块：编码检测核心逻辑
pub mod detector;

// 导出核心接口
pub use self::detector::EncodingDetector;
