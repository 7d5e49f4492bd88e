//! 全局配置管理,存储转换相关的可配置项

/// 全局配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalConfig {
    // 转换后是否执行 Unicode 规范化
    pub normalize: bool,
    // 跳过编码检测，强制按 Zawgyi 转换
    pub force: bool,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            normalize: true,
            force: false,
            verbose: false,
        }
    }
}

impl GlobalConfig {
    /// 未设置 RUST_LOG 时的默认日志过滤指令
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "paraencoder=debug,para=debug"
        } else {
            "warn"
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn normalize(mut self, normalize: bool) -> Self {
        self.config.normalize = normalize;
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.config.force = force;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}
