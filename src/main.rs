//! para - 缅文 Zawgyi 检测/转换命令行工具
//! 文本走 stdin/stdout，日志只写 stderr
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use paraencoder::{
    ConfigManager, GlobalConfig, RuleEngine, RuleLoader, convert_file, global_engine, init_para,
    read_text, write_text,
};

#[derive(Debug, Parser)]
#[command(name = "para", version, about = "Zawgyi 检测与 Zawgyi -> Unicode 转换")]
struct Cli {
    /// 输出调试日志到 stderr
    #[arg(long, global = true)]
    verbose: bool,

    /// 使用 JSON 规则表替换内置规则
    #[arg(long, global = true, value_name = "FILE")]
    rules: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 检测输入文本的编码
    Detect {
        /// 输入文件，缺省读 stdin
        #[arg(long)]
        input: Option<PathBuf>,
        /// 输出 JSON 检测报告（含双方得分）
        #[arg(long)]
        json: bool,
    },
    /// 将 Zawgyi 文本转换为 Unicode
    Convert {
        #[arg(long)]
        input: Option<PathBuf>,
        /// 输出文件，缺省写 stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// 跳过检测，强制按 Zawgyi 转换
        #[arg(long)]
        force: bool,
        /// 跳过 Unicode 规范化
        #[arg(long)]
        no_normalize: bool,
    },
    /// 规范化 Unicode 缅文文本
    Normalize {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// 将命令行参数映射为全局配置
    fn to_config(&self) -> GlobalConfig {
        let builder = ConfigManager::custom().verbose(self.verbose);
        match &self.command {
            Command::Convert {
                force,
                no_normalize,
                ..
            } => builder.force(*force).normalize(!*no_normalize).build(),
            _ => builder.build(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.to_config();
    init_tracing(&config);

    let mut stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();
    run(cli, &config, &mut stdin, &mut stdout).await
}

/// 日志写 stderr；RUST_LOG 优先，否则按配置的 verbose 选择默认级别
fn init_tracing(config: &GlobalConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// 执行子命令；未指定文件时读写给定的流
async fn run<R, W>(cli: Cli, config: &GlobalConfig, stdin: &mut R, stdout: &mut W) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let engine = load_engine(cli.rules.as_deref()).await?;

    match cli.command {
        Command::Detect { input, json } => {
            let text = read_input(input.as_deref(), stdin).await?;
            let report = engine.report(&text);
            let line = if json {
                report.to_compact_json()?
            } else {
                report.verdict.to_string()
            };
            write_output(&format!("{line}\n"), None, stdout).await?;
        }
        Command::Convert { input, output, .. } => {
            run_convert(&engine, input.as_deref(), output.as_deref(), config, stdin, stdout).await?;
        }
        Command::Normalize { input, output } => {
            let text = read_input(input.as_deref(), stdin).await?;
            let normalized = engine.normalize(&text);
            write_output(&normalized, output.as_deref(), stdout).await?;
        }
    }

    Ok(())
}

/// 加载规则：指定 --rules 时编译自定义规则表，否则使用内置全局引擎
async fn load_engine(rules: Option<&Path>) -> anyhow::Result<RuleEngine> {
    match rules {
        Some(path) => {
            let tables = RuleLoader::load_from_file(path)
                .await
                .with_context(|| format!("加载规则表失败：{}", path.display()))?;
            let engine = RuleEngine::from_tables(&tables)
                .with_context(|| format!("编译规则表失败：{}", path.display()))?;
            debug!("已加载自定义规则表：{}", path.display());
            Ok(engine)
        }
        None => {
            init_para();
            Ok(global_engine().clone())
        }
    }
}

async fn run_convert<R, W>(
    engine: &RuleEngine,
    input: Option<&Path>,
    output: Option<&Path>,
    config: &GlobalConfig,
    stdin: &mut R,
    stdout: &mut W,
) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    match input {
        Some(input) => {
            let converted = convert_file(engine, input, output, config)
                .await
                .with_context(|| format!("转换文件失败：{}", input.display()))?;
            if output.is_none() {
                write_output(&converted, None, stdout).await?;
            }
        }
        None => {
            let text = read_input(None, stdin).await?;
            let converted = engine.convert_with_config(&text, config);
            write_output(&converted, output, stdout).await?;
        }
    }
    Ok(())
}

async fn read_input<R>(input: Option<&Path>, stdin: &mut R) -> anyhow::Result<String>
where
    R: AsyncRead + Unpin,
{
    match input {
        Some(path) => Ok(read_text(path)
            .await
            .with_context(|| format!("读取输入失败：{}", path.display()))?),
        None => {
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .await
                .context("读取 stdin 失败")?;
            Ok(text)
        }
    }
}

async fn write_output<W>(data: &str, output: Option<&Path>, stdout: &mut W) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    match output {
        Some(path) => write_text(path, data)
            .await
            .with_context(|| format!("写入输出失败：{}", path.display()))?,
        None => {
            stdout.write_all(data.as_bytes()).await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}
