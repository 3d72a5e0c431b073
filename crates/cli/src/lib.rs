//! # IPC Parser
//!
//! 读取 IPC 消息记录、校验并模拟向 DSP 分发。
//!
//! 提供：
//! - 命令行参数定义
//! - 管道编排 (载入 → 打印 → 校验/分发 → 报告)
//! - 错误分类与进程退出码

pub mod cli;
pub mod commands;
pub mod error;
pub mod pipeline;

pub use cli::Cli;
pub use error::{CliError, Result};
pub use pipeline::{OutputFormat, Pipeline, PipelineConfig, PipelineState, RunReport};
