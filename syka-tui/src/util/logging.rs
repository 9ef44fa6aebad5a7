//! 日志初始化
//!
//! 终端处于原始模式，日志只写入文件。`log` 宏的记录经 tracing-subscriber
//! 的 `tracing-log` 集成转发到同一个订阅者。

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志文件名
pub const LOG_FILE: &str = "syka-tui.log";

/// 初始化日志，返回日志文件路径
///
/// 级别由 `RUST_LOG` 控制，默认 `info`。
pub fn init_logging(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("cannot open {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("logging already initialised")?;

    Ok(path)
}
