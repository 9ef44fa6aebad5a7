//! SYKA 终端控制台
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置、数据源与异步副作用 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! async fn `main()` {
//!
//!     init_logging()          // 日志写入配置目录下的文件
//!     LocalConfigService      // 读取配置（首次启动时写出默认配置）
//!     set_language / theme    // 应用语言和主题
//!     InMemoryDataProvider    // 数据源，装入模拟数据
//!     App::new()              // 创建 APP 实例，填入记录
//!     init_terminal()         // 原始模式、备用屏幕、鼠标捕获
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//!     数据源返回的结果通过 mpsc 通道送回主循环：
//!
//!         Effects ── tokio::spawn ──▶ provider.delete(...) ──▶ tx.send(AppMessage)
//!                                                                  │
//!         app::run  ◀── rx.try_recv() ─────────────────────────────┘
//!
//!
//!     进入主循环 app::run()   // from /app.rs

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;

use anyhow::Result;
use syka_core::{DataProvider, InMemoryDataProvider};
use tokio::sync::mpsc;

use backend::{get_config_dir, mock_data, ConfigService, Effects, LocalConfigService};
use i18n::{set_language, Language};
use util::{init_logging, init_terminal, restore_terminal};
use view::theme::{set_theme_index, Theme};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // 1. 日志
    let log_path = init_logging(&get_config_dir())?;
    log::info!("syka-tui {} starting, logging to {}", env!("CARGO_PKG_VERSION"), log_path.display());

    // 2. 配置
    let config_service = LocalConfigService::new();
    let config = if config_service.path().exists() {
        config_service.load_or_default()
    } else {
        let config = backend::AppConfig::default();
        if let Err(e) = config_service.save(&config) {
            log::warn!("cannot write default config: {e:#}");
        }
        config
    };

    // 3. 语言与主题
    set_language(Language::from_code(&config.language).unwrap_or_else(|| {
        log::warn!("unknown language {:?}, using default", config.language);
        Language::default()
    }));
    set_theme_index(
        Theme::from_name(&config.theme)
            .unwrap_or_else(|| {
                log::warn!("unknown theme {:?}, using default", config.theme);
                Theme::default()
            })
            .index(),
    );

    // 4. 数据源
    let provider: Arc<dyn DataProvider> = Arc::new(InMemoryDataProvider::with_data(
        mock_data::accounts(config.mock_accounts),
        mock_data::proxies(),
    ));
    let accounts = provider.list_accounts().await?;
    let proxies = provider.list_proxies().await?;
    log::info!("loaded {} accounts, {} proxies", accounts.len(), proxies.len());

    // 5. 应用实例
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = model::App::new(&config, Effects::new(provider, tx));
    app.accounts.set_records(accounts);
    app.proxies.set_records(proxies);

    // 6. 终端与主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &mut rx);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        log::error!("main loop failed: {e:#}");
    }
    log::info!("syka-tui exiting");
    result
}
