//!
//! src/backend/mod.rs
//! Backend 层：数据源、配置与异步副作用
//!
//! Backend 层与 UI 解耦，通过 syka-core 的 `DataProvider` 访问数据。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件（JSON）
//!         mod effects;            // 在 tokio 上执行的副作用
//!         mod mock_data;          // 演示用的模拟数据
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     存储位置：<config dir>/syka-tui/config.json
//!
//!     - 文件不存在：使用默认值，并写出一份默认配置
//!     - 文件损坏：记录 warn 日志，使用默认值
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、副作用（Effects）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     持有数据源和回送主循环的 mpsc 发送端：
//!
//!         await_confirmation()    等待确认对话框的结果
//!         delete()                删除记录（本地已先删除）
//!         create_proxies()        保存新代理（本地已先追加）
//!         test_proxy()            检测代理，结果发回 ProxyChecked
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户按 Alt+d 删除一行
//!         ↓
//!     Update 层向确认对话框发起请求，得到 oneshot::Receiver
//!         ↓
//!     Effects::await_confirmation 在任务中等待
//!         ↓                         （界面照常响应）
//!     用户点击 OK
//!         ↓
//!     任务发回 ContentMessage::DeleteResolved
//!         ↓
//!     Update 层删除本地记录、重绘、提示，再调用 Effects::delete
//!

mod config_service;
mod effects;
pub mod mock_data;

pub use config_service::{get_config_dir, AppConfig, ConfigService, LocalConfigService};
pub use effects::Effects;
