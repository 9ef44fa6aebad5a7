//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 所有的用户操作、异步任务的结果和时间推进都表达为 Message，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 消息有三个来源：
//!
//!     ┌──────────────┐   handle_event()    ┌────────────┐
//!     │ 终端输入事件 │ ──────────────────▶ │            │
//!     └──────────────┘                     │            │
//!     ┌──────────────┐   mpsc channel      │ AppMessage │ ──▶ update::update()
//!     │ 异步任务结果 │ ──────────────────▶ │            │
//!     └──────────────┘                     │            │
//!     ┌──────────────┐   每轮循环          │            │
//!     │    Tick      │ ──────────────────▶ │            │
//!     └──────────────┘                     └────────────┘
//!
//!     异步任务（等待确认、调用数据源）从不直接接触 App，
//!     只会把结果包装成 AppMessage 发回主循环。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage 主消息
//!         mod confirm;        // 确认对话框子消息
//!         mod content;        // 内容面板（表格）子消息
//!         mod modal;          // 弹窗子消息
//!         mod navigation;     // 导航与位置子消息
//!
//!
//! 所有位置变化（导航栏选择、位置栏输入、后退、前进、启动）最终都化为
//! 同一条 `NavigationMessage::LocationChanged`，由同一个函数处理。
//!     接下来去往 src/update/mod.rs 吧
//!

mod app;
mod confirm;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use confirm::ConfirmMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
