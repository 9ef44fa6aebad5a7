//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘/鼠标等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用
//!
//!         pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
//!
//!             if event::poll(timeout)? {                  // 此处阻塞以等待事件，最长等待 timeout
//!                 Ok(Some(event::read()?))
//!             } else {
//!                 Ok(None)
//!             }
//!         }
//!
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Mouse(MouseEvent)            // 鼠标事件（左键点击浮层外 = 关闭）
//!             Event::Resize(width , height)       // 终端尺寸变化，更新 app.viewport
//!
//!             键盘事件按以下优先级分发：
//!                 1. Ctrl+C                       任何时候都退出
//!                 2. 确认对话框                   y / n / Esc / Tab / Enter
//!                 3. 弹窗                         Esc 关闭，其余按弹窗类型处理
//!                 4. 正在输入（搜索框、位置栏）   字符进入输入框
//!                 5. 全局快捷键                   q ? : Alt+← Alt+→ Tab
//!                 6. 导航面板 / 内容面板
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 鼠标与浮层
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     浮层的区域只由终端尺寸决定（model/state/modal.rs）：
//!
//!         ┌──────────────────── viewport ────────────────────┐
//!         │      点击此处 → BackdropClick / Dismiss           │
//!         │        ┌───────── modal_area() ─────────┐        │
//!         │        │   点击此处 → Noop              │        │
//!         │        └────────────────────────────────┘        │
//!         └──────────────────────────────────────────────────┘
//!
//!     View 层用同一个函数计算绘制位置，所以命中判断与画面一致。
//!
//!
//!     handler.rs 只读取 &App，创建一个 AppMessage 并返回；
//!     在 src/app.rs 中交给 update::update(app , msg) 处理。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
