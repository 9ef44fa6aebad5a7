//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，App 的初始状态为：
//!
//! App {
//!
//!     should_quit: false,                             // 决定应用是否应该退出
//!     focus: FocusPanel::Navigation,                  // 当前焦点在哪个面板
//!     navigation: [Dashboard, Accounts, Proxies],     // 侧边栏，selected = 0
//!     router: Router {                                // 位置片段 → 激活区块
//!         location: config.start_location,
//!         default: config.default_section,
//!     },
//!     accounts / proxies: TableState { page: 1, ... } // 各区块的表格
//!     modal / confirm / toast: 全部关闭
//!
//! }
//!
//!
//! 进入循环前先补发两条消息：
//!     Resize(w, h)                    // 记录终端尺寸，鼠标命中判断要用
//!     LocationChanged(start_location) // 按启动位置激活区块
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新终端状态
//!     }
//!     while let Ok(msg) = rx.try_recv() {             // 取回后台任务的结果
//!         update::update(&mut app , msg)
//!     }
//!     update::update(&mut app , Tick)                 // 让过期的提示消失
//! }

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::event;
use crate::message::{AppMessage, NavigationMessage};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, rx: &mut UnboundedReceiver<AppMessage>) -> Result<()> {
    let size = terminal.size()?;
    update::update(app, AppMessage::Resize(size.width, size.height));

    let start = app.router.location.current().to_string();
    update::update(app, AppMessage::Navigation(NavigationMessage::LocationChanged(start)));

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 4. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 5. 更新状态
            update::update(app, msg);
        }

        // 6. 后台任务的结果
        while let Ok(msg) = rx.try_recv() {
            update::update(app, msg);
        }

        update::update(app, AppMessage::Tick);
    }

    Ok(())
}
