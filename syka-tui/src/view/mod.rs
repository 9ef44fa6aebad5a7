//!
//! src/view/mod.rs
//! View 层：界面渲染
//!
//! View 层只读取 &App，把状态画到 Frame 上，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局（标题栏、导航、内容、状态栏、浮层）
//!         pub mod theme;          // 主题颜色与常用样式
//!         mod components;         // 导航、状态栏、表格、分页、弹窗、确认框、提示
//!         mod pages;              // 概览、账号、代理
//!
//!
//!     布局：
//!
//!         ┌──────────────── 标题栏：应用名 · #location ─────────────────┐
//!         ├──────────┬───────────────────────────────────────────────────┤
//!         │  导航    │  区块标题                                         │
//!         │ ▶ 概览   │  / 搜索                                           │
//!         │   账号   │  表格                                             │
//!         │   代理   │  分页                               ┌─ 提示 ──┐   │
//!         │          │                                     └─────────┘   │
//!         ├──────────┴───────────────────────────────────────────────────┤
//!         │ 状态栏：快捷键提示 │ 状态消息                                 │
//!         └──────────────────────────────────────────────────────────────┘
//!
//!     弹窗和确认对话框绘制在最上层，位置由 model/state/modal.rs 计算，
//!     鼠标命中判断使用同一套计算。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

use ratatui::Frame;

use crate::model::App;

/// 渲染整个界面
pub fn render(app: &App, frame: &mut Frame) {
    layout::render(app, frame);
}
