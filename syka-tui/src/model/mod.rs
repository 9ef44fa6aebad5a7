//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构和只改动自身的小方法，不发起任何副作用。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content / 输入）
//!         mod navigation;     // 导航栏状态
//!         mod router;         // 位置历史与区块路由
//!         mod section;        // 区块 ID
//!
//!         pub mod state;      // 表格、弹窗、确认对话框、提示消息
//!
//!     值得一提的是，虽说 router.rs 与 state/ 都和“页面”有关，但两者有不同：
//!         - Router 只负责“现在在哪个区块”，由位置片段 `#<id>` 决定，
//!             相当于房间的门牌号；
//!         - State 是各个区块的数据容器，存储着记录、搜索词、当前页、选中行等，
//!             相当于储存了房间的内容。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusPanel,              // 当前焦点
//!             pub navigation: NavigationState,    // 导航状态
//!             pub router: Router,                 // 位置与当前区块
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!
//!             pub accounts: AccountsState,        // 账号表格
//!             pub proxies: ProxiesState,          // 代理表格
//!
//!             pub modal: ModalState,              // 弹窗
//!             pub confirm: ConfirmState,          // 确认对话框（队列）
//!             pub toast: ToastState,              // 提示消息
//!             ...
//!             pub effects: Effects,               // 异步副作用句柄
//!         }
//!
//!     使用：
//!         - 在 main.rs 中创建：model::App::new(&config, effects)
//!         - 在 update/mod.rs 中修改：app.should_quit = true;
//!         - 在 view/mod.rs 中读取：pub fn render(app: &App, ...)
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、位置与路由（Location / Router）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Location 保存位置片段的历史（类似浏览器的前进 / 后退）：
//!
//!         history: ["", "#accounts", "#proxies"]
//!                                         ↑ cursor
//!
//!         push()      在 cursor 之后追加，丢弃前进历史
//!         back()      cursor - 1
//!         forward()   cursor + 1
//!
//!     Router 把片段解析为区块：
//!         ""、"#"         → 默认区块
//!         "#proxies"      → SectionId::Proxies
//!         "#bogus"        → 忽略，当前区块保持不变
//!
//!     数据流：
//!         用户在导航栏按 Enter / 在位置栏输入 / Alt+← Alt+→
//!             ↓
//!         update/navigation.rs 修改 Location
//!             ↓
//!         发出 NavigationMessage::LocationChanged(fragment)
//!             ↓
//!         唯一的处理函数调用 router.apply()，并同步导航栏高亮
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、焦点管理（FocusPanel）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/focus.rs 中定义焦点面板枚举：
//!         - Navigation：左侧导航面板
//!         - Content：右侧内容面板
//!         - Search：正在输入表格搜索词
//!         - Location：正在输入位置片段
//!
//!     数据流：
//!         用户按 Tab 键
//!             ↓
//!         event/handler.rs 返回 AppMessage::ToggleFocus
//!             ↓
//!         update/mod.rs 执行 app.focus = app.focus.toggle()
//!             ↓
//!         view 层根据 app.focus.is_navigation() 设置边框颜色
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 四、表格状态（TableState<T>）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/state/table.rs 中定义，账号和代理共用：
//!
//!         TableState<T> {
//!             records,            // 全部记录（原始顺序）
//!             filter_query,       // 搜索词
//!             current_page,       // 当前页（从 1 开始）
//!             page_size,
//!             selected,           // 当前页内的选中行
//!         }
//!
//!     每次绘制都通过 syka_core::table::render_filtered 重新计算当前页，
//!     不缓存结果，所以记录增删后界面自然保持一致。
//!
//!     TableControls trait 抹去记录类型，update 层通过
//!     app.active_table_mut() 操作当前区块的表格。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 五、浮层（ModalState / ConfirmState / ToastState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     ModalState：当前打开的弹窗（添加代理、帮助）
//!
//!     ConfirmState：确认请求的 FIFO 队列，每个请求携带一个 oneshot::Sender，
//!         用户作答后把结果发给等待方；只显示队首的请求
//!
//!         request() ──▶ [ 请求 1 | 请求 2 | ... ]
//!                          ↑ 显示中
//!         resolve(Accepted) ──▶ 请求 1 的等待方收到 Accepted，请求 2 显示
//!
//!     ToastState：最新的一条提示消息及其到期时间，新消息替换旧消息
//!
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod focus;
mod navigation;
mod router;
mod section;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavigationState, SIDEBAR_WIDTH};
pub use router::{RouteChange, Router};
pub use section::SectionId;
