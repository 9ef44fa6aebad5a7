//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：添加代理、帮助、确认对话框
//! 3. **页面内容归对应页面**：如 `dashboard.*`, `proxies.*`
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键动作说明

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示
    pub hints: HintTexts,
    /// 导航栏文本
    pub nav: NavTexts,
    /// 记录状态标签
    pub status: StatusTexts,
    /// 概览页文本
    pub dashboard: DashboardTexts,
    /// 账号页面文本
    pub accounts: AccountsTexts,
    /// 代理页面文本
    pub proxies: ProxiesTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub ok: &'static str,
    pub cancel: &'static str,
    pub no_data: &'static str,
    pub page: &'static str,
    pub of: &'static str,
    pub records: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本（动作词）
pub struct HintTexts {
    pub switch_panel: &'static str,
    pub navigate: &'static str,
    pub open: &'static str,
    pub select: &'static str,
    pub page: &'static str,
    pub search: &'static str,
    pub go_to: &'static str,
    pub history: &'static str,
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub test: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub apply: &'static str,
    pub cancel: &'static str,
}

// ============================================================================
// 导航
// ============================================================================

pub struct NavTexts {
    pub title: &'static str,
    pub dashboard: &'static str,
    pub accounts: &'static str,
    pub proxies: &'static str,
}

// ============================================================================
// 状态标签
// ============================================================================

pub struct StatusTexts {
    pub active: &'static str,
    pub banned: &'static str,
    pub checking: &'static str,
    pub working: &'static str,
    pub dead: &'static str,
    pub unknown: &'static str,
}

// ============================================================================
// 页面
// ============================================================================

pub struct DashboardTexts {
    pub welcome: &'static str,
    pub subtitle: &'static str,
    pub accounts_total: &'static str,
    pub proxies_total: &'static str,
}

pub struct AccountsTexts {
    pub col_id: &'static str,
    pub col_phone: &'static str,
    pub col_username: &'static str,
    pub col_status: &'static str,
    pub col_last_activity: &'static str,
    pub delete_title: &'static str,
    pub delete_body: &'static str,
    pub deleted: &'static str,
}

pub struct ProxiesTexts {
    pub col_address: &'static str,
    pub col_type: &'static str,
    pub col_status: &'static str,
    pub col_speed: &'static str,
    pub col_last_check: &'static str,
    pub delete_title: &'static str,
    pub delete_body: &'static str,
    pub deleted: &'static str,
    /// 前面拼接数量
    pub added: &'static str,
    pub none_added: &'static str,
    pub test_started: &'static str,
    pub test_working: &'static str,
    pub test_dead: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

pub struct ModalTexts {
    pub add_proxies: AddProxiesTexts,
    pub help: HelpTexts,
    pub confirm_hint: &'static str,
}

pub struct AddProxiesTexts {
    pub title: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub hint: &'static str,
}

pub struct HelpTexts {
    pub title: &'static str,
    pub global: &'static str,
    pub table: &'static str,
    pub close_hint: &'static str,
    pub switch_panel: &'static str,
    pub move_selection: &'static str,
    pub change_page: &'static str,
    pub jump_page: &'static str,
    pub search: &'static str,
    pub go_to: &'static str,
    pub history: &'static str,
    pub add_proxies: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub test: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

pub struct StatusBarTexts {
    pub search_prompt: &'static str,
    pub location_prompt: &'static str,
    pub editing: &'static str,
    pub delete_pending: &'static str,
    pub provider_failed: &'static str,
}
