//! 应用主状态结构

use std::collections::{HashSet, VecDeque};
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use syka_core::types::RecordKey;

use super::state::{
    AccountsState, ConfirmState, ModalState, ProxiesState, Severity, TableControls, ToastState,
};
use super::{FocusPanel, NavigationState, Router, SectionId};
use crate::backend::{AppConfig, Effects};
use crate::message::AppMessage;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 位置与区块路由
    pub router: Router,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 各区块的数据 ===
    pub accounts: AccountsState,
    pub proxies: ProxiesState,

    // === 浮层 ===
    pub modal: ModalState,
    pub confirm: ConfirmState,
    pub toast: ToastState,

    /// 位置栏的输入内容
    pub location_input: String,

    /// 已请求确认但尚未有结果的删除
    pub pending_deletes: HashSet<RecordKey>,

    /// 终端尺寸，用于鼠标命中判断
    pub viewport: Rect,

    /// 本轮 update 结束前还要处理的消息
    pub(crate) follow_ups: VecDeque<AppMessage>,

    pub effects: Effects,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: &AppConfig, effects: Effects) -> Self {
        let default_section = SectionId::from_id(&config.default_section).unwrap_or_else(|| {
            log::warn!(
                "unknown default section {:?}, falling back to dashboard",
                config.default_section
            );
            SectionId::default()
        });

        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            router: Router::new(default_section, config.start_location.clone()),
            status_message: None,
            accounts: AccountsState::new(config.page_size),
            proxies: ProxiesState::new(config.page_size),
            modal: ModalState::new(),
            confirm: ConfirmState::new(),
            toast: ToastState::new(Duration::from_millis(config.toast_duration_ms)),
            location_input: String::new(),
            pending_deletes: HashSet::new(),
            viewport: Rect::default(),
            follow_ups: VecDeque::new(),
            effects,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 显示提示消息
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.toast.notify(message, severity, Instant::now());
    }

    /// 当前区块
    pub fn section(&self) -> SectionId {
        self.router.active()
    }

    /// 排入一条在本轮 update 中继续处理的消息
    pub fn emit(&mut self, msg: AppMessage) {
        self.follow_ups.push_back(msg);
    }

    /// 当前区块的表格（仪表盘没有表格）
    pub fn active_table(&self) -> Option<&dyn TableControls> {
        match self.section() {
            SectionId::Accounts => Some(&self.accounts),
            SectionId::Proxies => Some(&self.proxies),
            SectionId::Dashboard => None,
        }
    }

    pub fn active_table_mut(&mut self) -> Option<&mut dyn TableControls> {
        match self.section() {
            SectionId::Accounts => Some(&mut self.accounts),
            SectionId::Proxies => Some(&mut self.proxies),
            SectionId::Dashboard => None,
        }
    }

    /// 当前表格中选中记录的身份
    pub fn selected_key(&self) -> Option<RecordKey> {
        self.active_table().and_then(TableControls::selected_key)
    }
}
