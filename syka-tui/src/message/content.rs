//! 内容面板消息
//!
//! 表格内的选择、翻页、搜索，以及针对某条记录的操作。
//! 行操作携带记录身份（`RecordKey`），而不是行号。

use syka_core::types::{ProxyAddr, ProxyCheck, RecordKey};

use crate::model::state::ConfirmOutcome;

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 行选择 ==========
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,

    // ========== 分页 ==========
    PreviousPage,
    NextPage,
    /// 点击分页链接（页码从 1 开始）
    GoToPage(usize),

    // ========== 搜索 ==========
    OpenSearch,
    SearchInput(char),
    SearchBackspace,
    /// 结束输入，保留搜索词
    CloseSearch,
    /// 清空搜索词
    ClearSearch,

    // ========== 行操作 ==========
    /// 打开添加弹窗
    Add,
    /// 编辑意图
    Edit(RecordKey),
    /// 请求删除（需要确认）
    Delete(RecordKey),
    /// 检测代理
    TestProxy(ProxyAddr),

    // ========== 异步结果 ==========
    /// 删除确认已有结果
    DeleteResolved {
        key: RecordKey,
        outcome: ConfirmOutcome,
    },
    /// 代理检测完成
    ProxyChecked {
        addr: ProxyAddr,
        result: Result<ProxyCheck, String>,
    },
}
