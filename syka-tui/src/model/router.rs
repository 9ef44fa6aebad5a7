//! 位置与路由
//!
//! `Location` 保存位置片段及其前进/后退历史，`Router` 把片段解析为区块。
//! 两者都不直接修改界面：位置的每一次变化都由 update 层发出
//! `NavigationMessage::LocationChanged`，再交给 [`Router::apply`]。

use super::SectionId;

/// 位置片段及历史
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    history: Vec<String>,
    cursor: usize,
}

impl Location {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            history: vec![initial.into()],
            cursor: 0,
        }
    }

    /// 当前片段
    pub fn current(&self) -> &str {
        self.history.get(self.cursor).map_or("", String::as_str)
    }

    /// 跳转到新片段，丢弃前进历史
    ///
    /// 与当前片段相同时不产生新的历史项，返回 `false`。
    pub fn push(&mut self, fragment: impl Into<String>) -> bool {
        let fragment = fragment.into();
        if fragment == self.current() {
            return false;
        }
        self.history.truncate(self.cursor + 1);
        self.history.push(fragment);
        self.cursor = self.history.len() - 1;
        true
    }

    /// 后退，返回新的当前片段
    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// 前进，返回新的当前片段
    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.history.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }
}

/// 路由结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteChange {
    /// 该区块成为唯一的激活区块
    Activated(SectionId),
    /// 未知片段，保持原区块
    Ignored,
}

/// 视图路由
#[derive(Debug, Clone)]
pub struct Router {
    default_section: SectionId,
    active: SectionId,
    pub location: Location,
}

impl Router {
    pub fn new(default_section: SectionId, initial_location: impl Into<String>) -> Self {
        Self {
            default_section,
            active: default_section,
            location: Location::new(initial_location),
        }
    }

    /// 解析片段
    ///
    /// 空片段（或只有 `#`）对应默认区块，前导 `#` 可省略，未知 ID 返回 `None`。
    pub fn resolve(&self, fragment: &str) -> Option<SectionId> {
        let fragment = fragment.trim();
        let id = fragment.strip_prefix('#').unwrap_or(fragment);
        if id.is_empty() {
            Some(self.default_section)
        } else {
            SectionId::from_id(id)
        }
    }

    /// 根据片段切换区块
    pub fn apply(&mut self, fragment: &str) -> RouteChange {
        match self.resolve(fragment) {
            Some(section) => {
                self.active = section;
                RouteChange::Activated(section)
            }
            None => {
                log::debug!("unknown location {fragment:?}, staying on #{}", self.active.id());
                RouteChange::Ignored
            }
        }
    }

    /// 当前激活的区块
    pub fn active(&self) -> SectionId {
        self.active
    }
}
