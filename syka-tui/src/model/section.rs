//! 区块定义
//!
//! 区块相当于 SPA 中的"页面"，由位置片段 `#<id>` 选中。

use crate::i18n::t;

/// 区块 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    /// 概览
    #[default]
    Dashboard,
    /// 账号列表
    Accounts,
    /// 代理列表
    Proxies,
}

impl SectionId {
    /// 所有声明的区块（导航栏顺序）
    pub const ALL: [SectionId; 3] = [SectionId::Dashboard, SectionId::Accounts, SectionId::Proxies];

    /// 片段中使用的 ID
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Dashboard => "dashboard",
            SectionId::Accounts => "accounts",
            SectionId::Proxies => "proxies",
        }
    }

    /// 精确匹配（区分大小写）
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    /// `#<id>`
    pub fn fragment(self) -> String {
        format!("#{}", self.id())
    }

    /// 导航栏与内容区标题
    pub fn label(self) -> &'static str {
        let texts = t();
        match self {
            SectionId::Dashboard => texts.nav.dashboard,
            SectionId::Accounts => texts.nav.accounts,
            SectionId::Proxies => texts.nav.proxies,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SectionId::Dashboard => "⌂",
            SectionId::Accounts => "@",
            SectionId::Proxies => "⇄",
        }
    }

    /// 是否包含数据表格
    pub fn has_table(self) -> bool {
        !matches!(self, SectionId::Dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_one_to_one() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_id(section.id()), Some(section));
        }
        assert_eq!(SectionId::from_id("Proxies"), None);
        assert_eq!(SectionId::Proxies.fragment(), "#proxies");
    }
}
