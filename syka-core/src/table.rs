//! 表格渲染管线
//!
//! 纯函数：`(集合, 过滤谓词, 页码, 每页条数) -> TablePage`
//!
//! 1. 按谓词过滤，保持原有顺序
//! 2. 计算总页数 `ceil(过滤后数量 / 每页条数)`
//! 3. 将页码钳制到 `[1, max(1, 总页数)]`
//! 4. 切出当前页的行
//! 5. 生成分页描述：总页数 <= 1 时省略，否则每页一个链接，恰好一个处于激活状态
//!
//! 结果只借用集合，不做任何修改，相同输入总是得到相同输出。

use crate::types::TableRecord;

/// 搜索过滤器：对记录的字段投影做大小写不敏感的子串匹配
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// 空查询匹配所有记录
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches<T: TableRecord>(&self, record: &T) -> bool {
        self.is_empty()
            || record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// 分页链接
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    /// 页码（从 1 开始）
    pub number: usize,
    pub active: bool,
}

/// 分页描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub links: Vec<PageLink>,
}

impl Pagination {
    fn new(page: usize, total_pages: usize) -> Self {
        Self {
            links: (1..=total_pages)
                .map(|number| PageLink {
                    number,
                    active: number == page,
                })
                .collect(),
        }
    }

    /// 当前激活的页码
    pub fn active(&self) -> Option<usize> {
        self.links.iter().find(|link| link.active).map(|link| link.number)
    }
}

/// 表格主体
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody<'a, T> {
    /// 当前页的行
    Rows(Vec<&'a T>),
    /// 没有可显示的数据，渲染一行通栏占位
    Placeholder,
}

/// 渲染结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePage<'a, T> {
    pub body: TableBody<'a, T>,
    /// 钳制后的页码
    pub page: usize,
    /// 总页数（无数据时为 0）
    pub total_pages: usize,
    /// 过滤后的记录数
    pub filtered_count: usize,
    /// 每页条数（已规范化，至少为 1）
    pub page_size: usize,
    pub pagination: Option<Pagination>,
}

impl<'a, T> TablePage<'a, T> {
    /// 当前页的行（占位时为空）
    pub fn rows(&self) -> &[&'a T] {
        match &self.body {
            TableBody::Rows(rows) => rows,
            TableBody::Placeholder => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.body, TableBody::Placeholder)
    }

    /// 当前页第一行在过滤结果中的序号（从 0 开始）
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }
}

/// 计算总页数
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// 将页码钳制到 `[1, max(1, total_pages)]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// 渲染一页表格
pub fn render<'a, T, P>(collection: &'a [T], predicate: P, page: usize, page_size: usize) -> TablePage<'a, T>
where
    P: Fn(&T) -> bool,
{
    let page_size = page_size.max(1);
    let filtered: Vec<&'a T> = collection.iter().filter(|record| predicate(record)).collect();
    let filtered_count = filtered.len();
    let total_pages = total_pages(filtered_count, page_size);
    let page = clamp_page(page, total_pages);

    let start = (page - 1) * page_size;
    let rows: Vec<&'a T> = filtered.into_iter().skip(start).take(page_size).collect();

    let body = if rows.is_empty() {
        TableBody::Placeholder
    } else {
        TableBody::Rows(rows)
    };

    let pagination = (total_pages > 1).then(|| Pagination::new(page, total_pages));

    TablePage {
        body,
        page,
        total_pages,
        filtered_count,
        page_size,
        pagination,
    }
}

/// 用搜索过滤器渲染一页表格
pub fn render_filtered<'a, T: TableRecord>(
    collection: &'a [T],
    filter: &SearchFilter,
    page: usize,
    page_size: usize,
) -> TablePage<'a, T> {
    render(collection, |record| filter.matches(record), page, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{accounts, numbered_accounts};
    use crate::types::{Account, AccountStatus};

    fn no_filter(_: &Account) -> bool {
        true
    }

    #[test]
    fn row_count_matches_formula_for_in_range_pages() {
        for len in [0usize, 1, 9, 10, 11, 25, 53] {
            let data = numbered_accounts(len);
            for page_size in [1usize, 3, 10, 20] {
                let pages = total_pages(len, page_size).max(1);
                for page in 1..=pages {
                    let result = render(&data, no_filter, page, page_size);
                    let expected = page_size.min(len.saturating_sub((page - 1) * page_size));
                    assert_eq!(result.rows().len(), expected, "len={len} size={page_size} page={page}");
                }
            }
        }
    }

    #[test]
    fn rows_are_the_requested_slice() {
        let data = numbered_accounts(25);
        let result = render(&data, no_filter, 3, 10);
        let ids: Vec<u64> = result.rows().iter().map(|a| a.id).collect();
        assert_eq!(ids, (21..=25).collect::<Vec<_>>());
        assert_eq!(result.offset(), 20);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let data = numbered_accounts(5);
        let result = render(&data, no_filter, 999, 10);
        assert_eq!(result.page, 1);
        assert_eq!(result.rows().len(), 5);

        let data = numbered_accounts(25);
        let result = render(&data, no_filter, 999, 10);
        assert_eq!(result.page, 3);
        assert_eq!(result.rows().len(), 5);

        let result = render(&data, no_filter, 0, 10);
        assert_eq!(result.page, 1);
    }

    #[test]
    fn empty_result_is_placeholder_without_pagination() {
        let data = numbered_accounts(0);
        let result = render(&data, no_filter, 4, 10);
        assert_eq!(result.body, TableBody::Placeholder);
        assert_eq!(result.total_pages, 0);
        assert_eq!(result.page, 1);
        assert!(result.pagination.is_none());

        let data = numbered_accounts(12);
        let result = render(&data, |_| false, 1, 10);
        assert!(result.is_empty());
        assert_eq!(result.filtered_count, 0);
    }

    #[test]
    fn pagination_absent_iff_single_page() {
        let data = numbered_accounts(10);
        assert!(render(&data, no_filter, 1, 10).pagination.is_none());

        let data = numbered_accounts(11);
        let pagination = render(&data, no_filter, 2, 10).pagination.unwrap();
        assert_eq!(pagination.links.len(), 2);
        assert_eq!(pagination.links.iter().filter(|l| l.active).count(), 1);
        assert_eq!(pagination.active(), Some(2));
    }

    #[test]
    fn pagination_marks_clamped_page_active() {
        let data = numbered_accounts(53);
        let result = render(&data, no_filter, 100, 10);
        let pagination = result.pagination.unwrap();
        assert_eq!(pagination.links.len(), 6);
        assert_eq!(pagination.active(), Some(6));
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let data = numbered_accounts(3);
        let result = render(&data, no_filter, 2, 0);
        assert_eq!(result.page_size, 1);
        assert_eq!(result.total_pages, 3);
        assert_eq!(result.rows()[0].id, 2);
    }

    #[test]
    fn filter_is_case_insensitive_over_phone_and_username() {
        let data = accounts();
        let filter = SearchFilter::new("ALICE");
        let result = render_filtered(&data, &filter, 1, 10);
        assert_eq!(result.filtered_count, 1);
        assert_eq!(result.rows()[0].username, "alice_w");

        let filter = SearchFilter::new("+7926");
        assert_eq!(render_filtered(&data, &filter, 1, 10).filtered_count, 2);
    }

    #[test]
    fn filtering_is_idempotent_and_order_preserving() {
        let data = accounts();
        let filter = SearchFilter::new("o");

        let once: Vec<Account> = data.iter().filter(|a| filter.matches(*a)).cloned().collect();
        let twice: Vec<Account> = once.iter().filter(|a| filter.matches(*a)).cloned().collect();
        assert_eq!(once, twice);

        let positions: Vec<usize> = once
            .iter()
            .map(|a| data.iter().position(|d| d.id == a.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_filter_matches_everything() {
        let data = accounts();
        let filter = SearchFilter::new("");
        assert!(filter.is_empty());
        assert_eq!(render_filtered(&data, &filter, 1, 100).filtered_count, data.len());
    }

    #[test]
    fn render_is_reproducible() {
        let data = accounts();
        let filter = SearchFilter::new("active");
        let a = render(&data, |acc: &Account| acc.status == AccountStatus::Active, 1, 2);
        let b = render(&data, |acc: &Account| acc.status == AccountStatus::Active, 1, 2);
        assert_eq!(a, b);
        // status text is not part of the account projection
        assert_eq!(render_filtered(&data, &filter, 1, 10).filtered_count, 0);
    }
}
