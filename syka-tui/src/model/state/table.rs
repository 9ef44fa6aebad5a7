//! 表格视图状态
//!
//! 每张表格持有自己的集合和视图状态（搜索词、页码、每页条数、选中行）。
//! 集合或搜索词变化后立即重新同步：页码钳制到有效范围，选中行留在当前页内。
//! 行数据本身由 `syka_core::table::render` 计算，这里只保存输入。

use syka_core::table::{render_filtered, SearchFilter, TablePage};
use syka_core::types::{RecordKey, TableRecord};

/// 表格状态
#[derive(Debug, Clone)]
pub struct TableState<T> {
    records: Vec<T>,
    filter_query: String,
    filter: SearchFilter,
    current_page: usize,
    page_size: usize,
    /// 当前页内的行索引
    selected: usize,
}

impl<T: TableRecord> TableState<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            filter_query: String::new(),
            filter: SearchFilter::default(),
            current_page: 1,
            page_size: page_size.max(1),
            selected: 0,
        }
    }

    /// 全部记录（展示顺序）
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn set_records(&mut self, records: Vec<T>) {
        self.records = records;
        self.resync();
    }

    /// 渲染当前页
    pub fn page(&self) -> TablePage<'_, T> {
        render_filtered(&self.records, &self.filter, self.current_page, self.page_size)
    }

    #[cfg(test)]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn selected_row(&self) -> usize {
        self.selected
    }

    #[cfg(test)]
    pub fn filter_query(&self) -> &str {
        &self.filter_query
    }

    /// 设置搜索词，回到第 1 页
    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.filter_query = query.into();
        self.filter = SearchFilter::new(&self.filter_query);
        self.current_page = 1;
        self.selected = 0;
        self.resync();
    }

    /// 跳转到指定页（超出范围时钳制）
    pub fn go_to_page(&mut self, page: usize) {
        if page != self.current_page {
            self.selected = 0;
        }
        self.current_page = page;
        self.resync();
    }

    pub fn selected_record(&self) -> Option<&T> {
        self.page().rows().get(self.selected).copied()
    }

    pub fn find(&self, key: &RecordKey) -> Option<&T> {
        self.records.iter().find(|record| record.key() == *key)
    }

    pub fn find_mut(&mut self, key: &RecordKey) -> Option<&mut T> {
        self.records.iter_mut().find(|record| record.key() == *key)
    }

    pub fn contains(&self, key: &RecordKey) -> bool {
        self.find(key).is_some()
    }

    /// 按身份删除一条记录
    pub fn remove(&mut self, key: &RecordKey) -> Option<T> {
        let index = self.records.iter().position(|record| record.key() == *key)?;
        let removed = self.records.remove(index);
        self.resync();
        Some(removed)
    }

    /// 追加记录
    pub fn extend(&mut self, records: impl IntoIterator<Item = T>) {
        self.records.extend(records);
        self.resync();
    }

    fn resync(&mut self) {
        let (page, rows) = {
            let view = self.page();
            (view.page, view.rows().len())
        };
        self.current_page = page;
        self.selected = self.selected.min(rows.saturating_sub(1));
    }
}

/// 不依赖记录类型的表格操作
///
/// update 层和事件层通过它操作当前区块的表格。
pub trait TableControls {
    fn select_previous(&mut self);
    fn select_next(&mut self);
    fn select_first(&mut self);
    fn select_last(&mut self);
    fn previous_page(&mut self);
    fn next_page(&mut self);
    fn jump_to_page(&mut self, page: usize);
    fn push_filter_char(&mut self, ch: char);
    fn pop_filter_char(&mut self);
    fn clear_filter(&mut self);
    fn query(&self) -> &str;
    fn selected_key(&self) -> Option<RecordKey>;
}

impl<T: TableRecord> TableControls for TableState<T> {
    fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_next(&mut self) {
        let rows = self.page().rows().len();
        if self.selected + 1 < rows {
            self.selected += 1;
        }
    }

    fn select_first(&mut self) {
        self.selected = 0;
    }

    fn select_last(&mut self) {
        self.selected = self.page().rows().len().saturating_sub(1);
    }

    fn previous_page(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1).max(1));
    }

    fn next_page(&mut self) {
        self.go_to_page(self.current_page + 1);
    }

    fn jump_to_page(&mut self, page: usize) {
        self.go_to_page(page);
    }

    fn push_filter_char(&mut self, ch: char) {
        let mut query = self.filter_query.clone();
        query.push(ch);
        self.set_filter(query);
    }

    fn pop_filter_char(&mut self) {
        let mut query = self.filter_query.clone();
        if query.pop().is_some() {
            self.set_filter(query);
        }
    }

    fn clear_filter(&mut self) {
        if !self.filter_query.is_empty() {
            self.set_filter(String::new());
        }
    }

    fn query(&self) -> &str {
        &self.filter_query
    }

    fn selected_key(&self) -> Option<RecordKey> {
        self.selected_record().map(TableRecord::key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::numbered_accounts;
    use syka_core::types::Account;

    fn table(len: usize) -> TableState<Account> {
        let mut state = TableState::new(10);
        state.set_records(numbered_accounts(len));
        state
    }

    #[test]
    fn search_resets_to_first_page() {
        let mut state = table(53);
        state.go_to_page(4);
        assert_eq!(state.current_page(), 4);

        state.push_filter_char('1');
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.filter_query(), "1");
    }

    #[test]
    fn page_is_clamped_after_removal() {
        let mut state = table(11);
        state.go_to_page(2);
        assert_eq!(state.page().rows().len(), 1);

        state.remove(&RecordKey::Account(11));
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.page().rows().len(), 10);
    }

    #[test]
    fn out_of_range_jump_is_clamped() {
        let mut state = table(25);
        state.jump_to_page(9);
        assert_eq!(state.current_page(), 3);
        state.next_page();
        assert_eq!(state.current_page(), 3);
        state.previous_page();
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn selection_stays_on_visible_page() {
        let mut state = table(12);
        state.select_last();
        assert_eq!(state.selected_row(), 9);
        assert_eq!(state.selected_key(), Some(RecordKey::Account(10)));

        state.next_page();
        assert_eq!(state.selected_row(), 0);
        state.select_next();
        state.select_next();
        assert_eq!(state.selected_row(), 1);
        assert_eq!(state.selected_key(), Some(RecordKey::Account(12)));

        state.remove(&RecordKey::Account(12));
        assert_eq!(state.selected_row(), 0);
        assert_eq!(state.selected_key(), Some(RecordKey::Account(11)));
    }

    #[test]
    fn remove_targets_identity_not_position() {
        let mut state = table(5);
        state.set_filter("user_4");
        assert_eq!(state.selected_key(), Some(RecordKey::Account(4)));

        let removed = state.remove(&RecordKey::Account(2)).unwrap();
        assert_eq!(removed.id, 2);
        assert_eq!(state.records().len(), 4);
        assert_eq!(state.selected_key(), Some(RecordKey::Account(4)));
        assert!(state.remove(&RecordKey::Account(2)).is_none());
    }

    #[test]
    fn empty_table_has_no_selection() {
        let state = table(0);
        assert!(state.page().is_empty());
        assert_eq!(state.selected_key(), None);
    }
}
