use crate::commands::{CmdMessage, CmdResult, ListPage};
use crate::error::Result;
use crate::listing::{page_range, visible_pages, ListState, SortOrder};
use crate::store::{EmployeeStore, StorageBackend};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub sort: Option<SortOrder>,
    pub page: usize,
    pub page_size: usize,
}

impl ListQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            sort: None,
            page: 1,
            page_size,
        }
    }
}

/// One sorted page of the directory. A page outside the available range
/// falls back to the first page with a warning.
pub fn run<B: StorageBackend>(store: &EmployeeStore<B>, query: ListQuery) -> Result<CmdResult> {
    let records = store.get_all();
    let total_items = records.len();

    let mut state = ListState::new(query.page_size);
    state.sort = query.sort;

    let mut result = CmdResult::default();
    if query.page != 1 && !state.go_to_page(query.page, total_items) {
        result.add_message(CmdMessage::warning(format!(
            "Page {} is out of range, showing page 1 of {}",
            query.page,
            state.total_pages(total_items).max(1)
        )));
    }

    let rows = state.page_items(&records);
    let total_pages = state.total_pages(total_items);
    let page = ListPage {
        rows: rows.clone(),
        page: state.page,
        page_size: state.page_size,
        total_pages,
        total_items,
        range: page_range(state.page, state.page_size, total_items),
        links: visible_pages(state.page, total_pages),
    };

    Ok(result.with_listed_employees(rows).with_page(page))
}
