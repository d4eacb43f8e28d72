//! # List Presentation
//!
//! Pure helpers used to present a snapshot of the store: sorting, paging,
//! the page-number window and bulk selection. Nothing here touches the store;
//! callers pass in whatever `get_all()` returned.

use crate::model::{Employee, Field};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use uuid::Uuid;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Most page links shown at once, ellipses included.
const MAX_VISIBLE_PAGES: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub field: Field,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn asc(field: Field) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: Field) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

/// Stable sort by `order`; `None` keeps insertion order.
///
/// Text compares case-insensitively, so `"ahmet"` and `"Ahmet"` are equal keys
/// and keep their relative input order in both directions.
pub fn sort_employees(records: &[Employee], order: Option<SortOrder>) -> Vec<Employee> {
    let mut sorted = records.to_vec();
    let Some(order) = order else {
        return sorted;
    };

    sorted.sort_by(|a, b| {
        let ord = compare_field(a, b, order.field);
        match order.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    sorted
}

fn compare_field(a: &Employee, b: &Employee, field: Field) -> Ordering {
    let left = a.data.get(field).to_lowercase();
    let right = b.data.get(field).to_lowercase();
    left.cmp(&right)
}

/// Number of pages needed for `total` items; zero items means zero pages.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// The 1-based `page` of `items`. Pages past the end (and page 0) are empty;
/// keeping the page in range is the caller's job.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// 1-based inclusive item range shown on `page`, for "Showing 11-20 of 25".
pub fn page_range(page: usize, page_size: usize, total: usize) -> Option<(usize, usize)> {
    if page == 0 || page_size == 0 {
        return None;
    }
    let first = (page - 1).saturating_mul(page_size) + 1;
    if first > total {
        return None;
    }
    Some((first, (page * page_size).min(total)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// Page links for a pager showing at most seven entries.
///
/// - few pages: every page
/// - near the start: `1 2 3 4 5 … N`
/// - near the end: `1 … N-4 N-3 N-2 N-1 N`
/// - otherwise: `1 … c-1 c c+1 … N`
pub fn visible_pages(current: usize, total: usize) -> Vec<PageLink> {
    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(PageLink::Page).collect();
    }

    let mut links = Vec::with_capacity(MAX_VISIBLE_PAGES);
    if current <= 4 {
        links.extend((1..=5).map(PageLink::Page));
        links.push(PageLink::Ellipsis);
        links.push(PageLink::Page(total));
    } else if current >= total - 3 {
        links.push(PageLink::Page(1));
        links.push(PageLink::Ellipsis);
        links.extend((total - 4..=total).map(PageLink::Page));
    } else {
        links.push(PageLink::Page(1));
        links.push(PageLink::Ellipsis);
        links.extend((current - 1..=current + 1).map(PageLink::Page));
        links.push(PageLink::Ellipsis);
        links.push(PageLink::Page(total));
    }
    links
}

/// Bulk selection of records, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<Uuid>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[Uuid] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.ids.contains(id)
    }

    pub fn set(&mut self, id: Uuid, selected: bool) {
        if selected {
            if !self.contains(&id) {
                self.ids.push(id);
            }
        } else {
            self.ids.retain(|s| s != &id);
        }
    }

    /// Select or unselect every id of the visible page, leaving selections on
    /// other pages alone.
    pub fn set_page(&mut self, page_ids: &[Uuid], selected: bool) {
        if selected {
            for id in page_ids {
                self.set(*id, true);
            }
        } else {
            let page: HashSet<&Uuid> = page_ids.iter().collect();
            self.ids.retain(|id| !page.contains(id));
        }
    }

    /// True when the page is non-empty and every id on it is selected.
    pub fn covers_page(&self, page_ids: &[Uuid]) -> bool {
        !page_ids.is_empty() && page_ids.iter().all(|id| self.contains(id))
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

/// State of the list screen: sort order, paging and selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub sort: Option<SortOrder>,
    pub page: usize,
    pub page_size: usize,
    pub selection: Selection,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            sort: None,
            page: 1,
            page_size: page_size.max(1),
            selection: Selection::new(),
        }
    }

    /// Clicking a column: the same column flips direction, a new column
    /// starts ascending.
    pub fn toggle_sort(&mut self, field: Field) {
        self.sort = Some(match self.sort {
            Some(order) if order.field == field => SortOrder {
                field,
                direction: order.direction.flipped(),
            },
            _ => SortOrder::asc(field),
        });
    }

    /// Requests outside `1..=total_pages` or for the current page are ignored.
    /// Returns whether the page changed.
    pub fn go_to_page(&mut self, page: usize, total_items: usize) -> bool {
        let total = total_pages(total_items, self.page_size);
        if page < 1 || page > total || page == self.page {
            return false;
        }
        self.page = page;
        self.selection.clear();
        true
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
        self.selection.clear();
    }

    /// Sorted rows of the current page.
    pub fn page_items(&self, records: &[Employee]) -> Vec<Employee> {
        let sorted = sort_employees(records, self.sort);
        paginate(&sorted, self.page, self.page_size).to_vec()
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_pages(total_items, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EmployeeData;

    fn named(first: &str, last: &str) -> Employee {
        Employee::new(EmployeeData {
            first_name: first.into(),
            last_name: last.into(),
            ..Default::default()
        })
    }

    fn first_names(records: &[Employee]) -> Vec<&str> {
        records.iter().map(|e| e.data.first_name.as_str()).collect()
    }

    #[test]
    fn paginates_twenty_five_items() {
        let items: Vec<usize> = (0..25).collect();
        assert_eq!(paginate(&items, 1, 10), &items[0..10]);
        assert_eq!(paginate(&items, 2, 10), &items[10..20]);
        assert_eq!(paginate(&items, 3, 10), &items[20..25]);
        assert_eq!(paginate(&items, 3, 10).len(), 5);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<usize> = (0..25).collect();
        assert!(paginate(&items, 0, 10).is_empty());
        assert!(paginate(&items, 4, 10).is_empty());
        assert!(paginate(&items, usize::MAX, 10).is_empty());
    }

    #[test]
    fn total_pages_edges() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn page_range_labels() {
        assert_eq!(page_range(1, 10, 50), Some((1, 10)));
        assert_eq!(page_range(3, 10, 25), Some((21, 25)));
        assert_eq!(page_range(4, 10, 25), None);
        assert_eq!(page_range(1, 10, 0), None);
    }

    #[test]
    fn no_sort_keeps_insertion_order() {
        let records = vec![named("b", "B"), named("a", "A")];
        assert_eq!(first_names(&sort_employees(&records, None)), vec!["b", "a"]);
    }

    #[test]
    fn sorts_case_insensitively_and_stably() {
        let records = vec![
            named("1", "demir"),
            named("2", "Aydın"),
            named("3", "Demir"),
            named("4", "arslan"),
            named("5", "DEMIR"),
        ];

        let asc = sort_employees(&records, Some(SortOrder::asc(Field::LastName)));
        assert_eq!(first_names(&asc), vec!["4", "2", "1", "3", "5"]);

        let desc = sort_employees(&records, Some(SortOrder::desc(Field::LastName)));
        assert_eq!(first_names(&desc), vec!["1", "3", "5", "2", "4"]);
    }

    #[test]
    fn sorting_does_not_touch_the_input() {
        let records = vec![named("b", "B"), named("a", "A")];
        let _ = sort_employees(&records, Some(SortOrder::asc(Field::FirstName)));
        assert_eq!(first_names(&records), vec!["b", "a"]);
    }

    #[test]
    fn iso_dates_sort_chronologically() {
        let mut a = named("a", "");
        a.data.date_of_birth = "1990-05-01".into();
        let mut b = named("b", "");
        b.data.date_of_birth = "1985-12-31".into();

        let sorted = sort_employees(&[a, b], Some(SortOrder::asc(Field::DateOfBirth)));
        assert_eq!(first_names(&sorted), vec!["b", "a"]);
    }

    #[test]
    fn field_names_parse_loosely() {
        assert_eq!("lastName".parse::<Field>(), Ok(Field::LastName));
        assert_eq!("last-name".parse::<Field>(), Ok(Field::LastName));
        assert_eq!("DATE_OF_BIRTH".parse::<Field>(), Ok(Field::DateOfBirth));
        assert!("salary".parse::<Field>().is_err());
    }

    #[test]
    fn visible_pages_windows() {
        use PageLink::{Ellipsis, Page};

        assert_eq!(visible_pages(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            visible_pages(2, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
        assert_eq!(
            visible_pages(8, 10),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            visible_pages(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert!(visible_pages(1, 0).is_empty());
    }

    #[test]
    fn selection_page_toggle_keeps_other_pages() {
        let other = Uuid::new_v4();
        let page = vec![Uuid::new_v4(), Uuid::new_v4()];
        let mut selection = Selection::new();
        selection.set(other, true);

        selection.set_page(&page, true);
        assert!(selection.covers_page(&page));
        assert_eq!(selection.len(), 3);

        selection.set_page(&page, false);
        assert_eq!(selection.ids(), &[other]);
        assert!(!selection.covers_page(&page));
        assert!(!selection.covers_page(&[]));
    }

    #[test]
    fn selecting_twice_does_not_duplicate() {
        let id = Uuid::new_v4();
        let mut selection = Selection::new();
        selection.set(id, true);
        selection.set(id, true);
        assert_eq!(selection.len(), 1);
        selection.set(id, false);
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_sort_flips_then_resets() {
        let mut state = ListState::default();
        state.toggle_sort(Field::LastName);
        assert_eq!(state.sort, Some(SortOrder::asc(Field::LastName)));
        state.toggle_sort(Field::LastName);
        assert_eq!(state.sort, Some(SortOrder::desc(Field::LastName)));
        state.toggle_sort(Field::Email);
        assert_eq!(state.sort, Some(SortOrder::asc(Field::Email)));
    }

    #[test]
    fn page_changes_clear_selection() {
        let mut state = ListState::new(10);
        state.selection.set(Uuid::new_v4(), true);

        assert!(!state.go_to_page(4, 25));
        assert!(!state.go_to_page(1, 25));
        assert_eq!(state.selection.len(), 1);

        assert!(state.go_to_page(3, 25));
        assert_eq!(state.page, 3);
        assert!(state.selection.is_empty());

        state.selection.set(Uuid::new_v4(), true);
        state.set_page_size(20);
        assert_eq!(state.page, 1);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn page_items_sorts_before_slicing() {
        let records: Vec<Employee> = (0..12)
            .rev()
            .map(|i| named(&format!("{:02}", i), ""))
            .collect();
        let mut state = ListState::new(5);
        state.toggle_sort(Field::FirstName);
        state.go_to_page(3, records.len());

        assert_eq!(first_names(&state.page_items(&records)), vec!["10", "11"]);
    }
}
