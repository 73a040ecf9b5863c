use super::enums::{PageNav, Tab};
use super::task::Task;

/// Default number of tasks per page
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Tab and page position on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub tab: Tab,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            tab: Tab::AssignedToMe,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Switch tab; always lands on page 1
    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.page = 1;
    }

    /// Apply a navigation request against `total` pages.
    /// Returns true when the page actually changed.
    pub fn navigate(&mut self, nav: PageNav, total: usize) -> bool {
        let target = match nav {
            PageNav::Previous if self.page > 1 => self.page - 1,
            PageNav::Next if self.page < total => self.page + 1,
            PageNav::Jump(n) if (1..=total).contains(&n) => n,
            _ => return false,
        };
        let changed = target != self.page;
        self.page = target;
        changed
    }
}

/// One rendered page of the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    pub tasks: Vec<&'a Task>,
    /// Page being shown (1-based)
    pub page: usize,
    pub total_pages: usize,
    /// Tasks in the active tab across all pages
    pub filtered_count: usize,
}

impl PageView<'_> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Tasks belonging to `tab` relative to `user_id`, in server order
pub fn filter_tasks<'a>(tasks: &'a [Task], user_id: &str, tab: Tab) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| match tab {
            Tab::AssignedToMe => task.is_assigned_to(user_id),
            Tab::AssignedByMe => task.is_assigned_by(user_id),
        })
        .collect()
}

/// ceil(count / size); zero when there is nothing to show
pub fn total_pages(count: usize, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    count.div_ceil(size)
}

/// Items in `[(page-1)*size, page*size)`, clamped to the list
pub fn page_slice<T>(items: &[T], page: usize, size: usize) -> &[T] {
    if page == 0 || size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(size).min(items.len());
    let end = page.saturating_mul(size).min(items.len());
    &items[start..end]
}

/// Filter by tab then cut out the current page
pub fn visible_page<'a>(tasks: &'a [Task], user_id: &str, view: &ViewState) -> PageView<'a> {
    let filtered = filter_tasks(tasks, user_id, view.tab);
    let total = total_pages(filtered.len(), view.page_size);
    let page_tasks = page_slice(&filtered, view.page, view.page_size).to_vec();
    PageView {
        tasks: page_tasks,
        page: view.page,
        total_pages: total,
        filtered_count: filtered.len(),
    }
}

/// Count of tasks in each tab (for the tab strip)
pub fn tab_counts(tasks: &[Task], user_id: &str) -> (usize, usize) {
    let to_me = tasks.iter().filter(|t| t.is_assigned_to(user_id)).count();
    let by_me = tasks.iter().filter(|t| t.is_assigned_by(user_id)).count();
    (to_me, by_me)
}
