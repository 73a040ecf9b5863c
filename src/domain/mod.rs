pub mod enums;
pub mod task;
pub mod views;

pub use enums::{AuthMode, Level, PageNav, Tab, TaskStatus, UiMode};
pub use task::{Task, User};
pub use views::{
    tab_counts, visible_page, PageView, ViewState, DEFAULT_PAGE_SIZE,
};
