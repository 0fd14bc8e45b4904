pub mod controller;
pub mod page;
pub mod present;

pub use controller::{ListController, ListHandle, ListState, LoadOutcome};
pub use page::{
    CardView, HeaderView, ListPage, PageBody, PageView, RowView,
    SelectFilterView, TableView,
};
pub use present::ListPresentation;
