//! Built-in widgets

mod list;

pub use list::{ListItem, RowWriter, SelectionList};
