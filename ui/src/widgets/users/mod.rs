//! Users management module.
//!
//! This module contains the users panel widget and its submodules:
//! - `panel`: create form, status line and the table, wired to the controller
//! - `modals`: blocking alert and delete confirmation
//! - `table`: Table rendering components (columns, header, row, cells)

mod modals;
mod panel;
pub mod table;

pub use panel::users_panel;
