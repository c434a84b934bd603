//! Column definitions for the users table.

use egui_extras::Column;

/// Fixed column widths for consistent table layout
pub const ID_WIDTH: f32 = 50.0;
pub const AVATAR_WIDTH: f32 = 160.0;
pub const CREATED_AT_WIDTH: f32 = 170.0;
pub const ACTIONS_WIDTH: f32 = 130.0;
pub const ROW_HEIGHT: f32 = 58.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Avatar images are drawn as a square of this size.
pub const AVATAR_SIZE: f32 = 50.0;

/// Table column configuration for the users table.
///
/// Returns a vector of column definitions in order:
/// - ID (fixed)
/// - Avatar (fixed, wide enough for the URL input in edit mode)
/// - Name (flexible, fills remaining space)
/// - Created At (fixed)
/// - Actions (fixed)
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(ID_WIDTH),             // ID
        Column::exact(AVATAR_WIDTH),         // Avatar
        Column::remainder().at_least(120.0), // Name - flexible
        Column::exact(CREATED_AT_WIDTH),     // Created At
        Column::exact(ACTIONS_WIDTH),        // Actions
    ]
}
