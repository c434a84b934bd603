//! Row rendering for the users table.

use egui::{Stroke, Ui};
use egui_extras::TableRow;
use roster_business::{UserListEvent, UserListState, UserRecord};
use ustr::Ustr;

use super::cells::{
    render_action_buttons, render_avatar_cell, render_created_at_cell, render_edit_buttons,
    render_id_cell, render_name_cell, render_text_input_cell,
};
use crate::utils::colors::TABLE_BORDER_COLOR;

/// Renders a single user row with all cells.
///
/// The row being edited swaps its avatar and name cells for text inputs bound to
/// the edit draft, and its actions for Save/Cancel. Returns the event of any
/// clicked button.
#[inline]
pub fn render_user_row(
    row: &mut TableRow<'_, '_>,
    user: &UserRecord,
    state: &mut UserListState,
) -> Option<UserListEvent> {
    let editing = state.is_editing(&user.id);
    let mut event = None;

    row.col(|ui| {
        render_id_cell(ui, &user.id);
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        if editing {
            render_text_input_cell(ui, &mut state.draft.avatar, "Avatar URL");
        } else {
            render_avatar_cell(ui, &user.avatar);
        }
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        if editing {
            render_text_input_cell(ui, &mut state.draft.name, "Name");
        } else {
            render_name_cell(ui, &user.name);
        }
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        render_created_at_cell(ui, &user.created_at_display());
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        event = if editing {
            render_edit_buttons(ui)
        } else {
            render_action_buttons(ui, Ustr::from(&user.id))
        };
        draw_cell_bottom_border(ui);
    });

    event
}

/// Draws a bottom border line for a cell.
#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.available_rect_before_wrap();
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, TABLE_BORDER_COLOR),
    );
}
