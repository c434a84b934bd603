//! Cell rendering functions for the users table.
//!
//! Each function renders a specific type of cell content with
//! centered alignment and appropriate styling.

use egui::{RichText, TextEdit, Ui, Vec2};
use roster_business::UserListEvent;
use ustr::Ustr;

use super::columns::AVATAR_SIZE;

/// Renders the record id.
#[inline]
pub fn render_id_cell(ui: &mut Ui, id: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(RichText::new(id).monospace());
    });
}

/// Renders the avatar image loaded from `url`.
///
/// A record without an avatar URL shows a dash instead of a broken image.
#[inline]
pub fn render_avatar_cell(ui: &mut Ui, url: &str) {
    if url.is_empty() {
        ui.label("-");
        return;
    }

    ui.add(
        egui::Image::new(url)
            .fit_to_exact_size(Vec2::splat(AVATAR_SIZE))
            .corner_radius(4.0),
    )
    .on_hover_text(url);
}

#[inline]
pub fn render_name_cell(ui: &mut Ui, name: &str) {
    ui.label(name);
}

/// Renders the creation time, already formatted for display.
#[inline]
pub fn render_created_at_cell(ui: &mut Ui, created_at: &str) {
    ui.label(RichText::new(created_at).small());
}

/// Renders a full-width text input, used in place of a display cell while editing.
#[inline]
pub fn render_text_input_cell(ui: &mut Ui, value: &mut String, hint: &str) {
    ui.add(
        TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
}

/// Renders the Edit and Delete buttons of a displayed row.
///
/// Returns the event of the clicked button, if any.
#[inline]
pub fn render_action_buttons(ui: &mut Ui, id: Ustr) -> Option<UserListEvent> {
    let mut event = None;

    ui.horizontal(|ui| {
        if ui.button("Edit").clicked() {
            event = Some(UserListEvent::BeginEdit(id));
        }
        if ui.button("Delete").clicked() {
            event = Some(UserListEvent::RequestDelete(id));
        }
    });

    event
}

/// Renders the Save and Cancel buttons of the row being edited.
#[inline]
pub fn render_edit_buttons(ui: &mut Ui) -> Option<UserListEvent> {
    let mut event = None;

    ui.horizontal(|ui| {
        if ui.button("Save").clicked() {
            event = Some(UserListEvent::SaveEdit);
        }
        if ui.button("Cancel").clicked() {
            event = Some(UserListEvent::CancelEdit);
        }
    });

    event
}
