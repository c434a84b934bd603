//! Modal dialogs for the users panel.

use egui::{Align2, Ui, Window};
use roster_business::UserListEvent;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this user?";

/// Shows the blocking alert. Closing it in any way dismisses it.
pub fn show_alert_modal(message: &str, ui: &mut Ui) -> Option<UserListEvent> {
    let mut open = true;
    let mut event = None;

    Window::new("Alert")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.label(message);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                event = Some(UserListEvent::DismissAlert);
            }
        });

    if !open {
        event = Some(UserListEvent::DismissAlert);
    }
    event
}

/// Asks before deleting. Closing the window counts as declining.
pub fn show_delete_user_modal(id: &str, ui: &mut Ui) -> Option<UserListEvent> {
    let mut open = true;
    let mut event = None;

    Window::new(format!("Delete User - {id}"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.label(DELETE_CONFIRMATION);
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui.button("Delete").clicked() {
                    event = Some(UserListEvent::ConfirmDelete);
                }
                if ui.button("Cancel").clicked() {
                    event = Some(UserListEvent::DeclineDelete);
                }
            });
        });

    if !open {
        event = Some(UserListEvent::DeclineDelete);
    }
    event
}
