//! Main panel for users management.

use egui::{Response, Ui};
use egui_extras::TableBuilder;
use roster_business::{
    UserListCompute, UserListController, UserListEvent, UserListState, UserMutationCompute,
    UserRecord,
};
use roster_states::StateCtx;

use super::modals::{show_alert_modal, show_delete_user_modal};
use super::table::columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use super::table::header::render_table_header;
use super::table::row::render_user_row;
use crate::utils::colors::COLOR_RED;

/// Displays the create form, the status line, the users table and any open modal.
///
/// Every interaction becomes a `UserListEvent` handed to `UserListController` once the
/// frame's widgets are drawn.
pub fn users_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let mut events: Vec<UserListEvent> = Vec::new();

    // Clone the snapshot so the view-model can be borrowed mutably for inputs
    let (users, is_loading, list_error) = match state_ctx.cached::<UserListCompute>() {
        Some(list) => (
            list.users().to_vec(),
            list.is_loading(),
            list.error_message().map(str::to_owned),
        ),
        None => (Vec::new(), false, None),
    };
    let mutation_error = state_ctx
        .cached::<UserMutationCompute>()
        .and_then(|mutation| mutation.error_message().map(str::to_owned));

    let state = state_ctx.state_mut::<UserListState>();
    let modal_open = state.alert().is_some() || state.pending_delete().is_some();

    let response = ui
        .add_enabled_ui(!modal_open, |ui| {
            ui.vertical(|ui| {
                if let Some(event) = render_create_form(state, ui) {
                    events.push(event);
                }

                ui.horizontal(|ui| {
                    if ui.button("Refresh").clicked() {
                        events.push(UserListEvent::Refresh);
                    }
                    if is_loading {
                        ui.spinner();
                        ui.label("Loading...");
                    }
                });

                if let Some(error) = &list_error {
                    ui.colored_label(COLOR_RED, format!("Error: {error}"));
                }
                if let Some(error) = &mutation_error {
                    ui.colored_label(COLOR_RED, format!("Error: {error}"));
                }

                ui.add_space(8.0);

                if let Some(event) = render_users_table(&users, state, ui) {
                    events.push(event);
                }
            });
        })
        .response;

    if let Some(message) = state.alert().map(str::to_owned) {
        events.extend(show_alert_modal(&message, ui));
    } else if let Some(id) = state.pending_delete() {
        events.extend(show_delete_user_modal(id.as_str(), ui));
    }

    for event in events {
        UserListController::handle(state_ctx, event);
    }

    response
}

fn render_create_form(state: &mut UserListState, ui: &mut Ui) -> Option<UserListEvent> {
    ui.horizontal(|ui| {
        ui.label("Name:");
        ui.add(egui::TextEdit::singleline(&mut state.new_name).hint_text("Name"));
        ui.label("Avatar URL:");
        ui.add(egui::TextEdit::singleline(&mut state.new_avatar).hint_text("Avatar URL"));

        ui.button("Add User")
            .clicked()
            .then_some(UserListEvent::SubmitCreate)
    })
    .inner
}

fn render_users_table(
    users: &[UserRecord],
    state: &mut UserListState,
    ui: &mut Ui,
) -> Option<UserListEvent> {
    let mut event = None;

    let mut builder = TableBuilder::new(ui)
        .id_salt("users_table")
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
    for column in table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            render_table_header(&mut header);
        })
        .body(|mut body| {
            for user in users {
                body.row(ROW_HEIGHT, |mut row| {
                    if let Some(clicked) = render_user_row(&mut row, user, state) {
                        event = Some(clicked);
                    }
                });
            }
        });

    event
}
