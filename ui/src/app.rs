use std::time::Duration;

use roster_business::UserListController;

use crate::{state::State, widgets};

/// How often to wake up while commands are still in flight.
const PENDING_WORK_REPAINT: Duration = Duration::from_millis(100);

pub struct RosterApp {
    state: State,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(mut state: State) -> Self {
        UserListController::start(&mut state.ctx);
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Sync Compute for render
        self.state.ctx.sync_computes();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Users");
            ui.separator();
            widgets::users_panel(&mut self.state.ctx, ui);
        });

        // Spawn whatever the frame queued
        self.state.ctx.flush_commands();

        // Results arrive on a channel, not as window events; poll until they land.
        if self.state.ctx.has_pending_work() {
            ctx.request_repaint_after(PENDING_WORK_REPAINT);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("RosterApp: exiting, aborting in-flight requests");
        self.state.ctx.abort_all();
    }
}
