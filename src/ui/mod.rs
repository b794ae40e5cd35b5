// UI module for rendering the launcher window.
// Draws the avatar followed by one button per repository.

pub mod buttons;

use eframe::egui;

use crate::app::LauncherApp;

use buttons::{HORIZONTAL_PADDING, vertical_padding};

/// Largest size the avatar is drawn at.
const AVATAR_MAX_SIZE: f32 = 230.0;

/// Main draw function that renders the entire window.
pub fn draw(ctx: &egui::Context, app: &LauncherApp) {
    let frame = egui::Frame::central_panel(&ctx.style())
        .inner_margin(egui::Margin::symmetric(HORIZONTAL_PADDING, 0.0));

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    draw_avatar(ui, app);
                    draw_buttons(ui, app);
                });
            });
    });
}

fn draw_avatar(ui: &mut egui::Ui, app: &LauncherApp) {
    ui.add(
        egui::Image::from_texture(app.avatar())
            .max_size(egui::vec2(AVATAR_MAX_SIZE, AVATAR_MAX_SIZE)),
    );
}

fn draw_buttons(ui: &mut egui::Ui, app: &LauncherApp) {
    let count = app.buttons().len();

    for (index, button) in app.buttons().iter().enumerate() {
        let (top, bottom) = vertical_padding(index, count);
        ui.add_space(top);

        let response = ui
            .button(button.label.as_str())
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        if response.clicked() {
            tracing::info!(url = %button.url, "opening");
            if let Err(e) = button.open() {
                tracing::warn!("Could not open {}: {}", button.url, e);
            }
        }

        ui.add_space(bottom);
    }
}
