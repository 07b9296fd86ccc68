use egui::{RichText, Ui};

use crate::ui::theme;

/// Signals raised by the toolbar this frame.
#[derive(Default)]
pub struct ToolbarAction {
    pub scroll_to_now: bool,
}

pub fn show_toolbar(
    vehicle_count: usize,
    order_count: usize,
    unassigned_count: usize,
    ui: &mut Ui,
) -> ToolbarAction {
    let mut action = ToolbarAction::default();

    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!("{} Dispatch Board", egui_phosphor::regular::TRUCK))
                .font(theme::font_header())
                .strong(),
        );
        ui.separator();

        if ui
            .button(format!("{} Now", egui_phosphor::regular::CLOCK))
            .on_hover_text("Scroll to the current time")
            .clicked()
        {
            action.scroll_to_now = true;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!(
                    "Vehicles: {}  ·  Orders: {}  ·  Unassigned: {}",
                    vehicle_count, order_count, unassigned_count
                ))
                .font(theme::font_sub())
                .color(theme::TEXT_DIM),
            );
        });
    });

    action
}
