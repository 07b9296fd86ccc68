use egui::RichText;

use crate::model::Order;
use crate::store::{DispatchActions, DispatchIntent, InMemoryStore};
use crate::timeline::{QueueFilter, RangeController, ScrollSyncCoordinator};
use crate::ui;

/// Main application state.
pub struct DispatchApp {
    store: InMemoryStore,
    range: RangeController,
    sync: ScrollSyncCoordinator,
    queue_filter: QueueFilter,
    status_message: String,
}

impl DispatchApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let today = chrono::Local::now().date_naive();
        Self {
            store: InMemoryStore::seeded(today),
            range: RangeController::new(today),
            sync: ScrollSyncCoordinator::new(),
            queue_filter: QueueFilter::default(),
            status_message: "Ready".to_string(),
        }
    }

    /// Apply one gesture's intent to the data layer. Failures are logged
    /// and never rolled back locally; the next frame re-reads the store.
    fn apply_intent(&mut self, intent: DispatchIntent) {
        let result = match &intent {
            DispatchIntent::Assign {
                order_id,
                vehicle_id,
                vehicle_class,
                driver_name,
            } => self
                .store
                .assign(*order_id, vehicle_id, vehicle_class, driver_name),
            DispatchIntent::Unassign { order_id } => self.store.unassign(*order_id),
            DispatchIntent::UpdateTime {
                order_id,
                load_time,
                unload_time,
            } => self.store.update_time(*order_id, load_time, unload_time),
        };

        match result {
            Ok(()) => {
                self.status_message = match intent {
                    DispatchIntent::Assign { vehicle_id, .. } => {
                        format!("Assigned order to {}", vehicle_id)
                    }
                    DispatchIntent::Unassign { .. } => "Order unassigned".to_string(),
                    DispatchIntent::UpdateTime {
                        load_time,
                        unload_time,
                        ..
                    } => format!("Times updated ({} - {})", load_time, unload_time),
                };
            }
            Err(e) => {
                tracing::warn!(error = %e, "dispatch intent failed");
                self.status_message = format!("Update failed: {}", e);
            }
        }
    }
}

impl eframe::App for DispatchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        let visible_unassigned: Vec<Order> = self
            .store
            .orders()
            .iter()
            .filter(|o| {
                !o.is_assigned() && o.overlaps(self.range.range_start(), self.range.range_end())
            })
            .cloned()
            .collect();

        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            let action = ui::toolbar::show_toolbar(
                self.store.vehicles().len(),
                self.store.orders().len(),
                visible_unassigned.len(),
                ui,
            );
            if action.scroll_to_now {
                self.sync.request_scroll_to_now();
            }
        });

        // Bottom panel: status bar + class legend
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(24.0)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_PANEL)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        RichText::new(&self.status_message)
                            .font(ui::theme::font_sub())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        for tag in ui::theme::LEGEND_TAGS.iter().rev() {
                            let (fill, border, _) = ui::theme::tag_colors(tag);
                            ui.label(RichText::new(*tag).font(ui::theme::font_small()));
                            let (rect, _) = ui.allocate_exact_size(
                                egui::vec2(14.0, 9.0),
                                egui::Sense::hover(),
                            );
                            ui.painter().rect(
                                rect,
                                egui::Rounding::same(2.0),
                                fill,
                                egui::Stroke::new(1.0, border),
                            );
                        }
                        ui.label(
                            RichText::new("Classes:")
                                .font(ui::theme::font_small())
                                .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Left panel: unassigned queue (drag sources)
        egui::SidePanel::left("queue_panel")
            .default_width(280.0)
            .min_width(220.0)
            .resizable(true)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_PANEL)
                    .inner_margin(egui::Margin::same(8.0))
                    .stroke(egui::Stroke::new(1.0, ui::theme::BORDER_SUBTLE)),
            )
            .show(ctx, |ui| {
                let refs: Vec<&Order> = visible_unassigned.iter().collect();
                ui::queue_panel::show_queue_panel(&refs, &mut self.queue_filter, ui);
            });

        // Central panel: the board itself
        let mut intents = Vec::new();
        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG)
                    .inner_margin(egui::Margin::ZERO),
            )
            .show(ctx, |ui| {
                let interaction = ui::board::show_board(
                    self.store.vehicles(),
                    self.store.orders(),
                    &mut self.range,
                    &mut self.sync,
                    ui,
                );
                intents = interaction.intents;
            });

        for intent in intents {
            self.apply_intent(intent);
        }
    }
}
