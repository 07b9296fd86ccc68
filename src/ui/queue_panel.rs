use egui::{Align2, Id, RichText, Sense, Stroke, Ui};

use crate::model::Order;
use crate::timeline::{queue, DragPayload, QueueFilter};
use crate::ui::theme;

/// Render the unassigned-order queue: search box, class filter, and one
/// draggable card per order. Cards are the drag sources the vehicle rows
/// accept.
pub fn show_queue_panel(unassigned: &[&Order], filter: &mut QueueFilter, ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Unassigned orders").font(theme::font_header()).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!("{}", filter.apply(unassigned).len()))
                    .font(theme::font_sub())
                    .color(theme::MIDNIGHT_TEXT),
            );
        });
    });
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.label(RichText::new(egui_phosphor::regular::MAGNIFYING_GLASS).color(theme::TEXT_DIM));
        ui.add(
            egui::TextEdit::singleline(&mut filter.search)
                .hint_text("Search customer, item, address...")
                .desired_width(f32::INFINITY),
        );
    });

    let tags = queue::tag_options(unassigned);
    egui::ComboBox::from_id_salt("queue_tag_filter")
        .width(ui.available_width())
        .selected_text(filter.tag.as_deref().unwrap_or("All classes"))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut filter.tag, None, "All classes");
            for tag in tags {
                let label = tag.clone();
                ui.selectable_value(&mut filter.tag, Some(tag), label);
            }
        });

    ui.add_space(6.0);
    ui.separator();

    let filtered = filter.apply(unassigned);
    egui::ScrollArea::vertical()
        .id_salt("queue_cards")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if filtered.is_empty() {
                ui.add_space(24.0);
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("No unassigned orders").color(theme::TEXT_DIM));
                });
                return;
            }
            for order in filtered {
                order_card(ui, order);
                ui.add_space(6.0);
            }
        });
}

fn order_card(ui: &mut Ui, order: &Order) {
    let payload = DragPayload::from_order(order);
    ui.dnd_drag_source(Id::new(("order-card", order.id)), payload, |ui| {
        egui::Frame::none()
            .fill(theme::BG)
            .stroke(Stroke::new(1.0, theme::BORDER_SUBTLE))
            .rounding(egui::Rounding::same(6.0))
            .inner_margin(egui::Margin::same(8.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(order.short_id())
                            .font(theme::font_sub())
                            .strong(),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        tag_chip(ui, &order.requested_tag);
                    });
                });
                ui.label(
                    RichText::new(&order.customer_name)
                        .font(theme::font_sub())
                        .color(theme::TEXT_SECONDARY),
                );
                ui.label(RichText::new(&order.item_name).font(theme::font_sub()));
                ui.label(
                    RichText::new(format!(
                        "{} → {}",
                        order.load_address, order.unload_address
                    ))
                    .font(theme::font_small())
                    .color(theme::TEXT_DIM),
                );
            });
    });
}

fn tag_chip(ui: &mut Ui, tag: &str) {
    let (fill, border, text) = theme::tag_colors(tag);
    let galley = ui
        .painter()
        .layout_no_wrap(tag.to_string(), theme::font_small(), text);
    let size = galley.size() + egui::vec2(10.0, 4.0);
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    ui.painter()
        .rect(rect, egui::Rounding::same(4.0), fill, Stroke::new(1.0, border));
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        tag,
        theme::font_small(),
        text,
    );
}
