use chrono::{Duration, NaiveDate};
use egui::{pos2, vec2, Align2, Color32, Id, Rect, Rounding, Sense, Stroke, Ui, Vec2};
use egui_extras::{Size, StripBuilder};

use crate::model::{Order, Vehicle};
use crate::store::DispatchIntent;
use crate::timeline::{
    drag, geometry, DragPayload, DropVerdict, RangeController, ResizeGesture, ResizeSide,
    ScrollSyncCoordinator, DAY_WIDTH, HOUR_WIDTH,
};
use crate::ui::theme;

const ROW_HEIGHT: f32 = theme::ROW_HEIGHT;
const HANDLE_WIDTH: f32 = theme::HANDLE_WIDTH;

/// Intents collected from gestures during this frame's render pass.
#[derive(Default)]
pub struct BoardInteraction {
    pub intents: Vec<DispatchIntent>,
}

/// Render the dispatch board: synced header, fixed vehicle column, and the
/// scrollable timeline body with one row per vehicle.
pub fn show_board(
    vehicles: &[Vehicle],
    orders: &[Order],
    range: &mut RangeController,
    sync: &mut ScrollSyncCoordinator,
    ui: &mut Ui,
) -> BoardInteraction {
    let mut interaction = BoardInteraction::default();

    let now = chrono::Local::now().naive_local();
    let today = now.date();

    // Compensation and scroll-to-now are resolved before painting so the
    // forced offset lands in the same pass as any newly prepended day.
    let override_offset = sync.begin_frame(range, now);
    let pane_offset = override_offset.unwrap_or(sync.offset());

    let range_start = range.range_start();
    let total_hours = range.total_hours();
    let timeline_width = range.timeline_width();
    let now_hours = range.now_offset_hours(now);

    StripBuilder::new(ui)
        .size(Size::exact(theme::HEADER_HEIGHT))
        .size(Size::remainder())
        .vertical(|mut strip| {
            strip.strip(|builder| {
                builder
                    .size(Size::exact(theme::VEHICLE_COL_WIDTH))
                    .size(Size::remainder())
                    .horizontal(|mut strip| {
                        strip.cell(|ui| draw_header_corner(ui));
                        strip.cell(|ui| {
                            egui::ScrollArea::horizontal()
                                .id_salt("board_header")
                                .enable_scrolling(false)
                                .scroll_bar_visibility(
                                    egui::scroll_area::ScrollBarVisibility::AlwaysHidden,
                                )
                                .auto_shrink([false, false])
                                .scroll_offset(vec2(pane_offset.x, 0.0))
                                .show(ui, |ui| {
                                    draw_header(ui, range_start, total_hours, today);
                                });
                        });
                    });
            });
            strip.strip(|builder| {
                builder
                    .size(Size::exact(theme::VEHICLE_COL_WIDTH))
                    .size(Size::remainder())
                    .horizontal(|mut strip| {
                        strip.cell(|ui| {
                            egui::ScrollArea::vertical()
                                .id_salt("board_vehicles")
                                .enable_scrolling(false)
                                .scroll_bar_visibility(
                                    egui::scroll_area::ScrollBarVisibility::AlwaysHidden,
                                )
                                .auto_shrink([false, false])
                                .scroll_offset(vec2(0.0, pane_offset.y))
                                .show(ui, |ui| {
                                    draw_vehicle_column(ui, vehicles);
                                });
                        });
                        strip.cell(|ui| {
                            let mut body = egui::ScrollArea::both()
                                .id_salt("board_body")
                                .auto_shrink([false, false]);
                            if let Some(target) = override_offset {
                                body = body.scroll_offset(target);
                            }
                            let output = body.show(ui, |ui| {
                                ui.spacing_mut().item_spacing = Vec2::ZERO;
                                for vehicle in vehicles {
                                    let assigned: Vec<&Order> = orders
                                        .iter()
                                        .filter(|o| {
                                            o.assigned_vehicle() == Some(vehicle.id.as_str())
                                                && o.overlaps(range_start, range.range_end())
                                        })
                                        .collect();
                                    vehicle_row(
                                        ui,
                                        vehicle,
                                        &assigned,
                                        range_start,
                                        total_hours,
                                        timeline_width,
                                        now_hours,
                                        &mut interaction.intents,
                                    );
                                }
                                if vehicles.is_empty() {
                                    ui.allocate_space(vec2(ui.available_width(), 120.0));
                                    ui.centered_and_justified(|ui| {
                                        ui.label(
                                            egui::RichText::new("No vehicles registered")
                                                .color(theme::TEXT_DIM),
                                        );
                                    });
                                }
                            });

                            sync.end_frame(output.state.offset);
                            if !vehicles.is_empty() {
                                range.on_scroll(
                                    output.state.offset.x,
                                    output.content_size.x,
                                    output.inner_rect.width(),
                                );
                            }
                        });
                    });
            });
        });

    interaction
}

fn draw_header_corner(ui: &mut Ui) {
    let (rect, _) = ui.allocate_exact_size(
        vec2(theme::VEHICLE_COL_WIDTH, theme::HEADER_HEIGHT),
        Sense::hover(),
    );
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, theme::BG_HEADER);
    painter.text(
        pos2(rect.left() + 12.0, rect.center().y),
        Align2::LEFT_CENTER,
        "VEHICLE",
        theme::font_sub(),
        theme::TEXT_SECONDARY,
    );
    painter.line_segment(
        [rect.right_top(), rect.right_bottom()],
        Stroke::new(1.0, theme::BORDER),
    );
    painter.line_segment(
        [rect.left_bottom(), rect.right_bottom()],
        Stroke::new(1.0, theme::BORDER),
    );
}

/// Day labels on top, hour labels below; midnight columns repeat the day
/// label in the accent color.
fn draw_header(ui: &mut Ui, range_start: NaiveDate, total_hours: f32, today: NaiveDate) {
    let width = total_hours * HOUR_WIDTH;
    let (rect, _) = ui.allocate_exact_size(vec2(width, theme::HEADER_HEIGHT), Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, theme::BG_HEADER);

    let total_days = (total_hours / 24.0) as i64;
    let day_row_bottom = rect.top() + theme::DAY_LABEL_HEIGHT;

    for i in 0..total_days {
        let date = range_start + Duration::days(i);
        let x = rect.left() + i as f32 * DAY_WIDTH;
        let cell = Rect::from_min_size(
            pos2(x, rect.top()),
            vec2(DAY_WIDTH, theme::DAY_LABEL_HEIGHT),
        );
        if date == today {
            painter.rect_filled(cell, 0.0, theme::BG_TODAY);
        }
        let color = if date == today {
            theme::TEXT_TODAY
        } else {
            theme::TEXT_SECONDARY
        };
        painter.text(
            cell.center(),
            Align2::CENTER_CENTER,
            date.format("%-m/%-d (%a)").to_string(),
            theme::font_header(),
            color,
        );
        painter.line_segment(
            [pos2(x + DAY_WIDTH, rect.top()), pos2(x + DAY_WIDTH, day_row_bottom)],
            Stroke::new(1.0, theme::BORDER),
        );
    }
    painter.line_segment(
        [pos2(rect.left(), day_row_bottom), pos2(rect.right(), day_row_bottom)],
        Stroke::new(1.0, theme::BORDER_SUBTLE),
    );

    for h in 0..total_hours as i64 {
        let x = rect.left() + h as f32 * HOUR_WIDTH;
        let is_midnight = h > 0 && h % 24 == 0;
        if is_midnight {
            painter.line_segment(
                [pos2(x, day_row_bottom), pos2(x, rect.bottom())],
                Stroke::new(2.0, theme::MIDNIGHT_LINE),
            );
            let date = range_start + Duration::days(h / 24);
            painter.text(
                pos2(x + HOUR_WIDTH / 2.0, day_row_bottom + 7.0),
                Align2::CENTER_CENTER,
                date.format("%-m/%-d").to_string(),
                theme::font_small(),
                theme::MIDNIGHT_TEXT,
            );
        }
        let label_color = if is_midnight {
            theme::MIDNIGHT_TEXT
        } else {
            theme::TEXT_SECONDARY
        };
        painter.text(
            pos2(x + HOUR_WIDTH / 2.0, rect.bottom() - 8.0),
            Align2::CENTER_CENTER,
            format!("{:02}:00", h % 24),
            theme::font_sub(),
            label_color,
        );
        painter.line_segment(
            [pos2(x + HOUR_WIDTH, day_row_bottom), pos2(x + HOUR_WIDTH, rect.bottom())],
            Stroke::new(1.0, theme::GRID_LINE),
        );
    }

    painter.line_segment(
        [rect.left_bottom(), rect.right_bottom()],
        Stroke::new(1.0, theme::BORDER),
    );
}

fn draw_vehicle_column(ui: &mut Ui, vehicles: &[Vehicle]) {
    ui.spacing_mut().item_spacing = Vec2::ZERO;
    for vehicle in vehicles {
        let (rect, _) = ui.allocate_exact_size(
            vec2(theme::VEHICLE_COL_WIDTH, ROW_HEIGHT),
            Sense::hover(),
        );
        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, theme::BG);

        let x = rect.left() + 12.0;
        painter.text(
            pos2(x, rect.top() + 12.0),
            Align2::LEFT_CENTER,
            &vehicle.id,
            theme::font_header(),
            theme::TEXT_PRIMARY,
        );
        if let Some(driver) = &vehicle.driver_name {
            painter.text(
                pos2(x, rect.top() + 26.0),
                Align2::LEFT_CENTER,
                driver,
                theme::font_sub(),
                theme::TEXT_SECONDARY,
            );
        }
        painter.text(
            pos2(x, rect.top() + 38.0),
            Align2::LEFT_CENTER,
            &vehicle.class,
            theme::font_small(),
            theme::TEXT_DIM,
        );

        painter.line_segment(
            [rect.left_bottom(), rect.right_bottom()],
            Stroke::new(1.0, theme::BORDER_SUBTLE),
        );
        painter.line_segment(
            [rect.right_top(), rect.right_bottom()],
            Stroke::new(1.0, theme::BORDER),
        );
    }
    if vehicles.is_empty() {
        ui.allocate_space(vec2(theme::VEHICLE_COL_WIDTH, 120.0));
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new("No vehicles").color(theme::TEXT_DIM));
        });
    }
}

/// One drop-target row: hour grid, day boundaries, "now" marker, and the
/// vehicle's order bars.
#[allow(clippy::too_many_arguments)]
fn vehicle_row(
    ui: &mut Ui,
    vehicle: &Vehicle,
    assigned: &[&Order],
    range_start: NaiveDate,
    total_hours: f32,
    timeline_width: f32,
    now_hours: f32,
    intents: &mut Vec<DispatchIntent>,
) {
    let (rect, row_resp) =
        ui.allocate_exact_size(vec2(timeline_width, ROW_HEIGHT), Sense::hover());

    let hover_verdict = row_resp
        .dnd_hover_payload::<DragPayload>()
        .map(|payload| drag::evaluate_drop(&payload, vehicle));

    let row_bg = match hover_verdict {
        Some(DropVerdict::Accept) | Some(DropVerdict::AlreadyHere) => theme::DROP_ACCEPT_BG,
        Some(DropVerdict::Incompatible) => theme::DROP_REJECT_BG,
        None => theme::BG,
    };

    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, row_bg);

    for h in 1..=total_hours as i64 {
        let x = rect.left() + h as f32 * HOUR_WIDTH;
        let stroke = if h % 24 == 0 {
            Stroke::new(2.0, theme::MIDNIGHT_LINE)
        } else {
            Stroke::new(1.0, theme::GRID_LINE)
        };
        painter.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], stroke);
    }
    painter.line_segment(
        [rect.left_bottom(), rect.right_bottom()],
        Stroke::new(1.0, theme::BORDER_SUBTLE),
    );

    if (0.0..=total_hours).contains(&now_hours) {
        let x = rect.left() + now_hours * HOUR_WIDTH;
        painter.line_segment(
            [pos2(x, rect.top()), pos2(x, rect.bottom())],
            Stroke::new(2.0, theme::NOW_LINE),
        );
    }

    for order in assigned {
        order_bar(ui, rect, order, range_start, total_hours, intents);
    }

    match hover_verdict {
        Some(DropVerdict::Accept) | Some(DropVerdict::AlreadyHere) => {
            ui.painter().rect_stroke(
                rect.shrink(1.5),
                Rounding::same(3.0),
                Stroke::new(2.0, theme::DROP_ACCEPT_BORDER),
            );
        }
        Some(DropVerdict::Incompatible) => {
            let painter = ui.painter();
            painter.rect_stroke(
                rect.shrink(1.5),
                Rounding::same(3.0),
                Stroke::new(2.0, theme::DROP_REJECT_BORDER),
            );
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "not supported",
                theme::font_sub(),
                theme::DROP_REJECT_TEXT,
            );
        }
        None => {}
    }

    if let Some(payload) = row_resp.dnd_release_payload::<DragPayload>() {
        if drag::evaluate_drop(&payload, vehicle) == DropVerdict::Accept {
            intents.push(DispatchIntent::Assign {
                order_id: payload.order_id,
                vehicle_id: vehicle.id.clone(),
                vehicle_class: vehicle.class.clone(),
                driver_name: vehicle.driver_name.clone().unwrap_or_default(),
            });
        }
    }
}

fn resize_gesture_id(ui: &Ui, order: &Order) -> Id {
    ui.make_persistent_id(("order-resize", order.id))
}

fn order_bar(
    ui: &mut Ui,
    row_rect: Rect,
    order: &Order,
    range_start: NaiveDate,
    total_hours: f32,
    intents: &mut Vec<DispatchIntent>,
) {
    let geo = geometry::bar_geometry(order, range_start, total_hours);
    let max_px = total_hours * HOUR_WIDTH;

    let gesture_id = resize_gesture_id(ui, order);
    let gesture = ui
        .ctx()
        .data_mut(|data| data.get_temp::<ResizeGesture>(gesture_id));

    // While resizing, the transient pixel override wins; it is discarded on
    // commit and the next render uses recomputed geometry.
    let (left, width) = match &gesture {
        Some(g) => (g.left(), g.width()),
        None => (geo.left, geo.width),
    };

    let bar_rect = Rect::from_min_size(
        pos2(row_rect.left() + left, row_rect.top() + theme::BAR_INSET),
        vec2(width, ROW_HEIGHT - theme::BAR_INSET * 2.0),
    );
    let rounding = Rounding::same(theme::BAR_ROUNDING);
    let (fill, border, text_color) = theme::tag_colors(&order.requested_tag);

    let being_dragged = egui::DragAndDrop::payload::<DragPayload>(ui.ctx())
        .is_some_and(|p| p.order_id == order.id);
    let fill = if being_dragged {
        fill.gamma_multiply(0.4)
    } else {
        fill
    };

    let painter = ui.painter();
    painter.rect(bar_rect, rounding, fill, Stroke::new(1.0, border));

    let label = if order.is_multi_day() {
        format!("[multi-day] {}", order.item_name)
    } else {
        order.item_name.clone()
    };
    let galley = painter.layout_no_wrap(label, theme::font_bar(), text_color);
    let clipped = painter.with_clip_rect(bar_rect.shrink2(vec2(HANDLE_WIDTH, 0.0)));
    clipped.galley(
        pos2(
            bar_rect.left() + HANDLE_WIDTH + 2.0,
            bar_rect.center().y - galley.size().y / 2.0,
        ),
        galley,
        Color32::TRANSPARENT,
    );

    // Clipped edges show a truncation mark and lose their handle.
    if geo.left_clipped {
        let clip_rect = Rect::from_min_size(bar_rect.left_top(), vec2(HANDLE_WIDTH, bar_rect.height()));
        painter.rect_filled(clip_rect, rounding, theme::CLIP_TINT);
        painter.text(
            clip_rect.center(),
            Align2::CENTER_CENTER,
            "«",
            theme::font_sub(),
            theme::TEXT_SECONDARY,
        );
    }
    if geo.right_clipped {
        let clip_rect = Rect::from_min_size(
            pos2(bar_rect.right() - HANDLE_WIDTH, bar_rect.top()),
            vec2(HANDLE_WIDTH, bar_rect.height()),
        );
        painter.rect_filled(clip_rect, rounding, theme::CLIP_TINT);
        painter.text(
            clip_rect.center(),
            Align2::CENTER_CENTER,
            "»",
            theme::font_sub(),
            theme::TEXT_SECONDARY,
        );
    }

    let bar_resp = ui.interact(
        bar_rect,
        ui.make_persistent_id(("order-bar", order.id)),
        Sense::click_and_drag(),
    );

    // Handles are registered after the bar so they win the pointer; a
    // resize can therefore never double as a drag-to-reassign.
    let left_resp = (!geo.left_clipped).then(|| {
        let handle = Rect::from_min_size(bar_rect.left_top(), vec2(HANDLE_WIDTH, bar_rect.height()));
        ui.interact(
            handle,
            ui.make_persistent_id(("order-resize-left", order.id)),
            Sense::drag(),
        )
    });
    let right_resp = (!geo.right_clipped).then(|| {
        let handle = Rect::from_min_size(
            pos2(bar_rect.right() - HANDLE_WIDTH, bar_rect.top()),
            vec2(HANDLE_WIDTH, bar_rect.height()),
        );
        ui.interact(
            handle,
            ui.make_persistent_id(("order-resize-right", order.id)),
            Sense::drag(),
        )
    });

    for (resp, side) in [
        (left_resp.as_ref(), ResizeSide::Left),
        (right_resp.as_ref(), ResizeSide::Right),
    ] {
        let Some(resp) = resp else { continue };

        if resp.hovered() || resp.dragged() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
            let tint = Rect::from_min_size(
                if side == ResizeSide::Left {
                    bar_rect.left_top()
                } else {
                    pos2(bar_rect.right() - HANDLE_WIDTH, bar_rect.top())
                },
                vec2(HANDLE_WIDTH, bar_rect.height()),
            );
            ui.painter().rect_filled(tint, rounding, theme::HANDLE_TINT);
        }

        if resp.drag_started() {
            let ptr_x = resp.interact_pointer_pos().map(|p| p.x).unwrap_or(0.0);
            let g = ResizeGesture::begin(side, ptr_x, left, width);
            ui.ctx().data_mut(|data| data.insert_temp(gesture_id, g));
        }

        if resp.dragged() {
            if let Some(ptr) = resp.interact_pointer_pos() {
                ui.ctx().data_mut(|data| {
                    if let Some(mut g) = data.get_temp::<ResizeGesture>(gesture_id) {
                        g.update(ptr.x, max_px);
                        data.insert_temp(gesture_id, g);
                    }
                });
            }
        }

        if resp.drag_stopped() {
            let taken = ui.ctx().data_mut(|data| {
                let g = data.get_temp::<ResizeGesture>(gesture_id);
                data.remove::<ResizeGesture>(gesture_id);
                g
            });
            if let Some(mut g) = taken {
                if let Some(ptr) = resp.interact_pointer_pos() {
                    g.update(ptr.x, max_px);
                }
                let (load_time, unload_time) = g.finish();
                intents.push(DispatchIntent::UpdateTime {
                    order_id: order.id,
                    load_time,
                    unload_time,
                });
            }
        }
    }

    let resizing = gesture.is_some();

    // Drag to reassign: carries the same payload as a queue card.
    if !resizing && bar_resp.drag_started() {
        egui::DragAndDrop::set_payload(ui.ctx(), DragPayload::from_order(order));
    }
    if bar_resp.dragged() && !resizing {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
    } else if bar_resp.hovered() && !resizing {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
    }

    // Unassign control on the hovered bar.
    if !resizing && !being_dragged {
        let btn_rect = Rect::from_center_size(
            pos2(bar_rect.right() - 8.0, bar_rect.top() + 2.0),
            vec2(16.0, 16.0),
        );
        let btn_resp = ui.interact(
            btn_rect,
            ui.make_persistent_id(("order-unassign", order.id)),
            Sense::click(),
        );
        if bar_resp.hovered() || btn_resp.hovered() {
            let painter = ui.painter();
            painter.circle(
                btn_rect.center(),
                8.0,
                theme::BG,
                Stroke::new(1.0, theme::BORDER),
            );
            painter.text(
                btn_rect.center(),
                Align2::CENTER_CENTER,
                egui_phosphor::regular::X,
                theme::font_small(),
                if btn_resp.hovered() {
                    theme::DROP_REJECT_TEXT
                } else {
                    theme::TEXT_SECONDARY
                },
            );
        }
        if btn_resp.clicked() {
            intents.push(DispatchIntent::Unassign { order_id: order.id });
        }
    }

    if resizing {
        if let Some(g) = &gesture {
            let (load, unload) = g.times();
            egui::show_tooltip_at_pointer(
                ui.ctx(),
                ui.layer_id(),
                Id::new(("resize-tip", order.id)),
                |ui| {
                    ui.label(
                        egui::RichText::new(format!("{} - {}", load, unload))
                            .font(theme::font_mono_small()),
                    );
                },
            );
        }
    } else if bar_resp.hovered() && !being_dragged {
        egui::show_tooltip_at_pointer(
            ui.ctx(),
            ui.layer_id(),
            Id::new(("order-tip", order.id)),
            |ui| order_tooltip(ui, order),
        );
    }
}

fn order_tooltip(ui: &mut Ui, order: &Order) {
    ui.strong(order.short_id());
    ui.label(format!("Customer: {}", order.customer_name));
    ui.label(format!("Item: {}", order.item_name));
    ui.label(format!(
        "Load: {}{}",
        order.load_address,
        order
            .load_time
            .as_deref()
            .map(|t| format!(" ({})", t))
            .unwrap_or_default()
    ));
    ui.label(format!(
        "Unload: {}{}",
        order.unload_address,
        order
            .unload_time
            .as_deref()
            .map(|t| format!(" ({})", t))
            .unwrap_or_default()
    ));
    ui.label(format!("Class: {}", order.requested_tag));
    if order.is_multi_day() {
        ui.label(format!(
            "Span: {} → {}",
            order.load_date.format("%-m/%-d"),
            order.unload_date.format("%-m/%-d"),
        ));
    }
}
