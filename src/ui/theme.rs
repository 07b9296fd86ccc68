use egui::{Color32, FontId, Rounding, Stroke, Visuals};

// ── Palette (light board) ────────────────────────────────────────────────────

pub const BG: Color32 = Color32::from_rgb(255, 255, 255);
pub const BG_PANEL: Color32 = Color32::from_rgb(249, 250, 251);
pub const BG_HEADER: Color32 = Color32::from_rgb(255, 255, 255);
pub const BG_TODAY: Color32 = Color32::from_rgb(239, 246, 255);

pub const BORDER: Color32 = Color32::from_rgb(209, 213, 219);
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(229, 231, 235);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(31, 41, 55);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(107, 114, 128);
pub const TEXT_DIM: Color32 = Color32::from_rgb(156, 163, 175);
pub const TEXT_TODAY: Color32 = Color32::from_rgb(29, 78, 216);

pub const NOW_LINE: Color32 = Color32::from_rgb(239, 68, 68);
pub const MIDNIGHT_LINE: Color32 = Color32::from_rgb(251, 146, 60);
pub const MIDNIGHT_TEXT: Color32 = Color32::from_rgb(234, 88, 12);
pub const GRID_LINE: Color32 = Color32::from_rgb(229, 231, 235);

pub const DROP_ACCEPT_BG: Color32 = Color32::from_rgb(240, 253, 244);
pub const DROP_ACCEPT_BORDER: Color32 = Color32::from_rgb(74, 222, 128);
pub const DROP_REJECT_BG: Color32 = Color32::from_rgb(254, 242, 242);
pub const DROP_REJECT_BORDER: Color32 = Color32::from_rgb(248, 113, 113);
pub const DROP_REJECT_TEXT: Color32 = Color32::from_rgb(239, 68, 68);

pub const HANDLE_TINT: Color32 = Color32::from_black_alpha(28);
pub const CLIP_TINT: Color32 = Color32::from_black_alpha(24);

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const ROW_HEIGHT: f32 = 48.0;
pub const BAR_INSET: f32 = 4.0;
pub const BAR_ROUNDING: f32 = 4.0;
pub const HANDLE_WIDTH: f32 = 12.0;
pub const VEHICLE_COL_WIDTH: f32 = 200.0;
pub const DAY_LABEL_HEIGHT: f32 = 22.0;
pub const HOUR_LABEL_HEIGHT: f32 = 26.0;
pub const HEADER_HEIGHT: f32 = DAY_LABEL_HEIGHT + HOUR_LABEL_HEIGHT;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_header() -> FontId {
    FontId::proportional(12.0)
}

pub fn font_sub() -> FontId {
    FontId::proportional(10.5)
}

pub fn font_bar() -> FontId {
    FontId::proportional(11.0)
}

pub fn font_small() -> FontId {
    FontId::proportional(9.5)
}

pub fn font_mono_small() -> FontId {
    FontId::monospace(11.0)
}

// ── Capability-tag colors ────────────────────────────────────────────────────

/// Fill, border, and text colors for a requested-class tag. Mirrors the
/// legend: known classes get their own hue, everything else indigo.
pub fn tag_colors(tag: &str) -> (Color32, Color32, Color32) {
    match tag {
        "4t" => (
            Color32::from_rgb(191, 219, 254),
            Color32::from_rgb(96, 165, 250),
            Color32::from_rgb(30, 58, 138),
        ),
        "10t" => (
            Color32::from_rgb(167, 243, 208),
            Color32::from_rgb(52, 211, 153),
            Color32::from_rgb(6, 78, 59),
        ),
        "trailer" => (
            Color32::from_rgb(233, 213, 255),
            Color32::from_rgb(192, 132, 252),
            Color32::from_rgb(88, 28, 135),
        ),
        "crane" => (
            Color32::from_rgb(253, 230, 138),
            Color32::from_rgb(251, 191, 36),
            Color32::from_rgb(120, 53, 15),
        ),
        "flatbed" => (
            Color32::from_rgb(254, 205, 211),
            Color32::from_rgb(251, 113, 133),
            Color32::from_rgb(136, 19, 55),
        ),
        "wing" => (
            Color32::from_rgb(165, 243, 252),
            Color32::from_rgb(34, 211, 238),
            Color32::from_rgb(22, 78, 99),
        ),
        "dump" => (
            Color32::from_rgb(254, 215, 170),
            Color32::from_rgb(251, 146, 60),
            Color32::from_rgb(124, 45, 18),
        ),
        _ => (
            Color32::from_rgb(199, 210, 254),
            Color32::from_rgb(129, 140, 248),
            Color32::from_rgb(49, 46, 129),
        ),
    }
}

/// Classes shown in the legend strip, in display order.
pub const LEGEND_TAGS: &[&str] = &["4t", "10t", "trailer", "crane", "flatbed", "wing", "dump"];

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::light();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG;
    visuals.window_fill = BG;
    visuals.extreme_bg_color = Color32::from_rgb(243, 244, 246); // TextEdit bg
    visuals.faint_bg_color = BG_PANEL;

    visuals.widgets.noninteractive.bg_fill = BG;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(243, 244, 246);
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, BORDER);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_fill = Color32::from_rgb(229, 231, 235);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, TEXT_DIM);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.widgets.active.bg_fill = Color32::from_rgb(219, 234, 254);
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, TEXT_TODAY);
    visuals.widgets.active.fg_stroke = Stroke::new(1.5, TEXT_PRIMARY);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.selection.bg_fill = Color32::from_rgb(219, 234, 254);
    visuals.selection.stroke = Stroke::new(1.0, TEXT_TODAY);

    visuals.window_rounding = Rounding::same(8.0);
    visuals.window_stroke = Stroke::new(1.0, BORDER);

    visuals.striped = false;

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}
