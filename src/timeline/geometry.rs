use chrono::NaiveDate;

use super::{HOUR_WIDTH, MIN_BAR_WIDTH};
use crate::model::Order;

/// Fallback hour when an order has no (or an unparsable) load time.
pub const DEFAULT_LOAD_HOUR: f32 = 8.0;
/// Fallback hour for a missing unload time.
pub const DEFAULT_UNLOAD_HOUR: f32 = 17.0;

/// Pixel placement of one order bar within the visible window.
///
/// Derived on every render from the order and the window; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub left: f32,
    pub width: f32,
    /// The real load instant lies before the window start; the left edge
    /// shows a truncation mark instead of a resize handle.
    pub left_clipped: bool,
    /// The real unload instant lies past the window end.
    pub right_clipped: bool,
}

impl BarGeometry {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }
}

/// Parse "HH:MM" into fractional hours ("09:30" → 9.5). Malformed or
/// missing input falls back to the given default so rendering is always
/// possible.
pub fn parse_time_to_hours(time: Option<&str>, fallback: f32) -> f32 {
    let Some(time) = time else { return fallback };
    let mut parts = time.splitn(2, ':');
    let (Some(h), Some(m)) = (parts.next(), parts.next()) else {
        return fallback;
    };
    match (h.trim().parse::<u32>(), m.trim().parse::<u32>()) {
        (Ok(h), Ok(m)) => h as f32 + m as f32 / 60.0,
        _ => fallback,
    }
}

/// Hours from the window start to the given date + time of day. May be
/// negative or past the window end; callers clamp.
pub fn offset_hours(
    range_start: NaiveDate,
    date: NaiveDate,
    time: Option<&str>,
    fallback: f32,
) -> f32 {
    let days = (date - range_start).num_days() as f32;
    days * 24.0 + parse_time_to_hours(time, fallback)
}

/// Clamp an hour offset into the window and convert to pixels.
pub fn hours_to_px(hours: f32, total_hours: f32) -> f32 {
    hours.clamp(0.0, total_hours) * HOUR_WIDTH
}

/// Inverse mapping: pixel offset → "HH:MM", snapped to the nearest
/// 15-minute boundary. Offsets past 24h wrap for display (multi-day bars
/// keep their dates; only the time of day is edited).
pub fn px_to_time(px: f32) -> String {
    let hours = (px / HOUR_WIDTH).max(0.0);
    let total_minutes = (hours * 60.0 / 15.0).round() as i64 * 15;
    let h = (total_minutes / 60) % 24;
    let m = total_minutes % 60;
    format!("{:02}:{:02}", h, m)
}

/// Compute the on-screen geometry of an order bar against the window
/// `[range_start, range_start + total_hours)`.
pub fn bar_geometry(order: &Order, range_start: NaiveDate, total_hours: f32) -> BarGeometry {
    let raw_load = offset_hours(
        range_start,
        order.load_date,
        order.load_time.as_deref(),
        DEFAULT_LOAD_HOUR,
    );
    let raw_unload = offset_hours(
        range_start,
        order.unload_date,
        order.unload_time.as_deref(),
        DEFAULT_UNLOAD_HOUR,
    );

    let left_clipped = raw_load < 0.0;
    let right_clipped = raw_unload > total_hours;

    let load = raw_load.max(0.0);
    let unload = raw_unload.min(total_hours);
    // A bar is always at least half an hour wide, whatever its real duration.
    let effective_unload = unload.max(load + 0.5);

    let left = hours_to_px(load, total_hours);
    let width = (hours_to_px(effective_unload, total_hours) - left).max(MIN_BAR_WIDTH);

    BarGeometry {
        left,
        width,
        left_clipped,
        right_clipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn order(
        load: NaiveDate,
        load_time: Option<&str>,
        unload: NaiveDate,
        unload_time: Option<&str>,
    ) -> Order {
        let mut o = Order::new("Acme", "Pallets", load, unload, "4t");
        o.load_time = load_time.map(str::to_string);
        o.unload_time = unload_time.map(str::to_string);
        o
    }

    #[test]
    fn parse_time_handles_fallbacks() {
        assert_eq!(parse_time_to_hours(Some("09:30"), 8.0), 9.5);
        assert_eq!(parse_time_to_hours(None, 8.0), 8.0);
        assert_eq!(parse_time_to_hours(Some("late"), 17.0), 17.0);
        assert_eq!(parse_time_to_hours(Some("9"), 17.0), 17.0);
    }

    #[test]
    fn short_order_renders_at_minimum_width() {
        // Window [2025-06-01, 2025-06-08), load 6/2 09:00, unload 6/2 09:20.
        let o = order(day(2025, 6, 2), Some("09:00"), day(2025, 6, 2), Some("09:20"));
        let geo = bar_geometry(&o, day(2025, 6, 1), 7.0 * 24.0);
        assert_eq!(geo.left, 2640.0); // 1 day + 9h at 80 px/h
        assert_eq!(geo.width, MIN_BAR_WIDTH);
        assert!(!geo.left_clipped);
        assert!(!geo.right_clipped);
    }

    #[test]
    fn geometry_is_deterministic() {
        let o = order(day(2025, 6, 3), Some("06:15"), day(2025, 6, 4), Some("18:45"));
        let a = bar_geometry(&o, day(2025, 6, 1), 7.0 * 24.0);
        let b = bar_geometry(&o, day(2025, 6, 1), 7.0 * 24.0);
        assert_eq!(a, b);
    }

    #[test]
    fn edges_outside_the_window_are_clipped() {
        let o = order(day(2025, 5, 30), Some("10:00"), day(2025, 6, 9), Some("12:00"));
        let geo = bar_geometry(&o, day(2025, 6, 1), 7.0 * 24.0);
        assert!(geo.left_clipped);
        assert!(geo.right_clipped);
        assert_eq!(geo.left, 0.0);
        assert_eq!(geo.right(), 7.0 * 24.0 * HOUR_WIDTH);
    }

    #[test]
    fn missing_times_use_defaults() {
        let o = order(day(2025, 6, 2), None, day(2025, 6, 2), None);
        let geo = bar_geometry(&o, day(2025, 6, 1), 7.0 * 24.0);
        assert_eq!(geo.left, (24.0 + 8.0) * HOUR_WIDTH);
        assert_eq!(geo.right(), (24.0 + 17.0) * HOUR_WIDTH);
    }

    #[test]
    fn px_to_time_snaps_to_quarter_hours() {
        // 137 px at 80 px/h is 1h42.75m; the nearest grid point is 01:45.
        assert_eq!(px_to_time(137.0), "01:45");
        assert_eq!(px_to_time(0.0), "00:00");
        assert_eq!(px_to_time(80.0), "01:00");
        // Past 24h wraps for display.
        assert_eq!(px_to_time(25.0 * HOUR_WIDTH), "01:00");
        assert_eq!(px_to_time(-50.0), "00:00");
    }

    proptest! {
        #[test]
        fn snapped_minutes_are_on_the_grid(px in 0.0f32..200_000.0) {
            let time = px_to_time(px);
            let minutes: u32 = time[3..].parse().unwrap();
            prop_assert!(matches!(minutes, 0 | 15 | 30 | 45));
        }

        #[test]
        fn bars_never_drop_below_minimum_width(
            load_day in 0i64..14,
            load_min in 0u32..1440,
            dur_min in 0u32..600,
        ) {
            let start = day(2025, 6, 1);
            let load_date = start + chrono::Duration::days(load_day);
            let load = format!("{:02}:{:02}", load_min / 60, load_min % 60);
            let total = load_min + dur_min;
            let unload_date = load_date + chrono::Duration::days(i64::from(total / 1440));
            let unload = format!("{:02}:{:02}", (total / 60) % 24, total % 60);
            let o = order(load_date, Some(&load), unload_date, Some(&unload));
            let geo = bar_geometry(&o, start, 21.0 * 24.0);
            prop_assert!(geo.width >= MIN_BAR_WIDTH);
        }
    }
}
