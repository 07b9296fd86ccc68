use chrono::{Duration, NaiveDate, Timelike};

use super::{DAY_WIDTH, EXTEND_THRESHOLD, HOUR_WIDTH};

/// Owns the visible day window `[range_start, range_end)` and grows it by
/// whole days when the viewport scrolls near either edge. The window never
/// shrinks during a session.
#[derive(Debug, Clone)]
pub struct RangeController {
    range_start: NaiveDate,
    range_end: NaiveDate,
    /// Set while an extension awaits its render commit; suppresses further
    /// extensions until released.
    extending: bool,
    /// Pixels the viewport must be pushed right after a backward extension
    /// so the visible content does not jump.
    pending_adjust: f32,
}

impl RangeController {
    /// Window centered loosely on today: three days back, four forward.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            range_start: today - Duration::days(3),
            range_end: today + Duration::days(4),
            extending: false,
            pending_adjust: 0.0,
        }
    }

    pub fn range_start(&self) -> NaiveDate {
        self.range_start
    }

    pub fn range_end(&self) -> NaiveDate {
        self.range_end
    }

    pub fn total_days(&self) -> i64 {
        (self.range_end - self.range_start).num_days()
    }

    pub fn total_hours(&self) -> f32 {
        self.total_days() as f32 * 24.0
    }

    /// Full content width of the timeline in pixels.
    pub fn timeline_width(&self) -> f32 {
        self.total_hours() * HOUR_WIDTH
    }

    /// Hours from the window start to the given local instant.
    pub fn now_offset_hours(&self, now: chrono::NaiveDateTime) -> f32 {
        let days = (now.date() - self.range_start).num_days() as f32;
        days * 24.0 + now.time().hour() as f32 + now.time().minute() as f32 / 60.0
    }

    /// Edge detection, called once per frame with the observed scroll
    /// state. Extends at most one day per direction per call and locks
    /// until [`release_lock`](Self::release_lock).
    pub fn on_scroll(&mut self, scroll_left: f32, content_width: f32, viewport_width: f32) {
        if self.extending {
            return;
        }

        if scroll_left < EXTEND_THRESHOLD {
            self.range_start -= Duration::days(1);
            self.pending_adjust += DAY_WIDTH;
            self.extending = true;
            tracing::debug!(range_start = %self.range_start, "extended window backward");
        }

        let scroll_right = content_width - scroll_left - viewport_width;
        if scroll_right < EXTEND_THRESHOLD {
            self.range_end += Duration::days(1);
            self.extending = true;
            tracing::debug!(range_end = %self.range_end, "extended window forward");
        }
    }

    /// Take the pixel compensation owed for backward extensions. The
    /// caller applies it to the scroll offset in the same paint pass that
    /// adds the new day's content.
    pub fn take_pending_adjust(&mut self) -> f32 {
        std::mem::take(&mut self.pending_adjust)
    }

    /// Clear the extension lock once the previous extension has been
    /// committed to a render.
    pub fn release_lock(&mut self) {
        self.extending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> RangeController {
        RangeController::new(NaiveDate::from_ymd_opt(2025, 6, 4).unwrap())
    }

    #[test]
    fn initial_window_spans_seven_days() {
        let r = controller();
        assert_eq!(r.range_start(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(r.range_end(), NaiveDate::from_ymd_opt(2025, 6, 8).unwrap());
        assert_eq!(r.total_hours(), 168.0);
        assert_eq!(r.timeline_width(), 168.0 * HOUR_WIDTH);
    }

    #[test]
    fn scrolling_near_left_edge_extends_backward_with_compensation() {
        let mut r = controller();
        let start = r.range_start();
        r.on_scroll(EXTEND_THRESHOLD - 1.0, r.timeline_width(), 1000.0);
        assert_eq!(r.range_start(), start - Duration::days(1));
        assert_eq!(r.take_pending_adjust(), DAY_WIDTH);
        // Nothing left once taken.
        assert_eq!(r.take_pending_adjust(), 0.0);
    }

    #[test]
    fn scrolling_near_right_edge_extends_forward_without_compensation() {
        let mut r = controller();
        let end = r.range_end();
        let content = r.timeline_width();
        r.on_scroll(content - 1000.0 - EXTEND_THRESHOLD + 1.0, content, 1000.0);
        assert_eq!(r.range_end(), end + Duration::days(1));
        assert_eq!(r.take_pending_adjust(), 0.0);
    }

    #[test]
    fn extensions_are_debounced_until_release() {
        let mut r = controller();
        r.on_scroll(0.0, r.timeline_width(), 1000.0);
        let start_after_first = r.range_start();
        r.on_scroll(0.0, r.timeline_width(), 1000.0);
        assert_eq!(r.range_start(), start_after_first);

        r.release_lock();
        r.on_scroll(0.0, r.timeline_width(), 1000.0);
        assert_eq!(r.range_start(), start_after_first - Duration::days(1));
    }

    #[test]
    fn mid_window_scroll_changes_nothing() {
        let mut r = controller();
        let (start, end) = (r.range_start(), r.range_end());
        r.on_scroll(3000.0, r.timeline_width(), 1000.0);
        assert_eq!((r.range_start(), r.range_end()), (start, end));
        assert_eq!(r.take_pending_adjust(), 0.0);
    }

    #[test]
    fn now_offset_counts_from_range_start() {
        let r = controller();
        let now = NaiveDate::from_ymd_opt(2025, 6, 4)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(r.now_offset_hours(now), 3.0 * 24.0 + 9.5);
    }
}
