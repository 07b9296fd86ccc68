use egui::{vec2, Vec2};

use super::range::RangeController;
use super::HOUR_WIDTH;

/// Keeps the header row, the fixed vehicle-name column, and the timeline
/// body positionally consistent. The body is the authoritative scrollable;
/// its offset is republished to the dependent panes each frame, and any
/// backward-extension compensation is folded in during the same paint pass
/// that adds the new day's content.
#[derive(Debug, Default)]
pub struct ScrollSyncCoordinator {
    /// Last observed offset of the authoritative body scroll area.
    offset: Vec2,
    initial_done: bool,
    scroll_to_now: bool,
}

impl ScrollSyncCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset the dependent panes (header, vehicle column) must follow.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Schedule a jump to the current time on the next frame.
    pub fn request_scroll_to_now(&mut self) {
        self.scroll_to_now = true;
    }

    /// Resolve the offset the body must be forced to this frame, if any:
    /// prepend compensation first, then any scroll-to-now request (which
    /// recomputes "now" against the current range start). The first frame
    /// always positions "now" about two hours from the viewport's left
    /// edge.
    pub fn begin_frame(
        &mut self,
        range: &mut RangeController,
        now: chrono::NaiveDateTime,
    ) -> Option<Vec2> {
        let mut target = None;

        let adjust = range.take_pending_adjust();
        if adjust > 0.0 {
            target = Some(vec2(self.offset.x + adjust, self.offset.y));
        }
        range.release_lock();

        if !self.initial_done || self.scroll_to_now {
            self.initial_done = true;
            self.scroll_to_now = false;
            let x = ((range.now_offset_hours(now) - 2.0) * HOUR_WIDTH).max(0.0);
            let y = target.map_or(self.offset.y, |t| t.y);
            target = Some(vec2(x, y));
        }

        target
    }

    /// Record the body offset actually committed this frame.
    pub fn end_frame(&mut self, offset: Vec2) {
        self.offset = offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 4)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn setup() -> (ScrollSyncCoordinator, RangeController) {
        let mut sync = ScrollSyncCoordinator::new();
        let mut range = RangeController::new(NaiveDate::from_ymd_opt(2025, 6, 4).unwrap());
        // Swallow the initial scroll-to-now.
        sync.begin_frame(&mut range, now());
        (sync, range)
    }

    #[test]
    fn first_frame_puts_now_two_hours_from_left_edge() {
        let mut sync = ScrollSyncCoordinator::new();
        let mut range = RangeController::new(NaiveDate::from_ymd_opt(2025, 6, 4).unwrap());
        let target = sync.begin_frame(&mut range, now()).unwrap();
        // Now is at 3d + 10h = 82h; minus the 2h margin.
        assert_eq!(target.x, 80.0 * HOUR_WIDTH);
        // No further jump on the next frame.
        assert_eq!(sync.begin_frame(&mut range, now()), None);
    }

    #[test]
    fn backward_extension_compensates_to_the_same_visual_position() {
        let (mut sync, mut range) = setup();
        sync.end_frame(vec2(100.0, 40.0));

        let content_left_of_viewport = 100.0;
        range.on_scroll(content_left_of_viewport, range.timeline_width(), 1000.0);
        let target = sync.begin_frame(&mut range, now()).unwrap();

        // One day of pixels was prepended and exactly one day of offset
        // added back: the viewport still shows the same content.
        assert_eq!(target.x, 100.0 + super::super::DAY_WIDTH);
        assert_eq!(target.y, 40.0);
    }

    #[test]
    fn requested_jump_fires_exactly_once() {
        let (mut sync, mut range) = setup();
        assert_eq!(sync.begin_frame(&mut range, now()), None);

        sync.request_scroll_to_now();
        let target = sync.begin_frame(&mut range, now()).unwrap();
        assert_eq!(target.x, 80.0 * HOUR_WIDTH);
        assert_eq!(sync.begin_frame(&mut range, now()), None);
    }

    #[test]
    fn jump_target_tracks_the_current_range_start() {
        let (mut sync, mut range) = setup();
        // Extend backward once; "now" moves one day further into the window.
        range.on_scroll(0.0, range.timeline_width(), 1000.0);
        sync.begin_frame(&mut range, now());

        sync.request_scroll_to_now();
        let target = sync.begin_frame(&mut range, now()).unwrap();
        assert_eq!(target.x, (24.0 + 80.0) * HOUR_WIDTH);
    }
}
