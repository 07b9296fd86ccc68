use super::geometry::px_to_time;
use super::MIN_BAR_WIDTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeSide {
    Left,
    Right,
}

/// Transient edge-drag state for one bar: created on pointer-down over a
/// handle, updated on pointer moves, consumed exactly once on release.
/// Only pixel state changes while the gesture is live; the time mutation
/// happens at commit.
#[derive(Debug, Clone, Copy)]
pub struct ResizeGesture {
    side: ResizeSide,
    start_x: f32,
    start_left: f32,
    start_width: f32,
    left: f32,
    width: f32,
}

impl ResizeGesture {
    pub fn begin(side: ResizeSide, pointer_x: f32, left: f32, width: f32) -> Self {
        Self {
            side,
            start_x: pointer_x,
            start_left: left,
            start_width: width,
            left,
            width,
        }
    }

    /// Current pixel override for the bar being resized.
    pub fn left(&self) -> f32 {
        self.left
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Recompute the override from the latest pointer position.
    /// `max_px` is the timeline's total pixel extent; neither edge may
    /// leave `[0, max_px]` and the bar never shrinks below the minimum
    /// width.
    pub fn update(&mut self, pointer_x: f32, max_px: f32) {
        let delta = pointer_x - self.start_x;

        match self.side {
            ResizeSide::Left => {
                let mut left = self.start_left + delta;
                let mut width = self.start_width - delta;

                if left < 0.0 {
                    width += left;
                    left = 0.0;
                }
                if width < MIN_BAR_WIDTH {
                    left = self.start_left + self.start_width - MIN_BAR_WIDTH;
                    width = MIN_BAR_WIDTH;
                }
                if left + width > max_px {
                    left = max_px - width;
                }

                self.left = left;
                self.width = width;
            }
            ResizeSide::Right => {
                let mut width = self.start_width + delta;

                if width < MIN_BAR_WIDTH {
                    width = MIN_BAR_WIDTH;
                }
                if self.left + width > max_px {
                    width = max_px - self.left;
                }

                self.width = width;
            }
        }
    }

    /// Snapped "HH:MM" pair for the current edges; shown live in the
    /// gesture tooltip.
    pub fn times(&self) -> (String, String) {
        (px_to_time(self.left), px_to_time(self.left + self.width))
    }

    /// Consume the gesture, yielding the times to commit. Callers issue
    /// the update intent once and drop back to recomputed geometry.
    pub fn finish(self) -> (String, String) {
        self.times()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::HOUR_WIDTH;

    const MAX: f32 = 7.0 * 24.0 * HOUR_WIDTH;

    #[test]
    fn right_resize_grows_and_snaps_on_commit() {
        // Right handle dragged from pixel 100 to 137 on a bar at [0, 100].
        let mut g = ResizeGesture::begin(ResizeSide::Right, 100.0, 0.0, 100.0);
        g.update(137.0, MAX);
        assert_eq!(g.left(), 0.0);
        assert_eq!(g.width(), 137.0);
        let (load, unload) = g.finish();
        assert_eq!(load, "00:00");
        // 137/80 h is snapped to the quarter-hour grid, not kept exact.
        assert_eq!(unload, "01:45");
    }

    #[test]
    fn left_resize_moves_the_start_edge() {
        let mut g = ResizeGesture::begin(ResizeSide::Left, 500.0, 160.0, 160.0);
        g.update(420.0, MAX);
        assert_eq!(g.left(), 80.0);
        assert_eq!(g.width(), 240.0);
        let (load, unload) = g.times();
        assert_eq!(load, "01:00");
        assert_eq!(unload, "04:00");
    }

    #[test]
    fn left_edge_clamps_at_timeline_start() {
        let mut g = ResizeGesture::begin(ResizeSide::Left, 0.0, 100.0, 200.0);
        g.update(-500.0, MAX);
        assert_eq!(g.left(), 0.0);
        // The width only absorbed the pixels that existed left of zero.
        assert_eq!(g.width(), 300.0);
    }

    #[test]
    fn width_floor_pushes_the_left_edge_back() {
        let mut g = ResizeGesture::begin(ResizeSide::Left, 0.0, 100.0, 100.0);
        g.update(500.0, MAX);
        assert_eq!(g.width(), MIN_BAR_WIDTH);
        assert_eq!(g.left(), 100.0 + 100.0 - MIN_BAR_WIDTH);
    }

    #[test]
    fn right_resize_respects_floor_and_extent() {
        let mut g = ResizeGesture::begin(ResizeSide::Right, 0.0, 100.0, 200.0);
        g.update(-1000.0, MAX);
        assert_eq!(g.width(), MIN_BAR_WIDTH);

        let mut g = ResizeGesture::begin(ResizeSide::Right, 0.0, MAX - 100.0, 50.0);
        g.update(10_000.0, MAX);
        assert_eq!(g.left() + g.width(), MAX);
    }

    #[test]
    fn commit_uses_only_the_final_position() {
        let mut g = ResizeGesture::begin(ResizeSide::Right, 0.0, 0.0, 80.0);
        for x in [37.0, -20.0, 400.0, 160.0] {
            g.update(x, MAX);
        }
        let (_, unload) = g.finish();
        // 80 + 160 px = 3h exactly; intermediate moves left no trace.
        assert_eq!(unload, "03:00");
    }
}
