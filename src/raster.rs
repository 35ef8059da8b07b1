//! # Shape primitives
//!
//! Lines, rectangles, circles and arcs, each optionally filled or stroked wider than one pixel.
//! Coordinates are `f64` and rounded to the nearest pixel before any stepping happens; the
//! stepping itself is integer only. Pixels landing off screen are left to the sink to drop.
//!
//! Circles and arcs share one midpoint circle walk over the first octant, so every pixel of an
//! arc is also a pixel of the circle with the same center and radius.

use crate::{
    arc::{sectors, spans, ArcSector, Quadrant},
    canvas::{round, Canvas, WidthType},
    sink::PixelSink,
};

/// Walk the first octant of a radius `r` circle: calls `f(l1, l2)` with `l1` counting up from 0
/// and `l2` the matching (decreasing) other coordinate, until `l1` passes `l2`.
fn octant(r: i64, mut f: impl FnMut(i64, i64)) {
    let mut l1 = 0;
    let mut l2 = r;
    let mut d = 1 - r;
    while l1 <= l2 {
        f(l1, l2);
        l1 += 1;
        if d < 0 {
            d += 2 * l1 + 1;
        } else {
            l2 -= 1;
            d += 2 * (l1 - l2) + 1;
        }
    }
}

/// Call `f` with the offsets in the first quadrant (`x > 0, y >= 0`) produced by one octant
/// step; the other quadrants are rotations of these.
#[inline]
fn first_quadrant(l1: i64, l2: i64, mut f: impl FnMut(i64, i64)) {
    f(l2, l1);
    // (0, l2) is the 90 degree point, owned by the second quadrant as rotation of (l2, 0)
    if l1 > 0 && l1 != l2 {
        f(l1, l2);
    }
}

/// nearest pixel, widened so offsets and strokes can't overflow
#[inline]
fn px(v: f64) -> i64 {
    round(v) as i64
}

impl<S: PixelSink> Canvas<S> {
    /// Fill the whole screen with the background color.
    pub fn clear(&mut self) {
        let (width, height) = (self.width(), self.height());
        let background = self.background;
        for y in 0..height {
            for x in 0..width {
                self.sink.write_pixel(x, y, background);
            }
        }
    }

    fn on_screen(&self, x: i64, y: i64) -> bool {
        (0..self.width() as i64).contains(&x) && (0..self.height() as i64).contains(&y)
    }

    /// plot with coordinates that may lie far outside the sink's `i32` range
    #[inline]
    fn put(&mut self, x: i64, y: i64) {
        if self.on_screen(x, y) {
            self.plot(x as i32, y as i32);
        }
    }

    /// Straight line between two points, both end points included.
    ///
    /// The pixel set does not depend on which end point comes first.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.line_px(px(x1), px(y1), px(x2), px(y2));
    }

    // Bresenham, clipped to the screen
    fn line_px(&mut self, x0: i64, y0: i64, x1: i64, y1: i64) {
        // always walk from the smaller end point, ties in the error term then break the same way
        let (x0, y0, x1, y1) = if (x1, y1) < (x0, y0) { (x1, y1, x0, y0) } else { (x0, y0, x1, y1) };
        let (width, height) = (self.width() as i64, self.height() as i64);

        // both ends beyond the same edge
        if (x0 < 0 && x1 < 0)
            || (x0 >= width && x1 >= width)
            || (y0 < 0 && y1 < 0)
            || (y0 >= height && y1 >= height)
        {
            return;
        }

        if (x1 - x0).abs() >= (y1 - y0).abs() {
            self.walk(x0, y0, x1 - x0, y1 - y0, width, height, |a, b| (a, b));
        } else if y0 < y1 {
            self.walk(y0, x0, y1 - y0, x1 - x0, height, width, |a, b| (b, a));
        } else {
            self.walk(y1, x1, y0 - y1, x0 - x1, height, width, |a, b| (b, a));
        }
    }

    /// Step along the major axis `a` from `a0` to `a0 + da` (`da >= |db|`), only over the part
    /// inside `0..a_len`. The minor coordinate is `b0 + round(k * db / da)` at step `k`, rounded
    /// half up; it is computed once at the first visible step and then carried by the error term.
    #[allow(clippy::too_many_arguments)]
    fn walk(
        &mut self,
        a0: i64,
        b0: i64,
        da: i64,
        db: i64,
        a_len: i64,
        b_len: i64,
        map: impl Fn(i64, i64) -> (i64, i64),
    ) {
        if da == 0 {
            let (x, y) = map(a0, b0);
            self.put(x, y);
            return;
        }
        let first = a0.max(0);
        let last = (a0 + da).min(a_len - 1);
        if first > last {
            return;
        }

        // b = b0 + floor(n / den) with n = 2 * k * db + da, den = 2 * da
        let den = 2 * da as i128;
        let n = 2 * (first - a0) as i128 * db as i128 + da as i128;
        let mut b = b0 + n.div_euclid(den) as i64;
        let mut err = n.rem_euclid(den) as i64;
        let (den, step) = (2 * da, 2 * db);

        for a in first..=last {
            if (0..b_len).contains(&b) {
                let (x, y) = map(a, b);
                self.plot(x as i32, y as i32);
            }
            err += step;
            if err >= den {
                err -= den;
                b += 1;
            } else if err < 0 {
                err += den;
                b -= 1;
            }
        }
    }

    /// Outline of the rectangle spanned by two corners.
    pub fn rectangle(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.rectangle_px(px(x1), px(y1), px(x2), px(y2));
    }

    fn rectangle_px(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        self.line_px(x1, y1, x2, y1);
        self.line_px(x2, y1, x2, y2);
        self.line_px(x2, y2, x1, y2);
        self.line_px(x1, y2, x1, y1);
    }

    /// Every pixel of the rectangle spanned by two corners, in any order.
    pub fn fill_rectangle(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let (x1, y1, x2, y2) = (px(x1), px(y1), px(x2), px(y2));
        let top = y1.min(y2).max(0);
        let bottom = y1.max(y2).min(self.height() as i64 - 1);
        for y in top..=bottom {
            self.line_px(x1, y, x2, y);
        }
    }

    /// Rectangle outline `width` pixels wide, placed according to `width_type`.
    pub fn thick_rectangle(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        width: u32,
        width_type: WidthType,
    ) {
        let (x1, y1, x2, y2) = (px(x1), px(y1), px(x2), px(y2));
        let (left, right) = (x1.min(x2), x1.max(x2));
        let (top, bottom) = (y1.min(y2), y1.max(y2));

        let start = width_type.start(0, width as i64);
        for i in 0..width as i64 {
            let d = start - i;
            // an inner stroke wider than the rectangle collapses
            if left - d > right + d || top - d > bottom + d {
                break;
            }
            self.rectangle_px(left - d, top - d, right + d, bottom + d);
        }
    }

    /// Does the square around the circle miss the screen?
    fn outside_screen(&self, cx: i64, cy: i64, r: i64) -> bool {
        cx + r < 0 || cy + r < 0 || cx - r >= self.width() as i64 || cy - r >= self.height() as i64
    }

    /// Is the whole screen strictly inside radius `r - 1`, out of reach of the outline?
    fn screen_inside(&self, cx: i64, cy: i64, r: i64) -> bool {
        if r < 1 {
            return false;
        }
        let (w, h) = (self.width() as i64 - 1, self.height() as i64 - 1);
        let limit = (r as i128 - 1).pow(2);
        [(0, 0), (w, 0), (0, h), (w, h)].iter().all(|&(x, y)| {
            let (dx, dy) = ((x - cx) as i128, (y - cy) as i128);
            dx * dx + dy * dy < limit
        })
    }

    /// Circle outline around (x, y).
    pub fn circle(&mut self, x: f64, y: f64, radius: f64) {
        self.circle_px(px(x), px(y), px(radius));
    }

    fn circle_px(&mut self, cx: i64, cy: i64, r: i64) {
        if r < 0 || self.outside_screen(cx, cy, r) || self.screen_inside(cx, cy, r) {
            return;
        }
        octant(r, |l1, l2| {
            first_quadrant(l1, l2, |dx, dy| {
                for q in Quadrant::ALL.iter() {
                    let (ox, oy) = q.place(dx, dy);
                    // screen y grows downwards
                    self.put(cx + ox, cy - oy);
                }
            });
        });
    }

    /// Filled circle around (x, y).
    pub fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        let (cx, cy, r) = (px(x), px(y), px(radius));
        if r < 0 || self.outside_screen(cx, cy, r) {
            return;
        }
        // one octant step covers four spans; stopping at the diagonal avoids redrawing them
        octant(r, |l1, l2| {
            self.line_px(cx - l2, cy + l1, cx + l2, cy + l1);
            self.line_px(cx - l2, cy - l1, cx + l2, cy - l1);
            self.line_px(cx - l1, cy + l2, cx + l1, cy + l2);
            self.line_px(cx - l1, cy - l2, cx + l1, cy - l2);
        });
    }

    /// Circle outline `width` pixels wide, placed according to `width_type`.
    pub fn thick_circle(&mut self, x: f64, y: f64, radius: f64, width: u32, width_type: WidthType) {
        let (cx, cy) = (px(x), px(y));
        let start = width_type.start(px(radius), width as i64);
        for i in 0..width as i64 {
            self.circle_px(cx, cy, start - i);
        }
    }

    /// Part of a circle outline, counter-clockwise from `start_angle` to `end_angle` (radians).
    ///
    /// When `end_angle` is smaller than `start_angle` (modulo a full turn) the arc runs past
    /// 0 radians. Equal angles draw nothing, a full turn draws the whole circle.
    pub fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.arc_px(px(x), px(y), px(radius), start_angle, end_angle);
    }

    fn arc_px(&mut self, cx: i64, cy: i64, r: i64, start_angle: f64, end_angle: f64) {
        if r < 0 || self.outside_screen(cx, cy, r) || self.screen_inside(cx, cy, r) {
            return;
        }
        for (start, end) in spans(start_angle, end_angle).iter().flatten() {
            let clipped = sectors(*start, *end);
            if clipped.iter().all(|s| *s == ArcSector::Empty) {
                continue;
            }
            octant(r, |l1, l2| {
                first_quadrant(l1, l2, |dx, dy| {
                    for (q, sector) in Quadrant::ALL.iter().zip(clipped.iter()) {
                        let (ox, oy) = q.place(dx, dy);
                        if sector.contains(ox, oy) {
                            self.put(cx + ox, cy - oy);
                        }
                    }
                });
            });
        }
    }

    /// Arc `width` pixels wide, placed according to `width_type`.
    #[allow(clippy::too_many_arguments)]
    pub fn thick_arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        width: u32,
        width_type: WidthType,
    ) {
        let (cx, cy) = (px(x), px(y));
        let start = width_type.start(px(radius), width as i64);
        for i in 0..width as i64 {
            self.arc_px(cx, cy, start - i, start_angle, end_angle);
        }
    }
}
