//! # Quadrant decomposition for arcs
//!
//! An arc is drawn with the same midpoint circle walk as a full circle, every candidate pixel
//! is then tested against the requested angular span. To avoid an `atan2` per pixel the span
//! is cut along the four quadrants; inside one quadrant a span is at most 90 degrees wide, so
//! "between the two boundary vectors" is a pair of cross product signs.
//!
//! Conventions:
//!  - angles are radians, counter-clockwise as seen on the screen, 0 along the positive x axis
//!  - all intervals are half-open: quadrant `Qk` owns `[k * 90deg, (k + 1) * 90deg)`, a span
//!    `[start, end)` includes its start angle and excludes its end angle
//!  - offsets passed to `ArcSector::contains` use a y axis pointing up; the canvas flips them

use std::f64::consts::{FRAC_PI_2, TAU};

/// spans at least this close to a full turn draw the full circle
const FULL_TURN_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    /// 0 up to 90 degrees
    Q0,
    /// 90 up to 180 degrees
    Q1,
    /// 180 up to 270 degrees
    Q2,
    /// 270 up to 360 degrees
    Q3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Quadrant::Q0, Quadrant::Q1, Quadrant::Q2, Quadrant::Q3];

    fn index(self) -> u8 {
        match self {
            Quadrant::Q0 => 0,
            Quadrant::Q1 => 1,
            Quadrant::Q2 => 2,
            Quadrant::Q3 => 3,
        }
    }

    pub fn start_angle(self) -> f64 {
        self.index() as f64 * FRAC_PI_2
    }

    pub fn end_angle(self) -> f64 {
        (self.index() + 1) as f64 * FRAC_PI_2
    }

    /// exact unit vector along the start angle
    fn start_axis(self) -> (f64, f64) {
        match self {
            Quadrant::Q0 => (1.0, 0.0),
            Quadrant::Q1 => (0.0, 1.0),
            Quadrant::Q2 => (-1.0, 0.0),
            Quadrant::Q3 => (0.0, -1.0),
        }
    }

    /// exact unit vector along the end angle
    fn end_axis(self) -> (f64, f64) {
        match self {
            Quadrant::Q0 => (0.0, 1.0),
            Quadrant::Q1 => (-1.0, 0.0),
            Quadrant::Q2 => (0.0, -1.0),
            Quadrant::Q3 => (1.0, 0.0),
        }
    }

    /// Rotate an offset of the first quadrant (`x > 0, y >= 0`) into this quadrant.
    pub fn place(self, x: i64, y: i64) -> (i64, i64) {
        match self {
            Quadrant::Q0 => (x, y),
            Quadrant::Q1 => (-y, x),
            Quadrant::Q2 => (-x, -y),
            Quadrant::Q3 => (y, -x),
        }
    }
}

/// The part of one quadrant covered by a span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArcSector {
    /// nothing of the quadrant is drawn
    Empty,
    /// the whole quadrant is drawn
    Full,
    /// only the offsets between the two boundary vectors are drawn
    Clip { from: (f64, f64), to: (f64, f64) },
}

impl ArcSector {
    /// Clip quadrant `quadrant` by the span `[start, end)`, `0 <= start < end <= 2pi`.
    pub fn new(quadrant: Quadrant, start: f64, end: f64) -> ArcSector {
        let (q_start, q_end) = (quadrant.start_angle(), quadrant.end_angle());
        let from = start.max(q_start);
        let to = end.min(q_end);

        if from >= to {
            ArcSector::Empty
        } else if from <= q_start && to >= q_end {
            ArcSector::Full
        } else {
            ArcSector::Clip {
                from: if from <= q_start { quadrant.start_axis() } else { unit(from) },
                to: if to >= q_end { quadrant.end_axis() } else { unit(to) },
            }
        }
    }

    /// Is offset `(x, y)`, which lies in this sector's quadrant, inside the drawn part?
    pub fn contains(&self, x: i64, y: i64) -> bool {
        match self {
            ArcSector::Empty => false,
            ArcSector::Full => true,
            ArcSector::Clip { from, to } => {
                let p = (x as f64, y as f64);
                cross(*from, p) >= 0.0 && cross(*to, p) < 0.0
            }
        }
    }
}

fn unit(angle: f64) -> (f64, f64) {
    (angle.cos(), angle.sin())
}

// > 0 when b is counter-clockwise of a
fn cross(a: (f64, f64), b: (f64, f64)) -> f64 {
    a.0 * b.1 - a.1 * b.0
}

/// Normalize a span into at most two non-wrapping pieces inside `[0, 2pi]`.
///
/// The arc runs counter-clockwise from `start` to `end`; if `end` is smaller than `start`
/// after both are reduced modulo 2pi it continues past 2pi. Equal angles give an empty span,
/// a difference of a full turn or more gives the full circle.
pub fn spans(start: f64, end: f64) -> [Option<(f64, f64)>; 2] {
    if !start.is_finite() || !end.is_finite() {
        return [None, None];
    }
    if end - start >= TAU - FULL_TURN_EPSILON {
        return [Some((0.0, TAU)), None];
    }

    let reduce = |angle: f64| {
        let a = angle.rem_euclid(TAU);
        // rem_euclid rounds tiny negative angles up to exactly TAU
        if a >= TAU {
            0.0
        } else {
            a
        }
    };
    let start = reduce(start);
    let mut end = reduce(end);
    if end < start {
        end += TAU;
    }

    if end == start {
        [None, None]
    } else if end <= TAU {
        [Some((start, end)), None]
    } else {
        [Some((start, TAU)), Some((0.0, end - TAU))]
    }
}

/// The four sectors of one non-wrapping piece.
pub fn sectors(start: f64, end: f64) -> [ArcSector; 4] {
    Quadrant::ALL.map(|q| ArcSector::new(q, start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn deg(d: f64) -> f64 {
        d.to_radians()
    }

    #[test]
    fn spans_wrap_past_full_turn() {
        assert_eq!(spans(deg(15.0), deg(45.0)), [Some((deg(15.0), deg(45.0))), None]);

        let [a, b] = spans(deg(45.0), deg(15.0));
        let (a0, a1) = a.unwrap();
        let (b0, b1) = b.unwrap();
        assert!((a0 - deg(45.0)).abs() < 1e-12 && a1 == TAU);
        assert!(b0 == 0.0 && (b1 - deg(15.0)).abs() < 1e-12);
    }

    #[test]
    fn spans_degenerate_cases() {
        assert_eq!(spans(1.0, 1.0), [None, None]);
        assert_eq!(spans(1.0, 1.0 + TAU), [Some((0.0, TAU)), None]);
        assert_eq!(spans(0.0, 3.0 * TAU), [Some((0.0, TAU)), None]);
        assert_eq!(spans(f64::NAN, 1.0), [None, None]);
        // negative angles are reduced first
        let [a, b] = spans(-FRAC_PI_2, 0.0);
        assert_eq!(b, None);
        let (a0, a1) = a.unwrap();
        assert!((a0 - 1.5 * PI).abs() < 1e-12 && a1 == TAU);
    }

    #[test]
    fn sectors_of_a_quadrant_aligned_span() {
        let s = sectors(FRAC_PI_2, PI);
        assert_eq!(s[0], ArcSector::Empty);
        assert_eq!(s[1], ArcSector::Full);
        assert_eq!(s[2], ArcSector::Empty);
        assert_eq!(s[3], ArcSector::Empty);
    }

    #[test]
    fn clipped_sector_is_half_open() {
        let s = ArcSector::new(Quadrant::Q0, 0.0, deg(45.0));
        assert!(s.contains(10, 0));
        assert!(s.contains(10, 9));
        assert!(!s.contains(9, 10));

        let upper = ArcSector::new(Quadrant::Q0, deg(45.0), FRAC_PI_2);
        // exactly one of the two halves owns the diagonal
        assert_ne!(s.contains(7, 7), upper.contains(7, 7));
    }

    #[test]
    fn place_rotates_counter_clockwise() {
        assert_eq!(Quadrant::Q1.place(5, 2), (-2, 5));
        assert_eq!(Quadrant::Q2.place(5, 2), (-5, -2));
        assert_eq!(Quadrant::Q3.place(5, 2), (2, -5));
        assert_eq!(Quadrant::Q3.place(5, 0), (0, -5));
    }
}
