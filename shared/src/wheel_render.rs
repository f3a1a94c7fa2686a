use std::borrow::Cow;
use std::f64::consts::PI;
use crate::shared_wheel_game::PrizeList;

pub const TAU: f64 = 2.0 * PI;

// Wheel layout in logical pixels
pub const BORDER_PADDING: f64 = 30.0;
pub const RIM_THICKNESS: f64 = 24.0;
pub const LABEL_INSET: f64 = 10.0;
pub const BULB_COUNT: usize = 36;
pub const BULB_RADIUS: f64 = 5.0;
pub const CENTER_CAP_RADIUS: f64 = 10.0;

// Palette
pub const RIM_STOPS: [(f64, &str); 5] = [
    (0.0, "#B8860B"),
    (0.25, "#FFD700"),
    (0.5, "#FFFACD"),
    (0.75, "#FFD700"),
    (1.0, "#B8860B"),
];
pub const RIM_SHADOW: Shadow = Shadow { color: "rgba(0,0,0,0.5)", blur: 15.0 };
pub const INNER_RIM_COLOR: &str = "#8B4513";
pub const SEGMENT_COLORS: [&str; 2] = ["#800000", "#A52A2A"];
pub const DIVIDER_COLOR: &str = "#F2C94C";
pub const LABEL_COLOR: &str = "#FFFFFF";
pub const LABEL_SHADOW: Shadow = Shadow { color: "rgba(0,0,0,0.8)", blur: 4.0 };
pub const BULB_COLORS: [&str; 2] = ["#FFF8DC", "#DAA520"];
pub const BULB_GLOW: Shadow = Shadow { color: "#FFD700", blur: 8.0 };

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: &'static str,
    pub blur: f64,
}

/// Fill for circles. Gradient stops are offsets in `[0, 1]` between `inner` and `outer` radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(&'static str),
    RadialGradient {
        inner: f64,
        outer: f64,
        stops: &'static [(f64, &'static str)],
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub font_size: f64,
    pub color: &'static str,
    pub shadow: Shadow,
}

/// The drawing operations the wheel needs from a 2D raster target.
///
/// Angles are radians in screen space: 0 points along +x and positive angles turn
/// clockwise because y grows downward.
pub trait WheelSurface {
    fn clear(&mut self, width: f64, height: f64);

    fn fill_circle(&mut self, center: Point, radius: f64, paint: &Paint, shadow: Option<Shadow>);

    fn stroke_circle(&mut self, center: Point, radius: f64, color: &str, line_width: f64);

    /// Pie slice from `center` between `start` and `end`, filled then outlined with `divider`.
    fn fill_wedge(&mut self, center: Point, radius: f64, start: f64, end: f64, fill: &str, divider: &str);

    /// Text rotated by `angle` around `center`, right-aligned at `distance` along the rotated x axis
    /// and vertically centered on it.
    fn draw_label(&mut self, text: &str, center: Point, angle: f64, distance: f64, style: &LabelStyle);
}

/// Derived layout for a wheel of `segments` wedges on a `width` x `height` surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    pub center: Point,
    pub radius: f64,
    pub segments: usize,
    pub segment_angle: f64,
}

impl WheelGeometry {
    pub fn new(width: f64, height: f64, segments: usize) -> Self {
        let center = Point { x: width / 2.0, y: height / 2.0 };
        Self {
            center,
            radius: center.x.min(center.y) - BORDER_PADDING,
            segments,
            segment_angle: TAU / segments as f64,
        }
    }

    pub fn outer_radius(&self) -> f64 {
        self.radius + RIM_THICKNESS
    }

    /// Angular range `[start, end)` of segment `index` at `rotation`.
    pub fn segment_span(&self, index: usize, rotation: f64) -> (f64, f64) {
        let start = rotation + index as f64 * self.segment_angle;
        (start, start + self.segment_angle)
    }

    pub fn segment_center(&self, index: usize, rotation: f64) -> f64 {
        rotation + index as f64 * self.segment_angle + self.segment_angle / 2.0
    }

    /// Index of the segment covering `angle` when the wheel sits at `rotation`.
    pub fn segment_at(&self, angle: f64, rotation: f64) -> usize {
        let offset = (angle - rotation).rem_euclid(TAU);
        ((offset / self.segment_angle) as usize).min(self.segments - 1)
    }

    /// Marquee bulb centres. These stay fixed on screen regardless of rotation.
    pub fn bulb_positions(&self) -> impl Iterator<Item = Point> + '_ {
        let ring = self.radius + RIM_THICKNESS / 2.0;
        (0..BULB_COUNT).map(move |i| {
            let angle = i as f64 / BULB_COUNT as f64 * TAU;
            Point {
                x: self.center.x + ring * angle.cos(),
                y: self.center.y + ring * angle.sin(),
            }
        })
    }
}

/// Smaller text as the wheel gets more crowded.
pub fn label_font_size(segments: usize) -> f64 {
    if segments > 24 {
        12.0
    } else if segments > 12 {
        14.0
    } else {
        16.0
    }
}

/// Shortens long labels on crowded wheels so they stay inside their wedge.
pub fn label_text(label: &str, segments: usize) -> Cow<'_, str> {
    if segments > 20 && label.chars().count() > 10 {
        let head: String = label.chars().take(8).collect();
        Cow::Owned(format!("{}..", head))
    } else {
        Cow::Borrowed(label)
    }
}

/// Paints one frame of the wheel. Only draws; `prizes` must be non-empty.
pub fn render_wheel<S: WheelSurface + ?Sized>(
    surface: &mut S,
    width: f64,
    height: f64,
    prizes: &PrizeList,
    rotation: f64,
) {
    let geometry = WheelGeometry::new(width, height, prizes.len());
    let center = geometry.center;

    surface.clear(width, height);

    // Rim
    let rim = Paint::RadialGradient {
        inner: geometry.radius,
        outer: geometry.outer_radius(),
        stops: &RIM_STOPS,
    };
    surface.fill_circle(center, geometry.outer_radius(), &rim, Some(RIM_SHADOW));
    surface.stroke_circle(center, geometry.radius, INNER_RIM_COLOR, 2.0);

    // Segments and labels
    let label_style = LabelStyle {
        font_size: label_font_size(geometry.segments),
        color: LABEL_COLOR,
        shadow: LABEL_SHADOW,
    };
    for (index, label) in prizes.iter().enumerate() {
        let (start, end) = geometry.segment_span(index, rotation);
        surface.fill_wedge(center, geometry.radius, start, end, SEGMENT_COLORS[index % 2], DIVIDER_COLOR);
        surface.draw_label(
            &label_text(label, geometry.segments),
            center,
            geometry.segment_center(index, rotation),
            geometry.radius - LABEL_INSET,
            &label_style,
        );
    }

    // Bulbs
    for (i, bulb) in geometry.bulb_positions().enumerate() {
        surface.fill_circle(bulb, BULB_RADIUS, &Paint::Solid(BULB_COLORS[i % 2]), Some(BULB_GLOW));
    }

    // Center cap
    surface.fill_circle(center, CENTER_CAP_RADIUS, &Paint::Solid(SEGMENT_COLORS[0]), None);
    surface.stroke_circle(center, CENTER_CAP_RADIUS, DIVIDER_COLOR, 1.0);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Clear,
        FillCircle { center: Point, radius: f64, paint: Paint },
        StrokeCircle { radius: f64, color: String },
        Wedge { start: f64, end: f64, fill: String },
        Label { text: String, angle: f64, distance: f64, font_size: f64 },
    }

    /// Records every call so tests can assert on what was drawn.
    #[derive(Default)]
    pub struct RecordingSurface {
        pub ops: Vec<Op>,
    }

    impl RecordingSurface {
        pub fn wedges(&self) -> Vec<(f64, f64, String)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Wedge { start, end, fill } => Some((*start, *end, fill.clone())),
                    _ => None,
                })
                .collect()
        }

        pub fn labels(&self) -> Vec<(String, f64)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Label { text, angle, .. } => Some((text.clone(), *angle)),
                    _ => None,
                })
                .collect()
        }
    }

    impl WheelSurface for RecordingSurface {
        fn clear(&mut self, _width: f64, _height: f64) {
            self.ops.push(Op::Clear);
        }

        fn fill_circle(&mut self, center: Point, radius: f64, paint: &Paint, _shadow: Option<Shadow>) {
            self.ops.push(Op::FillCircle { center, radius, paint: *paint });
        }

        fn stroke_circle(&mut self, _center: Point, radius: f64, color: &str, _line_width: f64) {
            self.ops.push(Op::StrokeCircle { radius, color: color.to_string() });
        }

        fn fill_wedge(&mut self, _center: Point, _radius: f64, start: f64, end: f64, fill: &str, _divider: &str) {
            self.ops.push(Op::Wedge { start, end, fill: fill.to_string() });
        }

        fn draw_label(&mut self, text: &str, _center: Point, angle: f64, distance: f64, style: &LabelStyle) {
            self.ops.push(Op::Label {
                text: text.to_string(),
                angle,
                distance,
                font_size: style.font_size,
            });
        }
    }

    fn prizes(n: usize) -> PrizeList {
        (0..n).map(|i| format!("Prize {}", i)).collect::<Vec<_>>().into()
    }

    const EPS: f64 = 1e-9;

    #[test]
    fn test_segments_cover_full_circle() {
        for n in [1, 2, 3, 7, 15, 30, 50] {
            for rotation in [0.0, 1.25, -3.0, 97.5] {
                let mut surface = RecordingSurface::default();
                render_wheel(&mut surface, 500.0, 500.0, &prizes(n), rotation);

                let wedges = surface.wedges();
                assert_eq!(wedges.len(), n);
                assert!((wedges[0].0 - rotation).abs() < EPS);
                for pair in wedges.windows(2) {
                    assert!((pair[0].1 - pair[1].0).abs() < EPS, "gap between wedges");
                }
                let total: f64 = wedges.iter().map(|(s, e, _)| e - s).sum();
                assert!((total - TAU).abs() < 1e-9);
                for (start, end, _) in &wedges {
                    assert!((end - start - TAU / n as f64).abs() < EPS);
                }
            }
        }
    }

    #[test]
    fn test_labels_drawn_at_segment_centers() {
        let n = 8;
        let rotation = 0.7;
        let mut surface = RecordingSurface::default();
        render_wheel(&mut surface, 400.0, 400.0, &prizes(n), rotation);

        let labels = surface.labels();
        assert_eq!(labels.len(), n);
        for (i, (text, angle)) in labels.iter().enumerate() {
            assert_eq!(text, &format!("Prize {}", i));
            let expected = rotation + i as f64 * (TAU / n as f64) + PI / n as f64;
            assert!((angle - expected).abs() < EPS);
        }
    }

    #[test]
    fn test_segment_colors_alternate() {
        let mut surface = RecordingSurface::default();
        render_wheel(&mut surface, 500.0, 500.0, &prizes(5), 0.0);
        let fills: Vec<String> = surface.wedges().into_iter().map(|(_, _, fill)| fill).collect();
        assert_eq!(fills, vec!["#800000", "#A52A2A", "#800000", "#A52A2A", "#800000"]);
    }

    #[test]
    fn test_draw_order_and_static_bulbs() {
        let list = prizes(4);
        let mut a = RecordingSurface::default();
        let mut b = RecordingSurface::default();
        render_wheel(&mut a, 500.0, 500.0, &list, 0.0);
        render_wheel(&mut b, 500.0, 500.0, &list, 2.5);

        assert_eq!(a.ops.first(), Some(&Op::Clear));
        assert!(matches!(a.ops[1], Op::FillCircle { paint: Paint::RadialGradient { .. }, .. }));

        let bulbs = |s: &RecordingSurface| -> Vec<Op> {
            s.ops
                .iter()
                .filter(|op| matches!(op, Op::FillCircle { radius, .. } if *radius == BULB_RADIUS))
                .cloned()
                .collect()
        };
        assert_eq!(bulbs(&a).len(), BULB_COUNT);
        assert_eq!(bulbs(&a), bulbs(&b));

        // Cap is drawn last
        assert!(matches!(a.ops.last(), Some(Op::StrokeCircle { radius, .. }) if *radius == CENTER_CAP_RADIUS));
    }

    #[test]
    fn test_geometry_for_non_square_surface() {
        let geometry = WheelGeometry::new(600.0, 400.0, 10);
        assert_eq!(geometry.center, Point { x: 300.0, y: 200.0 });
        assert_eq!(geometry.radius, 170.0);
        assert_eq!(geometry.outer_radius(), 194.0);
    }

    #[test]
    fn test_font_size_steps() {
        assert_eq!(label_font_size(12), 16.0);
        assert_eq!(label_font_size(13), 14.0);
        assert_eq!(label_font_size(24), 14.0);
        assert_eq!(label_font_size(25), 12.0);
    }

    #[test]
    fn test_label_truncation() {
        assert_eq!(label_text("Rice Cooker Deluxe", 20), "Rice Cooker Deluxe");
        assert_eq!(label_text("Rice Cooker Deluxe", 21), "Rice Coo..");
        assert_eq!(label_text("Short one", 50), "Short one");
        assert_eq!(label_text("新春快樂紅包大禮包一份", 30), "新春快樂紅包大禮..");
    }

    #[test]
    fn test_label_truncation_boundaries() {
        // Ten characters is the longest label kept whole
        assert_eq!(label_text("0123456789", 21), "0123456789");
        assert_eq!(label_text("01234567890", 21), "01234567..");
        assert_eq!(label_text("紅包大禮包一二三四五", 21), "紅包大禮包一二三四五");
        assert_eq!(label_text("紅包大禮包一二三四五六", 21), "紅包大禮包一二..");

        // Only wheels with more than twenty segments shorten labels
        assert_eq!(label_text("01234567890", 20), "01234567890");
        assert_eq!(label_text("01234567890", 21), "01234567..");
        assert!(matches!(label_text("01234567890", 20), Cow::Borrowed(_)));
    }

    #[test]
    fn test_segment_at_inverts_segment_center() {
        let geometry = WheelGeometry::new(500.0, 500.0, 15);
        for rotation in [0.0, 4.2, -1.0, 1234.5] {
            for i in 0..15 {
                assert_eq!(geometry.segment_at(geometry.segment_center(i, rotation), rotation), i);
            }
        }
    }
}
