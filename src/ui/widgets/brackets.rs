// SPDX-License-Identifier: MPL-2.0
//! Framing guide drawn over the camera feed.
//!
//! Four rounded L-shaped corner brackets mark a square frame. On the scanning
//! screen the overlay also dims everything outside a clear window and sweeps
//! a green line up and down inside it.

use crate::ui::design_tokens::{brackets, opacity, palette};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};
use std::f32::consts::PI;
use std::time::Duration;

/// Line segments used to approximate each rounded corner.
const ARC_SEGMENTS: usize = 8;

/// Alpha of each pixel row of the scan line, fading out at both edges.
const SCAN_LINE_ROWS: [f32; 6] = [0.17, 0.5, 0.83, 0.83, 0.5, 0.17];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    fn is_right(self) -> bool {
        matches!(self, Corner::TopRight | Corner::BottomRight)
    }

    fn is_bottom(self) -> bool {
        matches!(self, Corner::BottomLeft | Corner::BottomRight)
    }

    /// The matching corner of `frame`.
    #[must_use]
    pub fn of(self, frame: Rectangle) -> Point {
        Point::new(
            if self.is_right() {
                frame.x + frame.width
            } else {
                frame.x
            },
            if self.is_bottom() {
                frame.y + frame.height
            } else {
                frame.y
            },
        )
    }
}

/// Square frame of `fraction` of the shorter side, centred horizontally and
/// raised by `lift` from the vertical centre.
#[must_use]
pub fn frame_rect(bounds: Size, fraction: f32, lift: f32) -> Rectangle {
    let side = bounds.width.min(bounds.height) * fraction;
    let center = Point::new(bounds.width / 2.0, bounds.height / 2.0 - lift);
    Rectangle {
        x: center.x - side / 2.0,
        y: center.y - side / 2.0,
        width: side,
        height: side,
    }
}

/// Points of one bracket: a straight arm, a quarter arc, another arm.
///
/// The bracket is laid out in a `BOX`-sized square centred on `anchor`, with
/// the L hugging that square's outer corner.
#[must_use]
pub fn bracket_polyline(corner: Corner, anchor: Point) -> Vec<Point> {
    let size = brackets::BOX;
    let arm = brackets::ARM;
    let r = brackets::CORNER_RADIUS;
    let origin = Point::new(anchor.x - size / 2.0, anchor.y - size / 2.0);

    // Top-left shape in box coordinates, mirrored for the other corners.
    let mut local = Vec::with_capacity(ARC_SEGMENTS + 3);
    local.push((0.0, arm));
    #[allow(clippy::cast_precision_loss)]
    for i in 0..=ARC_SEGMENTS {
        let angle = PI + (PI / 2.0) * (i as f32 / ARC_SEGMENTS as f32);
        local.push((r + r * angle.cos(), r + r * angle.sin()));
    }
    local.push((arm, 0.0));

    local
        .into_iter()
        .map(|(x, y)| {
            let x = if corner.is_right() { size - x } else { x };
            let y = if corner.is_bottom() { size - y } else { y };
            Point::new(origin.x + x, origin.y + y)
        })
        .collect()
}

/// Vertical position of the scan line inside a window of height `travel`.
///
/// Moves linearly from top to bottom in `sweep`, then back, forever.
#[must_use]
pub fn scan_line_offset(elapsed: Duration, sweep: Duration, travel: f32) -> f32 {
    let sweep = sweep.as_secs_f32();
    if sweep <= 0.0 {
        return 0.0;
    }
    let phase = (elapsed.as_secs_f32() / sweep) % 2.0;
    let t = if phase <= 1.0 { phase } else { 2.0 - phase };
    t * travel
}

/// Dims the area outside the scanning window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cutout {
    /// Window side as a fraction of the shorter side.
    pub fraction: f32,
}

/// Canvas program drawing the framing guide.
#[derive(Debug, Clone)]
pub struct FramingOverlay {
    fraction: f32,
    lift: f32,
    color: Color,
    cutout: Option<Cutout>,
    /// Time since the scan line started moving.
    scan_line: Option<Duration>,
    sweep: Duration,
}

impl FramingOverlay {
    /// Brackets only, as on the camera screen.
    #[must_use]
    pub fn camera() -> Self {
        Self {
            fraction: brackets::FRAME_FRACTION,
            lift: brackets::CAMERA_LIFT,
            color: palette::WHITE,
            cutout: None,
            scan_line: None,
            sweep: Duration::ZERO,
        }
    }

    /// Brackets over a dimmed backdrop with a sweeping line.
    #[must_use]
    pub fn scanning(elapsed: Duration, sweep: Duration) -> Self {
        Self {
            fraction: brackets::FRAME_FRACTION,
            lift: brackets::SCAN_LIFT,
            color: palette::WHITE,
            cutout: Some(Cutout {
                fraction: brackets::SCAN_WINDOW_FRACTION,
            }),
            scan_line: Some(elapsed),
            sweep,
        }
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn draw_dim(&self, frame: &mut Frame, size: Size, window: Rectangle) {
        let dim = Color {
            a: opacity::SCAN_DIM,
            ..palette::BLACK
        };
        let right = window.x + window.width;
        let bottom = window.y + window.height;

        // Top, bottom, left, right bands around the window.
        frame.fill_rectangle(Point::ORIGIN, Size::new(size.width, window.y.max(0.0)), dim);
        if bottom < size.height {
            frame.fill_rectangle(
                Point::new(0.0, bottom),
                Size::new(size.width, size.height - bottom),
                dim,
            );
        }
        frame.fill_rectangle(
            Point::new(0.0, window.y),
            Size::new(window.x.max(0.0), window.height),
            dim,
        );
        if right < size.width {
            frame.fill_rectangle(
                Point::new(right, window.y),
                Size::new(size.width - right, window.height),
                dim,
            );
        }
    }

    fn draw_scan_line(&self, frame: &mut Frame, window: Rectangle, elapsed: Duration) {
        #[allow(clippy::cast_precision_loss)]
        let height = SCAN_LINE_ROWS.len() as f32;
        let top = window.y + scan_line_offset(elapsed, self.sweep, window.height - height);
        for (row, alpha) in SCAN_LINE_ROWS.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let y = top + row as f32;
            frame.fill_rectangle(
                Point::new(window.x, y),
                Size::new(window.width, 1.0),
                Color {
                    a: *alpha,
                    ..palette::PRIMARY_500
                },
            );
        }
    }
}

impl<Message> canvas::Program<Message> for FramingOverlay {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let size = bounds.size();
        let mut frame = Frame::new(renderer, size);

        if let Some(cutout) = self.cutout {
            let window = frame_rect(size, cutout.fraction, self.lift);
            self.draw_dim(&mut frame, size, window);
            if let Some(elapsed) = self.scan_line {
                self.draw_scan_line(&mut frame, window, elapsed);
            }
        }

        let guide = frame_rect(size, self.fraction, self.lift);
        for corner in Corner::ALL {
            let points = bracket_polyline(corner, corner.of(guide));
            let path = Path::new(|builder| {
                let mut points = points.iter();
                if let Some(first) = points.next() {
                    builder.move_to(*first);
                }
                for point in points {
                    builder.line_to(*point);
                }
            });
            frame.stroke(
                &path,
                Stroke::default()
                    .with_width(brackets::STROKE)
                    .with_color(self.color)
                    .with_line_cap(canvas::LineCap::Round)
                    .with_line_join(canvas::LineJoin::Round),
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn frame_is_square_of_shorter_side() {
        let rect = frame_rect(Size::new(400.0, 800.0), 0.6, 40.0);
        assert_abs_diff_eq!(rect.width, 240.0);
        assert_abs_diff_eq!(rect.height, 240.0);
        assert_abs_diff_eq!(rect.x + rect.width / 2.0, 200.0);
        assert_abs_diff_eq!(rect.y + rect.height / 2.0, 360.0);
    }

    #[test]
    fn top_left_bracket_hugs_box_corner() {
        let anchor = Point::new(100.0, 100.0);
        let points = bracket_polyline(Corner::TopLeft, anchor);
        let first = points[0];
        let last = points[points.len() - 1];

        // Box spans 65..135 on both axes.
        assert_abs_diff_eq!(first.x, 65.0);
        assert_abs_diff_eq!(first.y, 65.0 + brackets::ARM);
        assert_abs_diff_eq!(last.x, 65.0 + brackets::ARM);
        assert_abs_diff_eq!(last.y, 65.0);
    }

    #[test]
    fn arc_points_stay_on_the_corner_radius() {
        let anchor = Point::new(0.0, 0.0);
        let points = bracket_polyline(Corner::TopLeft, anchor);
        let r = brackets::CORNER_RADIUS;
        let center = Point::new(-brackets::BOX / 2.0 + r, -brackets::BOX / 2.0 + r);

        for point in &points[1..points.len() - 1] {
            let distance = point.distance(center);
            assert_abs_diff_eq!(distance, r, epsilon = 1e-3);
        }
    }

    #[test]
    fn bottom_right_mirrors_top_left() {
        let anchor = Point::new(50.0, 50.0);
        let tl = bracket_polyline(Corner::TopLeft, anchor);
        let br = bracket_polyline(Corner::BottomRight, anchor);

        for (a, b) in tl.iter().zip(&br) {
            assert_abs_diff_eq!(a.x + b.x, 2.0 * anchor.x, epsilon = 1e-4);
            assert_abs_diff_eq!(a.y + b.y, 2.0 * anchor.y, epsilon = 1e-4);
        }
    }

    #[test]
    fn corners_map_to_frame_corners() {
        let rect = Rectangle {
            x: 10.0,
            y: 20.0,
            width: 100.0,
            height: 100.0,
        };
        assert_eq!(Corner::TopLeft.of(rect), Point::new(10.0, 20.0));
        assert_eq!(Corner::BottomRight.of(rect), Point::new(110.0, 120.0));
    }

    #[test]
    fn scan_line_sweeps_down_then_back() {
        let sweep = Duration::from_millis(1500);
        assert_abs_diff_eq!(scan_line_offset(Duration::ZERO, sweep, 300.0), 0.0);
        assert_abs_diff_eq!(
            scan_line_offset(Duration::from_millis(750), sweep, 300.0),
            150.0,
            epsilon = 1e-3
        );
        assert_abs_diff_eq!(
            scan_line_offset(Duration::from_millis(1500), sweep, 300.0),
            300.0,
            epsilon = 1e-3
        );
        assert_abs_diff_eq!(
            scan_line_offset(Duration::from_millis(2250), sweep, 300.0),
            150.0,
            epsilon = 1e-3
        );
        assert_abs_diff_eq!(
            scan_line_offset(Duration::from_millis(3000), sweep, 300.0),
            0.0,
            epsilon = 1e-3
        );
    }

    #[test]
    fn zero_sweep_parks_the_line() {
        assert_abs_diff_eq!(
            scan_line_offset(Duration::from_secs(1), Duration::ZERO, 300.0),
            0.0
        );
    }
}
