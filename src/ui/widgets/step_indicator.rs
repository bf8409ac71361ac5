// SPDX-License-Identifier: MPL-2.0
//! Scanning step marker: spinning arc, check mark or hollow circle.

use crate::scan::StepStatus;
use crate::ui::design_tokens::{opacity, sizing};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;
use std::time::Duration;

/// One full spinner revolution.
const REVOLUTION: Duration = Duration::from_millis(900);

/// Spinner rotation angle after `elapsed`, in radians.
#[must_use]
pub fn rotation_at(elapsed: Duration) -> f32 {
    let turns = elapsed.as_secs_f32() / REVOLUTION.as_secs_f32();
    turns.fract() * 2.0 * PI
}

/// Marker for one scanning step.
pub struct StepIndicator {
    cache: Cache,
    status: StepStatus,
    rotation: f32,
    color: Color,
    size: f32,
}

impl StepIndicator {
    #[must_use]
    pub fn new(status: StepStatus, color: Color) -> Self {
        Self {
            cache: Cache::default(),
            status,
            rotation: 0.0,
            color,
            size: sizing::STEP_INDICATOR,
        }
    }

    /// Sets the spinner angle. Only visible while loading.
    #[must_use]
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self.cache.clear();
        self
    }

    /// Creates a Canvas widget from this indicator.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    fn draw_spinner(&self, frame: &mut Frame, center: Point, radius: f32) {
        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default().with_width(2.0).with_color(Color {
                a: 0.25,
                ..self.color
            }),
        );

        // Quarter-turn offset so the arc starts at the top
        let start_angle = self.rotation - PI / 2.0;
        let end_angle = start_angle + PI;

        let mut arc_path = canvas::path::Builder::new();
        arc_path.move_to(Point::new(
            center.x + radius * start_angle.cos(),
            center.y + radius * start_angle.sin(),
        ));

        let segments = 24;
        #[allow(clippy::cast_precision_loss)]
        // segments=24, i∈[1,24] - well within f32 precision
        for i in 1..=segments {
            let t = i as f32 / segments as f32;
            let angle = start_angle + (end_angle - start_angle) * t;
            arc_path.line_to(Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            ));
        }

        frame.stroke(
            &arc_path.build(),
            Stroke::default()
                .with_width(2.0)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );
    }

    fn draw_check(&self, frame: &mut Frame, center: Point, radius: f32) {
        let check = Path::new(|builder| {
            builder.move_to(Point::new(center.x - radius * 0.7, center.y));
            builder.line_to(Point::new(center.x - radius * 0.2, center.y + radius * 0.5));
            builder.line_to(Point::new(center.x + radius * 0.75, center.y - radius * 0.55));
        });
        frame.stroke(
            &check,
            Stroke::default()
                .with_width(2.5)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round)
                .with_line_join(canvas::LineJoin::Round),
        );
    }

    fn draw_pending(&self, frame: &mut Frame, center: Point, radius: f32) {
        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default().with_width(2.0).with_color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..self.color
            }),
        );
    }
}

impl<Message> canvas::Program<Message> for StepIndicator {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 2.0;

                match self.status {
                    StepStatus::Loading => self.draw_spinner(frame, center, radius),
                    StepStatus::Completed => self.draw_check(frame, center, radius),
                    StepStatus::Pending => self.draw_pending(frame, center, radius),
                }
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rotation_wraps_every_revolution() {
        assert_abs_diff_eq!(rotation_at(Duration::ZERO), 0.0);
        assert_abs_diff_eq!(
            rotation_at(REVOLUTION / 2),
            PI,
            epsilon = 1e-4
        );
        assert_abs_diff_eq!(
            rotation_at(REVOLUTION * 3 + REVOLUTION / 4),
            PI / 2.0,
            epsilon = 1e-3
        );
    }
}
