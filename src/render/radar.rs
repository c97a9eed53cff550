//! Radar view rendering: a polar plot with range rings, bearing spokes, a
//! rotating sweep line, and one labelled dot per positioned network.
//!
//! Frames are written to an animated GIF, one frame per sweep tick, so the
//! output plays back at the same cadence the animation timer ran at.

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::domain::network::{NetworkRecord, Position};
use crate::error::RenderError;

/// Output bitmap size for the radar view.
pub const RADAR_SIZE: (u32, u32) = (800, 600);

/// Number of concentric range rings.
const RING_COUNT: i32 = 5;

/// Spoke spacing in degrees.
const SPOKE_STEP_DEG: usize = 30;

/// Two labels closer than this (in pixels, per axis) collide; the later one
/// is nudged down by the same amount.
const LABEL_COLLISION_PX: i32 = 20;

const BACKGROUND: RGBColor = RGBColor(50, 50, 50);

/// Renders radar frames into an animated GIF.
pub struct RadarRenderer<'a> {
    area: DrawingArea<BitMapBackend<'a>, Shift>,
    width: u32,
    height: u32,
    range_m: f64,
}

impl<'a> RadarRenderer<'a> {
    /// Create a renderer writing GIF frames to `path`.
    ///
    /// `frame_delay_ms` is the playback delay per frame; pass the sweep tick
    /// period so playback matches real time. `range_m` is the full-scale
    /// radius: networks at or beyond it plot on the outer ring.
    pub fn create(
        path: &'a str,
        resolution: (u32, u32),
        frame_delay_ms: u32,
        range_m: f64,
    ) -> Result<Self, RenderError> {
        let area = BitMapBackend::gif(path, resolution, frame_delay_ms)
            .map_err(backend_err)?
            .into_drawing_area();

        Ok(Self {
            area,
            width: resolution.0,
            height: resolution.1,
            range_m,
        })
    }

    /// Draw one frame: grid, sweep line at `sweep_angle`, and every
    /// positioned record. Records without a position are skipped.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn draw_frame(
        &self,
        records: &[NetworkRecord],
        sweep_angle: f64,
    ) -> Result<(), RenderError> {
        let center = (self.width as i32 / 2, self.height as i32 / 2);
        let radius = (center.0.min(center.1) - 10).max(1);

        self.area.fill(&BACKGROUND).map_err(backend_err)?;

        // Range rings.
        for ring in 1..=RING_COUNT {
            self.area
                .draw(&Circle::new(center, radius * ring / RING_COUNT, GREEN))
                .map_err(backend_err)?;
        }

        // Bearing spokes.
        for deg in (0..360).step_by(SPOKE_STEP_DEG) {
            let angle = f64::from(deg).to_radians();
            let end = (
                center.0 + (f64::from(radius) * angle.cos()) as i32,
                center.1 + (f64::from(radius) * angle.sin()) as i32,
            );
            self.area
                .draw(&PathElement::new(vec![center, end], GREEN))
                .map_err(backend_err)?;
        }

        // Observer at the origin.
        self.area
            .draw(&Circle::new(center, 5, RED.filled()))
            .map_err(backend_err)?;
        self.area
            .draw(&Text::new(
                "you",
                (center.0 + 10, center.1),
                ("sans-serif", 14).into_font().color(&RED),
            ))
            .map_err(backend_err)?;

        // Sweep line.
        let sweep_end = (
            center.0 + (f64::from(radius) * sweep_angle.cos()) as i32,
            center.1 + (f64::from(radius) * sweep_angle.sin()) as i32,
        );
        self.area
            .draw(&PathElement::new(
                vec![center, sweep_end],
                ShapeStyle::from(&GREEN).stroke_width(2),
            ))
            .map_err(backend_err)?;

        // Network dots and labels.
        let plotted: Vec<(i32, i32, &str)> = records
            .iter()
            .filter_map(|record| {
                record.position.map(|pos| {
                    let (x, y) = project(pos, self.range_m, radius, center);
                    (x, y, record.name.as_str())
                })
            })
            .collect();

        let label_ys = nudge_labels(&plotted);

        for ((x, y, name), label_y) in plotted.iter().zip(label_ys) {
            self.area
                .draw(&Circle::new((*x, *y), 3, RED.filled()))
                .map_err(backend_err)?;
            self.area
                .draw(&Text::new(
                    (*name).to_owned(),
                    (*x + 6, label_y),
                    ("sans-serif", 12).into_font().color(&RED),
                ))
                .map_err(backend_err)?;
        }

        self.area.present().map_err(backend_err)?;
        Ok(())
    }
}

/// Project a position onto the radar disc in pixel coordinates.
///
/// The radius is normalised against the full-scale range and clamped to the
/// outer ring so far-away networks stay on screen.
#[allow(clippy::cast_possible_truncation)]
fn project(pos: Position, range_m: f64, radius: i32, center: (i32, i32)) -> (i32, i32) {
    let r = (pos.radius() / range_m).min(1.0) * f64::from(radius);
    let theta = pos.bearing();
    (
        center.0 + (r * theta.cos()) as i32,
        center.1 + (r * theta.sin()) as i32,
    )
}

/// Compute a label y coordinate per plotted point, nudging a label downward
/// when an earlier point sits within the collision box.
fn nudge_labels(plotted: &[(i32, i32, &str)]) -> Vec<i32> {
    let mut label_ys = Vec::with_capacity(plotted.len());

    for (index, &(x, y, _)) in plotted.iter().enumerate() {
        let mut label_y = y;
        for &(other_x, other_y, _) in &plotted[..index] {
            if (x - other_x).abs() < LABEL_COLLISION_PX
                && (label_y - other_y).abs() < LABEL_COLLISION_PX
            {
                label_y += LABEL_COLLISION_PX;
            }
        }
        label_ys.push(label_y);
    }

    label_ys
}

fn backend_err<E: std::fmt::Display>(error: E) -> RenderError {
    RenderError::Backend(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_scales_against_full_range() {
        let center = (400, 300);
        // Half the full-scale range along +x lands halfway out.
        let (x, y) = project(Position::new(50.0, 0.0), 100.0, 290, center);
        assert_eq!((x, y), (400 + 145, 300));
    }

    #[test]
    fn projection_clamps_to_outer_ring() {
        let center = (400, 300);
        let (x, _) = project(Position::new(1000.0, 0.0), 100.0, 290, center);
        assert_eq!(x, 400 + 290);
    }

    #[test]
    fn origin_projects_to_center() {
        let center = (400, 300);
        assert_eq!(project(Position::new(0.0, 0.0), 100.0, 290, center), center);
    }

    #[test]
    fn close_labels_are_nudged_apart() {
        let plotted = vec![(100, 100, "A"), (105, 104, "B"), (500, 500, "C")];
        let label_ys = nudge_labels(&plotted);
        assert_eq!(label_ys[0], 100);
        assert_eq!(label_ys[1], 104 + LABEL_COLLISION_PX);
        assert_eq!(label_ys[2], 500);
    }

    #[test]
    fn far_apart_labels_are_untouched() {
        let plotted = vec![(100, 100, "A"), (200, 200, "B")];
        assert_eq!(nudge_labels(&plotted), vec![100, 200]);
    }
}
