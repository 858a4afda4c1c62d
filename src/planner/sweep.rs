use strum_macros::Display;

use super::error::PlanError;
use super::types::{GeoPoint, Rectangle};
use crate::footprint::GridCell;

/// Upper bound on the number of cells a single sweep may visit.
pub const MAX_WAYPOINTS: usize = 1_000_000;

/// Direction a row is flown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Heading {
    /// Left to right, from `left_bottom.x` towards `right_top.x`.
    Forward,
    /// Right to left.
    Backward,
}

impl Heading {
    pub fn for_row(row: usize) -> Self {
        if row % 2 == 0 {
            Heading::Forward
        } else {
            Heading::Backward
        }
    }
}

/// Serpentine walk over the cell centres of a rectangle.
///
/// Rows go bottom to top. Even rows (the 1st, 3rd, ...) run forward and are
/// anchored on the left edge; odd rows run backward and are anchored on the
/// right edge, so the last centre of a row sits next to the first centre of
/// the following one. When the span is not a whole number of cells, the last
/// cell of a row overhangs the far edge.
///
/// The iterator is cheap to clone, and a clone taken before iteration replays
/// the same sequence.
#[derive(Debug, Clone)]
pub struct Sweep {
    area: Rectangle,
    cell: GridCell,
    columns: usize,
    rows: usize,
    next: usize,
}

impl Sweep {
    pub fn new(area: &Rectangle, cell: &GridCell) -> Result<Self, PlanError> {
        if !(cell.length_deg.is_finite() && cell.length_deg > 0.0)
            || !(cell.width_deg.is_finite() && cell.width_deg > 0.0)
        {
            return Err(PlanError::DegenerateGridCell {
                length: cell.length_deg,
                width: cell.width_deg,
            });
        }
        if !area.left_bottom.is_finite() || !area.right_top.is_finite() {
            return Err(PlanError::NonFiniteBounds);
        }

        let columns = cell_count(area.span_x(), cell.length_deg);
        let rows = cell_count(area.span_y(), cell.width_deg);
        if columns == 0 || rows == 0 {
            log::debug!("degenerate area {:?}, nothing to sweep", area);
        }

        let total = columns as f64 * rows as f64;
        if total > MAX_WAYPOINTS as f64 {
            return Err(PlanError::TooManyWaypoints {
                count: total,
                limit: MAX_WAYPOINTS,
            });
        }

        Ok(Self {
            area: *area,
            cell: *cell,
            columns,
            rows,
            next: 0,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    fn len_total(&self) -> usize {
        self.columns * self.rows
    }

    fn point_at(&self, index: usize) -> GeoPoint {
        let row = index / self.columns;
        let step = index % self.columns;
        let length = self.cell.length_deg;
        let width = self.cell.width_deg;

        let row_y = self.area.left_bottom.y + row as f64 * width;
        let x = match Heading::for_row(row) {
            Heading::Forward => {
                let axis_x = self.area.left_bottom.x + step as f64 * length;
                (2.0 * axis_x + length) / 2.0
            }
            Heading::Backward => {
                let axis_x = self.area.right_top.x - step as f64 * length;
                (2.0 * axis_x - length) / 2.0
            }
        };

        GeoPoint::new(x, (2.0 * row_y + width) / 2.0)
    }
}

/// Number of `step`-sized cells needed to cover `span`; zero for an empty span.
fn cell_count(span: f64, step: f64) -> usize {
    if span > 0.0 {
        let count = (span / step).ceil();
        if count >= usize::MAX as f64 {
            usize::MAX
        } else {
            count as usize
        }
    } else {
        0
    }
}

impl Iterator for Sweep {
    type Item = GeoPoint;

    fn next(&mut self) -> Option<GeoPoint> {
        if self.next >= self.len_total() {
            return None;
        }
        let point = self.point_at(self.next);
        if self.next % self.columns == 0 {
            let row = self.next / self.columns;
            log::trace!("row {} heading {}", row, Heading::for_row(row));
        }
        self.next += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len_total() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Sweep {}

/// Plans the full serpentine path over `area` using `cell` as step size.
///
/// A rectangle that is empty on either axis yields an empty path.
pub fn plan_path(area: &Rectangle, cell: &GridCell) -> Result<Vec<GeoPoint>, PlanError> {
    let sweep = Sweep::new(area, cell)?;
    log::debug!(
        "sweeping {} columns x {} rows over {:?}",
        sweep.columns(),
        sweep.rows(),
        area
    );
    Ok(sweep.collect())
}
