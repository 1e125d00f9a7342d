use crate::grid::{GridSize, Position};

/// A body segment at a continuous position, in cell units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualSegment {
    pub x: f32,
    pub y: f32,
}

/// Computes draw positions between the previous and current tick states.
///
/// Pure: safe to call every rendered frame with a recomputed `progress`.
/// `progress` is clamped to `[0, 1]`; 0 reproduces `previous`, 1 reproduces
/// `current`. When the two bodies differ in length (the snake just grew),
/// the shorter one is padded by repeating its tail segment.
///
/// Horizontal motion larger than half the field width is treated as a wrap
/// across the edge: the segment travels the shorter wrapped path and the
/// result is re-normalized into the visible range.
#[must_use]
pub fn interpolate(
    current: &[Position],
    previous: &[Position],
    progress: f32,
    grid: GridSize,
) -> Vec<VisualSegment> {
    let t = progress.clamp(0.0, 1.0);
    let width = f32::from(grid.width);
    let half_width = width / 2.0;

    let len = current.len().max(previous.len());
    let mut segments = Vec::with_capacity(len);

    for index in 0..len {
        let Some(cur) = pick_padded(current, index) else {
            break;
        };
        let Some(prev) = pick_padded(previous, index) else {
            // No previous state at all: show the current body as-is.
            segments.push(VisualSegment {
                x: cur.x as f32,
                y: cur.y as f32,
            });
            continue;
        };

        let cur_x = cur.x as f32;
        let mut prev_x = prev.x as f32;
        let displacement = cur_x - prev_x;
        if displacement > half_width {
            prev_x += width;
        } else if displacement < -half_width {
            prev_x -= width;
        }

        segments.push(VisualSegment {
            x: lerp(prev_x, cur_x, t).rem_euclid(width),
            y: lerp(prev.y as f32, cur.y as f32, t),
        });
    }

    segments
}

fn pick_padded(body: &[Position], index: usize) -> Option<Position> {
    body.get(index).or_else(|| body.last()).copied()
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use crate::grid::{GridSize, Position};

    use super::{interpolate, VisualSegment};

    const GRID: GridSize = GridSize {
        width: 32,
        height: 18,
        info_bar_rows: 2,
    };

    fn body(cells: &[(i32, i32)]) -> Vec<Position> {
        cells.iter().map(|&(x, y)| Position { x, y }).collect()
    }

    #[test]
    fn progress_zero_reproduces_previous_positions() {
        let previous = body(&[(3, 2), (2, 2), (1, 2)]);
        let current = body(&[(4, 2), (3, 2), (2, 2)]);

        let segments = interpolate(&current, &previous, 0.0, GRID);

        assert_eq!(
            segments,
            vec![
                VisualSegment { x: 3.0, y: 2.0 },
                VisualSegment { x: 2.0, y: 2.0 },
                VisualSegment { x: 1.0, y: 2.0 },
            ]
        );
    }

    #[test]
    fn progress_one_reproduces_current_positions() {
        let previous = body(&[(3, 2), (2, 2), (1, 2)]);
        let current = body(&[(4, 2), (3, 2), (2, 2)]);

        let segments = interpolate(&current, &previous, 1.0, GRID);

        assert_eq!(
            segments,
            vec![
                VisualSegment { x: 4.0, y: 2.0 },
                VisualSegment { x: 3.0, y: 2.0 },
                VisualSegment { x: 2.0, y: 2.0 },
            ]
        );
    }

    #[test]
    fn midpoint_is_halfway_between_states() {
        let previous = body(&[(3, 2)]);
        let current = body(&[(4, 2)]);

        let segments = interpolate(&current, &previous, 0.5, GRID);

        assert_eq!(segments, vec![VisualSegment { x: 3.5, y: 2.0 }]);
    }

    #[test]
    fn large_horizontal_jumps_wrap_along_the_shorter_path() {
        // From the left edge to the right edge: the segment should slide just
        // past the left boundary, not sweep across the entire field.
        let previous = body(&[(0, 5)]);
        let current = body(&[(31, 5)]);

        let at_zero = interpolate(&current, &previous, 0.0, GRID);
        let midway = interpolate(&current, &previous, 0.5, GRID);
        let at_one = interpolate(&current, &previous, 1.0, GRID);

        assert_eq!(at_zero[0].x, 0.0);
        assert_eq!(at_one[0].x, 31.0);
        assert_eq!(midway[0].x, 31.5);
    }

    #[test]
    fn wrap_correction_applies_in_both_directions() {
        let previous = body(&[(31, 5)]);
        let current = body(&[(0, 5)]);

        let midway = interpolate(&current, &previous, 0.5, GRID);

        assert_eq!(midway[0].x, 31.5);
    }

    #[test]
    fn growth_pads_the_shorter_previous_body() {
        let previous = body(&[(3, 2), (2, 2), (1, 2)]);
        let current = body(&[(4, 2), (3, 2), (2, 2), (1, 2)]);

        let segments = interpolate(&current, &previous, 0.5, GRID);

        assert_eq!(segments.len(), 4);
        // The padded segment interpolates from the duplicated previous tail.
        assert_eq!(segments[3], VisualSegment { x: 1.0, y: 2.0 });
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let previous = body(&[(3, 2)]);
        let current = body(&[(4, 2)]);

        let below = interpolate(&current, &previous, -1.0, GRID);
        let above = interpolate(&current, &previous, 2.0, GRID);

        assert_eq!(below[0].x, 3.0);
        assert_eq!(above[0].x, 4.0);
    }

    #[test]
    fn empty_previous_body_falls_back_to_current() {
        let current = body(&[(4, 2), (3, 2)]);

        let segments = interpolate(&current, &[], 0.5, GRID);

        assert_eq!(
            segments,
            vec![
                VisualSegment { x: 4.0, y: 2.0 },
                VisualSegment { x: 3.0, y: 2.0 },
            ]
        );
    }
}
