//! Contours
//!
//! External contour extraction on a binary mask: connected components
//! (8-connectivity, scan order for determinism), Moore boundary tracing,
//! shoelace area, and Douglas-Peucker polygon approximation.

use ndarray::Array2;

/// One external contour of a connected component
#[derive(Debug, Clone)]
pub struct Contour {
    /// Boundary pixels (x, y) in trace order
    pub boundary: Vec<(usize, usize)>,
    /// Enclosed polygon area (px²), shoelace over the boundary
    pub area: f32,
    /// Boundary length (px)
    pub perimeter: f32,
    /// Bounding box (x, y, width, height)
    pub bbox: (usize, usize, usize, usize),
}

impl Contour {
    pub fn aspect_ratio(&self) -> f32 {
        let (_, _, w, h) = self.bbox;
        if h == 0 {
            0.0
        } else {
            w as f32 / h as f32
        }
    }
}

// Clockwise 8-neighborhood starting west, as (dx, dy)
const NEIGHBORS: [(i64, i64); 8] = [
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
];

/// Find external contours of all connected components in the mask.
///
/// Components are visited in row-major scan order, so the result order is
/// deterministic for identical inputs.
pub fn find_external_contours(mask: &Array2<bool>) -> Vec<Contour> {
    let (h, w) = mask.dim();
    let mut labels: Array2<i32> = Array2::from_elem((h, w), -1);
    let mut contours = Vec::new();
    let mut next_label = 0;

    for y in 0..h {
        for x in 0..w {
            if !mask[[y, x]] || labels[[y, x]] >= 0 {
                continue;
            }

            // Flood the component so later scan hits skip it
            let (pixels, bbox) = flood_component(mask, &mut labels, next_label, x, y);
            next_label += 1;

            // (x, y) is the uppermost-leftmost pixel of the component
            let boundary = trace_boundary(&labels, labels[[y, x]], (x, y), pixels);
            let perimeter = boundary_length(&boundary);
            let area = shoelace_area(&boundary);

            contours.push(Contour {
                boundary,
                area,
                perimeter,
                bbox,
            });
        }
    }

    contours
}

fn flood_component(
    mask: &Array2<bool>,
    labels: &mut Array2<i32>,
    label: i32,
    x0: usize,
    y0: usize,
) -> (usize, (usize, usize, usize, usize)) {
    let (h, w) = mask.dim();
    let mut stack = vec![(x0, y0)];
    labels[[y0, x0]] = label;
    let mut count = 0usize;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (x0, y0, x0, y0);

    while let Some((x, y)) = stack.pop() {
        count += 1;
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);

        for (dx, dy) in NEIGHBORS {
            let (nx, ny) = (x as i64 + dx, y as i64 + dy);
            if nx < 0 || ny < 0 || nx >= w as i64 || ny >= h as i64 {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            if mask[[ny, nx]] && labels[[ny, nx]] < 0 {
                labels[[ny, nx]] = label;
                stack.push((nx, ny));
            }
        }
    }

    (count, (min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
}

/// Moore-neighbor boundary trace starting at the uppermost-leftmost pixel
fn trace_boundary(
    labels: &Array2<i32>,
    label: i32,
    start: (usize, usize),
    pixel_count: usize,
) -> Vec<(usize, usize)> {
    let (h, w) = labels.dim();
    let in_component = |x: i64, y: i64| -> bool {
        x >= 0 && y >= 0 && x < w as i64 && y < h as i64 && labels[[y as usize, x as usize]] == label
    };

    let mut boundary = vec![start];
    if pixel_count == 1 {
        return boundary;
    }

    let mut current = start;
    // Backtrack starts west of the start pixel, guaranteed outside because
    // the start is the uppermost-leftmost pixel of its component.
    let mut backtrack = (start.0 as i64 - 1, start.1 as i64);
    let max_steps = 4 * pixel_count + 16;

    for _ in 0..max_steps {
        let bdir = dir_index(
            backtrack.0 - current.0 as i64,
            backtrack.1 - current.1 as i64,
        );

        let mut moved = false;
        for k in 1..=8 {
            let dir = (bdir + k) % 8;
            let (dx, dy) = NEIGHBORS[dir];
            let (nx, ny) = (current.0 as i64 + dx, current.1 as i64 + dy);
            if in_component(nx, ny) {
                // New backtrack is the ring cell checked just before this one
                let pdir = (bdir + k - 1) % 8;
                backtrack = (
                    current.0 as i64 + NEIGHBORS[pdir].0,
                    current.1 as i64 + NEIGHBORS[pdir].1,
                );
                current = (nx as usize, ny as usize);
                moved = true;
                break;
            }
        }
        if !moved || current == start {
            break;
        }
        boundary.push(current);
    }

    boundary
}

fn dir_index(dx: i64, dy: i64) -> usize {
    NEIGHBORS
        .iter()
        .position(|&(nx, ny)| nx == dx && ny == dy)
        .unwrap_or(0)
}

fn boundary_length(boundary: &[(usize, usize)]) -> f32 {
    if boundary.len() < 2 {
        return boundary.len() as f32;
    }
    let mut length = 0.0;
    for i in 0..boundary.len() {
        let (x0, y0) = boundary[i];
        let (x1, y1) = boundary[(i + 1) % boundary.len()];
        let dx = x1 as f32 - x0 as f32;
        let dy = y1 as f32 - y0 as f32;
        length += (dx * dx + dy * dy).sqrt();
    }
    length
}

fn shoelace_area(boundary: &[(usize, usize)]) -> f32 {
    // Fewer than three vertices encloses nothing
    if boundary.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0f64;
    for i in 0..boundary.len() {
        let (x0, y0) = boundary[i];
        let (x1, y1) = boundary[(i + 1) % boundary.len()];
        sum += x0 as f64 * y1 as f64 - x1 as f64 * y0 as f64;
    }
    (sum.abs() / 2.0) as f32
}

// ============================================================================
// POLYGON APPROXIMATION
// ============================================================================

/// Douglas-Peucker approximation of a closed boundary.
///
/// `epsilon` is the maximum deviation in pixels. Returns the retained
/// vertices in boundary order.
pub fn approx_polygon(boundary: &[(usize, usize)], epsilon: f32) -> Vec<(usize, usize)> {
    if boundary.len() < 3 {
        return boundary.to_vec();
    }

    // Split the ring at the point farthest from the start, approximate both
    // halves, then stitch.
    let start = boundary[0];
    let mut far_idx = boundary.len() / 2;
    let mut far_dist = 0.0;
    for (i, &p) in boundary.iter().enumerate() {
        let dx = p.0 as f32 - start.0 as f32;
        let dy = p.1 as f32 - start.1 as f32;
        let d = dx * dx + dy * dy;
        if d > far_dist {
            far_dist = d;
            far_idx = i;
        }
    }

    let first_half = simplify(&boundary[..=far_idx], epsilon);
    let mut ring: Vec<(usize, usize)> = boundary[far_idx..].to_vec();
    ring.push(start);
    let second_half = simplify(&ring, epsilon);

    let mut polygon = first_half;
    polygon.extend(second_half.into_iter().skip(1));
    // Drop the duplicated closing vertex
    if polygon.len() > 1 && polygon.first() == polygon.last() {
        polygon.pop();
    }
    polygon
}

fn simplify(points: &[(usize, usize)], epsilon: f32) -> Vec<(usize, usize)> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let (mut max_dist, mut index) = (0.0f32, 0usize);
    let first = points[0];
    let last = points[points.len() - 1];
    for (i, &p) in points.iter().enumerate().skip(1).take(points.len() - 2) {
        let d = perpendicular_distance(p, first, last);
        if d > max_dist {
            max_dist = d;
            index = i;
        }
    }

    if max_dist > epsilon {
        let mut left = simplify(&points[..=index], epsilon);
        let right = simplify(&points[index..], epsilon);
        left.pop();
        left.extend(right);
        left
    } else {
        vec![first, last]
    }
}

fn perpendicular_distance(p: (usize, usize), a: (usize, usize), b: (usize, usize)) -> f32 {
    let (px, py) = (p.0 as f32, p.1 as f32);
    let (ax, ay) = (a.0 as f32, a.1 as f32);
    let (bx, by) = (b.0 as f32, b.1 as f32);

    let (dx, dy) = (bx - ax, by - ay);
    let norm = (dx * dx + dy * dy).sqrt();
    if norm == 0.0 {
        let (ex, ey) = (px - ax, py - ay);
        return (ex * ex + ey * ey).sqrt();
    }
    ((dy * px - dx * py + bx * ay - by * ax).abs()) / norm
}

// ============================================================================
// TESTS
// ============================================================================
