//! Edge Map + Morphology
//!
//! Sobel gradient magnitude with double-threshold hysteresis stands in for
//! the classic Canny pair: pixels at or above `edge_high` are edges, pixels
//! between `edge_low` and `edge_high` count only when 8-connected to a
//! strong edge. Morphological opening denoises before line detection.

use ndarray::Array2;

/// Sobel gradient magnitude of a grayscale plane
pub fn sobel_magnitude(gray: &Array2<f32>) -> Array2<f32> {
    let (h, w) = gray.dim();
    let mut mag = Array2::zeros((h, w));
    if h < 3 || w < 3 {
        return mag;
    }

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let gx = -gray[[y - 1, x - 1]] - 2.0 * gray[[y, x - 1]] - gray[[y + 1, x - 1]]
                + gray[[y - 1, x + 1]] + 2.0 * gray[[y, x + 1]] + gray[[y + 1, x + 1]];
            let gy = -gray[[y - 1, x - 1]] - 2.0 * gray[[y - 1, x]] - gray[[y - 1, x + 1]]
                + gray[[y + 1, x - 1]] + 2.0 * gray[[y + 1, x]] + gray[[y + 1, x + 1]];
            mag[[y, x]] = (gx * gx + gy * gy).sqrt();
        }
    }
    mag
}

/// Binary edge map via double-threshold hysteresis
pub fn edge_map(gray: &Array2<f32>, low: f32, high: f32) -> Array2<bool> {
    let mag = sobel_magnitude(gray);
    let (h, w) = mag.dim();
    let mut edges = Array2::from_elem((h, w), false);
    let mut queue = Vec::new();

    // Seed with strong edges
    for y in 0..h {
        for x in 0..w {
            if mag[[y, x]] >= high {
                edges[[y, x]] = true;
                queue.push((y, x));
            }
        }
    }

    // Grow through weak edges connected to a strong one
    while let Some((y, x)) = queue.pop() {
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                let (ny, nx) = (y as i64 + dy, x as i64 + dx);
                if ny < 0 || nx < 0 || ny >= h as i64 || nx >= w as i64 {
                    continue;
                }
                let (ny, nx) = (ny as usize, nx as usize);
                if !edges[[ny, nx]] && mag[[ny, nx]] >= low {
                    edges[[ny, nx]] = true;
                    queue.push((ny, nx));
                }
            }
        }
    }

    edges
}

/// 3×3 grayscale morphological opening (erosion then dilation)
pub fn morphological_open(gray: &Array2<f32>) -> Array2<f32> {
    dilate3(&erode3(gray))
}

fn erode3(src: &Array2<f32>) -> Array2<f32> {
    window_min_max(src, true)
}

fn dilate3(src: &Array2<f32>) -> Array2<f32> {
    window_min_max(src, false)
}

fn window_min_max(src: &Array2<f32>, take_min: bool) -> Array2<f32> {
    let (h, w) = src.dim();
    let mut out = src.clone();
    for y in 0..h {
        for x in 0..w {
            let mut acc = src[[y, x]];
            for dy in -1i64..=1 {
                for dx in -1i64..=1 {
                    let (ny, nx) = (y as i64 + dy, x as i64 + dx);
                    if ny < 0 || nx < 0 || ny >= h as i64 || nx >= w as i64 {
                        continue;
                    }
                    let v = src[[ny as usize, nx as usize]];
                    acc = if take_min { acc.min(v) } else { acc.max(v) };
                }
            }
            out[[y, x]] = acc;
        }
    }
    out
}
