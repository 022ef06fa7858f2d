//! Infrastructure Analysis
//!
//! Roads, lot boundaries and similar linear features. The raster is denoised
//! with a 3×3 opening, edge-mapped, then run through a deterministic Hough
//! line detector (accumulator peaks, then edge-pixel runs along each peak
//! line with gap bridging). Edge-pixel density doubles as a built-up proxy.

use ndarray::Array2;

use super::config::ExtractionConfig;
use super::edges;
use super::types::InfrastructureReport;

const THETA_BINS: usize = 180;

pub fn analyze(gray: &Array2<f32>, config: &ExtractionConfig) -> InfrastructureReport {
    let opened = edges::morphological_open(gray);
    let edge_mask = edges::edge_map(&opened, config.edge_low, config.edge_high);

    let total = edge_mask.len();
    let edge_count = edge_mask.iter().filter(|&&e| e).count();
    let density = if total == 0 {
        0.0
    } else {
        edge_count as f32 / total as f32
    };

    let line_count = detect_lines(&edge_mask, config);

    InfrastructureReport {
        line_count,
        density,
    }
}

/// Hough line detection.
///
/// Unlike the randomized probabilistic variant, pixels vote in scan order
/// and peaks are read out in accumulator order, so identical inputs always
/// yield identical counts.
pub fn detect_lines(edge_mask: &Array2<bool>, config: &ExtractionConfig) -> usize {
    let (h, w) = edge_mask.dim();
    if h == 0 || w == 0 {
        return 0;
    }

    let rho_max = ((h * h + w * w) as f32).sqrt().ceil() as i64;
    let rho_bins = (2 * rho_max + 1) as usize;

    let (sin_t, cos_t): (Vec<f32>, Vec<f32>) = (0..THETA_BINS)
        .map(|t| {
            let theta = t as f32 * std::f32::consts::PI / THETA_BINS as f32;
            theta.sin_cos()
        })
        .unzip();

    // Vote
    let mut acc: Array2<u32> = Array2::zeros((THETA_BINS, rho_bins));
    for ((y, x), &is_edge) in edge_mask.indexed_iter() {
        if !is_edge {
            continue;
        }
        for t in 0..THETA_BINS {
            let rho = x as f32 * cos_t[t] + y as f32 * sin_t[t];
            let r = (rho.round() as i64 + rho_max) as usize;
            acc[[t, r]] += 1;
        }
    }

    // Read out local-maximum peaks, then verify segment runs on the raster
    let mut segments = 0usize;
    for t in 0..THETA_BINS {
        for r in 0..rho_bins {
            let votes = acc[[t, r]];
            if votes < config.line_vote_threshold || !is_local_max(&acc, t, r) {
                continue;
            }
            let rho = r as i64 - rho_max;
            segments += count_runs(edge_mask, cos_t[t], sin_t[t], rho as f32, config);
        }
    }

    segments
}

fn is_local_max(acc: &Array2<u32>, t: usize, r: usize) -> bool {
    let (tb, rb) = acc.dim();
    let v = acc[[t, r]];
    for dt in -1i64..=1 {
        for dr in -1i64..=1 {
            if dt == 0 && dr == 0 {
                continue;
            }
            let (nt, nr) = (t as i64 + dt, r as i64 + dr);
            if nt < 0 || nr < 0 || nt >= tb as i64 || nr >= rb as i64 {
                continue;
            }
            let nv = acc[[nt as usize, nr as usize]];
            // Strict on one side so plateau peaks count once
            if nv > v || (nv == v && (nt, nr) < (t as i64, r as i64)) {
                return false;
            }
        }
    }
    true
}

/// Walk the line x·cosθ + y·sinθ = ρ across the frame and count edge-pixel
/// runs of at least `line_min_length`, bridging gaps up to `line_max_gap`.
fn count_runs(
    edge_mask: &Array2<bool>,
    cos_t: f32,
    sin_t: f32,
    rho: f32,
    config: &ExtractionConfig,
) -> usize {
    let (h, w) = edge_mask.dim();
    let near_edge = |x: i64, y: i64| -> bool {
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                let (nx, ny) = (x + dx, y + dy);
                if nx >= 0 && ny >= 0 && nx < w as i64 && ny < h as i64
                    && edge_mask[[ny as usize, nx as usize]]
                {
                    return true;
                }
            }
        }
        false
    };

    let mut runs = 0usize;
    let mut run_len = 0u32;
    let mut gap = 0u32;

    let steps: Box<dyn Iterator<Item = (i64, i64)>> = if sin_t.abs() >= cos_t.abs() {
        // Closer to horizontal: iterate x, solve y
        Box::new((0..w as i64).map(move |x| {
            let y = ((rho - x as f32 * cos_t) / sin_t).round() as i64;
            (x, y)
        }))
    } else {
        Box::new((0..h as i64).map(move |y| {
            let x = ((rho - y as f32 * sin_t) / cos_t).round() as i64;
            (x, y)
        }))
    };

    for (x, y) in steps {
        if y < 0 || x < 0 || y >= h as i64 || x >= w as i64 {
            continue;
        }
        if near_edge(x, y) {
            // Bridge the gap only inside an active run
            run_len += if run_len > 0 { 1 + gap } else { 1 };
            gap = 0;
        } else {
            gap += 1;
            if gap > config.line_max_gap {
                if run_len >= config.line_min_length {
                    runs += 1;
                }
                run_len = 0;
                gap = 0;
            }
        }
    }
    if run_len >= config.line_min_length {
        runs += 1;
    }

    runs
}
