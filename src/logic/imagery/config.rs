//! Extraction Configuration
//!
//! Every CV calibration constant lives here, not inline in the detectors.
//! The defaults are tuned for ~zoom-18 provider tiles where the frame covers
//! a few hundred meters; retune per provider/zoom without code changes.

use serde::{Deserialize, Serialize};

/// Calibration constants for the raster feature extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Lower gradient-magnitude threshold for the edge map
    pub edge_low: f32,
    /// Upper gradient-magnitude threshold for the edge map
    pub edge_high: f32,

    /// Minimum contour area (px²) to count as a building
    pub min_building_area: f32,
    /// Polygon approximation tolerance as a fraction of contour perimeter
    pub polygon_tolerance: f32,
    /// Minimum polygon vertices for a rectangular-like building outline
    pub min_building_vertices: usize,
    /// How many of the largest buildings to report individually
    pub max_building_reports: usize,

    /// Luminance cutoff (0-255) for the bright-object vehicle mask
    pub vehicle_brightness_cutoff: f32,
    /// Vehicle blob area bounds (px²), exclusive
    pub vehicle_area_min: f32,
    pub vehicle_area_max: f32,
    /// Vehicle bounding-box aspect ratio bounds, exclusive
    pub vehicle_aspect_min: f32,
    pub vehicle_aspect_max: f32,

    /// Minimum detected line segment length (px)
    pub line_min_length: u32,
    /// Maximum gap (px) bridged within one line segment
    pub line_max_gap: u32,
    /// Hough accumulator votes required for a line candidate
    pub line_vote_threshold: u32,

    /// Vegetation hue band (degrees, 0-360)
    pub vegetation_hue: (f32, f32),
    /// Water hue band (degrees, 0-360)
    pub water_hue: (f32, f32),
    /// Minimum saturation (0-255) for hue masks
    pub mask_min_saturation: f32,
    /// Minimum value (0-255) for hue masks
    pub mask_min_value: f32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            edge_low: 50.0,
            edge_high: 150.0,
            min_building_area: 1000.0,
            polygon_tolerance: 0.02,
            min_building_vertices: 4,
            max_building_reports: 10,
            vehicle_brightness_cutoff: 200.0,
            vehicle_area_min: 50.0,
            vehicle_area_max: 500.0,
            vehicle_aspect_min: 0.5,
            vehicle_aspect_max: 3.0,
            line_min_length: 50,
            line_max_gap: 10,
            line_vote_threshold: 100,
            // Green and blue bands; pure green sits at 120°, pure blue at 240°
            vegetation_hue: (80.0, 160.0),
            water_hue: (200.0, 260.0),
            mask_min_saturation: 50.0,
            mask_min_value: 50.0,
        }
    }
}

impl ExtractionConfig {
    /// Preset for lower-zoom tiles where structures render smaller
    pub fn wide_area() -> Self {
        Self {
            min_building_area: 400.0,
            vehicle_area_min: 20.0,
            vehicle_area_max: 200.0,
            line_min_length: 30,
            ..Default::default()
        }
    }
}
