//! Building Detection
//!
//! Edge map → external contours → keep contours whose enclosed area clears
//! the minimum and whose polygon approximation is rectangular-like
//! (>= 4 vertices at 2% perimeter tolerance).

use ndarray::Array2;

use super::config::ExtractionConfig;
use super::contours;
use super::edges;
use super::types::{Building, BuildingReport};

pub fn detect(gray: &Array2<f32>, config: &ExtractionConfig) -> BuildingReport {
    let edge_mask = edges::edge_map(gray, config.edge_low, config.edge_high);
    detect_in_mask(&edge_mask, config)
}

pub fn detect_in_mask(edge_mask: &Array2<bool>, config: &ExtractionConfig) -> BuildingReport {
    let mut buildings = Vec::new();

    for contour in contours::find_external_contours(edge_mask) {
        if contour.area < config.min_building_area {
            continue;
        }

        let epsilon = config.polygon_tolerance * contour.perimeter;
        let polygon = contours::approx_polygon(&contour.boundary, epsilon);
        if polygon.len() < config.min_building_vertices {
            continue;
        }

        buildings.push(Building {
            area: contour.area,
            vertices: polygon.len(),
            perimeter: contour.perimeter,
        });
    }

    let building_count = buildings.len();
    let total_building_area = buildings.iter().map(|b| b.area).sum();
    let largest_building_area = buildings
        .iter()
        .map(|b| b.area)
        .fold(0.0f32, f32::max);

    // Report only the largest few individually
    buildings.sort_by(|a, b| b.area.partial_cmp(&a.area).unwrap_or(std::cmp::Ordering::Equal));
    buildings.truncate(config.max_building_reports);

    BuildingReport {
        building_count,
        total_building_area,
        largest_building_area,
        buildings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Hollow rectangle outline, like an edge map of one building
    fn outline_mask(w: usize, h: usize, x0: usize, y0: usize, rw: usize, rh: usize) -> Array2<bool> {
        let mut mask = Array2::from_elem((h, w), false);
        for x in x0..x0 + rw {
            mask[[y0, x]] = true;
            mask[[y0 + rh - 1, x]] = true;
        }
        for y in y0..y0 + rh {
            mask[[y, x0]] = true;
            mask[[y, x0 + rw - 1]] = true;
        }
        mask
    }

    #[test]
    fn test_large_rectangle_is_a_building() {
        let mask = outline_mask(128, 128, 10, 10, 60, 40);
        let report = detect_in_mask(&mask, &ExtractionConfig::default());
        assert_eq!(report.building_count, 1);
        // Enclosed area of a 60x40 outline
        assert!(report.largest_building_area > 1000.0);
        assert!(report.buildings[0].vertices >= 4);
    }

    #[test]
    fn test_small_contour_rejected() {
        let mask = outline_mask(64, 64, 5, 5, 12, 10);
        let report = detect_in_mask(&mask, &ExtractionConfig::default());
        assert_eq!(report.building_count, 0);
        assert_eq!(report.total_building_area, 0.0);
    }

    #[test]
    fn test_two_buildings_summed() {
        let mut mask = outline_mask(256, 256, 10, 10, 50, 40);
        let second = outline_mask(256, 256, 120, 120, 60, 50);
        for ((y, x), &v) in second.indexed_iter() {
            if v {
                mask[[y, x]] = true;
            }
        }
        let report = detect_in_mask(&mask, &ExtractionConfig::default());
        assert_eq!(report.building_count, 2);
        assert!(report.total_building_area > report.largest_building_area);
    }

    #[test]
    fn test_report_cap() {
        let config = ExtractionConfig {
            max_building_reports: 1,
            ..Default::default()
        };
        let mut mask = outline_mask(256, 256, 10, 10, 50, 40);
        let second = outline_mask(256, 256, 120, 120, 60, 50);
        for ((y, x), &v) in second.indexed_iter() {
            if v {
                mask[[y, x]] = true;
            }
        }
        let report = detect_in_mask(&mask, &config);
        assert_eq!(report.building_count, 2);
        assert_eq!(report.buildings.len(), 1);
        // Kept one is the largest
        assert_eq!(report.buildings[0].area, report.largest_building_area);
    }
}
