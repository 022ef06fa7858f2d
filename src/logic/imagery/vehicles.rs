//! Vehicle Detection
//!
//! Vehicles at this zoom render as small bright blobs. Threshold the
//! grayscale plane, take external contours, keep blobs in the vehicle size
//! band with a plausible bounding-box aspect ratio.

use ndarray::Array2;

use super::config::ExtractionConfig;
use super::contours;
use super::types::{Vehicle, VehicleReport};

pub fn detect(gray: &Array2<f32>, config: &ExtractionConfig) -> VehicleReport {
    let (h, w) = gray.dim();
    let mut bright = Array2::from_elem((h, w), false);
    for ((y, x), &v) in gray.indexed_iter() {
        if v > config.vehicle_brightness_cutoff {
            bright[[y, x]] = true;
        }
    }

    let mut vehicles = Vec::new();
    for contour in contours::find_external_contours(&bright) {
        // Solid blobs: pixel-enclosing area from the traced boundary
        if contour.area <= config.vehicle_area_min || contour.area >= config.vehicle_area_max {
            continue;
        }
        let aspect = contour.aspect_ratio();
        if aspect <= config.vehicle_aspect_min || aspect >= config.vehicle_aspect_max {
            continue;
        }
        let (x, y, _, _) = contour.bbox;
        vehicles.push(Vehicle {
            area: contour.area,
            aspect_ratio: aspect,
            position: (x as u32, y as u32),
        });
    }

    VehicleReport {
        vehicle_count: vehicles.len(),
        vehicles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bright_blob(gray: &mut Array2<f32>, x0: usize, y0: usize, w: usize, h: usize) {
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                gray[[y, x]] = 240.0;
            }
        }
    }

    #[test]
    fn test_vehicle_sized_blob_detected() {
        let mut gray = Array2::from_elem((64, 64), 80.0);
        // 16x10 blob: enclosed area ~135 px², aspect 1.6
        bright_blob(&mut gray, 10, 10, 16, 10);
        let report = detect(&gray, &ExtractionConfig::default());
        assert_eq!(report.vehicle_count, 1);
        let v = &report.vehicles[0];
        assert!(v.area > 50.0 && v.area < 500.0);
        assert_eq!(v.position, (10, 10));
    }

    #[test]
    fn test_large_blob_rejected() {
        let mut gray = Array2::from_elem((96, 96), 80.0);
        bright_blob(&mut gray, 10, 10, 40, 30);
        let report = detect(&gray, &ExtractionConfig::default());
        assert_eq!(report.vehicle_count, 0);
    }

    #[test]
    fn test_elongated_blob_rejected() {
        let mut gray = Array2::from_elem((96, 96), 80.0);
        // Aspect ratio 40/4 = 10, outside (0.5, 3.0)
        bright_blob(&mut gray, 10, 10, 40, 4);
        let report = detect(&gray, &ExtractionConfig::default());
        assert_eq!(report.vehicle_count, 0);
    }

    #[test]
    fn test_dark_image_has_no_vehicles() {
        let gray = Array2::from_elem((64, 64), 60.0);
        let report = detect(&gray, &ExtractionConfig::default());
        assert_eq!(report.vehicle_count, 0);
    }
}
