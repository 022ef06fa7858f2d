//! Terrain Characteristics
//!
//! Hue-band masks for vegetation and water, mean brightness, and the
//! developed-area remainder.

use image::RgbImage;
use ndarray::Array2;

use super::config::ExtractionConfig;
use super::raster;
use super::types::TerrainReport;

pub fn analyze(img: &RgbImage, gray: &Array2<f32>, config: &ExtractionConfig) -> TerrainReport {
    let (hue, sat, val) = raster::hsv_planes(img);
    let total = hue.len() as f32;
    if total == 0.0 {
        return TerrainReport::default();
    }

    let mut vegetation = 0usize;
    let mut water = 0usize;

    for ((y, x), &h) in hue.indexed_iter() {
        if sat[[y, x]] < config.mask_min_saturation || val[[y, x]] < config.mask_min_value {
            continue;
        }
        if h >= config.vegetation_hue.0 && h <= config.vegetation_hue.1 {
            vegetation += 1;
        } else if h >= config.water_hue.0 && h <= config.water_hue.1 {
            water += 1;
        }
    }

    let vegetation_pct = vegetation as f32 / total * 100.0;
    let water_pct = water as f32 / total * 100.0;
    let brightness_mean = gray.sum() / total;
    let developed_pct = (100.0 - vegetation_pct - water_pct).max(0.0);

    TerrainReport {
        vegetation_pct,
        water_pct,
        brightness_mean,
        developed_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_green_field_is_vegetation() {
        // Grass green, hue ~128°
        let img = RgbImage::from_pixel(16, 16, Rgb([40, 200, 60]));
        let gray = raster::grayscale(&img);
        let report = analyze(&img, &gray, &ExtractionConfig::default());
        assert!(report.vegetation_pct > 90.0, "veg {}", report.vegetation_pct);
        assert_eq!(report.water_pct, 0.0);
        assert!(report.developed_pct < 10.0);
    }

    #[test]
    fn test_pure_green_is_not_water() {
        // Pure green sits at exactly 120°: vegetation, never water
        let img = RgbImage::from_pixel(16, 16, Rgb([0, 255, 0]));
        let gray = raster::grayscale(&img);
        let report = analyze(&img, &gray, &ExtractionConfig::default());
        assert!(report.vegetation_pct > 90.0);
        assert_eq!(report.water_pct, 0.0);
    }

    #[test]
    fn test_concrete_lot() {
        // Gray pixels fail the saturation floor: fully developed
        let img = RgbImage::from_pixel(16, 16, Rgb([140, 140, 140]));
        let gray = raster::grayscale(&img);
        let report = analyze(&img, &gray, &ExtractionConfig::default());
        assert_eq!(report.vegetation_pct, 0.0);
        assert_eq!(report.water_pct, 0.0);
        assert_eq!(report.developed_pct, 100.0);
        assert!((report.brightness_mean - 140.0).abs() < 1.0);
    }

    #[test]
    fn test_blue_lake_is_water() {
        // Lake blue, hue ~230°
        let img = RgbImage::from_pixel(16, 16, Rgb([30, 60, 220]));
        let gray = raster::grayscale(&img);
        let report = analyze(&img, &gray, &ExtractionConfig::default());
        assert!(report.water_pct > 90.0, "water {}", report.water_pct);
        assert_eq!(report.vegetation_pct, 0.0);
    }

    #[test]
    fn test_percentages_cap_developed_at_zero() {
        let img = RgbImage::from_pixel(8, 8, Rgb([40, 200, 60]));
        let gray = raster::grayscale(&img);
        let report = analyze(&img, &gray, &ExtractionConfig::default());
        assert!(report.developed_pct >= 0.0);
        assert!(report.vegetation_pct + report.water_pct <= 100.0 + 1e-3);
    }
}
