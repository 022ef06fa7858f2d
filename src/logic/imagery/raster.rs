//! Raster Plane Conversion
//!
//! Converts the decoded RGB buffer into the planes the detectors work on.
//! Grayscale matches the ITU-R 601 luma weights; HSV matches the usual
//! hexcone model with hue in degrees.

use image::RgbImage;
use ndarray::Array2;

/// Grayscale plane (0-255) from an RGB raster
pub fn grayscale(img: &RgbImage) -> Array2<f32> {
    let (w, h) = (img.width() as usize, img.height() as usize);
    let mut gray = Array2::zeros((h, w));
    for (x, y, pixel) in img.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        gray[[y as usize, x as usize]] =
            0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
    }
    gray
}

/// Hue (degrees, 0-360), saturation (0-255) and value (0-255) planes
pub fn hsv_planes(img: &RgbImage) -> (Array2<f32>, Array2<f32>, Array2<f32>) {
    let (w, h) = (img.width() as usize, img.height() as usize);
    let mut hue = Array2::zeros((h, w));
    let mut sat = Array2::zeros((h, w));
    let mut val = Array2::zeros((h, w));

    for (x, y, pixel) in img.enumerate_pixels() {
        let (hp, sp, vp) = rgb_to_hsv(pixel.0);
        let (yi, xi) = (y as usize, x as usize);
        hue[[yi, xi]] = hp;
        sat[[yi, xi]] = sp;
        val[[yi, xi]] = vp;
    }
    (hue, sat, val)
}

fn rgb_to_hsv([r, g, b]: [u8; 3]) -> (f32, f32, f32) {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta).rem_euclid(6.0))
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let sat = if max == 0.0 { 0.0 } else { delta / max };

    (hue, sat * 255.0, max * 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_grayscale_weights() {
        let img = RgbImage::from_pixel(2, 2, Rgb([255, 0, 0]));
        let gray = grayscale(&img);
        assert!((gray[[0, 0]] - 0.299 * 255.0).abs() < 0.01);
    }

    #[test]
    fn test_hsv_pure_green() {
        let (h, s, v) = rgb_to_hsv([0, 255, 0]);
        assert!((h - 120.0).abs() < 0.01);
        assert!((s - 255.0).abs() < 0.01);
        assert!((v - 255.0).abs() < 0.01);
    }

    #[test]
    fn test_hsv_pure_blue() {
        let (h, _, _) = rgb_to_hsv([0, 0, 255]);
        assert!((h - 240.0).abs() < 0.01);
    }

    #[test]
    fn test_hsv_gray_has_no_saturation() {
        let (h, s, _) = rgb_to_hsv([128, 128, 128]);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
    }
}
