//! Imagery Module - Raster Feature Extraction Engine
//!
//! Tách logic trích xuất features từ ảnh vệ tinh đã decode.
//! Pure function of one image: never fails, never does I/O.
//!
//! - `buildings` - contour-based building detection
//! - `vehicles` - bright-blob vehicle detection
//! - `infrastructure` - line detection + edge density
//! - `terrain` - vegetation / water / brightness

pub mod config;
pub mod raster;
pub mod edges;
pub mod contours;
pub mod buildings;
pub mod vehicles;
pub mod infrastructure;
pub mod terrain;
pub mod types;

pub use config::ExtractionConfig;
pub use types::ImageFeatureSet;

use image::RgbImage;

/// Extract the full feature set from a decoded raster.
pub fn extract(img: &RgbImage, config: &ExtractionConfig) -> ImageFeatureSet {
    if img.width() == 0 || img.height() == 0 {
        return ImageFeatureSet::empty_with_error("empty raster");
    }

    let gray = raster::grayscale(img);

    let buildings = buildings::detect(&gray, config);
    let vehicles = vehicles::detect(&gray, config);
    let infrastructure = infrastructure::analyze(&gray, config);
    let terrain = terrain::analyze(img, &gray, config);

    log::debug!(
        "imagery extraction: {} buildings, {} vehicles, {} lines",
        buildings.building_count,
        vehicles.vehicle_count,
        infrastructure.line_count
    );

    ImageFeatureSet::from_reports(buildings, vehicles, infrastructure, terrain)
}

/// Extract from raw encoded bytes (PNG/JPEG from the imagery collaborator).
///
/// An undecodable buffer yields the all-zero feature set with the error
/// marker set, so the downstream scorers degrade instead of aborting.
pub fn extract_from_bytes(bytes: &[u8], config: &ExtractionConfig) -> ImageFeatureSet {
    match image::load_from_memory(bytes) {
        Ok(decoded) => extract(&decoded.to_rgb8(), config),
        Err(e) => {
            log::warn!("undecodable satellite image: {}", e);
            ImageFeatureSet::empty_with_error(format!("decode error: {}", e))
        }
    }
}
