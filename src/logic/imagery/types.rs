//! Imagery Types
//!
//! KHÔNG chứa logic detection - chỉ data structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// DETECTION REPORTS
// ============================================================================

/// One detected building outline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    /// Enclosed contour area (px²)
    pub area: f32,
    /// Vertices of the approximated polygon
    pub vertices: usize,
    /// Contour perimeter (px)
    pub perimeter: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildingReport {
    pub building_count: usize,
    pub total_building_area: f32,
    pub largest_building_area: f32,
    /// Largest buildings by area, capped by config
    pub buildings: Vec<Building>,
}

/// One detected vehicle-sized bright blob
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub area: f32,
    pub aspect_ratio: f32,
    /// Bounding-box top-left corner
    pub position: (u32, u32),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehicleReport {
    pub vehicle_count: usize,
    pub vehicles: Vec<Vehicle>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InfrastructureReport {
    /// Detected line segments (roads, lot boundaries)
    pub line_count: usize,
    /// Edge pixels / total pixels, in [0,1]
    pub density: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TerrainReport {
    pub vegetation_pct: f32,
    pub water_pct: f32,
    /// Mean grayscale value (0-255)
    pub brightness_mean: f32,
    /// max(0, 100 - vegetation - water)
    pub developed_pct: f32,
}

// ============================================================================
// IMAGE FEATURE SET
// ============================================================================

/// Structured measurements extracted from one satellite raster.
///
/// Produced once per request and immutable thereafter. On an undecodable
/// image the set is all-zero with `extraction_error` set; scorers treat that
/// as degraded input, never as a failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageFeatureSet {
    pub buildings: BuildingReport,
    pub vehicles: VehicleReport,
    pub infrastructure: InfrastructureReport,
    pub terrain: TerrainReport,
    pub extraction_error: Option<String>,
}

impl ImageFeatureSet {
    pub fn from_reports(
        buildings: BuildingReport,
        vehicles: VehicleReport,
        infrastructure: InfrastructureReport,
        terrain: TerrainReport,
    ) -> Self {
        Self {
            buildings,
            vehicles,
            infrastructure,
            terrain,
            extraction_error: None,
        }
    }

    /// All-zero set tagged with an error marker
    pub fn empty_with_error(error: impl Into<String>) -> Self {
        Self {
            extraction_error: Some(error.into()),
            ..Default::default()
        }
    }

    pub fn extraction_ok(&self) -> bool {
        self.extraction_error.is_none()
    }

    pub fn building_count(&self) -> usize {
        self.buildings.building_count
    }

    pub fn total_building_area(&self) -> f32 {
        self.buildings.total_building_area
    }

    pub fn largest_building_area(&self) -> f32 {
        self.buildings.largest_building_area
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.vehicle_count
    }

    /// Convert to JSON-serializable format for logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "building_count": self.building_count(),
            "total_building_area": self.total_building_area(),
            "largest_building_area": self.largest_building_area(),
            "vehicle_count": self.vehicle_count(),
            "line_count": self.infrastructure.line_count,
            "infrastructure_density": self.infrastructure.density,
            "vegetation_pct": self.terrain.vegetation_pct,
            "water_pct": self.terrain.water_pct,
            "brightness_mean": self.terrain.brightness_mean,
            "extraction_error": self.extraction_error,
        })
    }
}
