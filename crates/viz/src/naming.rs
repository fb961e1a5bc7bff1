use std::path::Path;

use chrono::{DateTime, Local};

/// Deterministic output filename for one visualization.
///
/// Layout: `{base}_area_{A}_contour_{C}_{YYYYMMDD_HHMMSS}_visualization.png`
/// where `A` is the oracle-side minimum mask region area and `C` the
/// contour-area threshold. The timestamp has second resolution, so two
/// runs over the same file within one second produce the same name and the
/// later write silently replaces the earlier one. That is accepted
/// behavior, not detected or avoided.
#[derive(Debug, Clone)]
pub struct OutputName {
    base: String,
    min_mask_region_area: u32,
    min_contour_area: u32,
    timestamp: DateTime<Local>,
}

impl OutputName {
    /// Name for `input`, stamped with the current local time.
    pub fn for_input(input: &Path, min_mask_region_area: u32, min_contour_area: u32) -> Self {
        Self::at(input, min_mask_region_area, min_contour_area, Local::now())
    }

    /// Name for `input` at a fixed instant.
    pub fn at(
        input: &Path,
        min_mask_region_area: u32,
        min_contour_area: u32,
        timestamp: DateTime<Local>,
    ) -> Self {
        let base = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            base,
            min_mask_region_area,
            min_contour_area,
            timestamp,
        }
    }

    pub fn file_name(&self) -> String {
        format!(
            "{}_area_{}_contour_{}_{}_visualization.png",
            self.base,
            self.min_mask_region_area,
            self.min_contour_area,
            self.timestamp.format("%Y%m%d_%H%M%S"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 8, 4, 12, 30, 15).unwrap()
    }

    #[test]
    fn name_embeds_parameters_and_timestamp() {
        let name = OutputName::at(Path::new("/data/in/photo.jpg"), 50_000, 2_000, instant());
        assert_eq!(
            name.file_name(),
            "photo_area_50000_contour_2000_20240804_123015_visualization.png"
        );
    }

    #[test]
    fn base_strips_only_the_final_extension() {
        let name = OutputName::at(Path::new("scan.v2.PNG"), 1, 2, instant());
        assert!(name.file_name().starts_with("scan.v2_area_1_contour_2_"));
    }

    #[test]
    fn same_second_names_collide() {
        // Known limitation: reprocessing within one clock second reuses
        // the name, so the later output overwrites the earlier one.
        let a = OutputName::at(Path::new("photo.png"), 50_000, 2_000, instant());
        let b = OutputName::at(Path::new("photo.png"), 50_000, 2_000, instant());
        assert_eq!(a.file_name(), b.file_name());
    }

    #[test]
    fn different_seconds_produce_different_names() {
        let later = Local.with_ymd_and_hms(2024, 8, 4, 12, 30, 16).unwrap();
        let a = OutputName::at(Path::new("photo.png"), 50_000, 2_000, instant());
        let b = OutputName::at(Path::new("photo.png"), 50_000, 2_000, later);
        assert_ne!(a.file_name(), b.file_name());
    }
}
