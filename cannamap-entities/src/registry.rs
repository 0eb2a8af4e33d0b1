use crate::geo::MapPoint;

/// A licensed location of the cannabis registry.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryRecord {
    pub name: String,
    pub address: String,
    pub category: String,
    pub status: String,
    pub equity_program_designation: Option<String>,
    pub zip_code: Option<String>,
    pub pos: MapPoint,
}

impl RegistryRecord {
    /// Label used for records without a license category.
    pub const CATEGORY_NOT_AVAILABLE: &'static str = "N/A";

    /// The license category with blank values replaced by
    /// [`RegistryRecord::CATEGORY_NOT_AVAILABLE`].
    pub fn category_or_not_available(&self) -> &str {
        if self.category.trim().is_empty() {
            Self::CATEGORY_NOT_AVAILABLE
        } else {
            &self.category
        }
    }
}
