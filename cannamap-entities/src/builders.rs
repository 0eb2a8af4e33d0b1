pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::registry_record_builder::*;

pub mod registry_record_builder {

    use super::*;
    use crate::{geo::*, registry::*};

    #[derive(Debug)]
    pub struct RegistryRecordBuild {
        record: RegistryRecord,
    }

    impl RegistryRecordBuild {
        pub fn name(mut self, name: &str) -> Self {
            self.record.name = name.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.record.address = address.into();
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.record.category = category.into();
            self
        }
        pub fn status(mut self, status: &str) -> Self {
            self.record.status = status.into();
            self
        }
        pub fn equity_program_designation(mut self, designation: Option<&str>) -> Self {
            self.record.equity_program_designation = designation.map(Into::into);
            self
        }
        pub fn zip_code(mut self, zip_code: Option<&str>) -> Self {
            self.record.zip_code = zip_code.map(Into::into);
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.record.pos = pos;
            self
        }
        pub fn lat_lng(self, lat: f64, lng: f64) -> Self {
            self.pos(MapPoint::from_lat_lng_deg(lat, lng))
        }
        pub fn finish(self) -> RegistryRecord {
            self.record
        }
    }

    impl Builder for RegistryRecord {
        type Build = RegistryRecordBuild;
        fn build() -> RegistryRecordBuild {
            RegistryRecordBuild {
                record: RegistryRecord {
                    name: "".into(),
                    address: "".into(),
                    category: "".into(),
                    status: "".into(),
                    equity_program_designation: None,
                    zip_code: None,
                    pos: MapPoint::default(),
                },
            }
        }
    }
}
