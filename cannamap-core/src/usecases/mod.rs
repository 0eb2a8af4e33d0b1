mod error;
mod license_distribution;
mod locate_nearest;
mod map_view;

#[cfg(test)]
pub mod tests;

pub use self::{error::Error, license_distribution::*, locate_nearest::*, map_view::*};
pub use crate::resolver::NearestLocation;

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::geocode::GeoCodingGateway, resolver::*};
}
