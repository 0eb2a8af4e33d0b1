use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No registry records available")]
    EmptyInput,
    #[error("Could not resolve address '{0}'")]
    AddressNotFound(String),
}
