//! Address domain - CEP (postal code) lookup through BrasilAPI

pub mod actions;
pub mod data;
pub mod edges;

pub use data::AddressData;
