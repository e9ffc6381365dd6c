#[macro_use]
pub mod macros;

pub mod base;
pub mod circle;
pub mod cluster;
pub mod geojson;
pub mod heat;
pub mod marker;
pub mod tile;
