pub mod controls;
pub mod legend;
pub mod style;

pub use controls::{LayerControl, Position};
pub use legend::{Legend, LegendEntry};
pub use style::{choose_color, marker_size, DepthBucket, DEPTH_BUCKETS};
