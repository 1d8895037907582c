mod monotone;

pub use monotone::new_monotone_polygon;
