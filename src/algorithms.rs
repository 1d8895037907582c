pub mod annealing;
pub mod polygonization;

#[doc(inline)]
pub use annealing::{anneal, optimize_points};

#[doc(inline)]
pub use polygonization::new_monotone_polygon;
