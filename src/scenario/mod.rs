pub mod params;
pub mod presets;

pub use params::{ParameterSet, ParameterSetBuilder};
pub use presets::Category;
