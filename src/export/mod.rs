// Export formats for generated content

pub mod confluence;
pub mod csv;

pub use confluence::to_confluence;
pub use csv::to_csv;
