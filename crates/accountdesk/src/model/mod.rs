//! Application-side data models.

mod settings;

pub use settings::AppSettings;
