mod manager;
mod persistence;

pub use manager::NutriStore;
pub use persistence::{import_foods_csv, load_or_default, load_store, save_store};
