mod export;
mod manager;
mod persistence;

pub use export::write_csv;
pub use manager::{FoodCatalog, RescoreSummary};
pub use persistence::{load_foods, save_foods};
