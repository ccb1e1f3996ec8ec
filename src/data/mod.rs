pub mod loader;
pub mod types;

pub use loader::{builtin_dataset, load_dataset};
pub use types::Dataset;
