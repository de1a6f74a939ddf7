pub mod constants;
pub mod data_backend;
pub mod data_types;
pub mod filters;
pub mod server;

pub use data_backend::kochwerk_fetcher::{get_all_detailed_meals, get_meals};
pub use data_types::{DetailedMeal, FilterState, MealLocation, MealsError};
pub use filters::{apply_filters, compute_facets};
