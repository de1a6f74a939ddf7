pub mod kochwerk_data_types;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use self::kochwerk_data_types::{LocationInfo, OrderInfo};

#[derive(Debug, Error)]
pub enum MealsError {
    /// Bootstrap script unreachable or the token pattern was not found.
    /// Callers cannot tell the two apart, the token format is opaque.
    #[error("Kochwerk-Token nicht verfügbar")]
    TokenUnavailable,
    #[error("Speiseplan-Abruf fehlgeschlagen: {0}")]
    FetchFailed(#[from] reqwest::Error),
}

/// The cafeteria a meal is located in. `api_key` is the vendor-internal
/// `titel` key, which is distinct from the display name for some locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealLocation {
    Elbe,
    Steelrunner,
    Bonprix,
    Boulevard,
}

impl MealLocation {
    pub fn api_key(&self) -> &'static str {
        match self {
            MealLocation::Elbe => "Elbe",
            MealLocation::Steelrunner => "Steelrunner",
            MealLocation::Bonprix => "bonprix",
            MealLocation::Boulevard => "Bistro Boulevard Mittag",
        }
    }
}

/// Normalized meal record, the primary output of this crate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedMeal {
    pub id: u64,
    pub plu: Option<String>,
    pub title: String,
    /// cyrb53 of the title, stable across fetches for identical dish names.
    pub hash: u64,
    pub alternative_title: Option<String>,
    pub category_id: u32,
    pub category_label: String,
    pub image_url: Option<String>,
    /// Staff price. Absent when the vendor omits it, never zeroed.
    pub price: Option<f64>,
    pub student_price: Option<f64>,
    pub guest_price: Option<f64>,
    /// Calendar day the dish is served on. `None` when the vendor date is
    /// missing or unparseable; such records still pass through normalization
    /// and simply fail any active date-range filter.
    pub date: Option<NaiveDate>,
    pub nutritional_info: NutritionalInfo,
    pub allergens: Vec<String>,
    pub additives: Vec<String>,
    pub features: Vec<String>,
    pub sustainability: Sustainability,
    pub canteen: Canteen,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalInfo {
    pub kj: Option<i64>,
    pub kcal: Option<i64>,
    pub fat: Option<f64>,
    pub saturated_fat: Option<f64>,
    pub carbohydrates: Option<f64>,
    pub sugar: Option<f64>,
    pub protein: Option<f64>,
    pub salt: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Sustainability {
    pub co2: Option<f64>,
}

/// Canteen metadata, denormalized onto every meal of that canteen so the
/// filter engine and presentation layer never need a join.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Canteen {
    pub id: u64,
    /// Vendor-internal key (`titel`).
    pub name: String,
    pub hash: u64,
    pub display_name: String,
    pub valid_from: Option<String>,
    pub valid_to: Option<String>,
    pub order_in_app: Option<i64>,
    pub outlet_id: Option<u64>,
    pub location_info: Option<LocationInfo>,
    pub order_info: Option<OrderInfo>,
}

/// Session-local filter state. Empty sets and unset bounds mean
/// "no constraint" for their dimension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub canteens: Vec<String>,
    pub allergens: Vec<String>,
    pub features: Vec<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl FilterState {
    /// Clears every dimension and the date range in one state transition.
    pub fn reset(&mut self) {
        *self = FilterState::default();
    }

    pub fn is_filtered(&self) -> bool {
        *self != FilterState::default()
    }
}

/// One selectable filter chip with its occurrence count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacetOption {
    pub label: String,
    pub value: String,
    pub count: usize,
}

/// Facet options per dimension, in first-seen order.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct Facets {
    pub canteens: Vec<FacetOption>,
    pub allergens: Vec<FacetOption>,
    pub features: Vec<FacetOption>,
}
