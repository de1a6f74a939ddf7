//! Faceting and filtering over the normalized meal collection.
//!
//! Both operations are synchronous full passes over the collection; the
//! collections are one menu cycle in size, nothing here needs to be
//! incremental.

use std::cmp::Ordering;

use crate::data_types::{DetailedMeal, FacetOption, Facets, FilterState};

/// One pass over the collection. Facet options appear in first-seen order;
/// a meal with several values in a dimension contributes to each bucket.
pub fn compute_facets(meals: &[DetailedMeal]) -> Facets {
    let mut facets = Facets::default();

    for meal in meals {
        bump(&mut facets.canteens, &meal.canteen.name);
        for allergen in &meal.allergens {
            bump(&mut facets.allergens, allergen);
        }
        for feature in &meal.features {
            bump(&mut facets.features, feature);
        }
    }

    facets
}

fn bump(options: &mut Vec<FacetOption>, value: &str) {
    match options.iter_mut().find(|option| option.value == value) {
        Some(option) => option.count += 1,
        None => options.push(FacetOption {
            label: value.to_string(),
            value: value.to_string(),
            count: 1,
        }),
    }
}

/// Returns the visible subset in default presentation order: ascending CO2,
/// meals without a CO2 value last, ties in original order.
pub fn apply_filters(meals: &[DetailedMeal], filters: &FilterState) -> Vec<DetailedMeal> {
    let search = filters.search.to_lowercase();

    let mut visible: Vec<DetailedMeal> = meals
        .iter()
        .filter(|meal| meal_matches(meal, filters, &search))
        .cloned()
        .collect();

    // sort_by is stable, original order breaks ties
    visible.sort_by(|a, b| compare_co2(a, b));
    visible
}

fn compare_co2(a: &DetailedMeal, b: &DetailedMeal) -> Ordering {
    let co2_a = a.sustainability.co2.unwrap_or(f64::INFINITY);
    let co2_b = b.sustainability.co2.unwrap_or(f64::INFINITY);
    co2_a.total_cmp(&co2_b)
}

/// AND across dimensions, OR within each multi-select dimension, empty
/// dimension means no constraint.
fn meal_matches(meal: &DetailedMeal, filters: &FilterState, search_lower: &str) -> bool {
    if !search_lower.is_empty() && !meal.title.to_lowercase().contains(search_lower) {
        return false;
    }

    if !filters.canteens.is_empty() && !filters.canteens.contains(&meal.canteen.name) {
        return false;
    }

    if !filters.allergens.is_empty()
        && !meal.allergens.iter().any(|a| filters.allergens.contains(a))
    {
        return false;
    }

    if !filters.features.is_empty()
        && !meal.features.iter().any(|f| filters.features.contains(f))
    {
        return false;
    }

    // only constrained when both bounds are set, day-granular and inclusive;
    // a meal without a date cannot fall inside any range
    if let (Some(from), Some(to)) = (filters.date_from, filters.date_to) {
        match meal.date {
            Some(day) => {
                if day < from || day > to {
                    return false;
                }
            }
            None => return false,
        }
    }

    true
}
