//! Pure transformation of the raw vendor document into [`DetailedMeal`]s.
//!
//! No I/O happens here. Per-dish malformation (missing identity block or id)
//! is isolated: the dish is skipped with a warning, the batch continues.

use crate::constants::{category_label, student_discount};
use crate::data_backend::{cyrb53, parse_vendor_date};
use crate::data_types::kochwerk_data_types::{
    SpeiseplanAdvanced, SpeiseplanGerichtData, SpeiseplanLocation, Zusatzinformationen,
};
use crate::data_types::{Canteen, DetailedMeal, NutritionalInfo, Sustainability};

pub fn normalize(locations: &[SpeiseplanLocation]) -> Vec<DetailedMeal> {
    let mut meals = Vec::new();

    for location in locations {
        let canteen = normalize_canteen(&location.speiseplan_advanced);

        for dish in &location.speiseplan_gericht_data {
            match normalize_dish(dish, &canteen) {
                Some(meal) => meals.push(meal),
                None => {
                    log::warn!(
                        target: "kochwerk_meals_rs::normalize",
                        "skipping dish without id in location '{}'",
                        canteen.name
                    );
                }
            }
        }
    }

    meals
}

fn normalize_canteen(advanced: &SpeiseplanAdvanced) -> Canteen {
    Canteen {
        id: advanced.id,
        name: advanced.titel.clone(),
        hash: cyrb53(&advanced.titel),
        display_name: advanced.anzeigename.clone(),
        valid_from: advanced.gueltig_von.clone(),
        valid_to: advanced.gueltig_bis.clone(),
        order_in_app: advanced.reihenfolge_in_app,
        outlet_id: advanced.outlet_id,
        location_info: advanced.location_info.clone(),
        order_info: advanced.order_info.clone(),
    }
}

/// `None` means the record lacks identity and falls under the skip-and-continue
/// policy. Every other missing vendor field stays absent, never zeroed.
fn normalize_dish(dish: &SpeiseplanGerichtData, canteen: &Canteen) -> Option<DetailedMeal> {
    let identity = dish.speiseplan_advanced_gericht.as_ref()?;
    let id = identity.id?;

    let title = identity.gerichtname.clone().unwrap_or_default();
    let category_id = identity.gerichtkategorie_id.unwrap_or_default();
    let zusatz = dish.zusatzinformationen.as_ref();

    let price = zusatz.and_then(|z| z.mitarbeiterpreis_decimal2);

    Some(DetailedMeal {
        id,
        plu: zusatz.and_then(|z| z.plu.clone()),
        hash: cyrb53(&title),
        title,
        alternative_title: zusatz.and_then(|z| z.gerichtname_alternative.clone()),
        category_id,
        category_label: category_label(category_id).to_string(),
        image_url: zusatz.and_then(|z| z.gericht_image.clone()),
        price,
        student_price: derive_student_price(category_id, price),
        guest_price: zusatz.and_then(|z| z.gaestepreis_decimal2),
        date: identity.datum.as_deref().and_then(parse_vendor_date),
        nutritional_info: zusatz.map(extract_nutritional_info).unwrap_or_default(),
        allergens: split_ids(dish.allergene_ids.as_deref()),
        additives: split_ids(dish.zusatzstoffe_ids.as_deref()),
        features: split_ids(dish.gerichtmerkmale_ids.as_deref()),
        sustainability: Sustainability {
            co2: zusatz
                .and_then(|z| z.sustainability.as_ref())
                .and_then(|s| s.co2.as_ref())
                .map(|co2| co2.co2_value),
        },
        canteen: canteen.clone(),
    })
}

/// Positive table entries are a flat replacement price, negative entries are
/// subtracted from the staff price.
fn derive_student_price(category_id: u32, price: Option<f64>) -> Option<f64> {
    let discount = student_discount(category_id)?;

    if discount > 0.0 {
        Some(discount)
    } else if discount < 0.0 {
        price.map(|p| p + discount)
    } else {
        None
    }
}

fn extract_nutritional_info(zusatz: &Zusatzinformationen) -> NutritionalInfo {
    NutritionalInfo {
        kj: zusatz.nwkj_integer,
        kcal: zusatz.nwkcal_integer,
        fat: zusatz.nwfett_decimal1,
        saturated_fat: zusatz.nwfettsaeuren_decimal1,
        carbohydrates: zusatz.nwkohlehydrate_decimal1,
        sugar: zusatz.nwzucker_decimal1,
        protein: zusatz.nweiweiss_decimal1,
        salt: zusatz.nwsalz_decimal1,
    }
}

/// Splits a comma-joined id string. Absent or empty input yields an empty
/// list, never `[""]`. Duplicates are vendor data and are preserved.
fn split_ids(ids: Option<&str>) -> Vec<String> {
    match ids {
        Some(s) if !s.is_empty() => s.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn location_fixture() -> Vec<SpeiseplanLocation> {
        serde_json::from_value(json!([
            {
                "speiseplanAdvanced": {
                    "id": 1,
                    "titel": "Elbe",
                    "anzeigename": "Mensa Elbe",
                    "gueltigVon": "2024-01-01T00:00:00.000Z",
                    "gueltigBis": "2024-12-31T00:00:00.000Z",
                    "reihenfolgeInApp": 1,
                    "outletID": 42,
                    "locationInfo": { "id": 1800, "name": "Campus" },
                    "orderInfo": { "orderAllowed": true, "scan2go": true }
                },
                "speiseplanGerichtData": [
                    {
                        "speiseplanAdvancedGericht": {
                            "id": 100,
                            "aktiv": true,
                            "datum": "2024-05-13T00:00:00.000Z",
                            "gerichtkategorieID": 251,
                            "gerichtname": "Hähnchencurry mit Reis"
                        },
                        "zusatzinformationen": {
                            "gerichtnameAlternative": "Chicken Curry",
                            "mitarbeiterpreisDecimal2": 3.5,
                            "gaestepreisDecimal2": 5.2,
                            "gerichtImage": "bild.jpg",
                            "plu": "1234",
                            "nwkjInteger": 2100,
                            "nwkcalInteger": 500,
                            "nwfettDecimal1": 12.3,
                            "sustainability": { "co2": { "co2Value": 740.0, "co2RatingIdentifier": "B" } }
                        },
                        "allergeneIds": "20,27,27",
                        "zusatzstoffeIds": null,
                        "gerichtmerkmaleIds": "11"
                    },
                    {
                        "speiseplanAdvancedGericht": {
                            "id": 101,
                            "datum": "irgendwann",
                            "gerichtkategorieID": 239,
                            "gerichtname": "Daily-Greens-Bowl"
                        }
                    },
                    {
                        "zusatzinformationen": { "mitarbeiterpreisDecimal2": 9.99 }
                    }
                ]
            }
        ]))
        .unwrap()
    }

    #[test]
    fn normalizes_full_dish() {
        let meals = normalize(&location_fixture());
        assert_eq!(meals.len(), 2);

        let meal = &meals[0];
        assert_eq!(meal.id, 100);
        assert_eq!(meal.title, "Hähnchencurry mit Reis");
        assert_eq!(meal.hash, cyrb53("Hähnchencurry mit Reis"));
        assert_eq!(meal.alternative_title.as_deref(), Some("Chicken Curry"));
        assert_eq!(meal.plu.as_deref(), Some("1234"));
        assert_eq!(meal.price, Some(3.5));
        assert_eq!(meal.guest_price, Some(5.2));
        assert_eq!(meal.date, NaiveDate::from_ymd_opt(2024, 5, 13));
        assert_eq!(meal.nutritional_info.kcal, Some(500));
        assert_eq!(meal.nutritional_info.fat, Some(12.3));
        // field absent in the fixture stays absent
        assert_eq!(meal.nutritional_info.salt, None);
        assert_eq!(meal.sustainability.co2, Some(740.0));
        assert_eq!(meal.canteen.name, "Elbe");
        assert_eq!(meal.canteen.hash, cyrb53("Elbe"));
        assert_eq!(meal.canteen.display_name, "Mensa Elbe");
        assert!(meal.canteen.order_info.as_ref().unwrap().order_allowed);
        assert!(meal.canteen.order_info.as_ref().unwrap().scan2go);
    }

    #[test]
    fn null_additives_yield_empty_list() {
        let meals = normalize(&location_fixture());
        assert!(meals[0].additives.is_empty());
        // and never [""]
        assert!(!meals[0].additives.contains(&String::new()));
    }

    #[test]
    fn id_lists_keep_duplicates() {
        let meals = normalize(&location_fixture());
        assert_eq!(meals[0].allergens, vec!["20", "27", "27"]);
        assert_eq!(meals[0].features, vec!["11"]);
    }

    #[test]
    fn negative_discount_is_subtracted() {
        // category 251 carries a -1.0 discount entry
        let meals = normalize(&location_fixture());
        assert_eq!(meals[0].student_price, Some(2.5));
    }

    #[test]
    fn flat_discount_overrides_price() {
        assert_eq!(derive_student_price(243, Some(12.0)), Some(4.7));
        assert_eq!(derive_student_price(243, None), Some(4.7));
    }

    #[test]
    fn unmapped_category_has_no_student_price() {
        assert_eq!(derive_student_price(999, Some(5.0)), None);
    }

    #[test]
    fn discounted_category_can_still_lack_label() {
        // 251 is in the discount table but not in the label table
        let meals = normalize(&location_fixture());
        assert_eq!(meals[0].category_label, "Unknown Category");
    }

    #[test]
    fn daily_greens_label_applies() {
        let meals = normalize(&location_fixture());
        assert_eq!(meals[1].category_label, "Daily Greens");
    }

    #[test]
    fn unparseable_date_passes_through_as_none() {
        let meals = normalize(&location_fixture());
        assert_eq!(meals[1].id, 101);
        assert_eq!(meals[1].date, None);
    }

    #[test]
    fn missing_zusatzinformationen_stays_absent() {
        let meals = normalize(&location_fixture());
        let meal = &meals[1];
        assert_eq!(meal.price, None);
        assert_eq!(meal.guest_price, None);
        assert_eq!(meal.nutritional_info, NutritionalInfo::default());
        assert_eq!(meal.sustainability.co2, None);
    }

    #[test]
    fn dish_without_id_is_skipped() {
        // the third fixture dish has no identity block at all
        let meals = normalize(&location_fixture());
        assert!(meals.iter().all(|m| m.id == 100 || m.id == 101));
    }

    #[test]
    fn split_ids_edge_cases() {
        assert!(split_ids(None).is_empty());
        assert!(split_ids(Some("")).is_empty());
        assert_eq!(split_ids(Some("1")), vec!["1"]);
        assert_eq!(split_ids(Some("1,2,2")), vec!["1", "2", "2"]);
    }
}
