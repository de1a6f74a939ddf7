//! Token resolution and menu retrieval against the Kochwerk web backend.
//!
//! The vendor has no real auth: a proxy token is embedded in the frontend
//! bootstrap bundle and passed back as a query parameter. Token resolution
//! and the menu fetch run strictly sequentially, there is never more than one
//! fetch in flight per caller.

use chrono::NaiveDate;
use reqwest::header::REFERER;

use crate::constants::{
    KOCHWERK_MAIN_JS, KOCHWERK_MEALS_ENDPOINT, KOCHWERK_REFERER, KOCHWERK_TOKEN_REGEX,
};
use crate::data_backend::{normalizer::normalize, parse_vendor_date};
use crate::data_types::kochwerk_data_types::{MenuResponse, SpeiseplanLocation};
use crate::data_types::{DetailedMeal, MealLocation, MealsError};

/// Fetches the bootstrap script and extracts the embedded proxy token.
///
/// Transient network errors and a missing pattern both map to
/// [`MealsError::TokenUnavailable`]; the distinction only shows up in the log.
pub async fn resolve_token(client: &reqwest::Client) -> Result<String, MealsError> {
    let body = match client.get(KOCHWERK_MAIN_JS).send().await {
        Ok(resp) => match resp.error_for_status() {
            Ok(resp) => resp.text().await.map_err(|e| {
                log::warn!(target: "kochwerk_meals_rs::token", "bootstrap body unreadable: {}", e);
                MealsError::TokenUnavailable
            })?,
            Err(e) => {
                log::warn!(target: "kochwerk_meals_rs::token", "bootstrap returned error status: {}", e);
                return Err(MealsError::TokenUnavailable);
            }
        },
        Err(e) => {
            log::warn!(target: "kochwerk_meals_rs::token", "bootstrap fetch failed: {}", e);
            return Err(MealsError::TokenUnavailable);
        }
    };

    match extract_token(&body) {
        Some(token) => Ok(token),
        None => {
            log::warn!(target: "kochwerk_meals_rs::token", "PROXY_TOKEN pattern not found in bootstrap script");
            Err(MealsError::TokenUnavailable)
        }
    }
}

pub(crate) fn extract_token(body: &str) -> Option<String> {
    KOCHWERK_TOKEN_REGEX
        .captures(body)
        .map(|caps| caps[1].to_string())
}

/// Retrieves the raw menu document for all locations.
///
/// The vendor is known to set `success: false` while still returning usable
/// content; that case is logged and the content returned anyway.
pub async fn fetch_raw_menu(
    client: &reqwest::Client,
    token: &str,
) -> Result<Vec<SpeiseplanLocation>, MealsError> {
    let url = format!("{}&token={}", KOCHWERK_MEALS_ENDPOINT, token);

    let menu: MenuResponse = client
        .get(url)
        .header(REFERER, KOCHWERK_REFERER)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    if !menu.success {
        log::warn!(
            target: "kochwerk_meals_rs::fetch",
            "vendor flagged response as unsuccessful, continuing with {} location(s)",
            menu.content.len()
        );
    }

    Ok(menu.content)
}

/// Full pipeline: resolve token, fetch the menu, normalize all locations.
pub async fn get_all_detailed_meals() -> Result<Vec<DetailedMeal>, MealsError> {
    let client = reqwest::Client::new();

    let token = resolve_token(&client).await?;
    let raw = fetch_raw_menu(&client, &token).await?;
    let meals = normalize(&raw);

    log::debug!(target: "kochwerk_meals_rs::fetch", "normalized {} meals", meals.len());
    Ok(meals)
}

/// Like [`get_all_detailed_meals`], restricted to a set of cafeterias and an
/// inclusive calendar-day window before normalization.
pub async fn get_meals(
    from: NaiveDate,
    to: NaiveDate,
    locations: &[MealLocation],
) -> Result<Vec<DetailedMeal>, MealsError> {
    let client = reqwest::Client::new();

    let token = resolve_token(&client).await?;
    let mut raw = fetch_raw_menu(&client, &token).await?;
    restrict_raw(&mut raw, from, to, locations);

    Ok(normalize(&raw))
}

/// Drops locations outside the requested set and dishes outside the date
/// window. Dishes without a parseable date are dropped here, unlike in plain
/// normalization, since an explicit window was requested.
fn restrict_raw(
    raw: &mut Vec<SpeiseplanLocation>,
    from: NaiveDate,
    to: NaiveDate,
    locations: &[MealLocation],
) {
    if !locations.is_empty() {
        raw.retain(|location| {
            locations
                .iter()
                .any(|l| l.api_key() == location.speiseplan_advanced.titel)
        });
    }

    for location in raw {
        location.speiseplan_gericht_data.retain(|dish| {
            dish.speiseplan_advanced_gericht
                .as_ref()
                .and_then(|identity| identity.datum.as_deref())
                .and_then(parse_vendor_date)
                .is_some_and(|day| day >= from && day <= to)
        });
    }
}
