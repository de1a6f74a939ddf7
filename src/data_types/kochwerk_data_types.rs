//! Serde view of the Kochwerk menu schema.
//!
//! The vendor API is undocumented and German-named; field coverage here
//! follows what the web frontend actually receives. Everything that is not
//! required to identify a dish is optional, since the vendor routinely omits
//! fields.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct MenuResponse {
    pub success: bool,
    /// May be present (and usable) even when `success` is false.
    #[serde(default)]
    pub content: Vec<SpeiseplanLocation>,
}

/// One cafeteria location with its dish list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeiseplanLocation {
    pub speiseplan_advanced: SpeiseplanAdvanced,
    #[serde(default)]
    pub speiseplan_gericht_data: Vec<SpeiseplanGerichtData>,
}

/// Canteen metadata block. `titel` is the vendor-internal key, `anzeigename`
/// the human-readable name.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeiseplanAdvanced {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub titel: String,
    #[serde(default)]
    pub anzeigename: String,
    pub gueltig_von: Option<String>,
    pub gueltig_bis: Option<String>,
    pub reihenfolge_in_app: Option<i64>,
    #[serde(rename = "outletID")]
    pub outlet_id: Option<u64>,
    pub location_info: Option<LocationInfo>,
    pub order_info: Option<OrderInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub id: u64,
    pub name: String,
}

/// Order-capability flags of a canteen. Carried through to the normalized
/// record unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInfo {
    #[serde(default)]
    pub order_allowed: bool,
    #[serde(default)]
    pub pre_order_allowed: bool,
    #[serde(default)]
    pub instant_order_allowed: bool,
    #[serde(default)]
    pub shipping_allowed: bool,
    #[serde(default)]
    pub delivery_assortment: bool,
    pub instant_order_minimum_order_value: Option<f64>,
    pub pre_order_minimum_order_value: Option<f64>,
    pub shipping_order_minimum_order_value: Option<f64>,
    pub shipping_cost_flatrate: Option<f64>,
    pub shipping_cost_threshold: Option<f64>,
    #[serde(default)]
    pub postal_code_verification: bool,
    #[serde(default)]
    pub reusable_provider: bool,
    pub reusable_provider_id: Option<i64>,
    #[serde(default)]
    pub scan2go: bool,
}

/// One dish entry. The three `*_ids` strings are comma-joined and may each be
/// null or missing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeiseplanGerichtData {
    pub speiseplan_advanced_gericht: Option<SpeiseplanAdvancedGericht>,
    pub zusatzinformationen: Option<Zusatzinformationen>,
    pub allergene_ids: Option<String>,
    pub zusatzstoffe_ids: Option<String>,
    pub gerichtmerkmale_ids: Option<String>,
}

/// Dish identity block.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeiseplanAdvancedGericht {
    pub id: Option<u64>,
    pub aktiv: Option<bool>,
    /// ISO timestamp; only the calendar day is meaningful.
    pub datum: Option<String>,
    #[serde(rename = "gerichtkategorieID")]
    pub gerichtkategorie_id: Option<u32>,
    pub gerichtname: Option<String>,
}

/// "Additional info" block: prices, nutrition, image, PLU, sustainability.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zusatzinformationen {
    pub gerichtname_alternative: Option<String>,
    pub mitarbeiterpreis_decimal2: Option<f64>,
    pub gaestepreis_decimal2: Option<f64>,
    pub gericht_image: Option<String>,
    pub plu: Option<String>,
    pub nwkj_integer: Option<i64>,
    pub nwkcal_integer: Option<i64>,
    pub nwfett_decimal1: Option<f64>,
    pub nwfettsaeuren_decimal1: Option<f64>,
    pub nwkohlehydrate_decimal1: Option<f64>,
    pub nwzucker_decimal1: Option<f64>,
    pub nweiweiss_decimal1: Option<f64>,
    pub nwsalz_decimal1: Option<f64>,
    pub sustainability: Option<RawSustainability>,
}

#[derive(Debug, Deserialize)]
pub struct RawSustainability {
    pub co2: Option<RawCo2>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCo2 {
    pub co2_value: f64,
}
