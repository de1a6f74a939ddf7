use regex_lite::Regex;
use static_init::dynamic;

/// Bootstrap bundle of the Kochwerk web frontend. The proxy token is baked
/// into this script, there is no dedicated auth endpoint.
pub const KOCHWERK_MAIN_JS: &str =
    "https://kochwerk-web.webspeiseplan.de/main.bf4740fd495508f750f5.js";

pub const KOCHWERK_MEALS_ENDPOINT: &str =
    "https://kochwerk-web.webspeiseplan.de/index.php?model=menu&location=1800&languagetype=1&_=1691667030626";

#[dynamic]
pub static KOCHWERK_TOKEN_REGEX: Regex = Regex::new(r#"PROXY_TOKEN:"([A-Za-z0-9]+)""#).unwrap();

/// The vendor rejects requests without a Referer header, but never checks its
/// value.
pub const KOCHWERK_REFERER: &str = "https://kochwerk-web.webspeiseplan.de/";

/// Student discount per meal category. Positive values are a flat replacement
/// price, negative values are subtracted from the staff price.
pub const STUDENT_DISCOUNT_INDEX: &[(&[u32], f64)] = &[
    (&[187, 201], 1.6),
    (&[243], 4.7),
    (&[242], 4.1),
    (&[235], 0.75),
    (&[1490], 1.6),
    (&[249], 3.7),
    (&[251], -1.0),
    (&[247], 0.75),
];

/// Display names of the meal categories. Ids 238..=241 are all "Daily Greens"
/// and handled separately in [`category_label`].
pub const CATEGORY_LABELS: &[(u32, &str)] = &[
    (201, "The Original"),
    (233, "Original Soup"),
    (1483, "F&T Vegan"),
    (1485, "F&T Topping 1"),
    (1486, "F&T Topping 2"),
    (234, "Grill"),
    (243, "Pizza Station"),
    (242, "Pasta Station"),
    (235, "Salatbar"),
    (244, "Backwaren"),
];

pub const UNKNOWN_CATEGORY_LABEL: &str = "Unknown Category";
pub const DAILY_GREENS_LABEL: &str = "Daily Greens";

pub fn category_label(category_id: u32) -> &'static str {
    if (238..=241).contains(&category_id) {
        return DAILY_GREENS_LABEL;
    }

    CATEGORY_LABELS
        .iter()
        .find(|(id, _)| *id == category_id)
        .map(|(_, label)| *label)
        .unwrap_or(UNKNOWN_CATEGORY_LABEL)
}

pub fn student_discount(category_id: u32) -> Option<f64> {
    STUDENT_DISCOUNT_INDEX
        .iter()
        .find(|(categories, _)| categories.contains(&category_id))
        .map(|(_, discount)| *discount)
}
