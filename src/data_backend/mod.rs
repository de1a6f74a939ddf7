use chrono::NaiveDate;

pub mod kochwerk_fetcher;
pub mod normalizer;

/// cyrb53, the same non-cryptographic hash the web frontend derives its
/// content hashes with (seed 0, UTF-16 code units).
pub fn cyrb53(input: &str) -> u64 {
    let mut h1: u32 = 0xdead_beef;
    let mut h2: u32 = 0x41c6_ce57;

    for ch in input.encode_utf16() {
        h1 = (h1 ^ u32::from(ch)).wrapping_mul(2_654_435_761);
        h2 = (h2 ^ u32::from(ch)).wrapping_mul(1_597_334_677);
    }

    h1 = (h1 ^ (h1 >> 16)).wrapping_mul(2_246_822_507)
        ^ (h2 ^ (h2 >> 13)).wrapping_mul(3_266_489_909);
    h2 = (h2 ^ (h2 >> 16)).wrapping_mul(2_246_822_507)
        ^ (h1 ^ (h1 >> 13)).wrapping_mul(3_266_489_909);

    (u64::from(h2 & 0x1f_ffff) << 32) | u64::from(h1)
}

/// Vendor timestamps are ISO strings ("2024-05-13T00:00:00.000Z" or plain
/// dates); only the calendar day matters.
pub(crate) fn parse_vendor_date(datum: &str) -> Option<NaiveDate> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(datum) {
        return Some(dt.date_naive());
    }

    datum
        .get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
}
