//! City resolution
//!
//! Picks the climate record closest to the submitted location. Matching falls
//! through pincode prefix, then location text, then the fallback city, then
//! the first table entry.

use rtrwh_types::{CityData, MatchedBy};

use crate::constants::{FALLBACK_CITY, MIN_LOCATION_FRAGMENT_LEN, PINCODE_PREFIX_LEN};

/// A resolved city and the reason it was chosen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityResolution<'a> {
    pub city: &'a CityData,
    pub matched_by: MatchedBy,
}

/// Resolve the closest city record.
///
/// Returns `None` only when `cities` is empty.
pub fn resolve_city<'a>(
    cities: &'a [CityData],
    location: &str,
    pincode: &str,
) -> Option<CityResolution<'a>> {
    if let Some(city) = match_pincode(cities, pincode) {
        return Some(CityResolution { city, matched_by: MatchedBy::Pincode });
    }
    if let Some(city) = match_location(cities, location) {
        return Some(CityResolution { city, matched_by: MatchedBy::Location });
    }

    cities
        .iter()
        .find(|c| c.city.eq_ignore_ascii_case(FALLBACK_CITY))
        .or_else(|| cities.first())
        .map(|city| CityResolution { city, matched_by: MatchedBy::Fallback })
}

fn match_pincode<'a>(cities: &'a [CityData], pincode: &str) -> Option<&'a CityData> {
    let prefix = pincode.trim().get(..PINCODE_PREFIX_LEN)?;
    cities.iter().find(|c| c.pincode_prefix == prefix)
}

fn match_location<'a>(cities: &'a [CityData], location: &str) -> Option<&'a CityData> {
    let location = location.trim().to_lowercase();
    if location.is_empty() {
        return None;
    }

    let allow_fragment = location.chars().count() >= MIN_LOCATION_FRAGMENT_LEN;
    let matches = |name: &str| {
        let name = name.trim().to_lowercase();
        !name.is_empty()
            && (location.contains(&name) || (allow_fragment && name.contains(&location)))
    };

    // City names win over state names so "Pune, Maharashtra" is not read as Mumbai
    cities
        .iter()
        .find(|c| matches(&c.city))
        .or_else(|| cities.iter().find(|c| matches(&c.state)))
}
