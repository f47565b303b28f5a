//! Field-level merge of the two provider payloads.
//!
//! Every optional field is described by one [`MergeRule`]: a slot in
//! [`IpDetails`] and one extractor per source, in priority order. The merged
//! value is the first extractor result that is present and non-empty.

use crate::types::{IpDetails, ACCURACY_NOTE, NO_HOSTING_DATA};
use crate::utils::{non_empty, JsonObject};
use serde_json::Value;

type Extractor = fn(&JsonObject) -> Option<String>;

struct MergeRule {
    slot: fn(&mut IpDetails) -> &mut Option<String>,
    /// `[ipapi.co, ipinfo.io]`
    sources: [Extractor; 2],
}

fn rules() -> [MergeRule; 9] {
    [
        MergeRule {
            slot: |d| &mut d.city,
            sources: [|a| key(a, "city"), |b| key(b, "city")],
        },
        MergeRule {
            slot: |d| &mut d.region,
            sources: [|a| key(a, "region"), |b| key(b, "region")],
        },
        MergeRule {
            slot: |d| &mut d.country,
            sources: [|a| key(a, "country_name"), |b| key(b, "country")],
        },
        MergeRule {
            slot: |d| &mut d.organization,
            sources: [|a| key(a, "org"), |b| key(b, "org")],
        },
        MergeRule {
            slot: |d| &mut d.latitude,
            sources: [|a| key(a, "latitude"), |b| loc_part(b, 0)],
        },
        MergeRule {
            slot: |d| &mut d.longitude,
            sources: [|a| key(a, "longitude"), |b| loc_part(b, 1)],
        },
        MergeRule {
            slot: |d| &mut d.timezone,
            sources: [|a| key(a, "timezone"), |b| key(b, "timezone")],
        },
        MergeRule {
            slot: |d| &mut d.postal_code,
            sources: [|a| key(a, "postal"), |b| key(b, "postal")],
        },
        MergeRule {
            slot: |d| &mut d.asn,
            sources: [|a| key(a, "asn"), |b| key(b, "asn")],
        },
    ]
}

fn key(map: &JsonObject, name: &str) -> Option<String> {
    map.get(name).and_then(non_empty)
}

/// ipinfo.io reports coordinates as a single `"lat,lon"` string.
fn loc_part(map: &JsonObject, index: usize) -> Option<String> {
    map.get("loc")
        .and_then(|v| v.as_str())
        .and_then(|loc| loc.split(',').nth(index))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_owned)
}

/// ipinfo.io's hosting flag. Only a missing key or `null` means "no data".
fn hosting(map: &JsonObject) -> String {
    match map.get("hosting") {
        None | Some(Value::Null) => NO_HOSTING_DATA.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Builds the merged record. A missing payload counts as an empty one.
pub fn merge(ip: &str, ipapi: Option<&JsonObject>, ipinfo: Option<&JsonObject>) -> IpDetails {
    let empty = JsonObject::new();
    let sources = [ipapi.unwrap_or(&empty), ipinfo.unwrap_or(&empty)];

    let mut details = IpDetails {
        ip: ip.to_string(),
        accuracy: ACCURACY_NOTE.to_string(),
        hosting: hosting(sources[1]),
        ..Default::default()
    };

    for rule in rules() {
        *(rule.slot)(&mut details) = rule
            .sources
            .iter()
            .zip(sources)
            .find_map(|(extract, source)| extract(source));
    }

    details
}
