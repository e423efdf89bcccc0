//! Translation from the internal field vocabulary (`snake_case`) to the
//! ClouDNS wire vocabulary (`kebab-case`).

use std::borrow::Cow;

use crate::core::params::ParameterSet;

/// Record fields accepted on the wire, in the order they are emitted.
pub const RECOGNIZED_FIELDS: &[&str] = &[
    "domain_name",
    "record_type",
    "record_id",
    "record",
    "host",
    "ttl",
    "priority",
    "weight",
    "port",
    "frame",
    "frame_title",
    "frame_keywords",
    "frame_description",
    "mobile_meta",
    "save_path",
    "redirect_type",
    "mail",
    "txt",
    "algorithm",
    "fptype",
    "status",
    "geodns_location",
    "geodns_code",
    "caa_flag",
    "caa_type",
    "caa_value",
    "tlsa_selector",
    "tlsa_usage",
    "tlsa_matching_type",
    "key_tag",
    "digest_type",
    "order",
    "pref",
    "flag",
    "params",
    "regexp",
    "replace",
    "cert_type",
    "cert_key_tag",
    "cert_algorithm",
    "lat_deg",
    "lat_min",
    "lat_sec",
    "lat_dir",
    "long_deg",
    "long_min",
    "long_sec",
    "long_dir",
    "altitude",
    "size",
    "h_precision",
    "v_precision",
    "cpu",
    "os",
];

/// Fields the API expects with their underscores intact.
pub const RETAIN_UNDERSCORE: &[&str] = &[
    "caa_flag",
    "caa_type",
    "caa_value",
    "tlsa_selector",
    "tlsa_usage",
    "tlsa_matching_type",
];

pub fn wire_name(field: &str) -> Cow<'_, str> {
    if RETAIN_UNDERSCORE.contains(&field) {
        Cow::Borrowed(field)
    } else {
        Cow::Owned(field.replace('_', "-"))
    }
}

/// Re-keys `params` into wire names. Unrecognized and absent-valued fields
/// are dropped; output order follows [`RECOGNIZED_FIELDS`].
pub fn normalize(params: &ParameterSet) -> ParameterSet {
    let mut wire = ParameterSet::new();
    for field in RECOGNIZED_FIELDS {
        if let Some(value) = params.get(field) {
            wire.insert(wire_name(field), value.clone());
        }
    }
    wire
}
