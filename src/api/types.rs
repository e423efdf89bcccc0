//! Typed request bodies. Each one lowers into a [`ParameterSet`] keyed by the
//! internal field names, ready for validation and normalization.

use crate::core::params::ParameterSet;
use crate::core::record::RecordType;

macro_rules! put_fields {
    ($params:expr, $src:expr, [$($field:ident),* $(,)?]) => {
        $( $params.insert_opt(stringify!($field), $src.$field.clone()); )*
    };
}

/// Type-specific record fields. Only the ones that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFields {
    pub priority: Option<u16>,
    pub weight: Option<u16>,
    pub port: Option<u16>,
    pub frame: Option<u8>,
    pub frame_title: Option<String>,
    pub frame_keywords: Option<String>,
    pub frame_description: Option<String>,
    pub mobile_meta: Option<u8>,
    pub save_path: Option<u8>,
    pub redirect_type: Option<u16>,
    pub mail: Option<String>,
    pub txt: Option<String>,
    pub algorithm: Option<String>,
    pub fptype: Option<u8>,
    pub status: Option<u8>,
    pub geodns_location: Option<u32>,
    pub geodns_code: Option<String>,
    pub caa_flag: Option<u8>,
    pub caa_type: Option<String>,
    pub caa_value: Option<String>,
    pub tlsa_usage: Option<u8>,
    pub tlsa_selector: Option<u8>,
    pub tlsa_matching_type: Option<u8>,
    pub key_tag: Option<u32>,
    pub digest_type: Option<u8>,
    pub order: Option<u16>,
    pub pref: Option<u16>,
    pub flag: Option<String>,
    pub params: Option<String>,
    pub regexp: Option<String>,
    pub replace: Option<String>,
    pub cert_type: Option<u16>,
    pub cert_key_tag: Option<u32>,
    pub cert_algorithm: Option<u8>,
    pub lat_deg: Option<u8>,
    pub lat_min: Option<u8>,
    pub lat_sec: Option<String>,
    pub lat_dir: Option<String>,
    pub long_deg: Option<u8>,
    pub long_min: Option<u8>,
    pub long_sec: Option<String>,
    pub long_dir: Option<String>,
    pub altitude: Option<String>,
    pub size: Option<String>,
    pub h_precision: Option<String>,
    pub v_precision: Option<String>,
    pub cpu: Option<String>,
    pub os: Option<String>,
}

impl RecordFields {
    fn put(&self, params: &mut ParameterSet) {
        put_fields!(params, self, [
            priority, weight, port, frame, frame_title, frame_keywords,
            frame_description, mobile_meta, save_path, redirect_type, mail, txt,
            algorithm, fptype, status, geodns_location, geodns_code, caa_flag,
            caa_type, caa_value, tlsa_usage, tlsa_selector, tlsa_matching_type,
            key_tag, digest_type, order, pref, flag, params, regexp, replace,
            cert_type, cert_key_tag, cert_algorithm, lat_deg, lat_min, lat_sec,
            lat_dir, long_deg, long_min, long_sec, long_dir, altitude, size,
            h_precision, v_precision, cpu, os,
        ]);
    }
}

/// A record to create with `dns/add-record.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub domain_name: String,
    pub record_type: RecordType,
    pub host: String,
    pub record: String,
    pub ttl: u32,
    pub fields: RecordFields,
}

impl NewRecord {
    pub fn new(domain_name: impl Into<String>, record_type: RecordType, record: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
            record_type,
            host: String::new(),
            record: record.into(),
            ttl: 3600,
            fields: RecordFields::default(),
        }
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn fields(mut self, fields: RecordFields) -> Self {
        self.fields = fields;
        self
    }

    pub fn to_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params
            .insert("domain_name", &self.domain_name)
            .insert("record_type", self.record_type)
            .insert("host", &self.host)
            .insert("record", &self.record)
            .insert("ttl", self.ttl);
        self.fields.put(&mut params);
        params
    }
}

/// Changes to an existing record, sent to `dns/mod-record.json`.
///
/// The endpoint does not take a record type. Setting `record_type` only
/// enables the address shape check on `record` for A and AAAA records;
/// without it that check is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordUpdate {
    pub domain_name: String,
    pub record_id: u32,
    pub record_type: Option<RecordType>,
    pub host: String,
    pub record: String,
    pub ttl: u32,
    pub fields: RecordFields,
}

impl RecordUpdate {
    pub fn new(domain_name: impl Into<String>, record_id: u32, record: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
            record_id,
            record_type: None,
            host: String::new(),
            record: record.into(),
            ttl: 3600,
            fields: RecordFields::default(),
        }
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = Some(record_type);
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn fields(mut self, fields: RecordFields) -> Self {
        self.fields = fields;
        self
    }

    pub fn to_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params
            .insert("domain_name", &self.domain_name)
            .insert("record_id", self.record_id)
            .insert_opt("record_type", self.record_type)
            .insert("host", &self.host)
            .insert("record", &self.record)
            .insert("ttl", self.ttl);
        self.fields.put(&mut params);
        params
    }
}

/// Filters for `dns/records.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordQuery {
    pub host: Option<String>,
    pub host_like: Option<String>,
    pub record_type: Option<RecordType>,
    pub rows_per_page: u32,
    pub page: u32,
    pub order_by: Option<String>,
}

impl Default for RecordQuery {
    fn default() -> Self {
        Self {
            host: None,
            host_like: None,
            record_type: None,
            rows_per_page: 20,
            page: 1,
            order_by: None,
        }
    }
}

/// Filters for `dns/list-zones.json` and its page count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneQuery {
    pub page: u32,
    pub rows_per_page: u32,
    pub search: Option<String>,
    pub group_id: Option<u32>,
    pub has_cloud_domains: Option<bool>,
}

impl Default for ZoneQuery {
    fn default() -> Self {
        Self {
            page: 1,
            rows_per_page: 20,
            search: None,
            group_id: None,
            has_cloud_domains: None,
        }
    }
}

/// SOA values for `dns/modify-soa.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaSettings {
    pub primary_ns: String,
    pub admin_email: String,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub default_ttl: u32,
}

impl SoaSettings {
    pub fn new(primary_ns: impl Into<String>, admin_email: impl Into<String>) -> Self {
        Self {
            primary_ns: primary_ns.into(),
            admin_email: admin_email.into(),
            refresh: 7200,
            retry: 7200,
            expire: 2419200,
            default_ttl: 3600,
        }
    }

    /// Internal-vocabulary view used for validation.
    pub fn to_params(&self) -> ParameterSet {
        ParameterSet::new()
            .with("primary_ns", &self.primary_ns)
            .with("admin_email", &self.admin_email)
            .with("refresh", self.refresh)
            .with("retry", self.retry)
            .with("expiry", self.expire)
            .with("default_ttl", self.default_ttl)
    }
}

/// Monitoring check for `dns/failover-activate.json` and
/// `dns/failover-modify.json`. The API takes these keys with underscores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailoverCheck {
    pub check_type: u16,
    pub down_event_handler: u8,
    pub up_event_handler: u8,
    pub main_ip: String,
    pub backup_ip_1: String,
    pub backup_ip_2: Option<String>,
    pub backup_ip_3: Option<String>,
    pub backup_ip_4: Option<String>,
    pub backup_ip_5: Option<String>,
    pub monitoring_region: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: Option<String>,
    pub content: Option<String>,
    pub query_type: Option<String>,
    pub query_response: Option<String>,
    pub check_period: Option<u32>,
    pub notification_mail: Option<String>,
    pub deactivate_record: bool,
    pub latency_limit: Option<String>,
    pub timeout: Option<u32>,
    pub http_request_type: Option<String>,
}

impl FailoverCheck {
    pub fn new(
        check_type: u16,
        down_event_handler: u8,
        up_event_handler: u8,
        main_ip: impl Into<String>,
        backup_ip_1: impl Into<String>,
    ) -> Self {
        Self {
            check_type,
            down_event_handler,
            up_event_handler,
            main_ip: main_ip.into(),
            backup_ip_1: backup_ip_1.into(),
            backup_ip_2: None,
            backup_ip_3: None,
            backup_ip_4: None,
            backup_ip_5: None,
            monitoring_region: None,
            host: None,
            port: None,
            path: None,
            content: None,
            query_type: None,
            query_response: None,
            check_period: None,
            notification_mail: None,
            deactivate_record: false,
            latency_limit: None,
            timeout: None,
            http_request_type: None,
        }
    }

    pub(crate) fn put(&self, params: &mut ParameterSet) {
        params
            .insert("check_type", self.check_type)
            .insert("down_event_handler", self.down_event_handler)
            .insert("up_event_handler", self.up_event_handler)
            .insert("main_ip", &self.main_ip)
            .insert("backup_ip_1", &self.backup_ip_1);
        put_fields!(params, self, [
            backup_ip_2, backup_ip_3, backup_ip_4, backup_ip_5, monitoring_region,
            host, port, path, content, query_type, query_response, check_period,
            notification_mail,
        ]);
        params.insert("deactivate_record", self.deactivate_record);
        put_fields!(params, self, [latency_limit, timeout, http_request_type]);
    }
}

/// Registrant contact for domain orders and contact changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub mail: String,
    pub name: String,
    pub company: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub telnocc: String,
    pub telno: String,
    pub faxnocc: Option<String>,
    pub faxno: Option<String>,
}

impl ContactDetails {
    pub(crate) fn put(&self, params: &mut ParameterSet) {
        params
            .insert("mail", &self.mail)
            .insert("name", &self.name)
            .insert_opt("company", self.company.as_deref())
            .insert("address", &self.address)
            .insert("city", &self.city)
            .insert("state", &self.state)
            .insert("zip", &self.zip)
            .insert("country", &self.country)
            .insert("telnocc", &self.telnocc)
            .insert("telno", &self.telno);
        put_fields!(params, self, [faxnocc, faxno]);
    }
}

/// A domain name registration or transfer order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainOrder {
    /// Name without the TLD, e.g. `example`.
    pub domain_name: String,
    pub tld: String,
    pub period: u8,
    pub contact: ContactDetails,
    pub nameservers: Vec<String>,
    pub intended_use: Option<String>,
    /// Registry-specific extras such as `vat`, `birth_date` or `aero_id`,
    /// sent under the given keys.
    pub registry_fields: Vec<(String, String)>,
}

impl DomainOrder {
    pub fn new(
        domain_name: impl Into<String>,
        tld: impl Into<String>,
        period: u8,
        contact: ContactDetails,
        nameservers: Vec<String>,
    ) -> Self {
        Self {
            domain_name: domain_name.into(),
            tld: tld.into(),
            period,
            contact,
            nameservers,
            intended_use: None,
            registry_fields: Vec::new(),
        }
    }

    pub fn to_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params
            .insert("domain-name", &self.domain_name)
            .insert("tld", &self.tld)
            .insert("period", self.period);
        self.contact.put(&mut params);
        params
            .insert("ns", self.nameservers.clone())
            .insert_opt("intended_use", self.intended_use.as_deref());
        for (key, value) in &self.registry_fields {
            params.insert(key, value);
        }
        params
    }
}

/// Parked page settings for `dns/set-parked-settings.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkedSettings {
    pub template: u32,
    /// Falls back to the domain name when unset.
    pub title: Option<String>,
    pub description: String,
    pub keywords: String,
    pub contact_form: bool,
}

impl Default for ParkedSettings {
    fn default() -> Self {
        Self {
            template: 3,
            title: None,
            description: String::new(),
            keywords: String::new(),
            contact_form: false,
        }
    }
}

/// Zone content to load with `dns/records-import.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordImport {
    /// `bind` or `tinydns`.
    pub format: String,
    pub content: String,
    pub delete_existing_records: bool,
    /// Restricts the import to these types; empty imports every type.
    pub record_types: Vec<RecordType>,
}

impl RecordImport {
    pub fn bind(content: impl Into<String>) -> Self {
        Self {
            format: "bind".to_string(),
            content: content.into(),
            delete_existing_records: false,
            record_types: Vec::new(),
        }
    }
}
