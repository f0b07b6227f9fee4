//! Built-in groups, labels, and display names.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Groups recognized when a schema does not declare its own.
pub(crate) const DEFAULT_GROUPS: &[&str] = &[
    "business",
    "billing",
    "home",
    "personal",
    "school",
    "shipping",
    "work",
];

/// Labels recognized when a schema does not declare its own.
pub(crate) const DEFAULT_LABELS: &[&str] = &[
    // Name
    "salutation",
    "full_name",
    "first_name",
    "middle_names",
    "last_name",
    "maiden_name",
    "company_name",
    "job_title",
    // Telephone
    "phone",
    "mobile",
    "fax",
    "do_not_call",
    // Email
    "email",
    "do_not_email",
    // Website
    "website",
    // Address
    "address_1",
    "address_2",
    "address_3",
    "address_4",
    "address_5",
    "address_6",
    "address_7",
    "address_8",
    "address_9",
    "building",
    "street_address",
    "city",
    "region",
    "state",
    "country",
    "postal_code",
    // Other
    "notes",
];

/// Template used to caption a cell when a schema does not set its own.
pub(crate) const DEFAULT_LABEL_FORMAT: &str = "{group}: {label}";

/// Caption for the field as a whole.
pub(crate) const DEFAULT_DISPLAY_NAME: &str = "Contact information";

static DEFAULT_GROUP_DISPLAY_NAMES: Lazy<IndexMap<&'static str, &'static str>> =
    Lazy::new(|| {
        IndexMap::from([
            ("business", "Business"),
            ("billing", "Billing"),
            ("home", "Home"),
            ("personal", "Personal"),
            ("school", "School"),
            ("shipping", "Shipping"),
            ("work", "Work"),
        ])
    });

static DEFAULT_LABEL_DISPLAY_NAMES: Lazy<IndexMap<&'static str, &'static str>> =
    Lazy::new(|| {
        IndexMap::from([
            ("salutation", "Salutation"),
            ("full_name", "Full name"),
            ("first_name", "First name"),
            ("middle_names", "Middle names"),
            ("last_name", "Last name"),
            ("maiden_name", "Maiden name"),
            ("company_name", "Company name"),
            ("job_title", "Job title"),
            ("phone", "Phone"),
            ("mobile", "Mobile"),
            ("fax", "Fax"),
            ("do_not_call", "Do not call"),
            ("email", "Email"),
            ("do_not_email", "Do not Email"),
            ("website", "Website"),
            ("address_1", "Address (line 1)"),
            ("address_2", "Address (line 2)"),
            ("address_3", "Address (line 3)"),
            ("address_4", "Address (line 4)"),
            ("address_5", "Address (line 5)"),
            ("address_6", "Address (line 6)"),
            ("address_7", "Address (line 7)"),
            ("address_8", "Address (line 8)"),
            ("address_9", "Address (line 9)"),
            ("building", "Building"),
            ("street_address", "Street address"),
            ("city", "City"),
            ("region", "Region"),
            ("state", "State"),
            ("country", "Country"),
            ("postal_code", "Postal code"),
            ("notes", "Notes"),
        ])
    });

/// Owned copy of the built-in group display names.
pub(crate) fn group_display_names() -> IndexMap<String, String> {
    DEFAULT_GROUP_DISPLAY_NAMES
        .iter()
        .map(|(key, name)| (key.to_string(), name.to_string()))
        .collect()
}

/// Owned copy of the built-in label display names.
pub(crate) fn label_display_names() -> IndexMap<String, String> {
    DEFAULT_LABEL_DISPLAY_NAMES
        .iter()
        .map(|(key, name)| (key.to_string(), name.to_string()))
        .collect()
}
