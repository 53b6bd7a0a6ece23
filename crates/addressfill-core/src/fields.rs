use crate::types::ResolvedAddress;

/// Logical components shared by every address field group, in write order.
pub const ADDRESS_COMPONENTS: [&str; 5] = [
    "address_line1",
    "address_line2",
    "city",
    "province",
    "postal_code",
];

/// Suffix the line-1 trigger input carries on top of the group prefix.
pub const DEFAULT_LINE1_SUFFIX: &str = "line1-input";

/// Derives sibling field names from the name of the input that triggered the
/// interaction. Pure string work, no DOM access.
///
/// Precondition: every address-capable input on the form appends one fixed
/// suffix to a common prefix. The resolver strips exactly `suffix.len()`
/// characters from the end of the trigger name and does not detect other
/// conventions; a form mixing conventions must construct one resolver per
/// convention or the computed names will be silently wrong.
#[derive(Debug, Clone)]
pub struct FieldNameResolver {
    line1_suffix: String,
}

impl Default for FieldNameResolver {
    fn default() -> Self {
        Self::new(DEFAULT_LINE1_SUFFIX)
    }
}

impl FieldNameResolver {
    pub fn new(line1_suffix: impl Into<String>) -> Self {
        Self {
            line1_suffix: line1_suffix.into(),
        }
    }

    /// Prefix shared by the sibling fields, or `None` when the trigger name
    /// is shorter than the configured suffix.
    pub fn prefix_of<'a>(&self, trigger_name: &'a str) -> Option<&'a str> {
        let cut = trigger_name.len().checked_sub(self.line1_suffix.len())?;
        trigger_name.get(..cut)
    }

    /// Full field mapping for the group the trigger input belongs to.
    pub fn mapping(&self, trigger_name: &str) -> Option<FieldMapping> {
        self.prefix_of(trigger_name).map(FieldMapping::with_prefix)
    }
}

/// Field names for one address group. Deterministic in the trigger name and
/// recomputed per interaction; a page may host several groups with
/// independent prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
}

impl FieldMapping {
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            address_line1: format!("{prefix}address_line1"),
            address_line2: format!("{prefix}address_line2"),
            city: format!("{prefix}city"),
            province: format!("{prefix}province"),
            postal_code: format!("{prefix}postal_code"),
        }
    }

    /// Field-name / value pairs in write order.
    pub fn writes<'a>(&'a self, address: &'a ResolvedAddress) -> [(&'a str, &'a str); 5] {
        [
            (&self.address_line1, &address.line1),
            (&self.address_line2, &address.line2),
            (&self.city, &address.city),
            (&self.province, &address.province_code),
            (&self.postal_code, &address.postal_code),
        ]
    }
}
