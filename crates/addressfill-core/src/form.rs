use std::collections::BTreeMap;

/// A rendered status snippet appended below a form, scoped by CSS class so a
/// later render can replace its own output and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub css_class: String,
    pub body: String,
}

/// Seam between this crate and whatever actually owns the form: named input
/// values plus a list of rendered status fragments. The real page binds its
/// DOM behind this; tests and headless hosts use [`MemoryForm`].
pub trait FormDocument {
    /// Current value of a named field, if the form has one.
    fn value(&self, name: &str) -> Option<String>;

    /// Writes a field, returning `false` when no such field exists. A
    /// missing field is tolerated and skipped, never an error.
    fn set_value(&mut self, name: &str, value: &str) -> bool;

    /// Removes every fragment carrying the given class.
    fn remove_fragments(&mut self, css_class: &str);

    fn append_fragment(&mut self, fragment: Fragment);

    fn fragments(&self) -> &[Fragment];
}

/// Map-backed form. Fields must be declared up front; writes to undeclared
/// names report `false` like a form missing that input.
#[derive(Debug, Default)]
pub struct MemoryForm {
    fields: BTreeMap<String, String>,
    fragments: Vec<Fragment>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A form with the given named fields, all empty.
    pub fn with_fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields = names
            .into_iter()
            .map(|name| (name.into(), String::new()))
            .collect();
        Self {
            fields,
            fragments: Vec::new(),
        }
    }

    pub fn add_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }
}

impl FormDocument for MemoryForm {
    fn value(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    fn set_value(&mut self, name: &str, value: &str) -> bool {
        match self.fields.get_mut(name) {
            Some(slot) => {
                *slot = value.to_string();
                true
            }
            None => false,
        }
    }

    fn remove_fragments(&mut self, css_class: &str) {
        self.fragments.retain(|f| f.css_class != css_class);
    }

    fn append_fragment(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_value_writes_declared_fields() {
        let mut form = MemoryForm::with_fields(["city"]);
        assert!(form.set_value("city", "Victoria"));
        assert_eq!(form.value("city").as_deref(), Some("Victoria"));
    }

    #[test]
    fn set_value_reports_missing_fields() {
        let mut form = MemoryForm::new();
        assert!(!form.set_value("city", "Victoria"));
        assert_eq!(form.value("city"), None);
    }

    #[test]
    fn remove_fragments_is_scoped_by_class() {
        let mut form = MemoryForm::new();
        form.append_fragment(Fragment {
            css_class: "legal-entity-id".into(),
            body: "old".into(),
        });
        form.append_fragment(Fragment {
            css_class: "other".into(),
            body: "keep".into(),
        });
        form.remove_fragments("legal-entity-id");
        assert_eq!(form.fragments().len(), 1);
        assert_eq!(form.fragments()[0].body, "keep");
    }
}
