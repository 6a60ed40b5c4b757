use std::collections::BTreeMap;

use serde::Serialize;

/// A single UCI section: `config <type> ['<name>']` plus its options and lists.
///
/// Named sections are addressed by their name; anonymous sections only by
/// position within the document (`@type[n]` in UCI terms).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UciSection {
    /// Section type tag (e.g. "interface", "zone", "rule").
    pub section_type: String,
    /// Section name, or `None` for anonymous list entries.
    pub name: Option<String>,
    /// Single-valued options keyed by name.
    pub options: BTreeMap<String, String>,
    /// Multi-valued list options keyed by name.
    pub lists: BTreeMap<String, Vec<String>>,
}

impl UciSection {
    /// Create a new named section with no options.
    pub fn named(section_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            section_type: section_type.into(),
            name: Some(name.into()),
            options: BTreeMap::new(),
            lists: BTreeMap::new(),
        }
    }

    /// Create a new anonymous section with no options.
    pub fn anonymous(section_type: impl Into<String>) -> Self {
        Self {
            section_type: section_type.into(),
            name: None,
            options: BTreeMap::new(),
            lists: BTreeMap::new(),
        }
    }

    /// Return a single-valued option if present.
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Overwrite a single-valued option.
    pub fn set_option(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.options.insert(key.into(), value.into());
    }

    /// Append a value to a list option, creating the list if absent.
    pub fn push_list(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.lists.entry(key.into()).or_default().push(value.into());
    }
}

/// One parsed UCI store: an ordered sequence of sections.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct UciDocument {
    /// Sections in document order.
    pub sections: Vec<UciSection>,
}

impl UciDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the first section with the provided name.
    pub fn get(&self, name: &str) -> Option<&UciSection> {
        self.sections
            .iter()
            .find(|s| s.name.as_deref() == Some(name))
    }

    /// Return the first section with the provided name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut UciSection> {
        self.sections
            .iter_mut()
            .find(|s| s.name.as_deref() == Some(name))
    }

    /// Iterate over all sections with the provided type tag.
    pub fn sections_of_type<'a>(
        &'a self,
        section_type: &'a str,
    ) -> impl Iterator<Item = &'a UciSection> {
        self.sections
            .iter()
            .filter(move |s| s.section_type == section_type)
    }

    /// Return the first section of a type whose option `key` equals `value`.
    pub fn find_by_option(&self, section_type: &str, key: &str, value: &str) -> Option<&UciSection> {
        self.sections
            .iter()
            .filter(|s| s.section_type == section_type)
            .find(|s| s.option(key) == Some(value))
    }

    /// Return the first section of a type whose option `key` equals `value`, mutably.
    pub fn find_by_option_mut(
        &mut self,
        section_type: &str,
        key: &str,
        value: &str,
    ) -> Option<&mut UciSection> {
        self.sections
            .iter_mut()
            .filter(|s| s.section_type == section_type)
            .find(|s| s.option(key) == Some(value))
    }

    /// Return the named section if it exists with the expected type, otherwise
    /// (re)create it: a missing section is appended, a section with the wrong
    /// type tag is replaced by a fresh one.
    pub fn ensure_typed(&mut self, section_type: &str, name: &str) -> &mut UciSection {
        let pos = self
            .sections
            .iter()
            .position(|s| s.name.as_deref() == Some(name));

        match pos {
            Some(idx) if self.sections[idx].section_type == section_type => &mut self.sections[idx],
            Some(idx) => {
                self.sections[idx] = UciSection::named(section_type, name);
                &mut self.sections[idx]
            }
            None => {
                self.sections.push(UciSection::named(section_type, name));
                let last = self.sections.len() - 1;
                &mut self.sections[last]
            }
        }
    }

    /// Append a fresh anonymous section of the given type and return it.
    pub fn add(&mut self, section_type: &str) -> &mut UciSection {
        self.sections.push(UciSection::anonymous(section_type));
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }
}

#[cfg(test)]
mod tests {
    use super::{UciDocument, UciSection};

    #[test]
    fn ensure_typed_keeps_matching_section() {
        let mut doc = UciDocument::new();
        let lan = doc.ensure_typed("interface", "lan");
        lan.set_option("ifname", "eth0");

        let again = doc.ensure_typed("interface", "lan");
        assert_eq!(again.option("ifname"), Some("eth0"));
        assert_eq!(doc.sections.len(), 1);
    }

    #[test]
    fn ensure_typed_replaces_wrong_type() {
        let mut doc = UciDocument::new();
        let mut stale = UciSection::named("alias", "wan3");
        stale.set_option("target", "somewhere");
        doc.sections.push(stale);

        let fresh = doc.ensure_typed("interface", "wan3");
        assert_eq!(fresh.section_type, "interface");
        assert_eq!(fresh.option("target"), None);
        assert_eq!(doc.sections.len(), 1);
    }

    #[test]
    fn find_by_option_matches_typed_sections_only() {
        let mut doc = UciDocument::new();
        let zone = doc.add("zone");
        zone.set_option("name", "wan");
        let rule = doc.add("rule");
        rule.set_option("name", "wan");

        let found = doc.find_by_option("zone", "name", "wan").expect("zone");
        assert_eq!(found.section_type, "zone");
    }

    #[test]
    fn find_by_option_result_outlives_query_strings() {
        let mut doc = UciDocument::new();
        doc.add("zone").set_option("name", "wan");

        let found = {
            let section_type = String::from("zone");
            let value = String::from("wan");
            doc.find_by_option(&section_type, "name", &value)
        };
        assert!(found.is_some());
    }

    #[test]
    fn add_appends_anonymous_sections_in_order() {
        let mut doc = UciDocument::new();
        doc.add("rule").set_option("name", "first");
        doc.add("rule").set_option("name", "second");

        let names: Vec<_> = doc
            .sections_of_type("rule")
            .map(|s| s.option("name").unwrap().to_string())
            .collect();
        assert_eq!(names, ["first", "second"]);
    }
}
