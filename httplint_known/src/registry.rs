//! The known-headers registry
//!
//! `KnownHeaders` folds a list of `EntrySpec` rows into a
//! case-insensitive map, validating every row against the declared
//! attribute schema as it goes. Lookups never fail: an unlisted name
//! yields a synthetic entry with every attribute absent, so callers
//! can query attributes uniformly and get `None` for anything the
//! table does not assert.

use crate::cardinality::Rule;
use crate::entry::{EntrySpec, HeaderEntry, IanaStatus};
use crate::error::{RegistryBuildError, RegistryResult};
use crate::field::FieldName;
use crate::schema::{declared_schema, AttrKey, AttrValue};
use crate::table;
use httplint_syntax::Grammar;
use std::borrow::Cow;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct KnownHeaders {
    entries: HashMap<FieldName, HeaderEntry>,
    schema: Vec<AttrKey>,
}

impl KnownHeaders {
    /// Build a registry from table rows, checking each row against
    /// the schema. Fails on the first duplicate name, undeclared or
    /// repeated attribute, or kind mismatch.
    pub fn build(specs: Vec<EntrySpec>, schema: Vec<AttrKey>) -> RegistryResult<Self> {
        let mut entries = HashMap::with_capacity(specs.len());
        for spec in specs {
            let entry = fold_entry(spec, &schema)?;
            let name = entry.name.clone();
            if entries.insert(name.clone(), entry).is_some() {
                return Err(RegistryBuildError::duplicate_field(name));
            }
        }
        Ok(Self { entries, schema })
    }

    /// The registry of standard headers shipped with this crate.
    pub fn standard() -> RegistryResult<Self> {
        Self::build(table::entries(), declared_schema())
    }

    /// Look up a header by name, case-insensitively. Unknown names
    /// yield an owned sentinel entry rather than an error.
    pub fn get(&self, name: &str) -> Cow<'_, HeaderEntry> {
        let key = FieldName::from(name);
        match self.entries.get(&key) {
            Some(entry) => Cow::Borrowed(entry),
            None => Cow::Owned(HeaderEntry::unknown(key)),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&FieldName::from(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderEntry> {
        self.entries.values()
    }

    pub fn schema(&self) -> &[AttrKey] {
        &self.schema
    }

    pub fn is_bad_for_connection(&self, name: &str) -> Option<bool> {
        self.get(name).bad_for_connection
    }

    pub fn is_bad_for_trailer(&self, name: &str) -> Option<bool> {
        self.get(name).bad_for_trailer
    }

    pub fn is_for_request(&self, name: &str) -> Option<bool> {
        self.get(name).for_request
    }

    pub fn is_for_response(&self, name: &str) -> Option<bool> {
        self.get(name).for_response
    }

    pub fn is_precondition(&self, name: &str) -> Option<bool> {
        self.get(name).precondition
    }

    pub fn is_proactive_conneg(&self, name: &str) -> Option<bool> {
        self.get(name).proactive_conneg
    }

    pub fn is_representation_metadata(&self, name: &str) -> Option<bool> {
        self.get(name).representation_metadata
    }

    pub fn iana_status(&self, name: &str) -> Option<IanaStatus> {
        self.get(name).iana_status
    }

    pub fn rule_for(&self, name: &str) -> Option<Rule> {
        self.get(name).rule
    }

    pub fn parser_for(&self, name: &str) -> Option<&Grammar> {
        match self.entries.get(&FieldName::from(name)) {
            Some(entry) => entry.parser.as_ref(),
            None => None,
        }
    }
}

fn fold_entry(spec: EntrySpec, schema: &[AttrKey]) -> RegistryResult<HeaderEntry> {
    let mut entry = HeaderEntry::unknown(spec.name.clone());
    entry.citations = spec.citations;
    let mut seen: Vec<AttrKey> = Vec::with_capacity(spec.attrs.len());
    for (key, value) in spec.attrs {
        if !schema.contains(&key) {
            return Err(RegistryBuildError::undeclared_attribute(spec.name, key));
        }
        if seen.contains(&key) {
            return Err(RegistryBuildError::duplicate_attribute(spec.name, key));
        }
        if !key.admits(&value) {
            return Err(RegistryBuildError::attribute_kind_mismatch(
                spec.name,
                key,
                value.kind(),
            ));
        }
        seen.push(key);
        match (key, value) {
            (AttrKey::BadForConnection, AttrValue::Flag(v)) => entry.bad_for_connection = Some(v),
            (AttrKey::BadForTrailer, AttrValue::Flag(v)) => entry.bad_for_trailer = Some(v),
            (AttrKey::ForRequest, AttrValue::Flag(v)) => entry.for_request = Some(v),
            (AttrKey::ForResponse, AttrValue::Flag(v)) => entry.for_response = Some(v),
            (AttrKey::Precondition, AttrValue::Flag(v)) => entry.precondition = Some(v),
            (AttrKey::ProactiveConneg, AttrValue::Flag(v)) => entry.proactive_conneg = Some(v),
            (AttrKey::RepresentationMetadata, AttrValue::Flag(v)) => {
                entry.representation_metadata = Some(v)
            }
            (AttrKey::IanaStatus, AttrValue::Status(v)) => entry.iana_status = Some(v),
            (AttrKey::Rule, AttrValue::Rule(v)) => entry.rule = Some(v),
            (AttrKey::Parser, AttrValue::Parser(v)) => entry.parser = Some(v),
            // admits() already rejected every other pairing
            _ => unreachable!("attribute kind checked above"),
        }
    }
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::citation::Citation;
    use assert_matches::assert_matches;
    use httplint_syntax::grammar;

    fn small_registry() -> KnownHeaders {
        let specs = vec![
            EntrySpec::new("Age", vec![Citation::rfc_section(7234, "5.1")])
                .flag(AttrKey::ForResponse, true)
                .flag(AttrKey::ForRequest, false)
                .status(IanaStatus::Standard)
                .parser(grammar::integer())
                .rule(Rule::Single),
            EntrySpec::new("Allow", vec![Citation::rfc_section(7231, "7.4.1")])
                .status(IanaStatus::Standard)
                .rule(Rule::Multi),
        ];
        KnownHeaders::build(specs, declared_schema()).unwrap()
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let reg = small_registry();
        assert!(reg.contains("age"));
        assert!(reg.contains("AGE"));
        assert_eq!(reg.get("aGe").name.as_str(), "Age");
        assert_eq!(reg.rule_for("ALLOW"), Some(Rule::Multi));
    }

    #[test]
    fn unknown_name_yields_sentinel_not_error() {
        let reg = small_registry();
        let entry = reg.get("X-Custom-Thing");
        assert_eq!(entry.name.as_str(), "X-Custom-Thing");
        assert_eq!(entry.rule, None);
        assert_eq!(reg.is_for_request("X-Custom-Thing"), None);
        assert_eq!(reg.iana_status("X-Custom-Thing"), None);
        assert!(reg.parser_for("X-Custom-Thing").is_none());
    }

    #[test]
    fn explicit_false_is_distinct_from_absence() {
        let reg = small_registry();
        assert_eq!(reg.is_for_request("Age"), Some(false));
        assert_eq!(reg.is_for_request("Allow"), None);
    }

    #[test]
    fn duplicate_names_fold_case_insensitively() {
        let specs = vec![
            EntrySpec::new("ETag", vec![]),
            EntrySpec::new("etag", vec![]),
        ];
        let err = KnownHeaders::build(specs, declared_schema()).unwrap_err();
        assert_matches!(err, RegistryBuildError::DuplicateField { .. });
    }

    #[test]
    fn undeclared_attribute_is_rejected() {
        let specs = vec![EntrySpec::new("Age", vec![]).rule(Rule::Single)];
        let schema = vec![AttrKey::ForRequest, AttrKey::ForResponse];
        let err = KnownHeaders::build(specs, schema).unwrap_err();
        assert_matches!(
            err,
            RegistryBuildError::UndeclaredAttribute { key: AttrKey::Rule, .. }
        );
    }

    #[test]
    fn kind_mismatch_is_rejected() {
        let specs =
            vec![EntrySpec::new("Age", vec![]).attr(AttrKey::Rule, AttrValue::Flag(true))];
        let err = KnownHeaders::build(specs, declared_schema()).unwrap_err();
        assert_matches!(
            err,
            RegistryBuildError::AttributeKindMismatch { kind: "flag", .. }
        );
    }

    #[test]
    fn repeated_attribute_is_rejected() {
        let specs = vec![EntrySpec::new("Age", vec![])
            .flag(AttrKey::ForRequest, true)
            .flag(AttrKey::ForRequest, true)];
        let err = KnownHeaders::build(specs, declared_schema()).unwrap_err();
        assert_matches!(
            err,
            RegistryBuildError::DuplicateAttribute { key: AttrKey::ForRequest, .. }
        );
    }

    #[test]
    fn standard_registry_builds() {
        let reg = KnownHeaders::standard().unwrap();
        assert!(reg.len() > 100);
        assert!(reg.contains("Content-Type"));
        assert!(reg.contains("set-cookie"));
    }

    #[test]
    fn entries_round_trip_through_serde() {
        let reg = small_registry();
        let entry = reg.get("Age").into_owned();
        let json = serde_json::to_string(&entry).unwrap();
        let back: HeaderEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
