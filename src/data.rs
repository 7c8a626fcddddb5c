// src/data.rs
//
// Records flowing through the pipeline:
//
// - DeputyRef:    produced by the listing walk, consumed once by the detail fetch.
// - DeputyRecord: one per DeputyRef, owned by the caller until rendered.
// - GroupIndex:   name → detail URL for one region, flattened into DeputyRefs.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::ConfigError;

/// `name → absolute detail URL` for one region. Insertion-ordered; inserting
/// an existing name replaces its URL in place (last-wins).
pub type GroupIndex = IndexMap<String, String>;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DeputyRef {
    pub name: String,
    pub url: String,
    pub region: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DeputyRecord {
    pub name: String,
    pub region: String,
    pub email: Option<String>,
    pub political_group: Option<String>,
    pub constituency: Option<String>,
}

impl DeputyRecord {
    /// Record for a deputy whose detail page could not be read.
    pub fn bare(reference: &DeputyRef) -> Self {
        Self {
            name: reference.name.clone(),
            region: reference.region.clone(),
            email: None,
            political_group: None,
            constituency: None,
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::Region => Some(&self.region),
            Field::Email => self.email.as_deref(),
            Field::Group => self.political_group.as_deref(),
            Field::Constituency => self.constituency.as_deref(),
        }
    }

    /// True when no detail field could be extracted.
    pub fn is_bare(&self) -> bool {
        self.email.is_none() && self.political_group.is_none() && self.constituency.is_none()
    }
}

/// Output columns, keyed by their CLI names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Region,
    Email,
    Group,
    Constituency,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Region,
        Field::Email,
        Field::Group,
        Field::Constituency,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "nom",
            Field::Region => "region",
            Field::Email => "email",
            Field::Group => "groupe",
            Field::Constituency => "circonscription",
        }
    }

    /// Key with its first letter upper-cased ("nom" → "Nom").
    pub fn label(self) -> String {
        let key = self.key();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => join!(&first.to_uppercase().to_string(), chars.as_str()),
            None => s!(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| ConfigError::UnknownField(s!(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> DeputyRef {
        DeputyRef {
            name: s!("Jeanne Martin"),
            url: s!("https://www.assemblee-nationale.fr/deputes/fiche/OMC_PA1234"),
            region: s!("Bretagne"),
        }
    }

    #[test]
    fn bare_record_keeps_identity() {
        let rec = DeputyRecord::bare(&reference());
        assert_eq!(rec.name, "Jeanne Martin");
        assert_eq!(rec.region, "Bretagne");
        assert!(rec.is_bare());
        assert_eq!(rec.get(Field::Email), None);
        assert_eq!(rec.get(Field::Name), Some("Jeanne Martin"));
    }

    #[test]
    fn field_keys_round_trip_and_label() {
        for f in Field::ALL {
            assert_eq!(f.key().parse::<Field>(), Ok(f));
        }
        assert_eq!(Field::Constituency.label(), "Circonscription");
        assert_eq!(Field::Group.to_string(), "groupe");
        assert!("Nom".parse::<Field>().is_err());
    }

    #[test]
    fn group_index_is_last_wins_in_place() {
        let mut idx = GroupIndex::new();
        idx.insert(s!("A"), s!("u1"));
        idx.insert(s!("B"), s!("u2"));
        idx.insert(s!("A"), s!("u3"));
        let pairs: Vec<_> = idx.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(pairs, vec![("A", "u3"), ("B", "u2")]);
    }
}
