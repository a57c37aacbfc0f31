use crate::schema::Name;

use std::collections::HashSet;
use tracing::trace;

/// Resolves a naturally worded property name to the one domain object it
/// refers to.
///
/// Property names may carry qualifying prefixes (`homeAddress`) and domain
/// object names may carry qualifiers the property omits (`TrainEngineer`
/// referenced as `leadEngineer`). The search starts with every name in full
/// and drops leading words from all names one level at a time, stopping at
/// the first level where anything matches.
#[derive(Debug, Clone)]
pub struct Disambiguator<'a> {
    names: Vec<&'a str>,
    max_qualifier_drops: usize,
}

/// Outcome of a disambiguation search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Exactly one domain object matched.
    Resolved(String),

    /// Several domain objects matched at the same level, sorted by name.
    Ambiguous(Vec<String>),

    /// Nothing matched at any level.
    Unresolved,
}

impl<'a> Disambiguator<'a> {
    pub fn new(names: impl IntoIterator<Item = &'a str>, max_qualifier_drops: usize) -> Self {
        let mut seen = HashSet::new();
        let names = names.into_iter().filter(|name| seen.insert(*name)).collect();

        Self {
            names,
            max_qualifier_drops,
        }
    }

    pub fn resolve(&self, property_name: &str) -> Resolution {
        let forms = property_forms(property_name);
        let names = self
            .names
            .iter()
            .map(|name| (*name, Name::new(name)))
            .collect::<Vec<_>>();

        for dropped in 0..=self.max_qualifier_drops {
            let mut remaining = false;
            let mut matches = vec![];

            for (name, parsed) in &names {
                let Some(dequalified) = parsed.drop_leading(dropped) else {
                    continue;
                };
                remaining = true;

                let lower = dequalified.camel_case();
                let upper = dequalified.upper_camel_case();

                if forms
                    .iter()
                    .any(|form| *form == lower || form.ends_with(&upper))
                {
                    matches.push(name.to_string());
                }
            }

            trace!(property_name, dropped, ?matches, "disambiguation level");

            match matches.len() {
                0 => {}
                1 => return Resolution::Resolved(matches.remove(0)),
                _ => {
                    matches.sort();
                    return Resolution::Ambiguous(matches);
                }
            }

            // Every name has run out of words; deeper levels cannot match.
            if !remaining {
                break;
            }
        }

        Resolution::Unresolved
    }
}

/// The property name itself, plus the name with one trailing pluralizing
/// `s` removed.
fn property_forms(property_name: &str) -> Vec<&str> {
    let mut forms = vec![property_name];

    if let Some(singular) = property_name.strip_suffix('s') {
        if !singular.is_empty() {
            forms.push(singular);
        }
    }

    forms
}
