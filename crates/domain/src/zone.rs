//! Zone membership of queried names.

use std::sync::Arc;

/// Outcome of classifying a name against the configured zones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainMatch {
    /// The name is outside every configured zone.
    Unsupported,
    /// The name is the zone itself; carries the zone.
    IsApex(Arc<str>),
    /// The name is below a zone: `hostname` is the label part, `domain` the zone.
    Matched { hostname: String, domain: Arc<str> },
}

impl DomainMatch {
    /// Zone the name belongs to, if any.
    pub fn zone(&self) -> Option<&str> {
        match self {
            DomainMatch::Unsupported => None,
            DomainMatch::IsApex(zone) => Some(zone),
            DomainMatch::Matched { domain, .. } => Some(domain),
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, DomainMatch::Unsupported)
    }
}

/// Classifies names against an ordered list of zones. First match wins.
#[derive(Debug, Clone)]
pub struct ZoneMatcher {
    zones: Vec<Arc<str>>,
}

impl ZoneMatcher {
    pub fn new<I, S>(zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let zones = zones
            .into_iter()
            .map(|z| normalize_name(z.as_ref()))
            .filter(|z| !z.is_empty())
            .map(|z| Arc::from(z.as_str()))
            .collect();
        Self { zones }
    }

    pub fn zones(&self) -> &[Arc<str>] {
        &self.zones
    }

    /// Classifies `fqdn`. A single trailing root label is removed first and
    /// the comparison ignores ASCII case.
    pub fn classify(&self, fqdn: &str) -> DomainMatch {
        let name = normalize_name(fqdn);

        for zone in &self.zones {
            if name == zone.as_ref() {
                return DomainMatch::IsApex(Arc::clone(zone));
            }

            if let Some(prefix) = name
                .strip_suffix(zone.as_ref())
                .and_then(|rest| rest.strip_suffix('.'))
            {
                if !prefix.is_empty() {
                    return DomainMatch::Matched {
                        hostname: prefix.to_string(),
                        domain: Arc::clone(zone),
                    };
                }
            }
        }

        DomainMatch::Unsupported
    }

    /// Pairs of configured zones where one is a suffix of the other.
    pub fn overlapping_zones(&self) -> Vec<(Arc<str>, Arc<str>)> {
        let mut overlaps = Vec::new();
        for (i, outer) in self.zones.iter().enumerate() {
            for inner in self.zones.iter().skip(i + 1) {
                let nested = |a: &str, b: &str| a == b || a.ends_with(&format!(".{}", b));
                if nested(outer, inner) || nested(inner, outer) {
                    overlaps.push((Arc::clone(outer), Arc::clone(inner)));
                }
            }
        }
        overlaps
    }
}

/// Removes one trailing root label, if present.
pub fn unfqdn(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// Appends the root label unless already present.
pub fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

fn normalize_name(name: &str) -> String {
    unfqdn(name.trim()).to_ascii_lowercase()
}
