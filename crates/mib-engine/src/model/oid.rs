//! Numeric object identifier keys.

use crate::error::QueryError;
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// An ordered tuple of non-negative integer arcs identifying a managed
/// object. Most real-world OIDs fit within a dozen arcs, so the arcs are
/// kept inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Oid {
    arcs: SmallVec<[u32; 12]>,
}

impl Oid {
    pub fn from_arcs(arcs: &[u32]) -> Self {
        Self {
            arcs: SmallVec::from_slice(arcs),
        }
    }

    /// Parse dotted-decimal text (e.g. `"1.3.6.1.2.1"`). Leading and
    /// trailing dots are tolerated, matching what walk tools emit.
    pub fn parse(text: &str) -> Result<Self, QueryError> {
        let trimmed = text.trim().trim_matches('.');
        if trimmed.is_empty() {
            return Err(QueryError::InvalidOidFormat(text.to_string()));
        }
        let arcs: Result<SmallVec<[u32; 12]>, _> =
            trimmed.split('.').map(|arc| arc.parse::<u32>()).collect();
        match arcs {
            Ok(arcs) => Ok(Self { arcs }),
            Err(_) => Err(QueryError::InvalidOidFormat(text.to_string())),
        }
    }

    pub fn arcs(&self) -> &[u32] {
        &self.arcs
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// The identifier one level up, or `None` at (or above) a single arc.
    pub fn parent(&self) -> Option<Self> {
        if self.arcs.len() <= 1 {
            return None;
        }
        Some(Self::from_arcs(&self.arcs[..self.arcs.len() - 1]))
    }

    pub fn last_arc(&self) -> Option<u32> {
        self.arcs.last().copied()
    }

    pub fn starts_with(&self, prefix: &Oid) -> bool {
        self.arcs.starts_with(&prefix.arcs)
    }

    /// The arcs remaining after stripping `prefix`, if `prefix` applies.
    pub fn suffix_after(&self, prefix: &Oid) -> Option<&[u32]> {
        if self.starts_with(prefix) {
            Some(&self.arcs[prefix.len()..])
        } else {
            None
        }
    }

    /// Truncate to the first `len` arcs.
    pub fn prefix(&self, len: usize) -> Self {
        Self::from_arcs(&self.arcs[..len.min(self.arcs.len())])
    }
}

pub fn join_arcs(arcs: &[u32]) -> String {
    arcs.iter()
        .map(|arc| arc.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for arc in &self.arcs {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{arc}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Oid {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// OIDs cross the boundary as dotted-decimal strings, not arrays.
impl Serialize for Oid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Oid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DottedVisitor;

        impl Visitor<'_> for DottedVisitor {
            type Value = Oid;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a dotted-decimal OID string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Oid, E> {
                Oid::parse(value).map_err(|_| de::Error::custom(format!("invalid OID: {value:?}")))
            }
        }

        deserializer.deserialize_str(DottedVisitor)
    }
}
