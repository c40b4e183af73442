//! The input document.
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": 2, "value": "111" },
//!   ...
//! }
//! ```
//!
//! Record `i` describes the sample at `x = i`. Only records `1..=k` feed the
//! solver; the rest are surplus and can be used to cross-check the result.

use std::collections::BTreeMap;
use std::io::Read;

use polyrecon_integers::Integer;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{RadixSpec, ReconstructError, Sample};

/// The `keys` header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Keys {
    /// Total number of records available.
    pub n: usize,
    /// Number of records required to solve (polynomial degree + 1).
    pub k: usize,
}

/// A base given either as a JSON number or as a numeric string.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum BaseField {
    /// `"base": 16`
    Number(u32),
    /// `"base": "16"`
    Text(String),
}

/// One record as it appears in the document.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct EncodedValue {
    /// The radix of `value`.
    pub base: BaseField,
    /// The digits.
    pub value: String,
}

#[derive(Deserialize)]
struct RawShareSet {
    keys: Keys,
    #[serde(flatten)]
    records: BTreeMap<String, EncodedValue>,
}

/// A validated input document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareSet {
    keys: Keys,
    records: BTreeMap<u64, RadixSpec>,
}

impl ShareSet {
    /// Parses and validates a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ReconstructError::Json`] for malformed JSON and the
    /// validation errors of [`ShareSet::new`].
    pub fn from_json(text: &str) -> Result<Self, ReconstructError> {
        let raw: RawShareSet = serde_json::from_str(text)?;
        Self::from_raw(raw)
    }

    /// Reads, parses and validates a JSON document.
    ///
    /// # Errors
    ///
    /// See [`ShareSet::from_json`].
    pub fn from_reader(reader: impl Read) -> Result<Self, ReconstructError> {
        let raw: RawShareSet = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    /// Validates a header and its records.
    ///
    /// # Errors
    ///
    /// - [`ReconstructError::ZeroThreshold`] if `k` is zero
    /// - [`ReconstructError::ThresholdExceedsRecords`] if `k > n`
    /// - [`ReconstructError::MissingRecord`] if a record in `1..=k` is absent
    pub fn new(keys: Keys, records: BTreeMap<u64, RadixSpec>) -> Result<Self, ReconstructError> {
        if keys.k == 0 {
            return Err(ReconstructError::ZeroThreshold);
        }
        if keys.k > keys.n {
            return Err(ReconstructError::ThresholdExceedsRecords {
                k: keys.k,
                n: keys.n,
            });
        }
        if let Some(index) = (1..=keys.k as u64).find(|i| !records.contains_key(i)) {
            return Err(ReconstructError::MissingRecord { index });
        }
        if records.len() != keys.n {
            warn!(
                declared = keys.n,
                present = records.len(),
                "record count does not match keys.n"
            );
        }
        Ok(Self { keys, records })
    }

    fn from_raw(raw: RawShareSet) -> Result<Self, ReconstructError> {
        let records = Self::collect_records(raw.records)?;
        debug!(records = records.len(), k = raw.keys.k, "parsed input document");
        Self::new(raw.keys, records)
    }

    // Keys are canonical decimal: no sign, no padding, no leading zeros.
    fn collect_records(
        raw: impl IntoIterator<Item = (String, EncodedValue)>,
    ) -> Result<BTreeMap<u64, RadixSpec>, ReconstructError> {
        let mut records = BTreeMap::new();
        for (key, encoded) in raw {
            let index = match key.parse::<u64>() {
                Ok(index) if index > 0 && index.to_string() == key => index,
                _ => return Err(ReconstructError::InvalidIndex { key }),
            };
            let base = match encoded.base {
                BaseField::Number(base) => base,
                BaseField::Text(text) => match text.trim().parse::<u32>() {
                    Ok(base) => base,
                    Err(_) => return Err(ReconstructError::InvalidBaseField { index, raw: text }),
                },
            };
            if records
                .insert(index, RadixSpec::new(encoded.value, base))
                .is_some()
            {
                return Err(ReconstructError::DuplicateIndex { index });
            }
        }
        Ok(records)
    }

    /// The `keys` header.
    #[must_use]
    pub fn keys(&self) -> Keys {
        self.keys
    }

    /// The encoded records by index.
    #[must_use]
    pub fn records(&self) -> &BTreeMap<u64, RadixSpec> {
        &self.records
    }

    /// Decodes records `1..=k` into samples at `x = 1..=k`.
    ///
    /// # Errors
    ///
    /// Returns [`ReconstructError::Decode`] for the first record that does
    /// not decode.
    pub fn threshold_samples(&self) -> Result<Vec<Sample>, ReconstructError> {
        self.decode_where(|index| index <= self.keys.k as u64)
    }

    /// Decodes the records after `k`, the ones the solver does not use.
    ///
    /// # Errors
    ///
    /// Returns [`ReconstructError::Decode`] for the first record that does
    /// not decode.
    pub fn surplus_samples(&self) -> Result<Vec<Sample>, ReconstructError> {
        self.decode_where(|index| index > self.keys.k as u64)
    }

    fn decode_where(&self, keep: impl Fn(u64) -> bool) -> Result<Vec<Sample>, ReconstructError> {
        self.records
            .iter()
            .filter(|(&index, _)| keep(index))
            .map(|(&index, encoded)| {
                encoded
                    .clone()
                    .into_sample(Integer::from(index))
                    .map_err(|source| ReconstructError::Decode { index, source })
            })
            .collect()
    }
}
