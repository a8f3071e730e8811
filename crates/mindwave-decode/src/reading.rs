use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::code::FieldCode;

/// Eight named band powers, kept in the order the headset sends them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandPowers {
    bands: Vec<(String, u32)>,
}

impl BandPowers {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            bands: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: &str, power: u32) {
        self.bands.push((name.to_string(), power));
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.bands
            .iter()
            .find(|(band, _)| band == name)
            .map(|&(_, power)| power)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.bands.iter().map(|(name, power)| (name.as_str(), *power))
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

impl Serialize for BandPowers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.bands.len()))?;
        for (name, power) in &self.bands {
            map.serialize_entry(name, power)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(u8),
    Sample(i16),
    Bands(BandPowers),
}

impl Value {
    /// Integer view of a scalar or sample; `None` for band powers.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Scalar(v) => Some(i64::from(*v)),
            Self::Sample(v) => Some(i64::from(*v)),
            Self::Bands(_) => None,
        }
    }

    pub fn as_bands(&self) -> Option<&BandPowers> {
        match self {
            Self::Bands(bands) => Some(bands),
            _ => None,
        }
    }
}

/// Everything decoded from one packet, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ReadingSet {
    fields: BTreeMap<&'static str, Value>,
}

impl ReadingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under the code's name. A repeated field replaces the
    /// earlier one.
    pub fn insert(&mut self, code: FieldCode, value: Value) -> Option<Value> {
        self.fields.insert(code.name(), value)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True when the packet carried nothing but a raw wave sample.
    pub fn is_raw_wave_only(&self) -> bool {
        self.fields.len() == 1 && self.fields.contains_key(FieldCode::RawWave.name())
    }
}
