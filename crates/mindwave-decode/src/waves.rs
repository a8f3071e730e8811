use crate::error::WaveNamesError;
use crate::layout::BAND_COUNT;

const DEFAULT_WAVES: [&str; BAND_COUNT] = [
    "delta",
    "theta",
    "low_alpha",
    "high_alpha",
    "low_beta",
    "high_beta",
    "low_gamma",
    "mid_gamma",
];

/// Names given to the eight ASIC EEG band powers, in wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveNames([String; BAND_COUNT]);

impl WaveNames {
    /// Names must be distinct; they become the keys of the band power map.
    pub fn new(names: [String; BAND_COUNT]) -> Result<Self, WaveNamesError> {
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(WaveNamesError::Duplicate { name: name.clone() });
            }
        }
        Ok(Self(names))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for WaveNames {
    fn default() -> Self {
        Self(DEFAULT_WAVES.map(str::to_string))
    }
}

impl TryFrom<Vec<String>> for WaveNames {
    type Error = WaveNamesError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        let count = names.len();
        let names = <[String; BAND_COUNT]>::try_from(names)
            .map_err(|_| WaveNamesError::Count { count })?;
        Self::new(names)
    }
}
