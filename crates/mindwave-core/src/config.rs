use std::time::Duration;

use mindwave_decode::WaveNames;

use crate::error::ConfigError;

#[cfg(target_os = "macos")]
const DEFAULT_PORT: &str = "/dev/tty.MindWaveMobile-DevA";
#[cfg(windows)]
const DEFAULT_PORT: &str = "COM3";
#[cfg(not(any(target_os = "macos", windows)))]
const DEFAULT_PORT: &str = "/dev/rfcomm0";

/// What the stream does when a checksum-valid payload cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeErrorPolicy {
    /// Yield the error and end the stream.
    #[default]
    Terminate,
    /// Log the error, drop the packet and resynchronize.
    SkipPacket,
}

#[derive(Debug, Clone)]
pub struct MindwaveConfig {
    pub port_name: String,
    pub baud_rate: u32,
    pub timeout: Duration,
    pub data_bits: serialport::DataBits,
    pub parity: serialport::Parity,
    pub stop_bits: serialport::StopBits,
    pub flow_control: serialport::FlowControl,
    /// Drop packets whose only field is `raw_wave`.
    pub skip_raw_wave: bool,
    pub waves: WaveNames,
    pub on_decode_error: DecodeErrorPolicy,
}

impl Default for MindwaveConfig {
    fn default() -> Self {
        Self {
            port_name: DEFAULT_PORT.to_string(),
            baud_rate: 57_600,
            timeout: Duration::from_secs(10),
            data_bits: serialport::DataBits::Eight,
            parity: serialport::Parity::None,
            stop_bits: serialport::StopBits::One,
            flow_control: serialport::FlowControl::None,
            skip_raw_wave: true,
            waves: WaveNames::default(),
            on_decode_error: DecodeErrorPolicy::Terminate,
        }
    }
}

impl MindwaveConfig {
    pub fn with_port(port_name: impl Into<String>) -> Self {
        Self {
            port_name: port_name.into(),
            ..Default::default()
        }
    }

    /// Replaces the band names, which must be eight distinct names.
    pub fn with_waves(mut self, names: Vec<String>) -> Result<Self, ConfigError> {
        self.waves = WaveNames::try_from(names)?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.baud_rate == 0 {
            return Err(ConfigError::InvalidBaudRate);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mindwave_decode::WaveNamesError;

    use super::{DecodeErrorPolicy, MindwaveConfig};
    use crate::error::ConfigError;

    #[test]
    fn defaults() {
        let cfg = MindwaveConfig::default();
        assert_eq!(cfg.baud_rate, 57_600);
        assert_eq!(cfg.timeout, Duration::from_secs(10));
        assert!(cfg.skip_raw_wave);
        assert_eq!(cfg.on_decode_error, DecodeErrorPolicy::Terminate);
        assert_eq!(cfg.waves.as_slice()[0], "delta");
        assert!(!cfg.port_name.is_empty());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn wave_names_are_validated() {
        let err = MindwaveConfig::with_port("/dev/ttyUSB0")
            .with_waves(vec!["delta".to_string()])
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::WaveNames(WaveNamesError::Count { count: 1 })
        ));

        let err = MindwaveConfig::default()
            .with_waves(vec!["theta".to_string(); 8])
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::WaveNames(WaveNamesError::Duplicate { ref name }) if name == "theta"
        ));

        let names: Vec<String> = (1..=8).map(|i| format!("w{i}")).collect();
        let cfg = MindwaveConfig::with_port("/dev/ttyUSB0").with_waves(names).unwrap();
        assert_eq!(cfg.port_name, "/dev/ttyUSB0");
        assert_eq!(cfg.waves.as_slice()[7], "w8");
    }

    #[test]
    fn zero_baud_rate_is_rejected() {
        let cfg = MindwaveConfig {
            baud_rate: 0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidBaudRate));
    }
}
