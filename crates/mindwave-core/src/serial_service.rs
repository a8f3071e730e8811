use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use log::{debug, error};
use mindwave_decode::ReadingSet;
use serialport::{SerialPort, SerialPortInfo};
use std::io::BufReader;

use crate::config::MindwaveConfig;
use crate::error::{ConfigError, SourceError};
use crate::source::{ByteSource, IoSource};
use crate::stream::ReadingStream;

/// Serial port opened for reading headset packets.
pub type SerialSource = IoSource<BufReader<Box<dyn SerialPort>>>;

#[derive(Debug, Clone)]
pub struct PortInfo {
    pub port_name: String,
    pub port_type: String,
    pub vid: Option<u16>,
    pub pid: Option<u16>,
    pub product: Option<String>,
}

impl From<SerialPortInfo> for PortInfo {
    fn from(info: SerialPortInfo) -> Self {
        let (port_type, vid, pid, product) = match &info.port_type {
            serialport::SerialPortType::UsbPort(usb) => {
                ("USB".to_string(), Some(usb.vid), Some(usb.pid), usb.product.clone())
            }
            serialport::SerialPortType::PciPort => ("PCI".to_string(), None, None, None),
            serialport::SerialPortType::BluetoothPort => ("Bluetooth".to_string(), None, None, None),
            serialport::SerialPortType::Unknown => ("Unknown".to_string(), None, None, None),
        };
        Self {
            port_name: info.port_name,
            port_type,
            vid,
            pid,
            product,
        }
    }
}

pub fn open_serial(cfg: &MindwaveConfig) -> Result<SerialSource, SourceError> {
    let port = serialport::new(&cfg.port_name, cfg.baud_rate)
        .data_bits(cfg.data_bits)
        .parity(cfg.parity)
        .stop_bits(cfg.stop_bits)
        .flow_control(cfg.flow_control)
        .timeout(cfg.timeout)
        .open()?;
    debug!("opened {} at {} baud", cfg.port_name, cfg.baud_rate);
    Ok(IoSource::new(BufReader::new(port)))
}

#[derive(Debug, Clone)]
pub enum MindwaveEvent {
    Opened(String),
    Reading(ReadingSet),
    Error(String),
    Closed,
}

enum Command {
    Close,
}

/// Runs a [`ReadingStream`] on a background thread and forwards what it
/// yields as [`MindwaveEvent`]s.
pub struct MindwaveService {
    cfg: MindwaveConfig,
    tx_cmd: Sender<Command>,
    rx_evt: Receiver<MindwaveEvent>,
}

impl MindwaveService {
    pub fn list_ports() -> Vec<PortInfo> {
        serialport::available_ports()
            .unwrap_or_default()
            .into_iter()
            .map(PortInfo::from)
            .collect()
    }

    /// Opens the configured serial port on the worker thread. Open failures
    /// arrive as an `Error` event followed by `Closed`.
    pub fn open(cfg: MindwaveConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let (tx_cmd, rx_cmd) = unbounded::<Command>();
        let (tx_evt, rx_evt) = unbounded::<MindwaveEvent>();
        let cfg_clone = cfg.clone();

        std::thread::spawn(move || match open_serial(&cfg_clone) {
            Ok(source) => {
                let _ = tx_evt.send(MindwaveEvent::Opened(cfg_clone.port_name.clone()));
                pump(ReadingStream::new(source, &cfg_clone), &tx_evt, &rx_cmd);
            }
            Err(e) => {
                error!("open failed: {e}");
                let _ = tx_evt.send(MindwaveEvent::Error(format!("open failed: {e}")));
                let _ = tx_evt.send(MindwaveEvent::Closed);
            }
        });

        Ok(Self { cfg, tx_cmd, rx_evt })
    }

    /// Same as [`MindwaveService::open`] but reads from an already open
    /// source. No `Opened` event is sent.
    pub fn with_source<S>(source: S, cfg: MindwaveConfig) -> Result<Self, ConfigError>
    where
        S: ByteSource + Send + 'static,
    {
        cfg.validate()?;
        let (tx_cmd, rx_cmd) = unbounded::<Command>();
        let (tx_evt, rx_evt) = unbounded::<MindwaveEvent>();
        let stream = ReadingStream::new(source, &cfg);

        std::thread::spawn(move || pump(stream, &tx_evt, &rx_cmd));

        Ok(Self { cfg, tx_cmd, rx_evt })
    }

    /// Asks the worker to stop. Takes effect between packets.
    pub fn close(&self) {
        let _ = self.tx_cmd.send(Command::Close);
    }

    pub fn events(&self) -> &Receiver<MindwaveEvent> {
        &self.rx_evt
    }

    pub fn config(&self) -> &MindwaveConfig { &self.cfg }
}

fn pump<S: ByteSource>(
    mut stream: ReadingStream<S>,
    tx_evt: &Sender<MindwaveEvent>,
    rx_cmd: &Receiver<Command>,
) {
    loop {
        match rx_cmd.try_recv() {
            Ok(Command::Close) | Err(TryRecvError::Disconnected) => break,
            Err(TryRecvError::Empty) => {}
        }

        let event = match stream.next() {
            Some(Ok(readings)) => MindwaveEvent::Reading(readings),
            Some(Err(e)) => {
                error!("reading stream stopped: {e}");
                MindwaveEvent::Error(e.to_string())
            }
            None => break,
        };
        if tx_evt.send(event).is_err() {
            return;
        }
    }
    let _ = tx_evt.send(MindwaveEvent::Closed);
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use mindwave_decode::{checksum, Value};

    use super::{MindwaveEvent, MindwaveService};
    use crate::config::MindwaveConfig;
    use crate::error::ConfigError;
    use crate::source::IoSource;

    fn packet(payload: &[u8]) -> Vec<u8> {
        let mut bytes = vec![0xAA, 0xAA, payload.len() as u8];
        bytes.extend_from_slice(payload);
        bytes.push(checksum(payload));
        bytes
    }

    #[test]
    fn forwards_readings_then_closes() {
        let mut bytes = packet(&[0x04, 0x33]);
        bytes.extend(packet(&[0x05, 0x44]));
        let source = IoSource::new(Cursor::new(bytes));
        let service = MindwaveService::with_source(source, MindwaveConfig::default()).unwrap();

        let events: Vec<MindwaveEvent> = service.events().iter().collect();
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[0], MindwaveEvent::Reading(r) if r.get("attention") == Some(&Value::Scalar(0x33))));
        assert!(matches!(&events[1], MindwaveEvent::Reading(r) if r.get("meditation") == Some(&Value::Scalar(0x44))));
        assert!(matches!(events[2], MindwaveEvent::Closed));
    }

    #[test]
    fn decode_error_is_reported() {
        let source = IoSource::new(Cursor::new(packet(&[0x7E, 0x00])));
        let service = MindwaveService::with_source(source, MindwaveConfig::default()).unwrap();

        let events: Vec<MindwaveEvent> = service.events().iter().collect();
        assert!(matches!(&events[0], MindwaveEvent::Error(msg) if msg.contains("unknown field code 0x7E")));
        assert!(matches!(events[1], MindwaveEvent::Closed));
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let cfg = MindwaveConfig {
            baud_rate: 0,
            ..Default::default()
        };
        let source = IoSource::new(Cursor::new(Vec::new()));
        assert!(matches!(
            MindwaveService::with_source(source, cfg),
            Err(ConfigError::InvalidBaudRate)
        ));
    }

    #[test]
    fn list_ports_names_every_port() {
        for port in MindwaveService::list_ports() {
            assert!(!port.port_name.is_empty());
        }
    }

    #[test]
    fn open_failure_is_reported_as_events() {
        let service =
            MindwaveService::open(MindwaveConfig::with_port("/dev/does-not-exist-mindwave")).unwrap();
        let events: Vec<MindwaveEvent> = service.events().iter().collect();
        assert!(matches!(&events[0], MindwaveEvent::Error(msg) if msg.starts_with("open failed")));
        assert!(matches!(events[1], MindwaveEvent::Closed));
    }
}
