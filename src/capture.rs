use pcap::{Active, Capture};

use crate::config::Config;
use crate::error::{pcap_message, Error};
use crate::frame::Frame;
use crate::visitor::Visitor;


/// `pcap_next_ex` return codes.
pub const PCAP_ERROR       : i32 = -1;
pub const PCAP_ERROR_BREAK : i32 = -2;


/// Outcome of a single read from a capture source.
pub enum Next<'a> {
    Frame(Frame<'a>),
    /// The read timeout expired before a frame arrived.
    WouldBlock,
    Closed(CaptureEnd),
}

/// Why the capture stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureEnd {
    pub code: i32,
    pub message: String,
}

impl std::fmt::Display for CaptureEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "pcap_next_ex return {}({})", self.code, self.message)
    }
}


pub trait PacketSource {
    fn next_frame(&mut self) -> Next<'_>;
}


/// A live libpcap handle. Closed when dropped.
pub struct CaptureSource {
    capture: Capture<Active>,
}

impl CaptureSource {
    pub fn open(config: &Config) -> Result<Self, Error> {
        let open_error = |source| Error::Open { interface: config.interface.clone(), source };

        let capture = Capture::from_device(config.interface.as_str())
            .map_err(open_error)?
            .promisc(config.promisc)
            .snaplen(config.snaplen)
            .timeout(config.timeout_ms)
            .open()
            .map_err(open_error)?;

        log::info!(
            "capturing on {} (snaplen {}, promisc {}, timeout {} ms)",
            config.interface, config.snaplen, config.promisc, config.timeout_ms
        );
        Ok(Self { capture })
    }
}

impl PacketSource for CaptureSource {
    fn next_frame(&mut self) -> Next<'_> {
        match self.capture.next_packet() {
            Ok(packet) => Next::Frame(Frame::from_packet(packet)),
            Err(err) => read_failure(err),
        }
    }
}

/// Maps a failed `next_packet` to a retry or a close.
fn read_failure(err: pcap::Error) -> Next<'static> {
    match err {
        pcap::Error::TimeoutExpired => Next::WouldBlock,
        pcap::Error::NoMorePackets => Next::Closed(CaptureEnd { code: PCAP_ERROR_BREAK, message: pcap_message(&err) }),
        err => Next::Closed(CaptureEnd { code: PCAP_ERROR, message: pcap_message(&err) }),
    }
}


/// Reads frames until the source closes. Frames that fail to decode are
/// skipped; only report failures are returned as errors.
pub fn run<S, V>(source: &mut S, visitor: &mut V) -> Result<CaptureEnd, Error>
where
    S: PacketSource,
    V: Visitor<()>,
{
    loop {
        let frame = match source.next_frame() {
            Next::Frame(frame) => frame,
            Next::WouldBlock => continue,
            Next::Closed(end) => return Ok(end),
        };

        if log::log_enabled!(log::Level::Debug) {
            let time = frame.timestamp()
                .map(|time| time.format("%H:%M:%S%.6f").to_string())
                .unwrap_or("<invalid timestamp>".to_string());
            log::debug!("frame @ {} caplen {} len {}", time, frame.caplen(), frame.original_len());
        }

        match visitor.visit_frame(&frame) {
            Ok(()) => {}
            Err(Error::Decode(err)) => log::warn!("skipping frame of {} bytes: {}", frame.caplen(), err),
            Err(err) => return Err(err),
        }
    }
}
