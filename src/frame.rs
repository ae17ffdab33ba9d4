use chrono::{DateTime, Utc};
use pcap::Packet;

use crate::error::DecodeError;
use crate::ethernet::{self, Ethernet};
use crate::ipv4::{self, IPv4};
use crate::tcp::Tcp;


/// One captured buffer. Only valid until the capture source is read again.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    caplen: u32,
    len: u32,
    seconds: i64,
    micros: u32,
    data: &'a [u8],
}

/// The header views of a TCP-over-IPv4 frame.
#[derive(Debug)]
pub struct TcpSegment<'a> {
    pub ethernet: Ethernet<'a>,
    pub ipv4: IPv4<'a>,
    pub tcp: Tcp<'a>,
}

impl<'a> TcpSegment<'a> {
    pub fn payload(&self) -> &'a [u8] { self.tcp.raw_payload() }
}


impl<'a> Frame<'a> {
    pub fn new(data: &'a [u8], caplen: u32) -> Self {
        let end = data.len().min(caplen as usize);
        Self { caplen, len: caplen, seconds: 0, micros: 0, data: &data[..end] }
    }

    pub fn from_packet(packet: Packet<'a>) -> Self {
        let header = packet.header;
        let mut frame = Self::new(packet.data, header.caplen);
        frame.len = header.len;
        frame.seconds = header.ts.tv_sec as i64;
        frame.micros = header.ts.tv_usec as u32;
        frame
    }

    pub fn caplen(&self)       -> u32 { self.caplen }
    pub fn original_len(&self) -> u32 { self.len }
    pub fn data(&self)         -> &'a [u8] { self.data }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds, self.micros.saturating_mul(1000))
    }

    /// Returns `None` for frames that are not TCP over IPv4.
    pub fn decode(&self) -> Result<Option<TcpSegment<'a>>, DecodeError> {
        let ethernet = Ethernet::from_bytes(self.data())?;
        let ipv4 = match ethernet.payload()? {
            ethernet::Payload::IPv4(ipv4) => ipv4,
            ethernet::Payload::Other(ether_type) => {
                log::trace!("skipping ether type {:?}", ether_type);
                return Ok(None);
            }
        };
        let tcp = match ipv4.payload()? {
            ipv4::Payload::Tcp(tcp) => tcp,
            ipv4::Payload::Other(protocol) => {
                log::trace!("skipping ip protocol {:?}", protocol);
                return Ok(None);
            }
        };
        Ok(Some(TcpSegment { ethernet, ipv4, tcp }))
    }
}
