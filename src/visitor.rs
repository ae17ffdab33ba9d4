use std::io::Write;

use crate::error::Error;
use crate::ethernet::Ethernet;
use crate::frame::{Frame, TcpSegment};
use crate::ipv4::IPv4;
use crate::tcp::Tcp;


pub const SEPARATOR         : &str  = "- - - - - - - - - - - - - - - - - - - - - -";
pub const PAYLOAD_PREVIEW   : usize = 10;


pub trait Visitor<T> where T: Default {
    fn visit_frame(&mut self, frame: &Frame<'_>) -> Result<T, Error> {
        match frame.decode()? {
            Some(segment) => self.visit_segment(frame, &segment),
            None => Ok(T::default()),
        }
    }

    fn visit_segment(&mut self, _frame: &Frame<'_>, segment: &TcpSegment<'_>) -> Result<T, Error> {
        self.visit_segment_layers(segment)
    }

    fn visit_segment_layers(&mut self, segment: &TcpSegment<'_>) -> Result<T, Error> {
        self.visit_ethernet(&segment.ethernet)?;
        self.visit_ipv4(&segment.ipv4)?;
        self.visit_tcp(&segment.tcp)?;
        self.visit_raw_payload(segment.payload())
    }

    fn visit_ethernet(&mut self, _packet: &Ethernet<'_>) -> Result<T, Error> { Ok(T::default()) }
    fn visit_ipv4(&mut self, _packet: &IPv4<'_>)         -> Result<T, Error> { Ok(T::default()) }
    fn visit_tcp(&mut self, _packet: &Tcp<'_>)           -> Result<T, Error> { Ok(T::default()) }
    fn visit_raw_payload(&mut self, _payload: &[u8])     -> Result<T, Error> { Ok(T::default()) }
}


/// Writes the fixed text report for every TCP-over-IPv4 frame.
pub struct Printer<W: Write> {
    out: W,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}


impl<W: Write> Visitor<()> for Printer<W> {
    fn visit_segment(&mut self, frame: &Frame<'_>, segment: &TcpSegment<'_>) -> Result<(), Error> {
        log::trace!("{:?}{:?}{:?}", segment.ethernet, segment.ipv4, segment.tcp);
        writeln!(self.out, "{}", SEPARATOR)?;
        write!(self.out, "\n{} bytes captured\n", frame.caplen())?;
        self.visit_segment_layers(segment)?;
        self.out.flush()?;
        Ok(())
    }

    fn visit_ethernet(&mut self, packet: &Ethernet<'_>) -> Result<(), Error> {
        write!(self.out, "{}\t{}\n", packet.source(), packet.destination())?;
        Ok(())
    }

    fn visit_ipv4(&mut self, packet: &IPv4<'_>) -> Result<(), Error> {
        log::debug!(
            "ipv4 ttl {} id {:#06x} total length {} header {} bytes",
            packet.time_to_live(), packet.identification(), packet.total_length(), packet.header_size()
        );
        write!(self.out, "{}\t\t{}\n", packet.source_address(), packet.destination_address())?;
        Ok(())
    }

    fn visit_tcp(&mut self, packet: &Tcp<'_>) -> Result<(), Error> {
        log::debug!(
            "tcp seq {} ack {} flags {:#04x} window {}",
            packet.sequence_number(), packet.acknowledgment_number(), packet.flags(), packet.window_size()
        );
        write!(self.out, "{}\t\t\t{}\n", packet.source_port(), packet.destination_port())?;
        Ok(())
    }

    fn visit_raw_payload(&mut self, payload: &[u8]) -> Result<(), Error> {
        if payload.is_empty() {
            write!(self.out, "\n{}\n", SEPARATOR)?;
            return Ok(());
        }

        // The label is kept as-is so saved transcripts still compare equal.
        write!(self.out, "paload : ")?;
        for byte in payload.iter().take(PAYLOAD_PREVIEW) {
            write!(self.out, "{:02x} ", byte)?;
        }
        write!(self.out, "\n\n{}\n", SEPARATOR)?;
        Ok(())
    }
}
