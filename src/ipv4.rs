use std::net::Ipv4Addr;

use byteorder::{BigEndian, ByteOrder};

use crate::error::DecodeError;
use crate::shared::*;
use crate::tcp;


pub const MIN_HEADER_SIZE : usize = 20;


// https://en.wikipedia.org/wiki/List_of_IP_protocol_numbers
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Protocol {
    TCP,
    UDP,
    Unknown(u8),
}

impl Protocol {
    pub fn from_value(value: u8) -> Self {
        match value {
            TRANSPORT_PROTOCOL_TCP => Self::TCP,
            TRANSPORT_PROTOCOL_UDP => Self::UDP,
            _ => Self::Unknown(value),
        }
    }
}

#[derive(Debug)]
pub enum Payload<'a> {
    Tcp(tcp::Tcp<'a>),
    Other(Protocol),
}


#[derive(Clone)]
pub struct IPv4<'a> {
    data: &'a [u8],
}

impl<'a> IPv4<'a> {
    fn u8(&self,  i: usize) -> u8  { self.data[i] }
    fn u16(&self, i: usize) -> u16 { BigEndian::read_u16(&self.data[i..i + 2]) }

    pub fn version(&self)        -> u8 { (self.u8(0) & 0b1111_0000) >> 4 }
    /// Header length in 32-bit words.
    pub fn header_length(&self)  -> u8 { self.u8(0) & 0b0000_1111 }
    /// Falls back to the fixed 20-byte layout when the length field is below the minimum.
    pub fn header_size(&self) -> usize { (self.header_length() as usize * 4).max(MIN_HEADER_SIZE) }

    pub fn type_of_service(&self) -> u8 { self.u8(1) }
    pub fn dscp(&self)            -> u8 { (self.u8(1) & 0b1111_1100) >> 2 }
    pub fn ecn(&self)             -> u8 { self.u8(1) & 0b0000_0011 }

    pub fn total_length(&self)   -> u16 { self.u16(2) }
    pub fn identification(&self) -> u16 { self.u16(4) }

    pub fn reserved(&self)        -> bool { self.u8(6) & 0b1000_0000 != 0 }
    pub fn df(&self)              -> bool { self.u8(6) & 0b0100_0000 != 0 }
    pub fn mf(&self)              -> bool { self.u8(6) & 0b0010_0000 != 0 }
    pub fn fragment_offset(&self) -> u16  { self.u16(6) & 0x1fff }

    pub fn time_to_live(&self)    -> u8       { self.u8(8) }
    pub fn protocol_raw(&self)    -> u8       { self.u8(9) }
    pub fn protocol(&self)        -> Protocol { Protocol::from_value(self.protocol_raw()) }
    pub fn header_checksum(&self) -> u16      { self.u16(10) }

    // Octets are kept in wire order so the printed address does not depend on the host.
    pub fn source_address(&self)      -> Ipv4Addr { self.address(12) }
    pub fn destination_address(&self) -> Ipv4Addr { self.address(16) }

    fn address(&self, i: usize) -> Ipv4Addr {
        Ipv4Addr::new(self.u8(i), self.u8(i + 1), self.u8(i + 2), self.u8(i + 3))
    }

    pub fn raw_payload(&self) -> &'a [u8] {
        &self.data[self.header_size()..]
    }

    pub fn payload(&self) -> Result<Payload<'a>, DecodeError> {
        match self.protocol() {
            Protocol::TCP => Ok(Payload::Tcp(tcp::Tcp::from_bytes(self.raw_payload())?)),
            other => Ok(Payload::Other(other)),
        }
    }

    pub fn from_bytes(data: &'a [u8]) -> Result<Self, DecodeError> {
        if data.len() < MIN_HEADER_SIZE {
            return Err(DecodeError::TooShort { layer: "Ipv4", expected: MIN_HEADER_SIZE, got: data.len() });
        }

        let me = Self { data };
        if me.header_size() > data.len() {
            return Err(DecodeError::TooShort { layer: "Ipv4", expected: me.header_size(), got: data.len() });
        }

        Ok(me)
    }
}


impl<'a> std::fmt::Debug for IPv4<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "    Ipv4\n")?;
        write!(f, "        header_length:       {:?}\n", self.header_length())?;
        write!(f, "        version:             {:?}\n", self.version())?;
        write!(f, "        type_of_service:     {:?}\n", self.type_of_service())?;
        write!(f, "        dscp:                {:?}\n", self.dscp())?;
        write!(f, "        ecn:                 {:?}\n", self.ecn())?;
        write!(f, "        total_length:        {:?}\n", self.total_length())?;
        write!(f, "        identification:      {:?}\n", self.identification())?;
        write!(f, "        reserved:            {:?}\n", self.reserved())?;
        write!(f, "        df:                  {:?}\n", self.df())?;
        write!(f, "        mf:                  {:?}\n", self.mf())?;
        write!(f, "        fragment_offset:     {:?}\n", self.fragment_offset())?;
        write!(f, "        time_to_live:        {:?}\n", self.time_to_live())?;
        write!(f, "        protocol:            {:?}\n", self.protocol())?;
        write!(f, "        header_checksum:     {:?}\n", self.header_checksum())?;
        write!(f, "        source_address:      {}\n", self.source_address())?;
        write!(f, "        destination_address: {}\n", self.destination_address())?;
        Ok(())
    }
}
