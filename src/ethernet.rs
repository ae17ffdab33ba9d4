/*
https://standards.ieee.org/ieee/802.3/10422/
*/


use std::ops::Range;

use byteorder::{BigEndian, ByteOrder};

use crate::error::DecodeError;
use crate::ipv4;
use crate::shared::*;


pub const ADDRESS_SIZE     : usize = 6;
pub const ETHER_TYPE_SIZE  : usize = 2;

pub const HEADER_SIZE      : usize = ADDRESS_SIZE * 2 + ETHER_TYPE_SIZE;


#[derive(Debug)]
pub enum Payload<'a> {
    IPv4(ipv4::IPv4<'a>),
    Other(EtherType),
}


#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EtherType {
    IPv4,
    ARP,
    RARP,
    VLAN,
    IPv6,
    Unknown(u16),
}

impl EtherType {
    #[allow(non_upper_case_globals)]
    pub fn from_code(code: u16) -> Self {
        match code {
            NETWORK_PROTOCOL_IPv4 => Self::IPv4,
            NETWORK_PROTOCOL_ARP  => Self::ARP,
            NETWORK_PROTOCOL_RARP => Self::RARP,
            NETWORK_PROTOCOL_VLAN => Self::VLAN,
            NETWORK_PROTOCOL_IPv6 => Self::IPv6,
            _ => Self::Unknown(code),
        }
    }
}


#[derive(Clone)]
pub struct Ethernet<'a> {
    data: &'a [u8],
}


impl<'a> Ethernet<'a> {
    pub const DEST_MAC_ADDRESS_OFFSET: Range<usize> = 0..6;
    pub const SRC_MAC_ADDRESS_OFFSET:  Range<usize> = 6..12;
    pub const ETHER_TYPE_OFFSET:       Range<usize> = 12..14;
    pub const PAYLOAD_OFFSET:                usize  = HEADER_SIZE;

    // Fields are only read after `from_bytes` checked the header is present.
    pub fn destination(&self) -> MacAddress { MacAddress::from_raw(self.address(Self::DEST_MAC_ADDRESS_OFFSET)) }
    pub fn source(&self)      -> MacAddress { MacAddress::from_raw(self.address(Self::SRC_MAC_ADDRESS_OFFSET))  }

    fn address(&self, range: Range<usize>) -> [u8; 6] {
        let mut address = [0u8; ADDRESS_SIZE];
        address.copy_from_slice(&self.data[range]);
        address
    }

    /// Values of 1500 and below mean that it is used to indicate the size of the payload in octets, while values
    /// of 1536 and above indicate that it is used as an EtherType, to indicate which protocol is encapsulated in
    /// the payload of the frame.
    pub fn ether_type_raw(&self) -> u16       { BigEndian::read_u16(&self.data[Self::ETHER_TYPE_OFFSET]) }
    pub fn ether_type(&self)     -> EtherType { EtherType::from_code(self.ether_type_raw()) }

    pub fn raw_payload(&self) -> &'a [u8] { &self.data[Self::PAYLOAD_OFFSET..] }

    pub fn payload(&self) -> Result<Payload<'a>, DecodeError> {
        match self.ether_type() {
            EtherType::IPv4 => Ok(Payload::IPv4(ipv4::IPv4::from_bytes(self.raw_payload())?)),
            other => Ok(Payload::Other(other)),
        }
    }

    pub fn from_bytes(data: &'a [u8]) -> Result<Self, DecodeError> {
        if data.len() < HEADER_SIZE {
            return Err(DecodeError::TooShort { layer: "Ethernet", expected: HEADER_SIZE, got: data.len() });
        }

        Ok(Self { data })
    }
}



impl<'a> std::fmt::Debug for Ethernet<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Ethernet\n")?;
        write!(f, "    Source:      {}\n", self.source())?;
        write!(f, "    Destination: {}\n", self.destination())?;
        write!(f, "    Ether Type:  {:?}\n", self.ether_type())?;
        Ok(())
    }
}
