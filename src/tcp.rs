use byteorder::{BigEndian, ByteOrder};

use crate::error::DecodeError;


pub const MIN_HEADER_SIZE : usize = 20;

pub const FLAG_FIN : u8 = 0x01;
pub const FLAG_SYN : u8 = 0x02;
pub const FLAG_RST : u8 = 0x04;
pub const FLAG_PSH : u8 = 0x08;
pub const FLAG_ACK : u8 = 0x10;
pub const FLAG_URG : u8 = 0x20;
pub const FLAG_ECE : u8 = 0x40;
pub const FLAG_CWR : u8 = 0x80;


fn u16(data: &[u8], i: usize) -> u16 { BigEndian::read_u16(&data[i..i + 2]) }
fn u32(data: &[u8], i: usize) -> u32 { BigEndian::read_u32(&data[i..i + 4]) }


#[derive(Clone)]
pub struct Tcp<'a> {
    data: &'a [u8],
}

impl<'a> Tcp<'a> {
    pub fn source_port(&self)      -> u16 { u16(self.data, 0) }
    pub fn destination_port(&self) -> u16 { u16(self.data, 2) }

    pub fn sequence_number(&self)        -> u32 { u32(self.data, 4) }
    pub fn acknowledgment_number(&self)  -> u32 { u32(self.data, 8) }

    /// Header length in 32-bit words.
    pub fn data_offset(&self) -> u8 { (self.data[12] & 0b1111_0000) >> 4 }
    pub fn reserved(&self)    -> u8 { self.data[12] & 0b0000_1111 }

    pub fn flags(&self) -> u8 { self.data[13] }
    fn flag(&self, mask: u8) -> bool { self.flags() & mask != 0 }

    pub fn cwr(&self) -> bool { self.flag(FLAG_CWR) }
    pub fn ece(&self) -> bool { self.flag(FLAG_ECE) }
    pub fn urg(&self) -> bool { self.flag(FLAG_URG) }
    pub fn ack(&self) -> bool { self.flag(FLAG_ACK) }
    pub fn psh(&self) -> bool { self.flag(FLAG_PSH) }
    pub fn rst(&self) -> bool { self.flag(FLAG_RST) }
    pub fn syn(&self) -> bool { self.flag(FLAG_SYN) }
    pub fn fin(&self) -> bool { self.flag(FLAG_FIN) }

    pub fn window_size(&self)    -> u16 { u16(self.data, 14) }
    pub fn check_sum(&self)      -> u16 { u16(self.data, 16) }
    pub fn urgent_pointer(&self) -> u16 { u16(self.data, 18) }

    pub fn header_size(&self) -> usize { (self.data_offset() as usize * 4).max(MIN_HEADER_SIZE) }

    pub fn raw_payload(&self) -> &'a [u8] {
        &self.data[self.header_size()..]
    }

    pub fn from_bytes(data: &'a [u8]) -> Result<Self, DecodeError> {
        if data.len() < MIN_HEADER_SIZE {
            return Err(DecodeError::TooShort { layer: "Tcp", expected: MIN_HEADER_SIZE, got: data.len() });
        }

        let me = Self { data };

        if me.header_size() > data.len() {
            return Err(DecodeError::TooShort { layer: "Tcp", expected: me.header_size(), got: data.len() });
        }

        Ok(me)
    }
}


impl<'a> std::fmt::Debug for Tcp<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "    Tcp\n")?;
        write!(f, "        source_port:           {:?}\n", self.source_port())?;
        write!(f, "        destination_port:      {:?}\n", self.destination_port())?;
        write!(f, "        sequence_number:       {:?}\n", self.sequence_number())?;
        write!(f, "        acknowledgment_number: {:?}\n", self.acknowledgment_number())?;
        write!(f, "        data_offset:           {:?}\n", self.data_offset())?;
        write!(f, "        reserved:              {:?}\n", self.reserved())?;
        write!(f, "        cwr:                   {:?}\n", self.cwr())?;
        write!(f, "        ece:                   {:?}\n", self.ece())?;
        write!(f, "        urg:                   {:?}\n", self.urg())?;
        write!(f, "        ack:                   {:?}\n", self.ack())?;
        write!(f, "        psh:                   {:?}\n", self.psh())?;
        write!(f, "        rst:                   {:?}\n", self.rst())?;
        write!(f, "        syn:                   {:?}\n", self.syn())?;
        write!(f, "        fin:                   {:?}\n", self.fin())?;
        write!(f, "        window_size:           {:?}\n", self.window_size())?;
        write!(f, "        check_sum:             {:?}\n", self.check_sum())?;
        write!(f, "        urgent_pointer:        {:?}\n", self.urgent_pointer())?;
        Ok(())
    }
}
