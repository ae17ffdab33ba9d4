use std::str::FromStr;

use crate::error::ParseMacError;


#[allow(non_upper_case_globals)]
pub const NETWORK_PROTOCOL_IPv4 : u16 = 0x0800;
#[allow(non_upper_case_globals)]
pub const NETWORK_PROTOCOL_IPv6 : u16 = 0x86DD;
pub const NETWORK_PROTOCOL_ARP  : u16 = 0x0806;
pub const NETWORK_PROTOCOL_RARP : u16 = 0x8035;
pub const NETWORK_PROTOCOL_VLAN : u16 = 0x8100;

pub const TRANSPORT_PROTOCOL_UDP : u8 = 0x11;
pub const TRANSPORT_PROTOCOL_TCP : u8 = 0x06;



#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct MacAddress {
    data: [u8; 6]
}


impl MacAddress {
    pub const fn from_raw(data: [u8; 6]) -> Self {
        Self { data }
    }

    pub fn octets(&self) -> [u8; 6] { self.data }
}


impl std::fmt::Display for MacAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let d = self.octets();
        write!(f, "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}", d[0], d[1], d[2], d[3], d[4], d[5])
    }
}

impl std::fmt::Debug for MacAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}


impl FromStr for MacAddress {
    type Err = ParseMacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut data = [0u8; 6];
        let mut parts = s.split(':');
        for slot in data.iter_mut() {
            let part = parts.next().ok_or_else(|| ParseMacError(s.to_string()))?;
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ParseMacError(s.to_string()));
            }
            *slot = u8::from_str_radix(part, 16).map_err(|_| ParseMacError(s.to_string()))?;
        }
        if parts.next().is_some() {
            return Err(ParseMacError(s.to_string()));
        }
        Ok(Self { data })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_zero_padded_lowercase_hex() {
        let mac = MacAddress::from_raw([0x00, 0x1b, 0x2C, 0x03, 0xff, 0x0a]);
        assert_eq!(mac.to_string(), "00:1b:2c:03:ff:0a");
    }

    #[test]
    fn printed_mac_parses_back_to_same_bytes() {
        for raw in [[0u8; 6], [0xff; 6], [0x01, 0x23, 0x45, 0x67, 0x89, 0xab], [0xde, 0xad, 0x00, 0xbe, 0xef, 0x10]] {
            let mac = MacAddress::from_raw(raw);
            let parsed: MacAddress = mac.to_string().parse().unwrap();
            assert_eq!(parsed.octets(), raw);
        }
    }

    #[test]
    fn parse_rejects_malformed_strings() {
        assert!("00:11:22:33:44".parse::<MacAddress>().is_err());
        assert!("00:11:22:33:44:55:66".parse::<MacAddress>().is_err());
        assert!("0:11:22:33:44:55".parse::<MacAddress>().is_err());
        assert!("zz:11:22:33:44:55".parse::<MacAddress>().is_err());
        assert!("+f:11:22:33:44:55".parse::<MacAddress>().is_err());
        assert_eq!(
            "00:11:22:33:44".parse::<MacAddress>().unwrap_err().to_string(),
            "invalid MAC address '00:11:22:33:44'"
        );
    }
}
