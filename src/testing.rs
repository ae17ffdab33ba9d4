//! Builder for raw Ethernet/IPv4/TCP frames used by the unit tests.

pub struct FrameBuilder {
    dst_mac: [u8; 6],
    src_mac: [u8; 6],
    ether_type: u16,
    protocol: u8,
    src_ip: [u8; 4],
    dst_ip: [u8; 4],
    ip_options: Vec<u8>,
    src_port: u16,
    dst_port: u16,
    tcp_options: Vec<u8>,
    payload: Vec<u8>,
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self {
            dst_mac: [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff],
            src_mac: [0x00, 0x11, 0x22, 0x33, 0x44, 0x55],
            ether_type: 0x0800,
            protocol: 6,
            src_ip: [192, 168, 0, 1],
            dst_ip: [10, 0, 0, 2],
            ip_options: Vec::new(),
            src_port: 443,
            dst_port: 51000,
            tcp_options: Vec::new(),
            payload: Vec::new(),
        }
    }

    pub fn ether_type(mut self, ether_type: u16) -> Self {
        self.ether_type = ether_type;
        self
    }

    pub fn protocol(mut self, protocol: u8) -> Self {
        self.protocol = protocol;
        self
    }

    /// Must be a multiple of 4 bytes.
    pub fn ip_options(mut self, options: &[u8]) -> Self {
        self.ip_options = options.to_vec();
        self
    }

    /// Must be a multiple of 4 bytes.
    pub fn tcp_options(mut self, options: &[u8]) -> Self {
        self.tcp_options = options.to_vec();
        self
    }

    pub fn payload(mut self, payload: &[u8]) -> Self {
        self.payload = payload.to_vec();
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let ip_header_len = 20 + self.ip_options.len();
        let tcp_header_len = 20 + self.tcp_options.len();
        let total_len = (ip_header_len + tcp_header_len + self.payload.len()) as u16;

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&self.dst_mac);
        bytes.extend_from_slice(&self.src_mac);
        bytes.extend_from_slice(&self.ether_type.to_be_bytes());

        bytes.push(0x40 | (ip_header_len / 4) as u8);
        bytes.push(0x00);
        bytes.extend_from_slice(&total_len.to_be_bytes());
        bytes.extend_from_slice(&0x1c46u16.to_be_bytes());
        bytes.extend_from_slice(&0x4000u16.to_be_bytes());
        bytes.push(64);
        bytes.push(self.protocol);
        bytes.extend_from_slice(&[0x00, 0x00]);
        bytes.extend_from_slice(&self.src_ip);
        bytes.extend_from_slice(&self.dst_ip);
        bytes.extend_from_slice(&self.ip_options);

        bytes.extend_from_slice(&self.src_port.to_be_bytes());
        bytes.extend_from_slice(&self.dst_port.to_be_bytes());
        bytes.extend_from_slice(&0x0102_0304u32.to_be_bytes());
        bytes.extend_from_slice(&0xa0b0_c0d0u32.to_be_bytes());
        bytes.push(((tcp_header_len / 4) as u8) << 4);
        bytes.push(0x18);
        bytes.extend_from_slice(&502u16.to_be_bytes());
        bytes.extend_from_slice(&[0x00, 0x00]);
        bytes.extend_from_slice(&[0x00, 0x00]);
        bytes.extend_from_slice(&self.tcp_options);

        bytes.extend_from_slice(&self.payload);
        bytes
    }
}
