/// libc `BUFSIZ`, the snap length the tool has always captured with.
pub const DEFAULT_SNAPLEN    : i32 = 8192;
pub const DEFAULT_TIMEOUT_MS : i32 = 1000;


/// Everything the capture needs, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub interface: String,
    pub snaplen: i32,
    pub promisc: bool,
    pub timeout_ms: i32,
}

impl Config {
    pub fn new(interface: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            snaplen: DEFAULT_SNAPLEN,
            promisc: true,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}
