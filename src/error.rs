/// Reasons a captured frame cannot be decoded. These never stop the capture,
/// the frame is skipped.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("{layer} data too small, expected at least {expected}, got {got}")]
    TooShort { layer: &'static str, expected: usize, got: usize },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid MAC address '{0}'")]
pub struct ParseMacError(pub String);

/// libpcap's own error text, without the crate's "libpcap error: " prefix.
pub fn pcap_message(err: &pcap::Error) -> String {
    match err {
        pcap::Error::PcapError(message) => message.clone(),
        err => err.to_string(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("pcap_open_live({interface}) return null - {}", pcap_message(.source))]
    Open {
        interface: String,
        #[source]
        source: pcap::Error,
    },
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("cannot write report: {0}")]
    Io(#[from] std::io::Error),
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_failure_shows_raw_libpcap_text() {
        let err = Error::Open {
            interface: "nope0".to_string(),
            source: pcap::Error::PcapError("nope0: No such device exists".to_string()),
        };
        assert_eq!(err.to_string(), "pcap_open_live(nope0) return null - nope0: No such device exists");
    }

    #[test]
    fn other_pcap_errors_keep_their_display() {
        assert_eq!(pcap_message(&pcap::Error::NonNonBlock), pcap::Error::NonNonBlock.to_string());
    }
}
