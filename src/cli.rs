use clap::Parser;

use crate::config::Config;


#[derive(Parser, Debug)]
#[command(
    name = "pcap-test",
    about = "Print Ethernet/IPv4/TCP headers of frames captured on a live interface",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Interface to capture on (e.g. wlan0). Taken verbatim, even if it starts with '-'.
    #[arg(allow_hyphen_values = true)]
    pub interface: String,
}

pub fn usage() {
    println!("syntax: pcap-test <interface>");
    println!("sample: pcap-test wlan0");
}

/// Returns `None` after printing the usage when the arguments are wrong.
pub fn parse<I, T>(args: I) -> Option<Config>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Some(Config::new(cli.interface)),
        Err(err) => {
            log::debug!("argument error: {:?}", err.kind());
            usage();
            None
        }
    }
}
