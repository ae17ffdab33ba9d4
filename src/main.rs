mod capture;
mod cli;
mod config;
mod error;
mod ethernet;
mod frame;
mod ipv4;
mod shared;
mod tcp;
mod visitor;

#[cfg(test)]
mod testing;

use std::io;

use crate::capture::CaptureSource;
use crate::visitor::Printer;


fn main() {
    env_logger::init();

    let Some(config) = cli::parse(std::env::args_os()) else {
        std::process::exit(-1);
    };

    let mut source = match CaptureSource::open(&config) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(-1);
        }
    };

    let mut printer = Printer::new(io::stdout().lock());
    let result = capture::run(&mut source, &mut printer);
    drop(printer);
    drop(source);

    match result {
        Ok(end) => println!("{}", end),
        Err(error) => {
            eprintln!("[ERROR]: {}", error);
            std::process::exit(-1);
        }
    }
}
