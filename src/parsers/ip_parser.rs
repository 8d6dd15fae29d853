extern crate hex;
extern crate ipv4_codec;
use ipv4_codec::errors::*;
use ipv4_codec::*;

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

use clap::{App, Arg};
use env_logger::Env;
use std::io::{self, Read, Write};

fn read_wire_octets() -> Result<Ipv4Address> {
    let mut bytes: Vec<u8> = Vec::new();
    io::stdin()
        .lock()
        .take(4)
        .read_to_end(&mut bytes)
        .chain_err(|| "could not read address octets from stdin")?;

    debug!("read {} octets from stdin", bytes.len());
    Ipv4Address::read_from(&bytes)
}

fn run() -> Result<()> {
    let matches = App::new("ip-parser")
        .version("0.1")
        .about("Converts IPv4 addresses between dotted-decimal text and wire octets")
        .arg(
            Arg::with_name("reverse")
                .short("r")
                .long("reverse")
                .help("Read 4 wire octets from stdin and print the dotted-decimal address"),
        )
        .arg(
            Arg::with_name("hex")
                .short("x")
                .long("hex")
                .conflicts_with("reverse")
                .help("Print the octets as hex text instead of raw bytes"),
        )
        .arg(
            Arg::with_name("json")
                .short("j")
                .long("json")
                .help("Print the conversion result as JSON"),
        )
        .arg(
            Arg::with_name("address")
                .index(1)
                .required_unless("reverse")
                .conflicts_with("reverse")
                .help("Dotted-decimal address to convert to wire octets"),
        )
        .get_matches();

    let env = Env::default().filter_or(LOG_LEVEL_ENV, "info");
    env_logger::init_from_env(env);

    let reverse = matches.is_present("reverse");
    let result = if reverse {
        read_wire_octets()
    } else {
        let text = matches.value_of("address").ok_or("no address provided")?;
        parse_text_to_binary(text)
    };

    if matches.is_present("json") {
        let report = ConversionResult::from_result(&result);
        println!("{}", serde_json::to_string(&report)?);
        return result.map(|_| ());
    }

    let address = result?;

    if reverse {
        println!("{}", address);
    } else if matches.is_present("hex") {
        println!("{}", hex::encode(address.octets()));
    } else {
        let mut out = io::stdout();
        out.write_all(&address.octets())?;
        out.flush()?;
    }

    Ok(())
}

quick_main!(run);
