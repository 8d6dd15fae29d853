extern crate ipv4_codec;
use ipv4_codec::errors::*;
use ipv4_codec::*;

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

use env_logger::Env;

const DEMO_ADDRESS: &str = "10.12.110.57";

fn run() -> Result<()> {
    let env = Env::default().filter_or(LOG_LEVEL_ENV, "info");
    env_logger::init_from_env(env);

    let address = parse_text_to_binary(DEMO_ADDRESS)?;
    debug!("{} is {:#010x} in network byte order", DEMO_ADDRESS, address.to_bits());

    let text = format_binary_to_text(address);
    println!("{}", report_line(&text));

    Ok(())
}

quick_main!(run);
