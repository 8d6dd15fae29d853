use crate::errors::*;

use byteorder::{BigEndian, ByteOrder};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Longest dotted-decimal text ("255.255.255.255") plus a terminator.
pub const ADDRESS_TEXT_LEN: usize = 16;

/// An IPv4 address held as its 32-bit value in network byte order.
///
/// The value is the big-endian reading of the four wire octets, so
/// `10.12.110.57` is `0x0a0c6e39`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ipv4Address(u32);

impl Ipv4Address {
    pub const fn from_bits(bits: u32) -> Self {
        Ipv4Address(bits)
    }

    pub const fn to_bits(self) -> u32 {
        self.0
    }

    pub fn from_octets(octets: [u8; 4]) -> Self {
        Ipv4Address(BigEndian::read_u32(&octets))
    }

    pub fn octets(self) -> [u8; 4] {
        let mut o: [u8; 4] = [0; 4];
        BigEndian::write_u32(&mut o, self.0);
        o
    }

    /// Reads the first four bytes of `bytes` as wire octets.
    pub fn read_from(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < 4 {
            bail!(ErrorKind::ShortInput(bytes.len()));
        }

        Ok(Ipv4Address(BigEndian::read_u32(&bytes[..4])))
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = self.octets();
        write!(f, "{}.{}.{}.{}", o[0], o[1], o[2], o[3])
    }
}

impl FromStr for Ipv4Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_text_to_binary(s)
    }
}

impl From<[u8; 4]> for Ipv4Address {
    fn from(octets: [u8; 4]) -> Self {
        Ipv4Address::from_octets(octets)
    }
}

impl From<Ipv4Address> for u32 {
    fn from(address: Ipv4Address) -> Self {
        address.to_bits()
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(address: Ipv4Addr) -> Self {
        Ipv4Address::from_octets(address.octets())
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(address: Ipv4Address) -> Self {
        Ipv4Addr::from(address.octets())
    }
}

/// Parses a strict dotted-decimal address: four octets of one to three
/// decimal digits, each at most 255. Leading zeros are read as decimal.
pub fn parse_text_to_binary(text: &str) -> Result<Ipv4Address> {
    match parse_octets(text) {
        Some(octets) => Ok(Ipv4Address::from_octets(octets)),
        None => {
            debug!("rejecting address text {:?}", text);
            bail!(ErrorKind::InvalidAddressFormat(text.to_string()))
        }
    }
}

fn parse_octets(text: &str) -> Option<[u8; 4]> {
    let mut octets: [u8; 4] = [0; 4];
    let mut parts = text.split('.');

    for octet in octets.iter_mut() {
        *octet = parse_octet(parts.next()?)?;
    }

    if parts.next().is_some() {
        return None;
    }

    Some(octets)
}

fn parse_octet(part: &str) -> Option<u8> {
    if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // at most three digits, so this only fails above 255
    part.parse::<u8>().ok()
}

pub fn format_binary_to_text(address: Ipv4Address) -> String {
    address.to_string()
}

/// Writes the text form and a NUL terminator into `buffer`, returning the
/// text length. The buffer must hold at least `ADDRESS_TEXT_LEN` bytes.
pub fn format_into(address: Ipv4Address, buffer: &mut [u8]) -> Result<usize> {
    if buffer.len() < ADDRESS_TEXT_LEN {
        debug!("buffer of {} bytes cannot hold {}", buffer.len(), address);
        bail!(ErrorKind::BufferTooSmall(ADDRESS_TEXT_LEN, buffer.len()));
    }

    let text = format_binary_to_text(address);
    let n = text.len();
    buffer[..n].copy_from_slice(text.as_bytes());
    buffer[n] = 0;

    Ok(n)
}
