use ipv4_codec::ConversionResult;

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn ip_parser(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_ip-parser"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("could not start ip-parser");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin)
        .expect("could not write to ip-parser");

    child.wait_with_output().expect("ip-parser did not finish")
}

#[test]
fn test_demo_prints_address() {
    let out = Command::new(env!("CARGO_BIN_EXE_ipv4-codec"))
        .env_remove("IPV4_CODEC_LOG_LEVEL")
        .output()
        .unwrap();

    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "The IPv4 address is: 10.12.110.57\n"
    );
}

#[test]
fn test_parser_writes_octets() {
    let out = ip_parser(&["10.12.110.57"], b"");
    assert!(out.status.success());
    assert_eq!(out.stdout, vec![10, 12, 110, 57]);
}

#[test]
fn test_parser_hex() {
    let out = ip_parser(&["-x", "255.0.127.1"], b"");
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "ff007f01\n");
}

#[test]
fn test_parser_reverse() {
    let out = ip_parser(&["-r"], &[10, 12, 110, 57]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "10.12.110.57\n");
}

#[test]
fn test_parser_reverse_short_input() {
    let out = ip_parser(&["-r"], &[10, 12, 110]);
    assert!(!out.status.success());
    assert!(String::from_utf8(out.stderr)
        .unwrap()
        .contains("expected 4 address octets, got 3"));
}

#[test]
fn test_parser_rejects_bad_address() {
    let out = ip_parser(&["10.12.110.256"], b"");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8(out.stderr)
        .unwrap()
        .contains("10.12.110.256"));
}

#[test]
fn test_parser_json() {
    let out = ip_parser(&["-j", "10.12.110.57"], b"");
    assert!(out.status.success());

    let r: ConversionResult = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(
        r,
        ConversionResult::Address {
            text: "10.12.110.57".to_string(),
            binary: 0x0a0c_6e39,
        }
    );

    let out = ip_parser(&["-j", "10.12.110"], b"");
    assert!(!out.status.success());

    let r: ConversionResult = serde_json::from_slice(&out.stdout).unwrap();
    match r {
        ConversionResult::Error(m) => assert!(m.contains("10.12.110")),
        a => panic!("expected an error, got {:?}", a),
    }
}
