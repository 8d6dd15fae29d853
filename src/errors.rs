error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Json(::serde_json::Error);
    }

    errors {
        InvalidAddressFormat(text: String) {
            description("invalid dotted-decimal IPv4 address")
            display("'{}' is not a dotted-decimal IPv4 address", text)
        }

        BufferTooSmall(needed: usize, got: usize) {
            description("output buffer too small")
            display("address text needs a buffer of {} bytes, got {}", needed, got)
        }

        ShortInput(got: usize) {
            description("not enough address octets")
            display("expected 4 address octets, got {}", got)
        }
    }
}
