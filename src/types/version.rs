use {crate::error::Error, log::warn, std::fmt};

/// A `X.Y.Z` version as stored in a `VERSION` file, optionally namespaced by
/// a protocol prefix (`solana-1.12.2`).
///
/// Fields keep the text read from the file. Only the field being incremented
/// is ever parsed, so the others are written back untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolVersion {
    pub protocol: Option<String>,
    pub major: String,
    pub minor: String,
    pub patch: String,
}

impl ProtocolVersion {
    /// Parses `raw`, requiring and stripping the `<protocol>-` prefix when a
    /// protocol is given.
    pub fn parse(raw: &str, protocol: Option<&str>) -> Result<Self, Error> {
        let unprefixed = match protocol {
            Some(protocol) => {
                let prefix = format!("{protocol}-");
                raw.strip_prefix(&prefix)
                    .ok_or_else(|| Error::PrefixMismatch {
                        version: raw.to_string(),
                        prefix,
                    })?
            }
            None => raw,
        };

        let parts: Vec<&str> = unprefixed.split('.').collect();
        let [major, minor, patch] = parts.as_slice() else {
            return Err(Error::InvalidFormat(unprefixed.to_string()));
        };

        Ok(Self {
            protocol: protocol.map(str::to_string),
            major: major.to_string(),
            minor: minor.to_string(),
            patch: patch.to_string(),
        })
    }

    /// The version without any protocol prefix, as passed to `make bump`.
    pub fn unprefixed(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.protocol {
            Some(protocol) => write!(f, "{protocol}-{}", self.unprefixed()),
            None => write!(f, "{}", self.unprefixed()),
        }
    }
}

/// Parses the leading ASCII digits of `s`.
///
/// Anything after the digits is ignored and a field without leading digits
/// (or one that overflows `u64`) yields 0. Returns the value and whether any
/// coercion happened.
pub fn parse_leading_u64(s: &str) -> (u64, bool) {
    let digits_len = s.bytes().take_while(u8::is_ascii_digit).count();
    let digits = &s[..digits_len];
    let coerced = digits_len != s.len();
    match digits.parse::<u64>() {
        Ok(n) => (n, coerced),
        Err(_) => (0, true),
    }
}

/// Leniently parses a version field and returns it incremented by one,
/// saturating at `u64::MAX`.
pub fn increment_field(name: &str, raw: &str) -> String {
    let (value, coerced) = parse_leading_u64(raw);
    if coerced {
        warn!("{name} version field {raw:?} is not a plain number, using {value}");
    }
    value.saturating_add(1).to_string()
}

#[cfg(test)]
mod tests {
    use {super::*, pretty_assertions::assert_eq};

    #[test]
    fn test_parse_leading_u64() {
        assert_eq!(parse_leading_u64("0"), (0, false));
        assert_eq!(parse_leading_u64("42"), (42, false));
        assert_eq!(parse_leading_u64("123"), (123, false));
        assert_eq!(parse_leading_u64("12abc"), (12, true));
        assert_eq!(parse_leading_u64("abc"), (0, true));
        assert_eq!(parse_leading_u64("invalid"), (0, true));
        assert_eq!(parse_leading_u64(""), (0, true));
        assert_eq!(parse_leading_u64("-3"), (0, true));
        assert_eq!(parse_leading_u64("+3"), (0, true));
        assert_eq!(parse_leading_u64(" 3"), (0, true));
        assert_eq!(parse_leading_u64("99999999999999999999999"), (0, true));
    }

    #[test]
    fn test_increment_field() {
        assert_eq!(increment_field("patch", "3"), "4");
        assert_eq!(increment_field("patch", "12abc"), "13");
        assert_eq!(increment_field("major", "v1"), "1");
        assert_eq!(increment_field("patch", &u64::MAX.to_string()), u64::MAX.to_string());
    }

    #[test]
    fn test_parse_plain() {
        let parsed = ProtocolVersion::parse("1.12.2", None).unwrap();
        assert_eq!(parsed.protocol, None);
        assert_eq!(
            (parsed.major.as_str(), parsed.minor.as_str(), parsed.patch.as_str()),
            ("1", "12", "2")
        );
        assert_eq!(parsed.to_string(), "1.12.2");
        assert_eq!(parsed.unprefixed(), "1.12.2");
    }

    #[test]
    fn test_parse_with_protocol() {
        let parsed = ProtocolVersion::parse("solana-1.12.2", Some("solana")).unwrap();
        assert_eq!(parsed.protocol.as_deref(), Some("solana"));
        assert_eq!(parsed.to_string(), "solana-1.12.2");
        assert_eq!(parsed.unprefixed(), "1.12.2");
    }

    #[test]
    fn test_parse_prefix_mismatch() {
        let err = ProtocolVersion::parse("1.12.2", Some("solana")).unwrap_err();
        assert!(matches!(
            err,
            Error::PrefixMismatch { ref version, ref prefix }
                if version == "1.12.2" && prefix == "solana-"
        ));

        // a different protocol's prefix is not accepted either
        let err = ProtocolVersion::parse("ethereum-1.0.0", Some("solana")).unwrap_err();
        assert!(matches!(err, Error::PrefixMismatch { .. }));
    }

    #[test]
    fn test_parse_invalid_format() {
        for raw in ["1.2", "1.2.3.4", "1", ""] {
            let err = ProtocolVersion::parse(raw, None).unwrap_err();
            assert!(
                matches!(err, Error::InvalidFormat(ref v) if v == raw),
                "{raw:?} should be rejected, got {err}"
            );
        }

        // the field count is checked after the prefix is stripped
        let err = ProtocolVersion::parse("solana-1.2", Some("solana")).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(ref v) if v == "1.2"));
    }

    #[test]
    fn test_parse_keeps_field_text() {
        for raw in ["v1.2.3", "01.2.3", "12abc.x.3-rc1"] {
            let parsed = ProtocolVersion::parse(raw, None).unwrap();
            assert_eq!(parsed.to_string(), raw);
        }
    }
}
