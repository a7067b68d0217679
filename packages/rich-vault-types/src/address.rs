use std::{fmt, str::FromStr};

/// Number of bytes in an account or contract address
pub const ADDRESS_LEN: usize = 20;
const ADDRESS_HEX_LEN: usize = ADDRESS_LEN * 2;
const TX_HASH_LEN: usize = 32;

/// An account or contract address.
///
/// Text form is `0x` followed by exactly 40 hex digits in any case. Two addresses written with
/// different letter case are the same address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address([u8; ADDRESS_LEN]);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressParseError {
    MissingPrefix,
    BadLength(usize),
    InvalidHex,
}

impl fmt::Display for AddressParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressParseError::MissingPrefix => write!(f, "address must start with 0x"),
            AddressParseError::BadLength(len) => {
                write!(f, "address must have {ADDRESS_HEX_LEN} hex digits, got {len}")
            }
            AddressParseError::InvalidHex => write!(f, "address contains non hex characters"),
        }
    }
}

impl std::error::Error for AddressParseError {}

impl Address {
    /// Sentinel returned by the vault while no winner has been declared
    pub const ZERO: Address = Address([0; ADDRESS_LEN]);

    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Const parser backing the [`crate::address!`] macro. Panics (at compile time when used in a
    /// const) on malformed input.
    pub const fn from_str_const(s: &str) -> Self {
        let raw = s.as_bytes();
        assert!(
            raw.len() == ADDRESS_HEX_LEN + 2 && raw[0] == b'0' && raw[1] == b'x',
            "address literal must be 0x followed by 40 hex digits"
        );
        let mut bytes = [0_u8; ADDRESS_LEN];
        let mut i = 0;
        while i < ADDRESS_LEN {
            let hi = hex_nibble(raw[2 + 2 * i]);
            let lo = hex_nibble(raw[3 + 2 * i]);
            bytes[i] = (hi << 4) | lo;
            i += 1;
        }
        Self(bytes)
    }
}

const fn hex_nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex digit in address literal"),
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .ok_or(AddressParseError::MissingPrefix)?;
        if digits.len() != ADDRESS_HEX_LEN {
            return Err(AddressParseError::BadLength(digits.len()));
        }
        let mut bytes = [0_u8; ADDRESS_LEN];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| AddressParseError::InvalidHex)?;
        Ok(Self(bytes))
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

/// Hash of a broadcast transaction
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TxHash([u8; TX_HASH_LEN]);

impl TxHash {
    pub const fn new(bytes: [u8; TX_HASH_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; TX_HASH_LEN] {
        &self.0
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxHash({self})")
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

    use super::{Address, TxHash};

    impl Serialize for Address {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Address {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = String::deserialize(deserializer)?;
            raw.parse().map_err(D::Error::custom)
        }
    }

    impl Serialize for TxHash {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }
}
