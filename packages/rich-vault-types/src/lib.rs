//! Types shared between the rich vault client and its callers.
//!
//! Everything here is plain data: addresses and hashes as they appear on chain, and the
//! per-participant invitation status of a vault.

pub mod address;
pub mod network;
pub mod status;

pub use num_enum;

pub use crate::{
    address::{Address, AddressParseError, TxHash, ADDRESS_LEN},
    status::ParticipantStatus,
};

/// Build an [`Address`] from a `0x` prefixed literal at compile time.
///
/// ```
/// use rich_vault_types::{address, Address};
///
/// const FACTORY: Address = address!("0xe147994f9064dc73a3f72dbf78704de9e6951623");
/// assert_eq!(FACTORY.to_string(), "0xe147994f9064dc73a3f72dbf78704de9e6951623");
/// ```
#[macro_export]
macro_rules! address {
    ($literal:literal) => {
        $crate::Address::from_str_const($literal)
    };
}
