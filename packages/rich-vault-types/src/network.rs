use crate::{address, Address};

#[cfg(all(feature = "base-sepolia", feature = "localnet"))]
compile_error!("'base-sepolia' and 'localnet' features are mutually exclusive");

cfg_if::cfg_if! {
    if #[cfg(feature = "base-sepolia")] {
        pub const CHAIN_ID: u64 = 84532;
        pub const FACTORY_ADDRESS: Address = address!("0xe147994f9064dc73a3f72dbf78704de9e6951623");
        pub const EXPLORER_URL: &str = "https://sepolia.basescan.org";
    } else if #[cfg(feature = "localnet")] {
        pub const CHAIN_ID: u64 = 31337;
        // First contract deployed by the default local dev account
        pub const FACTORY_ADDRESS: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");
        pub const EXPLORER_URL: &str = "http://localhost:8545";
    } else {
        compile_error!("At least one of 'base-sepolia' or 'localnet' feature need to be set");
    }
}
