pub mod participant;
pub mod vault;

pub use participant::ParticipantRecord;
pub use vault::{VaultDisplayStatus, VaultSummary, VaultView};
