pub mod format;
pub mod validation;

pub use format::{short_address, status_label};
pub use validation::{parse_wealth, validate_participants, validate_vault_name};
