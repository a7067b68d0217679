pub mod handler_create_vault;
pub mod handler_list_vaults;
pub mod handler_read_vault;
pub mod handler_vault_actions;
pub mod handler_watch_vault;
