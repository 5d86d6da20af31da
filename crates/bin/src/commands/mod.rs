//! One module per group of subcommands.

pub mod add;
pub mod edit;
pub mod inventory;
