pub mod backup;
pub mod compare;
pub mod config;
pub mod inspect;
pub mod scan;

/// Result type shared by all commands
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;
