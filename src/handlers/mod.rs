// Handler modules
pub mod create;
pub mod init;
pub mod regions;
pub mod utils;

// Re-export all handler functions
pub use create::handle_create;
pub use init::handle_init;
pub use regions::handle_regions;
