//! Creditline credit-management REST service.
//!
//! Customers take out credits paid back in installments; credits are looked
//! up by a generated credit code.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::credits;
pub use modules::customers;
