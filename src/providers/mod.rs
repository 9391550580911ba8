// Gateway module for providers - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod static_backend;
mod traits;
mod types;

// Public re-exports - the ONLY way to access provider functionality
pub use static_backend::StaticBackend;
pub use traits::{ConfigProvider, CredentialValidator, StatusProvider};
pub use types::VpnStatus;

#[cfg(test)]
pub use traits::{MockConfigProvider, MockCredentialValidator, MockStatusProvider};
