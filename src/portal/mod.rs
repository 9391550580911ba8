// Gateway module for the portal - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod actions;
mod session;

// Public re-exports - the ONLY way to access portal functionality
pub use session::{Portal, SessionState, View};
