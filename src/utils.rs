/// Platform-specific utilities for cross-platform compatibility
pub mod platform;
