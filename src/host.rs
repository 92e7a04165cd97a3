//! Address of the machine running the hook

use crate::error::{ErrorCode, HookError, Result};
use std::net::ToSocketAddrs;

/// Resolves the local host's address
pub trait HostAddressResolver: Send + Sync {
    fn local_address(&self) -> Result<String>;
}

impl<F> HostAddressResolver for F
where
    F: Fn() -> Result<String> + Send + Sync,
{
    fn local_address(&self) -> Result<String> {
        self()
    }
}

/// Resolves the host name reported by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostAddress;

impl HostAddressResolver for SystemHostAddress {
    fn local_address(&self) -> Result<String> {
        let name = hostname::get().map_err(|e| {
            HookError::host_resolution(
                ErrorCode::HOST_NAME_UNAVAILABLE,
                "Failed to read local host name",
            )
            .with_source(e)
        })?;
        let name = name.to_string_lossy().into_owned();

        let mut addrs = (name.as_str(), 0).to_socket_addrs().map_err(|e| {
            HookError::host_resolution(
                ErrorCode::HOST_ADDRESS_UNRESOLVED,
                format!("Failed to resolve {}", name),
            )
            .with_source(e)
        })?;

        addrs.next().map(|addr| addr.ip().to_string()).ok_or_else(|| {
            HookError::host_resolution(
                ErrorCode::HOST_ADDRESS_UNRESOLVED,
                format!("No address found for {}", name),
            )
        })
    }
}
