// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client for the i.MX8 system controller (SCU) RPC protocol.
//!
//! The SCU is a separate core that owns power, clocks, pads and resource
//! partitioning. Requests are fixed-format messages of up to eight 32-bit
//! words handed to it over a messaging unit; each carries a service id, a
//! function id and a packed payload, and the reply reuses the function byte
//! for the result code.
//!
//! Nothing in here retries. A nonzero result comes back to the caller as a
//! [`ScError`] exactly as the SCU reported it.

#![cfg_attr(not(test), no_std)]

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

mod msg;
mod mu;
pub mod pad;
mod partition;
pub mod rm;

#[cfg(test)]
mod fake;

pub use msg::{RpcMsg, Service, SC_RPC_MAX_MSG, SC_RPC_VERSION};
pub use mu::Mu;
pub use partition::split_secure_partition;

/// Error codes returned by the SCU. Zero means success and never appears
/// here.
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromPrimitive)]
#[repr(u8)]
pub enum ScError {
    /// Incompatible protocol version.
    Version = 1,
    /// Configuration error.
    Config,
    /// Bad parameter.
    Parm,
    /// Permission error (no access).
    NoAccess,
    /// Permission error (locked).
    Locked,
    /// Unavailable (out of resources).
    Unavailable,
    NotFound,
    /// No power.
    NoPower,
    /// Generic IPC error. Also reported for malformed replies and for result
    /// codes this client does not know.
    Ipc,
    /// Resource is currently busy or active.
    Busy,
    /// General I/O failure.
    Fail,
}

impl ScError {
    /// Decodes a result byte from a reply.
    pub fn check(code: u8) -> Result<(), ScError> {
        match code {
            0 => Ok(()),
            c => Err(ScError::from_u8(c).unwrap_or(ScError::Ipc)),
        }
    }
}

impl From<ScError> for u8 {
    fn from(e: ScError) -> Self {
        e as u8
    }
}

/// A blocking channel to the SCU.
pub trait ScIpc {
    /// Sends `msg` and, unless `no_resp` is set, overwrites it with the
    /// reply.
    ///
    /// An `Err` here is a transport failure (for instance a reply whose size
    /// field is out of range); the SCU's own result code is left in the
    /// reply for the caller to decode.
    fn call(
        &mut self,
        msg: &mut RpcMsg,
        no_resp: bool,
    ) -> Result<(), ScError>;
}

impl<T: ScIpc + ?Sized> ScIpc for &mut T {
    fn call(
        &mut self,
        msg: &mut RpcMsg,
        no_resp: bool,
    ) -> Result<(), ScError> {
        (**self).call(msg, no_resp)
    }
}

/// Sends a request that expects a reply and decodes the result byte.
pub(crate) fn transact<I: ScIpc + ?Sized>(
    ipc: &mut I,
    msg: &mut RpcMsg,
) -> Result<(), ScError> {
    ipc.call(msg, false)?;
    ScError::check(msg.result())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_codes() {
        assert_eq!(ScError::check(0), Ok(()));
        assert_eq!(ScError::check(1), Err(ScError::Version));
        assert_eq!(ScError::check(4), Err(ScError::NoAccess));
        assert_eq!(ScError::check(9), Err(ScError::Ipc));
        assert_eq!(ScError::check(11), Err(ScError::Fail));
    }

    #[test]
    fn unknown_result_codes_are_ipc_errors() {
        for code in 12..=u8::MAX {
            assert_eq!(ScError::check(code), Err(ScError::Ipc));
        }
    }

    #[test]
    fn error_codes_round_trip() {
        for code in 1..=11u8 {
            let e = ScError::from_u8(code).unwrap();
            assert_eq!(u8::from(e), code);
        }
    }
}
