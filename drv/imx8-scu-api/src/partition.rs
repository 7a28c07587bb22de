// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use ringbuf::*;

use crate::rm::{self, Partition, PartitionFlags, Perm, Resource};
use crate::{ScError, ScIpc};

#[derive(Copy, Clone, Debug, PartialEq)]
enum Trace {
    None,
    Secure(u8),
    NonSecure(u8),
    Pinned(u16),
    MovedAll,
    Shared(u16),
    Failed(ScError),
}

ringbuf!(Trace, 32, Trace::None);

/// Splits the SoC between the secure world and the OS at boot.
///
/// The caller's partition keeps the `secure` resources, which are marked
/// non-movable; every other movable resource and pin moves to a new
/// non-secure partition parented to it. That partition is then given full
/// access to the `ns_access` peripherals, which stay secure-owned but must
/// be programmed from the OS (the interrupt controller and interconnect).
///
/// Stops at the first error and returns it. Returns the new partition.
pub fn split_secure_partition<I: ScIpc + ?Sized>(
    ipc: &mut I,
    secure: &[Resource],
    ns_access: &[Resource],
) -> Result<Partition, ScError> {
    split(ipc, secure, ns_access).map_err(|e| {
        ringbuf_entry!(Trace::Failed(e));
        e
    })
}

fn split<I: ScIpc + ?Sized>(
    ipc: &mut I,
    secure: &[Resource],
    ns_access: &[Resource],
) -> Result<Partition, ScError> {
    let secure_pt = rm::get_partition(ipc)?;
    ringbuf_entry!(Trace::Secure(secure_pt.0));

    let os_pt = rm::partition_alloc(ipc, PartitionFlags::empty())?;
    rm::set_parent(ipc, os_pt, secure_pt)?;
    ringbuf_entry!(Trace::NonSecure(os_pt.0));

    for &r in secure {
        rm::set_resource_movable(ipc, r, r, false)?;
        ringbuf_entry!(Trace::Pinned(r.0));
    }

    rm::move_all(ipc, secure_pt, os_pt, true, true)?;
    ringbuf_entry!(Trace::MovedAll);

    for &r in ns_access {
        rm::set_peripheral_permissions(ipc, r, os_pt, Perm::Full)?;
        ringbuf_entry!(Trace::Shared(r.0));
    }

    Ok(os_pt)
}
