// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The calling core, as seen by the rendezvous.

/// Operations of the core executing a firmware call.
pub trait Cpu {
    /// Affinity-level-0 index of this core within the cluster.
    fn core_id(&self) -> usize;

    /// Parks until an event or interrupt arrives. May return spuriously.
    fn wait_for_event(&self);

    /// Wakes every core parked in [`Cpu::wait_for_event`].
    fn send_event(&self);

    /// Full-system data synchronization barrier.
    fn dsb(&self);

    /// Instruction synchronization barrier.
    fn isb(&self);
}

cfg_if::cfg_if! {
    if #[cfg(target_arch = "aarch64")] {
        /// The Cortex-A53 core this code is running on.
        #[derive(Copy, Clone, Debug, Default)]
        pub struct ThisCore;

        impl Cpu for ThisCore {
            fn core_id(&self) -> usize {
                let mpidr: u64;
                // Safety: MPIDR_EL1 is a read-only identification register.
                unsafe {
                    core::arch::asm!(
                        "mrs {}, mpidr_el1",
                        out(reg) mpidr,
                        options(nomem, nostack, preserves_flags),
                    );
                }
                (mpidr & 0xff) as usize
            }

            fn wait_for_event(&self) {
                membar::wfe();
            }

            fn send_event(&self) {
                membar::sev();
            }

            fn dsb(&self) {
                membar::dsb();
            }

            fn isb(&self) {
                membar::isb();
            }
        }
    }
}
