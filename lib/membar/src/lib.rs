// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Barrier and event instructions for code that coordinates several cores
//! through shared memory.
//!
//! The cross-core protocols this is written for rely on a precise ordering of
//! a plain store, a full-system data synchronization barrier, an event
//! broadcast, and an instruction synchronization barrier. Atomics alone do not
//! express the last two, so they are exposed here directly.
//!
//! On hosts other than AArch64 (i.e. when running unit tests) the operations
//! degrade to the nearest portable equivalent: barriers become `SeqCst`
//! fences and waiting for an event becomes a spin-loop hint.

#![no_std]

cfg_if::cfg_if! {
    if #[cfg(target_arch = "aarch64")] {
        mod aarch64;
        use aarch64 as arch;
    } else {
        mod hosted;
        use hosted as arch;
    }
}

/// Data synchronization barrier, full system: every memory access before the
/// barrier completes before any instruction after it executes.
#[inline(always)]
pub fn dsb() {
    arch::dsb();
}

/// Instruction synchronization barrier: flushes the pipeline so that nothing
/// after the barrier is executed speculatively ahead of it.
#[inline(always)]
pub fn isb() {
    arch::isb();
}

/// Send event: wakes every core of the cluster that is parked in [`wfe`].
#[inline(always)]
pub fn sev() {
    arch::sev();
}

/// Wait for event: parks this core in a low-power state until an event (from
/// [`sev`] or an interrupt) arrives. May return spuriously.
#[inline(always)]
pub fn wfe() {
    arch::wfe();
}
