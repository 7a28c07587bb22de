// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! AArch64 implementations.
//!
//! `nomem` is deliberately left off the barriers so the compiler treats them
//! as touching memory and keeps loads and stores on their side of the
//! instruction. The trailing compiler fence covers the same ground for
//! optimizations that ignore `asm!` clobbers.

use core::arch::asm;
use core::sync::atomic::{compiler_fence, Ordering};

#[inline(always)]
pub fn dsb() {
    unsafe {
        asm!("dsb sy", options(nostack, preserves_flags));
    }
    compiler_fence(Ordering::SeqCst);
}

#[inline(always)]
pub fn isb() {
    unsafe {
        asm!("isb", options(nostack, preserves_flags));
    }
    compiler_fence(Ordering::SeqCst);
}

#[inline(always)]
pub fn sev() {
    unsafe {
        asm!("sev", options(nostack, preserves_flags));
    }
}

#[inline(always)]
pub fn wfe() {
    unsafe {
        asm!("wfe", options(nostack, preserves_flags));
    }
}
