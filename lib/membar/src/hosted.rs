// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Stand-ins used when building for a development host.

use core::sync::atomic::{compiler_fence, fence, Ordering};

#[inline(always)]
pub fn dsb() {
    fence(Ordering::SeqCst);
}

#[inline(always)]
pub fn isb() {
    compiler_fence(Ordering::SeqCst);
}

#[inline(always)]
pub fn sev() {
    fence(Ordering::SeqCst);
}

#[inline(always)]
pub fn wfe() {
    core::hint::spin_loop();
}
