// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 32-bit memory-mapped register access.
//!
//! Drivers are written against the [`Mmio`] trait rather than raw pointers so
//! that the same sequencing code runs against silicon (through [`Volatile`])
//! and against a simulated register file in tests. Every access is a single
//! aligned 32-bit little-endian load or store, issued in program order and
//! blocking until the interconnect completes it.
//!
//! Methods take `&self`: device registers are shared by every core in the
//! system and carry their own side effects, so exclusive borrows would model
//! nothing real.

#![cfg_attr(not(test), no_std)]

pub trait Mmio {
    fn read32(&self, addr: usize) -> u32;
    fn write32(&self, addr: usize, value: u32);

    /// Read-modify-write. Not atomic with respect to other bus masters.
    fn modify32(&self, addr: usize, f: impl FnOnce(u32) -> u32)
    where
        Self: Sized,
    {
        let v = self.read32(addr);
        self.write32(addr, f(v));
    }

    fn set_bits32(&self, addr: usize, bits: u32)
    where
        Self: Sized,
    {
        self.modify32(addr, |v| v | bits);
    }

    fn clear_bits32(&self, addr: usize, bits: u32)
    where
        Self: Sized,
    {
        self.modify32(addr, |v| v & !bits);
    }
}

impl<M: Mmio> Mmio for &M {
    fn read32(&self, addr: usize) -> u32 {
        (**self).read32(addr)
    }

    fn write32(&self, addr: usize, value: u32) {
        (**self).write32(addr, value)
    }
}

/// Register access through volatile loads and stores of physical addresses.
///
/// Only meaningful with the MMU off or with the register blocks identity
/// mapped as device memory.
#[derive(Copy, Clone, Debug)]
pub struct Volatile {
    _private: (),
}

impl Volatile {
    /// # Safety
    ///
    /// Every address later passed to [`Mmio::read32`] or [`Mmio::write32`]
    /// must be a 4-byte aligned device register that is mapped at that
    /// address, and writing to it must not alias memory Rust owns.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl Mmio for Volatile {
    #[inline(always)]
    fn read32(&self, addr: usize) -> u32 {
        // Safety: guaranteed by the contract of `Volatile::new`.
        unsafe { core::ptr::read_volatile(addr as *const u32) }
    }

    #[inline(always)]
    fn write32(&self, addr: usize, value: u32) {
        // Safety: guaranteed by the contract of `Volatile::new`.
        unsafe { core::ptr::write_volatile(addr as *mut u32, value) }
    }
}

/// Reads `addr` until `done` accepts the value, and returns that value.
///
/// There is no deadline. Hardware that never reaches the expected state is a
/// fault software cannot unwind from; the watchdog owns that case.
#[inline]
pub fn spin_until<M: Mmio>(
    bus: &M,
    addr: usize,
    mut done: impl FnMut(u32) -> bool,
) -> u32 {
    loop {
        let v = bus.read32(addr);
        if done(v) {
            return v;
        }
        core::hint::spin_loop();
    }
}

/// Burns roughly `iterations` loop iterations. Used where the hardware needs
/// a short settling time after a write and exposes no status to poll.
#[inline(never)]
pub fn settle(iterations: u32) {
    for _ in 0..iterations {
        core::hint::spin_loop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    #[derive(Default)]
    struct Fake {
        regs: RefCell<HashMap<usize, u32>>,
        reads: Cell<usize>,
    }

    impl Mmio for Fake {
        fn read32(&self, addr: usize) -> u32 {
            self.reads.set(self.reads.get() + 1);
            // A counter register that advances on each read.
            if addr == 0x40 {
                return self.reads.get() as u32;
            }
            self.regs.borrow().get(&addr).copied().unwrap_or(0)
        }

        fn write32(&self, addr: usize, value: u32) {
            self.regs.borrow_mut().insert(addr, value);
        }
    }

    #[test]
    fn modify_preserves_other_bits() {
        let bus = Fake::default();
        bus.write32(0x10, 0xc000_0000);
        bus.set_bits32(0x10, 0x3);
        assert_eq!(bus.read32(0x10), 0xc000_0003);
        bus.clear_bits32(0x10, 0x8000_0001);
        assert_eq!(bus.read32(0x10), 0x4000_0002);
    }

    #[test]
    fn spin_until_returns_first_accepted_value() {
        let bus = Fake::default();
        let v = spin_until(&bus, 0x40, |v| v >= 5);
        assert_eq!(v, 5);
        assert_eq!(bus.reads.get(), 5);
    }

    #[test]
    fn borrowed_bus_forwards() {
        let bus = Fake::default();
        let by_ref = &bus;
        by_ref.write32(0x8, 0x1234);
        assert_eq!(Mmio::read32(&by_ref, 0x8), 0x1234);
    }
}
