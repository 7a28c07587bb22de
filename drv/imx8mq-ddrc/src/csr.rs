// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! DDR PHY register access and the trained-CSR snapshot.

use mmio::Mmio;
use ringbuf::*;

use crate::phy_tables::TRAINED_CSR_OFFSETS;
use crate::regs::phy;

/// Number of trained PHY registers carried across retention.
pub const TRAINED_CSR_COUNT: usize = TRAINED_CSR_OFFSETS.len();

#[derive(Copy, Clone, Debug, PartialEq)]
enum Trace {
    None,
    Captured(usize),
    CaptureSkipped,
    Restored(usize),
    Applied(usize),
}

ringbuf!(Trace, 8, Trace::None);

/// One PHY register: a 21-bit APB offset and the value it holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PhyReg {
    pub offset: u32,
    pub value: u32,
}

impl PhyReg {
    pub const fn new(offset: u32, value: u32) -> Self {
        Self { offset, value }
    }
}

/// The PHY's APB window. Each 16-bit PHY register occupies one 32-bit slot
/// of the system address map, so PHY offset `n` lives at `base + 4 * n`.
pub struct PhyApb<'a, M> {
    bus: &'a M,
    base: usize,
}

impl<'a, M: Mmio> PhyApb<'a, M> {
    pub fn new(bus: &'a M, base: usize) -> Self {
        Self { bus, base }
    }

    #[inline]
    fn addr(&self, offset: u32) -> usize {
        self.base + 4 * offset as usize
    }

    pub fn read(&self, offset: u32) -> u32 {
        self.bus.read32(self.addr(offset))
    }

    pub fn write(&self, offset: u32, value: u32) {
        self.bus.write32(self.addr(offset), value)
    }

    /// Blocks until the PHY register satisfies `done`. No deadline.
    pub fn spin_until(&self, offset: u32, done: impl FnMut(u32) -> bool) {
        mmio::spin_until(self.bus, self.addr(offset), done);
    }

    /// Writes every entry of a static table, in table order.
    pub fn apply_fixed(&self, table: &[PhyReg]) {
        for reg in table {
            self.write(reg.offset, reg.value);
        }
        ringbuf_entry!(Trace::Applied(table.len()));
    }
}

/// Values of the trained PHY registers, captured once from the live PHY and
/// written back on every retention exit.
pub struct TrainedCsrStore {
    values: [u32; TRAINED_CSR_COUNT],
    saved: bool,
}

impl TrainedCsrStore {
    pub const fn new() -> Self {
        Self {
            values: [0; TRAINED_CSR_COUNT],
            saved: false,
        }
    }

    /// Whether a capture has happened. Never goes back to `false`.
    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// Reads every trained register out of the PHY.
    ///
    /// The PHY only lets its CSRs be read back with the microcontroller mux
    /// handed to the APB and the microcontroller clocks running, so the loop
    /// is bracketed by switching both on and back off.
    pub fn capture<M: Mmio>(&mut self, apb: &PhyApb<'_, M>) {
        apb.write(phy::MICRO_CONT_MUX_SEL, 0x0);
        apb.write(phy::UCCLK_HCLK_ENABLES, 0x3);

        for (value, &offset) in
            self.values.iter_mut().zip(TRAINED_CSR_OFFSETS.iter())
        {
            *value = apb.read(offset);
        }

        apb.write(phy::UCCLK_HCLK_ENABLES, 0x0);
        apb.write(phy::MICRO_CONT_MUX_SEL, 0x1);
        ringbuf_entry!(Trace::Captured(TRAINED_CSR_COUNT));
    }

    /// Captures unless a previous call already has. Trained values do not
    /// change across retention cycles, and reading them back after the first
    /// cycle would read a PHY that has been through power removal.
    ///
    /// Returns whether a capture was performed.
    pub fn capture_once<M: Mmio>(&mut self, apb: &PhyApb<'_, M>) -> bool {
        if self.saved {
            ringbuf_entry!(Trace::CaptureSkipped);
            return false;
        }
        self.capture(apb);
        self.saved = true;
        true
    }

    /// Writes the stored values back, in table order. Some offsets alias PHY
    /// state machines that must be programmed in sequence, so the order is
    /// part of the contract.
    pub fn restore<M: Mmio>(&self, apb: &PhyApb<'_, M>) {
        for (&offset, &value) in
            TRAINED_CSR_OFFSETS.iter().zip(self.values.iter())
        {
            apb.write(offset, value);
        }
        ringbuf_entry!(Trace::Restored(TRAINED_CSR_COUNT));
    }

    pub fn iter(&self) -> impl Iterator<Item = PhyReg> + '_ {
        TRAINED_CSR_OFFSETS
            .iter()
            .zip(self.values.iter())
            .map(|(&offset, &value)| PhyReg::new(offset, value))
    }
}

impl Default for TrainedCsrStore {
    fn default() -> Self {
        Self::new()
    }
}
