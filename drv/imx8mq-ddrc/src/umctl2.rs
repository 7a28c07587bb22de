// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! uMCTL2 base configuration for 3200 MT/s LPDDR4.
//!
//! The controller loses every register across retention, so this whole table
//! is written on each exit before the controller is told to resume from
//! self-refresh. Writes go out in table order; a few registers (DBG1,
//! PCTRL_0, ODTCFG) appear twice and the later value is the one that sticks.

use mmio::Mmio;

use crate::regs::ddrc;

/// One uMCTL2 register write, offset relative to the controller base.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CtlReg {
    pub offset: usize,
    pub value: u32,
}

impl CtlReg {
    pub const fn new(offset: usize, value: u32) -> Self {
        Self { offset, value }
    }
}

pub static UMCTL2_CONFIG: [CtlReg; 74] = [
    CtlReg::new(ddrc::DBG1, 0x00000001),
    CtlReg::new(ddrc::PWRCTL, 0x00000001),
    CtlReg::new(ddrc::MSTR, 0x83080020),
    CtlReg::new(0x64, 0x006180e0),
    CtlReg::new(ddrc::INIT0, 0xc003061b),
    CtlReg::new(0xd4, 0x009d0000),
    CtlReg::new(0xd8, 0x0000fe05),
    CtlReg::new(0xdc, 0x00d4002d),
    CtlReg::new(0xe0, 0x00310008),
    CtlReg::new(0xe4, 0x00040009),
    CtlReg::new(0xe8, 0x0046004d),
    CtlReg::new(0xec, 0x0005004d),
    CtlReg::new(0xf4, 0x00000979),
    CtlReg::new(0x100, 0x1a203522),
    CtlReg::new(0x104, 0x00060630),
    CtlReg::new(0x108, 0x070e1214),
    CtlReg::new(0x10c, 0x00b0c006),
    CtlReg::new(0x110, 0x0f04080f),
    CtlReg::new(0x114, 0x0d0d0c0c),
    CtlReg::new(0x118, 0x01010007),
    CtlReg::new(0x11c, 0x0000060a),
    CtlReg::new(0x120, 0x01010101),
    CtlReg::new(0x124, 0x40000008),
    CtlReg::new(0x128, 0x00050d01),
    CtlReg::new(0x12c, 0x01010008),
    CtlReg::new(0x130, 0x00020000),
    CtlReg::new(0x134, 0x18100002),
    CtlReg::new(0x138, 0x00000dc2),
    CtlReg::new(0x13c, 0x80000000),
    CtlReg::new(0x144, 0x00a00050),
    CtlReg::new(0x180, 0x53200018),
    CtlReg::new(0x184, 0x02800070),
    CtlReg::new(0x188, 0x00000000),
    CtlReg::new(0x190, 0x0397820a),
    CtlReg::new(0x194, 0x00020103),
    CtlReg::new(0x1a0, 0xe0400018),
    CtlReg::new(0x1a4, 0x00df00e4),
    CtlReg::new(0x1a8, 0x00000000),
    CtlReg::new(ddrc::DFIMISC, 0x00000011),
    CtlReg::new(0x1b4, 0x0000170a),
    CtlReg::new(0x1c0, 0x00000001),
    CtlReg::new(0x1c4, 0x00000000),
    // Address map from bit 29 down: r15, r14, cs, r13-r0, b2-b0, c9-c0.
    CtlReg::new(ddrc::ADDRMAP0, 0x00000015),
    CtlReg::new(ddrc::ADDRMAP4, 0x00001f1f),
    // Bank interleave.
    CtlReg::new(ddrc::ADDRMAP1, 0x00080808),
    CtlReg::new(ddrc::ADDRMAP5, 0x07070707),
    CtlReg::new(ddrc::ADDRMAP6, 0x08080707),
    CtlReg::new(ddrc::ODTCFG, 0x020f0c54),
    CtlReg::new(ddrc::ODTMAP, 0x00000000),
    CtlReg::new(ddrc::PCTRL_0, 0x00000001),
    // Scheduling, ODT and port QoS.
    CtlReg::new(ddrc::ODTCFG, 0x0b060908),
    CtlReg::new(ddrc::ODTMAP, 0x00000000),
    CtlReg::new(ddrc::SCHED, 0x29511505),
    CtlReg::new(ddrc::SCHED1, 0x0000002c),
    CtlReg::new(ddrc::PERFHPR1, 0x5900575b),
    CtlReg::new(ddrc::PERFLPR1, 0x900093e7),
    CtlReg::new(ddrc::PERFWR1, 0x02005574),
    CtlReg::new(ddrc::DBG0, 0x00000016),
    CtlReg::new(ddrc::DBG1, 0x00000000),
    CtlReg::new(ddrc::DBGCMD, 0x00000000),
    CtlReg::new(ddrc::SWCTL, 0x00000001),
    CtlReg::new(ddrc::POISONCFG, 0x00000011),
    CtlReg::new(ddrc::PCCFG, 0x00000111),
    CtlReg::new(ddrc::PCFGR_0, 0x000010f3),
    CtlReg::new(ddrc::PCFGW_0, 0x000072ff),
    CtlReg::new(ddrc::PCTRL_0, 0x00000001),
    CtlReg::new(ddrc::PCFGQOS0_0, 0x01110d00),
    CtlReg::new(ddrc::PCFGQOS1_0, 0x00620790),
    CtlReg::new(ddrc::PCFGWQOS0_0, 0x00100001),
    CtlReg::new(ddrc::PCFGWQOS1_0, 0x0000041f),
    CtlReg::new(ddrc::FREQ1_DERATEEN, 0x00000202),
    CtlReg::new(ddrc::FREQ1_DERATEINT, 0xec78f4b5),
    CtlReg::new(ddrc::FREQ1_RFSHCTL0, 0x00618040),
    CtlReg::new(ddrc::FREQ1_RFSHTMG, 0x00610090),];

/// Programs the full controller configuration.
pub fn configure_umctl2<M: Mmio>(bus: &M, ddrc_base: usize) {
    for reg in UMCTL2_CONFIG.iter() {
        bus.write32(ddrc_base + reg.offset, reg.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimSoc;
    use crate::PlatformConfig;

    #[test]
    fn writes_whole_table_in_order() {
        let cfg = PlatformConfig::IMX8MQ;
        let sim = SimSoc::new();
        configure_umctl2(&sim, cfg.ddrc_base);

        let writes = sim.writes_in(cfg.ddrc_base, 0x3000);
        assert_eq!(writes.len(), UMCTL2_CONFIG.len());
        for (w, reg) in writes.iter().zip(UMCTL2_CONFIG.iter()) {
            assert_eq!(*w, (cfg.ddrc_base + reg.offset, reg.value));
        }
        assert_eq!(sim.ddrc(ddrc::MSTR), 0x8308_0020);
        assert_eq!(sim.ddrc(ddrc::FREQ1_RFSHTMG), 0x0061_0090);
    }

    #[test]
    fn table_leaves_quasi_dynamic_programming_enabled() {
        let last_swctl = UMCTL2_CONFIG
            .iter()
            .rev()
            .find(|r| r.offset == ddrc::SWCTL)
            .map(|r| r.value);
        assert_eq!(last_swctl, Some(1));
    }
}
