// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Live DRAM frequency change through the controller's hardware fast
//! frequency change (HWFFC) block.
//!
//! The DRAM keeps two frequency set points (FSPs). HWFFC programs the idle
//! one with the new timings, hands the clock change to the GPC/CCM through
//! the `csysreq`/`csysack` handshake, and finishes on the other set point.
//! Nothing here may touch DRAM: by the time this runs every other core has
//! to be parked (see [`crate::rendezvous`]).

use mmio::{spin_until, Mmio};
use ringbuf::*;

use crate::regs::{
    ccm, ddrc, gpc, DbgCam, DfiMisc, GpcDdrHandshake, GpcFreqRequest,
    HwffcCtl, HwffcStat, Mstr, Mstr2, PwrCtl, Stat, SwStat, TargetRoot,
};
use crate::PlatformConfig;

#[derive(Copy, Clone, Debug, PartialEq)]
enum Trace {
    None,
    Start {
        fsp: u32,
        vrcg: u32,
        selector: u32,
        drain: bool,
    },
    Drained,
    Clock(DramClock),
    ActiveSlot(u32),
    Done,
}

ringbuf!(Trace, 16, Trace::None);

/// The clock trees a frequency selector can put the DRAM on. There is no
/// fourth option: selectors other than 1 and 2 all mean the full rate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DramClock {
    /// `dram_alt` from source 5 (400 MHz), DRAM PLL bypassed.
    Alt400MHz,
    /// `dram_alt` from source 2 (100 MHz), DRAM PLL bypassed.
    Alt100MHz,
    /// DRAM PLL at 800 MHz, 3200 MT/s.
    Pll3200Mts,
}

impl DramClock {
    pub fn for_selector(selector: u32) -> Self {
        match selector {
            1 => DramClock::Alt400MHz,
            2 => DramClock::Alt100MHz,
            _ => DramClock::Pll3200Mts,
        }
    }

    /// Reprograms the CCM roots feeding the DRAM core and APB clocks.
    pub fn apply<M: Mmio>(self, bus: &M, ccm_base: usize) {
        let wr = |offset, value: TargetRoot| {
            bus.write32(ccm_base + offset, value.0)
        };

        match self {
            DramClock::Alt400MHz | DramClock::Alt100MHz => {
                let alt = if self == DramClock::Alt400MHz { 5 } else { 2 };
                wr(ccm::DRAM_ALT_CLR, TargetRoot::all());
                wr(ccm::DRAM_ALT_SET, TargetRoot::source(alt, 0));

                // dram_apb from source 2 (40 MHz), divided by 2.
                wr(ccm::DRAM_APB_CLR, TargetRoot::all());
                wr(ccm::DRAM_APB_SET, TargetRoot::source(2, 1));

                bus.write32(
                    ccm_base + ccm::DRAM_SEL_CFG_SET,
                    ccm::DRAM_SEL_BYPASS_PLL,
                );
            }
            DramClock::Pll3200Mts => {
                // dram_apb from source 4 (800 MHz), divided by 4.
                wr(ccm::DRAM_APB_CLR, TargetRoot::all());
                wr(ccm::DRAM_APB_SET, TargetRoot::source(4, 3));

                bus.write32(
                    ccm_base + ccm::DRAM_SEL_CFG_CLR,
                    ccm::DRAM_SEL_BYPASS_PLL,
                );
            }
        }
    }
}

/// Switches the DRAM to the clock picked by `selector`.
///
/// `fsp` and `vrcg` describe the set point and VRCG state the DRAM is in
/// now. With `drain`, the controller's data pipelines must empty before the
/// switch is requested. On return the DRAM runs on the other set point; the
/// caller owns flipping its copy of `fsp`.
///
/// Every wait is unbounded.
pub fn switch_frequency<M: Mmio>(
    bus: &M,
    cfg: &PlatformConfig,
    vrcg: u32,
    fsp: u32,
    selector: u32,
    drain: bool,
) {
    let reg = |offset| cfg.ddrc_base + offset;
    let handshake = cfg.gpc_base + gpc::DDR1_HANDSHAKE;

    ringbuf_entry!(Trace::Start {
        fsp,
        vrcg,
        selector,
        drain
    });

    bus.write32(reg(ddrc::HWFFCCTL), HwffcCtl::enter(fsp, vrcg).0);

    bus.write32(reg(ddrc::SWCTL), 0);
    bus.write32(reg(ddrc::DFIMISC), DfiMisc::hwffc_ready().0);
    bus.write32(reg(ddrc::SWCTL), 1);
    spin_until(bus, reg(ddrc::SWSTAT), |v| SwStat(v).sw_done_ack());

    if drain {
        spin_until(bus, reg(ddrc::DBGCAM), |v| DbgCam(v).is_drained());
        ringbuf_entry!(Trace::Drained);
    }

    bus.modify32(cfg.gpc_base + gpc::DDR1_FREQ_REQ, |v| {
        let mut req = GpcFreqRequest(v);
        req.set_csysdisdrain(drain);
        req.set_csysfrequency(selector & 0b11);
        req.set_csysmode(true);
        req.0
    });

    bus.modify32(handshake, |v| {
        let mut h = GpcDdrHandshake(v);
        h.set_csysreq(false);
        h.0
    });
    spin_until(bus, handshake, |v| !GpcDdrHandshake(v).csysack());

    let clock = DramClock::for_selector(selector);
    clock.apply(bus, cfg.ccm_base);
    ringbuf_entry!(Trace::Clock(clock));

    bus.modify32(handshake, |v| {
        let mut h = GpcDdrHandshake(v);
        h.set_csysreq(true);
        h.0
    });
    spin_until(bus, handshake, |v| GpcDdrHandshake(v).csysack());

    bus.write32(reg(ddrc::HWFFCCTL), HwffcCtl::exit().0);
    spin_until(bus, reg(ddrc::HWFFCSTAT), |v| !HwffcStat(v).in_progress());

    // The controller reports which set point it landed on; mirror that
    // rather than assume.
    bus.write32(reg(ddrc::SWCTL), 0);
    bus.modify32(reg(ddrc::MSTR), |v| {
        let mut m = Mstr(v);
        m.set_frequency_mode(true);
        m.0
    });
    let slot =
        HwffcStat(bus.read32(reg(ddrc::HWFFCSTAT))).current_frequency();
    bus.modify32(reg(ddrc::MSTR2), |v| {
        let mut m = Mstr2(v);
        m.set_target_frequency(slot);
        m.0
    });
    ringbuf_entry!(Trace::ActiveSlot(slot));

    bus.write32(reg(ddrc::SWCTL), 1);
    bus.write32(reg(ddrc::HWFFCCTL), HwffcCtl::idle().0);

    // A pass through self-refresh settles the controller on the new clock.
    bus.write32(reg(ddrc::PWRCTL), PwrCtl::lpddr4_self_refresh().0);
    spin_until(bus, reg(ddrc::STAT), |v| {
        Stat(v).operating_mode() & 0b11 == ddrc::OPERATING_MODE_SELF_REFRESH
    });
    spin_until(bus, reg(ddrc::STAT), |v| Stat(v).selfref_type() != 0);

    // CRCPARSTAT is clear-on-read; the switch can leave stale parity status.
    let _ = bus.read32(reg(ddrc::CRCPARSTAT));
    let _ = bus.read32(reg(ddrc::CRCPARSTAT));

    bus.write32(reg(ddrc::PWRCTL), PwrCtl::lpddr4_self_refresh_exit().0);
    spin_until(bus, reg(ddrc::STAT), |v| {
        Stat(v).operating_mode() & 0b11 == ddrc::OPERATING_MODE_NORMAL
    });

    ringbuf_entry!(Trace::Done);
}
