// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LPDDR4 I/O retention entry and exit.
//!
//! On entry the DRAM is put in self-refresh, the PHY is walked into its
//! LP3/IO retention state, and the DDR subsystem is isolated so that its core
//! supplies can be removed. VDDQ has to stay up. On exit the subsystem is
//! powered, clocked and reset in order, the controller is reprogrammed from
//! scratch, the PHY gets its saved training back, and the DRAM is brought
//! out of self-refresh without being reinitialized.
//!
//! Every wait is an unbounded poll. A sequence that stops halfway leaves the
//! DRAM in a state software cannot unwind, so a hang here is for the
//! watchdog to handle.

use mmio::{settle, spin_until, Mmio};
use ringbuf::*;

use crate::csr::{PhyApb, TrainedCsrStore};
use crate::phy_tables::{PHY_POST_RESTORE, PHY_PRE_RESTORE};
use crate::regs::{
    anatop, ccm, ddr_ss, ddrc, gpc, phy, src, DbgCam, DfiMisc, DfiStat,
    GpcDdrHandshake, Init0, PwrCtl, Stat, SwStat,
};
use crate::umctl2::configure_umctl2;
use crate::PlatformConfig;

#[derive(Copy, Clone, Debug, PartialEq)]
enum Trace {
    None,
    EnterStart,
    CsrCaptured,
    CsrCaptureSkipped,
    Drained,
    SelfRefresh,
    DfiLowPower,
    PhyRetention,
    Isolated,
    ExitStart,
    Powered,
    ControllerConfigured,
    PhyRestored,
    DfiInitComplete,
    Normal,
}

ringbuf!(Trace, 32, Trace::None);

/// Loop iterations the PHY and reset logic are given to settle where no
/// status exists to poll.
const SETTLE_SHORT: u32 = 20;
const SETTLE_POWER: u32 = 50;
const SETTLE_RESET: u32 = 500;

/// PHY configuration for retention exit: the static setup, the saved
/// trained values, then the PIE image.
pub fn configure_phy<M: Mmio>(
    apb: &PhyApb<'_, M>,
    trained: &TrainedCsrStore,
) {
    apb.apply_fixed(&PHY_PRE_RESTORE);
    trained.restore(apb);
    apb.apply_fixed(&PHY_POST_RESTORE);
}

/// Takes the DDR subsystem into retention. The trained PHY registers are
/// captured on the first call only.
pub fn enter_retention<M: Mmio>(
    bus: &M,
    cfg: &PlatformConfig,
    trained: &mut TrainedCsrStore,
) {
    let reg = |offset| cfg.ddrc_base + offset;
    let apb = PhyApb::new(bus, cfg.phy_base);

    ringbuf_entry!(Trace::EnterStart);

    // Has to happen while the PHY still holds its training.
    if trained.capture_once(&apb) {
        ringbuf_entry!(Trace::CsrCaptured);
    } else {
        ringbuf_entry!(Trace::CsrCaptureSkipped);
    }

    spin_until(bus, reg(ddrc::DBGCAM), |v| DbgCam(v).is_idle());

    // Close the AXI port and let what is in flight finish.
    bus.write32(reg(ddrc::PCTRL_0), 0);
    spin_until(bus, reg(ddrc::PSTAT), |v| v & ddrc::PSTAT_PORT0_BUSY == 0);
    ringbuf_entry!(Trace::Drained);

    bus.write32(reg(ddrc::PWRCTL), PwrCtl::software_self_refresh().0);
    spin_until(bus, reg(ddrc::STAT), |v| Stat(v).in_software_self_refresh());
    ringbuf_entry!(Trace::SelfRefresh);

    // DFI low-power entry: with quasi-dynamic programming closed, request an
    // init at the retention frequency index, wait for the PHY to drop
    // init-complete, then release the start and wait for it to come back.
    bus.write32(reg(ddrc::DFIMISC), 0);
    bus.write32(reg(ddrc::SWCTL), 0);
    let freq = DfiMisc::RETENTION_FREQUENCY;
    bus.write32(reg(ddrc::DFIMISC), DfiMisc::with_frequency(freq).0);
    bus.write32(reg(ddrc::DFIMISC), DfiMisc::init_start(freq).0);
    spin_until(bus, reg(ddrc::DFISTAT), |v| !DfiStat(v).dfi_init_complete());
    bus.write32(reg(ddrc::DFIMISC), DfiMisc::with_frequency(freq).0);
    spin_until(bus, reg(ddrc::DFISTAT), |v| DfiStat(v).dfi_init_complete());
    bus.write32(reg(ddrc::SWCTL), 1);
    ringbuf_entry!(Trace::DfiLowPower);

    // Cycling the microcontroller mux completes the DFI frequency operation
    // and leaves the PHY in LP3/IO retention.
    apb.write(phy::MICRO_CONT_MUX_SEL, 0);
    apb.write(phy::MICRO_CONT_MUX_SEL, 1);
    settle(SETTLE_SHORT);
    ringbuf_entry!(Trace::PhyRetention);

    let handshake = cfg.gpc_base + gpc::DDR1_HANDSHAKE;
    bus.modify32(handshake, |v| {
        let mut h = GpcDdrHandshake(v);
        h.set_pwrdnreqn(false);
        h.0
    });
    spin_until(bus, handshake, |v| !GpcDdrHandshake(v).pwrdnackn());

    // PwrOkIn low: CKE and MEMRESET are now held by the retention latches.
    bus.write32(cfg.src_base + src::DDRC1_RCR, src::RCR_RETENTION);
    settle(SETTLE_SHORT);

    bus.write32(cfg.ccm_base + ccm::CCGR_DDR1, ccm::CCGR_OFF);
    bus.write32(cfg.ccm_base + ccm::PLL_CTRL_DRAM, ccm::CCGR_ON);

    bus.write32(cfg.gpc_base + gpc::DDRMIX_ISO, 1);
    bus.write32(cfg.gpc_base + gpc::PU_PGC_SW_PDN_REQ, gpc::DDR1_DOMAIN);
    ringbuf_entry!(Trace::Isolated);

    // The core VDD and VAA supplies may now be removed, in any order.
}

/// Brings the DDR subsystem back from retention and returns the DRAM to
/// normal operation.
pub fn exit_retention<M: Mmio>(
    bus: &M,
    cfg: &PlatformConfig,
    trained: &TrainedCsrStore,
) {
    let reg = |offset| cfg.ddrc_base + offset;
    let apb = PhyApb::new(bus, cfg.phy_base);

    ringbuf_entry!(Trace::ExitStart);
    settle(SETTLE_POWER);

    // Everything in reset before the clocks come back.
    bus.write32(cfg.src_base + src::DDRC2_RCR, src::RCR2_SYSTEM_RESET);
    bus.write32(cfg.src_base + src::DDRC1_RCR, src::RCR_ALL_RESET);

    bus.write32(cfg.ccm_base + ccm::CCGR_DDR1, ccm::CCGR_ON);
    bus.write32(cfg.ccm_base + ccm::PLL_CTRL_DRAM, ccm::CCGR_ON);

    // Power-up clears the pending power-down request once the domain is on.
    bus.write32(cfg.gpc_base + gpc::PU_PGC_SW_PUP_REQ, gpc::DDR1_DOMAIN);
    spin_until(bus, cfg.gpc_base + gpc::PU_PGC_SW_PDN_REQ, |v| {
        v & gpc::DDR1_DOMAIN == 0
    });

    bus.modify32(cfg.gpc_base + gpc::DDR1_HANDSHAKE, |v| {
        let mut h = GpcDdrHandshake(v);
        h.set_pwrdnreqn(true);
        h.0
    });

    bus.write32(
        cfg.anatop_base + anatop::DRAM_PLL_CFG0,
        anatop::DRAM_PLL_800MHZ,
    );

    bus.write32(cfg.src_base + src::DDRC2_RCR, src::RCR_RELEASED);
    bus.write32(cfg.src_base + src::DDRC1_RCR, src::RCR_STAGED);
    settle(SETTLE_RESET);
    ringbuf_entry!(Trace::Powered);

    configure_umctl2(bus, cfg.ddrc_base);

    // Skip DRAM initialization and come up in self-refresh.
    bus.modify32(reg(ddrc::INIT0), |v| {
        let mut init = Init0(v);
        init.set_skip_dram_init(Init0::SKIP_RESUME_SELF_REFRESH);
        init.0
    });
    bus.write32(reg(ddrc::PWRCTL), PwrCtl::software_self_refresh().0);

    bus.write32(cfg.src_base + src::DDRC1_RCR, src::RCR_RELEASED);
    settle(SETTLE_RESET);

    bus.write32(reg(ddrc::DBG1), 0);
    bus.write32(reg(ddrc::SWCTL), 0);
    bus.write32(cfg.ddr_ss_base + ddr_ss::MODE, ddr_ss::MODE_LPDDR4);
    bus.write32(reg(ddrc::DFIMISC), 0);
    ringbuf_entry!(Trace::ControllerConfigured);

    configure_phy(&apb, trained);

    // Hand the PHY back to its microcontroller once calibration has
    // stopped.
    apb.write(phy::MICRO_CONT_MUX_SEL, 0);
    apb.spin_until(phy::CAL_BUSY, |v| v == 0);
    apb.write(phy::MICRO_CONT_MUX_SEL, 1);
    ringbuf_entry!(Trace::PhyRestored);

    // PHY init. Start has to be cleared before completion is enabled, or
    // the enable re-triggers it.
    bus.write32(reg(ddrc::SWCTL), 0);
    bus.write32(reg(ddrc::DFIMISC), DfiMisc::init_start(0).0);
    spin_until(bus, reg(ddrc::DFISTAT), |v| DfiStat(v).dfi_init_complete());
    bus.write32(reg(ddrc::DFIMISC), 0);
    bus.write32(reg(ddrc::DFIMISC), DfiMisc::complete_enabled().0);
    bus.write32(reg(ddrc::SWCTL), 1);
    spin_until(bus, reg(ddrc::SWSTAT), |v| SwStat(v).sw_done_ack());
    ringbuf_entry!(Trace::DfiInitComplete);

    bus.write32(reg(ddrc::PWRCTL), PwrCtl::software_self_refresh().0);
    bus.write32(reg(ddrc::SWCTL), 0);
    bus.write32(reg(ddrc::DFIMISC), DfiMisc::complete_enabled().0);
    bus.write32(reg(ddrc::SWCTL), 1);
    spin_until(bus, reg(ddrc::SWSTAT), |v| SwStat(v).sw_done_ack());

    // Leave self-refresh.
    bus.write32(reg(ddrc::PWRCTL), PwrCtl::clock_stop_only().0);
    spin_until(bus, reg(ddrc::STAT), |v| Stat(v).is_normal());

    // Derating on, AXI port open, automatic refresh back under the
    // controller's control.
    bus.write32(reg(ddrc::DERATEEN), 0x302);
    bus.write32(reg(ddrc::PCTRL_0), 1);
    bus.write32(reg(ddrc::RFSHCTL3), 0);
    ringbuf_entry!(Trace::Normal);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csr::TRAINED_CSR_COUNT;
    use crate::phy_tables::TRAINED_CSR_OFFSETS;
    use crate::sim::SimSoc;
    use crate::umctl2::UMCTL2_CONFIG;

    const CFG: PlatformConfig = PlatformConfig::IMX8MQ;

    fn position(writes: &[(usize, u32)], w: (usize, u32)) -> usize {
        writes
            .iter()
            .position(|&x| x == w)
            .unwrap_or_else(|| panic!("no write {:#x} <- {:#x}", w.0, w.1))
    }

    #[test]
    fn enter_reaches_isolation_in_self_refresh() {
        let sim = SimSoc::new();
        let mut store = TrainedCsrStore::new();
        enter_retention(&sim, &CFG, &mut store);

        assert!(store.is_saved());
        assert!(Stat(sim.ddrc(ddrc::STAT)).in_software_self_refresh());
        assert_eq!(sim.ddrc(ddrc::PCTRL_0), 0);
        assert_eq!(sim.reg(CFG.gpc_base + gpc::DDRMIX_ISO), 1);
        assert_eq!(
            sim.reg(CFG.src_base + src::DDRC1_RCR),
            src::RCR_RETENTION
        );
        let hs =
            GpcDdrHandshake(sim.reg(CFG.gpc_base + gpc::DDR1_HANDSHAKE));
        assert!(!hs.pwrdnreqn() && !hs.pwrdnackn());
    }

    #[test]
    fn enter_orders_capture_before_power_steps() {
        let sim = SimSoc::new();
        let mut store = TrainedCsrStore::new();
        enter_retention(&sim, &CFG, &mut store);

        let writes = sim.writes();
        let phy_at = |off: u32, v| (CFG.phy_base + 4 * off as usize, v);
        let capture_done =
            position(&writes, phy_at(phy::UCCLK_HCLK_ENABLES, 0));
        let port_closed =
            position(&writes, (CFG.ddrc_base + ddrc::PCTRL_0, 0));
        let self_refresh =
            position(&writes, (CFG.ddrc_base + ddrc::PWRCTL, 0xaa));
        let retention = position(
            &writes,
            (CFG.src_base + src::DDRC1_RCR, src::RCR_RETENTION),
        );
        let iso = position(&writes, (CFG.gpc_base + gpc::DDRMIX_ISO, 1));
        assert!(capture_done < port_closed);
        assert!(port_closed < self_refresh);
        assert!(self_refresh < retention);
        assert!(retention < iso);
    }

    #[test]
    fn second_entry_skips_capture() {
        let sim = SimSoc::new();
        let mut store = TrainedCsrStore::new();
        enter_retention(&sim, &CFG, &mut store);
        exit_retention(&sim, &CFG, &store);
        enter_retention(&sim, &CFG, &mut store);
        assert_eq!(sim.phy_reads(), TRAINED_CSR_COUNT);
    }

    #[test]
    fn round_trip_restores_training_and_normal_operation() {
        let sim = SimSoc::with_phy_seed(0xd00d);
        let before: Vec<u32> =
            TRAINED_CSR_OFFSETS.iter().map(|&o| sim.phy(o)).collect();

        let mut store = TrainedCsrStore::new();
        enter_retention(&sim, &CFG, &mut store);
        sim.lose_phy_state();
        sim.clear_log();
        exit_retention(&sim, &CFG, &store);

        assert!(Stat(sim.ddrc(ddrc::STAT)).is_normal());
        assert_eq!(sim.ddrc(ddrc::PCTRL_0), 1);
        assert_eq!(sim.ddrc(ddrc::DERATEEN), 0x302);
        assert_eq!(sim.ddrc(ddrc::INIT0) >> 30, 0b11);

        let saved: Vec<u32> = store.iter().map(|r| r.value).collect();
        assert_eq!(saved, before);

        // The trained values go out, in order, between the two fixed
        // tables.
        let phy_writes = sim.phy_writes();
        let pre = PHY_PRE_RESTORE.len();
        assert_eq!(&phy_writes[..pre], &PHY_PRE_RESTORE[..]);
        let restored = &phy_writes[pre..pre + TRAINED_CSR_COUNT];
        for (w, (&o, &v)) in restored
            .iter()
            .zip(TRAINED_CSR_OFFSETS.iter().zip(before.iter()))
        {
            assert_eq!((w.offset, w.value), (o, v));
        }
        let post = pre + TRAINED_CSR_COUNT;
        assert_eq!(
            &phy_writes[post..post + PHY_POST_RESTORE.len()],
            &PHY_POST_RESTORE[..]
        );
    }

    #[test]
    fn exit_programs_controller_before_phy_and_resets_first() {
        let sim = SimSoc::new();
        let store = TrainedCsrStore::new();
        exit_retention(&sim, &CFG, &store);

        let writes = sim.writes();
        let rcr = CFG.src_base + src::DDRC1_RCR;
        let all_reset = position(&writes, (rcr, src::RCR_ALL_RESET));
        let first_ctl = UMCTL2_CONFIG[0];
        let umctl2 = position(
            &writes,
            (CFG.ddrc_base + first_ctl.offset, first_ctl.value),
        );
        let first_phy = PHY_PRE_RESTORE[0];
        let phy = position(
            &writes,
            (
                CFG.phy_base + 4 * first_phy.offset as usize,
                first_phy.value,
            ),
        );
        let released = position(&writes, (rcr, src::RCR_RELEASED));
        assert!(all_reset < umctl2);
        assert!(umctl2 < released);
        assert!(released < phy);
    }

    #[test]
    fn dfi_init_start_cleared_before_complete_enable() {
        let sim = SimSoc::new();
        let store = TrainedCsrStore::new();
        exit_retention(&sim, &CFG, &store);

        let dfimisc: Vec<u32> = sim
            .writes_in(CFG.ddrc_base + ddrc::DFIMISC, 4)
            .into_iter()
            .map(|(_, v)| v)
            .collect();
        let start = dfimisc.iter().position(|&v| v == 0x20).unwrap();
        assert_eq!(&dfimisc[start..start + 3], &[0x20, 0x0, 0x1]);
    }
}
