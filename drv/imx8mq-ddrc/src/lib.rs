// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! i.MX8MQ LPDDR4 retention and frequency switching.
//!
//! [`DdrRetentionController`] owns everything that has to persist between
//! firmware calls: the trained PHY register snapshot, the frequency set-point
//! bookkeeping and the cross-core rendezvous. Construct one at boot (it is
//! `const`, so a `static` works) and route the platform's SiP calls to
//! [`DdrRetentionController::sip_handler`].
//!
//! None of the sequences here can fail in a way software could recover
//! from. Every wait on hardware is unbounded, and a wait that never ends is
//! left to the watchdog.

#![cfg_attr(not(test), no_std)]

pub mod cpu;
pub mod csr;
pub mod hwffc;
pub mod phy_tables;
pub mod regs;
pub mod rendezvous;
pub mod retention;
pub mod umctl2;

#[cfg(test)]
mod sim;

use mmio::Mmio;
use ringbuf::*;

pub use cpu::Cpu;

use crate::csr::TrainedCsrStore;
use crate::regs::gicd;
use crate::rendezvous::Rendezvous;

/// SiP function ID of the DDR frequency-change call.
pub const IMX_SIP_DDR_DVFS: u32 = 0xc200_0004;

/// SMCCC return value for an unrecognized function ID.
pub const SMC_UNK: i64 = -1;

/// Frequency selector that makes the calling core a follower: it parks
/// until the leader's switch is done.
pub const FREQ_SELECTOR_PARK: u32 = 0xf;

/// Most cores a cluster can have in the readiness mask.
pub const MAX_CORES: usize = 4;

// Each core owns one byte lane of the 32-bit readiness mask.
static_assertions::const_assert!(MAX_CORES * 8 <= 32);

#[derive(Copy, Clone, Debug, PartialEq)]
enum Trace {
    None,
    Follower(usize),
    Leader { core: usize, selector: u32, online: u32 },
    Woke { core: usize, spi: u32 },
    SetPoint(u32),
    UnknownCall(u32),
    RetentionEnter,
    RetentionExit,
}

ringbuf!(Trace, 16, Trace::None);

/// Frequency-switch bookkeeping. `fsp` must track the set point the DRAM is
/// actually on, or the next switch programs the wrong one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DvfsState {
    pub fsp: u32,
    pub vrcg: u32,
    /// Wait for the controller's data pipelines to drain before switching.
    pub drain: bool,
}

/// Fixed facts about the board: where each register block lives, how many
/// cores there are and how to wake them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlatformConfig {
    pub ddrc_base: usize,
    pub ddr_ss_base: usize,
    pub phy_base: usize,
    pub ccm_base: usize,
    pub anatop_base: usize,
    pub src_base: usize,
    pub gpc_base: usize,
    pub gicd_base: usize,
    pub core_count: usize,
    /// SPI used to kick each core into the follower call.
    pub wake_spis: [u32; MAX_CORES],
    /// Bookkeeping at boot, before any switch.
    pub initial: DvfsState,
}

impl PlatformConfig {
    pub const IMX8MQ: Self = Self {
        ddrc_base: 0x3d40_0000,
        ddr_ss_base: 0x3d00_0000,
        phy_base: 0x3c00_0000,
        ccm_base: 0x3038_0000,
        anatop_base: 0x3036_0000,
        src_base: 0x3039_0000,
        gpc_base: 0x303a_0000,
        gicd_base: 0x3880_0000,
        core_count: 4,
        wake_spis: [102, 109, 110, 111],
        initial: DvfsState {
            fsp: 1,
            vrcg: 1,
            drain: true,
        },
    };
}

pub struct DdrRetentionController<M> {
    bus: M,
    cfg: PlatformConfig,
    trained: spin::Mutex<TrainedCsrStore>,
    dvfs: spin::Mutex<DvfsState>,
    rendezvous: Rendezvous,
}

impl<M> DdrRetentionController<M> {
    pub const fn new(bus: M, cfg: PlatformConfig) -> Self {
        Self {
            bus,
            dvfs: spin::Mutex::new(cfg.initial),
            cfg,
            trained: spin::Mutex::new(TrainedCsrStore::new()),
            rendezvous: Rendezvous::new(),
        }
    }
}

impl<M: Mmio> DdrRetentionController<M> {
    pub fn config(&self) -> &PlatformConfig {
        &self.cfg
    }

    pub fn dvfs_state(&self) -> DvfsState {
        *self.dvfs.lock()
    }

    /// Followers currently parked, one bit per byte lane.
    pub fn ready_mask(&self) -> u32 {
        self.rendezvous.ready_mask()
    }

    /// Platform suspend: put the DDR subsystem into retention.
    pub fn enter_retention(&self) {
        ringbuf_entry!(Trace::RetentionEnter);
        let mut trained = self.trained.lock();
        retention::enter_retention(&self.bus, &self.cfg, &mut trained);
    }

    /// Platform resume: bring the DDR subsystem back from retention.
    pub fn exit_retention(&self) {
        ringbuf_entry!(Trace::RetentionExit);
        let trained = self.trained.lock();
        retention::exit_retention(&self.bus, &self.cfg, &trained);
    }

    /// Handles the DDR frequency-change call.
    ///
    /// `x1` is the frequency selector; [`FREQ_SELECTOR_PARK`] makes this core
    /// a follower. `x2` is the online-core mask, one bit per byte lane.
    /// `x3` is reserved. Always returns 0.
    pub fn lpddr4_dvfs_handler<C: Cpu>(
        &self,
        cpu: &C,
        x1: u64,
        x2: u64,
        _x3: u64,
    ) -> i32 {
        // The selector and mask are 32-bit quantities in the call ABI.
        let selector = x1 as u32;
        let online = x2 as u32;

        if selector == FREQ_SELECTOR_PARK {
            ringbuf_entry!(Trace::Follower(cpu.core_id()));
            self.rendezvous.park(cpu);
        } else {
            self.change_frequency(cpu, selector, online);
        }
        0
    }

    /// Top-level SiP dispatch.
    pub fn sip_handler<C: Cpu>(
        &self,
        cpu: &C,
        fid: u32,
        x1: u64,
        x2: u64,
        x3: u64,
    ) -> i64 {
        match fid {
            IMX_SIP_DDR_DVFS => {
                i64::from(self.lpddr4_dvfs_handler(cpu, x1, x2, x3))
            }
            _ => {
                ringbuf_entry!(Trace::UnknownCall(fid));
                SMC_UNK
            }
        }
    }

    /// Boot-time switch to 3200 MT/s. Only the calling core may be running.
    pub fn switch_to_max_rate<C: Cpu>(&self, cpu: &C) {
        let online = rendezvous::lane(cpu.core_id());
        self.change_frequency(cpu, 0, online);
    }

    fn change_frequency<C: Cpu>(&self, cpu: &C, selector: u32, online: u32) {
        ringbuf_entry!(Trace::Leader {
            core: cpu.core_id(),
            selector,
            online
        });

        self.rendezvous.lead(
            cpu,
            self.cfg.core_count.min(MAX_CORES),
            online,
            |core| self.wake(core),
            || {
                let st = self.dvfs_state();
                hwffc::switch_frequency(
                    &self.bus, &self.cfg, st.vrcg, st.fsp, selector, st.drain,
                );
                // Only once the switch has fully returned.
                let mut st = self.dvfs.lock();
                st.fsp ^= 1;
                ringbuf_entry!(Trace::SetPoint(st.fsp));
            },
        );
    }

    /// Pends `core`'s wake SPI in the GIC distributor.
    fn wake(&self, core: usize) {
        let Some(&spi) = self.cfg.wake_spis.get(core) else {
            return;
        };
        let intid = gicd::spi_intid(spi);
        let addr =
            self.cfg.gicd_base + gicd::ISPENDR + 4 * (intid / 32) as usize;
        self.bus.write32(addr, 1 << (intid % 32));
        ringbuf_entry!(Trace::Woke { core, spi });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regs::{ccm, ddrc, gpc, GpcFreqRequest, Stat};
    use crate::rendezvous::lane;
    use crate::sim::{SimCpu, SimSoc};
    use std::sync::Mutex;

    const CFG: PlatformConfig = PlatformConfig::IMX8MQ;

    fn leak<T>(t: T) -> &'static T {
        Box::leak(Box::new(t))
    }

    type SimController = DdrRetentionController<&'static SimSoc>;

    fn controller() -> (&'static SimSoc, &'static SimController) {
        let sim = leak(SimSoc::new());
        (sim, leak(DdrRetentionController::new(sim, CFG)))
    }

    #[test]
    fn unknown_function_id_is_rejected() {
        let (sim, ctl) = controller();
        let r = ctl.sip_handler(&SimCpu::new(0), 0xc200_0005, 1, 1, 0);
        assert_eq!(r, SMC_UNK);
        assert!(sim.writes().is_empty());
    }

    #[test]
    fn wake_pends_the_cores_spi() {
        let (sim, ctl) = controller();
        ctl.wake(1);
        // SPI 109 is interrupt ID 141: word 4, bit 13.
        assert_eq!(sim.writes(), [(CFG.gicd_base + 0x210, 1 << 13)]);
        assert!(sim.take_pending(109));
        ctl.wake(7);
        assert_eq!(sim.writes().len(), 1);
    }

    #[test]
    fn leader_with_one_follower_switches_to_reduced_rate() {
        let (sim, ctl) = controller();

        // Readiness as the leader first touches the controller.
        let seen: &'static Mutex<Option<u32>> = leak(Mutex::new(None));
        sim.set_hook(Box::new(move |addr, _| {
            if addr == CFG.ddrc_base + ddrc::HWFFCCTL {
                seen.lock().unwrap().get_or_insert(ctl.ready_mask());
            }
        }));

        let follower = std::thread::spawn(move || {
            while !sim.take_pending(CFG.wake_spis[1]) {
                std::thread::yield_now();
            }
            let park = u64::from(FREQ_SELECTOR_PARK);
            ctl.sip_handler(&SimCpu::new(1), IMX_SIP_DDR_DVFS, park, 0, 0)
        });

        let leader = SimCpu::new(0);
        let r = ctl.sip_handler(&leader, IMX_SIP_DDR_DVFS, 1, 0x101, 0);
        assert_eq!(r, 0);
        assert_eq!(follower.join().unwrap(), 0);

        assert_eq!(*seen.lock().unwrap(), Some(lane(1)));
        assert_eq!(ctl.ready_mask(), 0);

        let c = CFG.ccm_base;
        let clocks = sim.writes_in(c + 0x9800, 0x1000);
        assert_eq!(
            clocks,
            [
                (c + ccm::DRAM_ALT_CLR, (7 << 24) | (7 << 16)),
                (c + ccm::DRAM_ALT_SET, 5 << 24),
                (c + ccm::DRAM_APB_CLR, (7 << 24) | (7 << 16)),
                (c + ccm::DRAM_APB_SET, (2 << 24) | (1 << 16)),
                (c + ccm::DRAM_SEL_CFG_SET, 1 << 24),
            ]
        );
        let req = GpcFreqRequest(sim.reg(CFG.gpc_base + gpc::DDR1_FREQ_REQ));
        assert_eq!(req.csysfrequency(), 1);
        assert_eq!(ctl.dvfs_state().fsp, 0);
    }

    #[test]
    fn set_point_flips_once_per_completed_switch() {
        let (sim, ctl) = controller();
        let cpu = SimCpu::new(0);

        // Still the old set point while the switch is finishing.
        let during: &'static Mutex<Vec<u32>> = leak(Mutex::new(vec![]));
        sim.set_hook(Box::new(move |addr, value| {
            if addr == CFG.ddrc_base + ddrc::PWRCTL && value == 0x188 {
                during.lock().unwrap().push(ctl.dvfs_state().fsp);
            }
        }));

        assert_eq!(ctl.dvfs_state().fsp, 1);
        ctl.switch_to_max_rate(&cpu);
        assert_eq!(ctl.dvfs_state().fsp, 0);
        ctl.lpddr4_dvfs_handler(&cpu, 2, lane(0).into(), 0);
        assert_eq!(ctl.dvfs_state().fsp, 1);
        ctl.lpddr4_dvfs_handler(&cpu, 99, lane(0).into(), 0);
        assert_eq!(ctl.dvfs_state().fsp, 0);

        assert_eq!(*during.lock().unwrap(), [1, 0, 1]);
        assert_eq!(ctl.dvfs_state().vrcg, 1);
    }

    #[test]
    fn max_rate_at_boot_wakes_nobody() {
        let (sim, ctl) = controller();
        ctl.switch_to_max_rate(&SimCpu::new(0));

        assert!(sim.writes_in(CFG.gicd_base, 0x1_0000).is_empty());
        let c = CFG.ccm_base;
        assert!(sim.writes().contains(&(c + ccm::DRAM_SEL_CFG_CLR, 1 << 24)));
        assert!(Stat(sim.ddrc(ddrc::STAT)).is_normal());
    }

    #[test]
    fn retention_cycles_capture_once() {
        let (sim, ctl) = controller();
        for _ in 0..3 {
            ctl.enter_retention();
            sim.lose_phy_state();
            ctl.exit_retention();
            assert!(Stat(sim.ddrc(ddrc::STAT)).is_normal());
        }
        assert_eq!(sim.phy_reads(), csr::TRAINED_CSR_COUNT);
    }
}
