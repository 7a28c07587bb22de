// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A simulated i.MX8MQ DDR subsystem for exercising the sequencers on a host.
//!
//! Only the behaviour the sequencers poll on is modelled; everything else is
//! plain storage. Every write is logged in order.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{fence, Ordering};
use std::sync::Mutex;

use mmio::Mmio;

use crate::csr::PhyReg;
use crate::regs::{ddrc, gpc, phy, DfiMisc, GpcDdrHandshake, GpcFreqRequest};
use crate::regs::{HwffcCtl, PwrCtl};
use crate::{cpu::Cpu, PlatformConfig};

const CFG: PlatformConfig = PlatformConfig::IMX8MQ;

/// Size of the PHY APB window in bytes.
const PHY_WINDOW: usize = 4 << 20;

/// Reads of `CalBusy` that report busy after the mux is handed over.
const CAL_BUSY_READS: u32 = 3;

pub type Hook = Box<dyn Fn(usize, u32) + Send + Sync>;

struct State {
    regs: HashMap<usize, u32>,
    phy: HashMap<u32, u32>,
    phy_seed: u32,
    writes: Vec<(usize, u32)>,
    phy_reads: usize,
    cal_busy: u32,
    pending: HashSet<u32>,
}

pub struct SimSoc {
    state: Mutex<State>,
    hook: Mutex<Option<Hook>>,
}

impl SimSoc {
    pub fn new() -> Self {
        Self::with_phy_seed(0x5eed)
    }

    /// A SoC whose PHY holds training results derived from `seed`.
    pub fn with_phy_seed(seed: u32) -> Self {
        let d = CFG.ddrc_base;
        let regs = HashMap::from([
            (d + ddrc::STAT, 0x1),
            (d + ddrc::DBGCAM, ddrc::DBGCAM_IDLE),
            (d + ddrc::DFISTAT, 0x1),
            (d + ddrc::SWCTL, 0x1),
            (d + ddrc::SWSTAT, 0x1),
            (CFG.gpc_base + gpc::DDR1_HANDSHAKE, 0x0005_0003),
        ]);
        Self {
            state: Mutex::new(State {
                regs,
                phy: HashMap::new(),
                phy_seed: seed,
                writes: vec![],
                phy_reads: 0,
                cal_busy: 0,
                pending: HashSet::new(),
            }),
            hook: Mutex::new(None),
        }
    }

    /// Calls `hook` after every write, outside the simulator's lock.
    pub fn set_hook(&self, hook: Hook) {
        *self.hook.lock().unwrap() = Some(hook);
    }

    pub fn reg(&self, addr: usize) -> u32 {
        self.state.lock().unwrap().regs.get(&addr).copied().unwrap_or(0)
    }

    pub fn ddrc(&self, offset: usize) -> u32 {
        self.reg(CFG.ddrc_base + offset)
    }

    pub fn phy(&self, offset: u32) -> u32 {
        let s = self.state.lock().unwrap();
        s.phy_value(offset)
    }

    /// Every PHY register forgets what it held, as after power removal.
    pub fn lose_phy_state(&self) {
        let mut s = self.state.lock().unwrap();
        s.phy_seed = !s.phy_seed;
        s.phy.clear();
    }

    pub fn phy_reads(&self) -> usize {
        self.state.lock().unwrap().phy_reads
    }

    pub fn writes(&self) -> Vec<(usize, u32)> {
        self.state.lock().unwrap().writes.clone()
    }

    /// Writes that landed in `[base, base + len)`.
    pub fn writes_in(&self, base: usize, len: usize) -> Vec<(usize, u32)> {
        self.writes()
            .into_iter()
            .filter(|&(a, _)| a >= base && a < base + len)
            .collect()
    }

    pub fn phy_writes(&self) -> Vec<PhyReg> {
        self.writes_in(CFG.phy_base, PHY_WINDOW)
            .into_iter()
            .map(|(a, v)| PhyReg::new(((a - CFG.phy_base) / 4) as u32, v))
            .collect()
    }

    pub fn clear_log(&self) {
        let mut s = self.state.lock().unwrap();
        s.writes.clear();
        s.phy_reads = 0;
    }

    /// Consumes a pending SPI set by a write to the GIC distributor.
    pub fn take_pending(&self, spi: u32) -> bool {
        self.state.lock().unwrap().pending.remove(&spi)
    }
}

impl State {
    fn phy_value(&self, offset: u32) -> u32 {
        match self.phy.get(&offset) {
            Some(&v) => v,
            // Arbitrary but stable per seed: stands in for training output.
            None => (offset.wrapping_mul(0x9e37_79b9) ^ self.phy_seed) & 0xffff,
        }
    }

    fn write(&mut self, addr: usize, value: u32) {
        self.writes.push((addr, value));

        if (CFG.phy_base..CFG.phy_base + PHY_WINDOW).contains(&addr) {
            let offset = ((addr - CFG.phy_base) / 4) as u32;
            if offset == phy::MICRO_CONT_MUX_SEL && value == 0 {
                self.cal_busy = CAL_BUSY_READS;
            }
            self.phy.insert(offset, value);
            return;
        }

        let gicd_pend = CFG.gicd_base + 0x200;
        if (gicd_pend..gicd_pend + 0x80).contains(&addr) {
            let first = ((addr - gicd_pend) / 4) as u32 * 32;
            for bit in (0..32).filter(|b| value & (1u32 << *b) != 0) {
                if let Some(spi) = (first + bit).checked_sub(32) {
                    self.pending.insert(spi);
                }
            }
            return;
        }

        self.regs.insert(addr, value);
        let d = CFG.ddrc_base;
        match addr {
            a if a == d + ddrc::PWRCTL => {
                let stat = if PwrCtl(value).selfref_sw() { 0x223 } else { 0x1 };
                self.regs.insert(d + ddrc::STAT, stat);
            }
            a if a == d + ddrc::SWCTL => {
                self.regs.insert(d + ddrc::SWSTAT, value & 1);
            }
            a if a == d + ddrc::DFIMISC => {
                let m = DfiMisc(value);
                let busy = m.dfi_init_start() && m.dfi_frequency() != 0;
                self.regs.insert(d + ddrc::DFISTAT, u32::from(!busy));
            }
            a if a == d + ddrc::HWFFCCTL => {
                let ctl = HwffcCtl(value);
                let stat = match ctl.hwffc_en() {
                    HwffcCtl::EN_ENABLED => 0x1,
                    HwffcCtl::EN_EXIT => {
                        let req = GpcFreqRequest(
                            self.reg(CFG.gpc_base + gpc::DDR1_FREQ_REQ),
                        );
                        req.csysfrequency() << 4
                    }
                    _ => self.reg(d + ddrc::HWFFCSTAT),
                };
                self.regs.insert(d + ddrc::HWFFCSTAT, stat);
            }
            a if a == CFG.gpc_base + gpc::DDR1_HANDSHAKE => {
                let h = GpcDdrHandshake(value);
                let acks = (u32::from(h.csysreq()) << 16)
                    | (u32::from(h.pwrdnreqn()) << 18);
                self.regs.insert(addr, (value & 0xffff) | acks);
            }
            a if a == CFG.gpc_base + gpc::PU_PGC_SW_PUP_REQ => {
                let pdn = CFG.gpc_base + gpc::PU_PGC_SW_PDN_REQ;
                let v = self.reg(pdn) & !value;
                self.regs.insert(pdn, v);
            }
            _ => {}
        }
    }

    fn reg(&self, addr: usize) -> u32 {
        self.regs.get(&addr).copied().unwrap_or(0)
    }

    fn read(&mut self, addr: usize) -> u32 {
        if (CFG.phy_base..CFG.phy_base + PHY_WINDOW).contains(&addr) {
            let offset = ((addr - CFG.phy_base) / 4) as u32;
            if offset == phy::CAL_BUSY {
                if self.cal_busy > 0 {
                    self.cal_busy -= 1;
                    return 1;
                }
                return 0;
            }
            self.phy_reads += 1;
            return self.phy_value(offset);
        }
        self.reg(addr)
    }
}

impl Mmio for SimSoc {
    fn read32(&self, addr: usize) -> u32 {
        let v = self.state.lock().unwrap().read(addr);
        std::thread::yield_now();
        v
    }

    fn write32(&self, addr: usize, value: u32) {
        self.state.lock().unwrap().write(addr, value);
        if let Some(hook) = self.hook.lock().unwrap().as_ref() {
            hook(addr, value);
        }
    }
}

/// A simulated core. Waiting for an event yields the host thread.
#[derive(Copy, Clone, Debug)]
pub struct SimCpu {
    core: usize,
}

impl SimCpu {
    pub fn new(core: usize) -> Self {
        Self { core }
    }
}

impl Cpu for SimCpu {
    fn core_id(&self) -> usize {
        self.core
    }

    fn wait_for_event(&self) {
        std::thread::yield_now();
    }

    fn send_event(&self) {
        fence(Ordering::SeqCst);
    }

    fn dsb(&self) {
        fence(Ordering::SeqCst);
    }

    fn isb(&self) {
        fence(Ordering::SeqCst);
    }
}
