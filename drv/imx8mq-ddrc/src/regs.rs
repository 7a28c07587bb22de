// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Register map for the DDR subsystem and the SoC blocks that clock, reset
//! and power it.
//!
//! Offsets are relative to the block bases in [`crate::PlatformConfig`].
//! Registers whose fields the sequencers interpret or build get a typed
//! wrapper; registers that are only ever written with a whole-word value from
//! a table are left as plain offsets.

use bitfield::bitfield;

/// uMCTL2 DDR controller, relative to `PlatformConfig::ddrc_base`.
pub mod ddrc {
    pub const MSTR: usize = 0x0;
    pub const STAT: usize = 0x4;
    pub const DERATEEN: usize = 0x20;
    pub const MSTR2: usize = 0x28;
    pub const PWRCTL: usize = 0x30;
    pub const HWFFCCTL: usize = 0x3c;
    pub const HWFFCSTAT: usize = 0x40;
    pub const RFSHCTL3: usize = 0x60;
    pub const CRCPARSTAT: usize = 0xcc;
    pub const INIT0: usize = 0xd0;
    pub const DFIMISC: usize = 0x1b0;
    pub const DFISTAT: usize = 0x1bc;
    pub const ADDRMAP0: usize = 0x200;
    pub const ADDRMAP1: usize = 0x204;
    pub const ADDRMAP4: usize = 0x210;
    pub const ADDRMAP5: usize = 0x214;
    pub const ADDRMAP6: usize = 0x218;
    pub const ODTCFG: usize = 0x240;
    pub const ODTMAP: usize = 0x244;
    pub const SCHED: usize = 0x250;
    pub const SCHED1: usize = 0x254;
    pub const PERFHPR1: usize = 0x25c;
    pub const PERFLPR1: usize = 0x264;
    pub const PERFWR1: usize = 0x26c;
    pub const DBG0: usize = 0x300;
    pub const DBG1: usize = 0x304;
    pub const DBGCAM: usize = 0x308;
    pub const DBGCMD: usize = 0x30c;
    pub const SWCTL: usize = 0x320;
    pub const SWSTAT: usize = 0x324;
    pub const POISONCFG: usize = 0x36c;
    pub const PSTAT: usize = 0x3fc;
    pub const PCCFG: usize = 0x400;
    pub const PCFGR_0: usize = 0x404;
    pub const PCFGW_0: usize = 0x408;
    pub const PCTRL_0: usize = 0x490;
    pub const PCFGQOS0_0: usize = 0x494;
    pub const PCFGQOS1_0: usize = 0x498;
    pub const PCFGWQOS0_0: usize = 0x49c;
    pub const PCFGWQOS1_0: usize = 0x4a0;
    pub const FREQ1_DERATEEN: usize = 0x2020;
    pub const FREQ1_DERATEINT: usize = 0x2024;
    pub const FREQ1_RFSHCTL0: usize = 0x2050;
    pub const FREQ1_RFSHTMG: usize = 0x2064;

    /// DBGCAM with every queue empty and both write and read data pipelines
    /// idle.
    pub const DBGCAM_IDLE: u32 = 0x3600_0000;

    /// PSTAT read/write outstanding counts for AXI port 0.
    pub const PSTAT_PORT0_BUSY: u32 = 0x0001_0001;

    /// STAT bits that distinguish self-refresh flavours: operating mode,
    /// self-refresh type and self-refresh state.
    pub const STAT_SELF_REFRESH_MASK: u32 = 0x33f;

    /// STAT under [`STAT_SELF_REFRESH_MASK`] once software-requested
    /// self-refresh has been entered (not power-down).
    pub const STAT_SELF_REFRESH: u32 = 0x223;

    /// Operating-mode value for normal operation.
    pub const OPERATING_MODE_NORMAL: u32 = 0b001;

    /// Operating-mode value for self-refresh.
    pub const OPERATING_MODE_SELF_REFRESH: u32 = 0b011;
}

/// DWC DDR PHY microcontroller and APB registers (PHY-internal addresses).
pub mod phy {
    /// `MicroContMuxSel`: 0 hands the PHY CSRs to the APB, 1 to the
    /// microcontroller.
    pub const MICRO_CONT_MUX_SEL: u32 = 0xd0000;

    /// `UcclkHclkEnables`: 3 enables both clocks needed to read CSRs back.
    pub const UCCLK_HCLK_ENABLES: u32 = 0xc0080;

    /// `CalBusy`: non-zero while the PHY is still calibrating after a mux
    /// hand-off.
    pub const CAL_BUSY: u32 = 0x20097;
}

/// General power controller, relative to `PlatformConfig::gpc_base`.
pub mod gpc {
    /// Power-up request for the DDRMIX domain.
    pub const PU_PGC_SW_PUP_REQ: usize = 0xf8;
    /// Power-down request for the DDRMIX domain; also reads back pending.
    pub const PU_PGC_SW_PDN_REQ: usize = 0x104;
    /// DDR1 frequency-change request, see [`super::GpcFreqRequest`].
    pub const DDR1_FREQ_REQ: usize = 0x164;
    /// DDR1 low-power handshake, see [`super::GpcDdrHandshake`].
    pub const DDR1_HANDSHAKE: usize = 0x1fc;
    /// DDRMIX isolation enable.
    pub const DDRMIX_ISO: usize = 0xd40;

    /// Bit of the DDR1 domain in the PU/PDN request registers.
    pub const DDR1_DOMAIN: u32 = 1 << 5;
}

/// System reset controller, relative to `PlatformConfig::src_base`.
pub mod src {
    pub const DDRC1_RCR: usize = 0x1000;
    pub const DDRC2_RCR: usize = 0x1004;

    /// Write-enable key in the top byte of both RCR registers.
    const KEY: u32 = 0x8f00_0000;

    /// `PwrOkIn` low: freezes CKE and MEMRESET for retention, with the
    /// controller core reset released.
    pub const RCR_RETENTION: u32 = KEY | 0x8;
    /// Every DDR reset asserted.
    pub const RCR_ALL_RESET: u32 = KEY | 0xf;
    /// Controller APB and core resets still held while the PHY comes up.
    pub const RCR_STAGED: u32 = KEY | 0x6;
    /// Every reset released.
    pub const RCR_RELEASED: u32 = KEY;
    /// DDRC2 system reset asserted.
    pub const RCR2_SYSTEM_RESET: u32 = KEY | 0x1;
}

/// Clock controller, relative to `PlatformConfig::ccm_base`.
pub mod ccm {
    /// Clock gate for the DDR1 controller.
    pub const CCGR_DDR1: usize = 0x4050;
    /// DRAM PLL output gate.
    pub const PLL_CTRL_DRAM: usize = 0x0950;

    /// `DRAM_SEL_CFG` core root: bit 24 routes `dram_core` from the
    /// alternate root, bypassing the DRAM PLL.
    pub const DRAM_SEL_CFG_SET: usize = 0x9804;
    pub const DRAM_SEL_CFG_CLR: usize = 0x9808;
    pub const DRAM_SEL_BYPASS_PLL: u32 = 1 << 24;

    pub const DRAM_ALT_SET: usize = 0xa004;
    pub const DRAM_ALT_CLR: usize = 0xa008;
    pub const DRAM_APB_SET: usize = 0xa084;
    pub const DRAM_APB_CLR: usize = 0xa088;

    pub const CCGR_OFF: u32 = 0x0;
    pub const CCGR_ON: u32 = 0x2;
}

/// Analog PLL block, relative to `PlatformConfig::anatop_base`.
pub mod anatop {
    pub const DRAM_PLL_CFG0: usize = 0x60;

    /// PLL enabled at the 800 MHz output the 3200 MT/s setting is derived
    /// from.
    pub const DRAM_PLL_800MHZ: u32 = 0x8000_0208;
}

/// DDR subsystem glue, relative to `PlatformConfig::ddr_ss_base`.
pub mod ddr_ss {
    pub const MODE: usize = 0x0;
    pub const MODE_LPDDR4: u32 = 0x1;
}

/// GIC distributor, relative to `PlatformConfig::gicd_base`.
pub mod gicd {
    /// Set-pending registers, one bit per interrupt ID, 32 IDs per word.
    pub const ISPENDR: usize = 0x200;

    /// Interrupt ID of shared peripheral interrupt `spi`.
    pub const fn spi_intid(spi: u32) -> u32 {
        spi + 32
    }
}

bitfield! {
    /// STAT: controller operating state.
    #[derive(Copy, Clone, PartialEq, Eq)]
    pub struct Stat(u32);
    impl Debug;
    pub selfref_state, _: 9, 8;
    pub selfref_type, _: 5, 4;
    pub operating_mode, _: 2, 0;
}

impl Stat {
    /// Software self-refresh entered, as opposed to power-down or an
    /// automatic self-refresh.
    pub fn in_software_self_refresh(&self) -> bool {
        self.0 & ddrc::STAT_SELF_REFRESH_MASK == ddrc::STAT_SELF_REFRESH
    }

    pub fn is_normal(&self) -> bool {
        self.operating_mode() == ddrc::OPERATING_MODE_NORMAL
    }
}

bitfield! {
    /// PWRCTL: low-power and self-refresh control.
    #[derive(Copy, Clone, PartialEq, Eq)]
    pub struct PwrCtl(u32);
    impl Debug;
    pub lpddr4_sr_allowed, set_lpddr4_sr_allowed: 8;
    pub dis_cam_drain_selfref, set_dis_cam_drain_selfref: 7;
    pub selfref_sw, set_selfref_sw: 5;
    pub en_dfi_dram_clk_disable, set_en_dfi_dram_clk_disable: 3;
    pub powerdown_en, set_powerdown_en: 1;
    pub selfref_en, set_selfref_en: 0;
}

impl PwrCtl {
    /// Software-requested self-refresh, with power-down and DFI clock stop
    /// permitted and no CAM drain on entry.
    pub fn software_self_refresh() -> Self {
        let mut p = Self::clock_stop_only();
        p.set_powerdown_en(true);
        p.set_selfref_sw(true);
        p
    }

    /// Self-refresh released; only DFI clock stop left enabled.
    pub fn clock_stop_only() -> Self {
        let mut p = PwrCtl(0);
        p.set_en_dfi_dram_clk_disable(true);
        p.set_dis_cam_drain_selfref(true);
        p
    }

    /// Software self-refresh that the controller may leave on its own
    /// (`lpddr4_sr_allowed`), used to settle after a frequency change.
    pub fn lpddr4_self_refresh() -> Self {
        let mut p = Self::clock_stop_only();
        p.set_selfref_sw(true);
        p.set_lpddr4_sr_allowed(true);
        p
    }

    /// Leaves the self-refresh entered by [`PwrCtl::lpddr4_self_refresh`].
    pub fn lpddr4_self_refresh_exit() -> Self {
        let mut p = Self::clock_stop_only();
        p.set_lpddr4_sr_allowed(true);
        p
    }

    /// Automatic self-refresh only, the setting the timing table leaves.
    pub fn automatic() -> Self {
        let mut p = PwrCtl(0);
        p.set_selfref_en(true);
        p
    }
}

bitfield! {
    /// HWFFCCTL: hardware fast frequency change control.
    #[derive(Copy, Clone, PartialEq, Eq)]
    pub struct HwffcCtl(u32);
    impl Debug;
    pub target_vrcg, set_target_vrcg: 6;
    pub init_vrcg, set_init_vrcg: 5;
    pub init_fsp, set_init_fsp: 4;
    pub hwffc_en, set_hwffc_en: 1, 0;
}

impl HwffcCtl {
    pub const EN_ENABLED: u32 = 0b11;
    pub const EN_EXIT: u32 = 0b10;
    pub const EN_DISABLED: u32 = 0b00;

    /// HWFFC enabled with the controller told which set point and VRCG
    /// state the DRAM currently holds.
    pub fn enter(fsp: u32, vrcg: u32) -> Self {
        let mut c = HwffcCtl(0);
        c.set_init_fsp(fsp & 1 != 0);
        c.set_init_vrcg(vrcg & 1 != 0);
        c.set_target_vrcg(true);
        c.set_hwffc_en(Self::EN_ENABLED);
        c
    }

    /// The HWFFC flow is being left; set points and VRCG remain as
    /// programmed for the next switch.
    pub fn exit() -> Self {
        let mut c = Self::idle();
        c.set_hwffc_en(Self::EN_EXIT);
        c
    }

    /// HWFFC off between switches.
    pub fn idle() -> Self {
        let mut c = HwffcCtl(0);
        c.set_init_fsp(true);
        c.set_init_vrcg(true);
        c.set_target_vrcg(true);
        c
    }
}

bitfield! {
    /// HWFFCSTAT: hardware fast frequency change status.
    #[derive(Copy, Clone, PartialEq, Eq)]
    pub struct HwffcStat(u32);
    impl Debug;
    pub current_frequency, _: 5, 4;
    pub in_progress, _: 0;
}

bitfield! {
    /// DFIMISC: DFI handshake control.
    #[derive(Copy, Clone, PartialEq, Eq)]
    pub struct DfiMisc(u32);
    impl Debug;
    pub dfi_frequency, set_dfi_frequency: 12, 8;
    pub dfi_init_start, set_dfi_init_start: 5;
    pub ctl_idle_en, set_ctl_idle_en: 4;
    pub dfi_init_complete_en, set_dfi_init_complete_en: 0;
}

impl DfiMisc {
    /// DFI frequency index the PHY treats as the LP3/IO retention target.
    pub const RETENTION_FREQUENCY: u32 = 0x1f;

    pub fn with_frequency(freq: u32) -> Self {
        let mut d = DfiMisc(0);
        d.set_dfi_frequency(freq);
        d
    }

    pub fn init_start(freq: u32) -> Self {
        let mut d = Self::with_frequency(freq);
        d.set_dfi_init_start(true);
        d
    }

    /// Controller idle reporting plus completion enable, the state HWFFC
    /// needs before the switch.
    pub fn hwffc_ready() -> Self {
        let mut d = Self::complete_enabled();
        d.set_ctl_idle_en(true);
        d
    }

    pub fn complete_enabled() -> Self {
        let mut d = DfiMisc(0);
        d.set_dfi_init_complete_en(true);
        d
    }
}

bitfield! {
    #[derive(Copy, Clone, PartialEq, Eq)]
    pub struct DfiStat(u32);
    impl Debug;
    pub dfi_init_complete, _: 0;
}

bitfield! {
    #[derive(Copy, Clone, PartialEq, Eq)]
    pub struct SwCtl(u32);
    impl Debug;
    pub sw_done, set_sw_done: 0;
}

bitfield! {
    #[derive(Copy, Clone, PartialEq, Eq)]
    pub struct SwStat(u32);
    impl Debug;
    pub sw_done_ack, _: 0;
}

bitfield! {
    #[derive(Copy, Clone, PartialEq, Eq)]
    pub struct Mstr(u32);
    impl Debug;
    pub frequency_mode, set_frequency_mode: 29;
}

bitfield! {
    #[derive(Copy, Clone, PartialEq, Eq)]
    pub struct Mstr2(u32);
    impl Debug;
    pub target_frequency, set_target_frequency: 1, 0;
}

bitfield! {
    #[derive(Copy, Clone, PartialEq, Eq)]
    pub struct Init0(u32);
    impl Debug;
    pub skip_dram_init, set_skip_dram_init: 31, 30;
}

impl Init0 {
    /// Skip DRAM initialization and come up in self-refresh.
    pub const SKIP_RESUME_SELF_REFRESH: u32 = 0b11;
}

bitfield! {
    /// DBGCAM: debug view of the CAM and data pipelines.
    #[derive(Copy, Clone, PartialEq, Eq)]
    pub struct DbgCam(u32);
    impl Debug;
    pub wr_data_pipeline_empty, _: 29;
    pub rd_data_pipeline_empty, _: 28;
}

impl DbgCam {
    pub fn is_idle(&self) -> bool {
        self.0 == ddrc::DBGCAM_IDLE
    }

    /// Both data pipelines drained; queues may still hold commands.
    pub fn is_drained(&self) -> bool {
        self.wr_data_pipeline_empty() && self.rd_data_pipeline_empty()
    }
}

bitfield! {
    /// GPC DDR1 frequency-change request.
    #[derive(Copy, Clone, PartialEq, Eq)]
    pub struct GpcFreqRequest(u32);
    impl Debug;
    pub csysdisdrain, set_csysdisdrain: 15;
    pub csysfrequency, set_csysfrequency: 14, 13;
    pub csysmode, set_csysmode: 12;
}

bitfield! {
    /// GPC DDR1 handshake: requests driven by software, acknowledges driven
    /// by the controller.
    #[derive(Copy, Clone, PartialEq, Eq)]
    pub struct GpcDdrHandshake(u32);
    impl Debug;
    pub pwrdnackn, _: 18;
    pub csysack, _: 16;
    pub pwrdnreqn, set_pwrdnreqn: 1;
    pub csysreq, set_csysreq: 0;
}

bitfield! {
    /// CCM target root SET/CLR payload.
    #[derive(Copy, Clone, PartialEq, Eq)]
    pub struct TargetRoot(u32);
    impl Debug;
    pub mux, set_mux: 26, 24;
    pub pre_podf, set_pre_podf: 18, 16;
}

impl TargetRoot {
    /// Source select `mux` with pre-divider `pre_podf + 1`.
    pub fn source(mux: u32, pre_podf: u32) -> Self {
        let mut t = TargetRoot(0);
        t.set_mux(mux);
        t.set_pre_podf(pre_podf);
        t
    }

    /// Every mux and pre-divider bit, for the CLR register.
    pub fn all() -> Self {
        Self::source(0x7, 0x7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pwrctl_settings_match_controller_encodings() {
        assert_eq!(PwrCtl::software_self_refresh().0, 0xaa);
        assert_eq!(PwrCtl::clock_stop_only().0, 0x88);
        assert_eq!(PwrCtl::lpddr4_self_refresh().0, 0x1a8);
        assert_eq!(PwrCtl::lpddr4_self_refresh_exit().0, 0x188);
        assert_eq!(PwrCtl::automatic().0, 0x1);
    }

    #[test]
    fn hwffc_control_packs_set_point_and_vrcg() {
        assert_eq!(HwffcCtl::enter(0, 0).0, 0x43);
        assert_eq!(HwffcCtl::enter(1, 0).0, 0x53);
        assert_eq!(HwffcCtl::enter(0, 1).0, 0x63);
        assert_eq!(HwffcCtl::enter(1, 1).0, 0x73);
        // Only the low bit of each input is meaningful.
        assert_eq!(HwffcCtl::enter(2, 3).0, 0x63);
        assert_eq!(HwffcCtl::exit().0, 0x72);
        assert_eq!(HwffcCtl::idle().0, 0x70);
    }

    #[test]
    fn dfimisc_settings() {
        assert_eq!(DfiMisc::with_frequency(0x1f).0, 0x1f00);
        assert_eq!(DfiMisc::init_start(0x1f).0, 0x1f20);
        assert_eq!(DfiMisc::init_start(0).0, 0x20);
        assert_eq!(DfiMisc::hwffc_ready().0, 0x11);
        assert_eq!(DfiMisc::complete_enabled().0, 0x1);
    }

    #[test]
    fn stat_decoding() {
        assert!(Stat(0x223).in_software_self_refresh());
        // Automatic self-refresh is not good enough for retention.
        assert!(!Stat(0x213).in_software_self_refresh());
        assert!(Stat(0x1).is_normal());
        assert!(!Stat(0x3).is_normal());
        assert_eq!(Stat(0x223).operating_mode(), 0b011);
    }

    #[test]
    fn dbgcam_drain_and_idle() {
        assert!(DbgCam(0x3600_0000).is_idle());
        assert!(DbgCam(0x3000_0001).is_drained());
        assert!(!DbgCam(0x2000_0000).is_drained());
        assert!(!DbgCam(0x3000_0000).is_idle());
    }

    #[test]
    fn target_root_payloads() {
        assert_eq!(TargetRoot::all().0, (7 << 24) | (7 << 16));
        assert_eq!(TargetRoot::source(5, 0).0, 5 << 24);
        assert_eq!(TargetRoot::source(2, 1).0, (2 << 24) | (1 << 16));
        assert_eq!(TargetRoot::source(4, 3).0, (4 << 24) | (3 << 16));
    }
}
