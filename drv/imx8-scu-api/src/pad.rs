// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pad (pin mux and electrical configuration) service.
//!
//! Every pad is identified by the same [`Pin`] index the RM service uses for
//! ownership. The SCU refuses requests for pads the caller's partition does
//! not own.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use crate::rm::Pin;
use crate::{transact, RpcMsg, ScError, ScIpc, Service};

#[derive(Copy, Clone, Debug, Eq, PartialEq, FromPrimitive)]
#[repr(u8)]
pub enum PadConfig {
    Normal = 0,
    OpenDrain = 1,
    OpenDrainInput = 2,
    OutputInput = 3,
}

/// Input/output isolation latch behavior.
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromPrimitive)]
#[repr(u8)]
pub enum Iso {
    /// Latch is transparent.
    Off = 0,
    Early = 1,
    Late = 2,
    /// Latched data is held.
    On = 3,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, FromPrimitive)]
#[repr(u8)]
pub enum Wakeup {
    Off = 0,
    /// Clears a pending wakeup.
    Clear = 1,
    LowLevel = 4,
    FallingEdge = 5,
    RisingEdge = 6,
    HighLevel = 7,
}

/// Drive strength of a 28LPP pad.
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromPrimitive)]
#[repr(u8)]
pub enum Lpp28Dse {
    X1 = 0,
    X4 = 1,
    X2 = 2,
    X6 = 3,
}

/// Pull select of a 28LPP pad.
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromPrimitive)]
#[repr(u8)]
pub enum Lpp28Ps {
    PullDown = 0,
    PullUp5K = 1,
    PullUp47K = 2,
    PullUp100K = 3,
}

/// Drive strength of a 28FDSOI pad. The encoding is shared between 1.8 V,
/// 3.3 V and dual-voltage pads; variants are named for the 1.8 V meaning and
/// the other readings are associated constants.
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromPrimitive)]
#[repr(u8)]
pub enum Fdsoi28Dse {
    V18_1mA = 0,
    V18_2mA = 1,
    V18_4mA = 2,
    V18_6mA = 3,
    V18_8mA = 4,
    V18_10mA = 5,
    V18_12mA = 6,
    V33HighSpeed = 7,
}

impl Fdsoi28Dse {
    pub const V33_2MA: Self = Self::V18_1mA;
    pub const V33_4MA: Self = Self::V18_2mA;
    pub const V33_8MA: Self = Self::V18_4mA;
    pub const V33_12MA: Self = Self::V18_6mA;
    pub const DUAL_VOLT_HIGH: Self = Self::V18_1mA;
    pub const DUAL_VOLT_LOW: Self = Self::V18_2mA;
}

/// Pull select of a 28FDSOI pad.
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromPrimitive)]
#[repr(u8)]
pub enum Fdsoi28Ps {
    /// Bus keeper; 1.8 V only.
    Keeper = 0,
    PullUp = 1,
    PullDown = 2,
    None = 3,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Lpp28Gp {
    pub dse: Lpp28Dse,
    pub slew_rate: bool,
    pub hysteresis: bool,
    pub pull_enable: bool,
    pub ps: Lpp28Ps,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Fdsoi28Comp {
    pub compen: u8,
    pub fastfrz: bool,
    pub rasrcp: u8,
    pub rasrcn: u8,
    pub nasrc_sel: bool,
}

/// Compensation cell state as read back, including what the cell settled
/// on.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Fdsoi28CompStatus {
    pub settings: Fdsoi28Comp,
    pub compok: bool,
    pub nasrc: u8,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PadMux {
    pub mux: u8,
    pub config: PadConfig,
    pub iso: Iso,
}

/// Complete pad state: mux, raw general-purpose control word and wakeup.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PadAll {
    pub mux: PadMux,
    pub ctrl: u32,
    pub wakeup: Wakeup,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
enum Func {
    SetMux = 1,
    SetGp = 2,
    SetGp28Lpp = 3,
    SetWakeup = 4,
    SetAll = 5,
    GetMux = 6,
    GetGp = 7,
    GetGp28Lpp = 8,
    GetWakeup = 9,
    GetAll = 10,
    SetGp28Fdsoi = 11,
    GetGp28Fdsoi = 12,
    SetGp28FdsoiComp = 13,
    GetGp28FdsoiComp = 14,
    Set = 15,
    Get = 16,
}

fn request(func: Func, size: u8) -> RpcMsg {
    RpcMsg::new(Service::Pad, func as u8, size)
}

/// A value the SCU sent back that no variant covers is a malformed reply.
fn decode<T: FromPrimitive>(v: u8) -> Result<T, ScError> {
    T::from_u8(v).ok_or(ScError::Ipc)
}

fn get_by_pin<I: ScIpc + ?Sized>(
    ipc: &mut I,
    func: Func,
    pin: Pin,
) -> Result<RpcMsg, ScError> {
    let mut msg = request(func, 2);
    msg.set_d16(0, pin.0);
    transact(ipc, &mut msg)?;
    Ok(msg)
}

pub fn set_mux<I: ScIpc + ?Sized>(
    ipc: &mut I,
    pin: Pin,
    mux: PadMux,
) -> Result<(), ScError> {
    let mut msg = request(Func::SetMux, 3);
    msg.set_d16(0, pin.0);
    msg.set_d8(2, mux.mux);
    msg.set_d8(3, mux.config as u8);
    msg.set_d8(4, mux.iso as u8);
    transact(ipc, &mut msg)
}

pub fn get_mux<I: ScIpc + ?Sized>(
    ipc: &mut I,
    pin: Pin,
) -> Result<PadMux, ScError> {
    let msg = get_by_pin(ipc, Func::GetMux, pin)?;
    Ok(PadMux {
        mux: msg.d8(0),
        config: decode(msg.d8(1))?,
        iso: decode(msg.d8(2))?,
    })
}

/// Writes the raw general-purpose control word.
pub fn set_gp<I: ScIpc + ?Sized>(
    ipc: &mut I,
    pin: Pin,
    ctrl: u32,
) -> Result<(), ScError> {
    let mut msg = request(Func::SetGp, 3);
    msg.set_d32(0, ctrl);
    msg.set_d16(4, pin.0);
    transact(ipc, &mut msg)
}

pub fn get_gp<I: ScIpc + ?Sized>(
    ipc: &mut I,
    pin: Pin,
) -> Result<u32, ScError> {
    let msg = get_by_pin(ipc, Func::GetGp, pin)?;
    Ok(msg.d32(0))
}

pub fn set_gp_28lpp<I: ScIpc + ?Sized>(
    ipc: &mut I,
    pin: Pin,
    gp: Lpp28Gp,
) -> Result<(), ScError> {
    let mut msg = request(Func::SetGp28Lpp, 3);
    msg.set_d16(0, pin.0);
    msg.set_d8(2, gp.dse as u8);
    msg.set_d8(3, gp.ps as u8);
    msg.set_bool(4, gp.slew_rate);
    msg.set_bool(5, gp.hysteresis);
    msg.set_bool(6, gp.pull_enable);
    transact(ipc, &mut msg)
}

pub fn get_gp_28lpp<I: ScIpc + ?Sized>(
    ipc: &mut I,
    pin: Pin,
) -> Result<Lpp28Gp, ScError> {
    let msg = get_by_pin(ipc, Func::GetGp28Lpp, pin)?;
    Ok(Lpp28Gp {
        dse: decode(msg.d8(0))?,
        ps: decode(msg.d8(1))?,
        slew_rate: msg.bool_at(2),
        hysteresis: msg.bool_at(3),
        pull_enable: msg.bool_at(4),
    })
}

pub fn set_wakeup<I: ScIpc + ?Sized>(
    ipc: &mut I,
    pin: Pin,
    wakeup: Wakeup,
) -> Result<(), ScError> {
    let mut msg = request(Func::SetWakeup, 2);
    msg.set_d16(0, pin.0);
    msg.set_d8(2, wakeup as u8);
    transact(ipc, &mut msg)
}

pub fn get_wakeup<I: ScIpc + ?Sized>(
    ipc: &mut I,
    pin: Pin,
) -> Result<Wakeup, ScError> {
    let msg = get_by_pin(ipc, Func::GetWakeup, pin)?;
    decode(msg.d8(0))
}

pub fn set_all<I: ScIpc + ?Sized>(
    ipc: &mut I,
    pin: Pin,
    all: PadAll,
) -> Result<(), ScError> {
    let mut msg = request(Func::SetAll, 4);
    msg.set_d32(0, all.ctrl);
    msg.set_d16(4, pin.0);
    msg.set_d8(6, all.mux.mux);
    msg.set_d8(7, all.mux.config as u8);
    msg.set_d8(8, all.mux.iso as u8);
    msg.set_d8(9, all.wakeup as u8);
    transact(ipc, &mut msg)
}

pub fn get_all<I: ScIpc + ?Sized>(
    ipc: &mut I,
    pin: Pin,
) -> Result<PadAll, ScError> {
    let msg = get_by_pin(ipc, Func::GetAll, pin)?;
    Ok(PadAll {
        ctrl: msg.d32(0),
        mux: PadMux {
            mux: msg.d8(4),
            config: decode(msg.d8(5))?,
            iso: decode(msg.d8(6))?,
        },
        wakeup: decode(msg.d8(7))?,
    })
}

pub fn set_gp_28fdsoi<I: ScIpc + ?Sized>(
    ipc: &mut I,
    pin: Pin,
    dse: Fdsoi28Dse,
    ps: Fdsoi28Ps,
) -> Result<(), ScError> {
    let mut msg = request(Func::SetGp28Fdsoi, 2);
    msg.set_d16(0, pin.0);
    msg.set_d8(2, dse as u8);
    msg.set_d8(3, ps as u8);
    transact(ipc, &mut msg)
}

pub fn get_gp_28fdsoi<I: ScIpc + ?Sized>(
    ipc: &mut I,
    pin: Pin,
) -> Result<(Fdsoi28Dse, Fdsoi28Ps), ScError> {
    let msg = get_by_pin(ipc, Func::GetGp28Fdsoi, pin)?;
    Ok((decode(msg.d8(0))?, decode(msg.d8(1))?))
}

pub fn set_gp_28fdsoi_comp<I: ScIpc + ?Sized>(
    ipc: &mut I,
    pin: Pin,
    comp: Fdsoi28Comp,
) -> Result<(), ScError> {
    let mut msg = request(Func::SetGp28FdsoiComp, 3);
    msg.set_d16(0, pin.0);
    msg.set_d8(2, comp.compen);
    msg.set_d8(3, comp.rasrcp);
    msg.set_d8(4, comp.rasrcn);
    msg.set_bool(5, comp.fastfrz);
    msg.set_bool(6, comp.nasrc_sel);
    transact(ipc, &mut msg)
}

pub fn get_gp_28fdsoi_comp<I: ScIpc + ?Sized>(
    ipc: &mut I,
    pin: Pin,
) -> Result<Fdsoi28CompStatus, ScError> {
    let msg = get_by_pin(ipc, Func::GetGp28FdsoiComp, pin)?;
    Ok(Fdsoi28CompStatus {
        settings: Fdsoi28Comp {
            compen: msg.d8(0),
            rasrcp: msg.d8(1),
            rasrcn: msg.d8(2),
            fastfrz: msg.bool_at(4),
            nasrc_sel: msg.bool_at(5),
        },
        nasrc: msg.d8(3),
        compok: msg.bool_at(6),
    })
}

/// Writes the pad's raw configuration register.
pub fn set<I: ScIpc + ?Sized>(
    ipc: &mut I,
    pin: Pin,
    value: u32,
) -> Result<(), ScError> {
    let mut msg = request(Func::Set, 3);
    msg.set_d32(0, value);
    msg.set_d16(4, pin.0);
    transact(ipc, &mut msg)
}

pub fn get<I: ScIpc + ?Sized>(ipc: &mut I, pin: Pin) -> Result<u32, ScError> {
    let msg = get_by_pin(ipc, Func::Get, pin)?;
    Ok(msg.d32(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeScu;

    const PAD: u8 = Service::Pad as u8;

    #[test]
    fn mux_round_trip_through_the_scu() {
        let mut scu = FakeScu::new();
        let mux = PadMux {
            mux: 2,
            config: PadConfig::OpenDrainInput,
            iso: Iso::Late,
        };
        set_mux(&mut scu, Pin(0x30), mux).unwrap();
        let req = scu.last();
        assert_eq!((req.svc, req.func, req.size), (PAD, 1, 3));
        assert_eq!(req.word(0), 0x0202_0030);
        assert_eq!(req.word(1), 0x02);

        scu.reply(0, |m| {
            m.set_d8(0, 2);
            m.set_d8(1, 2);
            m.set_d8(2, 2);
        });
        assert_eq!(get_mux(&mut scu, Pin(0x30)), Ok(mux));
        assert_eq!((scu.last().func, scu.last().size), (6, 2));
    }

    #[test]
    fn out_of_range_reply_fields_are_ipc_errors() {
        let mut scu = FakeScu::new();
        scu.reply(0, |m| m.set_d8(0, 3));
        assert_eq!(get_wakeup(&mut scu, Pin(1)), Err(ScError::Ipc));

        scu.reply(0, |m| m.set_d8(1, 9));
        assert_eq!(get_mux(&mut scu, Pin(1)), Err(ScError::Ipc));
    }

    #[test]
    fn refused_pad_reports_no_access() {
        let mut scu = FakeScu::new();
        scu.reply(4, |_| ());
        assert_eq!(
            set_wakeup(&mut scu, Pin(7), Wakeup::RisingEdge),
            Err(ScError::NoAccess)
        );
        assert_eq!(scu.last().word(0), 0x0006_0007);
    }

    #[test]
    fn control_word_goes_before_the_pin() {
        let mut scu = FakeScu::new();
        set_gp(&mut scu, Pin(0x1234), 0xdead_beef).unwrap();
        set(&mut scu, Pin(0x55), 0x0600_0021).unwrap();

        let r = &scu.requests;
        assert_eq!((r[0].func, r[0].size), (2, 3));
        assert_eq!([r[0].word(0), r[0].word(1)], [0xdead_beef, 0x1234]);
        assert_eq!((r[1].func, r[1].size), (15, 3));
        assert_eq!([r[1].word(0), r[1].word(1)], [0x0600_0021, 0x55]);

        scu.reply(0, |m| m.set_d32(0, 0x0600_0021));
        assert_eq!(get(&mut scu, Pin(0x55)), Ok(0x0600_0021));
        scu.reply(0, |m| m.set_d32(0, 0xdead_beef));
        assert_eq!(get_gp(&mut scu, Pin(0x1234)), Ok(0xdead_beef));
        assert_eq!(scu.calls()[2..], [(PAD, 16), (PAD, 7)]);
    }

    #[test]
    fn set_all_packs_four_words() {
        let mut scu = FakeScu::new();
        let all = PadAll {
            mux: PadMux {
                mux: 1,
                config: PadConfig::OutputInput,
                iso: Iso::Off,
            },
            ctrl: 0x0000_00c0,
            wakeup: Wakeup::LowLevel,
        };
        set_all(&mut scu, Pin(0x0102), all).unwrap();
        let req = scu.last();
        assert_eq!((req.func, req.size), (5, 4));
        assert_eq!(req.word(0), 0xc0);
        assert_eq!(req.word(1), 0x0301_0102);
        assert_eq!(req.word(2), 0x0400);

        scu.reply(0, |m| {
            m.set_d32(0, 0xc0);
            m.set_d8(4, 1);
            m.set_d8(5, 3);
            m.set_d8(6, 0);
            m.set_d8(7, 4);
        });
        assert_eq!(get_all(&mut scu, Pin(0x0102)), Ok(all));
    }

    #[test]
    fn lpp_drive_and_pulls() {
        let mut scu = FakeScu::new();
        let gp = Lpp28Gp {
            dse: Lpp28Dse::X6,
            slew_rate: true,
            hysteresis: false,
            pull_enable: true,
            ps: Lpp28Ps::PullUp47K,
        };
        set_gp_28lpp(&mut scu, Pin(9), gp).unwrap();
        assert_eq!(scu.last().word(0), 0x0203_0009);
        assert_eq!(scu.last().word(1), 0x0001_0001);

        scu.reply(0, |m| {
            m.set_d8(0, 3);
            m.set_d8(1, 2);
            m.set_d8(2, 1);
            m.set_d8(4, 1);
        });
        assert_eq!(get_gp_28lpp(&mut scu, Pin(9)), Ok(gp));
    }

    #[test]
    fn fdsoi_drive_strength_aliases() {
        assert_eq!(Fdsoi28Dse::V33_12MA as u8, 3);
        assert_eq!(Fdsoi28Dse::DUAL_VOLT_LOW, Fdsoi28Dse::V18_2mA);

        let mut scu = FakeScu::new();
        set_gp_28fdsoi(&mut scu, Pin(4), Fdsoi28Dse::V33_8MA, Fdsoi28Ps::None)
            .unwrap();
        assert_eq!(scu.last().word(0), 0x0302_0004);

        scu.reply(0, |m| {
            m.set_d8(0, 7);
            m.set_d8(1, 1);
        });
        assert_eq!(
            get_gp_28fdsoi(&mut scu, Pin(4)),
            Ok((Fdsoi28Dse::V33HighSpeed, Fdsoi28Ps::PullUp))
        );
    }

    #[test]
    fn compensation_cell() {
        let mut scu = FakeScu::new();
        let comp = Fdsoi28Comp {
            compen: 2,
            fastfrz: true,
            rasrcp: 0x11,
            rasrcn: 0x22,
            nasrc_sel: false,
        };
        set_gp_28fdsoi_comp(&mut scu, Pin(3), comp).unwrap();
        assert_eq!(scu.last().word(0), 0x1102_0003);
        assert_eq!(scu.last().word(1), 0x0000_0122);

        scu.reply(0, |m| {
            m.set_d8(0, 2);
            m.set_d8(1, 0x11);
            m.set_d8(2, 0x22);
            m.set_d8(3, 0x2a);
            m.set_d8(4, 1);
            m.set_d8(6, 1);
        });
        assert_eq!(
            get_gp_28fdsoi_comp(&mut scu, Pin(3)),
            Ok(Fdsoi28CompStatus {
                settings: comp,
                compok: true,
                nasrc: 0x2a,
            })
        );
    }
}
