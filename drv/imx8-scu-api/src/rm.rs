// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Resource management (RM) service.
//!
//! The SCU divides resources, pins and memory regions between partitions,
//! each with its own domain id and security attributes. These calls let the
//! secure world carve out its own partition and hand the rest to the OS.

use bitflags::bitflags;

use crate::{transact, RpcMsg, ScError, ScIpc, Service};

/// A partition number.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Partition(pub u8);

/// An SoC resource index.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Resource(pub u16);

/// A pad index.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Pin(pub u16);

/// A memory region index.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MemReg(pub u8);

/// Domain id.
pub type Did = u8;

/// SMMU stream id.
pub type Sid = u16;

bitflags! {
    /// Attributes of a new partition.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
    pub struct PartitionFlags: u8 {
        const SECURE = 1 << 0;
        const ISOLATED = 1 << 1;
        const RESTRICTED = 1 << 2;
        const CONFIDENTIAL = 1 << 3;
        const COHERENT = 1 << 4;
    }
}

/// Access a partition is given to a peripheral or memory region.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Perm {
    None = 0,
    SecR = 1,
    SecPrivRw = 2,
    SecRw = 3,
    NsPrivR = 4,
    NsR = 5,
    NsPrivRw = 6,
    Full = 7,
}

/// How a bus master's security or privilege attribute is presented.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Spa {
    PassThrough = 0,
    PassSid = 1,
    Assert = 2,
    Negate = 3,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
enum Func {
    PartitionAlloc = 1,
    PartitionFree = 2,
    PartitionStatic = 3,
    PartitionLock = 4,
    GetPartition = 5,
    SetParent = 6,
    MoveAll = 7,
    AssignResource = 8,
    SetResourceMovable = 9,
    SetMasterAttributes = 10,
    SetMasterSid = 11,
    SetPeripheralPermissions = 12,
    IsResourceOwned = 13,
    IsResourceMaster = 14,
    IsResourcePeripheral = 15,
    GetResourceInfo = 16,
    MemregAlloc = 17,
    MemregFree = 18,
    AssignMemreg = 19,
    SetMemregPermissions = 20,
    IsMemregOwned = 21,
    GetMemregInfo = 22,
    AssignPin = 23,
    SetPinMovable = 24,
    IsPinOwned = 25,
    GetDid = 26,
}

fn request(func: Func, size: u8) -> RpcMsg {
    RpcMsg::new(Service::Rm, func as u8, size)
}

/// For the ownership queries, the result byte is the answer.
fn query<I: ScIpc + ?Sized>(
    ipc: &mut I,
    mut msg: RpcMsg,
) -> Result<bool, ScError> {
    ipc.call(&mut msg, false)?;
    Ok(msg.result() != 0)
}

pub fn partition_alloc<I: ScIpc + ?Sized>(
    ipc: &mut I,
    flags: PartitionFlags,
) -> Result<Partition, ScError> {
    let mut msg = request(Func::PartitionAlloc, 3);
    msg.set_bool(0, flags.contains(PartitionFlags::SECURE));
    msg.set_bool(1, flags.contains(PartitionFlags::ISOLATED));
    msg.set_bool(2, flags.contains(PartitionFlags::RESTRICTED));
    msg.set_bool(3, flags.contains(PartitionFlags::CONFIDENTIAL));
    msg.set_bool(4, flags.contains(PartitionFlags::COHERENT));
    transact(ipc, &mut msg)?;
    Ok(Partition(msg.d8(0)))
}

pub fn partition_free<I: ScIpc + ?Sized>(
    ipc: &mut I,
    pt: Partition,
) -> Result<(), ScError> {
    let mut msg = request(Func::PartitionFree, 2);
    msg.set_d8(0, pt.0);
    transact(ipc, &mut msg)
}

/// Domain id of the caller's partition. The SCU returns it in the result
/// byte, so this only fails if the transport does.
pub fn get_did<I: ScIpc + ?Sized>(ipc: &mut I) -> Result<Did, ScError> {
    let mut msg = request(Func::GetDid, 1);
    ipc.call(&mut msg, false)?;
    Ok(msg.result())
}

pub fn partition_static<I: ScIpc + ?Sized>(
    ipc: &mut I,
    pt: Partition,
    did: Did,
) -> Result<(), ScError> {
    let mut msg = request(Func::PartitionStatic, 2);
    msg.set_d8(0, pt.0);
    msg.set_d8(1, did);
    transact(ipc, &mut msg)
}

pub fn partition_lock<I: ScIpc + ?Sized>(
    ipc: &mut I,
    pt: Partition,
) -> Result<(), ScError> {
    let mut msg = request(Func::PartitionLock, 2);
    msg.set_d8(0, pt.0);
    transact(ipc, &mut msg)
}

/// The caller's own partition.
pub fn get_partition<I: ScIpc + ?Sized>(
    ipc: &mut I,
) -> Result<Partition, ScError> {
    let mut msg = request(Func::GetPartition, 1);
    transact(ipc, &mut msg)?;
    Ok(Partition(msg.d8(0)))
}

pub fn set_parent<I: ScIpc + ?Sized>(
    ipc: &mut I,
    pt: Partition,
    parent: Partition,
) -> Result<(), ScError> {
    let mut msg = request(Func::SetParent, 2);
    msg.set_d8(0, pt.0);
    msg.set_d8(1, parent.0);
    transact(ipc, &mut msg)
}

/// Moves every movable resource and/or pin from `src` to `dst`.
pub fn move_all<I: ScIpc + ?Sized>(
    ipc: &mut I,
    src: Partition,
    dst: Partition,
    move_rsrc: bool,
    move_pins: bool,
) -> Result<(), ScError> {
    let mut msg = request(Func::MoveAll, 2);
    msg.set_d8(0, src.0);
    msg.set_d8(1, dst.0);
    msg.set_bool(2, move_rsrc);
    msg.set_bool(3, move_pins);
    transact(ipc, &mut msg)
}

pub fn assign_resource<I: ScIpc + ?Sized>(
    ipc: &mut I,
    pt: Partition,
    resource: Resource,
) -> Result<(), ScError> {
    let mut msg = request(Func::AssignResource, 2);
    msg.set_d16(0, resource.0);
    msg.set_d8(2, pt.0);
    transact(ipc, &mut msg)
}

/// Marks the inclusive range `first..=last` as movable or pinned.
pub fn set_resource_movable<I: ScIpc + ?Sized>(
    ipc: &mut I,
    first: Resource,
    last: Resource,
    movable: bool,
) -> Result<(), ScError> {
    let mut msg = request(Func::SetResourceMovable, 3);
    msg.set_d16(0, first.0);
    msg.set_d16(2, last.0);
    msg.set_bool(4, movable);
    transact(ipc, &mut msg)
}

pub fn set_master_attributes<I: ScIpc + ?Sized>(
    ipc: &mut I,
    resource: Resource,
    sa: Spa,
    pa: Spa,
    smmu_bypass: bool,
) -> Result<(), ScError> {
    let mut msg = request(Func::SetMasterAttributes, 3);
    msg.set_d16(0, resource.0);
    msg.set_d8(2, sa as u8);
    msg.set_d8(3, pa as u8);
    msg.set_bool(4, smmu_bypass);
    transact(ipc, &mut msg)
}

pub fn set_master_sid<I: ScIpc + ?Sized>(
    ipc: &mut I,
    resource: Resource,
    sid: Sid,
) -> Result<(), ScError> {
    let mut msg = request(Func::SetMasterSid, 2);
    msg.set_d16(0, resource.0);
    msg.set_d16(2, sid);
    transact(ipc, &mut msg)
}

pub fn set_peripheral_permissions<I: ScIpc + ?Sized>(
    ipc: &mut I,
    resource: Resource,
    pt: Partition,
    perm: Perm,
) -> Result<(), ScError> {
    let mut msg = request(Func::SetPeripheralPermissions, 2);
    msg.set_d16(0, resource.0);
    msg.set_d8(2, pt.0);
    msg.set_d8(3, perm as u8);
    transact(ipc, &mut msg)
}

pub fn is_resource_owned<I: ScIpc + ?Sized>(
    ipc: &mut I,
    resource: Resource,
) -> Result<bool, ScError> {
    let mut msg = request(Func::IsResourceOwned, 2);
    msg.set_d16(0, resource.0);
    query(ipc, msg)
}

pub fn is_resource_master<I: ScIpc + ?Sized>(
    ipc: &mut I,
    resource: Resource,
) -> Result<bool, ScError> {
    let mut msg = request(Func::IsResourceMaster, 2);
    msg.set_d16(0, resource.0);
    query(ipc, msg)
}

pub fn is_resource_peripheral<I: ScIpc + ?Sized>(
    ipc: &mut I,
    resource: Resource,
) -> Result<bool, ScError> {
    let mut msg = request(Func::IsResourcePeripheral, 2);
    msg.set_d16(0, resource.0);
    query(ipc, msg)
}

/// Stream id assigned to a bus master.
pub fn get_resource_info<I: ScIpc + ?Sized>(
    ipc: &mut I,
    resource: Resource,
) -> Result<Sid, ScError> {
    let mut msg = request(Func::GetResourceInfo, 2);
    msg.set_d16(0, resource.0);
    transact(ipc, &mut msg)?;
    Ok(msg.d16(0))
}

/// Carves a new memory region out of the caller's, covering the inclusive
/// range `start..=end`.
pub fn memreg_alloc<I: ScIpc + ?Sized>(
    ipc: &mut I,
    start: u64,
    end: u64,
) -> Result<MemReg, ScError> {
    let mut msg = request(Func::MemregAlloc, 5);
    msg.set_addr(0, start);
    msg.set_addr(8, end);
    transact(ipc, &mut msg)?;
    Ok(MemReg(msg.d8(0)))
}

pub fn memreg_free<I: ScIpc + ?Sized>(
    ipc: &mut I,
    mr: MemReg,
) -> Result<(), ScError> {
    let mut msg = request(Func::MemregFree, 2);
    msg.set_d8(0, mr.0);
    transact(ipc, &mut msg)
}

pub fn assign_memreg<I: ScIpc + ?Sized>(
    ipc: &mut I,
    pt: Partition,
    mr: MemReg,
) -> Result<(), ScError> {
    let mut msg = request(Func::AssignMemreg, 2);
    msg.set_d8(0, pt.0);
    msg.set_d8(1, mr.0);
    transact(ipc, &mut msg)
}

pub fn set_memreg_permissions<I: ScIpc + ?Sized>(
    ipc: &mut I,
    mr: MemReg,
    pt: Partition,
    perm: Perm,
) -> Result<(), ScError> {
    let mut msg = request(Func::SetMemregPermissions, 2);
    msg.set_d8(0, mr.0);
    msg.set_d8(1, pt.0);
    msg.set_d8(2, perm as u8);
    transact(ipc, &mut msg)
}

pub fn is_memreg_owned<I: ScIpc + ?Sized>(
    ipc: &mut I,
    mr: MemReg,
) -> Result<bool, ScError> {
    let mut msg = request(Func::IsMemregOwned, 2);
    msg.set_d8(0, mr.0);
    query(ipc, msg)
}

/// Inclusive start and end address of a memory region.
pub fn get_memreg_info<I: ScIpc + ?Sized>(
    ipc: &mut I,
    mr: MemReg,
) -> Result<(u64, u64), ScError> {
    let mut msg = request(Func::GetMemregInfo, 2);
    msg.set_d8(0, mr.0);
    transact(ipc, &mut msg)?;
    Ok((msg.addr(0), msg.addr(8)))
}

pub fn assign_pin<I: ScIpc + ?Sized>(
    ipc: &mut I,
    pt: Partition,
    pin: Pin,
) -> Result<(), ScError> {
    let mut msg = request(Func::AssignPin, 2);
    msg.set_d16(0, pin.0);
    msg.set_d8(2, pt.0);
    transact(ipc, &mut msg)
}

pub fn set_pin_movable<I: ScIpc + ?Sized>(
    ipc: &mut I,
    first: Pin,
    last: Pin,
    movable: bool,
) -> Result<(), ScError> {
    let mut msg = request(Func::SetPinMovable, 3);
    msg.set_d16(0, first.0);
    msg.set_d16(2, last.0);
    msg.set_bool(4, movable);
    transact(ipc, &mut msg)
}

/// The SCU reads only the low byte of the pin index for this query.
pub fn is_pin_owned<I: ScIpc + ?Sized>(
    ipc: &mut I,
    pin: Pin,
) -> Result<bool, ScError> {
    let mut msg = request(Func::IsPinOwned, 2);
    msg.set_d8(0, pin.0 as u8);
    query(ipc, msg)
}
