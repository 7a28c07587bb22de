// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use byteorder::{ByteOrder, LittleEndian};
use num_derive::FromPrimitive;

pub const SC_RPC_VERSION: u8 = 1;

/// Largest message in 32-bit words, header included.
pub const SC_RPC_MAX_MSG: usize = 8;

const DATA_WORDS: usize = SC_RPC_MAX_MSG - 1;
const DATA_BYTES: usize = DATA_WORDS * 4;

#[derive(Copy, Clone, Debug, Eq, PartialEq, FromPrimitive)]
#[repr(u8)]
pub enum Service {
    Unknown = 0,
    Return = 1,
    Pm = 2,
    Rm = 3,
    Timer = 5,
    Pad = 6,
    Misc = 7,
    Irq = 8,
}

/// One RPC message: a header word followed by up to seven payload words.
///
/// On the wire the header is `version | size << 8 | svc << 16 | func << 24`
/// and `size` counts words including the header. Payload fields are packed
/// little-endian at byte offsets into the payload; the `d8`/`d16`/`d32`
/// accessors take those offsets.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct RpcMsg {
    pub version: u8,
    pub size: u8,
    pub svc: u8,
    pub func: u8,
    data: [u8; DATA_BYTES],
}

impl RpcMsg {
    pub fn new(svc: Service, func: u8, size: u8) -> Self {
        Self {
            version: SC_RPC_VERSION,
            size,
            svc: svc as u8,
            func,
            data: [0; DATA_BYTES],
        }
    }

    /// The result code of a reply, which travels in the function byte.
    pub fn result(&self) -> u8 {
        self.func
    }

    pub fn header(&self) -> u32 {
        u32::from_le_bytes([self.version, self.size, self.svc, self.func])
    }

    pub fn set_header(&mut self, word: u32) {
        let [version, size, svc, func] = word.to_le_bytes();
        self.version = version;
        self.size = size;
        self.svc = svc;
        self.func = func;
    }

    /// Payload word `i`, i.e. message word `i + 1`.
    pub fn word(&self, i: usize) -> u32 {
        LittleEndian::read_u32(&self.data[i * 4..])
    }

    pub fn set_word(&mut self, i: usize, value: u32) {
        LittleEndian::write_u32(&mut self.data[i * 4..], value);
    }

    pub fn d8(&self, offset: usize) -> u8 {
        self.data[offset]
    }

    pub fn set_d8(&mut self, offset: usize, value: u8) {
        self.data[offset] = value;
    }

    pub fn d16(&self, offset: usize) -> u16 {
        LittleEndian::read_u16(&self.data[offset..])
    }

    pub fn set_d16(&mut self, offset: usize, value: u16) {
        LittleEndian::write_u16(&mut self.data[offset..], value);
    }

    pub fn d32(&self, offset: usize) -> u32 {
        LittleEndian::read_u32(&self.data[offset..])
    }

    pub fn set_d32(&mut self, offset: usize, value: u32) {
        LittleEndian::write_u32(&mut self.data[offset..], value);
    }

    pub fn bool_at(&self, offset: usize) -> bool {
        self.d8(offset) != 0
    }

    pub fn set_bool(&mut self, offset: usize, value: bool) {
        self.set_d8(offset, u8::from(value));
    }

    /// A 64-bit address carried as two words, high word first.
    pub fn addr(&self, offset: usize) -> u64 {
        (u64::from(self.d32(offset)) << 32) | u64::from(self.d32(offset + 4))
    }

    pub fn set_addr(&mut self, offset: usize, value: u64) {
        self.set_d32(offset, (value >> 32) as u32);
        self.set_d32(offset + 4, value as u32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_layout() {
        let msg = RpcMsg::new(Service::Rm, 8, 2);
        assert_eq!(msg.header(), 0x0803_0201);

        let mut reply = RpcMsg::default();
        reply.set_header(0x0401_0201);
        assert_eq!(reply.version, 1);
        assert_eq!(reply.size, 2);
        assert_eq!(reply.svc, Service::Return as u8);
        assert_eq!(reply.result(), 4);
    }

    #[test]
    fn fields_pack_into_words() {
        let mut msg = RpcMsg::new(Service::Rm, 9, 3);
        msg.set_d16(0, 0x1234);
        msg.set_d16(2, 0x5678);
        msg.set_bool(4, true);
        assert_eq!(msg.word(0), 0x5678_1234);
        assert_eq!(msg.word(1), 0x0000_0001);
        assert_eq!(msg.d8(1), 0x12);
    }

    #[test]
    fn addresses_travel_high_word_first() {
        let mut msg = RpcMsg::default();
        msg.set_addr(8, 0x0000_0008_8000_0000);
        assert_eq!(msg.word(2), 0x8);
        assert_eq!(msg.word(3), 0x8000_0000);
        assert_eq!(msg.addr(8), 0x0000_0008_8000_0000);
    }

    #[test]
    fn last_payload_word() {
        let mut msg = RpcMsg::default();
        msg.set_word(DATA_WORDS - 1, 0xdead_beef);
        assert_eq!(msg.d32(24), 0xdead_beef);
    }
}
