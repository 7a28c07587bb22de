// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Messaging unit (MU) transport to the SCU.
//!
//! The MU has four transmit and four receive registers. Message word `i`
//! (header is word 0) always travels through register `i % 4`, each send
//! gated on that register's transmit-empty flag and each receive on its
//! receive-full flag.

use mmio::{spin_until, Mmio};
use ringbuf::*;

use crate::{RpcMsg, ScError, ScIpc, SC_RPC_MAX_MSG};

const TR: usize = 0x00;
const RR: usize = 0x10;
const SR: usize = 0x20;

const fn tx_empty(reg: usize) -> u32 {
    (1 << 23) >> reg
}

const fn rx_full(reg: usize) -> u32 {
    (1 << 27) >> reg
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Trace {
    None,
    Request { svc: u8, func: u8, size: u8 },
    Reply { result: u8, size: u8 },
    Oversized(u8),
}

ringbuf!(Trace, 16, Trace::None);

pub struct Mu<M> {
    bus: M,
    base: usize,
}

impl<M: Mmio> Mu<M> {
    pub const fn new(bus: M, base: usize) -> Self {
        Self { bus, base }
    }

    fn send(&self, i: usize, word: u32) {
        let reg = i % 4;
        spin_until(&self.bus, self.base + SR, |sr| sr & tx_empty(reg) != 0);
        self.bus.write32(self.base + TR + reg * 4, word);
    }

    fn receive(&self, i: usize) -> u32 {
        let reg = i % 4;
        spin_until(&self.bus, self.base + SR, |sr| sr & rx_full(reg) != 0);
        self.bus.read32(self.base + RR + reg * 4)
    }
}

impl<M: Mmio> ScIpc for Mu<M> {
    fn call(
        &mut self,
        msg: &mut RpcMsg,
        no_resp: bool,
    ) -> Result<(), ScError> {
        let size = usize::from(msg.size);
        if size > SC_RPC_MAX_MSG {
            ringbuf_entry!(Trace::Oversized(msg.size));
            return Err(ScError::Ipc);
        }

        ringbuf_entry!(Trace::Request {
            svc: msg.svc,
            func: msg.func,
            size: msg.size
        });
        self.send(0, msg.header());
        for i in 1..size {
            self.send(i, msg.word(i - 1));
        }

        if no_resp {
            return Ok(());
        }

        msg.set_header(self.receive(0));
        let size = usize::from(msg.size);
        if size > SC_RPC_MAX_MSG {
            ringbuf_entry!(Trace::Oversized(msg.size));
            return Err(ScError::Ipc);
        }
        for i in 1..size {
            let word = self.receive(i);
            msg.set_word(i - 1, word);
        }
        ringbuf_entry!(Trace::Reply {
            result: msg.result(),
            size: msg.size
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Service;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    const BASE: usize = 0x5d1b_0000;

    /// A messaging unit whose far side has a canned reply queued. Transmit
    /// registers are always empty; every receive register reads full while
    /// reply words remain.
    #[derive(Default)]
    struct SimMu {
        sent: RefCell<Vec<(usize, u32)>>,
        reply: RefCell<VecDeque<u32>>,
        received_on: RefCell<Vec<usize>>,
    }

    impl Mmio for SimMu {
        fn read32(&self, addr: usize) -> u32 {
            match addr - BASE {
                SR => {
                    let mut sr = 0xf << 20;
                    if !self.reply.borrow().is_empty() {
                        sr |= 0xf << 24;
                    }
                    sr
                }
                off @ RR..=0x1c => {
                    self.received_on.borrow_mut().push((off - RR) / 4);
                    self.reply.borrow_mut().pop_front().unwrap()
                }
                off => panic!("read of {off:#x}"),
            }
        }

        fn write32(&self, addr: usize, value: u32) {
            let off = addr - BASE;
            assert!(off < RR, "write to {off:#x}");
            self.sent.borrow_mut().push((off / 4, value));
        }
    }

    fn mu(reply: &[u32]) -> Mu<SimMu> {
        let sim = SimMu::default();
        sim.reply.borrow_mut().extend(reply);
        Mu::new(sim, BASE)
    }

    #[test]
    fn flag_masks() {
        assert_eq!(tx_empty(0), 1 << 23);
        assert_eq!(tx_empty(3), 1 << 20);
        assert_eq!(rx_full(0), 1 << 27);
        assert_eq!(rx_full(3), 1 << 24);
    }

    #[test]
    fn words_rotate_through_the_four_registers() {
        let mut mu = mu(&[]);
        let mut msg = RpcMsg::new(Service::Rm, 17, 6);
        for i in 0..5 {
            msg.set_word(i, 0x100 + i as u32);
        }
        mu.call(&mut msg, true).unwrap();

        assert_eq!(
            *mu.bus.sent.borrow(),
            [
                (0, 0x1103_0601),
                (1, 0x100),
                (2, 0x101),
                (3, 0x102),
                (0, 0x103),
                (1, 0x104),
            ]
        );
    }

    #[test]
    fn reply_overwrites_the_request() {
        let mut mu = mu(&[0x0001_0301, 0xaabb_0007, 0x5555_5555]);
        let mut msg = RpcMsg::new(Service::Rm, 5, 1);
        mu.call(&mut msg, false).unwrap();

        assert_eq!(*mu.bus.sent.borrow(), [(0, 0x0503_0101)]);
        assert_eq!(*mu.bus.received_on.borrow(), [0, 1, 2]);
        assert_eq!(msg.size, 3);
        assert_eq!(msg.result(), 0);
        assert_eq!(msg.d8(0), 7);
        assert_eq!(msg.d32(4), 0x5555_5555);
    }

    #[test]
    fn oversized_request_is_not_sent() {
        let mut mu = mu(&[]);
        let mut msg = RpcMsg::new(Service::Pad, 1, 9);
        assert_eq!(mu.call(&mut msg, false), Err(ScError::Ipc));
        assert!(mu.bus.sent.borrow().is_empty());
    }

    #[test]
    fn oversized_reply_is_a_framing_error() {
        let mut mu = mu(&[0x0000_0901, 1, 2]);
        let mut msg = RpcMsg::new(Service::Pad, 6, 2);
        assert_eq!(mu.call(&mut msg, false), Err(ScError::Ipc));
        // Only the header was consumed.
        assert_eq!(mu.bus.reply.borrow().len(), 2);
    }
}
