// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cross-core rendezvous around a DRAM frequency change.
//!
//! While the frequency changes, DRAM is unusable, so every core other than
//! the one driving the change (the leader) must be parked somewhere that
//! issues no memory traffic. Each other core (a follower) enters through its
//! own firmware call, publishes itself in a readiness mask with one byte lane
//! per core, and waits for events until the leader drops the `waiting` flag.
//!
//! The leader raises `waiting`, wakes the followers, spins until the
//! readiness mask matches every online core except itself, runs the critical
//! section, then drops `waiting`, clears the mask and issues `dsb; sev; isb`.
//! Followers read `waiting` with plain loads and take no lock; the barrier
//! before `sev` is what guarantees they see the flag drop once woken.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use ringbuf::*;

use crate::cpu::Cpu;

#[derive(Copy, Clone, Debug, PartialEq)]
enum Trace {
    None,
    Parked(usize),
    Released(usize),
    Gathering { leader: usize, expected: u32 },
    Gathered,
    FollowersReleased,
}

ringbuf!(Trace, 16, Trace::None);

/// The readiness bit for `core`: bit 0 of its byte lane.
pub const fn lane(core: usize) -> u32 {
    1 << (core * 8)
}

/// Every lane bit for a cluster of `cores` cores.
pub const fn all_lanes(cores: usize) -> u32 {
    let mut mask = 0;
    let mut i = 0;
    while i < cores {
        mask |= lane(i);
        i += 1;
    }
    mask
}

pub struct Rendezvous {
    /// Serializes follower updates of `ready`.
    lock: spin::Mutex<()>,
    ready: AtomicU32,
    waiting: AtomicBool,
}

impl Rendezvous {
    pub const fn new() -> Self {
        Self {
            lock: spin::Mutex::new(()),
            ready: AtomicU32::new(0),
            // Raised from the start, so a follower that beats the leader's
            // first store still parks.
            waiting: AtomicBool::new(true),
        }
    }

    /// Current readiness mask.
    pub fn ready_mask(&self) -> u32 {
        self.ready.load(Ordering::Acquire)
    }

    /// Whether followers are being held.
    pub fn is_holding(&self) -> bool {
        self.waiting.load(Ordering::Acquire)
    }

    /// Follower side: publish this core and wait to be released.
    pub fn park<C: Cpu>(&self, cpu: &C) {
        let core = cpu.core_id();
        {
            let _guard = self.lock.lock();
            let ready = self.ready.load(Ordering::Relaxed);
            self.ready.store(ready | lane(core), Ordering::Release);
        }
        ringbuf_entry!(Trace::Parked(core));

        loop {
            cpu.wait_for_event();
            if !self.waiting.load(Ordering::Acquire) {
                break;
            }
        }
        ringbuf_entry!(Trace::Released(core));
    }

    /// Leader side.
    ///
    /// `online` is the caller's online-core mask (one bit per byte lane);
    /// lanes beyond `cores` are ignored. `wake` is handed each other online
    /// core to signal, and `critical` runs once every one of them is parked.
    pub fn lead<C: Cpu, R>(
        &self,
        cpu: &C,
        cores: usize,
        online: u32,
        mut wake: impl FnMut(usize),
        critical: impl FnOnce() -> R,
    ) -> R {
        let me = cpu.core_id();
        self.waiting.store(true, Ordering::Release);

        for core in (0..cores).filter(|&c| c != me) {
            if online & lane(core) != 0 {
                wake(core);
            }
        }

        let expected = online & all_lanes(cores) & !lane(me);
        ringbuf_entry!(Trace::Gathering {
            leader: me,
            expected
        });
        // No deadline: a core that never arrives is a hang for the watchdog.
        while self.ready.load(Ordering::Acquire) != expected {
            core::hint::spin_loop();
        }
        ringbuf_entry!(Trace::Gathered);

        let r = critical();

        self.waiting.store(false, Ordering::Release);
        self.ready.store(0, Ordering::Release);
        cpu.dsb();
        cpu.send_event();
        cpu.isb();
        ringbuf_entry!(Trace::FollowersReleased);
        r
    }
}

impl Default for Rendezvous {
    fn default() -> Self {
        Self::new()
    }
}
