// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An SCU stand-in that records requests and plays back canned replies.

use std::collections::VecDeque;

use crate::{RpcMsg, ScError, ScIpc, Service};

#[derive(Default)]
pub struct FakeScu {
    pub requests: Vec<RpcMsg>,
    replies: VecDeque<RpcMsg>,
    /// Fails the transport on the call with this index.
    pub break_on: Option<usize>,
}

impl FakeScu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a reply with result `result` and payload filled in by `fill`.
    pub fn reply(
        &mut self,
        result: u8,
        fill: impl FnOnce(&mut RpcMsg),
    ) -> &mut Self {
        let mut msg = RpcMsg::new(Service::Return, result, 1);
        fill(&mut msg);
        self.replies.push_back(msg);
        self
    }

    pub fn ok(&mut self) -> &mut Self {
        self.reply(0, |_| ())
    }

    pub fn last(&self) -> &RpcMsg {
        self.requests.last().unwrap()
    }

    /// `(svc, func)` of each request in order.
    pub fn calls(&self) -> Vec<(u8, u8)> {
        self.requests.iter().map(|m| (m.svc, m.func)).collect()
    }
}

impl ScIpc for FakeScu {
    fn call(
        &mut self,
        msg: &mut RpcMsg,
        no_resp: bool,
    ) -> Result<(), ScError> {
        assert_eq!(msg.version, crate::SC_RPC_VERSION);
        self.requests.push(*msg);
        if self.break_on == Some(self.requests.len() - 1) {
            return Err(ScError::Ipc);
        }
        if !no_resp {
            // An unscripted call succeeds with an empty payload.
            *msg = self
                .replies
                .pop_front()
                .unwrap_or_else(|| RpcMsg::new(Service::Return, 0, 1));
        }
        Ok(())
    }
}
