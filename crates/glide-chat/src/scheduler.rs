//! Single-slot reply scheduler.
//!
//! Models the "assistant is typing" delay as a pollable slot instead of
//! a spawned timer: the widget pumps `poll(now)` from its tick and the
//! reply surfaces once its deadline passes. Cancellation bumps a
//! generation counter, so a timer armed before `clear()` or `close()`
//! can never deliver into the fresh thread.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::message::Message;

struct PendingReply {
    fire_at: Instant,
    reply: Message,
    generation: u64,
}

pub struct ReplyScheduler {
    slot: Option<PendingReply>,
    generation: u64,
}

impl ReplyScheduler {
    pub fn new() -> Self {
        Self {
            slot: None,
            generation: 0,
        }
    }

    /// Arm the slot. Refused while a reply is already pending: the
    /// widget disables input while waiting, so a second submission is a
    /// caller bug, reported with `false` rather than a panic.
    pub fn schedule(&mut self, reply: Message, delay: Duration, now: Instant) -> bool {
        if self.is_waiting() {
            return false;
        }
        debug!(delay_ms = delay.as_millis() as u64, "reply scheduled");
        self.slot = Some(PendingReply {
            fire_at: now + delay,
            reply,
            generation: self.generation,
        });
        true
    }

    /// A reply is armed and still current.
    pub fn is_waiting(&self) -> bool {
        self.slot
            .as_ref()
            .is_some_and(|p| p.generation == self.generation)
    }

    /// Deliver the pending reply once its deadline has passed. Stale
    /// entries (armed before a `cancel`) are dropped silently.
    pub fn poll(&mut self, now: Instant) -> Option<Message> {
        let pending = self.slot.as_ref()?;
        if pending.generation != self.generation {
            self.slot = None;
            return None;
        }
        if now < pending.fire_at {
            return None;
        }
        self.slot.take().map(|p| p.reply)
    }

    /// Invalidate any armed reply. Called on thread clear and panel
    /// close.
    pub fn cancel(&mut self) {
        if self.is_waiting() {
            debug!("pending reply cancelled");
        }
        self.generation = self.generation.wrapping_add(1);
    }
}

impl Default for ReplyScheduler {
    fn default() -> Self {
        Self::new()
    }
}
