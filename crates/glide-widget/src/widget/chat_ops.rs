//! Chat operations: submission, reply delivery, clearing, and rating.

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::debug;

use glide_chat::{Message, Rating};
use glide_common::{Notification, WidgetEvent};

use super::Widget;

impl Widget {
    /// Submit a user utterance. Whitespace is trimmed; empty
    /// submissions and submissions while a reply is pending are
    /// ignored.
    pub fn submit(&mut self, text: &str, now: Instant) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        if self.scheduler.is_waiting() {
            debug!("submission ignored while a reply is pending");
            return false;
        }

        let user_id = self.thread.append(Message::user(trimmed));
        self.thread.record_input(trimmed);
        self.events
            .publish(WidgetEvent::MessageAppended { id: user_id });

        // The reply is computed now but surfaces later, after a typing
        // delay drawn from the configured band.
        let reply = self.engine.respond(trimmed, self.locale);
        let message = Message::bot(reply.body)
            .with_suggestions(reply.suggestions)
            .with_products(reply.products);
        let delay = self.draw_delay();
        if self.scheduler.schedule(message, delay, now) {
            self.events.publish(WidgetEvent::ReplyScheduled {
                delay_ms: delay.as_millis() as u64,
            });
        }
        self.save_thread();
        true
    }

    /// Surface the pending reply once its delay has elapsed. Hosts
    /// pump this from their frame or timer loop.
    pub fn tick(&mut self, now: Instant) -> Option<Message> {
        let reply = self.scheduler.poll(now)?;
        let id = self.thread.append(reply);
        self.events.publish(WidgetEvent::MessageAppended { id });
        self.save_thread();
        self.thread.last().cloned()
    }

    /// Reset the thread to a fresh welcome, discarding any pending
    /// reply.
    pub fn clear_thread(&mut self) -> bool {
        if self.scheduler.is_waiting() {
            self.scheduler.cancel();
            self.events.publish(WidgetEvent::ReplyDiscarded);
        }
        self.thread.clear(self.profile, self.locale);
        self.events.publish(WidgetEvent::ThreadCleared);
        self.notifications.push(Notification::success(
            "Chat cleared",
            "The conversation has been reset.",
        ));
        self.save_thread();
        true
    }

    /// Record a helpfulness vote on a bot message. First write wins;
    /// repeat votes and votes on user messages are rejected.
    pub fn rate(&mut self, message_id: &str, helpful: bool) -> bool {
        let rating = if helpful { Rating::Up } else { Rating::Down };
        if !self.thread.rate(message_id, rating) {
            return false;
        }
        self.events.publish(WidgetEvent::MessageRated {
            id: message_id.to_string(),
            helpful,
        });
        self.notifications.push(Notification::success(
            "Feedback received",
            "Thanks for rating this reply.",
        ));
        self.save_thread();
        true
    }

    /// Draw a typing delay from the configured band.
    fn draw_delay(&mut self) -> Duration {
        let ms = if self.delay_min_ms >= self.delay_max_ms {
            self.delay_min_ms
        } else {
            self.rng.gen_range(self.delay_min_ms..=self.delay_max_ms)
        };
        Duration::from_millis(ms)
    }
}
