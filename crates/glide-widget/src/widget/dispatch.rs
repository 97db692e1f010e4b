//! Input event dispatch: routes normalized host events to operations.

use std::time::Instant;

use glide_common::{Point, WidgetEvent};
use glide_panel::HitRegion;
use glide_platform::{InputEvent, Key, UiIntent};

use super::Widget;

impl Widget {
    /// Feed one host event through the widget. Returns whether the
    /// event changed widget state.
    pub fn handle(&mut self, event: InputEvent, now: Instant) -> bool {
        match event {
            InputEvent::PointerDown(point) => self.pointer_down(point),
            InputEvent::PointerMove(point) => self.pointer_move(point),
            // Blur is treated as pointer-capture loss: any in-flight
            // drag or resize commits where it stands.
            InputEvent::PointerUp | InputEvent::WindowBlur => self.end_session(),
            InputEvent::ViewportResized(viewport) => {
                self.panel.set_viewport(viewport);
                self.save_geometry();
                true
            }
            InputEvent::KeyDown(Key::Escape) => self.close(),
            // Enter only reaches us from an empty composer; a non-empty
            // composer arrives as `Submit`.
            InputEvent::KeyDown(Key::Enter) => false,
            InputEvent::Submit(text) => self.submit(&text, now),
            InputEvent::Intent(intent) => self.intent(intent, now),
        }
    }

    fn pointer_down(&mut self, point: Point) -> bool {
        match self.panel.hit_test(point) {
            HitRegion::Launcher => self.open(),
            HitRegion::Header => self.panel.begin_drag(point),
            HitRegion::ResizeHandle => self.panel.begin_resize(point),
            HitRegion::Body | HitRegion::Outside => false,
        }
    }

    fn pointer_move(&mut self, point: Point) -> bool {
        if !self.panel.pointer_moved(point) {
            return false;
        }
        let rect = self.panel.rect();
        if self.panel.is_dragging() {
            self.events.publish(WidgetEvent::PanelMoved(rect));
        } else {
            self.events.publish(WidgetEvent::PanelResized(rect));
        }
        true
    }

    fn end_session(&mut self) -> bool {
        if !self.panel.end_session() {
            return false;
        }
        self.save_geometry();
        true
    }

    fn intent(&mut self, intent: UiIntent, now: Instant) -> bool {
        match intent {
            UiIntent::OpenPanel => self.open(),
            UiIntent::ClosePanel => self.close(),
            UiIntent::TogglePanel => self.toggle(),
            UiIntent::Minimize => self.minimize(),
            UiIntent::Maximize => self.maximize(),
            UiIntent::Restore => self.restore(),
            UiIntent::ClearThread => self.clear_thread(),
            UiIntent::Rate {
                message_id,
                helpful,
            } => self.rate(&message_id, helpful),
            UiIntent::Suggestion(text) => self.submit(&text, now),
        }
    }
}
