use std::time::{Duration, Instant};

use glide_chat::{Author, Locale, Message, Rating};
use glide_common::{Point, Rect, Viewport, WidgetEvent};
use glide_config::GlideConfig;
use glide_panel::PanelMode;
use glide_platform::{InputEvent, Key, MemoryStore, StateStore, UiIntent};
use tokio::sync::broadcast;

use super::Widget;

fn viewport() -> Viewport {
    Viewport::new(1280.0, 800.0)
}

fn widget() -> Widget {
    Widget::with_seed(
        &GlideConfig::default(),
        viewport(),
        Box::new(MemoryStore::new()),
        42,
    )
}

fn open_widget() -> Widget {
    let mut w = widget();
    assert!(w.open());
    w
}

fn drain(rx: &mut broadcast::Receiver<WidgetEvent>) -> Vec<WidgetEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

// With the default config on a 1280x800 viewport the panel anchors at
// (906, 276) sized 350x500, and the launcher circle is centered at
// (1228, 748) with radius 28.

#[test]
fn starts_closed_with_a_welcome_message() {
    let w = widget();
    assert_eq!(w.mode(), PanelMode::Closed);
    assert_eq!(w.thread().len(), 1);
    let welcome = w.thread().last().unwrap();
    assert_eq!(welcome.author, Author::Bot);
    assert!(w.layout().launcher.is_some());
    assert!(w.layout().panel.is_none());
}

#[test]
fn launcher_click_opens_the_panel() {
    let mut w = widget();
    let mut rx = w.events().subscribe();
    let t0 = Instant::now();

    assert!(w.handle(InputEvent::PointerDown(Point::new(1228.0, 748.0)), t0));

    assert_eq!(w.mode(), PanelMode::Open);
    assert_eq!(w.rect(), Rect::new(906.0, 276.0, 350.0, 500.0));
    let events = drain(&mut rx);
    assert!(matches!(events[0], WidgetEvent::PanelOpened));
}

#[test]
fn click_in_launcher_square_but_outside_circle_is_ignored() {
    let mut w = widget();
    let t0 = Instant::now();
    // Corner of the bounding square, 27px diagonal from the center
    assert!(!w.handle(InputEvent::PointerDown(Point::new(1201.0, 721.0)), t0));
    assert_eq!(w.mode(), PanelMode::Closed);
}

#[test]
fn escape_closes_and_repeat_escape_is_inert() {
    let mut w = open_widget();
    let t0 = Instant::now();
    assert!(w.handle(InputEvent::KeyDown(Key::Escape), t0));
    assert_eq!(w.mode(), PanelMode::Closed);
    assert!(!w.handle(InputEvent::KeyDown(Key::Escape), t0));
}

#[test]
fn enter_on_empty_composer_is_a_no_op() {
    let mut w = open_widget();
    assert!(!w.handle(InputEvent::KeyDown(Key::Enter), Instant::now()));
    assert_eq!(w.thread().len(), 1);
}

#[test]
fn header_drag_translates_the_panel() {
    let mut w = open_widget();
    let mut rx = w.events().subscribe();
    let t0 = Instant::now();

    assert!(w.handle(InputEvent::PointerDown(Point::new(1000.0, 300.0)), t0));
    assert!(w.handle(InputEvent::PointerMove(Point::new(950.0, 320.0)), t0));
    assert!(w.handle(InputEvent::PointerUp, t0));

    assert_eq!(w.rect(), Rect::new(856.0, 296.0, 350.0, 500.0));
    let events = drain(&mut rx);
    assert!(events
        .iter()
        .any(|e| matches!(e, WidgetEvent::PanelMoved(r) if *r == w.rect())));
}

#[test]
fn drag_is_clamped_to_the_viewport() {
    let mut w = open_widget();
    let t0 = Instant::now();

    w.handle(InputEvent::PointerDown(Point::new(1000.0, 300.0)), t0);
    w.handle(InputEvent::PointerMove(Point::new(5000.0, 5000.0)), t0);

    assert_eq!(w.rect(), Rect::new(930.0, 300.0, 350.0, 500.0));
}

#[test]
fn corner_handle_resizes_the_panel() {
    let mut w = open_widget();
    let mut rx = w.events().subscribe();
    let t0 = Instant::now();

    assert!(w.handle(InputEvent::PointerDown(Point::new(1250.0, 770.0)), t0));
    assert!(w.handle(InputEvent::PointerMove(Point::new(1270.0, 780.0)), t0));
    assert!(w.handle(InputEvent::PointerUp, t0));

    assert_eq!(w.rect(), Rect::new(906.0, 276.0, 370.0, 510.0));
    let events = drain(&mut rx);
    assert!(events
        .iter()
        .any(|e| matches!(e, WidgetEvent::PanelResized(r) if *r == w.rect())));
}

#[test]
fn resize_respects_band_then_reclamps_origin() {
    let mut w = open_widget();
    let t0 = Instant::now();

    w.handle(InputEvent::PointerDown(Point::new(1250.0, 770.0)), t0);
    w.handle(InputEvent::PointerMove(Point::new(2050.0, 1570.0)), t0);

    // Size capped at 800x900; origin shifts so the rect stays on screen
    assert_eq!(w.rect(), Rect::new(480.0, 0.0, 800.0, 900.0));
}

#[test]
fn pointer_down_on_body_starts_no_session() {
    let mut w = open_widget();
    assert!(!w.handle(
        InputEvent::PointerDown(Point::new(1000.0, 400.0)),
        Instant::now()
    ));
}

#[test]
fn window_blur_commits_an_in_flight_drag() {
    let mut w = open_widget();
    let t0 = Instant::now();

    w.handle(InputEvent::PointerDown(Point::new(1000.0, 300.0)), t0);
    w.handle(InputEvent::PointerMove(Point::new(950.0, 320.0)), t0);
    assert!(w.handle(InputEvent::WindowBlur, t0));

    let rect = w.rect();
    // Further moves are plain hover
    assert!(!w.handle(InputEvent::PointerMove(Point::new(700.0, 700.0)), t0));
    assert_eq!(w.rect(), rect);
}

#[test]
fn maximize_fills_viewport_and_restore_returns_the_rect() {
    let mut w = open_widget();
    let t0 = Instant::now();
    w.handle(InputEvent::PointerDown(Point::new(1000.0, 300.0)), t0);
    w.handle(InputEvent::PointerMove(Point::new(950.0, 320.0)), t0);
    w.handle(InputEvent::PointerUp, t0);
    let before = w.rect();

    assert!(w.maximize());
    assert_eq!(w.layout().panel, Some(viewport().rect()));

    assert!(w.restore());
    assert_eq!(w.rect(), before);
    assert_eq!(w.mode(), PanelMode::Open);
}

#[test]
fn minimize_collapses_to_the_header_band() {
    let mut w = open_widget();
    assert!(w.minimize());
    assert_eq!(w.mode(), PanelMode::Minimized);
    assert_eq!(w.layout().panel, Some(Rect::new(906.0, 276.0, 350.0, 60.0)));
    // The stored rect is untouched
    assert_eq!(w.rect(), Rect::new(906.0, 276.0, 350.0, 500.0));
}

#[test]
fn viewport_resize_reclamps_the_panel() {
    let mut w = open_widget();
    assert!(w.handle(
        InputEvent::ViewportResized(Viewport::new(600.0, 500.0)),
        Instant::now()
    ));
    assert_eq!(w.rect(), Rect::new(250.0, 0.0, 350.0, 500.0));
}

#[test]
fn toggle_intent_flips_between_open_and_closed() {
    let mut w = widget();
    let t0 = Instant::now();
    assert!(w.handle(InputEvent::Intent(UiIntent::TogglePanel), t0));
    assert_eq!(w.mode(), PanelMode::Open);
    assert!(w.handle(InputEvent::Intent(UiIntent::TogglePanel), t0));
    assert_eq!(w.mode(), PanelMode::Closed);
}

#[test]
fn submission_appends_and_schedules_a_reply() {
    let mut w = open_widget();
    let t0 = Instant::now();

    assert!(w.submit("hello there", t0));

    assert_eq!(w.thread().len(), 2);
    let user = w.thread().last().unwrap();
    assert_eq!(user.author, Author::User);
    assert_eq!(user.body, "hello there");
    assert!(w.is_waiting());
    assert_eq!(w.thread().recent_inputs().count(), 1);
}

#[test]
fn reply_surfaces_only_after_its_delay() {
    let mut w = open_widget();
    let t0 = Instant::now();
    w.submit("hello", t0);

    assert!(w.tick(t0).is_none());
    assert!(w.tick(t0 + Duration::from_millis(999)).is_none());
    assert!(w.is_waiting());

    let reply = w.tick(t0 + Duration::from_millis(3001)).unwrap();
    assert_eq!(reply.author, Author::Bot);
    assert_eq!(w.thread().len(), 3);
    assert!(!w.is_waiting());
}

#[test]
fn reply_delay_stays_within_the_configured_band() {
    let mut w = open_widget();
    let mut rx = w.events().subscribe();
    w.submit("hello", Instant::now());

    let delay_ms = drain(&mut rx)
        .iter()
        .find_map(|e| match e {
            WidgetEvent::ReplyScheduled { delay_ms } => Some(*delay_ms),
            _ => None,
        })
        .unwrap();
    assert!((1000..=3000).contains(&delay_ms), "delay {delay_ms}ms");
}

#[test]
fn submission_while_waiting_is_ignored() {
    let mut w = open_widget();
    let t0 = Instant::now();
    assert!(w.submit("first", t0));
    assert!(!w.submit("second", t0));
    assert_eq!(w.thread().len(), 2);
}

#[test]
fn blank_submissions_are_ignored() {
    let mut w = open_widget();
    let t0 = Instant::now();
    assert!(!w.submit("", t0));
    assert!(!w.submit("   \t  ", t0));
    assert_eq!(w.thread().len(), 1);
    assert!(!w.is_waiting());
}

#[test]
fn keyword_submission_gets_the_matching_reply() {
    let mut w = open_widget();
    let t0 = Instant::now();
    w.submit("how long is shipping to Berlin?", t0);

    let reply = w.tick(t0 + Duration::from_millis(3001)).unwrap();
    assert!(reply.body.contains("Shenzhen"));
    // Assistant profile carries no chips
    assert!(reply.suggestions.is_empty());
}

#[test]
fn storefront_reply_carries_chips_and_products() {
    let mut config = GlideConfig::default();
    config.chat.profile = "storefront".to_string();
    let mut w = Widget::with_seed(&config, viewport(), Box::new(MemoryStore::new()), 7);
    w.open();
    let t0 = Instant::now();

    w.submit("any tech deals?", t0);
    let reply = w.tick(t0 + Duration::from_millis(3001)).unwrap();

    assert_eq!(reply.products.len(), 2);
    assert_eq!(reply.products[0].name, "Wireless Headphones Pro");
    assert_eq!(reply.suggestions.len(), 4);
}

#[test]
fn close_discards_the_pending_reply() {
    let mut w = open_widget();
    let mut rx = w.events().subscribe();
    let t0 = Instant::now();
    w.submit("hello", t0);

    assert!(w.close());

    // Well past the original deadline: nothing lands
    assert!(w.tick(t0 + Duration::from_secs(10)).is_none());
    assert_eq!(w.thread().len(), 2);
    assert!(drain(&mut rx)
        .iter()
        .any(|e| matches!(e, WidgetEvent::ReplyDiscarded)));
}

#[test]
fn clear_discards_pending_reply_and_resets_the_thread() {
    let mut w = open_widget();
    let mut rx = w.events().subscribe();
    let t0 = Instant::now();
    w.submit("hello", t0);

    assert!(w.handle(InputEvent::Intent(UiIntent::ClearThread), t0));

    assert_eq!(w.thread().len(), 1);
    assert_eq!(w.thread().last().unwrap().author, Author::Bot);
    assert!(w.tick(t0 + Duration::from_secs(10)).is_none());

    let events = drain(&mut rx);
    assert!(events
        .iter()
        .any(|e| matches!(e, WidgetEvent::ReplyDiscarded)));
    assert!(events
        .iter()
        .any(|e| matches!(e, WidgetEvent::ThreadCleared)));
    assert!(w
        .notifications()
        .visible()
        .iter()
        .any(|n| n.title == "Chat cleared"));
}

#[test]
fn reopening_after_close_accepts_new_submissions() {
    let mut w = open_widget();
    let t0 = Instant::now();
    w.submit("first", t0);
    w.close();
    w.open();

    assert!(w.submit("second", t0));
    let reply = w.tick(t0 + Duration::from_millis(3001)).unwrap();
    assert_eq!(reply.author, Author::Bot);
    // welcome, first, second, reply -- the discarded reply never lands
    assert_eq!(w.thread().len(), 4);
}

#[test]
fn rating_a_bot_reply_is_write_once() {
    let mut w = open_widget();
    let mut rx = w.events().subscribe();
    let t0 = Instant::now();
    w.submit("hello", t0);
    let reply = w.tick(t0 + Duration::from_millis(3001)).unwrap();

    assert!(w.rate(&reply.id, true));
    assert!(!w.rate(&reply.id, false));

    let stored = w
        .thread()
        .messages()
        .iter()
        .find(|m| m.id == reply.id)
        .unwrap();
    assert_eq!(stored.helpfulness, Some(Rating::Up));

    let rated: Vec<_> = drain(&mut rx)
        .into_iter()
        .filter(|e| matches!(e, WidgetEvent::MessageRated { .. }))
        .collect();
    assert_eq!(rated.len(), 1);
    assert!(matches!(
        &rated[0],
        WidgetEvent::MessageRated { helpful: true, .. }
    ));
    assert!(w
        .notifications()
        .visible()
        .iter()
        .any(|n| n.title == "Feedback received"));
}

#[test]
fn rating_a_user_message_is_rejected() {
    let mut w = open_widget();
    let t0 = Instant::now();
    w.submit("hello", t0);
    let user_id = w.thread().last().unwrap().id.clone();

    assert!(!w.handle(
        InputEvent::Intent(UiIntent::Rate {
            message_id: user_id,
            helpful: true,
        }),
        t0
    ));
    assert!(w.notifications().visible().is_empty());
}

#[test]
fn suggestion_chip_submits_its_text() {
    let mut w = open_widget();
    assert!(w.handle(
        InputEvent::Intent(UiIntent::Suggestion("Best deals".to_string())),
        Instant::now()
    ));
    assert_eq!(w.thread().last().unwrap().body, "Best deals");
    assert!(w.is_waiting());
}

#[test]
fn locale_switch_changes_future_replies() {
    let mut w = open_widget();
    let t0 = Instant::now();
    w.set_locale(Locale::De);
    w.submit("xyzzy", t0);

    let reply = w.tick(t0 + Duration::from_millis(3001)).unwrap();
    assert!(reply.body.contains("Vielen Dank"));
}

#[test]
fn reload_restores_mode_geometry_and_thread() {
    let config = GlideConfig::default();
    let mut w = Widget::with_seed(&config, viewport(), Box::new(MemoryStore::new()), 42);
    let t0 = Instant::now();
    w.open();
    w.handle(InputEvent::PointerDown(Point::new(1000.0, 300.0)), t0);
    w.handle(InputEvent::PointerMove(Point::new(950.0, 320.0)), t0);
    w.handle(InputEvent::PointerUp, t0);
    w.submit("shipping times", t0);
    w.tick(t0 + Duration::from_millis(3001)).unwrap();
    w.minimize();
    let rect = w.rect();
    let messages: Vec<Message> = w.thread().messages().to_vec();

    let w2 = Widget::with_seed(&config, viewport(), w.into_store(), 42);

    assert_eq!(w2.mode(), PanelMode::Minimized);
    assert_eq!(w2.rect(), rect);
    assert_eq!(w2.thread().messages(), messages.as_slice());
    assert_eq!(w2.thread().recent_inputs().count(), 1);
}

#[test]
fn maximized_mode_survives_reload() {
    let config = GlideConfig::default();
    let mut w = Widget::with_seed(&config, viewport(), Box::new(MemoryStore::new()), 42);
    w.open();
    w.maximize();

    let w2 = Widget::with_seed(&config, viewport(), w.into_store(), 42);
    assert_eq!(w2.mode(), PanelMode::Maximized);
    assert_eq!(w2.layout().panel, Some(viewport().rect()));
}

#[test]
fn geometry_persistence_can_be_disabled() {
    let mut config = GlideConfig::default();
    config.panel.persist_geometry = false;
    let mut w = Widget::with_seed(&config, viewport(), Box::new(MemoryStore::new()), 42);
    let t0 = Instant::now();
    w.open();
    w.handle(InputEvent::PointerDown(Point::new(1000.0, 300.0)), t0);
    w.handle(InputEvent::PointerMove(Point::new(950.0, 320.0)), t0);
    w.handle(InputEvent::PointerUp, t0);

    let w2 = Widget::with_seed(&config, viewport(), w.into_store(), 42);
    // Mode survives, the dragged rect does not
    assert_eq!(w2.mode(), PanelMode::Open);
    assert_eq!(w2.rect(), Rect::new(906.0, 276.0, 350.0, 500.0));
}

#[test]
fn restored_geometry_reclamps_to_a_smaller_viewport() {
    let config = GlideConfig::default();
    let mut w = Widget::with_seed(&config, viewport(), Box::new(MemoryStore::new()), 42);
    let t0 = Instant::now();
    w.open();
    w.handle(InputEvent::PointerDown(Point::new(1000.0, 300.0)), t0);
    w.handle(InputEvent::PointerMove(Point::new(950.0, 320.0)), t0);
    w.handle(InputEvent::PointerUp, t0);
    assert_eq!(w.rect(), Rect::new(856.0, 296.0, 350.0, 500.0));

    let w2 = Widget::with_seed(&config, Viewport::new(800.0, 600.0), w.into_store(), 42);
    assert_eq!(w2.rect(), Rect::new(450.0, 100.0, 350.0, 500.0));
}

#[test]
fn malformed_persisted_geometry_falls_back_to_defaults() {
    let mut store = MemoryStore::new();
    store.set("chat-position", "garbage".to_string());
    store.set("chat-is-open", "true".to_string());

    let w = Widget::with_seed(
        &GlideConfig::default(),
        viewport(),
        Box::new(store),
        42,
    );
    assert_eq!(w.mode(), PanelMode::Open);
    assert_eq!(w.rect(), Rect::new(906.0, 276.0, 350.0, 500.0));
}

#[tokio::test]
async fn events_stream_in_order() {
    let mut w = widget();
    let mut rx = w.events().subscribe();

    w.open();
    w.minimize();
    w.restore();
    w.close();

    assert!(matches!(rx.recv().await.unwrap(), WidgetEvent::PanelOpened));
    assert!(matches!(
        rx.recv().await.unwrap(),
        WidgetEvent::PanelMinimized
    ));
    assert!(matches!(
        rx.recv().await.unwrap(),
        WidgetEvent::PanelRestored
    ));
    assert!(matches!(rx.recv().await.unwrap(), WidgetEvent::PanelClosed));
}
