//! Scripted showcase: exercises the widget end to end and prints a
//! transcript.

use std::time::{Duration, Instant};

use glide_chat::{Author, Message};
use glide_common::Point;
use glide_platform::{InputEvent, Key, UiIntent};
use glide_widget::Widget;

use crate::output::{print_message, print_toasts};

pub async fn run(mut widget: Widget) {
    println!(
        "glide demo (profile: {}, locale: {})",
        widget.profile(),
        widget.locale()
    );
    let t = Instant::now();

    // Open from the launcher; a previous session may have left the
    // panel open or minimized.
    if let Some(launcher) = widget.layout().launcher {
        let center = Point::new(
            launcher.x + launcher.width / 2.0,
            launcher.y + launcher.height / 2.0,
        );
        widget.handle(InputEvent::PointerDown(center), t);
        println!("* launcher clicked");
    } else {
        widget.restore();
        println!("* panel restored from a previous session");
    }
    let rect = widget.rect();
    println!(
        "* panel open at ({}, {}) size {}x{}",
        rect.x, rect.y, rect.width, rect.height
    );

    // Drag by the header.
    let grip = Point::new(rect.x + 40.0, rect.y + 20.0);
    widget.handle(InputEvent::PointerDown(grip), t);
    widget.handle(
        InputEvent::PointerMove(Point::new(grip.x - 60.0, grip.y - 40.0)),
        t,
    );
    widget.handle(InputEvent::PointerUp, t);
    let rect = widget.rect();
    println!("* dragged to ({}, {})", rect.x, rect.y);

    // Resize by the corner handle.
    let handle = Point::new(rect.right() - 4.0, rect.bottom() - 4.0);
    widget.handle(InputEvent::PointerDown(handle), t);
    widget.handle(
        InputEvent::PointerMove(Point::new(handle.x + 30.0, handle.y + 40.0)),
        t,
    );
    widget.handle(InputEvent::PointerUp, t);
    let rect = widget.rect();
    println!("* resized to {}x{}", rect.width, rect.height);

    // Mode tour.
    widget.minimize();
    if let Some(band) = widget.layout().panel {
        println!("* minimized to the {}px header band", band.height);
    }
    widget.restore();
    widget.maximize();
    println!("* maximized to the full viewport");
    widget.restore();
    let rect = widget.rect();
    println!("* restored to ({}, {})", rect.x, rect.y);

    // A short conversation.
    submit_and_await(&mut widget, "What shipping options do you have?").await;
    submit_and_await(&mut widget, "Any electronics deals?").await;

    // A suggestion chip submits its text.
    widget.handle(
        InputEvent::Intent(UiIntent::Suggestion("Customer support".to_string())),
        Instant::now(),
    );
    println!("you> Customer support   (chip)");
    match await_reply(&mut widget).await {
        Some(reply) => print_message(&reply),
        None => println!("(no reply arrived)"),
    }

    // Rate the latest reply.
    let latest_bot = widget
        .thread()
        .messages()
        .iter()
        .rev()
        .find(|m| m.author == Author::Bot)
        .map(|m| m.id.clone());
    if let Some(id) = latest_bot {
        widget.rate(&id, true);
        print_toasts(&mut widget);
    }

    // Reset the thread, then close with Escape.
    widget.handle(InputEvent::Intent(UiIntent::ClearThread), Instant::now());
    print_toasts(&mut widget);
    println!("* thread reset to {} message", widget.thread().len());

    widget.handle(InputEvent::KeyDown(Key::Escape), Instant::now());
    println!("* closed (mode {:?})", widget.mode());
    println!("demo complete");
}

async fn submit_and_await(widget: &mut Widget, text: &str) {
    if !widget.submit(text, Instant::now()) {
        return;
    }
    println!("you> {text}");
    match await_reply(widget).await {
        Some(reply) => print_message(&reply),
        None => println!("(no reply arrived)"),
    }
}

/// Pump the widget until the pending reply surfaces or the deadline
/// passes.
async fn await_reply(widget: &mut Widget) -> Option<Message> {
    let deadline = Instant::now() + Duration::from_secs(10);
    let mut ticker = tokio::time::interval(Duration::from_millis(50));
    loop {
        ticker.tick().await;
        let now = Instant::now();
        if let Some(reply) = widget.tick(now) {
            return Some(reply);
        }
        if now >= deadline {
            return None;
        }
    }
}
