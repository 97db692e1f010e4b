//! Interactive terminal driver for the widget.

use std::time::{Duration, Instant};

use tokio::io::{AsyncBufReadExt, BufReader};

use glide_chat::Author;
use glide_platform::{InputEvent, UiIntent};
use glide_widget::Widget;

use crate::output::{print_message, print_thread, print_toasts};

const HELP: &str = "\
commands:
  /open /close /min /max /restore   panel modes
  /clear                            reset the conversation
  /rate up | /rate down             rate the latest reply
  /history                          recent inputs
  /state                            mode and geometry
  /quit                             exit
anything else is sent to the assistant";

pub async fn run(mut widget: Widget) {
    println!(
        "glide chat (profile: {}, locale: {}) -- /help for commands",
        widget.profile(),
        widget.locale()
    );
    widget.open();
    print_thread(&widget);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(Duration::from_millis(50));

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line {
                    Ok(Some(line)) => {
                        if !handle_line(&mut widget, line.trim()) {
                            break;
                        }
                        print_toasts(&mut widget);
                    }
                    Ok(None) => break,
                    Err(e) => {
                        tracing::warn!("stdin error: {e}");
                        break;
                    }
                }
            }
            _ = ticker.tick() => {
                if let Some(reply) = widget.tick(Instant::now()) {
                    print_message(&reply);
                }
            }
        }
    }
    println!("bye");
}

/// Apply one input line. Returns `false` when the session should end.
fn handle_line(widget: &mut Widget, line: &str) -> bool {
    let now = Instant::now();
    match line {
        "" => {}
        "/quit" | "/exit" => return false,
        "/help" => println!("{HELP}"),
        "/open" => {
            widget.handle(InputEvent::Intent(UiIntent::OpenPanel), now);
        }
        "/close" => {
            widget.handle(InputEvent::Intent(UiIntent::ClosePanel), now);
        }
        "/min" => {
            widget.handle(InputEvent::Intent(UiIntent::Minimize), now);
        }
        "/max" => {
            widget.handle(InputEvent::Intent(UiIntent::Maximize), now);
        }
        "/restore" => {
            widget.handle(InputEvent::Intent(UiIntent::Restore), now);
        }
        "/clear" => {
            widget.handle(InputEvent::Intent(UiIntent::ClearThread), now);
        }
        "/rate up" | "/rate down" => {
            let helpful = line.ends_with("up");
            match latest_bot_id(widget) {
                Some(message_id) => {
                    let accepted = widget.handle(
                        InputEvent::Intent(UiIntent::Rate {
                            message_id,
                            helpful,
                        }),
                        now,
                    );
                    if !accepted {
                        println!("(already rated)");
                    }
                }
                None => println!("(nothing to rate)"),
            }
        }
        "/history" => {
            for input in widget.thread().recent_inputs() {
                println!("  {input}");
            }
        }
        "/state" => {
            let rect = widget.rect();
            println!(
                "mode {:?}, rect ({}, {}) {}x{}",
                widget.mode(),
                rect.x,
                rect.y,
                rect.width,
                rect.height
            );
        }
        _ if line.starts_with('/') => println!("unknown command, /help lists them"),
        text => {
            if !widget.submit(text, now) {
                println!("(assistant is typing, hold on)");
            }
        }
    }
    true
}

fn latest_bot_id(widget: &Widget) -> Option<String> {
    widget
        .thread()
        .messages()
        .iter()
        .rev()
        .find(|m| m.author == Author::Bot)
        .map(|m| m.id.clone())
}
