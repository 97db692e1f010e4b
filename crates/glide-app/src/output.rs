//! Transcript printing shared by the demo and the interactive driver.

use glide_chat::{Author, Message};
use glide_common::{Notification, NotificationLevel};
use glide_widget::Widget;

/// Print one thread message as a transcript line.
pub fn print_message(message: &Message) {
    let who = match message.author {
        Author::User => "you",
        Author::Bot => "glide",
    };
    println!("{who}> {}", message.body);
    for chip in &message.suggestions {
        println!("      [chip] {chip}");
    }
    for product in &message.products {
        println!(
            "      [product] {} {} (rated {:.1})",
            product.name, product.price, product.rating
        );
    }
}

/// Print every message in the thread.
pub fn print_thread(widget: &Widget) {
    for message in widget.thread().messages() {
        print_message(message);
    }
}

/// Drain and print pending toasts.
pub fn print_toasts(widget: &mut Widget) {
    while let Some(toast) = widget.notifications().pop() {
        println!("      [{}] {}: {}", level_tag(&toast), toast.title, toast.body);
    }
}

fn level_tag(toast: &Notification) -> &'static str {
    match toast.level {
        NotificationLevel::Info => "info",
        NotificationLevel::Success => "ok",
        NotificationLevel::Error => "error",
    }
}
