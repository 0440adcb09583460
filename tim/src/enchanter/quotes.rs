use std::sync::atomic::{AtomicUsize, Ordering};

use tim_util::text::{TextComponent, color::NamedColor, hover::HoverEvent};

pub const QUOTES: [&str; 4] = [
    "Behold the cave of Caerbannog!",
    "That's no ordinary rabbit.\n\
     That's the most foul, cruel,\n\
     and bad tempered rodent\n\
     you ever set eyes on.",
    "Look, that rabbit's got a vicious\n\
     streak a mile wide, it's a killer!",
    "I warned you, I warned you but did you\n\
     listen to me? Oh no, you know, didn't you?\n\
     It's just a harmless little bunny, isn't it?\n\
     Well it's always the same, I always tell them ...\n\
     do they listen to me?",
];

/// Hands out [`QUOTES`] in order, starting over after the last one.
/// Shared by every command for the lifetime of the process.
#[derive(Debug, Default)]
pub struct QuoteCycle {
    count: AtomicUsize,
}

impl QuoteCycle {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: AtomicUsize::new(0),
        }
    }

    pub fn next_quote(&self) -> &'static str {
        let index = self.count.fetch_add(1, Ordering::Relaxed);
        QUOTES[index % QUOTES.len()]
    }

    /// `message` in red, with the next quote as hover text.
    pub fn error_text(&self, message: impl Into<String>) -> TextComponent {
        TextComponent::text(message.into())
            .color_named(NamedColor::Red)
            .hover_event(HoverEvent::show_text(TextComponent::text(
                self.next_quote(),
            )))
    }
}

#[cfg(test)]
mod test {
    use tim_util::text::{color::NamedColor, hover::HoverEvent};

    use super::{QUOTES, QuoteCycle};

    fn hover_text(cycle: &QuoteCycle) -> String {
        let text = cycle.error_text("nope");
        assert_eq!(text.style.color, Some(NamedColor::Red));
        assert_eq!(text.get_text(), "nope");
        match text.style.hover_event {
            Some(HoverEvent::ShowText { value }) => value.get_text(),
            None => panic!("error text without hover"),
        }
    }

    #[test]
    fn fifth_error_reuses_first_quote() {
        let cycle = QuoteCycle::new();
        let shown: Vec<String> = (0..5).map(|_| hover_text(&cycle)).collect();

        assert_eq!(shown[..4], QUOTES.map(String::from));
        assert_eq!(shown[4], shown[0]);
    }

    #[test]
    fn quotes_keep_their_line_breaks() {
        assert_eq!(QUOTES[1].lines().count(), 4);
        assert!(QUOTES[1].contains("\nThat's the most foul, cruel,\n"));
        assert_eq!(QUOTES[3].lines().count(), 5);
    }
}
