// Example: a portfolio strip with variable-width cards, tween scrolling and an inquiry.
use showcase::{
    Card, CardTheme, ControllerOptions, Deck, DeliveryError, Easing, Field, InquiryDialog,
    InquiryKind, ScrollBehavior, ScrollSurface, Showcase, Tone,
};

/// A fake horizontal scroll container: the first card carries a wider leading margin.
struct Strip {
    offset: u64,
    widths: Vec<u64>,
    gap: u64,
}

impl ScrollSurface for Strip {
    fn scroll_offset(&self) -> Option<u64> {
        Some(self.offset)
    }

    fn item_offsets(&self, out: &mut Vec<Option<u64>>) {
        let mut start = 0;
        for w in &self.widths {
            out.push(Some(start));
            start += w + self.gap;
        }
    }

    fn scroll_to(&mut self, offset: u64, _behavior: ScrollBehavior) {
        self.offset = offset;
    }
}

fn main() {
    let palette = [
        CardTheme::new("#000000", Tone::Light, Tone::Light),
        CardTheme::new("#F5F5F7", Tone::Dark, Tone::Dark),
        CardTheme::new("#979797", Tone::Light, Tone::Light),
        CardTheme::new("#FAFAFA", Tone::Dark, Tone::Dark),
    ];
    let deck = Deck::themed(
        [
            Card::new("Quantum UI Framework").with_category("Web Design"),
            Card::new("Neural Commerce App").with_category("Mobile App"),
            Card::new("Marketing Suite").with_category("Marketing"),
            Card::new("Digital Branding").with_category("Branding"),
        ],
        &palette,
    );

    let strip = Strip {
        offset: 0,
        widths: vec![360, 320, 320, 320],
        gap: 24,
    };
    let options = ControllerOptions::new(deck.len()).with_tween(240, Easing::EaseOutExpo);
    let mut page = Showcase::with_options(deck, strip, options);

    let mut now_ms = 0u64;
    if let Some(cmd) = page.scroll_to_index(2, now_ms) {
        println!("scroll_to_index(2) -> {cmd:?}");
    }
    while page.controller().is_animating() {
        now_ms += 16;
        if page.controller_mut().on_frame(now_ms) {
            println!("t={now_ms} active={:?}", page.active_index());
        }
    }

    page.open_active();
    if let Some(card) = page.selected_card() {
        println!("detail: {} ({}) on {}", card.title, card.category, card.theme.background);
    }
    page.close();

    let mut inquiry = InquiryDialog::new();
    inquiry.open(InquiryKind::Package("Growth".into()));
    inquiry.set(Field::Name, "Ada");
    inquiry.set(Field::Email, "ada@example");
    if let Err(err) = inquiry.begin_submit() {
        println!("rejected: {err}");
        for e in inquiry.errors().iter() {
            println!("  {:?}: {e}", e.field());
        }
    }

    inquiry.set(Field::Email, "ada@example.com");
    inquiry.set(Field::Message, "Tell me more about the Growth package.");
    if let Ok(form) = inquiry.begin_submit() {
        println!("delivering inquiry for service={:?}", form.service);
        inquiry.finish(Err(DeliveryError::NotConfigured));
    }
    println!("status: {:?}", inquiry.status().message());
}
