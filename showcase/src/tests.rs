use crate::*;

use std::cell::Cell;

use carousel::CarouselOptions;

#[derive(Debug)]
struct SimSurface {
    mounted: bool,
    offset: u64,
    items: Vec<Option<u64>>,
    reads: Cell<usize>,
    writes: Vec<(u64, ScrollBehavior)>,
}

impl SimSurface {
    fn new(items: &[u64]) -> Self {
        Self {
            mounted: true,
            offset: 0,
            items: items.iter().copied().map(Some).collect(),
            reads: Cell::new(0),
            writes: Vec::new(),
        }
    }

    fn unmounted(items: &[u64]) -> Self {
        Self {
            mounted: false,
            ..Self::new(items)
        }
    }
}

impl ScrollSurface for SimSurface {
    fn scroll_offset(&self) -> Option<u64> {
        self.reads.set(self.reads.get() + 1);
        self.mounted.then_some(self.offset)
    }

    fn item_offsets(&self, out: &mut Vec<Option<u64>>) {
        out.extend(self.items.iter().copied());
    }

    fn scroll_to(&mut self, offset: u64, behavior: ScrollBehavior) {
        self.writes.push((offset, behavior));
        // Smooth scrolls are animated by the test itself.
        if behavior == ScrollBehavior::Instant {
            self.offset = offset;
        }
    }
}

fn user_scroll(c: &mut Controller<SimSurface>, offset: u64, now_ms: u64) -> bool {
    c.surface_mut().offset = offset;
    c.on_scroll_event();
    c.on_frame(now_ms)
}

fn portfolio() -> Deck {
    let palette = [
        CardTheme::new("#000000", Tone::Light, Tone::Light),
        CardTheme::new("#F5F5F7", Tone::Dark, Tone::Dark),
    ];
    Deck::themed(
        [
            Card::new("Quantum UI Framework")
                .with_id(1)
                .with_category("Web Design")
                .with_link("https://example.com/quantum"),
            Card::new("Neural Commerce App").with_id(2),
            Card::new("Marketing Suite").with_id(3),
        ],
        &palette,
    )
}

#[test]
fn scroll_events_are_coalesced_per_frame() {
    let mut c = Controller::new(SimSurface::new(&[0, 300, 600, 900]), ControllerOptions::new(4));
    c.surface_mut().offset = 620;
    for _ in 0..10 {
        c.on_scroll_event();
    }
    let reads = c.surface().reads.get();

    assert!(c.on_frame(16));
    assert_eq!(c.surface().reads.get(), reads + 1);
    assert_eq!(c.active_index(), Some(2));
    assert_eq!(c.frames().requested(), 10);
    assert_eq!(c.frames().cancelled(), 9);
    assert_eq!(c.frames().ran(), 1);
    assert_eq!(c.carousel().commit_count(), 1);

    // Nothing pending: the next frame does not touch the surface.
    assert!(!c.on_frame(32));
    assert_eq!(c.surface().reads.get(), reads + 1);
}

#[test]
fn unmounted_surface_makes_navigation_inert() {
    let mut c = Controller::new(
        SimSurface::unmounted(&[0, 300, 600]),
        ControllerOptions::new(3),
    );
    assert!(!c.is_mounted());
    assert_eq!(c.scroll_to_index(2, 0), None);
    assert_eq!(c.next(0), None);
    assert_eq!(c.prev(0), None);
    c.on_scroll_event();
    assert!(!c.on_frame(16));
    assert!(c.surface().writes.is_empty());
    assert_eq!(c.active_index(), Some(0));
}

#[test]
fn native_smooth_scroll_settles_on_target() {
    let mut c = Controller::new(SimSurface::new(&[0, 300, 600, 900]), ControllerOptions::new(4));
    let cmd = c.next(0).unwrap();
    assert_eq!(cmd.index, 1);
    assert_eq!(c.surface().writes, [(300, ScrollBehavior::Smooth)]);
    assert_eq!(c.carousel().phase(), Phase::Settling);

    assert!(!user_scroll(&mut c, 120, 16));
    assert_eq!(c.carousel().phase(), Phase::Settling);

    assert!(user_scroll(&mut c, 300, 32));
    assert_eq!(c.active_index(), Some(1));
    assert_eq!(c.carousel().phase(), Phase::Idle);
}

#[test]
fn interrupted_scroll_settles_after_delay() {
    let mut c = Controller::new(SimSurface::new(&[0, 300, 600]), ControllerOptions::new(3));
    c.next(0).unwrap();

    assert!(user_scroll(&mut c, 200, 16));
    assert_eq!(c.active_index(), Some(1));

    c.on_frame(100);
    assert_eq!(c.carousel().phase(), Phase::Settling);
    c.on_frame(166);
    assert_eq!(c.carousel().phase(), Phase::Idle);
}

#[test]
fn scroll_end_event_settles() {
    let mut c = Controller::new(SimSurface::new(&[0, 300, 600]), ControllerOptions::new(3));
    c.scroll_to_index(2, 0).unwrap();
    user_scroll(&mut c, 450, 16);
    c.on_scroll_end();
    assert_eq!(c.carousel().phase(), Phase::Idle);
}

#[test]
fn tween_mode_writes_instant_offsets_each_frame() {
    let opts = ControllerOptions::new(3).with_tween(100, Easing::EaseOutExpo);
    let mut c = Controller::new(SimSurface::new(&[0, 300, 600]), opts);

    c.next(0).unwrap();
    assert!(c.is_animating());
    assert!(c.surface().writes.is_empty());

    let mut now_ms = 0;
    while c.is_animating() {
        now_ms += 16;
        c.on_frame(now_ms);
    }

    let writes = &c.surface().writes;
    assert!(writes.iter().all(|&(_, b)| b == ScrollBehavior::Instant));
    assert!(writes.windows(2).all(|w| w[0].0 <= w[1].0));
    assert_eq!(writes.last().map(|w| w.0), Some(300));
    assert_eq!(c.active_index(), Some(1));
    assert_eq!(c.carousel().phase(), Phase::Idle);
}

#[test]
fn tween_retargets_on_new_command() {
    let opts = ControllerOptions::new(4).with_tween(100, Easing::SmoothStep);
    let mut c = Controller::new(SimSurface::new(&[0, 300, 600, 900]), opts);

    c.next(0).unwrap();
    for now_ms in [16, 32, 48] {
        c.on_frame(now_ms);
    }
    let cmd = c.scroll_to_index(3, 48).unwrap();
    assert_eq!(cmd.offset, 900);

    let mut now_ms = 48;
    while c.is_animating() {
        now_ms += 16;
        c.on_frame(now_ms);
    }
    assert_eq!(c.surface().offset, 900);
    assert_eq!(c.active_index(), Some(3));
    assert!(c.surface().writes.windows(2).all(|w| w[0].0 <= w[1].0));
}

#[test]
fn native_command_back_to_current_item_replaces_pending_scroll() {
    let mut c = Controller::new(SimSurface::new(&[0, 300, 600, 900]), ControllerOptions::new(4));
    assert!(user_scroll(&mut c, 300, 0));
    assert_eq!(c.active_index(), Some(1));

    c.scroll_to_index(3, 0).unwrap();
    let cmd = c.scroll_to_index(1, 8).unwrap();
    assert_eq!(cmd.offset, 300);
    assert_eq!(
        c.surface().writes,
        [(900, ScrollBehavior::Smooth), (300, ScrollBehavior::Smooth)]
    );
    assert_eq!(c.carousel().settle_target(), Some(300));

    assert!(!user_scroll(&mut c, 300, 16));
    assert_eq!(c.carousel().phase(), Phase::Idle);
    assert_eq!(c.active_index(), Some(1));
}

#[test]
fn tween_command_back_to_current_item_replaces_pending_scroll() {
    let opts = ControllerOptions::new(4).with_tween(100, Easing::EaseOutExpo);
    let mut c = Controller::new(SimSurface::new(&[0, 300, 600, 900]), opts);
    assert!(user_scroll(&mut c, 300, 0));

    c.scroll_to_index(3, 0).unwrap();
    let cmd = c.scroll_to_index(1, 0).unwrap();
    assert_eq!(cmd.offset, 300);

    let mut now_ms = 0;
    while c.is_animating() {
        now_ms += 16;
        c.on_frame(now_ms);
    }
    assert!(c.surface().writes.iter().all(|&(offset, _)| offset == 300));
    assert_eq!(c.surface().offset, 300);
    assert_eq!(c.active_index(), Some(1));
    assert_eq!(c.carousel().phase(), Phase::Idle);
}

#[test]
fn instant_commands_bypass_tween() {
    let opts = ControllerOptions::new(3)
        .with_carousel(CarouselOptions::new(3).with_behavior(ScrollBehavior::Instant))
        .with_tween(100, Easing::Linear);
    let mut c = Controller::new(SimSurface::new(&[0, 300, 600]), opts);

    c.scroll_to_index(2, 0).unwrap();
    assert!(!c.is_animating());
    assert_eq!(c.surface().writes, [(600, ScrollBehavior::Instant)]);

    c.on_scroll_event();
    assert!(c.on_frame(16));
    assert_eq!(c.active_index(), Some(2));
}

#[test]
fn resize_remeasures_surface() {
    let mut c = Controller::new(SimSurface::new(&[0, 300, 600]), ControllerOptions::new(3));
    user_scroll(&mut c, 300, 0);
    assert_eq!(c.active_index(), Some(1));

    c.surface_mut().items = vec![Some(0), Some(250), Some(500)];
    c.on_resize();
    assert_eq!(c.carousel().item_offset(2), Some(500));

    user_scroll(&mut c, 380, 16);
    assert_eq!(c.active_index(), Some(2));
}

#[test]
fn partially_laid_out_surface_is_padded() {
    let mut surface = SimSurface::new(&[0, 300]);
    surface.items.push(None);
    let mut c = Controller::new(surface, ControllerOptions::new(4));
    assert_eq!(c.carousel().measured_count(), 2);
    assert_eq!(c.scroll_to_index(3, 0), None);

    user_scroll(&mut c, 900, 0);
    assert_eq!(c.active_index(), Some(1));
}

#[test]
fn borrowed_surface_can_drive_a_controller() {
    let mut surface = SimSurface::new(&[0, 300]);
    {
        let mut c = Controller::new(&mut surface, ControllerOptions::new(2));
        c.next(0).unwrap();
    }
    assert_eq!(surface.writes, [(300, ScrollBehavior::Smooth)]);
}

#[test]
fn frame_coalescer_counts_cancellations() {
    let mut f = FrameCoalescer::new();
    assert!(!f.take());
    assert!(!f.request());
    assert!(f.request());
    assert!(f.is_pending());
    f.cancel();
    assert!(!f.take());
    assert_eq!(f.cancelled(), 2);
    assert_eq!(f.ran(), 0);

    f.request();
    assert!(f.take());
    assert!(!f.take());
    assert_eq!(f.ran(), 1);
}

#[test]
fn tween_reaches_target_exactly() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::EaseOutExpo,
    ] {
        let t = Tween::new(120, 7_777, 10, 240, easing);
        assert_eq!(t.sample(10), 120);
        assert_eq!(t.sample(250), 7_777);
        assert_eq!(t.sample(10_000), 7_777);
        assert!(t.is_done(250));

        let mut last = 0;
        for now_ms in (10..=250).step_by(8) {
            let off = t.sample(now_ms);
            assert!(off >= last, "{easing:?} went backwards at {now_ms}");
            last = off;
        }
    }
}

#[test]
fn tween_retarget_starts_from_sampled_offset() {
    let mut t = Tween::new(0, 1_000, 0, 100, Easing::Linear);
    assert_eq!(t.progress(50), 0.5);
    assert_eq!(t.sample(50), 500);

    t.retarget(50, 0, 100);
    assert_eq!((t.from, t.to, t.start_ms), (500, 0, 50));
    assert_eq!(t.sample(100), 250);
    assert_eq!(t.sample(150), 0);
    assert_eq!(t.progress(400), 1.0);
}

#[test]
fn tween_clamps_zero_duration() {
    let t = Tween::new(0, 50, 0, 0, Easing::Linear);
    assert_eq!(t.duration_ms, 1);
    assert_eq!(t.sample(1), 50);
}

#[test]
fn showcase_opens_detail_and_blocks_navigation() {
    let mut s = Showcase::new(portfolio(), SimSurface::new(&[0, 320, 640]));
    assert_eq!(s.pagination().count, 3);
    assert_eq!(
        s.active_card().map(|c| c.title.as_str()),
        Some("Quantum UI Framework")
    );

    assert!(s.open_active());
    assert!(s.locks_scroll());
    assert_eq!(s.selected_card().and_then(|c| c.id), Some(1));
    assert_eq!(s.next(0), None);
    assert!(s.controller().surface().writes.is_empty());

    s.close();
    assert!(!s.locks_scroll());
    assert_eq!(s.selected_card(), None);
    assert_eq!(s.next(0).map(|cmd| cmd.index), Some(1));

    assert!(!s.open(3));
    assert!(s.open(2));
    assert_eq!(s.selected_index(), Some(2));
}

#[test]
fn showcase_count_follows_deck() {
    let mut s = Showcase::with_options(
        portfolio(),
        SimSurface::new(&[0, 320, 640]),
        ControllerOptions::new(99),
    );
    assert_eq!(s.controller().carousel().count(), 3);
    assert_eq!(s.scroll_to_index(50, 0).map(|cmd| cmd.index), Some(2));
}

#[test]
fn empty_showcase_is_inert() {
    let mut s = Showcase::new(Deck::default(), SimSurface::new(&[]));
    assert_eq!(s.active_index(), None);
    assert_eq!(s.active_card(), None);
    assert!(!s.open_active());
    assert_eq!(s.next(0), None);
    assert!(s.pagination().is_empty());
}

#[test]
fn deck_themes_rotate_and_keys_fall_back_to_index() {
    let deck = portfolio();
    assert_eq!(deck.len(), 3);
    assert_eq!(deck.get(0).unwrap().theme.background, "#000000");
    assert_eq!(deck.get(1).unwrap().theme.text, Tone::Dark);
    assert_eq!(deck.get(2).unwrap().theme.background, "#000000");

    let plain = Deck::themed([Card::new("a"), Card::new("b").with_id(40)], &[]);
    assert_eq!(plain.get(0).unwrap().theme, CardTheme::default());
    assert_eq!(plain.key_for(0), Some(0));
    assert_eq!(plain.key_for(1), Some(40));
    assert_eq!(plain.key_for(2), None);
    assert_eq!(plain.index_of_key(40), Some(1));
    assert_eq!(plain.index_of_key(1), None);
}

#[test]
fn modal_open_replace_close() {
    let mut m = Modal::default();
    assert!(!m.is_open());
    assert_eq!(m.open("basic"), None);
    assert_eq!(m.open("pro"), Some("basic"));
    assert_eq!(m.selected(), Some(&"pro"));
    assert!(m.locks_scroll());
    assert_eq!(m.close(), Some("pro"));
    assert_eq!(m.close(), None);
}

#[test]
fn modal_toggle_behaves_like_accordion() {
    let mut faq = Modal::Closed;
    assert!(faq.toggle(2usize));
    assert!(faq.toggle(0));
    assert_eq!(faq.selected(), Some(&0));
    assert!(!faq.toggle(0));
    assert!(!faq.is_open());
}

fn filled_form() -> InquiryForm {
    InquiryForm {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        phone: String::new(),
        service: String::new(),
        message: "Hello".into(),
    }
}

#[test]
fn empty_form_reports_every_required_field() {
    let errors = InquiryForm::default().validate().unwrap_err();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.get(Field::Name), Some(FieldError::NameRequired));
    assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidEmail));
    assert_eq!(errors.get(Field::Message), Some(FieldError::MessageRequired));
    assert_eq!(errors.get(Field::Phone), None);
    assert_eq!(errors.to_string(), "3 field(s) failed validation");
    assert_eq!(FieldError::InvalidEmail.to_string(), "Enter a valid email");
}

#[test]
fn email_must_look_like_an_address() {
    let mut form = filled_form();
    for ok in ["a@b.co", "user@mail.example.com", "x+tag@y.z"] {
        form.set(Field::Email, ok);
        assert!(form.validate().is_ok(), "{ok}");
    }
    for bad in ["", "a@b", "@b.co", "a b@c.de", "plain.text"] {
        form.set(Field::Email, bad);
        assert_eq!(
            form.validate().unwrap_err().get(Field::Email),
            Some(FieldError::InvalidEmail),
            "{bad}"
        );
    }
}

#[test]
fn whitespace_only_fields_are_missing() {
    let mut form = filled_form();
    form.set(Field::Name, "   ");
    form.set(Field::Message, "\n\t");
    let errors = form.validate().unwrap_err();
    assert_eq!(
        errors.iter().collect::<Vec<_>>(),
        [FieldError::NameRequired, FieldError::MessageRequired]
    );
}

#[test]
fn package_inquiry_prefills_service() {
    let mut d = InquiryDialog::new();
    d.set(Field::Name, "Ada");
    d.open(InquiryKind::Package("Growth".into()));
    assert!(d.is_open());
    assert!(d.locks_scroll());
    assert_eq!(d.kind().map(InquiryKind::label), Some("Growth"));
    assert_eq!(d.form().get(Field::Service), "Growth");
    assert_eq!(d.form().name, "Ada");

    d.open(InquiryKind::Partnership);
    assert_eq!(d.kind(), Some(&InquiryKind::Partnership));
    assert_eq!(d.form().service, "Growth");
}

#[test]
fn submit_requires_open_dialog_and_valid_form() {
    let mut d = InquiryDialog::new();
    assert_eq!(d.begin_submit(), Err(SubmitError::Closed));

    d.open(InquiryKind::Contact);
    let Err(SubmitError::Invalid(errors)) = d.begin_submit() else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.len(), 3);
    assert_eq!(d.errors().len(), 3);
    assert_eq!(d.status(), SubmitStatus::Idle);

    d.set(Field::Name, "Ada");
    assert_eq!(d.errors().len(), 2);
    assert_eq!(d.errors().get(Field::Name), None);
}

#[test]
fn successful_delivery_clears_the_form() {
    let mut d = InquiryDialog::new();
    d.open(InquiryKind::Contact);
    d.set(Field::Name, "Ada");
    d.set(Field::Email, "ada@example.com");
    d.set(Field::Message, "Hello");

    let sent = d.begin_submit().unwrap();
    assert_eq!(sent.email, "ada@example.com");
    assert_eq!(d.status(), SubmitStatus::Sending);
    assert_eq!(d.status().message(), Some("Sending..."));
    assert_eq!(d.begin_submit(), Err(SubmitError::InFlight));

    d.finish(Ok(()));
    assert_eq!(d.status(), SubmitStatus::Success);
    assert_eq!(d.form(), &InquiryForm::default());
    assert!(d.errors().is_empty());
}

#[test]
fn failed_delivery_keeps_the_form() {
    let mut d = InquiryDialog::new();
    d.open(InquiryKind::Contact);
    for (field, value) in [
        (Field::Name, "Ada"),
        (Field::Email, "ada@example.com"),
        (Field::Message, "Hello"),
    ] {
        d.set(field, value);
    }
    d.begin_submit().unwrap();
    d.finish(Err(DeliveryError::Failed("timeout".into())));
    assert_eq!(d.status(), SubmitStatus::Error);
    assert_eq!(
        d.status().message(),
        Some("Something went wrong. Please try again.")
    );
    assert_eq!(d.form().message, "Hello");

    // A retry is allowed after a failure.
    assert!(d.begin_submit().is_ok());
}

#[test]
fn reset_discards_form_errors_and_status() {
    let mut d = InquiryDialog::new();
    d.open(InquiryKind::Package("Growth".into()));
    d.set(Field::Name, "Ada");
    assert!(d.begin_submit().is_err());
    assert!(!d.errors().is_empty());

    d.reset();
    assert!(d.is_open());
    assert_eq!(d.form(), &InquiryForm::default());
    assert!(d.errors().is_empty());
    assert_eq!(d.status(), SubmitStatus::Idle);

    d.set(Field::Name, "Ada");
    d.set(Field::Email, "ada@example.com");
    d.set(Field::Message, "Hello");
    d.begin_submit().unwrap();
    d.reset();
    d.finish(Ok(()));
    assert_eq!(d.status(), SubmitStatus::Idle);
}

#[test]
fn finish_without_submission_is_ignored() {
    let mut d = InquiryDialog::new();
    d.open(InquiryKind::Contact);
    d.finish(Ok(()));
    assert_eq!(d.status(), SubmitStatus::Idle);
    assert_eq!(
        DeliveryError::NotConfigured.to_string(),
        "delivery is not configured"
    );
}

#[cfg(feature = "serde")]
#[test]
fn deck_deserializes_from_plain_json_array() {
    let json = r##"[
        {
            "id": 7,
            "title": "Quantum UI Framework",
            "category": "Web Design",
            "link": "https://example.com/quantum",
            "theme": { "background": "#000000", "text": "light", "button": "dark" }
        },
        { "title": "Neural Commerce App" }
    ]"##;
    let deck: Deck = serde_json::from_str(json).unwrap();
    assert_eq!(deck.len(), 2);
    assert_eq!(deck.key_for(0), Some(7));
    assert_eq!(deck.key_for(1), Some(1));
    assert_eq!(deck.get(0).unwrap().theme.button, Tone::Dark);
    assert_eq!(deck.get(1).unwrap().link, None);

    let back = serde_json::to_value(&deck).unwrap();
    assert!(back.is_array());
}
