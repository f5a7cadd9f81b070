// Example: a smooth scroll command settling over several frames.
use carousel::{Carousel, CarouselOptions, Phase};

fn main() {
    let mut c = Carousel::new(CarouselOptions::new(5).with_settle_delay_ms(120));
    c.set_item_offsets((0..5u64).map(|i| Some(i * 320)));
    c.on_scroll(0, 0);

    let Some(cmd) = c.scroll_to_index(3) else {
        return;
    };
    println!("command={cmd:?}");

    // Simulate the UI animating towards the target at 60fps, stopping just short of it.
    let mut now_ms = 0u64;
    for step in 1..=10u64 {
        now_ms += 16;
        let off = cmd.offset * step / 11;
        if c.on_scroll(off, now_ms) {
            println!("t={now_ms} off={off} active={:?}", c.active_index());
        }
    }

    while c.phase() == Phase::Settling {
        now_ms += 16;
        c.update(now_ms);
    }
    println!("settled at t={now_ms} active={:?}", c.active_index());
}
