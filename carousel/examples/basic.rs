// Example: a four-card strip driven by simulated scroll events.
use carousel::{Carousel, CarouselOptions, Stride};

fn main() {
    let mut c = Carousel::new(CarouselOptions::new(4));
    c.set_item_offsets([0, 300, 600, 900].map(Some));

    c.on_scroll(620, 0);
    println!("offset=620 active={:?}", c.active_index());

    c.on_scroll(450, 16);
    println!("offset=450 active={:?} (tie -> lower index)", c.active_index());

    if let Some(cmd) = c.next() {
        println!("next -> {cmd:?}");
    }

    // Breakpoint change: cards shrink to 240px with a 10px gap.
    c.apply_stride(Stride::new(240, 10));
    c.on_scroll(260, 32);
    println!("after resize offset=260 active={:?}", c.active_index());
    println!("pagination={:?}", c.pagination());
}
