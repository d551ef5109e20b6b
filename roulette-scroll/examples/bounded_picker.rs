// Example: an hour picker (24 rows, 40 units tall) with bounce-back at both ends.
use roulette_scroll::{Easing, RouletteOptions, RouletteScrollEffect};

fn main() {
    let row_height = 40.0;
    let options = RouletteOptions::new(row_height)
        .with_bounds(0.0, 23.0 * row_height)
        .with_pull_easing(Easing::InOutCirc);
    let mut effect = RouletteScrollEffect::new(options).expect("valid options");

    // Fling hard enough to slam into the top boundary.
    effect.on_drag_start();
    effect.on_drag_end(4000.0);

    let dt = 1.0 / 60.0;
    while effect.is_moving() {
        effect.update(dt);
    }

    let hour = (effect.position() / row_height).round() as u32;
    println!("picker rested on row {hour} (offset {})", effect.position());
}
