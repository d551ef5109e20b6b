// Example: release a fling and watch it settle on the notch grid.
use roulette_scroll::{RouletteOptions, RouletteScrollEffect};

fn main() {
    let options = RouletteOptions::new(40.0).with_on_settle(Some(|notch: f64| {
        println!("settled on notch {notch}");
    }));
    let mut effect = RouletteScrollEffect::new(options).expect("valid options");

    // A quick upward drag, released with momentum.
    effect.on_drag_start();
    effect.on_drag_move(12.0);
    effect.on_drag_end(420.0);

    let dt = 1.0 / 60.0;
    let mut t = 0.0;
    while effect.is_moving() {
        let position = effect.update(dt);
        t += dt;
        println!(
            "t={t:5.2}s phase={:?} position={position:8.2} velocity={:8.2}",
            effect.phase(),
            effect.velocity()
        );
    }
}
