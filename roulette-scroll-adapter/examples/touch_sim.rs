// Example: drive the controller from a synthetic touch gesture, the way a UI
// adapter would from real input events.
use roulette_scroll::RouletteOptions;
use roulette_scroll_adapter::Controller;

fn main() {
    let mut controller = Controller::new(RouletteOptions::new(40.0)).expect("valid options");

    // Finger down at offset 0, swiping 8 units every 16 ms.
    controller.on_touch_down(0.0, 0);
    for i in 1..=8u64 {
        controller.on_touch_move(i as f64 * 8.0, i * 16);
    }
    controller.on_touch_up(8 * 16);

    let mut now_ms = 8 * 16;
    while controller.is_moving() {
        now_ms += 16;
        let position = controller.tick(now_ms);
        println!("t={now_ms}ms position={position:8.2}");
    }
    println!("rested on {}", controller.position());
}
