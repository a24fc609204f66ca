// demos/passing.rs

use unittest_checks::{
    check, check_eq, check_eq_approx, check_eq_thresh, check_ge, check_lanes_eq, check_ne,
    ColorChoice, FailureCounter, ParseColorChoiceError,
};

/// Usage: `cargo run --example passing [auto|always|never]`
fn main() -> Result<(), ParseColorChoiceError> {
    let color = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => ColorChoice::Auto,
    };
    FailureCounter::builder().color(color).run(|counter| {
        // A 2x2 RGBA image, one pixel per row of four channels.
        let pixels: Vec<[f32; 4]> = vec![
            [0.0, 0.25, 0.5, 1.0],
            [1.0, 0.75, 0.5, 1.0],
            [0.2, 0.2, 0.2, 1.0],
            [0.9, 0.1, 0.0, 1.0],
        ];

        check_eq!(counter, pixels.len(), 4_usize);
        check!(counter, pixels.iter().all(|p| p[3] == 1.0));

        let luma: Vec<f32> = pixels
            .iter()
            .map(|p| 0.2126 * p[0] + 0.7152 * p[1] + 0.0722 * p[2])
            .collect();
        check_eq_thresh!(counter, luma[2], 0.2_f32, 1e-6_f32);
        check_ge!(counter, luma[1], luma[0]);
        check_ne!(counter, luma[0], luma[1]);

        let gamma: f32 = 2.2;
        let encoded = pixels[0].map(|c| c.powf(gamma.recip()));
        let decoded = encoded.map(|c| c.powf(gamma));
        check_eq_approx!(counter, decoded, pixels[0]);
        check_lanes_eq!(counter, pixels[3].map(|c| c > 0.5), [true, false, false, true]);
    });
    Ok(())
}
