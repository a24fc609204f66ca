// demos/failing.rs

use unittest_checks::{check_eq, check_eq_approx, check_eq_thresh, check_lt, session};

fn main() {
    session(|counter| {
        let histogram: Vec<u32> = vec![3, 5, 8];
        check_eq!(counter, histogram, vec![3_u32, 5, 7]);

        let exposure: f64 = 1.0;
        check_eq_approx!(counter, exposure, 1.002_f64);
        check_eq_thresh!(counter, exposure * 5.0, 5.2_f64, 0.1_f64);
        check_lt!(counter, histogram.len(), 2_usize);

        println!("{} checks failed, the summary below ends the process", counter.count());
    });
}
