//! Console report of a sweep.

use ct_solver::MarchResult;

pub fn print_length(result: &MarchResult) {
    println!(
        "Estimated Capillary Tube Length: {:.4} m",
        result.total_length()
    );
}

pub fn print_steps(result: &MarchResult) {
    println!(
        "\n{:>6} {:>8} {:>10} {:>10} {:>12} {:>12} {:>10}",
        "T [C]", "x", "L [m]", "V [m/s]", "p [kPa]", "Re", "f"
    );
    for s in result.steps() {
        println!(
            "{:>6} {:>8.4} {:>10.4} {:>10.3} {:>12.2} {:>12.0} {:>10.5}",
            s.temperature_c,
            s.quality,
            s.length,
            s.velocity,
            s.pressure / 1.0e3,
            s.reynolds,
            s.friction_factor
        );
    }
    if !result.skipped().is_empty() {
        println!("\nSkipped (no table record): {:?}", result.skipped());
    }
}
