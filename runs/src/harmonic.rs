use pibox::{ config::Config, potential::Potential, solve, units };

// vibrational ladder of an OH-like diatomic in a purely harmonic well,
// checked against the analytic ω(v + ½) spacing

const RE: f64 = 0.96966; // equilibrium bond length; Å
const FK: f64 = 774.7188418117737 * 0.75; // force constant; N/m

fn main() -> anyhow::Result<()> {
    let mass = (1.0 * 16.0 / (1.0 + 16.0)) * units::mu * 2.0;
    let cfg = Config::wavenumber(
        RE - 0.7,
        RE + 0.7,
        501,
        60,
        mass,
        Potential::harmonic_wavenumber(FK, RE),
    );
    let sol = solve::solve(&cfg)?;

    let hw = units::harmonic_wavenumber(FK, mass);
    println!("  v   expected (cm-1)   computed (cm-1)");
    for v in 0..10 {
        let expected = hw * (0.5 + v as f64);
        println!(" {:>2}   {:>15.3}   {:>15.3}", v, expected, sol.energy(v));
    }
    Ok(())
}
