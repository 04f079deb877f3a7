use pibox::{ config::Config, potential::Potential, solve };

// solve the bare box and compare against the exact C n² ladder

fn main() {
    const NBASIS: usize = 8;

    let cfg = Config::natural(0.0, 1.0, 201, NBASIS, 1.0, Potential::Box);
    let sol = solve::solve(&cfg).unwrap();

    let kepf = cfg.get_kepf();
    println!("  n     expected     computed");
    for (v, &e) in sol.get_energies().iter().enumerate() {
        let n = (v + 1) as f64;
        println!(" {:>2}   {:>10.4e}   {:>10.4e}", v + 1, kepf * n * n, e);
    }
}
