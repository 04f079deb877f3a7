use std::{ fs::File, io::{ BufWriter, Write }, path::PathBuf };
use anyhow::Result;
use chrono::{ DateTime, Local };
use ndarray as nd;
use pibox::{
    config::Config,
    potential::Potential,
    solve::{ self, Solution },
    units,
};

// vibrational levels of an OH-like diatomic in a Morse potential; writes the
// eigenvalue/eigenvector table and the potential-plus-eigenfunction overlay
// data for external plotting

const RE: f64 = 0.96966; // equilibrium bond length; Å
const DE: f64 = 37778.617; // dissociation energy; cm⁻¹
const FK: f64 = 774.7188418117737 * 0.75; // force constant; N/m
const NGRID: usize = 501;
const NBASIS: usize = 100;

fn main() -> Result<()> {
    let mass = (1.0 * 16.0 / (1.0 + 16.0)) * units::mu * 2.0;
    let cfg = Config::wavenumber(
        RE - 0.5,
        RE + 1.5,
        NGRID,
        NBASIS,
        mass,
        Potential::morse_wavenumber(DE, FK, RE),
    );

    let start = Local::now();
    let sol = solve::solve(&cfg)?;
    let end = Local::now();

    let e = sol.get_energies();
    println!("Results:");
    println!("-------------------------------------");
    println!("   v  Energy (cm-1)  Delta E (cm-1)  ");
    println!("-------------------------------------");
    for v in 0..sol.len().min(40) {
        if v > 0 {
            println!(" {:>3}  {:>13.3}  {:>14.3}  ", v, e[v], e[v] - e[v - 1]);
        } else {
            println!(" {:>3}  {:>13.3}          ------ ", v, e[v]);
        }
    }

    write_eigenvalues(
        &PathBuf::from("eigenvalues.txt"), &cfg, &sol, start, end)?;
    write_wavefunctions(&PathBuf::from("wavefunctions.txt"), &cfg, &sol)?;
    Ok(())
}

fn write_eigenvalues(
    path: &PathBuf,
    cfg: &Config,
    sol: &Solution,
    start: DateTime<Local>,
    end: DateTime<Local>,
) -> Result<()> {
    let mut f = BufWriter::new(File::create(path)?);
    writeln!(f, "#pibox morse output")?;
    writeln!(f, "#start time {}", start.format("%Y-%m-%d %H:%M:%S%.6f"))?;
    writeln!(f, "#end time {}", end.format("%Y-%m-%d %H:%M:%S%.6f"))?;
    writeln!(f, "#elapsed time {} ms", (end - start).num_milliseconds())?;
    writeln!(f, "#xmin {:.4}", cfg.get_xmin())?;
    writeln!(f, "#xmax {:.4}", cfg.get_xmax())?;
    writeln!(f, "#grid size {}", cfg.get_ngrid())?;
    writeln!(f, "#basis size {}", cfg.get_nbasis())?;
    writeln!(f)?;
    writeln!(f, "#eigenvalues")?;
    let e = sol.get_energies();
    write!(f, "{:.5e}", e[0])?;
    for ev in e.iter().skip(1) {
        write!(f, "\t{ev:.5e}")?;
    }
    writeln!(f)?;
    writeln!(f)?;
    writeln!(f, "#eigenvectors")?;
    let c = sol.get_coeffs();
    for j in 0..sol.len() {
        write!(f, "{:.5e}", c[[j, 0]])?;
        for v in 1..sol.len() {
            write!(f, "\t{:.5e}", c[[j, v]])?;
        }
        writeln!(f)?;
    }
    Ok(())
}

// x, V(x), and the first ten eigenfunctions offset by their energies, scaled
// by (E₂ − E₀)/5 so the curves separate on a common energy axis
fn write_wavefunctions(
    path: &PathBuf,
    cfg: &Config,
    sol: &Solution,
) -> Result<()> {
    let nplot = sol.len().min(10);
    let sf
        = if sol.len() > 2 {
            (sol.energy(2) - sol.energy(0)) / 5.0
        } else {
            1.0
        };
    let psi: Vec<nd::Array1<f64>>
        = (0..nplot).map(|v| sol.eigenfunction(v)).collect();

    let mut f = BufWriter::new(File::create(path)?);
    write!(f, "#x\tV")?;
    for v in 0..nplot {
        write!(f, "\tpsi{v}")?;
    }
    writeln!(f)?;
    let x = sol.get_grid().get_x();
    for (k, &xk) in x.iter().enumerate() {
        write!(f, "{:.5e}\t{:.5e}", xk, cfg.get_potential().eval(xk))?;
        for (v, psi_v) in psi.iter().enumerate() {
            write!(f, "\t{:.5e}", sol.energy(v) + sf * psi_v[k])?;
        }
        writeln!(f)?;
    }
    Ok(())
}
