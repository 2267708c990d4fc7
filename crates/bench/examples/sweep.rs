//! Evaluation counts of every root finder on the reference problems.
//!
//! For each method, solves `t1` to `t4` at a geometric sequence of
//! tolerances and prints how many function evaluations each solve took. A
//! `-` marks a solve that failed or did not converge.
//!
//! # Usage
//!
//! ```text
//! cargo run --example sweep
//! cargo run --example sweep -- f32
//! cargo run --example sweep --features plot -- f64
//! ```
//!
//! With the `plot` feature, each method's sweep also opens a window plotting
//! evaluations against `log₁₀ eps`.

use std::error::Error;

use rootfinder_bench::{Row, Tolerances, standard_problems, sweep};
use rootfinder_core::Real;
use rootfinder_solvers::equation::Method;

fn main() -> Result<(), Box<dyn Error>> {
    let precision = std::env::args().nth(1).unwrap_or_else(|| "f64".into());
    match precision.as_str() {
        "f32" => bench::<f32>(Tolerances::new(0.1, 1e-7, 0.125)?),
        "f64" => bench::<f64>(Tolerances::new(0.1, 1e-15, 0.125)?),
        other => {
            eprintln!("Unknown precision: {other}");
            eprintln!("Usage: sweep [f32|f64]");
            std::process::exit(1);
        }
    }
}

fn bench<T: Real>(tolerances: Tolerances<T>) -> Result<(), Box<dyn Error>> {
    let problems = standard_problems::<T>();

    for method in Method::ALL {
        let rows = sweep(method, &problems, tolerances)?;
        print_table(method, &rows);

        #[cfg(feature = "plot")]
        {
            use rootfinder_bench::{plot, series};

            plot::show(
                series(&rows),
                plot::ShowConfig::new()
                    .title(format!("{method}: evaluations per tolerance"))
                    .legend()
                    .log_x(),
            )?;
        }
    }

    Ok(())
}

fn print_table<T: Real>(method: Method, rows: &[Row<T>]) {
    println!("{method}");
    let Some(first) = rows.first() else {
        return;
    };

    print!("{:>12}", "eps");
    for sample in &first.samples {
        print!("{:>8}", sample.problem);
    }
    println!();

    for row in rows {
        print!("{:>12.3e}", row.eps.to_f64().unwrap_or(f64::NAN));
        for sample in &row.samples {
            if sample.root().is_nan() {
                print!("{:>8}", "-");
            } else {
                print!("{:>8}", sample.evaluations);
            }
        }
        println!();
    }
    println!();
}
