//! Run all three schemes on the same problem and compare their accuracy.

use heat1d::prelude::*;

fn main() {
    // Explicit-friendly grid: lambda stays under the 0.5 stability bound.
    let explicit_cfg = Config::builder().nx(241).nt(1001).build();
    // Implicit grid near lambda = 1, the sweet spot for Laasonen.
    let implicit_cfg = Config::builder().nx(381).nt(1001).build();
    // The dense path is O(n^3) per level; keep its grid modest.
    let lu_cfg = Config::builder().nx(101).nt(501).build();

    println!(
        "FTCS grid: {} x {} nodes, lambda = {:.4}",
        explicit_cfg.nx,
        explicit_cfg.nt,
        explicit_cfg.lambda()
    );
    println!(
        "Laasonen grid: {} x {} nodes, lambda = {:.4}",
        implicit_cfg.nx,
        implicit_cfg.nt,
        implicit_cfg.lambda()
    );

    for (name, cfg, scheme) in [
        ("FTCS", &explicit_cfg, Scheme::Ftcs),
        ("Laasonen/Thomas", &implicit_cfg, Scheme::LaasonenThomas),
        ("Laasonen/LU", &lu_cfg, Scheme::LaasonenLu),
    ] {
        let x = cfg.x_grid();
        match TimeMarcher::new(cfg.clone(), scheme).and_then(TimeMarcher::run) {
            Ok(march) => {
                let err = max_error(&march.u, &x, march.t, cfg);
                println!(
                    "{:<16} levels = {:>5}, systems solved = {:>5}, max error at t = {:.2}: {:.3e}",
                    name, march.nlevel, march.nsolve, march.t, err
                );
            }
            Err(err) => eprintln!("{} failed: {}", name, err),
        }
    }
}
