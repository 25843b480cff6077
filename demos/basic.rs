use elliptic_jacobi::*;

fn main() {
    let m = 0.5_f64;

    // -- Complete integrals --
    println!("=== Complete integrals (f64) ===");
    let k = ellipk(m).unwrap();
    println!("K({m}) = {k}");

    let e = ellipe(m).unwrap();
    println!("E({m}) = {e}");

    let (k2, e2) = ellipke(m).unwrap();
    println!("(K, E)({m}) = ({k2}, {e2})  (single RF call)");

    let pi_c = ellippi_complete(0.3, m).unwrap();
    println!("Pi(0.3|{m}) = {pi_c}");

    // -- Incomplete integrals --
    println!("\n=== Incomplete integrals ===");
    let f = ellipf(1.0, m).unwrap();
    println!("F(1.0|{m}) = {f}");

    let f_far = ellipf(1.0 + 2.0 * core::f64::consts::PI, m).unwrap();
    println!("F(1.0 + 2pi|{m}) = {f_far}  (= F + 4K = {})", f + 4.0 * k);

    let e_inc = ellipe_inc(1.0, m).unwrap();
    println!("E(1.0|{m}) = {e_inc}");

    let p = ellippi(0.3, 1.0, m).unwrap();
    println!("Pi(0.3; 1.0|{m}) = {p}");

    // -- Jacobi functions --
    println!("\n=== Jacobi functions ===");
    let u = 1.0;
    let phi = am(u, m).unwrap();
    println!("am({u}|{m}) = {phi}");

    let t = ellipj(u, m).unwrap();
    println!("sn = {}, cn = {}, dn = {}", t.sn, t.cn, t.dn);
    for kind in JacobiKind::ALL {
        println!("  {kind}({u}|{m}) = {}", t.get(kind));
    }

    // -- Domain errors --
    println!("\n=== Domain errors ===");
    match ellipk(1.5_f64) {
        Ok(v) => println!("K(1.5) = {v}"),
        Err(err) => println!("K(1.5): {err}"),
    }

    // -- Elementwise --
    println!("\n=== Elementwise ===");
    let ms = [0.0, 0.25, 0.5, 0.75, 0.99];
    let ks = map::map1(&ms, ellipk).unwrap();
    for (m, k) in ms.iter().zip(&ks) {
        println!("  K({m}) = {k}");
    }

    // -- f32 support --
    println!("\n=== f32 support ===");
    let t32 = ellipj(1.0_f32, 0.5).unwrap();
    println!("sn(1|0.5) = {} (f32)", t32.sn);
}
