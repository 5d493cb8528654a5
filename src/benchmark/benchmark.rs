use std::time::Instant;

use nalgebra::DVector;

use crate::simulation::calculator::TrajectoryCalculator;
use crate::simulation::integrator::RungeKutta;
use crate::simulation::shapes::CircleBody;
use crate::simulation::states::NVec2;
use crate::simulation::tableau::ButcherTableau;

/// RK4 on y' = y over [0, 1]: global error against e as dt halves
/// Error ratio between rows should approach 2^4 = 16
pub fn bench_convergence() {
    let rk = RungeKutta::new(ButcherTableau::rk4());
    let growth = |_t: f64, y: &DVector<f64>, out: &mut DVector<f64>| out.copy_from(y);
    let y0 = DVector::from_element(1, 1.0);

    println!("dt,error,ratio");

    let mut prev_err: Option<f64> = None;
    for k in 0..6 {
        let dt = 0.1 / 2f64.powi(k);
        let sol = match rk.solve(&growth, &y0, 0.0, 1.0, dt) {
            Ok(sol) => sol,
            Err(e) => {
                println!("{dt},failed: {e}");
                continue;
            }
        };
        let y_end = sol.last_state().map(|s| s[0]).unwrap_or(f64::NAN);
        let err = (y_end - 1f64.exp()).abs();
        let ratio = prev_err.map(|p| p / err).unwrap_or(f64::NAN);
        println!("{dt:.6},{err:.3e},{ratio:.2}");
        prev_err = Some(err);
    }
}

/// Wall time of numerical vs analytical trajectory calculation for growing bodies
/// Paste output directly into excel to graph
pub fn bench_calculator() {
    let (t0, t_end, dt) = (0.1, 3.0, 0.01);

    println!("N,numerical_ms,analytical_ms");

    for n in (100..=1600).step_by(300) {
        // well inside quadrant IV, every sample survives the filter
        let make_body = || CircleBody::new(NVec2::new(10.0, -10.0), 3.0, n);

        let (mut body_num, mut body_ana) = match (make_body(), make_body()) {
            (Ok(a), Ok(b)) => (a, b),
            _ => return,
        };

        let t_num = Instant::now();
        let num_ok = TrajectoryCalculator::numerical(&mut body_num, t0, t_end, dt)
            .and_then(|mut calc| calc.calculate_trajectories())
            .is_ok();
        let ms_num = t_num.elapsed().as_secs_f64() * 1000.0;

        let t_ana = Instant::now();
        let ana_ok = TrajectoryCalculator::analytical(&mut body_ana, t0, t_end)
            .and_then(|mut calc| calc.calculate_trajectories())
            .is_ok();
        let ms_ana = t_ana.elapsed().as_secs_f64() * 1000.0;

        if !(num_ok && ana_ok) {
            println!("{n},failed,failed");
            continue;
        }
        println!("{},{:.6},{:.6}", body_num.get_points().len(), ms_num, ms_ana);
    }
}
