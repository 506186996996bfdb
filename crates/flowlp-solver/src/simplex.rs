//! Bounded-variable primal simplex.
//!
//! The problem is treated in the form `x_R = A x_S`: every row `i` owns an
//! auxiliary variable `x_R[i]` carrying the row bounds, every column a
//! structural variable. With `[I | -A]` as the constraint matrix each basis
//! has exactly one basic variable per row.
//!
//! Phase one minimizes the sum of bound violations of basic variables, phase
//! two the objective; the phase is chosen again on every iteration. The basis
//! inverse is kept explicitly and rebuilt from scratch at the start of every
//! run and every `refactor_interval` pivots.

use flowlp_core::{BoundType, EngineFailure, SolutionStatus};
use tracing::{debug, trace, warn};

use crate::config::SimplexConfig;
use crate::problem::{Problem, ProblemError, Sense, VarStat};
use crate::solution::Solution;

/// Ratios closer than this are treated as ties.
const TIE_TOLERANCE: f64 = 1e-12;

/// Run the simplex method on `lp`, starting from its stored statuses.
///
/// Results, final statuses and the [`Solution`] are written back into `lp`.
/// Fails only when the stored statuses do not name one basic variable per
/// row; every other outcome is reported through the returned status.
pub fn solve(lp: &mut Problem, config: &SimplexConfig) -> Result<SolutionStatus, ProblemError> {
    let rows = lp.rows.len();
    let basic = lp
        .rows
        .iter()
        .map(|row| row.stat)
        .chain(lp.cols.iter().map(|col| col.stat))
        .filter(|stat| stat.is_basic())
        .count();
    if basic != rows {
        return Err(ProblemError::InvalidBasis { basic, rows });
    }

    let mut workspace = Workspace::load(lp, config);
    let status = workspace.run();
    workspace.store(lp, status);

    match status {
        SolutionStatus::Failed(failure) => warn!(
            component = "simplex",
            operation = "solve",
            status = failure.as_str(),
            iterations = workspace.iterations as u64,
            "Simplex run ended without a verdict"
        ),
        _ => debug!(
            component = "simplex",
            operation = "solve",
            status = status.as_str(),
            iterations = workspace.iterations as u64,
            rows = rows as u64,
            cols = lp.cols.len() as u64,
            "Simplex run finished"
        ),
    }
    Ok(status)
}

enum Step {
    /// The entering variable reaches its opposite bound first
    Flip(f64),
    /// Basic variable at `row` leaves with status `leave`
    Pivot { row: usize, t: f64, leave: VarStat },
    /// Nothing limits the step
    Unbounded,
}

struct Workspace<'c> {
    config: &'c SimplexConfig,
    /// Number of rows
    m: usize,
    /// Sparse columns of `[I | -A]`, auxiliary variables first
    columns: Vec<Vec<(usize, f64)>>,
    kind: Vec<BoundType>,
    lb: Vec<f64>,
    ub: Vec<f64>,
    /// Objective coefficients, negated when maximizing
    cost: Vec<f64>,
    stat: Vec<VarStat>,
    x: Vec<f64>,
    /// `head[p]` is the variable at basis position `p`
    head: Vec<usize>,
    /// Row-major `m x m` inverse of the basis matrix
    binv: Vec<f64>,
    iterations: usize,
    bland: bool,
    degenerate_streak: usize,
}

impl<'c> Workspace<'c> {
    fn load(lp: &Problem, config: &'c SimplexConfig) -> Self {
        let m = lp.rows.len();
        let total = m + lp.cols.len();
        let sign = match lp.sense() {
            Sense::Minimize => 1.0,
            Sense::Maximize => -1.0,
        };

        let mut columns = Vec::with_capacity(total);
        let mut kind = Vec::with_capacity(total);
        let mut lb = Vec::with_capacity(total);
        let mut ub = Vec::with_capacity(total);
        let mut cost = Vec::with_capacity(total);
        let mut stat = Vec::with_capacity(total);

        for (i, row) in lp.rows.iter().enumerate() {
            columns.push(vec![(i, 1.0)]);
            kind.push(row.kind);
            lb.push(row.lb);
            ub.push(row.ub);
            cost.push(0.0);
            stat.push(row.stat);
        }
        for col in &lp.cols {
            columns.push(col.entries.iter().map(|&(i, v)| (i, -v)).collect());
            kind.push(col.kind);
            lb.push(col.lb);
            ub.push(col.ub);
            cost.push(sign * col.coef);
            stat.push(col.stat);
        }

        let head = (0..total).filter(|&k| stat[k].is_basic()).collect();
        let mut workspace = Self {
            config,
            m,
            columns,
            kind,
            lb,
            ub,
            cost,
            stat,
            x: vec![0.0; total],
            head,
            binv: Vec::new(),
            iterations: 0,
            bland: config.degenerate_cycle_limit == 0,
            degenerate_streak: 0,
        };
        for k in 0..total {
            if !workspace.stat[k].is_basic() {
                workspace.stat[k] = workspace.stat[k].resolve(workspace.kind[k]);
                workspace.park(k);
            }
        }
        workspace
    }

    /// Put non-basic variable `k` at the value its status implies.
    fn park(&mut self, k: usize) {
        self.x[k] = match self.stat[k] {
            VarStat::Nl | VarStat::Ns => self.lb[k],
            VarStat::Nu => self.ub[k],
            VarStat::Nf => 0.0,
            VarStat::Bs => self.x[k],
        };
    }

    fn run(&mut self) -> SolutionStatus {
        if let Err(failure) = self.factorize() {
            return SolutionStatus::Failed(failure);
        }
        self.recompute_basic();

        let refactor_interval = self.config.refactor_interval.max(1);
        let mut pivots_since_refactor = 0;
        loop {
            if pivots_since_refactor >= refactor_interval {
                if self.factorize().is_err() {
                    return SolutionStatus::Failed(EngineFailure::NumericalInstability);
                }
                self.recompute_basic();
                pivots_since_refactor = 0;
            }

            let (basic_costs, phase_one) = self.phase_costs();
            let pi = self.btran(&basic_costs);
            let Some((k, d)) = self.price(&pi, phase_one) else {
                return if phase_one {
                    SolutionStatus::Infeasible
                } else {
                    SolutionStatus::Optimal
                };
            };
            if self.iterations >= self.config.max_iterations {
                return SolutionStatus::Failed(EngineFailure::IterationLimit);
            }

            let s = match self.stat[k] {
                VarStat::Nu => -1.0,
                VarStat::Nf if d > 0.0 => -1.0,
                _ => 1.0,
            };
            let alpha = self.ftran(k);
            self.iterations += 1;

            let t = match self.ratio_test(k, s, &alpha) {
                Step::Unbounded if phase_one => {
                    return SolutionStatus::Failed(EngineFailure::NumericalInstability);
                }
                Step::Unbounded => return SolutionStatus::Unbounded,
                Step::Flip(t) => {
                    self.advance(k, s, &alpha, t);
                    self.stat[k] = if s > 0.0 { VarStat::Nu } else { VarStat::Nl };
                    self.park(k);
                    trace!(iteration = self.iterations, phase_one, entering = k, step = t, "Bound flip");
                    t
                }
                Step::Pivot { row, t, leave } => {
                    self.advance(k, s, &alpha, t);
                    let leaving = self.head[row];
                    self.stat[leaving] = leave;
                    self.park(leaving);
                    self.stat[k] = VarStat::Bs;
                    self.head[row] = k;
                    self.update_inverse(row, &alpha);
                    pivots_since_refactor += 1;
                    trace!(iteration = self.iterations, phase_one, entering = k, leaving, step = t, "Pivot");
                    t
                }
            };

            if t <= TIE_TOLERANCE {
                self.degenerate_streak += 1;
                if !self.bland && self.degenerate_streak >= self.config.degenerate_cycle_limit {
                    debug!(
                        component = "simplex",
                        iteration = self.iterations,
                        "Switching to Bland's rule after degenerate steps"
                    );
                    self.bland = true;
                }
            } else {
                self.degenerate_streak = 0;
            }
        }
    }

    /// Invert the current basis matrix by Gauss-Jordan elimination.
    fn factorize(&mut self) -> Result<(), EngineFailure> {
        let m = self.m;
        let mut b = vec![0.0; m * m];
        for (p, &k) in self.head.iter().enumerate() {
            for &(i, v) in &self.columns[k] {
                b[i * m + p] = v;
            }
        }
        let mut inv = vec![0.0; m * m];
        for i in 0..m {
            inv[i * m + i] = 1.0;
        }

        for c in 0..m {
            let Some(p) = (c..m).max_by(|&r1, &r2| b[r1 * m + c].abs().total_cmp(&b[r2 * m + c].abs()))
            else {
                return Err(EngineFailure::SingularBasis);
            };
            let pivot = b[p * m + c];
            if pivot.abs() <= self.config.pivot_tolerance {
                return Err(EngineFailure::SingularBasis);
            }
            if p != c {
                swap_rows(&mut b, m, p, c);
                swap_rows(&mut inv, m, p, c);
            }
            for col in 0..m {
                b[c * m + col] /= pivot;
                inv[c * m + col] /= pivot;
            }
            let pivot_b = b[c * m..(c + 1) * m].to_vec();
            let pivot_inv = inv[c * m..(c + 1) * m].to_vec();
            for r in (0..m).filter(|&r| r != c) {
                let f = b[r * m + c];
                if f == 0.0 {
                    continue;
                }
                for col in 0..m {
                    b[r * m + col] -= f * pivot_b[col];
                    inv[r * m + col] -= f * pivot_inv[col];
                }
            }
        }
        self.binv = inv;
        Ok(())
    }

    /// Solve `B x_B = -N x_N` for the basic variables.
    fn recompute_basic(&mut self) {
        let m = self.m;
        let mut rhs = vec![0.0; m];
        for (k, column) in self.columns.iter().enumerate() {
            if self.stat[k].is_basic() || self.x[k] == 0.0 {
                continue;
            }
            for &(i, v) in column {
                rhs[i] -= v * self.x[k];
            }
        }
        for p in 0..m {
            let row = &self.binv[p * m..(p + 1) * m];
            self.x[self.head[p]] = row.iter().zip(&rhs).map(|(a, b)| a * b).sum();
        }
    }

    /// `B^-1 a_k`, indexed by basis position.
    fn ftran(&self, k: usize) -> Vec<f64> {
        let m = self.m;
        (0..m)
            .map(|p| {
                self.columns[k]
                    .iter()
                    .map(|&(i, v)| self.binv[p * m + i] * v)
                    .sum()
            })
            .collect()
    }

    /// `c_B^T B^-1`, indexed by row.
    fn btran(&self, basic_costs: &[f64]) -> Vec<f64> {
        let m = self.m;
        let mut pi = vec![0.0; m];
        for (p, &c) in basic_costs.iter().enumerate() {
            if c == 0.0 {
                continue;
            }
            for (i, value) in pi.iter_mut().enumerate() {
                *value += c * self.binv[p * m + i];
            }
        }
        pi
    }

    fn reduced_cost(&self, k: usize, cost: f64, pi: &[f64]) -> f64 {
        cost - self.columns[k].iter().map(|&(i, v)| pi[i] * v).sum::<f64>()
    }

    fn tolerance(&self, bound: f64) -> f64 {
        self.config.feasibility_tolerance * (1.0 + bound.abs())
    }

    fn below(&self, k: usize) -> bool {
        self.lb[k].is_finite() && self.x[k] < self.lb[k] - self.tolerance(self.lb[k])
    }

    fn above(&self, k: usize) -> bool {
        self.ub[k].is_finite() && self.x[k] > self.ub[k] + self.tolerance(self.ub[k])
    }

    /// Costs of the basic variables for the current phase, and whether that
    /// phase is phase one.
    fn phase_costs(&self) -> (Vec<f64>, bool) {
        let mut costs = vec![0.0; self.m];
        let mut phase_one = false;
        for (p, &k) in self.head.iter().enumerate() {
            if self.below(k) {
                costs[p] = -1.0;
                phase_one = true;
            } else if self.above(k) {
                costs[p] = 1.0;
                phase_one = true;
            }
        }
        if !phase_one {
            for (p, &k) in self.head.iter().enumerate() {
                costs[p] = self.cost[k];
            }
        }
        (costs, phase_one)
    }

    /// Pick the entering variable: largest improving reduced cost, or the
    /// lowest-numbered improving one under Bland's rule.
    fn price(&self, pi: &[f64], phase_one: bool) -> Option<(usize, f64)> {
        let tol = self.config.optimality_tolerance;
        let mut best: Option<(usize, f64)> = None;
        for k in 0..self.columns.len() {
            let stat = self.stat[k];
            if matches!(stat, VarStat::Bs | VarStat::Ns) {
                continue;
            }
            let cost = if phase_one { 0.0 } else { self.cost[k] };
            let d = self.reduced_cost(k, cost, pi);
            let improving = match stat {
                VarStat::Nl => d < -tol,
                VarStat::Nu => d > tol,
                VarStat::Nf => d.abs() > tol,
                VarStat::Bs | VarStat::Ns => false,
            };
            if !improving {
                continue;
            }
            if self.bland {
                return Some((k, d));
            }
            if best.is_none_or(|(_, best_d)| d.abs() > best_d.abs()) {
                best = Some((k, d));
            }
        }
        best
    }

    /// How far basic variable `k` may move at rate `delta` before it hits a
    /// bound, and the status it leaves with.
    fn blocking(&self, k: usize, delta: f64) -> Option<(f64, VarStat)> {
        let (x, l, u) = (self.x[k], self.lb[k], self.ub[k]);
        let at_lower = if self.kind[k] == BoundType::Fixed { VarStat::Ns } else { VarStat::Nl };
        let at_upper = if self.kind[k] == BoundType::Fixed { VarStat::Ns } else { VarStat::Nu };
        if delta > 0.0 {
            if self.below(k) {
                Some(((l - x) / delta, at_lower))
            } else if self.above(k) || !u.is_finite() {
                None
            } else {
                Some(((u - x).max(0.0) / delta, at_upper))
            }
        } else if self.above(k) {
            Some(((x - u) / -delta, at_upper))
        } else if self.below(k) || !l.is_finite() {
            None
        } else {
            Some(((x - l).max(0.0) / -delta, at_lower))
        }
    }

    /// Ratio test for entering variable `k` moving in direction `s`.
    fn ratio_test(&self, k: usize, s: f64, alpha: &[f64]) -> Step {
        let range = self.ub[k] - self.lb[k];
        let mut best_t = if range.is_finite() { range } else { f64::INFINITY };
        let mut best: Option<(usize, VarStat)> = None;
        for (p, &a) in alpha.iter().enumerate() {
            let delta = -s * a;
            if delta.abs() <= self.config.pivot_tolerance {
                continue;
            }
            let Some((t, leave)) = self.blocking(self.head[p], delta) else {
                continue;
            };
            let take = if t < best_t - TIE_TOLERANCE {
                true
            } else if t <= best_t + TIE_TOLERANCE {
                match best {
                    Some((q, _)) if self.bland => self.head[p] < self.head[q],
                    Some((q, _)) => a.abs() > alpha[q].abs(),
                    None => false,
                }
            } else {
                false
            };
            if take {
                best_t = t.min(best_t).max(0.0);
                best = Some((p, leave));
            }
        }
        match best {
            Some((row, leave)) => Step::Pivot { row, t: best_t, leave },
            None if best_t.is_finite() => Step::Flip(best_t),
            None => Step::Unbounded,
        }
    }

    /// Move entering variable `k` by `s * t` and the basic variables with it.
    fn advance(&mut self, k: usize, s: f64, alpha: &[f64], t: f64) {
        if t == 0.0 {
            return;
        }
        for (p, &a) in alpha.iter().enumerate() {
            self.x[self.head[p]] -= s * a * t;
        }
        self.x[k] += s * t;
    }

    /// Product-form update of the inverse after `alpha` entered at `row`.
    fn update_inverse(&mut self, row: usize, alpha: &[f64]) {
        let m = self.m;
        let pivot = alpha[row];
        for c in 0..m {
            self.binv[row * m + c] /= pivot;
        }
        let pivot_row = self.binv[row * m..(row + 1) * m].to_vec();
        for (p, &a) in alpha.iter().enumerate() {
            if p == row || a == 0.0 {
                continue;
            }
            for c in 0..m {
                self.binv[p * m + c] -= a * pivot_row[c];
            }
        }
    }

    /// Write values, duals, statuses and the solution record back into `lp`.
    fn store(&mut self, lp: &mut Problem, status: SolutionStatus) {
        let m = self.m;
        if status == SolutionStatus::Failed(EngineFailure::SingularBasis) {
            for row in &mut lp.rows {
                row.prim = f64::NAN;
                row.dual = f64::NAN;
            }
            for col in &mut lp.cols {
                col.prim = f64::NAN;
                col.dual = f64::NAN;
            }
            lp.solution = Some(Solution {
                status,
                objective_value: f64::NAN,
                iterations: 0,
            });
            return;
        }

        self.recompute_basic();
        let basic_costs: Vec<f64> = self.head.iter().map(|&k| self.cost[k]).collect();
        let pi = self.btran(&basic_costs);
        let sign = match lp.sense() {
            Sense::Minimize => 1.0,
            Sense::Maximize => -1.0,
        };
        let dual = |k: usize| {
            if self.stat[k].is_basic() {
                0.0
            } else {
                sign * self.reduced_cost(k, self.cost[k], &pi)
            }
        };

        for (i, row) in lp.rows.iter_mut().enumerate() {
            row.prim = self.x[i];
            row.dual = dual(i);
            row.stat = self.stat[i];
        }
        let mut objective_value = 0.0;
        for (j, col) in lp.cols.iter_mut().enumerate() {
            col.prim = self.x[m + j];
            col.dual = dual(m + j);
            col.stat = self.stat[m + j];
            objective_value += col.coef * col.prim;
        }
        lp.solution = Some(Solution {
            status,
            objective_value,
            iterations: self.iterations,
        });
    }
}

fn swap_rows(a: &mut [f64], m: usize, r1: usize, r2: usize) {
    for c in 0..m {
        a.swap(r1 * m + c, r2 * m + c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const INF: f64 = f64::INFINITY;

    /// Rows `x + y <= 4`, `x <= 3`, `y <= 3` with `x, y >= 0`.
    fn box_problem(cost: [f64; 2], sense: Sense) -> Problem {
        let mut lp = Problem::new();
        lp.set_sense(sense);
        lp.add_rows(3);
        lp.add_cols(2);
        lp.set_row_bnds(1, -INF, 4.0).unwrap();
        lp.set_row_bnds(2, -INF, 3.0).unwrap();
        lp.set_row_bnds(3, -INF, 3.0).unwrap();
        lp.set_mat_col(1, &[(1, 1.0), (2, 1.0)]).unwrap();
        lp.set_mat_col(2, &[(1, 1.0), (3, 1.0)]).unwrap();
        for j in 1..=2 {
            lp.set_col_bnds(j, 0.0, INF).unwrap();
            lp.set_obj_coef(j, cost[j - 1]).unwrap();
        }
        lp
    }

    #[test]
    fn test_maximization() {
        let mut lp = box_problem([3.0, 2.0], Sense::Maximize);
        let status = solve(&mut lp, &SimplexConfig::default()).unwrap();

        assert_eq!(status, SolutionStatus::Optimal);
        assert_abs_diff_eq!(lp.col_prim(1).unwrap(), 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(lp.col_prim(2).unwrap(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(lp.solution().unwrap().objective_value, 11.0, epsilon = 1e-9);
    }

    #[test]
    fn test_minimization_with_lower_row() {
        // x + y >= 4 instead of <= 4, minimize 2x + 3y -> x = 3, y = 1
        let mut lp = box_problem([2.0, 3.0], Sense::Minimize);
        lp.set_row_bnds(1, 4.0, INF).unwrap();
        let status = solve(&mut lp, &SimplexConfig::default()).unwrap();

        assert_eq!(status, SolutionStatus::Optimal);
        assert_abs_diff_eq!(lp.col_prim(1).unwrap(), 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(lp.col_prim(2).unwrap(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(lp.solution().unwrap().objective_value, 9.0, epsilon = 1e-9);
        // one more unit of demand costs 3 (served by y)
        assert_abs_diff_eq!(lp.row_dual(1).unwrap(), 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(lp.row_prim(1).unwrap(), 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_infeasible() {
        // x >= 5 and x <= 3
        let mut lp = Problem::new();
        lp.add_rows(2);
        lp.add_cols(1);
        lp.set_row_bnds(1, 5.0, INF).unwrap();
        lp.set_row_bnds(2, -INF, 3.0).unwrap();
        lp.set_mat_col(1, &[(1, 1.0), (2, 1.0)]).unwrap();
        lp.set_col_bnds(1, 0.0, INF).unwrap();
        lp.set_obj_coef(1, 1.0).unwrap();

        let status = solve(&mut lp, &SimplexConfig::default()).unwrap();
        assert_eq!(status, SolutionStatus::Infeasible);
        assert!(lp.solution().is_some());
    }

    #[test]
    fn test_unbounded() {
        // minimize -x with x >= 0 and x - y <= 1, y >= 0
        let mut lp = Problem::new();
        lp.add_rows(1);
        lp.add_cols(2);
        lp.set_row_bnds(1, -INF, 1.0).unwrap();
        lp.set_mat_col(1, &[(1, 1.0)]).unwrap();
        lp.set_mat_col(2, &[(1, -1.0)]).unwrap();
        lp.set_col_bnds(1, 0.0, INF).unwrap();
        lp.set_col_bnds(2, 0.0, INF).unwrap();
        lp.set_obj_coef(1, -1.0).unwrap();

        let status = solve(&mut lp, &SimplexConfig::default()).unwrap();
        assert_eq!(status, SolutionStatus::Unbounded);
    }

    #[test]
    fn test_bound_flip_without_rows() {
        let mut lp = Problem::new();
        lp.add_cols(1);
        lp.set_col_bnds(1, -2.0, 5.0).unwrap();
        lp.set_obj_coef(1, -1.0).unwrap();

        let status = solve(&mut lp, &SimplexConfig::default()).unwrap();
        assert_eq!(status, SolutionStatus::Optimal);
        assert_eq!(lp.col_prim(1).unwrap(), 5.0);
        assert_eq!(lp.col_stat(1).unwrap(), VarStat::Nu);
        assert_eq!(lp.col_dual(1).unwrap(), -1.0);
        assert_eq!(lp.solution().unwrap().iterations, 1);
    }

    #[test]
    fn test_free_column_enters_downwards() {
        // minimize x with x free and x >= -3 as a row
        let mut lp = Problem::new();
        lp.add_rows(1);
        lp.add_cols(1);
        lp.set_row_bnds(1, -3.0, INF).unwrap();
        lp.set_mat_col(1, &[(1, 1.0)]).unwrap();
        lp.set_obj_coef(1, 1.0).unwrap();

        let status = solve(&mut lp, &SimplexConfig::default()).unwrap();
        assert_eq!(status, SolutionStatus::Optimal);
        assert_abs_diff_eq!(lp.col_prim(1).unwrap(), -3.0, epsilon = 1e-12);
        assert_eq!(lp.col_stat(1).unwrap(), VarStat::Bs);
        assert_eq!(lp.row_stat(1).unwrap(), VarStat::Nl);
    }

    #[test]
    fn test_invalid_basis_is_rejected_before_solving() {
        let mut lp = box_problem([1.0, 1.0], Sense::Minimize);
        lp.set_row_stat(1, VarStat::Nu).unwrap();
        assert_eq!(
            solve(&mut lp, &SimplexConfig::default()),
            Err(ProblemError::InvalidBasis { basic: 2, rows: 3 })
        );
        assert!(lp.solution().is_none());
    }

    #[test]
    fn test_singular_basis_reports_failure() {
        // both columns are identical, so making both basic is singular
        let mut lp = Problem::new();
        lp.add_rows(2);
        lp.add_cols(2);
        for j in 1..=2 {
            lp.set_mat_col(j, &[(1, 1.0), (2, 1.0)]).unwrap();
            lp.set_col_bnds(j, 0.0, INF).unwrap();
            lp.set_col_stat(j, VarStat::Bs).unwrap();
        }
        lp.set_row_stat(1, VarStat::Nf).unwrap();
        lp.set_row_stat(2, VarStat::Nf).unwrap();

        let status = solve(&mut lp, &SimplexConfig::default()).unwrap();
        assert_eq!(status, SolutionStatus::Failed(EngineFailure::SingularBasis));
        assert!(lp.solution().unwrap().objective_value.is_nan());
        assert!(lp.col_prim(1).unwrap().is_nan());
        // statuses are left as the caller set them
        assert_eq!(lp.col_stat(1).unwrap(), VarStat::Bs);
        assert_eq!(lp.row_stat(1).unwrap(), VarStat::Nf);
    }

    #[test]
    fn test_iteration_limit() {
        let mut lp = box_problem([3.0, 2.0], Sense::Maximize);
        let config = SimplexConfig::new().with_max_iterations(1);
        let status = solve(&mut lp, &config).unwrap();
        assert_eq!(status, SolutionStatus::Failed(EngineFailure::IterationLimit));
        assert_eq!(lp.solution().unwrap().iterations, 1);
        assert!(lp.solution().unwrap().objective_value.is_finite());
    }

    #[test]
    fn test_frequent_refactorization_gives_same_optimum() {
        let config = SimplexConfig::new().with_refactor_interval(1);
        let mut lp = box_problem([3.0, 2.0], Sense::Maximize);
        assert_eq!(solve(&mut lp, &config).unwrap(), SolutionStatus::Optimal);
        assert_abs_diff_eq!(lp.solution().unwrap().objective_value, 11.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bland_rule_gives_same_optimum() {
        let config = SimplexConfig::new().with_degenerate_cycle_limit(0);
        let mut lp = box_problem([3.0, 2.0], Sense::Maximize);
        assert_eq!(solve(&mut lp, &config).unwrap(), SolutionStatus::Optimal);
        assert_abs_diff_eq!(lp.solution().unwrap().objective_value, 11.0, epsilon = 1e-9);
    }

    #[test]
    fn test_warm_start_from_optimal_basis_takes_no_iterations() {
        let mut lp = box_problem([3.0, 2.0], Sense::Maximize);
        solve(&mut lp, &SimplexConfig::default()).unwrap();
        assert!(lp.solution().unwrap().iterations > 0);

        lp.set_obj_coef(1, 3.0).unwrap();
        let status = solve(&mut lp, &SimplexConfig::default()).unwrap();
        assert_eq!(status, SolutionStatus::Optimal);
        assert_eq!(lp.solution().unwrap().iterations, 0);
    }
}
