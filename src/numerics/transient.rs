use crate::numerics::solver::SolverError;
use crate::numerics::timing::{finalize_timing, record_step, reset_timing};
use crate::numerics::{Scheme, StepInput};
use crate::physics::params::Parameters;
use nalgebra::DVector;
use std::ops::Index;
use std::time::Instant;

/// Every state of a run: index 0 is the initial condition, index `k` the
/// field after `k` steps.
#[derive(Clone, Debug, PartialEq)]
pub struct SolutionHistory {
    states: Vec<DVector<f64>>,
}

impl SolutionHistory {
    pub fn from_states(states: Vec<DVector<f64>>) -> Self {
        Self { states }
    }

    /// Number of stored states, `Nt + 1` for a completed run.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn get(&self, step: usize) -> Option<&DVector<f64>> {
        self.states.get(step)
    }

    pub fn initial(&self) -> Option<&DVector<f64>> {
        self.states.first()
    }

    pub fn last(&self) -> Option<&DVector<f64>> {
        self.states.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DVector<f64>> {
        self.states.iter()
    }

    pub fn states(&self) -> &[DVector<f64>] {
        &self.states
    }

    pub fn into_states(self) -> Vec<DVector<f64>> {
        self.states
    }
}

impl Index<usize> for SolutionHistory {
    type Output = DVector<f64>;

    fn index(&self, step: usize) -> &Self::Output {
        &self.states[step]
    }
}

impl<'a> IntoIterator for &'a SolutionHistory {
    type Item = &'a DVector<f64>;
    type IntoIter = std::slice::Iter<'a, DVector<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

/// Drives one [`Scheme`] through `Nt` steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransientSolver {
    pub scheme: Scheme,
}

impl Default for TransientSolver {
    fn default() -> Self {
        Self {
            scheme: Scheme::Implicit,
        }
    }
}

impl TransientSolver {
    pub fn new(scheme: Scheme) -> Self {
        Self { scheme }
    }

    /// Run all `Nt` steps and return the `Nt + 1` states.
    pub fn solve(&self, params: &Parameters) -> Result<SolutionHistory, SolverError> {
        self.solve_with(params, |_, _, _| {})
    }

    /// Like [`TransientSolver::solve`], calling `callback(step, t, field)`
    /// after each state is stored, starting with the initial condition at
    /// step 0.
    ///
    /// Parameters are validated before anything else; on failure no state is
    /// produced and the callback is never called.
    pub fn solve_with(
        &self,
        params: &Parameters,
        mut callback: impl FnMut(usize, f64, &DVector<f64>),
    ) -> Result<SolutionHistory, SolverError> {
        params.validate()?;

        let input = StepInput::from_parameters(params);
        let r = input.mesh_ratio();
        tracing::debug!(
            scheme = %self.scheme,
            nx = params.num_points,
            nt = params.num_steps,
            dx = input.dx,
            dt = input.dt,
            r,
            stable = self.scheme.is_stable_for(r),
            "starting transient solve"
        );

        reset_timing();
        let solve_start = Instant::now();

        let mut states = Vec::with_capacity(params.num_steps + 1);
        states.push(params.initial_conditions.clone());
        callback(0, 0.0, &states[0]);

        for step in 1..=params.num_steps {
            let next = record_step(|| self.scheme.step(&states[step - 1], &input));
            let t = step as f64 * params.dt;
            tracing::trace!(step, t, max_abs = next.amax(), "step done");
            callback(step, t, &next);
            states.push(next);
        }

        let stats = finalize_timing(solve_start.elapsed());
        tracing::debug!(
            states = states.len(),
            mean_step_us = stats.mean_step().as_secs_f64() * 1.0e6,
            "transient solve finished"
        );
        Ok(SolutionHistory::from_states(states))
    }
}

/// Solve `params` with `scheme`.
pub fn solve(params: &Parameters, scheme: Scheme) -> Result<SolutionHistory, SolverError> {
    TransientSolver::new(scheme).solve(params)
}
