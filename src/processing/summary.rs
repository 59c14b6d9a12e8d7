use crate::numerics::metrics::Comparison;
use crate::numerics::{Scheme, StepInput};
use crate::physics::params::Parameters;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Per-scheme outcome of a run.
pub struct SchemeRun {
    pub scheme: Scheme,
    pub stable: bool,
    pub final_error: Option<f64>,
    pub max_error: Option<f64>,
    pub final_max_abs: f64,
}

pub struct RunSummary {
    // Grid info
    pub length: f64,
    pub num_points: usize,
    pub dx: f64,

    // Time info
    pub dt: f64,
    pub num_steps: usize,
    pub final_time: f64,

    // Physics info
    pub alpha: f64,
    pub mesh_ratio: f64,
    pub left_boundary: f64,
    pub right_boundary: f64,
    pub initial_label: String,

    pub runs: Vec<SchemeRun>,
    pub comparison: Option<Comparison>,
}

impl RunSummary {
    pub fn from_parameters(params: &Parameters, initial_label: impl Into<String>) -> Self {
        let input = StepInput::from_parameters(params);
        Self {
            length: params.length,
            num_points: params.num_points,
            dx: input.dx,
            dt: params.dt,
            num_steps: params.num_steps,
            final_time: params.final_time(),
            alpha: params.alpha,
            mesh_ratio: input.mesh_ratio(),
            left_boundary: params.boundary.left,
            right_boundary: params.boundary.right,
            initial_label: initial_label.into(),
            runs: Vec::new(),
            comparison: None,
        }
    }

    pub fn add_run(&mut self, scheme: Scheme, errors: &[f64], final_max_abs: f64) {
        self.runs.push(SchemeRun {
            scheme,
            stable: scheme.is_stable_for(self.mesh_ratio),
            final_error: errors.last().copied(),
            max_error: errors.iter().copied().reduce(f64::max),
            final_max_abs,
        });
    }

    pub fn add_comparison(&mut self, comparison: Comparison) {
        self.comparison = Some(comparison);
    }

    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut file = File::create(path)?;

        writeln!(file, "{}", "=".repeat(60))?;
        writeln!(file, "HEAT EQUATION RUN SUMMARY")?;
        writeln!(file, "{}", "=".repeat(60))?;
        writeln!(file)?;

        writeln!(file, "GRID")?;
        writeln!(file, "{}", "-".repeat(60))?;
        writeln!(file, "Rod length (L):      {:.6e}", self.length)?;
        writeln!(file, "Grid points (Nx):    {}", self.num_points)?;
        writeln!(file, "Spacing (dx):        {:.6e}", self.dx)?;
        writeln!(file)?;

        writeln!(file, "TIME STEPPING")?;
        writeln!(file, "{}", "-".repeat(60))?;
        writeln!(file, "Time step (dt):      {:.6e}", self.dt)?;
        writeln!(file, "Steps (Nt):          {}", self.num_steps)?;
        writeln!(file, "Final time:          {:.6e}", self.final_time)?;
        writeln!(file)?;

        writeln!(file, "PHYSICS")?;
        writeln!(file, "{}", "-".repeat(60))?;
        writeln!(file, "Diffusivity (alpha): {:.6e}", self.alpha)?;
        writeln!(file, "Mesh ratio (r):      {:.6e}", self.mesh_ratio)?;
        writeln!(file, "Initial condition:   {}", self.initial_label)?;
        writeln!(
            file,
            "Boundaries:          left = {:.6e}, right = {:.6e}",
            self.left_boundary, self.right_boundary
        )?;
        writeln!(file)?;

        if !self.runs.is_empty() {
            writeln!(file, "SCHEMES")?;
            writeln!(file, "{}", "-".repeat(60))?;
            for run in &self.runs {
                writeln!(file, "{}:", run.scheme)?;
                writeln!(
                    file,
                    "  Stable for r:      {}",
                    if run.stable { "yes" } else { "no" }
                )?;
                if let (Some(last), Some(max)) = (run.final_error, run.max_error) {
                    writeln!(file, "  Final RMSE:        {:.6e}", last)?;
                    writeln!(file, "  Max RMSE:          {:.6e}", max)?;
                }
                writeln!(file, "  Final max |u|:     {:.6e}", run.final_max_abs)?;
            }
            writeln!(file)?;
        }

        if let Some(c) = &self.comparison {
            writeln!(file, "EXPLICIT VS IMPLICIT (final state)")?;
            writeln!(file, "{}", "-".repeat(60))?;
            writeln!(file, "L2 difference:       {:.6e}", c.l2)?;
            writeln!(file, "Mean abs difference: {:.6e}", c.mean_abs)?;
            writeln!(
                file,
                "Max abs difference:  {:.6e} at node {}",
                c.max_abs, c.max_idx
            )?;
            writeln!(file)?;
        }

        // Only the sin(pi x / L) start with zero ends has this exact solution
        writeln!(
            file,
            "Note: RMSE is measured against sin(pi x / L) exp(-alpha (pi / L)^2 t)."
        )?;
        writeln!(file, "{}", "=".repeat(60))?;

        Ok(())
    }

    pub fn print_to_console(&self) {
        println!("\n{}", "=".repeat(60));
        println!("RUN SUMMARY");
        println!("{}", "=".repeat(60));
        println!(
            "Grid:          {} points, dx = {:.3e}",
            self.num_points, self.dx
        );
        println!(
            "Time:          {} steps, dt = {:.3e}, t_end = {:.3e}",
            self.num_steps, self.dt, self.final_time
        );
        println!("Mesh ratio:    {:.3e}", self.mesh_ratio);
        for run in &self.runs {
            let error = run
                .final_error
                .map_or_else(|| "n/a".to_string(), |e| format!("{:.3e}", e));
            let flag = if run.stable { "" } else { "  (unstable r)" };
            println!("{:<14} final RMSE = {}{}", format!("{}:", run.scheme), error, flag);
        }
        if let Some(c) = &self.comparison {
            println!("Max diff:      {:.3e}", c.max_abs);
        }
        println!("{}\n", "=".repeat(60));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::metrics::compare;
    use nalgebra::DVector;
    use std::fs;

    #[test]
    fn summary_records_runs_and_writes() {
        let params = Parameters::new(1.0, 5, 0.1, 2, 1.0).unwrap();
        let mut summary = RunSummary::from_parameters(&params, "zero");
        // r = 1.6: explicit unstable
        summary.add_run(Scheme::Explicit, &[0.0, 3.0, 2.0], 9.0);
        summary.add_run(Scheme::Implicit, &[0.0, 0.1, 0.05], 0.5);
        summary.add_comparison(compare(&DVector::zeros(3), &DVector::from_element(3, 1.0)));

        assert!(!summary.runs[0].stable);
        assert!(summary.runs[1].stable);
        assert_eq!(summary.runs[0].max_error, Some(3.0));
        assert_eq!(summary.runs[1].final_error, Some(0.05));

        let path = std::env::temp_dir().join(format!("heat1d_summary_{}.txt", std::process::id()));
        summary.write_to_file(&path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("HEAT EQUATION RUN SUMMARY"));
        assert!(text.contains("explicit:"));
        assert!(text.contains("EXPLICIT VS IMPLICIT"));
        fs::remove_file(&path).ok();
    }
}
