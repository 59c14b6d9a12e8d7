use heat1d::config::{ConfigError, RunConfig};
use heat1d::numerics::metrics::{compare, compute_errors};
use heat1d::numerics::timing;
use heat1d::numerics::transient::{SolutionHistory, TransientSolver};
use heat1d::numerics::Scheme;
use heat1d::physics::params::Parameters;
use heat1d::processing::csv_writer;
use heat1d::processing::summary::RunSummary;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ConfigError> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "loading run configuration");
            RunConfig::from_file(path)?
        }
        None => RunConfig::default(),
    };

    let params = config.parameters()?;
    let schemes = config.schemes()?;

    let out_dir = config.output_dir.as_path();
    fs::create_dir_all(out_dir)?;

    let mut summary = RunSummary::from_parameters(&params, config.initial_label());
    let mut finals: Vec<(Scheme, SolutionHistory)> = Vec::new();

    for scheme in schemes {
        info!(%scheme, "solving");
        let history = TransientSolver::new(scheme).solve(&params)?;
        timing::current_stats().print_summary();

        let errors = compute_errors(&params, &history)?;
        save_run(out_dir, &params, scheme, &history, &errors)?;

        let final_max_abs = history.last().map_or(0.0, |u| u.amax());
        summary.add_run(scheme, &errors, final_max_abs);
        finals.push((scheme, history));
    }

    let explicit = finals.iter().find(|(s, _)| *s == Scheme::Explicit);
    let implicit = finals.iter().find(|(s, _)| *s == Scheme::Implicit);
    if let (Some((_, e)), Some((_, i))) = (explicit, implicit)
        && let (Some(e), Some(i)) = (e.last(), i.last())
    {
        summary.add_comparison(compare(i, e));
    }

    let summary_path = out_dir.join("summary.txt");
    summary.write_to_file(&summary_path)?;
    summary.print_to_console();
    info!(path = %summary_path.display(), "summary saved");

    Ok(())
}

fn save_run(
    out_dir: &Path,
    params: &Parameters,
    scheme: Scheme,
    history: &SolutionHistory,
    errors: &[f64],
) -> Result<(), ConfigError> {
    let history_path = out_dir.join(format!("{}_history.csv", scheme));
    csv_writer::write_history(&history_path, &params.mesh(), params.dt, history)?;

    let errors_path = out_dir.join(format!("{}_errors.csv", scheme));
    csv_writer::write_errors(&errors_path, params.dt, errors)?;

    info!(
        history = %history_path.display(),
        errors = %errors_path.display(),
        "results saved"
    );
    Ok(())
}
