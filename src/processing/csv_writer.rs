use crate::discretization::mesh::UniformMesh;
use crate::numerics::transient::SolutionHistory;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write rows of numbers under a header line. Every row must have one value
/// per header.
pub fn write_rows<P, I>(path: P, headers: &[&str], rows: I) -> io::Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = Vec<f64>>,
{
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "{}", headers.join(","))?;

    for (line, row) in rows.into_iter().enumerate() {
        if row.len() != headers.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "row {} has {} values but there are {} headers",
                    line,
                    row.len(),
                    headers.len()
                ),
            ));
        }
        let row: Vec<String> = row.iter().map(|v| format!("{:.15e}", v)).collect();
        writeln!(file, "{}", row.join(","))?;
    }

    file.flush()
}

/// Write every state of `history` in long format: `step,t,x,u`, one line per
/// node per step.
pub fn write_history<P: AsRef<Path>>(
    path: P,
    mesh: &UniformMesh,
    dt: f64,
    history: &SolutionHistory,
) -> io::Result<()> {
    let x = mesh.positions();
    if let Some(bad) = history.iter().find(|u| u.len() != x.len()) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("state has {} nodes, mesh has {}", bad.len(), x.len()),
        ));
    }

    let rows = history.iter().enumerate().flat_map(|(step, u)| {
        let t = step as f64 * dt;
        x.iter()
            .zip(u.iter())
            .map(move |(x, u)| vec![step as f64, t, *x, *u])
    });
    write_rows(path, &["step", "t", "x", "u"], rows)
}

/// Write the error sequence as `step,t,rmse`.
pub fn write_errors<P: AsRef<Path>>(path: P, dt: f64, errors: &[f64]) -> io::Result<()> {
    let rows = errors
        .iter()
        .enumerate()
        .map(|(step, e)| vec![step as f64, step as f64 * dt, *e]);
    write_rows(path, &["step", "t", "rmse"], rows)
}
