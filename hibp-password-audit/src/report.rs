use std::io;
use std::path::Path;

use crate::error::Error;
use crate::strength::Strength;

/// Default report file, relative to the working directory.
pub const DEFAULT_REPORT_PATH: &str = "relatorio.csv";

/// Header row of the report.
pub const REPORT_HEADER: [&str; 3] = ["Senha", "Vazamentos encontrados", "Força da Senha"];

/// Outcome of one successfully checked password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub password: String,
    pub leak_count: u64,
    pub strength: Strength,
}

impl ResultRecord {
    pub fn is_leaked(&self) -> bool {
        self.leak_count > 0
    }
}

/// Writes the header and one row per record to `writer`.
pub fn write_records<W: io::Write>(writer: W, records: &[ResultRecord]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(REPORT_HEADER)?;

    for record in records {
        let count = record.leak_count.to_string();
        wtr.write_record([record.password.as_str(), count.as_str(), record.strength.label()])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Creates or overwrites the report at `path`.
pub fn write_report(path: &Path, records: &[ResultRecord]) -> Result<(), Error> {
    let file = std::fs::File::create(path)
        .map_err(|e| Error::WriteReport { path: path.to_path_buf(), source: e.into() })?;
    write_records(file, records)
        .map_err(|source| Error::WriteReport { path: path.to_path_buf(), source })
}
