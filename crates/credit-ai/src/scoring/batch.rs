use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::{CreditHistory, ScoreRequest};
use super::evaluation::FormulaVersion;

/// Reads score requests from a CSV export with the header row
/// `monthly_income,total_debt,age,credit_history`.
pub struct BatchProfileImporter;

impl BatchProfileImporter {
    pub fn from_path(
        path: impl AsRef<Path>,
        version: Option<FormulaVersion>,
    ) -> Result<Vec<ScoreRequest>, BatchImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, version)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        version: Option<FormulaVersion>,
    ) -> Result<Vec<ScoreRequest>, BatchImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut requests = Vec::new();

        for (index, record) in csv_reader.deserialize::<BatchCsvRow>().enumerate() {
            let row = record?;
            // Header occupies line 1; records start on line 2.
            let line = index + 2;
            let credit_history = row
                .credit_history
                .parse::<CreditHistory>()
                .map_err(|message| BatchImportError::Row { line, message })?;

            requests.push(ScoreRequest {
                monthly_income: row.monthly_income,
                total_debt: row.total_debt,
                age: row.age,
                credit_history,
                formula_version: version,
            });
        }

        Ok(requests)
    }
}

#[derive(Debug, Deserialize)]
struct BatchCsvRow {
    monthly_income: i64,
    total_debt: i64,
    age: i64,
    credit_history: String,
}

#[derive(Debug)]
pub enum BatchImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Row { line: usize, message: String },
}

impl std::fmt::Display for BatchImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchImportError::Io(err) => write!(f, "failed to read profile export: {}", err),
            BatchImportError::Csv(err) => write!(f, "invalid profile CSV data: {}", err),
            BatchImportError::Row { line, message } => {
                write!(f, "invalid profile row at line {}: {}", line, message)
            }
        }
    }
}

impl std::error::Error for BatchImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchImportError::Io(err) => Some(err),
            BatchImportError::Csv(err) => Some(err),
            BatchImportError::Row { .. } => None,
        }
    }
}

impl From<std::io::Error> for BatchImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for BatchImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const EXPORT: &str = "monthly_income,total_debt,age,credit_history\n\
                          1200,500,25,no_history\n\
                          200,20000,18,bad\n";

    #[test]
    fn reads_requests_from_export() {
        let requests = BatchProfileImporter::from_reader(Cursor::new(EXPORT), None)
            .expect("export parses");

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].monthly_income, 1200);
        assert_eq!(requests[0].credit_history, CreditHistory::NoHistory);
        assert_eq!(requests[1].credit_history, CreditHistory::Bad);
        assert!(requests[0].formula_version.is_none());
    }

    #[test]
    fn applies_requested_version_to_every_row() {
        let requests =
            BatchProfileImporter::from_reader(Cursor::new(EXPORT), Some(FormulaVersion::V1))
                .expect("export parses");

        assert!(requests
            .iter()
            .all(|request| request.formula_version == Some(FormulaVersion::V1)));
    }

    #[test]
    fn reports_row_number_for_unknown_history() {
        let export = "monthly_income,total_debt,age,credit_history\n\
                      1200,500,25,stellar\n";

        let error = BatchProfileImporter::from_reader(Cursor::new(export), None)
            .expect_err("unknown history rejected");

        match error {
            BatchImportError::Row { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("stellar"));
            }
            other => panic!("expected row error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_fields_as_csv_errors() {
        let export = "monthly_income,total_debt,age,credit_history\n\
                      plenty,500,25,good\n";

        let error = BatchProfileImporter::from_reader(Cursor::new(export), None)
            .expect_err("non-numeric income rejected");

        assert!(matches!(error, BatchImportError::Csv(_)));
    }
}
