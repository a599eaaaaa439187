//! Spreadsheet export
//!
//! Writes the visible record collection to an xlsx workbook, one row per
//! record, using the same column set as the on-screen table.

use crate::model::record::{CaseStudy, COLUMN_HEADERS};
use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

/// File written into the working directory on export
pub const EXPORT_FILE_NAME: &str = "table_data.xlsx";
/// Name of the single sheet in the workbook
pub const EXPORT_SHEET_NAME: &str = "Table Data";

/// One export row per record, in COLUMN_HEADERS order
pub fn export_rows(records: &[&CaseStudy]) -> Vec<[String; 8]> {
    records.iter().map(|record| record.cells()).collect()
}

/// Write the records to an xlsx workbook at `path`
pub fn write_workbook(records: &[&CaseStudy], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(EXPORT_SHEET_NAME)?;

    for (col, header) in COLUMN_HEADERS.iter().enumerate() {
        worksheet.write(0, col as u16, *header)?;
    }

    for (row, cells) in export_rows(records).iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            worksheet.write(row as u32 + 1, col as u16, cell.as_str())?;
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

/// Export into the current working directory
pub fn export_to_file(records: &[&CaseStudy]) -> Result<PathBuf> {
    let path = PathBuf::from(EXPORT_FILE_NAME);
    write_workbook(records, &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn record(name: &str) -> CaseStudy {
        CaseStudy {
            id: format!("case-study/{}", name),
            logo_url: format!("https://cdn.example.com/{}.png", name),
            customer_name: name.to_string(),
            headline: format!("{} headline", name),
            url: format!("https://example.com/{}", name),
            description_summary: format!("{} summary", name),
            page_url: format!("https://example.com/{}", name),
            location: "London".to_string(),
            industry: "Retail".to_string(),
        }
    }

    #[test]
    fn test_header_row_is_exact() {
        assert_eq!(
            COLUMN_HEADERS,
            [
                "Customer Logo",
                "Customer Name",
                "Headline",
                "URL",
                "Description Summary",
                "Page URL",
                "Location",
                "Industry",
            ]
        );
    }

    #[test]
    fn test_one_row_per_record() {
        let first = record("acme");
        let second = record("globex");
        let records: Vec<&CaseStudy> = vec![&first, &second];

        let rows = export_rows(&records);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][1], "acme");
        assert_eq!(rows[1][1], "globex");
        assert_eq!(rows[0].len(), COLUMN_HEADERS.len());
    }

    #[test]
    fn test_empty_collection_exports_headers_only() {
        let rows = export_rows(&[]);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_workbook_lands_on_disk() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .subsec_nanos();
        let path = env::temp_dir().join(format!("casebook_export_{}.xlsx", nanos));

        let first = record("acme");
        let records: Vec<&CaseStudy> = vec![&first];
        write_workbook(&records, &path).unwrap();

        let metadata = fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);

        let _ = fs::remove_file(&path);
    }
}
