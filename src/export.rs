use std::io::Write;

use crate::models::Record;

pub const DEFAULT_EXPORT_FILE: &str = "all_candidates_database.csv";

const HEADERS: [&str; 15] = [
    "ID",
    "Name",
    "Bio",
    "Email",
    "Mobile",
    "UG Degree",
    "UG CGPA",
    "PG Degree",
    "PG CGPA",
    "Doctorate",
    "Skills",
    "Experience",
    "Certifications",
    "LinkedIn",
    "GitHub",
];

fn row(record: &Record) -> [String; 15] {
    let postgraduate = record.education.postgraduate.as_ref();
    [
        record.id.to_string(),
        record.name.clone(),
        record.bio.clone(),
        record.contact.email.clone(),
        record.contact.mobile_no.clone(),
        record.ug_degree().to_string(),
        record.ug_cgpa().to_string(),
        postgraduate
            .and_then(|pg| pg.degree.clone())
            .unwrap_or_default(),
        postgraduate
            .and_then(|pg| pg.cgpa)
            .filter(|cgpa| *cgpa != 0.0)
            .map_or_else(|| "N/A".to_string(), |cgpa| cgpa.to_string()),
        record.education.doctorate.clone().unwrap_or_default(),
        record.skills.join(", "),
        record.experience.join("; "),
        record.certifications.join(", "),
        record.links.linkedin.clone().unwrap_or_default(),
        record.links.github.clone().unwrap_or_default(),
    ]
}

/// Writes every record as CSV and returns the number of rows written.
///
/// Callers pass the whole dataset; the export never reflects active filters.
pub fn write_csv<W: Write>(records: &[Record], writer: W) -> anyhow::Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADERS)?;

    for record in records {
        csv_writer.write_record(row(record))?;
    }

    csv_writer.flush()?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::{candidate, with_postgraduate};

    #[test]
    fn writes_header_and_one_row_per_record() {
        let mut first = candidate(1, &["Go", "SQL"], 8.0);
        first.name = "Lee, Avery".to_string();
        first.experience = vec!["Intern".to_string(), "Analyst".to_string()];
        first.links.github = Some("https://github.com/avery".to_string());
        let mut second = with_postgraduate(candidate(2, &[], 6.5), "MSc Stats", Some(7.75));
        second.education.undergraduate.cgpa = None;

        let mut buffer = Vec::new();
        let rows = write_csv(&[first, second], &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(rows, 2);
        assert_eq!(
            lines[0],
            "ID,Name,Bio,Email,Mobile,UG Degree,UG CGPA,PG Degree,PG CGPA,Doctorate,Skills,Experience,Certifications,LinkedIn,GitHub"
        );
        assert_eq!(
            lines[1],
            "1,\"Lee, Avery\",,,,BSc Computer Science,8,,N/A,,\"Go, SQL\",Intern; Analyst,,,https://github.com/avery"
        );
        assert_eq!(
            lines[2],
            "2,Candidate 2,,,,BSc Computer Science,0,MSc Stats,7.75,,,,,,"
        );
    }

    #[test]
    fn zero_pg_cgpa_exports_as_not_available() {
        let record = with_postgraduate(candidate(3, &[], 7.0), "MSc Stats", Some(0.0));
        let mut buffer = Vec::new();
        write_csv(&[record], &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.lines().nth(1).unwrap().contains(",MSc Stats,N/A,"));
    }

    #[test]
    fn empty_dataset_writes_only_header() {
        let mut buffer = Vec::new();
        let rows = write_csv(&[], &mut buffer).unwrap();
        assert_eq!(rows, 0);
        assert_eq!(String::from_utf8(buffer).unwrap().lines().count(), 1);
    }
}
