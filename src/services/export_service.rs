use crate::error::Result;
use crate::models::candidate::CandidateExportRow;

pub const EXPORT_HEADER: [&str; 11] = [
    "ID",
    "Fecha registro",
    "Nombre",
    "Teléfono",
    "Cargo",
    "Experiencia",
    "Estado",
    "Recontratación",
    "Último puntaje",
    "Última decisión",
    "Notas",
];

pub struct ExportService;

impl ExportService {
    /// Renders the candidate export as CSV bytes. Every field is quoted;
    /// embedded quotes are doubled per RFC 4180.
    pub fn candidates_csv(rows: &[CandidateExportRow]) -> Result<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Always)
            .from_writer(Vec::new());

        writer.write_record(EXPORT_HEADER)?;
        for row in rows {
            writer.write_record([
                row.id.to_string(),
                row.created_at.to_rfc3339(),
                row.full_name.clone(),
                row.phone.clone(),
                row.position.clone(),
                row.experience.to_string(),
                row.status.clone(),
                row.rehire_status.clone(),
                row.last_score.map(|s| s.to_string()).unwrap_or_default(),
                row.last_decision.clone().unwrap_or_default(),
                row.notes.clone().unwrap_or_default(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|err| anyhow::anyhow!("csv writer: {err}"))?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn row(full_name: &str, notes: Option<&str>) -> CandidateExportRow {
        CandidateExportRow {
            id: Uuid::nil(),
            full_name: full_name.to_string(),
            phone: "3001234567".into(),
            position: "Mesera".into(),
            experience: 2,
            status: "HIRED".into(),
            rehire_status: "YES".into(),
            notes: notes.map(str::to_string),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            last_score: Some(13),
            last_decision: Some("HIRE".into()),
        }
    }

    #[test]
    fn header_row_is_fixed() {
        let bytes = ExportService::candidates_csv(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text.lines().next().unwrap(),
            "\"ID\",\"Fecha registro\",\"Nombre\",\"Teléfono\",\"Cargo\",\"Experiencia\",\
             \"Estado\",\"Recontratación\",\"Último puntaje\",\"Última decisión\",\"Notas\""
        );
    }

    #[test]
    fn every_field_is_quoted_and_quotes_are_doubled() {
        let bytes =
            ExportService::candidates_csv(&[row("Ana \"La Rápida\" Pérez", Some("ok"))]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let data_line = text.lines().nth(1).unwrap();
        assert!(data_line.contains("\"Ana \"\"La Rápida\"\" Pérez\""));
        assert!(data_line.contains("\"13\""));
        assert!(data_line.contains("\"HIRE\""));
        assert!(data_line.starts_with('"'));
    }

    #[test]
    fn missing_interview_fields_render_empty() {
        let mut r = row("Luis", None);
        r.last_score = None;
        r.last_decision = None;
        let bytes = ExportService::candidates_csv(&[r]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let data_line = text.lines().nth(1).unwrap();
        assert!(data_line.ends_with("\"\",\"\",\"\""));
    }
}
