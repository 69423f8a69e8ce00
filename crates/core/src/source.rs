//! Where consultation records come from.
//!
//! The production source is a stand-in for the clinic's external consultations API: it returns
//! a fixed batch of records and never contacts the network. Anything implementing
//! [`RecordSource`] can replace it, including plain closures.

use crate::records::{ConsultationRecord, Diagnosis, PatientSummary, Treatment};
use crate::ConsultasResult;

/// A provider of consultation records.
///
/// A failed fetch is reported as `ConsultasError::Fetch`; the refresher reacts to it by keeping
/// whatever document is already on disk.
pub trait RecordSource {
    fn fetch(&self) -> ConsultasResult<Vec<ConsultationRecord>>;
}

impl<F> RecordSource for F
where
    F: Fn() -> ConsultasResult<Vec<ConsultationRecord>>,
{
    fn fetch(&self) -> ConsultasResult<Vec<ConsultationRecord>> {
        self()
    }
}

/// Hardcoded stand-in for the external consultations API.
#[derive(Clone, Debug)]
pub struct MockApiSource {
    records: Vec<ConsultationRecord>,
}

impl MockApiSource {
    /// The batch the server loads on startup.
    pub fn new() -> Self {
        Self {
            records: mock_consultations(),
        }
    }

    /// The newer batch pulled by the standalone refresh command, which adds consultation C005.
    pub fn latest() -> Self {
        Self {
            records: latest_mock_consultations(),
        }
    }
}

impl Default for MockApiSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSource for MockApiSource {
    fn fetch(&self) -> ConsultasResult<Vec<ConsultationRecord>> {
        tracing::info!("fetching consultations from the mock external API");
        let records = self.records.clone();
        tracing::info!("mock external API returned {} consultations", records.len());
        Ok(records)
    }
}

/// Consultations C001, C002 and C004.
pub fn mock_consultations() -> Vec<ConsultationRecord> {
    vec![
        consultation(
            "C001",
            ("Ana García", "P078", 34, "Femenino"),
            ("2025-09-26", "10:00 AM"),
            "Dr. Carlos Sánchez",
            "Revisión y limpieza dental.",
            ("Placa y sarro.", "K03.6"),
            ("Profilaxis.", 80.0, "Completado"),
            "Mejorar técnica de cepillado.",
        ),
        consultation(
            "C002",
            ("Luis Martínez", "P102", 45, "Masculino"),
            ("2025-09-26", "11:30 AM"),
            "Dra. Elena Torres",
            "Dolor en molar.",
            ("Caries profunda.", "K02.1"),
            ("Endodoncia.", 750.0, "En progreso"),
            "Cita en 2 semanas.",
        ),
        consultation(
            "C004",
            ("Ricardo Vargas", "P115", 52, "Masculino"),
            ("2025-09-28", "04:00 PM"),
            "Dra. Elena Torres",
            "Implante dental.",
            ("Ausencia de pieza 24.", "K08.1"),
            ("Colocación de implante de titanio.", 1200.0, "Pendiente"),
            "Requiere evaluación de tomografía.",
        ),
    ]
}

/// [`mock_consultations`] followed by consultation C005.
pub fn latest_mock_consultations() -> Vec<ConsultationRecord> {
    let mut records = mock_consultations();
    records.push(consultation(
        "C005",
        ("Elena Jiménez", "P120", 28, "Femenino"),
        ("2025-09-30", "09:00 AM"),
        "Dr. Carlos Sánchez",
        "Ortodoncia.",
        ("Maloclusión.", "K07.4"),
        ("Colocación de brackets.", 2500.0, "Pendiente"),
        "Plan de tratamiento a 24 meses.",
    ));
    records
}

#[allow(clippy::too_many_arguments)]
fn consultation(
    consultation_id: &str,
    (name, patient_id, age, gender): (&str, &str, u32, &str),
    (date, time): (&str, &str),
    practitioner: &str,
    reason: &str,
    (description, classification_code): (&str, &str),
    (procedure, cost, status): (&str, f64, &str),
    notes: &str,
) -> ConsultationRecord {
    ConsultationRecord {
        consultation_id: consultation_id.into(),
        patient: PatientSummary {
            name: name.into(),
            patient_id: patient_id.into(),
            age,
            gender: gender.into(),
        },
        date: date.into(),
        time: time.into(),
        practitioner: practitioner.into(),
        reason: reason.into(),
        diagnosis: Diagnosis {
            description: description.into(),
            classification_code: classification_code.into(),
        },
        treatment: Treatment {
            procedure: procedure.into(),
            cost,
            status: status.into(),
        },
        notes: Some(notes.into()),
    }
}
