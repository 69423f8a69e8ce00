//! Consultation record types.
//!
//! These mirror the JSON document the frontend consumes, so the serialised keys keep the
//! document's Spanish names while the Rust fields use English ones. Nothing here is validated:
//! dates and times stay strings, treatment status is an open set, and identifiers are not
//! checked for uniqueness.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One dental visit combining patient, diagnosis and treatment data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConsultationRecord {
    #[serde(rename = "id_consulta")]
    pub consultation_id: String,
    #[serde(rename = "paciente")]
    pub patient: PatientSummary,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "hora")]
    pub time: String,
    #[serde(rename = "dentista")]
    pub practitioner: String,
    #[serde(rename = "motivo_consulta")]
    pub reason: String,
    #[serde(rename = "diagnostico")]
    pub diagnosis: Diagnosis,
    #[serde(rename = "tratamiento")]
    pub treatment: Treatment,
    #[serde(
        rename = "notas_adicionales",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
}

/// Patient details embedded in a consultation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatientSummary {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "id_paciente")]
    pub patient_id: String,
    #[serde(rename = "edad")]
    pub age: u32,
    #[serde(rename = "genero")]
    pub gender: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Diagnosis {
    #[serde(rename = "descripcion")]
    pub description: String,
    /// ICD classification code. Informational only.
    #[serde(rename = "codigo_cie")]
    pub classification_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Treatment {
    #[serde(rename = "procedimiento")]
    pub procedure: String,
    /// Cost in US dollars.
    #[serde(rename = "costo_usd")]
    pub cost: f64,
    /// Usually "Completado", "En progreso" or "Pendiente", but any string is accepted.
    #[serde(rename = "estado")]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ConsultationRecord {
        ConsultationRecord {
            consultation_id: "C010".into(),
            patient: PatientSummary {
                name: "Inés Núñez".into(),
                patient_id: "P200".into(),
                age: 61,
                gender: "Femenino".into(),
            },
            date: "2025-10-01".into(),
            time: "08:15 AM".into(),
            practitioner: "Dra. Elena Torres".into(),
            reason: "Sensibilidad dental.".into(),
            diagnosis: Diagnosis {
                description: "Recesión gingival.".into(),
                classification_code: "K06.0".into(),
            },
            treatment: Treatment {
                procedure: "Aplicación de barniz de flúor.".into(),
                cost: 45.5,
                status: "En progreso".into(),
            },
            notes: None,
        }
    }

    #[test]
    fn test_serialises_with_document_keys() {
        let value = serde_json::to_value(sample()).expect("record should serialise");

        assert_eq!(value["id_consulta"], "C010");
        assert_eq!(value["paciente"]["nombre"], "Inés Núñez");
        assert_eq!(value["paciente"]["edad"], 61);
        assert_eq!(value["diagnostico"]["codigo_cie"], "K06.0");
        assert_eq!(value["tratamiento"]["costo_usd"], 45.5);
        assert_eq!(value["tratamiento"]["estado"], "En progreso");
    }

    #[test]
    fn test_missing_notes_are_omitted_and_defaulted() {
        let value = serde_json::to_value(sample()).expect("record should serialise");
        assert!(value.get("notas_adicionales").is_none());

        let parsed: ConsultationRecord =
            serde_json::from_value(value).expect("record without notes should parse");
        assert_eq!(parsed.notes, None);
    }

    #[test]
    fn test_accepts_unknown_status_and_integer_cost() {
        let value = json!({
            "id_consulta": "C011",
            "paciente": {"nombre": "Tomás", "id_paciente": "P201", "edad": 9, "genero": "Masculino"},
            "fecha": "mañana",
            "hora": "sin hora",
            "dentista": "Dr. Carlos Sánchez",
            "motivo_consulta": "Control.",
            "diagnostico": {"descripcion": "Sano.", "codigo_cie": ""},
            "tratamiento": {"procedimiento": "Ninguno.", "costo_usd": 0, "estado": "Cancelado"},
            "notas_adicionales": "Volver en un año."
        });

        let parsed: ConsultationRecord =
            serde_json::from_value(value).expect("loose record should parse");

        assert_eq!(parsed.treatment.status, "Cancelado");
        assert_eq!(parsed.treatment.cost, 0.0);
        assert_eq!(parsed.notes.as_deref(), Some("Volver en un año."));
    }
}
