use std::fmt;

use serde::{Deserialize, Serialize};

/// Estadísticas del último dataset subido.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Summary {
    pub total_equipment: i64,
    pub average_flowrate: f64,
    pub average_pressure: f64,
    pub average_temperature: f64,
}

/// Una barra del chart de distribución. El orden lo decide el backend.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DistributionEntry {
    #[serde(rename = "type")]
    pub equipment_type: String,
    pub count: i64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DistributionResponse {
    pub distribution: Vec<DistributionEntry>,
}

/// Id de una subida. El backend lo serializa a veces como entero
/// y a veces como string; aceptamos ambos.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum UploadId {
    Number(i64),
    Text(String),
}

impl fmt::Display for UploadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadId::Number(n) => write!(f, "{}", n),
            UploadId::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct HistoryEntry {
    pub id: UploadId,
    pub uploaded_at: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntry>,
}

/// Respuesta de POST /upload/
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub dataset: Option<UploadedDataset>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UploadedDataset {
    pub id: UploadId,
    pub uploaded_at: String,
    #[serde(default)]
    pub summary: Option<Summary>,
}

/// Vista combinada (summary, distribution, history) del último dataset.
/// Se reemplaza SIEMPRE completa: el controlador nunca muestra un summary
/// recién subido junto a un history viejo.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct DashboardSnapshot {
    pub summary: Option<Summary>,
    pub distribution: Vec<DistributionEntry>,
    pub history: Vec<HistoryEntry>,
}

impl DashboardSnapshot {
    /// Estado vacío: cuenta nueva sin datasets. No es un error.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_id_accepts_integer_and_string() {
        let numeric: UploadId = serde_json::from_str("7").unwrap();
        let text: UploadId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(numeric.to_string(), "7");
        assert_eq!(text.to_string(), "7");
    }

    #[test]
    fn distribution_entry_maps_type_field() {
        let json = r#"{"type": "Pump", "count": 4}"#;
        let entry: DistributionEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.equipment_type, "Pump");
        assert_eq!(entry.count, 4);
    }

    #[test]
    fn upload_response_summary_ignores_extra_fields() {
        // El summary embebido en la respuesta de upload trae también
        // equipment_distribution; solo nos interesan los campos planos.
        let json = r#"{
            "message": "Dataset uploaded successfully",
            "dataset": {
                "id": 12,
                "uploaded_at": "2026-08-01T09:30:00Z",
                "summary": {
                    "total_equipment": 10,
                    "average_flowrate": 101.5,
                    "average_pressure": 6.2,
                    "average_temperature": 88.0,
                    "equipment_distribution": [{"type": "Pump", "count": 4}]
                }
            }
        }"#;

        let response: UploadResponse = serde_json::from_str(json).unwrap();
        let summary = response.dataset.unwrap().summary.unwrap();
        assert_eq!(summary.total_equipment, 10);
    }

    #[test]
    fn empty_snapshot_has_no_data() {
        let snapshot = DashboardSnapshot::empty();
        assert!(snapshot.summary.is_none());
        assert!(snapshot.distribution.is_empty());
        assert!(snapshot.history.is_empty());
    }
}
