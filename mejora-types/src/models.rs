use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{Area, Estado, Impacto, Urgencia};

// Custom serde module for DateTime to ensure RFC3339 string format.
// The intake service emits naive ISO-8601 timestamps (no offset), so
// deserialization accepts both and treats naive values as UTC.
pub mod fecha_format {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = date.to_rfc3339();
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_fecha(&s).map_err(serde::de::Error::custom)
    }

    pub(crate) fn parse_fecha(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        match s.parse::<DateTime<Utc>>() {
            Ok(dt) => Ok(dt),
            Err(_) => {
                let naive: NaiveDateTime = s.parse()?;
                Ok(naive.and_utc())
            }
        }
    }
}

/// Same convention as `fecha_format`, for optional timestamps.
pub mod fecha_format_opt {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: Option<String> = Option::deserialize(deserializer)?;
        match s {
            Some(s) => super::fecha_format::parse_fecha(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

/// Full detail of a request as owned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solicitud {
    pub id: i64,
    /// Server-assigned tracking number (AUTO-YYYYMMDD-XXXXXX). Never
    /// constructed by the client.
    pub numero_solicitud: String,
    pub area_solicitante: Area,
    pub nombre_solicitante: String,
    pub email_solicitante: String,
    pub titulo_proceso: String,
    pub descripcion_proceso: String,
    pub situacion_actual: String,
    pub resultado_esperado: String,
    pub urgencia: Urgencia,
    pub impacto: Impacto,
    #[serde(default)]
    pub frecuencia_proceso: Option<String>,
    #[serde(default)]
    pub tiempo_manual_estimado: Option<String>,
    #[serde(default)]
    pub sistemas_involucrados: Option<String>,
    #[serde(default)]
    pub enlaces_documentacion: Option<String>,
    pub estado: Estado,
    #[serde(with = "fecha_format")]
    pub fecha_creacion: DateTime<Utc>,
    #[serde(default, with = "fecha_format_opt")]
    pub fecha_actualizacion: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notas_internas: Option<String>,
}

/// Compact row returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolicitudResumen {
    pub id: i64,
    pub numero_solicitud: String,
    pub area_solicitante: Area,
    pub titulo_proceso: String,
    pub urgencia: Urgencia,
    pub estado: Estado,
    #[serde(with = "fecha_format")]
    pub fecha_creacion: DateTime<Utc>,
}

/// Payload for creating a request. Optional fields serialize as null
/// when the form left them blank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolicitudNueva {
    pub area_solicitante: Area,
    pub nombre_solicitante: String,
    pub email_solicitante: String,
    pub titulo_proceso: String,
    pub descripcion_proceso: String,
    pub situacion_actual: String,
    pub resultado_esperado: String,
    pub urgencia: Urgencia,
    pub impacto: Impacto,
    pub frecuencia_proceso: Option<String>,
    pub tiempo_manual_estimado: Option<String>,
    pub sistemas_involucrados: Option<String>,
    pub enlaces_documentacion: Option<String>,
}

/// Counters from the summary endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumenEstadisticas {
    pub total: i64,
    pub recibidas: i64,
    pub en_analisis: i64,
    pub en_desarrollo: i64,
    pub completadas: i64,
}
