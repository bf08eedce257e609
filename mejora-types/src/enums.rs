use serde::{Deserialize, Serialize};

/// Área solicitante. Closed set; an unknown value on the wire is a
/// contract violation and fails deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Area {
    #[serde(rename = "SCC")]
    Scc,
    Psychology,
    #[serde(rename = "CC&C")]
    CcAndC,
    #[serde(rename = "WAE's")]
    Waes,
    #[serde(rename = "DCO")]
    Dco,
    Packets,
    #[serde(rename = "CA's")]
    Cas,
    #[serde(rename = "Follow up")]
    FollowUp,
    #[serde(rename = "Customer Service")]
    CustomerService,
}

impl Area {
    pub const ALL: [Area; 9] = [
        Area::Scc,
        Area::Psychology,
        Area::CcAndC,
        Area::Waes,
        Area::Dco,
        Area::Packets,
        Area::Cas,
        Area::FollowUp,
        Area::CustomerService,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Area::Scc => "SCC",
            Area::Psychology => "Psychology",
            Area::CcAndC => "CC&C",
            Area::Waes => "WAE's",
            Area::Dco => "DCO",
            Area::Packets => "Packets",
            Area::Cas => "CA's",
            Area::FollowUp => "Follow up",
            Area::CustomerService => "Customer Service",
        }
    }
}

/// Urgencia declarada por el solicitante.
///
/// `Desconocida` absorbs wire values outside the known set so a list
/// fetch never fails on one odd row; the UI styles it like `Media`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Urgencia {
    Baja,
    #[default]
    Media,
    Alta,
    #[serde(rename = "Crítica")]
    Critica,
    #[serde(other)]
    Desconocida,
}

impl Urgencia {
    /// Values a requester can pick in the form.
    pub const ALL: [Urgencia; 4] = [
        Urgencia::Baja,
        Urgencia::Media,
        Urgencia::Alta,
        Urgencia::Critica,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgencia::Baja => "Baja",
            Urgencia::Media => "Media",
            Urgencia::Alta => "Alta",
            Urgencia::Critica => "Crítica",
            Urgencia::Desconocida => "Desconocida",
        }
    }
}

/// Impacto esperado en la operación.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Impacto {
    Bajo,
    #[default]
    Medio,
    Alto,
}

impl Impacto {
    pub const ALL: [Impacto; 3] = [Impacto::Bajo, Impacto::Medio, Impacto::Alto];

    pub fn as_str(&self) -> &'static str {
        match self {
            Impacto::Bajo => "Bajo",
            Impacto::Medio => "Medio",
            Impacto::Alto => "Alto",
        }
    }
}

/// Estado del seguimiento, asignado por el servidor.
///
/// `Desconocido` absorbs unrecognized wire values; the UI styles it
/// like `Recibido`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Estado {
    #[default]
    Recibido,
    #[serde(rename = "En Análisis")]
    EnAnalisis,
    #[serde(rename = "En Desarrollo")]
    EnDesarrollo,
    Completado,
    #[serde(other)]
    Desconocido,
}

impl Estado {
    /// Values usable as a list filter.
    pub const ALL: [Estado; 4] = [
        Estado::Recibido,
        Estado::EnAnalisis,
        Estado::EnDesarrollo,
        Estado::Completado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Estado::Recibido => "Recibido",
            Estado::EnAnalisis => "En Análisis",
            Estado::EnDesarrollo => "En Desarrollo",
            Estado::Completado => "Completado",
            Estado::Desconocido => "Desconocido",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_round_trips_wire_names_with_punctuation() {
        for area in Area::ALL {
            let json = serde_json::to_string(&area).unwrap();
            let back: Area = serde_json::from_str(&json).unwrap();
            assert_eq!(back, area, "area {} should round-trip", area.as_str());
        }
        assert_eq!(serde_json::to_string(&Area::Waes).unwrap(), "\"WAE's\"");
        assert_eq!(serde_json::to_string(&Area::CcAndC).unwrap(), "\"CC&C\"");
    }

    #[test]
    fn unknown_area_is_rejected() {
        let result: Result<Area, _> = serde_json::from_str("\"Logistics\"");
        assert!(result.is_err(), "unknown area must fail deserialization");
    }

    #[test]
    fn urgencia_accent_is_preserved_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&Urgencia::Critica).unwrap(),
            "\"Crítica\""
        );
        let back: Urgencia = serde_json::from_str("\"Crítica\"").unwrap();
        assert_eq!(back, Urgencia::Critica);
    }

    #[test]
    fn unknown_urgencia_degrades_to_desconocida() {
        let u: Urgencia = serde_json::from_str("\"Apocalíptica\"").unwrap();
        assert_eq!(u, Urgencia::Desconocida);
    }

    #[test]
    fn unknown_estado_degrades_to_desconocido() {
        let e: Estado = serde_json::from_str("\"Archivado\"").unwrap();
        assert_eq!(e, Estado::Desconocido);
    }

    #[test]
    fn estado_accent_round_trip() {
        let e: Estado = serde_json::from_str("\"En Análisis\"").unwrap();
        assert_eq!(e, Estado::EnAnalisis);
        assert_eq!(serde_json::to_string(&e).unwrap(), "\"En Análisis\"");
    }
}
