use serde::{Deserialize, Serialize};
use std::fmt;

/// Transport modes a freight quote can cover.
///
/// Labels are the French back-office vocabulary; they are what the
/// suggestion catalog is keyed by and what negotiated line-item
/// descriptions lead with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportMode {
    Maritime,
    #[serde(rename = "Aérien")]
    Aerien,
    Routier,
    Ferroviaire,
    Multimodal,
}

impl TransportMode {
    /// All modes, in the order the back office lists them
    pub const ALL: [TransportMode; 5] = [
        TransportMode::Maritime,
        TransportMode::Aerien,
        TransportMode::Routier,
        TransportMode::Ferroviaire,
        TransportMode::Multimodal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Maritime => "Maritime",
            TransportMode::Aerien => "Aérien",
            TransportMode::Routier => "Routier",
            TransportMode::Ferroviaire => "Ferroviaire",
            TransportMode::Multimodal => "Multimodal",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Maritime" => Ok(TransportMode::Maritime),
            // ASCII fallback for environments that strip the accent
            "Aérien" | "Aerien" => Ok(TransportMode::Aerien),
            "Routier" => Ok(TransportMode::Routier),
            "Ferroviaire" => Ok(TransportMode::Ferroviaire),
            "Multimodal" => Ok(TransportMode::Multimodal),
            _ => Err(format!("Invalid transport mode: {}", s)),
        }
    }
}
