use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Lifecycle state of an occurrence record.
///
/// Transition legality is enforced by the occurrence service; this core only
/// gates access to transitions through `update:ocorrencia` /
/// `delete:ocorrencia` capability checks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OccurrenceStatus {
    /// In progress (initial state)
    EmAndamento,
    /// Awaiting provider
    Aguardando,
    /// Completed (terminal)
    Concluida,
    /// Cancelled (terminal)
    Cancelada,
}

impl OccurrenceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::EmAndamento => "em_andamento",
            Self::Aguardando => "aguardando",
            Self::Concluida => "concluida",
            Self::Cancelada => "cancelada",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Concluida | Self::Cancelada)
    }
}

impl FromStr for OccurrenceStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "em_andamento" => Ok(Self::EmAndamento),
            "aguardando" => Ok(Self::Aguardando),
            "concluida" => Ok(Self::Concluida),
            "cancelada" => Ok(Self::Cancelada),
            _ => Err(CoreError::InvalidOccurrenceStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
