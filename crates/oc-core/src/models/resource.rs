use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Resource half of an `action:resource` permission.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Ocorrencia,
    Foto,
    User,
    Admin,
    Manager,
    Dashboard,
    Relatorio,
    Cliente,
    Prestador,
}

impl Resource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ocorrencia => "ocorrencia",
            Self::Foto => "foto",
            Self::User => "user",
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Dashboard => "dashboard",
            Self::Relatorio => "relatorio",
            Self::Cliente => "cliente",
            Self::Prestador => "prestador",
        }
    }
}

impl FromStr for Resource {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "ocorrencia" => Ok(Self::Ocorrencia),
            "foto" => Ok(Self::Foto),
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "dashboard" => Ok(Self::Dashboard),
            "relatorio" => Ok(Self::Relatorio),
            "cliente" => Ok(Self::Cliente),
            "prestador" => Ok(Self::Prestador),
            _ => Err(CoreError::InvalidResource {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
