//! Squad entity model, DTOs and filter parameters.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use squad_builder_core::error::CoreError;
use squad_builder_core::types::{DbId, Timestamp};

use crate::filter::FilterValue;

/// A row from the `squads` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Squad {
    pub id: DbId,
    pub user_id: DbId,
    pub formation_id: DbId,
    pub name: String,
    pub competition_id: Option<DbId>,
    pub budget: Option<f64>,
    pub nationality_id: Option<DbId>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSquad {
    pub user_id: DbId,
    pub formation_id: DbId,
    pub name: String,
    pub competition_id: Option<DbId>,
    pub budget: Option<f64>,
    pub nationality_id: Option<DbId>,
}

pub type UpdateSquad = CreateSquad;

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Squad columns that may be used as extra exact-match filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquadField {
    FormationId,
    CompetitionId,
    NationalityId,
    Budget,
}

impl SquadField {
    pub const ALL: [SquadField; 4] = [
        Self::FormationId,
        Self::CompetitionId,
        Self::NationalityId,
        Self::Budget,
    ];

    /// Column name in the `squads` table (also the query parameter name).
    pub fn column(&self) -> &'static str {
        match self {
            Self::FormationId => "formation_id",
            Self::CompetitionId => "competition_id",
            Self::NationalityId => "nationality_id",
            Self::Budget => "budget",
        }
    }

    /// Parse a raw query value into the column's type.
    pub fn parse_value(&self, raw: &str) -> Result<FilterValue, CoreError> {
        match self {
            Self::FormationId | Self::CompetitionId | Self::NationalityId => raw
                .parse::<DbId>()
                .map(FilterValue::Id)
                .map_err(|_| invalid_value(self.column(), raw)),
            Self::Budget => raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(FilterValue::Float)
                .ok_or_else(|| invalid_value(self.column(), raw)),
        }
    }
}

impl FromStr for SquadField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.column() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(SquadField::column).collect();
                CoreError::Validation(format!(
                    "Unknown squad filter '{s}'. Allowed: user_id, name, {}",
                    valid.join(", ")
                ))
            })
    }
}

fn invalid_value(field: &str, raw: &str) -> CoreError {
    CoreError::Validation(format!("Invalid value '{raw}' for squad filter '{field}'"))
}

/// Predicates for `GET /squads_filtered/`. All supplied options are ANDed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SquadFilter {
    pub user_id: Option<DbId>,
    /// Case-insensitive substring of the squad name.
    pub name: Option<String>,
    /// Extra exact-match predicates, restricted to [`SquadField`].
    pub fields: Vec<(SquadField, FilterValue)>,
}

impl SquadFilter {
    /// Build a filter from raw query parameters.
    ///
    /// Empty values are ignored. Any parameter that is not `user_id`, `name`
    /// or an allow-listed [`SquadField`] is rejected.
    pub fn from_params(params: &BTreeMap<String, String>) -> Result<Self, CoreError> {
        let mut filter = Self::default();

        for (key, raw) in params {
            if raw.is_empty() {
                continue;
            }
            match key.as_str() {
                "user_id" => {
                    let id = raw
                        .parse::<DbId>()
                        .map_err(|_| invalid_value("user_id", raw))?;
                    filter.user_id = Some(id);
                }
                "name" => filter.name = Some(raw.clone()),
                other => {
                    let field = other.parse::<SquadField>()?;
                    filter.fields.push((field, field.parse_value(raw)?));
                }
            }
        }

        Ok(filter)
    }

    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.name.is_none() && self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parses_known_parameters() {
        let filter = SquadFilter::from_params(&params(&[
            ("user_id", "7"),
            ("name", "dream"),
            ("formation_id", "3"),
            ("budget", "150.5"),
        ]))
        .unwrap();

        assert_eq!(filter.user_id, Some(7));
        assert_eq!(filter.name.as_deref(), Some("dream"));
        assert_eq!(
            filter.fields,
            vec![
                (SquadField::Budget, FilterValue::Float(150.5)),
                (SquadField::FormationId, FilterValue::Id(3)),
            ]
        );
    }

    #[test]
    fn rejects_columns_outside_allow_list() {
        let err = SquadFilter::from_params(&params(&[("password_hash", "x")])).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ref m) if m.contains("password_hash")));

        let err = SquadFilter::from_params(&params(&[("id", "1")])).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn rejects_unparseable_values() {
        assert!(SquadFilter::from_params(&params(&[("user_id", "abc")])).is_err());
        assert!(SquadFilter::from_params(&params(&[("competition_id", "1.5")])).is_err());
        assert!(SquadFilter::from_params(&params(&[("budget", "NaN")])).is_err());
    }

    #[test]
    fn empty_values_are_ignored() {
        let filter = SquadFilter::from_params(&params(&[("name", ""), ("user_id", "")])).unwrap();
        assert!(filter.is_empty());
    }
}
