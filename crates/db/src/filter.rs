//! Dynamic predicate composition for filtered player and squad listings.
//!
//! Composition is pure: it produces SQL fragments and an ordered list of bind
//! values, which the repositories splice into a `SELECT` and bind in order.
//! Every supplied option becomes one predicate and predicates are joined with
//! `AND`.

use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;
use squad_builder_core::types::DbId;

use crate::models::player::PlayerFilter;
use crate::models::squad::SquadFilter;

/// A typed value bound to one `$n` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Id(DbId),
    Float(f64),
    Text(String),
}

/// Joins, conditions and binds accumulated while composing a filter.
#[derive(Debug, Default)]
pub struct ComposedFilter {
    pub joins: Vec<&'static str>,
    pub conditions: Vec<String>,
    pub binds: Vec<FilterValue>,
}

impl ComposedFilter {
    /// Add a condition whose placeholder index is supplied to `condition`.
    fn push(&mut self, condition: impl FnOnce(usize) -> String, value: FilterValue) {
        let idx = self.binds.len() + 1;
        self.conditions.push(condition(idx));
        self.binds.push(value);
    }

    pub fn join_clause(&self) -> String {
        self.joins.join(" ")
    }

    /// `WHERE a AND b ...`, or an empty string when there are no conditions.
    pub fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.conditions.join(" AND "))
        }
    }
}

/// Compose the predicates for a player listing. Columns are qualified with `p.`.
pub fn player_predicates(filter: &PlayerFilter) -> ComposedFilter {
    let mut composed = ComposedFilter::default();

    if let Some(name) = filter.name_term() {
        composed.push(
            |i| format!("p.name ILIKE ${i}"),
            FilterValue::Text(format!("%{name}%")),
        );
    }
    if let Some(nationality_id) = filter.nationality_id {
        composed.push(
            |i| format!("p.nationality_id = ${i}"),
            FilterValue::Id(nationality_id),
        );
    }
    if let Some(team_id) = filter.team_id {
        composed.push(|i| format!("p.team_id = ${i}"), FilterValue::Id(team_id));
    }
    if let Some(competition_id) = filter.competition_id {
        composed
            .joins
            .push("JOIN team_competitions tc ON tc.team_id = p.team_id");
        composed.push(
            |i| format!("tc.competition_id = ${i}"),
            FilterValue::Id(competition_id),
        );
    }
    if let Some(market_value) = filter.market_value {
        composed.push(
            |i| format!("p.market_value < ${i}"),
            FilterValue::Float(market_value),
        );
    }
    if let Some(position) = filter.position {
        // Either/or is internal to this one option.
        composed.push(
            |i| format!("(p.position = ${i} OR p.alternate_position LIKE '%' || ${i} || '%')"),
            FilterValue::Text(position.as_str().to_string()),
        );
    }

    composed
}

/// Compose the predicates for a squad listing. Columns are unqualified.
pub fn squad_predicates(filter: &SquadFilter) -> ComposedFilter {
    let mut composed = ComposedFilter::default();

    if let Some(user_id) = filter.user_id {
        composed.push(|i| format!("user_id = ${i}"), FilterValue::Id(user_id));
    }
    if let Some(name) = filter.name.as_deref() {
        composed.push(
            |i| format!("name ILIKE ${i}"),
            FilterValue::Text(format!("%{name}%")),
        );
    }
    for (field, value) in &filter.fields {
        let column = field.column();
        composed.push(|i| format!("{column} = ${i}"), value.clone());
    }

    composed
}

/// Bind every value of a composed filter, in placeholder order.
pub(crate) fn bind_all<'q, O>(
    mut query: QueryAs<'q, Postgres, O, PgArguments>,
    binds: &[FilterValue],
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for value in binds {
        query = match value {
            FilterValue::Id(v) => query.bind(*v),
            FilterValue::Float(v) => query.bind(*v),
            FilterValue::Text(v) => query.bind(v.clone()),
        };
    }
    query
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use squad_builder_core::position::Position;

    use super::*;
    use crate::models::squad::SquadField;

    #[test]
    fn empty_player_filter_has_no_clauses() {
        let composed = player_predicates(&PlayerFilter::default());
        assert_eq!(composed.where_clause(), "");
        assert_eq!(composed.join_clause(), "");
        assert!(composed.binds.is_empty());
    }

    #[test]
    fn name_is_case_insensitive_substring() {
        let filter = PlayerFilter {
            name: Some("mess".into()),
            ..Default::default()
        };
        let composed = player_predicates(&filter);
        assert_eq!(composed.where_clause(), "WHERE p.name ILIKE $1");
        assert_eq!(composed.binds, vec![FilterValue::Text("%mess%".into())]);
    }

    #[test]
    fn empty_name_is_ignored() {
        let filter = PlayerFilter {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(player_predicates(&filter).conditions.is_empty());
    }

    #[test]
    fn competition_adds_join() {
        let filter = PlayerFilter {
            competition_id: Some(2),
            ..Default::default()
        };
        let composed = player_predicates(&filter);
        assert_eq!(
            composed.join_clause(),
            "JOIN team_competitions tc ON tc.team_id = p.team_id"
        );
        assert_eq!(composed.where_clause(), "WHERE tc.competition_id = $1");
    }

    #[test]
    fn position_matches_primary_or_alternate_with_one_bind() {
        let filter = PlayerFilter {
            position: Some(Position::CAM),
            ..Default::default()
        };
        let composed = player_predicates(&filter);
        assert_eq!(
            composed.conditions,
            vec!["(p.position = $1 OR p.alternate_position LIKE '%' || $1 || '%')".to_string()]
        );
        assert_eq!(composed.binds, vec![FilterValue::Text("CAM".into())]);
    }

    #[test]
    fn all_player_options_are_anded_in_bind_order() {
        let filter = PlayerFilter {
            name: Some("a".into()),
            nationality_id: Some(1),
            team_id: Some(2),
            competition_id: Some(3),
            market_value: Some(40.0),
            position: Some(Position::ST),
        };
        let composed = player_predicates(&filter);
        assert_eq!(
            composed.where_clause(),
            "WHERE p.name ILIKE $1 AND p.nationality_id = $2 AND p.team_id = $3 \
             AND tc.competition_id = $4 AND p.market_value < $5 \
             AND (p.position = $6 OR p.alternate_position LIKE '%' || $6 || '%')"
        );
        assert_eq!(composed.binds.len(), 6);
        assert_matches!(composed.binds[4], FilterValue::Float(v) if v == 40.0);
    }

    #[test]
    fn squad_extra_fields_follow_fixed_options() {
        let filter = SquadFilter {
            user_id: Some(9),
            name: Some("best".into()),
            fields: vec![(SquadField::NationalityId, FilterValue::Id(4))],
        };
        let composed = squad_predicates(&filter);
        assert_eq!(
            composed.where_clause(),
            "WHERE user_id = $1 AND name ILIKE $2 AND nationality_id = $3"
        );
        assert_eq!(
            composed.binds,
            vec![
                FilterValue::Id(9),
                FilterValue::Text("%best%".into()),
                FilterValue::Id(4),
            ]
        );
    }
}
