//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Mutations run in their own
//! transaction and roll back before returning an error.

pub mod competition_repo;
pub mod formation_repo;
pub mod nationality_repo;
pub mod player_repo;
pub mod rating_repo;
pub mod squad_player_repo;
pub mod squad_repo;
pub mod team_competition_repo;
pub mod team_repo;
pub mod user_repo;

pub use competition_repo::CompetitionRepo;
pub use formation_repo::FormationRepo;
pub use nationality_repo::NationalityRepo;
pub use player_repo::PlayerRepo;
pub use rating_repo::RatingRepo;
pub use squad_player_repo::SquadPlayerRepo;
pub use squad_repo::SquadRepo;
pub use team_competition_repo::TeamCompetitionRepo;
pub use team_repo::TeamRepo;
pub use user_repo::UserRepo;
