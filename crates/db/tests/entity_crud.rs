//! Integration tests for the repository layer against a real database:
//! - Create / get round-trips
//! - NotFound on missing ids for get, update and delete
//! - No resurrection after delete
//! - Idempotent full-replacement updates
//! - Constraint violations surfacing as persistence errors

use assert_matches::assert_matches;
use sqlx::PgPool;
use squad_builder_core::position::Position;
use squad_builder_db::models::competition::CreateCompetition;
use squad_builder_db::models::formation::CreateFormation;
use squad_builder_db::models::nationality::CreateNationality;
use squad_builder_db::models::player::CreatePlayer;
use squad_builder_db::models::rating::CreateRating;
use squad_builder_db::models::squad::CreateSquad;
use squad_builder_db::models::squad_player::CreateSquadPlayer;
use squad_builder_db::models::team::CreateTeam;
use squad_builder_db::models::user::CreateUser;
use squad_builder_db::repositories::{
    CompetitionRepo, FormationRepo, NationalityRepo, PlayerRepo, RatingRepo, SquadPlayerRepo,
    SquadRepo, TeamRepo, UserRepo,
};
use squad_builder_db::StoreError;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: "$argon2id$placeholder".to_string(),
    }
}

fn new_player(name: &str, team_id: Option<i64>) -> CreatePlayer {
    CreatePlayer {
        name: name.to_string(),
        nationality_id: None,
        team_id,
        market_value: 10.0,
        position: Position::CM,
        alternate_position: None,
    }
}

async fn seed_squad(pool: &PgPool, username: &str) -> (i64, i64) {
    let user = UserRepo::create(pool, &new_user(username)).await.unwrap();
    let formation = FormationRepo::create(
        pool,
        &CreateFormation {
            name: "4-3-3".into(),
            description: None,
        },
    )
    .await
    .unwrap();
    let squad = SquadRepo::create(
        pool,
        &CreateSquad {
            user_id: user.id,
            formation_id: formation.id,
            name: format!("{username}'s XI"),
            competition_id: None,
            budget: Some(100.0),
            nationality_id: None,
        },
    )
    .await
    .unwrap();
    (user.id, squad.id)
}

// ---------------------------------------------------------------------------
// Round-trips
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_then_get_round_trips(pool: PgPool) {
    let competition = CompetitionRepo::create(
        &pool,
        &CreateCompetition {
            name: "La Liga".into(),
            region: "Spain".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(
        CompetitionRepo::find_by_id(&pool, competition.id).await.unwrap(),
        competition
    );

    let team = TeamRepo::create(&pool, &CreateTeam { name: "Real Madrid".into() })
        .await
        .unwrap();
    let player = PlayerRepo::create(&pool, &new_player("Luka Modric", Some(team.id)))
        .await
        .unwrap();
    assert_eq!(player.position, "CM");
    assert_eq!(player.team_id, Some(team.id));
    assert_eq!(PlayerRepo::find_by_id(&pool, player.id).await.unwrap(), player);

    let (_, squad_id) = seed_squad(&pool, "alice").await;
    let squad = SquadRepo::find_by_id(&pool, squad_id).await.unwrap();
    assert_eq!(squad.budget, Some(100.0));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_create_returns_hash_and_timestamp(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("bob")).await.unwrap();
    assert_eq!(user.password_hash, "$argon2id$placeholder");
    assert_eq!(UserRepo::find_by_id(&pool, user.id).await.unwrap(), user);
    assert_eq!(
        UserRepo::find_by_username(&pool, "bob").await.unwrap().id,
        user.id
    );
}

// ---------------------------------------------------------------------------
// NotFound semantics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_ids_are_not_found(pool: PgPool) {
    let missing = 999_999;

    assert_matches!(
        TeamRepo::find_by_id(&pool, missing).await,
        Err(StoreError::NotFound { entity: "Team", .. })
    );
    assert_matches!(
        TeamRepo::update(&pool, missing, &CreateTeam { name: "x".into() }).await,
        Err(StoreError::NotFound { entity: "Team", .. })
    );
    assert_matches!(
        TeamRepo::delete(&pool, missing).await,
        Err(StoreError::NotFound { entity: "Team", .. })
    );
    assert_matches!(
        PlayerRepo::update(&pool, missing, &new_player("ghost", None)).await,
        Err(StoreError::NotFound { entity: "Player", .. })
    );
    assert_matches!(
        UserRepo::find_by_username(&pool, "nobody").await,
        Err(StoreError::NotFound { entity: "User", .. })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_does_not_resurrect(pool: PgPool) {
    let nationality = NationalityRepo::create(&pool, &CreateNationality { name: "France".into() })
        .await
        .unwrap();

    let deleted = NationalityRepo::delete(&pool, nationality.id).await.unwrap();
    assert_eq!(
        deleted.detail,
        format!("Nationality with id {} deleted successfully", nationality.id)
    );

    let err = NationalityRepo::find_by_id(&pool, nationality.id)
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    // A second delete is also NotFound.
    assert!(NationalityRepo::delete(&pool, nationality.id)
        .await
        .unwrap_err()
        .is_not_found());
}

// ---------------------------------------------------------------------------
// Updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_is_idempotent(pool: PgPool) {
    let formation = FormationRepo::create(
        &pool,
        &CreateFormation {
            name: "4-4-2".into(),
            description: Some("Flat".into()),
        },
    )
    .await
    .unwrap();

    let input = CreateFormation {
        name: "4-2-3-1".into(),
        description: None,
    };
    let first = FormationRepo::update(&pool, formation.id, &input).await.unwrap();
    let second = FormationRepo::update(&pool, formation.id, &input).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(second.name, "4-2-3-1");
    // Full replacement: omitted optional fields are cleared, not kept.
    assert_eq!(second.description, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_player_update_replaces_positions(pool: PgPool) {
    let player = PlayerRepo::create(&pool, &new_player("Pedri", None))
        .await
        .unwrap();

    let mut input = new_player("Pedri", None);
    input.position = Position::CAM;
    input.alternate_position = Some(Position::CM);
    input.market_value = 80.0;

    let updated = PlayerRepo::update(&pool, player.id, &input).await.unwrap();
    assert_eq!(updated.position, "CAM");
    assert_eq!(updated.alternate_position.as_deref(), Some("CM"));
    assert_eq!(updated.market_value, 80.0);
}

// ---------------------------------------------------------------------------
// Constraint violations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_unique_fields_rejected(pool: PgPool) {
    UserRepo::create(&pool, &new_user("carol")).await.unwrap();
    let result = UserRepo::create(&pool, &new_user("carol")).await;
    assert_matches!(result, Err(StoreError::Persistence(_)));

    NationalityRepo::create(&pool, &CreateNationality { name: "Brazil".into() })
        .await
        .unwrap();
    let result = NationalityRepo::create(&pool, &CreateNationality { name: "Brazil".into() }).await;
    assert_matches!(result, Err(StoreError::Persistence(_)));

    // The failed inserts were rolled back; exactly one row of each remains.
    assert_eq!(UserRepo::list(&pool).await.unwrap().len(), 1);
    assert_eq!(NationalityRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_foreign_key_violation_is_persistence_error(pool: PgPool) {
    let result = PlayerRepo::create(&pool, &new_player("Orphan", Some(424_242))).await;
    assert_matches!(result, Err(StoreError::Persistence(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rating_range_enforced(pool: PgPool) {
    let (user_id, squad_id) = seed_squad(&pool, "dave").await;
    let rating = |value: i32| CreateRating {
        user_id,
        squad_id,
        rating: value,
        comment: None,
    };

    for value in [0, 5] {
        let created = RatingRepo::create(&pool, &rating(value)).await.unwrap();
        assert_eq!(created.rating, value);
    }
    for value in [-1, 6] {
        assert_matches!(
            RatingRepo::create(&pool, &rating(value)).await,
            Err(StoreError::Persistence(_)),
            "rating {value} should be rejected"
        );
    }

    let ratings = RatingRepo::find_by_squad(&pool, squad_id).await.unwrap();
    assert_eq!(ratings.len(), 2);
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_name_is_case_insensitive_substring(pool: PgPool) {
    for name in ["Premier League", "Serie A", "Ligue 1"] {
        CompetitionRepo::create(
            &pool,
            &CreateCompetition {
                name: name.into(),
                region: "Europe".into(),
            },
        )
        .await
        .unwrap();
    }

    let found = CompetitionRepo::find_by_name(&pool, "LIGUE").await.unwrap();
    let names: Vec<_> = found.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Ligue 1"]);

    let found = CompetitionRepo::find_by_name(&pool, "ER").await.unwrap();
    let names: Vec<_> = found.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Premier League", "Serie A"]);

    assert!(CompetitionRepo::find_by_name(&pool, "bundesliga")
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_squad_lookups_by_user_and_squad(pool: PgPool) {
    let (user_id, squad_id) = seed_squad(&pool, "erin").await;
    seed_squad(&pool, "frank").await;

    let squads = SquadRepo::find_by_user(&pool, user_id).await.unwrap();
    assert_eq!(squads.len(), 1);
    assert_eq!(squads[0].id, squad_id);

    let named = SquadRepo::find_by_name(&pool, "ERIN").await.unwrap();
    assert_eq!(named.len(), 1);

    let player = PlayerRepo::create(&pool, &new_player("Rodri", None))
        .await
        .unwrap();
    let member = SquadPlayerRepo::create(
        &pool,
        &CreateSquadPlayer {
            squad_id,
            player_id: player.id,
            position: "CDM".into(),
        },
    )
    .await
    .unwrap();

    assert_eq!(
        SquadPlayerRepo::find_by_squad(&pool, squad_id).await.unwrap(),
        vec![member]
    );
}
