use crate::store::Database;
use chrono::{Datelike, NaiveDate, Utc};
use core::{NewClub, NewCompetition, NewLeague, NewPlayer, NewTeam, NewUser, UserRole};
use log::debug;
use rand::RngExt;
use rand::seq::IndexedRandom;
use serde::Deserialize;

const STATIC_SEED_JSON: &str = include_str!("data/seed.json");

const SQUAD_SIZE: u32 = 10;
const POSITIONS: [&str; 3] = ["Goalkeeper", "Defender", "Forward"];

#[derive(Deserialize)]
struct SeedData {
    organizer: SeedPerson,
    competition: SeedCompetition,
    league: SeedLeague,
    clubs: Vec<SeedClub>,
    first_names: Vec<String>,
    last_names: Vec<String>,
}

#[derive(Deserialize)]
struct SeedPerson {
    email: String,
    first_name: String,
    last_name: String,
}

#[derive(Deserialize)]
struct SeedCompetition {
    name: String,
    description: String,
}

#[derive(Deserialize)]
struct SeedLeague {
    name: String,
    max_teams: u32,
}

#[derive(Deserialize)]
struct SeedClub {
    name: String,
    contact_email: String,
    manager_email: String,
    team: String,
}

/// Populates a fresh store with a demo season: one competition, one league
/// and a handful of clubs with one registered team and a full squad each.
pub struct DatabaseSeeder;

impl DatabaseSeeder {
    pub fn seed() -> Database {
        let data: SeedData =
            serde_json::from_str(STATIC_SEED_JSON).expect("Failed to parse seed data");

        let mut db = Database::new();
        let mut rng = rand::rng();

        let season_start = Utc::now().naive_utc();

        let organizer = db
            .create_user(&NewUser {
                email: data.organizer.email.clone(),
                password_hash: String::from("demo"),
                first_name: data.organizer.first_name.clone(),
                last_name: data.organizer.last_name.clone(),
                role: UserRole::CompetitionOrganizer,
            })
            .expect("Failed to seed organizer");

        let competition = db
            .create_competition(&NewCompetition {
                name: data.competition.name.clone(),
                description: Some(data.competition.description.clone()),
                start_date: season_start,
                end_date: season_start + chrono::Duration::days(270),
                organizer_id: organizer.id,
            })
            .expect("Failed to seed competition");

        let league = db
            .create_league(&NewLeague {
                name: data.league.name.clone(),
                competition_id: competition.id,
                max_teams: data.league.max_teams,
            })
            .expect("Failed to seed league");

        for seed_club in &data.clubs {
            let manager = db
                .create_user(&NewUser {
                    email: seed_club.manager_email.clone(),
                    password_hash: String::from("demo"),
                    first_name: data.first_names.choose(&mut rng).unwrap().clone(),
                    last_name: data.last_names.choose(&mut rng).unwrap().clone(),
                    role: UserRole::ClubManager,
                })
                .expect("Failed to seed manager");

            let club = db
                .create_club(&NewClub {
                    name: seed_club.name.clone(),
                    description: None,
                    contact_email: seed_club.contact_email.clone(),
                    contact_phone: None,
                    manager_id: manager.id,
                })
                .expect("Failed to seed club");

            let team = db
                .create_team(&NewTeam {
                    name: seed_club.team.clone(),
                    club_id: club.id,
                    league_id: Some(league.id),
                })
                .expect("Failed to seed team");

            for jersey_number in 1..=SQUAD_SIZE {
                let birth_year = rng.random_range(1988..=2006);
                let birth = NaiveDate::from_ymd_opt(
                    birth_year,
                    rng.random_range(1..=12),
                    rng.random_range(1..=28),
                )
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap();

                let position = if jersey_number == 1 {
                    POSITIONS[0]
                } else {
                    POSITIONS[1..].choose(&mut rng).unwrap()
                };

                db.create_player(&NewPlayer {
                    first_name: data.first_names.choose(&mut rng).unwrap().clone(),
                    last_name: data.last_names.choose(&mut rng).unwrap().clone(),
                    jersey_number,
                    team_id: team.id,
                    date_of_birth: birth,
                    position: Some(position.to_string()),
                })
                .expect("Failed to seed player");
            }

            debug!("seeded club {} with team {}", club.name, team.name);
        }

        debug!(
            "seed complete for season {}: {} clubs, {} teams",
            season_start.year(),
            db.clubs().len(),
            db.teams_by_league(league.id).len()
        );

        db
    }
}
