//! Populate the database with a handful of sample hobbies.
//!
//! Uses the same configuration sources as the server. Hobbies whose name is
//! already taken are skipped, so the command can be run repeatedly.

use chrono::Utc;
use env_logger::Env;

use hobbies_api::db::{establish_connection_pool, run_migrations};
use hobbies_api::domain::hobby::NewHobby;
use hobbies_api::domain::types::{
    HobbyCategory, HobbyDescription, HobbyDifficulty, HobbyName, TypeConstraintError,
};
use hobbies_api::models::config::ServerConfig;
use hobbies_api::repository::{DieselRepository, HobbyWriter};

const SAMPLES: &[(&str, &str, HobbyDifficulty, HobbyCategory, bool)] = &[
    (
        "Photography",
        "Capturing beautiful moments and memories through the lens",
        HobbyDifficulty::Intermediate,
        HobbyCategory::Arts,
        true,
    ),
    (
        "Rock Climbing",
        "Ascending natural rock formations or artificial climbing walls",
        HobbyDifficulty::Advanced,
        HobbyCategory::Outdoor,
        true,
    ),
    (
        "Chess",
        "Strategic board game of skill and tactics",
        HobbyDifficulty::Intermediate,
        HobbyCategory::Indoor,
        true,
    ),
    (
        "Programming",
        "Creating software applications and solving problems with code",
        HobbyDifficulty::Intermediate,
        HobbyCategory::Technology,
        true,
    ),
    (
        "Swimming",
        "Moving through water using various strokes and techniques",
        HobbyDifficulty::Beginner,
        HobbyCategory::Sports,
        true,
    ),
    (
        "Painting",
        "Creating art using pigments and various painting techniques",
        HobbyDifficulty::Beginner,
        HobbyCategory::Arts,
        true,
    ),
    (
        "Hiking",
        "Walking in natural environments, often in mountainous areas",
        HobbyDifficulty::Beginner,
        HobbyCategory::Outdoor,
        true,
    ),
    (
        "3D Printing",
        "Creating physical objects from digital designs using additive manufacturing",
        HobbyDifficulty::Advanced,
        HobbyCategory::Technology,
        false,
    ),
    (
        "Cooking",
        "Preparing delicious meals and exploring culinary arts",
        HobbyDifficulty::Intermediate,
        HobbyCategory::Indoor,
        true,
    ),
    (
        "Basketball",
        "Team sport involving shooting a ball through a hoop",
        HobbyDifficulty::Intermediate,
        HobbyCategory::Sports,
        true,
    ),
];

fn sample_hobby(
    name: &str,
    description: &str,
    difficulty: HobbyDifficulty,
    category: HobbyCategory,
    is_active: bool,
) -> Result<NewHobby, TypeConstraintError> {
    let now = Utc::now().naive_utc();
    Ok(NewHobby {
        name: HobbyName::new(name)?,
        description: Some(HobbyDescription::new(description)?),
        difficulty,
        category,
        is_active,
        created_at: now,
        updated_at: now,
    })
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let server_config = ServerConfig::load().unwrap_or_else(|e| {
        log::error!("Failed to load configuration: {e}");
        std::process::exit(1);
    });

    let pool = establish_connection_pool(&server_config.database_url).unwrap_or_else(|e| {
        log::error!("Failed to establish database connection: {e}");
        std::process::exit(1);
    });
    if let Err(e) = run_migrations(&pool) {
        log::error!("Failed to run database migrations: {e}");
        std::process::exit(1);
    }
    let repo = DieselRepository::new(pool);

    let mut created = 0;
    for &(name, description, difficulty, category, is_active) in SAMPLES {
        let hobby = match sample_hobby(name, description, difficulty, category, is_active) {
            Ok(hobby) => hobby,
            Err(e) => {
                log::error!("Invalid sample hobby {name}: {e}");
                std::process::exit(1);
            }
        };
        match repo.create_hobby(&hobby) {
            Ok(hobby) => {
                created += 1;
                log::info!("Created hobby: {}", hobby.name);
            }
            Err(e) if e.is_conflict() => log::info!("Skipping existing hobby: {name}"),
            Err(e) => {
                log::error!("Failed to create hobby {name}: {e}");
                std::process::exit(1);
            }
        }
    }

    log::info!("Seeding completed, {created} hobbies created");
}
