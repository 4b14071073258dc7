use chrono::{TimeDelta, Utc};
use diesel::prelude::*;
use hobbies_api::domain::hobby::HobbyUpdate;
use hobbies_api::domain::types::{
    HobbyCategory, HobbyDescription, HobbyDifficulty, HobbyId, HobbyName,
};
use hobbies_api::repository::{
    DieselRepository, HobbyListQuery, HobbyReader, HobbyWriter, RepositoryError,
};
use hobbies_api::schema::hobbies;

mod common;

use common::new_hobby;

fn seed(repo: &DieselRepository) {
    let samples = [
        ("Painting", "Pigments on canvas", HobbyDifficulty::Beginner, HobbyCategory::Arts),
        ("Chess", "Board game of tactics", HobbyDifficulty::Intermediate, HobbyCategory::Indoor),
        ("Pottery", "Shaping clay", HobbyDifficulty::Intermediate, HobbyCategory::Arts),
        ("Hiking", "Walking in the mountains", HobbyDifficulty::Beginner, HobbyCategory::Outdoor),
        ("Sculpture", "Carving stone for 100% focus", HobbyDifficulty::Advanced, HobbyCategory::Arts),
    ];
    let base = Utc::now().naive_utc();
    for (offset, (name, description, difficulty, category)) in samples.into_iter().enumerate() {
        let mut hobby = new_hobby(name, Some(description), difficulty, category);
        hobby.created_at = base + TimeDelta::seconds(offset as i64);
        hobby.updated_at = hobby.created_at;
        repo.create_hobby(&hobby).expect("should create hobby");
    }
}

fn names(items: &[hobbies_api::domain::hobby::Hobby]) -> Vec<&str> {
    items.iter().map(|h| h.name.as_str()).collect()
}

#[test]
fn test_hobby_repository_crud() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_hobby(&new_hobby(
            "Yoga",
            None,
            HobbyDifficulty::Beginner,
            HobbyCategory::Sports,
        ))
        .expect("should create hobby");
    assert_eq!(created.name.as_str(), "Yoga");
    assert_eq!(created.description, None);
    assert!(created.is_active);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = repo
        .get_hobby_by_id(created.id)
        .expect("should query hobby")
        .expect("hobby should exist");
    assert_eq!(fetched, created);

    assert!(repo.delete_hobby(created.id).expect("should delete hobby"));
    assert_eq!(repo.get_hobby_by_id(created.id).expect("should query"), None);
    assert!(!repo.delete_hobby(created.id).expect("second delete is not an error"));
}

#[test]
fn ids_are_never_reused() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let first = repo
        .create_hobby(&new_hobby("A", None, HobbyDifficulty::Beginner, HobbyCategory::Arts))
        .unwrap();
    let second = repo
        .create_hobby(&new_hobby("B", None, HobbyDifficulty::Beginner, HobbyCategory::Arts))
        .unwrap();
    assert!(second.id > first.id);

    repo.delete_hobby(second.id).unwrap();
    let third = repo
        .create_hobby(&new_hobby("C", None, HobbyDifficulty::Beginner, HobbyCategory::Arts))
        .unwrap();
    assert!(third.id > second.id);
}

#[test]
fn duplicate_names_are_conflicts() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    seed(&repo);

    let err = repo
        .create_hobby(&new_hobby("Chess", None, HobbyDifficulty::Advanced, HobbyCategory::Indoor))
        .unwrap_err();
    assert!(matches!(err, RepositoryError::Conflict(_)), "{err:?}");

    let (_, painting) = find(&repo, "Painting");
    let update = HobbyUpdate {
        name: Some(HobbyName::new("Pottery").unwrap()),
        ..Default::default()
    };
    let err = repo.update_hobby(painting, &update).unwrap_err();
    assert!(err.is_conflict(), "{err:?}");
}

fn find(repo: &DieselRepository, name: &str) -> (usize, HobbyId) {
    let items = repo.list_hobbies(&HobbyListQuery::default()).unwrap();
    items
        .iter()
        .enumerate()
        .find(|(_, h)| h.name.as_str() == name)
        .map(|(position, h)| (position, h.id))
        .expect("seeded hobby should exist")
}

#[test]
fn lists_newest_first() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    seed(&repo);

    let items = repo.list_hobbies(&HobbyListQuery::default()).unwrap();
    assert_eq!(
        names(&items),
        ["Sculpture", "Hiking", "Pottery", "Chess", "Painting"]
    );
}

#[test]
fn filters_combine_and_count_ignores_pagination() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    seed(&repo);

    let arts = HobbyListQuery::default().category(HobbyCategory::Arts);
    assert_eq!(repo.count_hobbies(&arts).unwrap(), 3);

    let page = arts.clone().paginate(2, 1);
    assert_eq!(names(&repo.list_hobbies(&page).unwrap()), ["Pottery"]);
    assert_eq!(repo.count_hobbies(&page).unwrap(), 3);

    let beyond = arts.clone().paginate(4, 1);
    assert!(repo.list_hobbies(&beyond).unwrap().is_empty());

    let beginner_arts = arts.difficulty(HobbyDifficulty::Beginner);
    assert_eq!(names(&repo.list_hobbies(&beginner_arts).unwrap()), ["Painting"]);
}

#[test]
fn active_flag_filter() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    seed(&repo);

    let (_, chess) = find(&repo, "Chess");
    let update = HobbyUpdate {
        is_active: Some(false),
        ..Default::default()
    };
    repo.update_hobby(chess, &update).unwrap();

    let inactive = HobbyListQuery::default().active(false);
    assert_eq!(names(&repo.list_hobbies(&inactive).unwrap()), ["Chess"]);
    let active = HobbyListQuery::default().active(true);
    assert_eq!(repo.count_hobbies(&active).unwrap(), 4);
}

#[test]
fn search_matches_name_or_description_ignoring_case() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    seed(&repo);

    let by_name = HobbyListQuery::default().search("PAINT");
    assert_eq!(names(&repo.list_hobbies(&by_name).unwrap()), ["Painting"]);

    let by_description = HobbyListQuery::default().search("mountains");
    assert_eq!(names(&repo.list_hobbies(&by_description).unwrap()), ["Hiking"]);

    let wildcard = HobbyListQuery::default().search("%");
    assert_eq!(names(&repo.list_hobbies(&wildcard).unwrap()), ["Sculpture"]);

    let empty = HobbyListQuery::default().search("");
    assert_eq!(repo.count_hobbies(&empty).unwrap(), 5);
}

#[test]
fn update_touches_only_supplied_fields() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    seed(&repo);

    let (_, pottery) = find(&repo, "Pottery");
    let before = repo.get_hobby_by_id(pottery).unwrap().unwrap();

    let update = HobbyUpdate {
        difficulty: Some(HobbyDifficulty::Advanced),
        ..Default::default()
    };
    let after = repo.update_hobby(pottery, &update).unwrap().unwrap();
    assert_eq!(after.difficulty, HobbyDifficulty::Advanced);
    assert_eq!(after.name, before.name);
    assert_eq!(after.description, before.description);
    assert_eq!(after.category, before.category);
    assert_eq!(after.is_active, before.is_active);
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at > before.updated_at);

    let again = repo.update_hobby(pottery, &update).unwrap().unwrap();
    assert!(again.updated_at > after.updated_at);
}

#[test]
fn update_can_set_and_clear_description() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    seed(&repo);
    let (_, chess) = find(&repo, "Chess");

    let set = HobbyUpdate {
        description: Some(Some(HobbyDescription::new("Openings and endgames").unwrap())),
        ..Default::default()
    };
    let updated = repo.update_hobby(chess, &set).unwrap().unwrap();
    assert_eq!(
        updated.description.as_ref().map(|d| d.as_str()),
        Some("Openings and endgames")
    );

    let clear = HobbyUpdate {
        description: Some(None),
        ..Default::default()
    };
    let updated = repo.update_hobby(chess, &clear).unwrap().unwrap();
    assert_eq!(updated.description, None);

    let mut conn = test_db.pool().get().unwrap();
    let stored: Option<String> = hobbies::table
        .find(chess.get())
        .select(hobbies::description)
        .first(&mut conn)
        .unwrap();
    assert_eq!(stored, None);
}

#[test]
fn update_of_missing_hobby_returns_none() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let missing = HobbyId::new(424242).unwrap();
    let update = HobbyUpdate {
        is_active: Some(false),
        ..Default::default()
    };
    assert_eq!(repo.update_hobby(missing, &update).unwrap(), None);
}
