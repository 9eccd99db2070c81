use chrono::{TimeZone, Utc};
use pawboard::authz::{Session, User};
use pawboard::config::ClientConfig;
use pawboard::models::{Author, Id, Post, PostStatus, PostType};
use pawboard::presenter::{absolute_image_urls, present, PLACEHOLDER};
use pawboard::status::StatusClass;

fn sample_post(post_type: PostType, status: PostStatus) -> Post {
    Post {
        id: 42,
        post_type,
        status,
        author: Author { user_id: 7, name: "Dana".into() },
        title: "Missing corgi".into(),
        content: "Last seen near the park.".into(),
        animal_name: Some("Mango".into()),
        animal_age: Some(3),
        animal_category: Some("dog".into()),
        animal_breed: None,
        gender: None,
        lost_time: Some(Utc.with_ymd_and_hms(2026, 4, 30, 18, 0, 0).unwrap()),
        location: Some("Han River Park".into()),
        latitude: 37.5665,
        longitude: 126.978,
        image_urls: vec!["a.png".into()],
        created_at: Utc.with_ymd_and_hms(2026, 5, 1, 9, 30, 0).unwrap(),
    }
}

fn author_session(user_id: Id) -> Session {
    Session::logged_in(User { user_id, name: "Dana".into() })
}

fn config() -> ClientConfig {
    ClientConfig::new("http://localhost:8080/api", "http://localhost:8080/upload/")
}

#[test]
fn image_urls_preserve_count_and_order() {
    let fragments: Vec<String> = vec!["a.png".into(), "b.jpg".into(), "c.webp".into()];
    let urls = absolute_image_urls("http://localhost:8080/upload/", &fragments);
    assert_eq!(urls.len(), fragments.len());
    for (url, fragment) in urls.iter().zip(&fragments) {
        assert_eq!(url, &format!("http://localhost:8080/upload/{fragment}"));
    }
    // source list untouched
    assert_eq!(fragments[0], "a.png");
}

#[test]
fn empty_image_list_yields_empty_output() {
    assert!(absolute_image_urls("http://x/", &[]).is_empty());
}

#[test]
fn active_missing_post_for_author() {
    let view = present(
        &sample_post(PostType::Missing, PostStatus::Active),
        &author_session(7),
        &config(),
    );
    assert_eq!(view.status.text, "searching");
    assert_eq!(view.status.class, StatusClass::Active);
    assert!(view.controls.edit && view.controls.delete && view.controls.complete);
    assert_eq!(view.image_urls, vec!["http://localhost:8080/upload/a.png"]);
    assert_eq!(view.time_label, "Time lost");
    assert_eq!(view.location_label, "Location lost");
    assert_eq!(view.map_label, "Estimated missing location");
    assert!(!view.map.selectable);
    assert_eq!(view.comments.post_id, 42);
    assert!(!view.comments.post_completed);
}

#[test]
fn completed_post_hides_controls_even_for_author() {
    let view = present(
        &sample_post(PostType::Missing, PostStatus::Completed),
        &author_session(7),
        &config(),
    );
    assert_eq!(view.status.text, "found!");
    assert_eq!(view.status.class, StatusClass::Completed);
    assert!(!view.controls.any());
    assert!(view.comments.post_completed);
}

#[test]
fn shelter_labels() {
    let view = present(
        &sample_post(PostType::Shelter, PostStatus::Active),
        &Session::anonymous(),
        &config(),
    );
    assert_eq!(view.status.text, "sheltering");
    assert_eq!(view.time_label, "Time found");
    assert_eq!(view.location_label, "Location found");
    assert_eq!(view.map_label, "Found location");
    assert!(!view.controls.any());
}

#[test]
fn absent_optional_fields_render_placeholder() {
    let mut post = sample_post(PostType::Missing, PostStatus::Active);
    post.animal_name = None;
    post.animal_age = None;
    post.animal_category = None;
    post.animal_breed = None;
    post.gender = None;
    post.lost_time = None;
    post.location = None;

    let view = present(&post, &Session::anonymous(), &config());
    assert_eq!(view.animal_name, PLACEHOLDER);
    assert_eq!(view.animal_age, PLACEHOLDER);
    assert_eq!(view.animal_category, PLACEHOLDER);
    assert_eq!(view.animal_breed, PLACEHOLDER);
    assert_eq!(view.gender, PLACEHOLDER);
    assert_eq!(view.time_value, PLACEHOLDER);
    assert_eq!(view.location_value, PLACEHOLDER);
}

#[test]
fn present_values_and_formatting() {
    let view = present(
        &sample_post(PostType::Missing, PostStatus::Active),
        &Session::anonymous(),
        &config(),
    );
    assert_eq!(view.title, "Missing corgi");
    assert_eq!(view.author_name, "Dana");
    assert_eq!(view.created_at, "2026-05-01 09:30");
    assert_eq!(view.time_value, "2026-04-30 18:00");
    assert_eq!(view.animal_age, "3 years");
    assert_eq!(view.location_value, "Han River Park");
}
