mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

/// Create, read back, update and delete one row of a resource.
async fn round_trip(path: &str, payload: Value, changed: Value) -> Result<()> {
    let Some(server) = common::ensure_server().await? else {
        return Ok(());
    };
    let client = reqwest::Client::new();

    let created = common::create(&client, &server.url(path), payload.clone()).await?;
    let id = created["id"].as_i64().expect("numeric id");
    let mut expected = payload;
    expected["id"] = json!(id);
    assert_eq!(created, expected, "{}", path);

    let url = server.url(&format!("{}/{}", path, id));
    let res = client.get(&url).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, expected);

    let res = client.put(&url).json(&changed).send().await?;
    assert_eq!(res.status(), StatusCode::OK, "{}", path);
    let mut expected = changed;
    expected["id"] = json!(id);
    assert_eq!(res.json::<Value>().await?, expected);

    let res = client.delete(&url).send().await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let res = client.get(&url).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn students() -> Result<()> {
    round_trip(
        "/students",
        json!({"class_id": 1, "first_name": "Anna", "last_name": "Ivanova", "patronymic": "Petrovna"}),
        json!({"class_id": 2, "first_name": "Anna", "last_name": "Smirnova", "patronymic": null}),
    )
    .await
}

#[tokio::test]
async fn teachers() -> Result<()> {
    round_trip(
        "/teachers",
        json!({"first_name": "Oleg", "last_name": "Sidorov", "patronymic": "Ivanovich"}),
        json!({"first_name": "Oleg", "last_name": "Sidorov", "patronymic": "Igorevich"}),
    )
    .await
}

#[tokio::test]
async fn subjects() -> Result<()> {
    round_trip(
        "/subjects",
        json!({"subject_name": "Mathematics"}),
        json!({"subject_name": "Algebra"}),
    )
    .await
}

#[tokio::test]
async fn teacher_assignments() -> Result<()> {
    round_trip(
        "/teacher-assignments",
        json!({"teacher_id": 1, "subject_id": 2}),
        json!({"teacher_id": 1, "subject_id": 3}),
    )
    .await
}

#[tokio::test]
async fn lesson_schedules() -> Result<()> {
    round_trip(
        "/lesson-schedules",
        json!({"subject_id": 1, "weekday": 1, "number": 1, "class_id": 1, "teacher_id": 1}),
        json!({"subject_id": 1, "weekday": 7, "number": 8, "class_id": 1, "teacher_id": 1}),
    )
    .await
}

#[tokio::test]
async fn lesson_logs() -> Result<()> {
    round_trip(
        "/lesson-logs",
        json!({"subject_id": 1, "date": "2024-09-02", "number": 2, "class_id": 1, "teacher_id": 1}),
        json!({"subject_id": 1, "date": "2024-09-03", "number": 3, "class_id": 1, "teacher_id": 1}),
    )
    .await
}

#[tokio::test]
async fn student_lessons() -> Result<()> {
    round_trip(
        "/student-lessons",
        json!({"student_id": 1, "lesson_id": 1, "grade": 5, "attendance_status": "P"}),
        json!({"student_id": 1, "lesson_id": 1, "grade": null, "attendance_status": "A"}),
    )
    .await
}

#[tokio::test]
async fn schedule_ranges_are_enforced() -> Result<()> {
    let Some(server) = common::ensure_server().await? else {
        return Ok(());
    };
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/lesson-schedules"))
        .json(&json!({"subject_id": 1, "weekday": 8, "number": 1, "class_id": 1, "teacher_id": 1}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let res = client
        .post(server.url("/lesson-logs"))
        .json(&json!({"subject_id": 1, "date": "2024-09-02", "number": 9, "class_id": 1, "teacher_id": 1}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn attendance_statuses_are_keyed_by_code() -> Result<()> {
    let Some(server) = common::ensure_server().await? else {
        return Ok(());
    };
    let client = reqwest::Client::new();
    let url = server.url("/attendance-statuses/Q");

    // Leftover from an earlier run would make the create a duplicate
    client.delete(&url).send().await?;

    let created = common::create(
        &client,
        &server.url("/attendance-statuses"),
        json!({"code": "Q", "description": "Quarantined"}),
    )
    .await?;
    assert_eq!(created, json!({"code": "Q", "description": "Quarantined"}));

    let res = client
        .post(server.url("/attendance-statuses"))
        .json(&json!({"code": "Q", "description": "Duplicate"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let res = client
        .put(&url)
        .json(&json!({"code": "R", "description": "In quarantine"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.json::<Value>().await?,
        json!({"code": "Q", "description": "In quarantine"})
    );

    let res = client.delete(&url).send().await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let res = client.get(&url).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn attendance_code_longer_than_one_char_is_unprocessable() -> Result<()> {
    let Some(server) = common::ensure_server().await? else {
        return Ok(());
    };
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/attendance-statuses"))
        .json(&json!({"code": "LATE", "description": "Late"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(res.json::<Value>().await?["error"], "UnprocessableEntity");
    Ok(())
}
