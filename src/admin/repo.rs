use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::workouts::repo::Workout;

/// Workout joined with the identity of the user who logged it.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AdminWorkoutRow {
    pub id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub user_email: String,
    pub workout_type: String,
    pub duration: f64,
    pub calories_burned: f64,
    pub image_url: Option<String>,
}

/// List every workout, optionally filtered by a pre-sanitized, wildcarded
/// LIKE pattern on the owning user's name or email.
pub async fn list_all(db: &PgPool, pattern: Option<&str>) -> sqlx::Result<Vec<AdminWorkoutRow>> {
    match pattern {
        Some(p) => {
            sqlx::query_as::<_, AdminWorkoutRow>(
                r#"
                SELECT w.id, w.user_id, u.name AS user_name, u.email AS user_email,
                       w.workout_type, w.duration, w.calories_burned, w.image_url
                FROM workouts w
                INNER JOIN users u ON w.user_id = u.id
                WHERE u.name LIKE $1 OR u.email LIKE $1
                ORDER BY w.id
                "#,
            )
            .bind(p)
            .fetch_all(db)
            .await
        }
        None => {
            sqlx::query_as::<_, AdminWorkoutRow>(
                r#"
                SELECT w.id, w.user_id, u.name AS user_name, u.email AS user_email,
                       w.workout_type, w.duration, w.calories_burned, w.image_url
                FROM workouts w
                INNER JOIN users u ON w.user_id = u.id
                ORDER BY w.id
                "#,
            )
            .fetch_all(db)
            .await
        }
    }
}

pub async fn find_by_id(db: &PgPool, id: i64) -> sqlx::Result<Option<Workout>> {
    sqlx::query_as::<_, Workout>(
        r#"
        SELECT id, user_id, workout_type, duration, calories_burned, image_url
        FROM workouts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn update_by_id(
    db: &PgPool,
    id: i64,
    workout_type: &str,
    duration: f64,
    calories_burned: f64,
) -> sqlx::Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE workouts
        SET workout_type = $1, duration = $2, calories_burned = $3
        WHERE id = $4
        "#,
    )
    .bind(workout_type)
    .bind(duration)
    .bind(calories_burned)
    .bind(id)
    .execute(db)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete_by_id(db: &PgPool, id: i64) -> sqlx::Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM workouts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(db)
    .await?;
    Ok(result.rows_affected())
}
