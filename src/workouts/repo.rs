use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

/// Workout record owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Workout {
    pub id: i64,
    pub user_id: i64,
    pub workout_type: String,
    pub duration: f64,
    pub calories_burned: f64,
    pub image_url: Option<String>,
}

impl Workout {
    pub async fn list_by_user(db: &PgPool, user_id: i64) -> sqlx::Result<Vec<Workout>> {
        sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, user_id, workout_type, duration, calories_burned, image_url
            FROM workouts
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    /// Fetch a workout only if it belongs to the given user. Callers treat
    /// `None` as not-found regardless of whether the row exists for someone
    /// else.
    pub async fn find_owned(db: &PgPool, id: i64, user_id: i64) -> sqlx::Result<Option<Workout>> {
        sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, user_id, workout_type, duration, calories_burned, image_url
            FROM workouts
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    pub async fn insert(
        db: &PgPool,
        user_id: i64,
        workout_type: &str,
        duration: f64,
        calories_burned: f64,
        image_url: Option<&str>,
    ) -> sqlx::Result<Workout> {
        sqlx::query_as::<_, Workout>(
            r#"
            INSERT INTO workouts (user_id, workout_type, duration, calories_burned, image_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, workout_type, duration, calories_burned, image_url
            "#,
        )
        .bind(user_id)
        .bind(workout_type)
        .bind(duration)
        .bind(calories_burned)
        .bind(image_url)
        .fetch_one(db)
        .await
    }

    pub async fn update_owned(
        db: &PgPool,
        id: i64,
        user_id: i64,
        workout_type: &str,
        duration: f64,
        calories_burned: f64,
        image_url: Option<&str>,
    ) -> sqlx::Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE workouts
            SET workout_type = $1, duration = $2, calories_burned = $3, image_url = $4
            WHERE id = $5 AND user_id = $6
            "#,
        )
        .bind(workout_type)
        .bind(duration)
        .bind(calories_burned)
        .bind(image_url)
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_owned(db: &PgPool, id: i64, user_id: i64) -> sqlx::Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM workouts
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }
}
