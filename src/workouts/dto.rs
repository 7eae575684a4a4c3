use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use bytes::Bytes;
use serde::Serialize;

use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct WorkoutMutationResponse {
    pub message: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub struct UploadedImage {
    pub body: Bytes,
    pub content_type: String,
}

/// Multipart form shared by create and update: three text fields plus an
/// optional `workoutImage` file. Unknown fields, including any
/// client-supplied `user_id`, are dropped on the floor.
#[derive(Default)]
pub struct WorkoutForm {
    pub workout_type: Option<String>,
    pub duration: Option<String>,
    pub calories_burned: Option<String>,
    pub image: Option<UploadedImage>,
}

impl WorkoutForm {
    pub async fn from_multipart(mut mp: Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();
        while let Some(field) = mp.next_field().await.map_err(malformed)? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some("workout_type") => {
                    form.workout_type = Some(field.text().await.map_err(malformed)?);
                }
                Some("duration") => {
                    form.duration = Some(field.text().await.map_err(malformed)?);
                }
                Some("calories_burned") => {
                    form.calories_burned = Some(field.text().await.map_err(malformed)?);
                }
                Some("workoutImage") => {
                    let content_type = field
                        .content_type()
                        .map(str::to_string)
                        .unwrap_or_else(|| "application/octet-stream".into());
                    let body = field.bytes().await.map_err(malformed)?;
                    // An empty file part means no image was attached.
                    if !body.is_empty() {
                        form.image = Some(UploadedImage { body, content_type });
                    }
                }
                _ => {}
            }
        }
        Ok(form)
    }
}

fn malformed(err: MultipartError) -> ApiError {
    ApiError::Validation(format!("Malformed form data: {err}"))
}
