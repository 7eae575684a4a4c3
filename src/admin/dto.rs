use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: Option<String>,
}

/// Update body for the admin PUT: same field rules as the user-facing
/// endpoint, minus the image (admins edit the numbers, not the photo).
#[derive(Debug, Deserialize)]
pub struct AdminUpdateWorkout {
    #[serde(default)]
    pub workout_type: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub calories_burned: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_body_tolerates_missing_fields() {
        let body: AdminUpdateWorkout = serde_json::from_str(r#"{"duration": 30}"#).unwrap();
        assert_eq!(body.duration, Some(30.0));
        assert!(body.workout_type.is_none());
        assert!(body.calories_burned.is_none());
    }
}
