use uuid::Uuid;

use super::dto::UploadedImage;
use crate::state::AppState;

/// Store an uploaded workout image and return its public URL. Keys are
/// namespaced per user so a listing of the bucket stays navigable.
pub async fn upload_workout_image(
    st: &AppState,
    user_id: i64,
    img: UploadedImage,
) -> anyhow::Result<String> {
    let ext = ext_from_mime(&img.content_type).unwrap_or("bin");
    let key = format!("workouts/{}/{}.{}", user_id, Uuid::new_v4(), ext);
    st.storage.upload(&key, img.body, &img.content_type).await
}

fn ext_from_mime(ct: &str) -> Option<&'static str> {
    match ct {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/heic" => Some("heic"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_ext_from_mime() {
        assert_eq!(ext_from_mime("image/jpeg"), Some("jpg"));
        assert_eq!(ext_from_mime("image/jpg"), Some("jpg"));
        assert_eq!(ext_from_mime("image/png"), Some("png"));
        assert_eq!(ext_from_mime("image/webp"), Some("webp"));
        assert_eq!(ext_from_mime("image/heic"), Some("heic"));
        assert_eq!(ext_from_mime("application/octet-stream"), None);
        assert_eq!(ext_from_mime("whatever/else"), None);
    }

    #[tokio::test]
    async fn upload_yields_namespaced_url() {
        let state = AppState::fake();
        let url = upload_workout_image(
            &state,
            7,
            UploadedImage {
                body: Bytes::from_static(b"fake-image"),
                content_type: "image/png".into(),
            },
        )
        .await
        .unwrap();
        assert!(url.starts_with("https://fake.local/workouts/7/"));
        assert!(url.ends_with(".png"));
    }
}
