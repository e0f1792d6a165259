use std::time::{SystemTime, UNIX_EPOCH};

use post_client::{PostClient, PostClientError};

fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock must be after unix epoch")
        .as_nanos();
    format!("{nanos}")
}

// Минимальный валидный PNG 1x1.
const PIXEL_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

#[tokio::test]
#[ignore = "requires running posts API server"]
async fn http_smoke_flow() {
    let base_url =
        std::env::var("POSTS_HTTP_URL").unwrap_or_else(|_| post_client::DEFAULT_BASE_URL.to_string());
    let client = PostClient::new(base_url);

    let suffix = unique_suffix();
    let title = format!("smoke title {suffix}");

    let image = client
        .upload_image(&format!("smoke_{suffix}.png"), PIXEL_PNG.to_vec(), "image/png")
        .await
        .expect("upload_image must succeed");
    assert!(image.starts_with('/'));

    let created = client
        .create_post(&title, "smoke content", Some(&image))
        .await
        .expect("create_post must succeed");
    let id = created.id.expect("server must assign id");
    assert_eq!(created.title, title);
    assert_eq!(created.image(), Some(image.as_str()));

    let listed = client.list_posts().await.expect("list_posts must succeed");
    assert!(listed.iter().any(|post| post.id == Some(id)));

    let updated = client
        .update_post(id, "smoke title updated", "smoke content updated", None)
        .await
        .expect("update_post must succeed");
    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.title, "smoke title updated");
    assert_eq!(updated.image_url, None);

    let fetched = client.get_post(id).await.expect("get_post must succeed");
    assert_eq!(fetched.content, "smoke content updated");

    client
        .delete_post(id)
        .await
        .expect("delete_post must succeed");

    let after_delete = client.get_post(id).await;
    assert!(matches!(
        after_delete,
        Err(PostClientError::NotFound | PostClientError::Status { .. })
    ));
}
