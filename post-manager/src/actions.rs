//! Сетевые шаги действий: каждый шаг — один или два запроса к API.
//!
//! Ошибки логируются здесь и возвращаются вызывающему; состояние при этом
//! не трогается, его меняют только `ManagerState::apply_*`.

use post_client::{Post, PostsApi};

use crate::error::ManagerError;
use crate::state::{Committed, Submission};

/// Загружает всю коллекцию постов.
pub async fn fetch_posts<A>(api: &A) -> Result<Vec<Post>, ManagerError>
where
    A: PostsApi + ?Sized,
{
    match api.list_posts().await {
        Ok(posts) => {
            tracing::info!(count = posts.len(), "posts loaded");
            Ok(posts)
        }
        Err(err) => {
            tracing::error!(error = %err, "error fetching posts");
            Err(err.into())
        }
    }
}

/// Отправляет черновик: сначала загружает выбранное изображение, затем
/// создаёт пост (нет `id`) или обновляет существующий.
pub async fn submit<A>(api: &A, submission: Submission) -> Result<Committed, ManagerError>
where
    A: PostsApi + ?Sized,
{
    let Submission { mut draft, image } = submission;
    let action = if draft.id.is_some() { "updating" } else { "creating" };

    if let Some(image) = image {
        let reference = api
            .upload_image(&image.name, image.bytes, &image.mime)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, file = %image.name, "error uploading image");
                ManagerError::from(err)
            })?;
        draft.image_url = Some(reference);
    }

    let result = match draft.id {
        Some(id) => {
            api.update_post(id, &draft.title, &draft.content, draft.image_url.as_deref())
                .await
        }
        None => {
            api.create_post(&draft.title, &draft.content, draft.image_url.as_deref())
                .await
        }
    };

    match result {
        Ok(saved) => {
            tracing::info!(id = ?saved.id, "{action} post done");
            Ok(Committed { draft, saved })
        }
        Err(err) => {
            tracing::error!(error = %err, "error {action} post");
            Err(err.into())
        }
    }
}

/// Удаляет пост на сервере.
pub async fn remove<A>(api: &A, id: i64) -> Result<(), ManagerError>
where
    A: PostsApi + ?Sized,
{
    api.delete_post(id).await.map_err(|err| {
        tracing::error!(error = %err, id, "error deleting post");
        ManagerError::from(err)
    })?;
    tracing::info!(id, "post deleted");
    Ok(())
}
