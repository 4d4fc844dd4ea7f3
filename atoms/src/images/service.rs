use photogroups_shared::{ApiError, AppConfig, RecordStore, UploadSigner};

use super::model::{CreateImageResponse, ImageRecord};
use crate::groups::service::group_exists;
use crate::payload::{overlay, parse_object, require_key};

pub const GROUP_NOT_FOUND: &str = "Group does not exist";

/// Key attribute of the images table.
pub const IMAGE_KEY: &str = "imageId";

/// Create an image record under an existing group and sign its upload URL.
///
/// The group lookup runs first, so a missing group is reported before the
/// body is even parsed. The read and the write are not atomic.
pub async fn create_image(
    store: &dyn RecordStore,
    signer: &dyn UploadSigner,
    config: &AppConfig,
    group_id: &str,
    body: &[u8],
) -> Result<CreateImageResponse, ApiError> {
    if !group_exists(store, &config.groups_table, group_id).await? {
        return Err(ApiError::NotFound(GROUP_NOT_FOUND.to_string()));
    }

    let image = ImageRecord::new(group_id, &config.images_bucket);

    // Signed for the generated id even if the body later overrides `imageId`.
    let upload_url = signer
        .presign_put(
            &config.images_bucket,
            &image.image_id,
            config.signed_url_expiration,
        )
        .await?;

    let fields = parse_object(body)?;
    let new_item = overlay(image.into_record(), fields);
    require_key(&new_item, IMAGE_KEY)?;

    store.put_item(&config.images_table, new_item.clone()).await?;

    Ok(CreateImageResponse {
        new_item,
        upload_url,
    })
}
