use crate::content::ImageOptions;
use crate::error::Result;
use crate::http::{api_paths, HttpClient};
use crate::models::{AddFaceOptions, AddedFace, FaceList, FaceListSummary};
use serde_json::{json, Value};

/// Facade for the face list endpoint family.
///
/// Obtained from [`crate::Client::face_lists`]. Every operation is a direct
/// mapping to one endpoint; authentication, content resolution and error
/// classification are handled by the underlying layers.
pub struct FaceLists<'a> {
    http: &'a HttpClient,
}

impl<'a> FaceLists<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Create an empty face list under the given id.
    ///
    /// The id must be unique within the subscription; the display name is
    /// limited to 128 characters by the service.
    pub async fn create(
        &self,
        face_list_id: &str,
        name: &str,
        user_data: Option<&str>,
    ) -> Result<()> {
        let path = format!("{}/{face_list_id}", api_paths::FACE_LISTS);
        self.http
            .put_json(&path, &metadata_body(name, user_data))
            .await
    }

    /// Retrieve a face list, including its stored faces
    pub async fn get(&self, face_list_id: &str) -> Result<FaceList> {
        let path = format!("{}/{face_list_id}", api_paths::FACE_LISTS);
        self.http.get(&path).await
    }

    /// Update the name and user data of a face list
    pub async fn update(
        &self,
        face_list_id: &str,
        name: &str,
        user_data: Option<&str>,
    ) -> Result<()> {
        let path = format!("{}/{face_list_id}", api_paths::FACE_LISTS);
        self.http
            .patch_json(&path, &metadata_body(name, user_data))
            .await
    }

    /// Delete a face list and every face stored in it
    pub async fn delete(&self, face_list_id: &str) -> Result<()> {
        let path = format!("{}/{face_list_id}", api_paths::FACE_LISTS);
        self.http.delete(&path).await
    }

    /// List the face lists of the subscription
    pub async fn list(&self) -> Result<Vec<FaceListSummary>> {
        self.http.get(api_paths::FACE_LISTS).await
    }

    /// Add a face to a face list.
    ///
    /// The image is supplied through [`ImageOptions`]; when it contains more
    /// than one face, `options.target_face` picks the one to store. Returns
    /// the persisted id under which the face was stored.
    pub async fn add_face(
        &self,
        face_list_id: &str,
        image: ImageOptions,
        options: AddFaceOptions,
    ) -> Result<AddedFace> {
        let payload = image.resolve().await?;

        let mut query: Vec<(String, String)> = Vec::new();
        if let Some(target_face) = options.target_face {
            query.push(("targetFace".to_string(), target_face));
        }
        if let Some(user_data) = options.user_data {
            query.push(("userData".to_string(), user_data));
        }

        let path = format!("{}/{face_list_id}/persistedFaces", api_paths::FACE_LISTS);
        self.http.post_content(&path, &query, payload).await
    }

    /// Remove a stored face from a face list
    pub async fn delete_face(&self, face_list_id: &str, persisted_face_id: &str) -> Result<()> {
        let path = format!(
            "{}/{face_list_id}/persistedFaces/{persisted_face_id}",
            api_paths::FACE_LISTS
        );
        self.http.delete(&path).await
    }
}

// userData is left out of the body entirely when absent, never sent as null.
fn metadata_body(name: &str, user_data: Option<&str>) -> Value {
    let mut body = json!({ "name": name });
    if let Some(user_data) = user_data {
        body["userData"] = Value::from(user_data);
    }
    body
}
