use serde::Deserialize;
use std::fmt;

/// A face list as returned by the service
#[derive(Debug, Clone, Deserialize)]
pub struct FaceList {
    /// Identifier chosen by the caller when the list was created
    #[serde(rename = "faceListId")]
    pub face_list_id: String,

    /// Display name of the list
    pub name: String,

    /// User-provided data attached to the list
    #[serde(rename = "userData", default)]
    pub user_data: Option<String>,

    /// Faces stored in the list
    #[serde(rename = "persistedFaces", default)]
    pub persisted_faces: Vec<PersistedFace>,
}

/// One entry of the face list listing
#[derive(Debug, Clone, Deserialize)]
pub struct FaceListSummary {
    /// Identifier of the face list
    #[serde(rename = "faceListId")]
    pub face_list_id: String,

    /// Display name of the list
    pub name: String,

    /// User-provided data attached to the list
    #[serde(rename = "userData", default)]
    pub user_data: Option<String>,
}

/// A face image stored server-side inside a face list.
///
/// Its id is stable, unlike the transient id returned by face detection.
#[derive(Debug, Clone, Deserialize)]
pub struct PersistedFace {
    /// Opaque identifier of the stored face
    #[serde(rename = "persistedFaceId")]
    pub persisted_face_id: String,

    /// User-provided data attached to the face
    #[serde(rename = "userData", default)]
    pub user_data: Option<String>,
}

/// Result of adding a face to a face list
#[derive(Debug, Clone, Deserialize)]
pub struct AddedFace {
    /// Identifier under which the face was stored
    #[serde(rename = "persistedFaceId")]
    pub persisted_face_id: String,
}

/// Optional parameters for adding a face to a face list.
///
/// Omitted fields are left out of the request entirely.
#[derive(Debug, Clone, Default)]
pub struct AddFaceOptions {
    /// Rectangle picking one face out of a multi-face image, in the
    /// `left,top,width,height` form returned by face detection
    pub target_face: Option<String>,

    /// User-provided data to attach to the stored face (max 1 KB)
    pub user_data: Option<String>,
}

/// Rectangle of a detected face within an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FaceRectangle {
    /// Distance from the left edge, in pixels
    pub left: u32,
    /// Distance from the top edge, in pixels
    pub top: u32,
    /// Width of the rectangle, in pixels
    pub width: u32,
    /// Height of the rectangle, in pixels
    pub height: u32,
}

impl fmt::Display for FaceRectangle {
    // Rendered in the form the targetFace query parameter expects
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.left, self.top, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_face_list_deserialization() {
        let json_data = json!({
            "faceListId": "sample-list",
            "name": "employees",
            "userData": "floor 3",
            "persistedFaces": [
                { "persistedFaceId": "pf-1", "userData": "badge photo" },
                { "persistedFaceId": "pf-2" }
            ]
        });

        let list: FaceList = serde_json::from_value(json_data).unwrap();

        assert_eq!(list.face_list_id, "sample-list");
        assert_eq!(list.name, "employees");
        assert_eq!(list.user_data.as_deref(), Some("floor 3"));
        assert_eq!(list.persisted_faces.len(), 2);
        assert_eq!(list.persisted_faces[0].persisted_face_id, "pf-1");
        assert_eq!(
            list.persisted_faces[0].user_data.as_deref(),
            Some("badge photo")
        );
        assert_eq!(list.persisted_faces[1].user_data, None);
    }

    #[test]
    fn test_face_list_without_optional_fields() {
        let json_data = json!({
            "faceListId": "bare-list",
            "name": "bare"
        });

        let list: FaceList = serde_json::from_value(json_data).unwrap();

        assert_eq!(list.face_list_id, "bare-list");
        assert_eq!(list.user_data, None);
        assert!(list.persisted_faces.is_empty());
    }

    #[test]
    fn test_face_list_summary_deserialization() {
        let json_data = json!([
            { "faceListId": "a", "name": "first", "userData": "d1" },
            { "faceListId": "b", "name": "second" }
        ]);

        let lists: Vec<FaceListSummary> = serde_json::from_value(json_data).unwrap();

        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].face_list_id, "a");
        assert_eq!(lists[0].user_data.as_deref(), Some("d1"));
        assert_eq!(lists[1].user_data, None);
    }

    #[test]
    fn test_face_rectangle_display() {
        let rect = FaceRectangle {
            left: 10,
            top: 20,
            width: 100,
            height: 120,
        };

        assert_eq!(rect.to_string(), "10,20,100,120");
    }

    #[test]
    fn test_add_face_options_defaults() {
        let options = AddFaceOptions::default();
        assert_eq!(options.target_face, None);
        assert_eq!(options.user_data, None);
    }
}
