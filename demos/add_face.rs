use oxfordface::{AddFaceOptions, Client, Config, ImageOptions};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Get API key from environment variable
    let api_key = env::var("OXFORD_FACE_API_KEY")
        .expect("OXFORD_FACE_API_KEY environment variable must be set");

    let client = Client::new(Config {
        api_key,
        ..Default::default()
    })?;

    let face_lists = client.face_lists();
    let face_list_id = "example-faces";

    // Path to the image to store - make sure this file exists
    let image_path = "files/face1.jpg";

    println!("Checking if file exists at path: {}", image_path);
    if !std::path::Path::new(image_path).exists() {
        println!("Warning: File does not exist at path: {}", image_path);
        println!("Please provide a valid path to an existing image file.");
        return Ok(());
    }

    println!("Creating face list '{}'...", face_list_id);
    face_lists
        .create(face_list_id, "Example faces", None)
        .await?;

    println!("Adding face from {}...", image_path);
    let added = face_lists
        .add_face(
            face_list_id,
            ImageOptions::from_path(image_path),
            AddFaceOptions {
                // Use a rectangle from the detection endpoint when the
                // image contains more than one face
                target_face: None,
                user_data: Some("added by example".to_string()),
            },
        )
        .await?;

    println!("Stored as persisted face {}", added.persisted_face_id);

    println!("Removing the face again...");
    face_lists
        .delete_face(face_list_id, &added.persisted_face_id)
        .await?;

    println!("Cleaning up...");
    face_lists.delete(face_list_id).await?;
    println!("Done.");

    Ok(())
}
