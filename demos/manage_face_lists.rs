use oxfordface::{Client, Config};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Get API key from environment variable
    let api_key = env::var("OXFORD_FACE_API_KEY")
        .expect("OXFORD_FACE_API_KEY environment variable must be set");

    // Initialize the client
    let client = Client::new(Config {
        api_key,
        ..Default::default()
    })?;

    let face_lists = client.face_lists();
    let face_list_id = "example-friends";

    println!("Creating face list '{}'...", face_list_id);
    face_lists
        .create(face_list_id, "My friends", Some("created by example"))
        .await?;

    println!("Face lists in this subscription:");
    for entry in face_lists.list().await? {
        println!(
            "  {} - {} ({})",
            entry.face_list_id,
            entry.name,
            entry.user_data.as_deref().unwrap_or("no user data")
        );
    }

    println!("Renaming the list...");
    face_lists
        .update(face_list_id, "Close friends", Some("updated by example"))
        .await?;

    let list = face_lists.get(face_list_id).await?;
    println!(
        "Fetched '{}': name={}, {} stored faces",
        list.face_list_id,
        list.name,
        list.persisted_faces.len()
    );

    println!("Cleaning up...");
    face_lists.delete(face_list_id).await?;
    println!("Done.");

    Ok(())
}
