//! # Oxford Face SDK
//!
//! Rust client for the Project Oxford Face API. The crate covers the face
//! list endpoint family: create and manage face lists, and add or remove
//! the faces persisted inside them.
//!
//! ## Basic Usage Example
//!
//! ```no_run
//! use oxfordface::{Client, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Initialize with API key
//!     let client = Client::new(Config {
//!         api_key: std::env::var("OXFORD_FACE_API_KEY")?,
//!         ..Default::default()
//!     })?;
//!
//!     // Create a face list and read it back
//!     let face_lists = client.face_lists();
//!     face_lists.create("friends", "My friends", Some("created by example")).await?;
//!
//!     let list = face_lists.get("friends").await?;
//!     println!("{}: {}", list.face_list_id, list.name);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Adding a Face From a Local Image
//!
//! ```no_run
//! use oxfordface::{AddFaceOptions, Client, Config, ImageOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(Config {
//!         api_key: std::env::var("OXFORD_FACE_API_KEY")?,
//!         ..Default::default()
//!     })?;
//!
//!     let added = client
//!         .face_lists()
//!         .add_face(
//!             "friends",
//!             ImageOptions::from_path("./face1.jpg"),
//!             AddFaceOptions {
//!                 target_face: Some("10,20,100,100".to_string()),
//!                 user_data: Some("front door camera".to_string()),
//!             },
//!         )
//!         .await?;
//!
//!     println!("Stored as {}", added.persisted_face_id);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod content;
mod error;
mod face_list;
mod http;
mod models;
mod utils;

// Re-exports
pub use client::Client;
pub use config::Config;
pub use content::ImageOptions;
pub use error::{Error, Result};
pub use face_list::FaceLists;
pub use models::{
    AddFaceOptions, AddedFace, FaceList, FaceListSummary, FaceRectangle, PersistedFace,
};
