pub mod landing;
pub mod profile;
