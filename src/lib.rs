//! Breed Viewer - dog breed catalog web service
//!
//! Proxies thedogapi.com behind an in-memory 24-hour cache and serves breed
//! listings with an optional 3D model per breed.

pub mod breed_models;
pub mod cache;
pub mod dogapi;
pub mod error;
pub mod web;

pub use cache::BreedCache;
pub use dogapi::{Breed, BreedImage, DogApi};
pub use error::{ApiError, ApiResult};
