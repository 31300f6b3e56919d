mod vector;
mod aabb;

pub use vector::Vector2;
pub use aabb::Aabb;
