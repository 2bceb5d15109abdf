mod aabb2;
mod bounding_sphere2;
mod rotatable_aabb2;
