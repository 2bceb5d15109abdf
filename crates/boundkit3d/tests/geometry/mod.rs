mod aabb_scale;
mod rotatable_aabb3;
