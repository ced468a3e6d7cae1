pub mod entity;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{NewPost, Post, PostStats, PostUpdate};
pub use repository::{PostReadRepository, PostWriteRepository};
pub use specifications::{PostFilter, newest_first};
pub use value_objects::{
    Category, FeaturedImage, PostContent, PostId, PostSlug, PostTitle, Tags,
};
