use crate::model::post::{Post, PostForUpsert};
use async_graphql::{InputObject, SimpleObject, ID};

#[derive(Debug, SimpleObject)]
#[graphql(name = "Post")]
pub struct PostNode {
    /// Current position in the store. Shifts if earlier records move.
    pub id: Option<ID>,
    pub car: Option<String>,
    pub manufacturer: Option<String>,
}

impl From<Post> for PostNode {
    fn from(post: Post) -> Self {
        Self {
            id: Some(ID::from(post.id.to_string())),
            car: Some(post.car),
            manufacturer: Some(post.manufacturer),
        }
    }
}

#[derive(Debug, InputObject)]
pub struct PostInput {
    pub id: Option<ID>,
    pub car: String,
    pub manufacturer: String,
}

impl From<PostInput> for PostForUpsert {
    fn from(input: PostInput) -> Self {
        Self {
            id: input.id.as_deref().and_then(|id| parse_position(id)),
            car: input.car,
            manufacturer: input.manufacturer,
        }
    }
}

/// `ID` is a string on the wire. Anything that is not an integer, padding
/// included, has no position.
pub fn parse_position(id: &str) -> Option<i64> {
    id.parse().ok()
}
