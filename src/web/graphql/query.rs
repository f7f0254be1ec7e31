use super::types::{parse_position, PostNode};
use crate::model::post::PostBmc;
use crate::model::ModelManager;
use async_graphql::{Context, Object, Result, ID};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn post(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<PostNode>> {
        let mm = ctx.data::<ModelManager>()?;
        let Some(position) = id.as_deref().and_then(|id| parse_position(id)) else {
            return Ok(None);
        };

        Ok(PostBmc::get(mm, position).await.map(PostNode::from))
    }

    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<PostNode>> {
        let mm = ctx.data::<ModelManager>()?;

        Ok(PostBmc::list(mm).await.into_iter().map(PostNode::from).collect())
    }
}
