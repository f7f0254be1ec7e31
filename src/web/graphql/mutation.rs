use super::types::{PostInput, PostNode};
use crate::model::post::PostBmc;
use crate::model::ModelManager;
use async_graphql::{Context, Object, Result};
use tracing::debug;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Replaces the post at `input.id` when it exists, otherwise appends.
    async fn submit_post(&self, ctx: &Context<'_>, input: PostInput) -> Result<Option<PostNode>> {
        debug!("{:<12} - submit_post {input:?}", "GRAPHQL");
        let mm = ctx.data::<ModelManager>()?;

        Ok(Some(PostBmc::upsert(mm, input.into()).await.into()))
    }
}
