
use anyhow::Result;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<()> {
    let hc = httpc_test::new_client("http://localhost:4000")?;

    hc.do_post(
        "/graphql",
        json!({
            "query": "{ posts { id car manufacturer } }"
        }),
    )
    .await?
    .print()
    .await?;

    let req_submit = hc.do_post(
        "/graphql",
        json!({
            "query": "mutation Submit($input: PostInput!) { submitPost(input: $input) { id car manufacturer } }",
            "variables": {
                "input": { "id": 1, "car": "Camaro", "manufacturer": "Chevrolet" }
            }
        }),
    );
    req_submit.await?.print().await?;

    hc.do_post(
        "/graphql",
        json!({
            "query": "{ post(id: \"1\") { id car manufacturer } }"
        }),
    )
    .await?
    .print()
    .await?;

    hc.do_get("/").await?.print().await?;

    Ok(())
}
