use juniper::FieldResult;
use tracing::info;

use crate::domains::member::actions;
use crate::domains::member::data::{parse_member_id, MemberData, MemberFilterInput};
use crate::domains::member::errors::MemberError;
use crate::domains::member::models::Sector;
use crate::kernel::ErrorContext;
use crate::server::graphql::context::GraphQLContext;

/// Get member by ID
pub async fn get_member(id: String, ctx: &GraphQLContext) -> FieldResult<MemberData> {
    info!("get_member query called: {}", id);

    let result: Result<_, MemberError> = async {
        let actor = ctx.actor()?;
        let member_id = parse_member_id(&id)?;
        actions::get_member(actor, member_id, &ctx.deps).await
    }
    .await;

    result
        .map(MemberData::from)
        .map_err(|e| ctx.fail(ErrorContext::FetchData, e))
}

/// Members visible to the caller, filtered
pub async fn get_members(
    filter: Option<MemberFilterInput>,
    ctx: &GraphQLContext,
) -> FieldResult<Vec<MemberData>> {
    info!("get_members query called");

    let filter = filter.unwrap_or_default().into();
    let actor = ctx
        .actor()
        .map_err(|e| ctx.fail(ErrorContext::FetchData, e))?;

    let members = actions::list_members(actor, &filter, &ctx.deps)
        .await
        .map_err(|e| ctx.fail(ErrorContext::FetchData, e))?;

    Ok(members.into_iter().map(MemberData::from).collect())
}

/// Sectors for the list filter dropdown
pub async fn get_member_sectors(ctx: &GraphQLContext) -> FieldResult<Vec<Sector>> {
    let actor = ctx
        .actor()
        .map_err(|e| ctx.fail(ErrorContext::FetchData, e))?;

    actions::member_sectors(actor, &ctx.deps)
        .await
        .map_err(|e| ctx.fail(ErrorContext::FetchData, e))
}
