use juniper::FieldResult;

use crate::domains::member::data::MemberData;
use crate::kernel::ErrorContext;
use crate::server::graphql::context::GraphQLContext;

/// The signed-in member, or null for anonymous callers
///
/// Also null when the token outlived the record it points to.
pub async fn me(ctx: &GraphQLContext) -> FieldResult<Option<MemberData>> {
    let Some(user) = &ctx.auth_user else {
        return Ok(None);
    };

    let member = ctx
        .deps
        .members
        .find_by_id(user.member_id)
        .await
        .map_err(|e| ctx.fail(ErrorContext::FetchData, e))?;

    Ok(member.map(MemberData::from))
}
