use juniper::FieldResult;
use tracing::info;

use crate::domains::auth::data::AuthPayload;
use crate::domains::member::actions;
use crate::domains::member::data::{
    parse_member_id, DeleteMemberPayload, MemberData, MemberInput, SaveMemberPayload,
};
use crate::domains::member::errors::{MemberError, SaveError};
use crate::kernel::ErrorContext;
use crate::server::graphql::context::GraphQLContext;

/// Self-registration, followed by automatic sign-in
pub async fn register_member(input: MemberInput, ctx: &GraphQLContext) -> FieldResult<AuthPayload> {
    info!("register_member mutation called for login: {}", input.login.trim());

    actions::register_member(input, &ctx.deps)
        .await
        .map(AuthPayload::from)
        .map_err(|e| ctx.fail(ErrorContext::Register, e))
}

/// Create (no id) or update a member
pub async fn save_member(
    id: Option<String>,
    input: MemberInput,
    ctx: &GraphQLContext,
) -> FieldResult<SaveMemberPayload> {
    info!("save_member mutation called: {:?}", id);

    let result: Result<_, MemberError> = async {
        let actor = ctx.actor()?;
        let member_id = id.as_deref().map(parse_member_id).transpose()?;
        actions::save_member(actor, member_id, input, &ctx.deps).await
    }
    .await;

    result
        .map(|member| SaveMemberPayload {
            member: MemberData::from(member),
            message: actions::SAVED_MESSAGE.to_string(),
        })
        .map_err(|e| ctx.fail(ErrorContext::SaveAgent, SaveError::from(e)))
}

pub async fn delete_member(id: String, ctx: &GraphQLContext) -> FieldResult<DeleteMemberPayload> {
    info!("delete_member mutation called: {}", id);

    let result: Result<_, MemberError> = async {
        let actor = ctx.actor()?;
        let member_id = parse_member_id(&id)?;
        actions::delete_member(actor, member_id, &ctx.deps).await
    }
    .await;

    result
        .map(|()| DeleteMemberPayload {
            id,
            message: actions::DELETED_MESSAGE.to_string(),
        })
        .map_err(|e| ctx.fail(ErrorContext::DeleteAgent, e))
}
