use juniper::FieldResult;

use crate::domains::auth::actions;
use crate::domains::auth::data::AuthPayload;
use crate::kernel::ErrorContext;
use crate::server::graphql::context::GraphQLContext;

/// Sign in with login + birth date and receive a JWT
pub async fn login(
    login: String,
    birth_date: String,
    ctx: &GraphQLContext,
) -> FieldResult<AuthPayload> {
    actions::login(&login, &birth_date, &ctx.deps)
        .await
        .map(AuthPayload::from)
        .map_err(|e| ctx.fail(ErrorContext::Login, e))
}
