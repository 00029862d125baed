//! GraphQL schema definition.

use super::context::GraphQLContext;
use juniper::{EmptySubscription, FieldResult, RootNode};

use crate::domains::address::{data::AddressData, edges as address_edges};
use crate::domains::auth::{data::AuthPayload, edges as auth_edges};
use crate::domains::diagnostics::{data::AboutData, edges as diagnostics_edges};
use crate::domains::member::data::{
    DeleteMemberPayload, MemberData, MemberFilterInput, MemberInput, SaveMemberPayload,
};
use crate::domains::member::edges as member_edges;
use crate::domains::member::models::Sector;
use crate::domains::messaging::{data::WhatsappBatchData, edges as messaging_edges};
use crate::domains::reports::{data::ReportSummaryData, edges as report_edges};

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    // =========================================================================
    // Session
    // =========================================================================

    /// The signed-in member, or null for anonymous requests
    async fn me(ctx: &GraphQLContext) -> FieldResult<Option<MemberData>> {
        auth_edges::me(ctx).await
    }

    // =========================================================================
    // Member Queries
    // =========================================================================

    /// A single member. Agents may only read their own record.
    async fn member(ctx: &GraphQLContext, id: String) -> FieldResult<MemberData> {
        member_edges::get_member(id, ctx).await
    }

    /// Members ordered by name. Agents only see themselves.
    async fn members(
        ctx: &GraphQLContext,
        filter: Option<MemberFilterInput>,
    ) -> FieldResult<Vec<MemberData>> {
        member_edges::get_members(filter, ctx).await
    }

    /// Sectors in use, for the filter dropdown
    async fn member_sectors(ctx: &GraphQLContext) -> FieldResult<Vec<Sector>> {
        member_edges::get_member_sectors(ctx).await
    }

    // =========================================================================
    // Reports & Messaging (coordinators)
    // =========================================================================

    async fn report_summary(ctx: &GraphQLContext) -> FieldResult<ReportSummaryData> {
        report_edges::report_summary(ctx).await
    }

    /// Click-to-chat links for the filtered members, or only for `ids`
    /// when given.
    ///
    /// `{nome}` in the template is replaced with each member's first name.
    async fn whatsapp_links(
        ctx: &GraphQLContext,
        filter: Option<MemberFilterInput>,
        ids: Option<Vec<String>>,
        template: Option<String>,
    ) -> FieldResult<WhatsappBatchData> {
        messaging_edges::whatsapp_links(filter, ids, template, ctx).await
    }

    // =========================================================================
    // Utilities
    // =========================================================================

    /// Address for a CEP, used to prefill the registration form
    async fn lookup_cep(ctx: &GraphQLContext, cep: String) -> FieldResult<AddressData> {
        address_edges::lookup_cep(cep, ctx).await
    }

    fn about() -> AboutData {
        diagnostics_edges::about()
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    /// Sign in with login and birth date (`YYYY-MM-DD` or `DD/MM/YYYY`)
    async fn login(
        ctx: &GraphQLContext,
        login: String,
        birth_date: String,
    ) -> FieldResult<AuthPayload> {
        auth_edges::login(login, birth_date, ctx).await
    }

    /// Public self-registration. Signs the new agent in on success.
    async fn register(ctx: &GraphQLContext, input: MemberInput) -> FieldResult<AuthPayload> {
        member_edges::register_member(input, ctx).await
    }

    /// Create (no id) or update a member
    async fn save_member(
        ctx: &GraphQLContext,
        id: Option<String>,
        input: MemberInput,
    ) -> FieldResult<SaveMemberPayload> {
        member_edges::save_member(id, input, ctx).await
    }

    async fn delete_member(ctx: &GraphQLContext, id: String) -> FieldResult<DeleteMemberPayload> {
        member_edges::delete_member(id, ctx).await
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
