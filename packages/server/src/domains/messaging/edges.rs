use juniper::FieldResult;

use crate::domains::member::data::{parse_member_id, MemberFilterInput};
use crate::domains::messaging::{actions, data::WhatsappBatchData};
use crate::kernel::ErrorContext;
use crate::server::graphql::context::GraphQLContext;

/// Bulk WhatsApp links for the filtered member list, optionally narrowed to
/// the ids picked in the list
pub async fn whatsapp_links(
    filter: Option<MemberFilterInput>,
    ids: Option<Vec<String>>,
    template: Option<String>,
    ctx: &GraphQLContext,
) -> FieldResult<WhatsappBatchData> {
    let filter = filter.unwrap_or_default().into();
    let actor = ctx.actor().map_err(|e| ctx.fail(ErrorContext::General, e))?;
    let selected = ids
        .map(|ids| ids.iter().map(|id| parse_member_id(id)).collect::<Result<Vec<_>, _>>())
        .transpose()
        .map_err(|e| ctx.fail(ErrorContext::General, e))?;

    actions::whatsapp_links(actor, &filter, selected.as_deref(), template.as_deref(), &ctx.deps)
        .await
        .map(WhatsappBatchData::from)
        .map_err(|e| ctx.fail(ErrorContext::General, e))
}
