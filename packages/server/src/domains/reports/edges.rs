use juniper::FieldResult;

use crate::domains::reports::{actions, data::ReportSummaryData};
use crate::kernel::ErrorContext;
use crate::server::graphql::context::GraphQLContext;

pub async fn report_summary(ctx: &GraphQLContext) -> FieldResult<ReportSummaryData> {
    let actor = ctx.actor().map_err(|e| ctx.fail(ErrorContext::FetchData, e))?;

    actions::report_summary(actor, &ctx.deps)
        .await
        .map(ReportSummaryData::from)
        .map_err(|e| ctx.fail(ErrorContext::FetchData, e))
}
