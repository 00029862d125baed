use juniper::GraphQLObject;

use crate::domains::auth::actions::LoginOutcome;
use crate::domains::member::data::MemberData;

/// Session issued after login or registration
#[derive(Debug, Clone, GraphQLObject)]
pub struct AuthPayload {
    /// Bearer token, valid for 24 hours
    pub token: String,
    pub member: MemberData,
    /// "Bem-vindo, <first name>!"
    pub welcome_message: String,
}

impl From<LoginOutcome> for AuthPayload {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            token: outcome.token,
            member: MemberData::from(outcome.member),
            welcome_message: outcome.welcome_message,
        }
    }
}
