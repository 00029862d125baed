//! Runs operations straight against the schema, skipping HTTP.

use std::sync::Arc;

use juniper::Variables;
use serde_json::Value;
use server_core::common::MemberId;
use server_core::kernel::ServerDeps;
use server_core::server::graphql::{create_schema, GraphQLContext, Schema};
use server_core::server::middleware::AuthUser;

pub struct GraphQLClient {
    schema: Schema,
    context: GraphQLContext,
}

/// Data plus the user-facing messages of any field errors.
#[derive(Debug)]
pub struct GraphQLResult {
    pub data: Value,
    pub errors: Vec<String>,
}

impl GraphQLResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn unwrap(self) -> Value {
        assert!(self.errors.is_empty(), "GraphQL errors: {:?}", self.errors);
        self.data
    }

    /// Value at a dotted path, e.g. `login.member.fullName`. Missing keys
    /// come back as `Value::Null`.
    pub fn get(&self, path: &str) -> Value {
        let pointer = format!("/{}", path.replace('.', "/"));
        self.data.pointer(&pointer).cloned().unwrap_or(Value::Null)
    }
}

/// Variables from a JSON object, for inputs the `vars!` macro cannot express
pub fn json_vars(value: Value) -> Variables {
    serde_json::from_value(value).expect("variables must be a JSON object")
}

impl GraphQLClient {
    pub fn new(deps: Arc<ServerDeps>) -> Self {
        Self::with_context(GraphQLContext::new(deps, None))
    }

    /// Client signed in as `member_id`.
    pub fn with_auth_user(deps: Arc<ServerDeps>, member_id: MemberId, is_coordinator: bool) -> Self {
        let user = AuthUser {
            member_id,
            login: "TESTE".to_string(),
            is_coordinator,
        };
        Self::with_context(GraphQLContext::new(deps, Some(user)))
    }

    pub fn with_context(context: GraphQLContext) -> Self {
        Self {
            schema: create_schema(),
            context,
        }
    }

    pub async fn execute(&self, document: &str) -> GraphQLResult {
        self.execute_with_vars(document, Variables::new()).await
    }

    pub async fn execute_with_vars(&self, document: &str, variables: Variables) -> GraphQLResult {
        let (value, errors) = juniper::execute(document, None, &self.schema, &variables, &self.context)
            .await
            .unwrap_or_else(|e| panic!("document rejected before execution: {e:?}"));

        GraphQLResult {
            data: serde_json::to_value(&value).expect("result serializes"),
            errors: errors
                .iter()
                .map(|e| e.error().message().to_string())
                .collect(),
        }
    }

    pub async fn query(&self, document: &str) -> Value {
        self.execute(document).await.unwrap()
    }

    pub async fn query_with_vars(&self, document: &str, variables: Variables) -> Value {
        self.execute_with_vars(document, variables).await.unwrap()
    }
}
