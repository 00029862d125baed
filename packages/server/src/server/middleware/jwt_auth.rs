use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::{debug, info, warn};

use crate::common::MemberId;
use crate::domains::member::models::Member;
use crate::kernel::ServerDeps;

/// The signed-in member behind a request.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub member_id: MemberId,
    pub login: String,
    pub is_coordinator: bool,
}

impl From<&Member> for AuthUser {
    fn from(member: &Member) -> Self {
        Self {
            member_id: member.id,
            login: member.login.clone(),
            is_coordinator: member.is_coordinator(),
        }
    }
}

/// Attach an [`AuthUser`] when the request carries a valid bearer token
/// whose member still exists.
///
/// The role is read from the store on every request, so a demoted or deleted
/// coordinator loses access before the token expires. Missing, malformed and
/// expired tokens all leave the request anonymous; handlers decide whether
/// that is acceptable.
pub async fn jwt_auth_middleware(
    State(deps): State<Arc<ServerDeps>>,
    mut request: Request,
    next: Next,
) -> Response {
    match session_user(request.headers(), &deps).await {
        Some(user) => {
            debug!(member_id = %user.member_id, coordinator = user.is_coordinator, "session accepted");
            request.extensions_mut().insert(user);
        }
        None => debug!("anonymous request"),
    }

    next.run(request).await
}

async fn session_user(headers: &HeaderMap, deps: &ServerDeps) -> Option<AuthUser> {
    let token = bearer_token(headers)?;
    let claims = match deps.jwt_service.verify(token) {
        Ok(claims) => claims,
        Err(e) => {
            debug!(error = %e, "rejected session token");
            return None;
        }
    };

    match deps.members.find_by_id(claims.sub).await {
        Ok(Some(member)) => Some(AuthUser::from(&member)),
        Ok(None) => {
            info!(member_id = %claims.sub, "session token for a removed member");
            None
        }
        Err(e) => {
            warn!(member_id = %claims.sub, error = %e, "could not load session member");
            None
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    scheme
        .eq_ignore_ascii_case("bearer")
        .then(|| token.trim())
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::member::models::member::fixtures::sample_fields;
    use crate::domains::member::models::Role;
    use crate::kernel::test_dependencies::{InMemoryMemberStore, TestDependencies};
    use axum::http::HeaderValue;

    fn headers(authorization: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(authorization).unwrap());
        headers
    }

    fn deps_with_coordinator() -> (ServerDeps, Member) {
        let store = InMemoryMemberStore::new().with_member(sample_fields("MARIA", "Maria José"));
        let mut member = store.find_login("MARIA").unwrap();
        let deps = TestDependencies::new().mock_members(store).into_server_deps();
        member.role = Role::Coordenador;
        (deps, member)
    }

    #[test]
    fn bearer_scheme_is_required() {
        assert_eq!(bearer_token(&headers("Bearer abc")), Some("abc"));
        assert_eq!(bearer_token(&headers("bearer  abc ")), Some("abc"));
        assert_eq!(bearer_token(&headers("abc")), None);
        assert_eq!(bearer_token(&headers("Basic abc")), None);
        assert_eq!(bearer_token(&headers("Bearer ")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[tokio::test]
    async fn role_comes_from_the_store_not_the_token() {
        let (deps, member) = deps_with_coordinator();
        // Signed while the member was a coordinator; the stored row says Agente
        let token = deps.jwt_service.issue(&member).unwrap();

        let user = session_user(&headers(&format!("Bearer {token}")), &deps)
            .await
            .unwrap();
        assert_eq!(user.member_id, member.id);
        assert_eq!(user.login, "MARIA");
        assert!(!user.is_coordinator);
    }

    #[tokio::test]
    async fn removed_member_is_anonymous() {
        let (deps, member) = deps_with_coordinator();
        let token = deps.jwt_service.issue(&member).unwrap();
        assert!(deps.members.delete(member.id).await.unwrap());

        assert!(session_user(&headers(&format!("Bearer {token}")), &deps)
            .await
            .is_none());
    }

    #[tokio::test]
    async fn bad_token_stays_anonymous() {
        let (deps, _) = deps_with_coordinator();
        assert!(session_user(&headers("Bearer invalido"), &deps).await.is_none());
    }
}
