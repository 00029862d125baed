//! List filtering shared by the member list and the exports.

use serde::Deserialize;

use super::models::{MaritalStatus, Member, Role, Sector};

/// Search term plus optional exact-match filters. Unset means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberFilter {
    pub search: Option<String>,
    pub sector: Option<Sector>,
    pub marital_status: Option<MaritalStatus>,
    pub role: Option<Role>,
}

impl MemberFilter {
    /// Search matches the full name (case-insensitive) or the phone.
    pub fn matches(&self, member: &Member) -> bool {
        let search_match = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                member.full_name.to_lowercase().contains(&term.to_lowercase())
                    || member.phone.contains(term)
            }
        };

        search_match
            && self.sector.map_or(true, |s| member.sector == s)
            && self.marital_status.map_or(true, |m| member.marital_status == m)
            && self.role.map_or(true, |r| member.role == r)
    }

    pub fn apply(&self, members: Vec<Member>) -> Vec<Member> {
        members.into_iter().filter(|m| self.matches(m)).collect()
    }
}

/// Filter as it arrives in an export query string.
///
/// Enum values accept either the label or the GraphQL name; empty strings
/// mean "all".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberFilterQuery {
    pub search: Option<String>,
    pub sector: Option<String>,
    pub marital_status: Option<String>,
    pub role: Option<String>,
}

impl MemberFilterQuery {
    pub fn into_filter(self) -> Result<MemberFilter, super::models::ParseLabelError> {
        fn parse<T: std::str::FromStr>(value: Option<String>) -> Result<Option<T>, T::Err> {
            match value.as_deref().map(str::trim) {
                None | Some("") => Ok(None),
                Some(v) => v.parse().map(Some),
            }
        }

        Ok(MemberFilter {
            search: self.search,
            sector: parse(self.sector)?,
            marital_status: parse(self.marital_status)?,
            role: parse(self.role)?,
        })
    }
}

/// Sectors present in a list, sorted by label.
pub fn distinct_sectors(members: &[Member]) -> Vec<Sector> {
    let mut sectors: Vec<Sector> = members.iter().map(|m| m.sector).collect();
    sectors.sort_by(|a, b| a.label().cmp(b.label()));
    sectors.dedup();
    sectors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::member::models::member::fixtures::sample_member;

    fn members() -> Vec<Member> {
        let mut ana = sample_member("ANA", "Ana Paula Souza");
        ana.phone = "(11) 91111-2222".to_string();
        ana.sector = Sector::ServicoAVida;

        let mut bruno = sample_member("BRUNO", "Bruno Lima");
        bruno.phone = "(21) 93333-4444".to_string();
        bruno.marital_status = MaritalStatus::Casado;
        bruno.role = Role::Coordenador;

        let carla = sample_member("CARLA", "Carla Dias");
        vec![ana, bruno, carla]
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        assert_eq!(MemberFilter::default().apply(members()).len(), 3);
    }

    #[test]
    fn test_search_by_name_or_phone() {
        let by_name = MemberFilter {
            search: Some("paula".to_string()),
            ..Default::default()
        };
        assert_eq!(by_name.apply(members())[0].login, "ANA");

        let by_phone = MemberFilter {
            search: Some("93333".to_string()),
            ..Default::default()
        };
        assert_eq!(by_phone.apply(members())[0].login, "BRUNO");
    }

    #[test]
    fn test_filters_combine() {
        let filter = MemberFilter {
            marital_status: Some(MaritalStatus::Casado),
            role: Some(Role::Agente),
            ..Default::default()
        };
        assert!(filter.apply(members()).is_empty());
    }

    #[test]
    fn test_query_parses_labels_and_blank_values() {
        let query = MemberFilterQuery {
            search: None,
            sector: Some("Serviço à Vida".to_string()),
            marital_status: Some("".to_string()),
            role: Some("coordenador".to_string()),
        };
        let filter = query.into_filter().unwrap();
        assert_eq!(filter.sector, Some(Sector::ServicoAVida));
        assert_eq!(filter.marital_status, None);
        assert_eq!(filter.role, Some(Role::Coordenador));
    }

    #[test]
    fn test_distinct_sectors_sorted() {
        let sectors = distinct_sectors(&members());
        assert_eq!(sectors, vec![Sector::PreMatrimonial, Sector::ServicoAVida]);
    }
}
