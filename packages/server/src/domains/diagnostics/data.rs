use juniper::GraphQLObject;

use crate::domains::diagnostics::actions::About;

#[derive(Debug, Clone, GraphQLObject)]
pub struct AboutData {
    pub name: String,
    pub version: String,
    pub description: String,
}

impl From<About> for AboutData {
    fn from(about: About) -> Self {
        Self {
            name: about.name.to_string(),
            version: about.version.to_string(),
            description: about.description.to_string(),
        }
    }
}
