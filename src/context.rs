//! List Context
//!
//! Maps the entity kind declared on the list container to its REST endpoint.

use std::fmt;
use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use thiserror::Error;

/// Characters escaped inside a single URI path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Escape a value for use as one path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Default list operation
pub const MODE_ENUMERATE: &str = "enumerate";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("no endpoint mapped for context {0:?}")]
    Unmapped(String),
    #[error("list container is missing the `{0}` attribute")]
    MissingAttribute(&'static str),
}

/// Entity kind selecting endpoint and render template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummitContext {
    Collections,
    Projects,
    Repositories,
    Groups,
    Users,
    Recipes,
    Builders,
    Endpoints,
    Tasks,
}

impl SummitContext {
    pub const ALL: [SummitContext; 9] = [
        SummitContext::Collections,
        SummitContext::Projects,
        SummitContext::Repositories,
        SummitContext::Groups,
        SummitContext::Users,
        SummitContext::Recipes,
        SummitContext::Builders,
        SummitContext::Endpoints,
        SummitContext::Tasks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SummitContext::Collections => "collections",
            SummitContext::Projects => "projects",
            SummitContext::Repositories => "repositories",
            SummitContext::Groups => "groups",
            SummitContext::Users => "users",
            SummitContext::Recipes => "recipes",
            SummitContext::Builders => "builders",
            SummitContext::Endpoints => "endpoints",
            SummitContext::Tasks => "tasks",
        }
    }

    /// Base URI of the context's REST collection
    pub fn endpoint(&self) -> &'static str {
        match self {
            SummitContext::Collections => "/api/v1/collections",
            SummitContext::Projects => "/api/v1/projects",
            SummitContext::Repositories => "/api/v1/repos",
            SummitContext::Groups => "/api/v1/groups",
            SummitContext::Users => "/api/v1/users",
            SummitContext::Recipes => "/api/v1/recipes",
            SummitContext::Builders => "/api/v1/builders",
            SummitContext::Endpoints => "/api/v1/endpoints",
            SummitContext::Tasks => "/api/v1/tasks",
        }
    }

    pub fn create_uri(&self) -> String {
        format!("{}/create", self.endpoint())
    }
}

impl FromStr for SummitContext {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SummitContext::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| ContextError::Unmapped(s.to_string()))
    }
}

impl fmt::Display for SummitContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved `summit:context` / `summit:mode` / `summit:parent` of a list container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTarget {
    pub context: SummitContext,
    pub mode: String,
    pub parent: Option<String>,
}

impl ListTarget {
    /// Resolve the raw attribute values read from the container
    pub fn resolve(
        context: Option<String>,
        mode: Option<String>,
        parent: Option<String>,
    ) -> Result<Self, ContextError> {
        let context = context.ok_or(ContextError::MissingAttribute("summit:context"))?;
        let mode = mode
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| MODE_ENUMERATE.to_string());
        Ok(Self {
            context: context.parse()?,
            mode,
            parent: parent.filter(|p| !p.trim().is_empty()),
        })
    }

    /// `base/mode[/parent][?pageNumber=N]`
    pub fn build_uri(&self, mode: &str, page_number: u32) -> String {
        let mut uri = format!("{}/{}", self.context.endpoint(), mode);
        if let Some(parent) = &self.parent {
            uri.push('/');
            uri.push_str(&encode_segment(parent));
        }
        if page_number != 0 {
            uri.push_str(&format!("?pageNumber={}", page_number));
        }
        uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(context: SummitContext, parent: Option<&str>) -> ListTarget {
        ListTarget {
            context,
            mode: MODE_ENUMERATE.to_string(),
            parent: parent.map(str::to_string),
        }
    }

    #[test]
    fn test_enumerate_uri_for_every_context() {
        for context in SummitContext::ALL {
            let t = target(context, None);
            assert_eq!(t.build_uri("enumerate", 0), format!("{}/enumerate", context.endpoint()));
            assert_eq!(
                t.build_uri("enumerate", 4),
                format!("{}/enumerate?pageNumber=4", context.endpoint())
            );
        }
    }

    #[test]
    fn test_endpoint_mapping() {
        assert_eq!(SummitContext::Repositories.endpoint(), "/api/v1/repos");
        assert_eq!(SummitContext::Projects.endpoint(), "/api/v1/projects");
        assert_eq!(SummitContext::Tasks.create_uri(), "/api/v1/tasks/create");
    }

    #[test]
    fn test_parent_scoped_uri() {
        let t = target(SummitContext::Repositories, Some("base system"));
        assert_eq!(t.build_uri("enumerate", 0), "/api/v1/repos/enumerate/base%20system");
        assert_eq!(t.build_uri("enumerate", 2), "/api/v1/repos/enumerate/base%20system?pageNumber=2");
    }

    #[test]
    fn test_resolve() {
        let t = ListTarget::resolve(Some("builders".into()), None, Some("".into())).unwrap();
        assert_eq!(t.context, SummitContext::Builders);
        assert_eq!(t.mode, "enumerate");
        assert_eq!(t.parent, None);

        assert_eq!(
            ListTarget::resolve(Some("widgets".into()), None, None),
            Err(ContextError::Unmapped("widgets".into()))
        );
        assert_eq!(
            ListTarget::resolve(None, None, None),
            Err(ContextError::MissingAttribute("summit:context"))
        );
    }
}
