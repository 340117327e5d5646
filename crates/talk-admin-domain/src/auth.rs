use serde::{Deserialize, Serialize};
use talk_admin_core::{AdminError, AdminResult};

/// Name of the cookie the backend issues at login.
pub const SESSION_COOKIE_NAME: &str = "SessionId";

/// Claims returned by `GET /auth/token/info`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    #[serde(default)]
    pub aud: String,
    #[serde(default)]
    pub exp: String,
    #[serde(default)]
    pub iat: String,
    #[serde(default)]
    pub iss: String,
    pub sub: String,
    #[serde(default)]
    pub jti: String,
    #[serde(rename = "displayID", default)]
    pub display_id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub is_registered: bool,
    #[serde(default)]
    pub is_email_verified: bool,
    #[serde(default)]
    pub org_type: Option<i32>,
    #[serde(default)]
    pub required_password_change: bool,
    #[serde(default)]
    pub organization_role: Option<String>,
    #[serde(default)]
    pub organization_code: Option<String>,
    #[serde(rename = "organizationID", default)]
    pub organization_id: Option<String>,
}

/// The signed-in administrator. Only users acting for an organization qualify.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    pub id: String,
    pub name: Option<String>,
    pub display_id: Option<String>,
    pub organization_code: String,
    pub organization_id: String,
    pub organization_role: Option<String>,
}

impl CurrentUser {
    pub fn from_token_info(info: TokenInfo) -> AdminResult<Self> {
        let organization_code = non_empty(info.organization_code);
        let organization_id = non_empty(info.organization_id);
        match (organization_code, organization_id) {
            (Some(organization_code), Some(organization_id)) => Ok(Self {
                id: info.sub,
                name: info.display_name,
                display_id: info.display_id,
                organization_code,
                organization_id,
                organization_role: info.organization_role,
            }),
            _ => Err(AdminError::Unauthenticated(
                "signed in without an organization; log in through an organization".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    pub code: String,
    #[serde(rename = "type", default)]
    pub org_type: i32,
    #[serde(default)]
    pub role_name: String,
    #[serde(default)]
    pub role: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganizationsResponse {
    #[serde(default)]
    pub organizations: Vec<Organization>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_json(extra: &str) -> String {
        format!(
            r#"{{"sub":"user-1","displayID":"hanako","displayName":"Hanako","isRegistered":true{}}}"#,
            extra
        )
    }

    #[test]
    fn test_current_user_requires_organization() {
        let info: TokenInfo = serde_json::from_str(&token_json(
            r#","organizationCode":"city","organizationID":"org-1","organizationRole":"admin""#,
        ))
        .unwrap();
        let user = CurrentUser::from_token_info(info).unwrap();
        assert_eq!(user.id, "user-1");
        assert_eq!(user.display_id.as_deref(), Some("hanako"));
        assert_eq!(user.organization_code, "city");
        assert_eq!(user.organization_role.as_deref(), Some("admin"));
    }

    #[test]
    fn test_current_user_without_organization() {
        let info: TokenInfo = serde_json::from_str(&token_json("")).unwrap();
        assert!(matches!(
            CurrentUser::from_token_info(info),
            Err(AdminError::Unauthenticated(_))
        ));

        let info: TokenInfo =
            serde_json::from_str(&token_json(r#","organizationCode":"city","organizationID":"""#))
                .unwrap();
        assert!(CurrentUser::from_token_info(info).is_err());
    }

    #[test]
    fn test_organizations_response() {
        let resp: OrganizationsResponse = serde_json::from_str(
            r#"{"organizations":[{"ID":"org-1","name":"City Hall","code":"city","type":1,"roleName":"Owner","role":10}]}"#,
        )
        .unwrap();
        assert_eq!(resp.organizations.len(), 1);
        assert_eq!(resp.organizations[0].role_name, "Owner");

        let empty: OrganizationsResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.organizations.is_empty());
    }
}
