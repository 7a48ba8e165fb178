// src/models/team.rs - Team members, roles, and permission grouping

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    Active,
    Inactive,
}

impl MemberStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role_id: u64,
    #[serde(default)]
    pub role_name: Option<String>,
    pub status: MemberStatus,
}

impl TeamMember {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A role holds a flat set of `"<group>.<action>"` permission strings.
/// Grouping by prefix is presentation-only, not a stored structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Groups flat permission strings by the prefix before the dot, preserving
/// first-seen group order. Strings without a dot land under "other".
pub fn group_permissions(permissions: &[String]) -> Vec<(String, Vec<String>)> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();
    for perm in permissions {
        let (group, action) = match perm.split_once('.') {
            Some((g, a)) => (g.to_string(), a.to_string()),
            None => ("other".to_string(), perm.clone()),
        };
        match groups.iter_mut().find(|(name, _)| *name == group) {
            Some((_, actions)) => actions.push(action),
            None => groups.push((group, vec![action])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perms(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_group_permissions_by_prefix() {
        let grouped = group_permissions(&perms(&[
            "products.read",
            "products.write",
            "orders.read",
            "products.delete",
        ]));

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, "products");
        assert_eq!(grouped[0].1, perms(&["read", "write", "delete"]));
        assert_eq!(grouped[1].0, "orders");
        assert_eq!(grouped[1].1, perms(&["read"]));
    }

    #[test]
    fn test_dotless_permissions_go_to_other() {
        let grouped = group_permissions(&perms(&["superuser"]));
        assert_eq!(grouped, vec![("other".to_string(), perms(&["superuser"]))]);
    }

    #[test]
    fn test_empty_permissions() {
        assert!(group_permissions(&[]).is_empty());
    }
}
