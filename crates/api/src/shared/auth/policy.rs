use serde::{Deserialize, Serialize};

/// A Policy is set on a `User` and decides which actions it can and cannot take.
///
/// The `Policy` is created by the `Account` admin when creating the json web token
/// claims. Every `UseCase` a `User` can run declares the `Permission`s it needs,
/// and the request is rejected unless the `Policy` grants all of them.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Policy {
    /// `Permission`s allowed by the `Policy`
    pub allow: Option<Vec<Permission>>,
    /// `Permission`s rejected by the `Policy`. Rejections win over allowances.
    pub reject: Option<Vec<Permission>>,
}

impl Policy {
    /// Checks if this `Policy` grants every one of the `Permission`s
    pub fn authorize(&self, permissions: &[Permission]) -> bool {
        if permissions.is_empty() {
            return true;
        }

        if let Some(rejected) = &self.reject {
            if rejected
                .iter()
                .any(|p| *p == Permission::All || permissions.contains(p))
            {
                return false;
            }
        }

        match &self.allow {
            Some(allowed) if allowed.contains(&Permission::All) => true,
            Some(allowed) => permissions.iter().all(|p| allowed.contains(p)),
            None => false,
        }
    }
}

/// `Permission` are different kind of actions that can be performed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Permission {
    #[serde(rename = "*")]
    All,
    CreateListing,
    UpdateListing,
    DeleteListing,
    ManageAvailability,
    ManagePricing,
    CreateBooking,
    RespondToBooking,
    CancelBooking,
    CreateReview,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_policy_only_allows_unrestricted_actions() {
        let policy = Policy::default();
        assert!(policy.authorize(&[]));
        assert!(!policy.authorize(&[Permission::CreateBooking]));
    }

    #[test]
    fn rejections_win() {
        let policy = Policy {
            allow: Some(vec![Permission::All]),
            reject: Some(vec![Permission::DeleteListing]),
        };
        assert!(policy.authorize(&[Permission::CreateListing, Permission::UpdateListing]));
        assert!(!policy.authorize(&[Permission::UpdateListing, Permission::DeleteListing]));

        let policy = Policy {
            allow: Some(vec![Permission::CreateBooking]),
            reject: Some(vec![Permission::All]),
        };
        assert!(!policy.authorize(&[Permission::CreateBooking]));

        let policy = Policy {
            allow: Some(vec![Permission::CreateBooking]),
            reject: Some(vec![Permission::CreateBooking]),
        };
        assert!(!policy.authorize(&[Permission::CreateBooking]));
    }

    #[test]
    fn all_permissions_have_to_be_allowed() {
        let policy = Policy {
            allow: Some(vec![Permission::CreateBooking, Permission::CancelBooking]),
            reject: Some(Vec::new()),
        };
        assert!(policy.authorize(&[Permission::CreateBooking]));
        assert!(policy.authorize(&[Permission::CreateBooking, Permission::CancelBooking]));
        assert!(!policy.authorize(&[Permission::CreateBooking, Permission::CreateReview]));

        let policy = Policy {
            allow: Some(vec![Permission::All]),
            reject: None,
        };
        assert!(policy.authorize(&[Permission::RespondToBooking, Permission::ManagePricing]));
    }

    #[test]
    fn wildcard_is_serialized_as_star() {
        let policy: Policy =
            serde_json::from_str(r#"{"allow": ["*"], "reject": ["ManagePricing"]}"#).unwrap();
        assert_eq!(policy.allow, Some(vec![Permission::All]));
        assert_eq!(policy.reject, Some(vec![Permission::ManagePricing]));
    }
}
