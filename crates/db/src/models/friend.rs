//! Friend model and DTOs.

use pripals_core::league::Rankable;
use pripals_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `friends` table.
///
/// `points` is only ever written through `FriendRepo::apply_point_change`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    #[serde(skip)]
    pub seq: i64,
    pub id: EntityId,
    pub name: String,
    pub profile_picture: String,
    pub points: i64,
    pub is_couple: bool,
    pub partner_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Rankable for Friend {
    fn points(&self) -> i64 {
        self.points
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn creation_seq(&self) -> i64 {
        self.seq
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a friend. Point totals always start at zero.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFriend {
    pub name: String,
    pub profile_picture: String,
    #[serde(default)]
    pub is_couple: bool,
    #[serde(default)]
    pub partner_name: Option<String>,
}

/// DTO for partially updating a friend. Omitted fields are left unchanged.
///
/// `partner_name` distinguishes "omitted" (`None`) from "explicitly cleared"
/// (`Some(None)`, sent as JSON `null`). A blank partner name also clears it.
/// Point totals are not patchable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFriend {
    pub name: Option<String>,
    pub profile_picture: Option<String>,
    pub is_couple: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub partner_name: Option<Option<String>>,
}

/// Wrap any present value (including `null`) in `Some`, so that a missing
/// key stays `None` via `#[serde(default)]`.
fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_distinguishes_omitted_from_null_partner() {
        let omitted: UpdateFriend = serde_json::from_str(r#"{"name":"Ana"}"#).unwrap();
        assert_eq!(omitted.partner_name, None);

        let cleared: UpdateFriend = serde_json::from_str(r#"{"partnerName":null}"#).unwrap();
        assert_eq!(cleared.partner_name, Some(None));

        let set: UpdateFriend = serde_json::from_str(r#"{"partnerName":"Rui"}"#).unwrap();
        assert_eq!(set.partner_name, Some(Some("Rui".to_string())));
    }

    #[test]
    fn create_defaults_couple_fields() {
        let dto: CreateFriend =
            serde_json::from_str(r#"{"name":"Ana","profilePicture":"x"}"#).unwrap();
        assert!(!dto.is_couple);
        assert_eq!(dto.partner_name, None);
    }

    #[test]
    fn friend_serializes_camel_case_without_seq() {
        let now = chrono::Utc::now();
        let friend = Friend {
            seq: 7,
            id: "f-1".into(),
            name: "Ana".into(),
            profile_picture: "pic".into(),
            points: 12,
            is_couple: true,
            partner_name: Some("Rui".into()),
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&friend).unwrap();
        assert_eq!(json["profilePicture"], "pic");
        assert_eq!(json["isCouple"], true);
        assert_eq!(json["partnerName"], "Rui");
        assert!(json.get("seq").is_none());
        assert!(json.get("createdAt").is_some());
    }
}
