//! Wire-to-model mapping for the remote feed payload
//!
//! The remote payload is a JSON object with an `items` array; each item maps
//! one-to-one onto a [`FeedImage`], with the wire field `image` carrying the
//! image URL.

use serde::Deserialize;
use url::Url;
use uuid::Uuid;

use crate::feed::{FeedError, FeedImage};

const OK_200: u16 = 200;

/// Root object of the remote payload
#[derive(Debug, Deserialize)]
struct Root {
    items: Vec<RemoteFeedItem>,
}

/// Feed item as it appears on the wire
#[derive(Debug, Deserialize)]
struct RemoteFeedItem {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

impl From<RemoteFeedItem> for FeedImage {
    fn from(item: RemoteFeedItem) -> Self {
        FeedImage {
            id: item.id,
            description: item.description,
            location: item.location,
            image_url: item.image,
        }
    }
}

/// Maps a completed HTTP exchange into feed records
///
/// Anything other than a 200 response carrying a decodable payload is
/// invalid data.
pub(super) fn map(body: &[u8], status: u16) -> Result<Vec<FeedImage>, FeedError> {
    if status != OK_200 {
        return Err(FeedError::InvalidData(format!(
            "unexpected status code {}",
            status
        )));
    }

    let root: Root =
        serde_json::from_slice(body).map_err(|err| FeedError::InvalidData(err.to_string()))?;

    Ok(root.items.into_iter().map(FeedImage::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_PAYLOAD: &str = r#"{
        "items": [
            {
                "id": "2239cba9-1cb3-43dc-aa41-ab088dd0a104",
                "description": "a description",
                "location": "a location",
                "image": "https://a-url.com/image-1.png"
            },
            {
                "id": "a448af58-1f63-44bc-b38a-cbf3c9f0c9f2",
                "image": "https://a-url.com/image-2.png"
            }
        ]
    }"#;

    #[test]
    fn test_map_decodes_items_in_order() {
        let feed = map(VALID_PAYLOAD.as_bytes(), 200).expect("mapping should succeed");

        assert_eq!(feed.len(), 2);
        assert_eq!(
            feed[0].id,
            "2239cba9-1cb3-43dc-aa41-ab088dd0a104".parse::<Uuid>().unwrap()
        );
        assert_eq!(feed[0].description.as_deref(), Some("a description"));
        assert_eq!(feed[0].location.as_deref(), Some("a location"));
        assert_eq!(feed[0].image_url.as_str(), "https://a-url.com/image-1.png");
    }

    #[test]
    fn test_map_treats_absent_optional_fields_as_none() {
        let feed = map(VALID_PAYLOAD.as_bytes(), 200).expect("mapping should succeed");

        assert!(feed[1].description.is_none());
        assert!(feed[1].location.is_none());
    }

    #[test]
    fn test_map_treats_null_optional_fields_as_none() {
        let payload = r#"{
            "items": [
                {
                    "id": "2239cba9-1cb3-43dc-aa41-ab088dd0a104",
                    "description": null,
                    "location": null,
                    "image": "https://a-url.com/image.png"
                }
            ]
        }"#;

        let feed = map(payload.as_bytes(), 200).expect("mapping should succeed");

        assert!(feed[0].description.is_none());
        assert!(feed[0].location.is_none());
    }

    #[test]
    fn test_map_yields_empty_feed_for_empty_items() {
        let feed = map(br#"{ "items": [] }"#, 200).expect("mapping should succeed");

        assert!(feed.is_empty());
    }

    #[test]
    fn test_map_rejects_non_200_status_codes() {
        for status in [199, 201, 300, 400, 500] {
            let result = map(VALID_PAYLOAD.as_bytes(), status);
            match result {
                Err(FeedError::InvalidData(message)) => {
                    assert!(message.contains(&status.to_string()))
                }
                other => panic!("Expected invalid data for status {}, got {:?}", status, other),
            }
        }
    }

    #[test]
    fn test_map_rejects_malformed_json() {
        let result = map(b"{ invalid json }", 200);

        assert!(matches!(result, Err(FeedError::InvalidData(_))));
    }

    #[test]
    fn test_map_rejects_payload_missing_items() {
        let result = map(br#"{ "records": [] }"#, 200);

        assert!(matches!(result, Err(FeedError::InvalidData(_))));
    }
}
