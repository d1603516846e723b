use serde::{Deserialize, Serialize};

use crate::models::CategoryId;

/// One entry of the category pool listing (`GET /api/categories`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub title: String,
}

/// A full category with its clues (`GET /api/category`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub title: String,
    pub clues: Vec<ClueRecord>,
}

/// A clue as served by the remote source.
///
/// `value` is null for clues that never had a dollar value assigned.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClueRecord {
    pub question: String,
    pub answer: String,
    pub value: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_record_ignores_extra_fields() {
        let json = r#"{"id": 11531, "title": "mixed bag", "clues_count": 5}"#;
        let record: CategoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, CategoryId(11531));
        assert_eq!(record.title, "mixed bag");
    }

    #[test]
    fn clue_record_accepts_null_value() {
        let json = r#"{"question": "heard on 12/31", "answer": "auld lang syne", "value": null}"#;
        let record: ClueRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.value, None);
    }

    #[test]
    fn category_detail_parses_a_service_payload() {
        let json = r#"{
            "id": 306,
            "title": "picture books",
            "clues_count": 2,
            "clues": [
                {
                    "id": 33584,
                    "answer": "the very hungry caterpillar",
                    "question": "Eric Carle hero that eats through the pages",
                    "value": 200,
                    "airdate": "2010-07-06T12:00:00.000Z",
                    "category_id": 306
                },
                {
                    "id": 33590,
                    "answer": "goodnight moon",
                    "question": "bedtime classic with a quiet old lady",
                    "value": null,
                    "airdate": "2011-01-11T12:00:00.000Z",
                    "category_id": 306
                }
            ]
        }"#;

        let detail: CategoryDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.title, "picture books");
        assert_eq!(detail.clues.len(), 2);
        assert_eq!(detail.clues[0].value, Some(200));
        assert_eq!(detail.clues[1].value, None);
    }
}
