use crate::api::models::{Dataset, Document, Params, RequestBody};
use crate::loader::Row;
use crate::sanitize::sanitize;

/// Turns loaded rows into the run request. Each document is numbered by its
/// zero-based row position and debug output is always switched off.
pub fn build_request(rows: &[Row]) -> RequestBody {
    let documents = rows
        .iter()
        .enumerate()
        .map(|(number, row)| Document {
            number,
            user_story: sanitize(&row.user_story),
            acceptance_criterion: sanitize(&row.acceptance_criterion),
        })
        .collect();

    RequestBody {
        dataset: Dataset { documents },
        params: Params { debug: false },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(us: &str, ac: &str) -> Row {
        Row {
            user_story: us.to_string(),
            acceptance_criterion: ac.to_string(),
        }
    }

    #[test]
    fn sanitizes_both_fields() {
        let body = build_request(&[row(
            "As a user, I want \"login\"",
            "Accept when pässword matches",
        )]);

        assert_eq!(
            body.dataset.documents[0],
            Document {
                number: 0,
                user_story: "As a user, I want login".to_string(),
                acceptance_criterion: "Accept when pssword matches".to_string(),
            }
        );
    }

    #[test]
    fn numbers_follow_row_position() {
        let rows: Vec<Row> = (0..5).map(|i| row(&format!("us {}", i), "ac")).collect();
        let body = build_request(&rows);

        for (index, document) in body.dataset.documents.iter().enumerate() {
            assert_eq!(document.number, index);
            assert_eq!(document.user_story, format!("us {}", index));
        }
    }

    #[test]
    fn empty_input_still_has_params() {
        let body = build_request(&[]);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"dataset": {"documents": []}, "params": {"debug": false}})
        );
    }

    #[test]
    fn serializes_to_service_shape() {
        let body = build_request(&[row("story", "criterion")]);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "dataset": {
                    "documents": [
                        {"number": 0, "user_story": "story", "acceptance_criterion": "criterion"}
                    ]
                },
                "params": {"debug": false}
            })
        );
    }
}
