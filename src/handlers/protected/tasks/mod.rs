// Task resource handlers
//
// Collection operations (list/create) and record operations
// (get/update/delete) on /api/tasks. Records are always resolved
// through the ownership-scoped selector first; a task that is missing
// and a task that belongs to someone else produce the same 404.

pub mod collection;
pub mod record;

pub use collection::{task_list, task_post};
pub use record::{task_delete, task_get, task_patch, task_put};

use crate::error::ApiError;

pub(crate) const MAX_TITLE_CHARS: usize = 200;

/// Title rules: non-empty, at most 200 characters. Counted in
/// characters, not bytes.
pub(crate) fn validate_title(title: &str) -> Result<(), ApiError> {
    if title.is_empty() {
        return Err(ApiError::field_error("title", "This field may not be blank"));
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(ApiError::field_error(
            "title",
            format!("Title must be at most {} characters", MAX_TITLE_CHARS),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_title_is_rejected() {
        assert!(validate_title("").is_err());
    }

    #[test]
    fn boundary_lengths() {
        let exactly_200 = "a".repeat(200);
        assert!(validate_title(&exactly_200).is_ok());

        let over_by_one = "a".repeat(201);
        assert!(validate_title(&over_by_one).is_err());
    }

    #[test]
    fn length_is_counted_in_characters_not_bytes() {
        // 200 four-byte characters is 800 bytes but still a legal title
        let wide = "\u{1F600}".repeat(200);
        assert!(wide.len() > MAX_TITLE_CHARS);
        assert!(validate_title(&wide).is_ok());

        let wide_over = "\u{1F600}".repeat(201);
        assert!(validate_title(&wide_over).is_err());
    }

    #[test]
    fn whitespace_only_title_is_accepted() {
        // No trimming: the rule is non-empty, not non-blank-looking
        assert!(validate_title("   ").is_ok());
    }

    #[test]
    fn title_errors_surface_as_field_errors() {
        let err = validate_title("").unwrap_err();
        let body = err.to_json();
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["field_errors"]["title"].is_string());
    }
}
