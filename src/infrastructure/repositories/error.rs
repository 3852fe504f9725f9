use crate::domain::errors::DomainError;

pub(super) const CNT_STORY_POSITION: &str = "stories_position_key";
const CNT_STATUS_NAME: &str = "statuses_name_key";
const CNT_STATUS_POSITION: &str = "statuses_position_key";
const CNT_SECTION_SLUG: &str = "sections_slug_key";
const CNT_TAG_SLUG: &str = "tags_slug_key";
const CNT_PAGE_SLUG: &str = "pages_slug_key";
const CNT_USER_USERNAME: &str = "users_username_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_STORY_POSITION => {
                        DomainError::Conflict("story position already exists".into())
                    }
                    CNT_STATUS_NAME => DomainError::Conflict("status name already exists".into()),
                    CNT_STATUS_POSITION => {
                        DomainError::Conflict("status position already exists".into())
                    }
                    CNT_SECTION_SLUG => DomainError::Conflict("section slug already exists".into()),
                    CNT_TAG_SLUG => DomainError::Conflict("tag slug already exists".into()),
                    CNT_PAGE_SLUG => DomainError::Conflict("page slug already exists".into()),
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
