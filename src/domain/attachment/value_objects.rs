use crate::domain::errors::{DomainError, DomainResult};

macro_rules! attachment_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(id: i64) -> DomainResult<Self> {
                if id <= 0 {
                    Err(DomainError::Validation(concat!($label, " id must be positive").into()))
                } else {
                    Ok(Self(id))
                }
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

attachment_id!(ImageId, "image");
attachment_id!(VideoId, "video");
attachment_id!(AudioId, "audio");
attachment_id!(PollId, "poll");
attachment_id!(PollChoiceId, "poll choice");
attachment_id!(ReviewId, "review");
