// src/infrastructure/repositories/memory.rs
//
// In-memory backend implementing every repository port. Backs the
// integration suites and small deployments that do not want Postgres.
// All mutations run under one store lock, which is what makes position
// assignment atomic here.
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::attachment::{
    AttachmentRepository, Audio, AudioId, Image, ImageId, NewAudio, NewImage, NewPoll, NewReview,
    NewVideo, Poll, PollChoice, PollChoiceId, PollId, Review, ReviewId, Video, VideoId,
};
use crate::domain::author::{Author, AuthorId, AuthorRepository, AuthorUpdate, NewAuthor};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::{NewPage, Page, PageId, PageRepository, PageUpdate};
use crate::domain::status::{NewStatus, Status, StatusId, StatusRepository};
use crate::domain::story::{
    NewStory, Story, StoryId, StoryPosition, StoryReadRepository, StoryUpdate,
    StoryWriteRepository,
};
use crate::domain::taxonomy::{Section, SectionId, Tag, TagId, TaxonomyRepository};
use crate::domain::user::{NewUser, User, UserId, UserRepository};

#[derive(Default)]
struct Inner {
    users: HashMap<i64, User>,
    authors: HashMap<i64, Author>,
    statuses: HashMap<i64, Status>,
    images: HashMap<i64, Image>,
    videos: HashMap<i64, Video>,
    audios: HashMap<i64, Audio>,
    polls: HashMap<i64, Poll>,
    reviews: HashMap<i64, Review>,
    stories: HashMap<i64, Story>,
    sections: HashMap<i64, Section>,
    tags: HashMap<i64, Tag>,
    pages: HashMap<i64, Page>,
    // One sequence for every table; ids only need to be unique.
    next_id: i64,
}

impl Inner {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct MemoryBackend {
    inner: Mutex<Inner>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl UserRepository for MemoryBackend {
    async fn insert(&self, user: NewUser) -> DomainResult<User> {
        let mut inner = self.lock();
        if inner.users.values().any(|u| u.username == user.username) {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        let id = inner.next_id();
        let user = User {
            id: UserId::new(id)?,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
        };
        inner.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.lock().users.get(&i64::from(id)).cloned())
    }
}

#[async_trait]
impl AuthorRepository for MemoryBackend {
    async fn insert(&self, author: NewAuthor) -> DomainResult<Author> {
        let mut inner = self.lock();
        if let Some(user_id) = author.user_id {
            if !inner.users.contains_key(&i64::from(user_id)) {
                return Err(DomainError::NotFound("user not found".into()));
            }
        }
        let id = inner.next_id();
        let author = Author {
            id: AuthorId::new(id)?,
            user_id: author.user_id,
            first_name: author.first_name,
            last_name: author.last_name,
            organization: author.organization,
            title: author.title,
            email: author.email,
            twitter: author.twitter,
            mug: author.mug,
            bio: author.bio,
        };
        inner.authors.insert(id, author.clone());
        Ok(author)
    }

    async fn update(&self, update: AuthorUpdate) -> DomainResult<Author> {
        let mut inner = self.lock();
        let author = inner
            .authors
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("author not found".into()))?;

        if let Some(first_name) = update.first_name {
            author.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            author.last_name = last_name;
        }
        if let Some(organization) = update.organization {
            author.organization = organization;
        }
        if let Some(title) = update.title {
            author.title = title;
        }
        if let Some(email) = update.email {
            author.email = email;
        }
        if let Some(twitter) = update.twitter {
            author.twitter = twitter;
        }
        if let Some(mug) = update.mug {
            author.mug = mug;
        }
        if let Some(bio) = update.bio {
            author.bio = bio;
        }
        Ok(author.clone())
    }

    async fn delete(&self, id: AuthorId) -> DomainResult<()> {
        let mut inner = self.lock();
        if inner.authors.remove(&i64::from(id)).is_none() {
            return Err(DomainError::NotFound("author not found".into()));
        }
        // Detach, never cascade: bylines and credits lose the reference,
        // the stories and media themselves survive.
        for story in inner.stories.values_mut() {
            story.authors.retain(|a| *a != id);
        }
        for image in inner.images.values_mut() {
            image.credit.retain(|a| *a != id);
        }
        for video in inner.videos.values_mut() {
            video.credit.retain(|a| *a != id);
        }
        for audio in inner.audios.values_mut() {
            audio.credit.retain(|a| *a != id);
        }
        Ok(())
    }

    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>> {
        Ok(self.lock().authors.get(&i64::from(id)).cloned())
    }

    async fn find_many(&self, ids: &[AuthorId]) -> DomainResult<Vec<Author>> {
        let inner = self.lock();
        Ok(ids
            .iter()
            .filter_map(|id| inner.authors.get(&i64::from(*id)).cloned())
            .collect())
    }

    async fn list(&self) -> DomainResult<Vec<Author>> {
        let inner = self.lock();
        let mut authors: Vec<_> = inner.authors.values().cloned().collect();
        authors.sort_by_key(|a| i64::from(a.id));
        Ok(authors)
    }
}

#[async_trait]
impl StatusRepository for MemoryBackend {
    async fn insert(&self, status: NewStatus) -> DomainResult<Status> {
        let mut inner = self.lock();
        if inner.statuses.values().any(|s| s.name == status.name) {
            return Err(DomainError::Conflict("status name already exists".into()));
        }
        if inner
            .statuses
            .values()
            .any(|s| s.position == status.position)
        {
            return Err(DomainError::Conflict(
                "status position already exists".into(),
            ));
        }
        let id = inner.next_id();
        let status = Status {
            id: StatusId::new(id)?,
            name: status.name,
            position: status.position,
        };
        inner.statuses.insert(id, status.clone());
        Ok(status)
    }

    async fn delete(&self, id: StatusId) -> DomainResult<()> {
        let mut inner = self.lock();
        if inner.stories.values().any(|s| s.status == id) {
            return Err(DomainError::Conflict(
                "status is still referenced by stories".into(),
            ));
        }
        if inner.statuses.remove(&i64::from(id)).is_none() {
            return Err(DomainError::NotFound("status not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: StatusId) -> DomainResult<Option<Status>> {
        Ok(self.lock().statuses.get(&i64::from(id)).cloned())
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Status>> {
        Ok(self
            .lock()
            .statuses
            .values()
            .find(|s| s.name == name)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Status>> {
        let inner = self.lock();
        let mut statuses: Vec<_> = inner.statuses.values().cloned().collect();
        statuses.sort_by_key(|s| s.position);
        Ok(statuses)
    }
}

#[async_trait]
impl AttachmentRepository for MemoryBackend {
    async fn insert_image(&self, image: NewImage) -> DomainResult<Image> {
        let mut inner = self.lock();
        let id = inner.next_id();
        let image = Image {
            id: ImageId::new(id)?,
            title: image.title,
            file: image.file,
            caption: image.caption,
            credit: image.credit,
        };
        inner.images.insert(id, image.clone());
        Ok(image)
    }

    async fn find_image(&self, id: ImageId) -> DomainResult<Option<Image>> {
        Ok(self.lock().images.get(&i64::from(id)).cloned())
    }

    async fn delete_image(&self, id: ImageId) -> DomainResult<()> {
        let mut inner = self.lock();
        if inner.images.remove(&i64::from(id)).is_none() {
            return Err(DomainError::NotFound("image not found".into()));
        }
        for story in inner.stories.values_mut() {
            if story.card == Some(id) {
                story.card = None;
            }
            if story.featured_image == Some(id) {
                story.featured_image = None;
            }
        }
        for author in inner.authors.values_mut() {
            if author.mug == Some(id) {
                author.mug = None;
            }
        }
        Ok(())
    }

    async fn insert_video(&self, video: NewVideo) -> DomainResult<Video> {
        let mut inner = self.lock();
        let id = inner.next_id();
        let video = Video {
            id: VideoId::new(id)?,
            title: video.title,
            url: video.url,
            credit: video.credit,
        };
        inner.videos.insert(id, video.clone());
        Ok(video)
    }

    async fn find_video(&self, id: VideoId) -> DomainResult<Option<Video>> {
        Ok(self.lock().videos.get(&i64::from(id)).cloned())
    }

    async fn delete_video(&self, id: VideoId) -> DomainResult<()> {
        let mut inner = self.lock();
        if inner.videos.remove(&i64::from(id)).is_none() {
            return Err(DomainError::NotFound("video not found".into()));
        }
        for story in inner.stories.values_mut() {
            if story.featured_video == Some(id) {
                story.featured_video = None;
            }
        }
        Ok(())
    }

    async fn insert_audio(&self, audio: NewAudio) -> DomainResult<Audio> {
        let mut inner = self.lock();
        let id = inner.next_id();
        let audio = Audio {
            id: AudioId::new(id)?,
            title: audio.title,
            url: audio.url,
            credit: audio.credit,
        };
        inner.audios.insert(id, audio.clone());
        Ok(audio)
    }

    async fn find_audio(&self, id: AudioId) -> DomainResult<Option<Audio>> {
        Ok(self.lock().audios.get(&i64::from(id)).cloned())
    }

    async fn delete_audio(&self, id: AudioId) -> DomainResult<()> {
        let mut inner = self.lock();
        if inner.audios.remove(&i64::from(id)).is_none() {
            return Err(DomainError::NotFound("audio not found".into()));
        }
        for story in inner.stories.values_mut() {
            if story.featured_audio == Some(id) {
                story.featured_audio = None;
            }
        }
        Ok(())
    }

    async fn insert_poll(&self, poll: NewPoll) -> DomainResult<Poll> {
        let mut inner = self.lock();
        let poll_id = inner.next_id();
        let id = PollId::new(poll_id)?;
        let mut choices = Vec::with_capacity(poll.choices.len());
        for choice in poll.choices {
            let choice_id = inner.next_id();
            choices.push(PollChoice {
                id: PollChoiceId::new(choice_id)?,
                poll_id: id,
                text: choice.text,
            });
        }
        let poll = Poll {
            id,
            question: poll.question,
            choices,
        };
        inner.polls.insert(poll_id, poll.clone());
        Ok(poll)
    }

    async fn find_poll(&self, id: PollId) -> DomainResult<Option<Poll>> {
        Ok(self.lock().polls.get(&i64::from(id)).cloned())
    }

    async fn delete_poll(&self, id: PollId) -> DomainResult<()> {
        let mut inner = self.lock();
        if inner.polls.remove(&i64::from(id)).is_none() {
            return Err(DomainError::NotFound("poll not found".into()));
        }
        for story in inner.stories.values_mut() {
            if story.poll == Some(id) {
                story.poll = None;
            }
        }
        Ok(())
    }

    async fn insert_review(&self, review: NewReview) -> DomainResult<Review> {
        let mut inner = self.lock();
        let id = inner.next_id();
        let review = Review {
            id: ReviewId::new(id)?,
            item: review.item,
            rating: review.rating,
            body: review.body,
        };
        inner.reviews.insert(id, review.clone());
        Ok(review)
    }

    async fn find_review(&self, id: ReviewId) -> DomainResult<Option<Review>> {
        Ok(self.lock().reviews.get(&i64::from(id)).cloned())
    }

    async fn delete_review(&self, id: ReviewId) -> DomainResult<()> {
        let mut inner = self.lock();
        if inner.reviews.remove(&i64::from(id)).is_none() {
            return Err(DomainError::NotFound("review not found".into()));
        }
        for story in inner.stories.values_mut() {
            if story.review == Some(id) {
                story.review = None;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl TaxonomyRepository for MemoryBackend {
    async fn insert_section(&self, name: &str, slug: &str) -> DomainResult<Section> {
        let mut inner = self.lock();
        if inner.sections.values().any(|s| s.slug == slug) {
            return Err(DomainError::Conflict("section slug already exists".into()));
        }
        let id = inner.next_id();
        let section = Section {
            id: SectionId::new(id)?,
            name: name.to_string(),
            slug: slug.to_string(),
        };
        inner.sections.insert(id, section.clone());
        Ok(section)
    }

    async fn insert_tag(&self, name: &str, slug: &str) -> DomainResult<Tag> {
        let mut inner = self.lock();
        if inner.tags.values().any(|t| t.slug == slug) {
            return Err(DomainError::Conflict("tag slug already exists".into()));
        }
        let id = inner.next_id();
        let tag = Tag {
            id: TagId::new(id)?,
            name: name.to_string(),
            slug: slug.to_string(),
        };
        inner.tags.insert(id, tag.clone());
        Ok(tag)
    }

    async fn find_sections(&self, ids: &[SectionId]) -> DomainResult<Vec<Section>> {
        let inner = self.lock();
        Ok(ids
            .iter()
            .filter_map(|id| inner.sections.get(&i64::from(*id)).cloned())
            .collect())
    }

    async fn find_tags(&self, ids: &[TagId]) -> DomainResult<Vec<Tag>> {
        let inner = self.lock();
        Ok(ids
            .iter()
            .filter_map(|id| inner.tags.get(&i64::from(*id)).cloned())
            .collect())
    }

    async fn list_sections(&self) -> DomainResult<Vec<Section>> {
        let inner = self.lock();
        let mut sections: Vec<_> = inner.sections.values().cloned().collect();
        sections.sort_by_key(|s| i64::from(s.id));
        Ok(sections)
    }

    async fn list_tags(&self) -> DomainResult<Vec<Tag>> {
        let inner = self.lock();
        let mut tags: Vec<_> = inner.tags.values().cloned().collect();
        tags.sort_by_key(|t| i64::from(t.id));
        Ok(tags)
    }
}

#[async_trait]
impl StoryWriteRepository for MemoryBackend {
    async fn insert(&self, story: NewStory) -> DomainResult<Story> {
        let mut inner = self.lock();
        if !inner.statuses.contains_key(&i64::from(story.status)) {
            return Err(DomainError::NotFound("status not found".into()));
        }

        // Assignment and insert happen under the same lock, so two
        // concurrent creators can never observe the same maximum.
        let position = match story.position {
            Some(position) => {
                if inner.stories.values().any(|s| s.position == position) {
                    return Err(DomainError::Conflict(
                        "story position already exists".into(),
                    ));
                }
                position
            }
            None => match inner.stories.values().map(|s| s.position).max() {
                Some(max) => max.next()?,
                None => StoryPosition::first(),
            },
        };

        let id = inner.next_id();
        let story = Story {
            id: StoryId::new(id)?,
            assignment_slug: story.assignment_slug,
            status: story.status,
            title: story.title,
            url_slug: story.url_slug,
            authors: story.authors,
            teaser: story.teaser,
            subhead: story.subhead,
            body: story.body,
            alternate_template: story.alternate_template,
            summary: story.summary,
            angle: story.angle,
            sources: story.sources,
            position,
            sections: story.sections,
            tags: story.tags,
            series: story.series,
            card: story.card,
            card_size: story.card_size,
            card_focus: story.card_focus,
            feature_card_image: story.feature_card_image,
            publish_time: story.publish_time,
            breaking_duration: story.breaking_duration,
            created: story.created,
            last_updated: story.last_updated,
            featured_image: story.featured_image,
            featured_video: story.featured_video,
            featured_audio: story.featured_audio,
            review: story.review,
            poll: story.poll,
        };
        inner.stories.insert(id, story.clone());
        Ok(story)
    }

    async fn update(&self, update: StoryUpdate) -> DomainResult<Story> {
        let mut inner = self.lock();
        let id = i64::from(update.id);

        if let Some(position) = update.position {
            if inner
                .stories
                .values()
                .any(|s| s.position == position && i64::from(s.id) != id)
            {
                return Err(DomainError::Conflict(
                    "story position already exists".into(),
                ));
            }
        }

        let story = inner
            .stories
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("story not found".into()))?;

        if let Some(assignment_slug) = update.assignment_slug {
            story.assignment_slug = assignment_slug;
        }
        if let Some(status) = update.status {
            story.status = status;
        }
        if let Some(title) = update.title {
            story.title = title;
        }
        if let Some(url_slug) = update.url_slug {
            story.url_slug = url_slug;
        }
        if let Some(authors) = update.authors {
            story.authors = authors;
        }
        if let Some(teaser) = update.teaser {
            story.teaser = teaser;
        }
        if let Some(subhead) = update.subhead {
            story.subhead = subhead;
        }
        if let Some(body) = update.body {
            story.body = body;
        }
        if let Some(summary) = update.summary {
            story.summary = summary;
        }
        if let Some(angle) = update.angle {
            story.angle = angle;
        }
        if let Some(sources) = update.sources {
            story.sources = sources;
        }
        if let Some(position) = update.position {
            story.position = position;
        }
        if let Some(sections) = update.sections {
            story.sections = sections;
        }
        if let Some(tags) = update.tags {
            story.tags = tags;
        }
        if let Some(series) = update.series {
            story.series = series;
        }
        if let Some(card) = update.card {
            story.card = card;
        }
        if let Some(card_size) = update.card_size {
            story.card_size = card_size;
        }
        if let Some(card_focus) = update.card_focus {
            story.card_focus = card_focus;
        }
        if let Some(feature_card_image) = update.feature_card_image {
            story.feature_card_image = feature_card_image;
        }
        if let Some(publish_time) = update.publish_time {
            story.publish_time = publish_time;
        }
        if let Some(breaking_duration) = update.breaking_duration {
            story.breaking_duration = breaking_duration;
        }
        if let Some(featured_image) = update.featured_image {
            story.featured_image = featured_image;
        }
        if let Some(featured_video) = update.featured_video {
            story.featured_video = featured_video;
        }
        if let Some(featured_audio) = update.featured_audio {
            story.featured_audio = featured_audio;
        }
        if let Some(review) = update.review {
            story.review = review;
        }
        if let Some(poll) = update.poll {
            story.poll = poll;
        }
        story.last_updated = update.last_updated;
        Ok(story.clone())
    }

    async fn delete(&self, id: StoryId) -> DomainResult<()> {
        let mut inner = self.lock();
        if inner.stories.remove(&i64::from(id)).is_none() {
            return Err(DomainError::NotFound("story not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl StoryReadRepository for MemoryBackend {
    async fn find_by_id(&self, id: StoryId) -> DomainResult<Option<Story>> {
        Ok(self.lock().stories.get(&i64::from(id)).cloned())
    }

    async fn find_by_url_slug(&self, url_slug: &str) -> DomainResult<Option<Story>> {
        // Oldest match wins when slugs collide, same as the database
        // adapter.
        Ok(self
            .lock()
            .stories
            .values()
            .filter(|s| s.url_slug == url_slug)
            .min_by_key(|s| i64::from(s.id))
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Story>> {
        let inner = self.lock();
        let mut stories: Vec<_> = inner.stories.values().cloned().collect();
        stories.sort_by(|a, b| b.position.cmp(&a.position));
        Ok(stories)
    }

    async fn list_published(
        &self,
        published: StatusId,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<Story>> {
        let inner = self.lock();
        let mut stories: Vec<_> = inner
            .stories
            .values()
            .filter(|s| s.status == published && s.publish_time < now)
            .cloned()
            .collect();
        stories.sort_by(|a, b| b.position.cmp(&a.position));
        Ok(stories)
    }
}

#[async_trait]
impl PageRepository for MemoryBackend {
    async fn insert(&self, page: NewPage) -> DomainResult<Page> {
        let mut inner = self.lock();
        if let Some(parent) = page.parent {
            if !inner.pages.contains_key(&i64::from(parent)) {
                return Err(DomainError::NotFound("parent page not found".into()));
            }
        }
        if inner.pages.values().any(|p| p.slug == page.slug) {
            return Err(DomainError::Conflict("page slug already exists".into()));
        }
        let id = inner.next_id();
        let page = Page {
            id: PageId::new(id)?,
            parent: page.parent,
            title: page.title,
            slug: page.slug,
            body: page.body,
            alternate_template: page.alternate_template,
        };
        inner.pages.insert(id, page.clone());
        Ok(page)
    }

    async fn update(&self, update: PageUpdate) -> DomainResult<Page> {
        let mut inner = self.lock();
        let id = i64::from(update.id);

        if let Some(slug) = update.slug.as_deref() {
            if inner
                .pages
                .values()
                .any(|p| p.slug == slug && i64::from(p.id) != id)
            {
                return Err(DomainError::Conflict("page slug already exists".into()));
            }
        }

        let page = inner
            .pages
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("page not found".into()))?;

        if let Some(parent) = update.parent {
            page.parent = parent;
        }
        if let Some(title) = update.title {
            page.title = title;
        }
        if let Some(slug) = update.slug {
            page.slug = slug;
        }
        if let Some(body) = update.body {
            page.body = body;
        }
        if let Some(alternate_template) = update.alternate_template {
            page.alternate_template = alternate_template;
        }
        Ok(page.clone())
    }

    async fn delete(&self, id: PageId) -> DomainResult<()> {
        let mut inner = self.lock();
        if inner.pages.remove(&i64::from(id)).is_none() {
            return Err(DomainError::NotFound("page not found".into()));
        }
        // Children move to the root rather than dangling.
        for page in inner.pages.values_mut() {
            if page.parent == Some(id) {
                page.parent = None;
            }
        }
        Ok(())
    }

    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>> {
        Ok(self.lock().pages.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Page>> {
        Ok(self.lock().pages.values().find(|p| p.slug == slug).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Page>> {
        let inner = self.lock();
        let mut pages: Vec<_> = inner.pages.values().cloned().collect();
        pages.sort_by_key(|p| i64::from(p.id));
        Ok(pages)
    }

    async fn list_children(&self, parent: PageId) -> DomainResult<Vec<Page>> {
        let inner = self.lock();
        let mut pages: Vec<_> = inner
            .pages
            .values()
            .filter(|p| p.parent == Some(parent))
            .cloned()
            .collect();
        pages.sort_by_key(|p| i64::from(p.id));
        Ok(pages)
    }
}
