//! In-memory news feed

use chrono::{DateTime, Local, NaiveDate};

use crate::apps::social::post::{Post, PostKind};
use crate::errors::{AppError, Result};

/// Ordered list of posts; ids start at 1 and are never reused
#[derive(Debug, Clone)]
pub struct NewsFeed {
    posts: Vec<Post>,
    next_id: u32,
}

impl NewsFeed {
    pub fn new() -> Self {
        NewsFeed {
            posts: Vec::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// All posts in the order they were added
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post_message(&mut self, author: &str, text: &str) -> u32 {
        self.post_message_at(author, text, Local::now())
    }

    pub fn post_message_at(&mut self, author: &str, text: &str, at: DateTime<Local>) -> u32 {
        self.add(
            author,
            PostKind::Message {
                text: text.to_string(),
            },
            at,
        )
    }

    pub fn post_photo(&mut self, author: &str, filename: &str, caption: &str) -> u32 {
        self.post_photo_at(author, filename, caption, Local::now())
    }

    pub fn post_photo_at(&mut self, author: &str, filename: &str, caption: &str, at: DateTime<Local>) -> u32 {
        self.add(
            author,
            PostKind::Photo {
                filename: filename.to_string(),
                caption: caption.to_string(),
            },
            at,
        )
    }

    fn add(&mut self, author: &str, kind: PostKind, at: DateTime<Local>) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.posts.push(Post::new(id, author, kind, at));
        tracing::info!(id, author, "post added");
        id
    }

    pub fn find(&self, id: u32) -> Result<&Post> {
        self.posts
            .iter()
            .find(|p| p.id == id)
            .ok_or(AppError::PostNotFound { id })
    }

    fn find_mut(&mut self, id: u32) -> Result<&mut Post> {
        self.posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(AppError::PostNotFound { id })
    }

    pub fn remove_post(&mut self, id: u32) -> Result<Post> {
        let index = self
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(AppError::PostNotFound { id })?;
        tracing::info!(id, "post removed");
        Ok(self.posts.remove(index))
    }

    pub fn by_author(&self, author: &str) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.is_by(author)).collect()
    }

    /// Posts made on the given local calendar day
    pub fn by_date(&self, date: NaiveDate) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|p| p.posted_at.date_naive() == date)
            .collect()
    }

    pub fn add_comment(&mut self, id: u32, text: &str) -> Result<()> {
        self.find_mut(id)?.add_comment(text);
        Ok(())
    }

    pub fn like(&mut self, id: u32) -> Result<u32> {
        Ok(self.find_mut(id)?.like())
    }

    pub fn unlike(&mut self, id: u32) -> Result<u32> {
        Ok(self.find_mut(id)?.unlike())
    }
}

impl Default for NewsFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_ids_increase_and_are_not_reused() {
        let mut feed = NewsFeed::new();
        assert_eq!(feed.post_message("Ada", "one"), 1);
        assert_eq!(feed.post_photo("Bob", "a.png", "two"), 2);

        feed.remove_post(2).unwrap();
        assert_eq!(feed.post_message("Ada", "three"), 3);
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn test_remove_missing_post() {
        let mut feed = NewsFeed::new();
        let err = feed.remove_post(9).unwrap_err();
        assert!(matches!(err, AppError::PostNotFound { id: 9 }));
    }

    #[test]
    fn test_by_author() {
        let mut feed = NewsFeed::new();
        feed.post_message("Ada", "one");
        feed.post_message("Bob", "two");
        feed.post_photo("ada", "x.jpg", "three");

        let ids: Vec<u32> = feed.by_author("ADA").iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(feed.by_author("Eve").is_empty());
    }

    #[test]
    fn test_by_date() {
        let mut feed = NewsFeed::new();
        let day = Local.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        feed.post_message_at("Ada", "today", day);
        feed.post_message_at("Ada", "tomorrow", day + Duration::days(1));

        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let posts = feed.by_date(date);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, 1);
    }

    #[test]
    fn test_like_unlike_comment() {
        let mut feed = NewsFeed::new();
        let id = feed.post_message("Ada", "hello");

        assert_eq!(feed.like(id).unwrap(), 1);
        assert_eq!(feed.unlike(id).unwrap(), 0);
        assert_eq!(feed.unlike(id).unwrap(), 0);

        feed.add_comment(id, "first!").unwrap();
        assert_eq!(feed.find(id).unwrap().comments, vec!["first!".to_string()]);

        assert!(feed.like(42).is_err());
        assert!(feed.add_comment(42, "nope").is_err());
    }
}
