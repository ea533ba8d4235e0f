//! News feed posts

use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostKind {
    Message { text: String },
    Photo { filename: String, caption: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: u32,
    pub author: String,
    pub posted_at: DateTime<Local>,
    pub likes: u32,
    pub comments: Vec<String>,
    pub kind: PostKind,
}

impl Post {
    pub fn new(id: u32, author: impl Into<String>, kind: PostKind, posted_at: DateTime<Local>) -> Self {
        Post {
            id,
            author: author.into(),
            posted_at,
            likes: 0,
            comments: Vec::new(),
            kind,
        }
    }

    pub fn like(&mut self) -> u32 {
        self.likes += 1;
        self.likes
    }

    /// Never drops below zero
    pub fn unlike(&mut self) -> u32 {
        self.likes = self.likes.saturating_sub(1);
        self.likes
    }

    pub fn add_comment(&mut self, text: impl Into<String>) {
        self.comments.push(text.into());
    }

    pub fn is_by(&self, author: &str) -> bool {
        self.author.trim().eq_ignore_ascii_case(author.trim())
    }

    /// Lines describing the post, with elapsed time measured from `now`
    pub fn render(&self, now: DateTime<Local>) -> Vec<String> {
        let mut lines = vec![
            format!("Post ID:  {}", self.id),
            format!("Author:   {}", self.author),
        ];

        match &self.kind {
            PostKind::Message { text } => lines.push(format!("Message:  {}", text)),
            PostKind::Photo { filename, caption } => {
                lines.push(format!("Filename: {}", filename));
                lines.push(format!("Caption:  {}", caption));
            }
        }

        lines.push(format!("Posted:   {}", format_elapsed(self.posted_at, now)));

        if self.likes > 0 {
            lines.push(format!("Likes:    {}", self.likes));
        } else {
            lines.push("Likes:    none".to_string());
        }

        if self.comments.is_empty() {
            lines.push("Comments: none".to_string());
        } else {
            lines.push(format!("Comments: {}", self.comments.len()));
            lines.extend(self.comments.iter().map(|c| format!("  - {}", c)));
        }

        lines
    }
}

/// Human readable time since `then`, e.g. `3 minutes ago`
pub fn format_elapsed(then: DateTime<Local>, now: DateTime<Local>) -> String {
    let seconds = (now - then).num_seconds().max(0);

    let (amount, unit) = if seconds < 60 {
        (seconds, "second")
    } else if seconds < 60 * 60 {
        (seconds / 60, "minute")
    } else if seconds < 24 * 60 * 60 {
        (seconds / 3600, "hour")
    } else {
        (seconds / 86_400, "day")
    };

    let plural = if amount == 1 { "" } else { "s" };
    format!("{} {}{} ago", amount, unit, plural)
}
