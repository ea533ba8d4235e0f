//! Social network
//!
//! Message and photo posts in a news feed with likes and comments.

pub mod feed;
pub mod post;

use chrono::{Local, NaiveDate};
use std::io::Write;

use crate::apps::App;
use crate::console::{Console, LineSource};
use crate::errors::{AppError, Result};
pub use crate::apps::social::feed::NewsFeed;
pub use crate::apps::social::post::{Post, PostKind};

const MENU: [&str; 10] = [
    "Post Message",
    "Post Photo",
    "Remove Post",
    "Display All Posts",
    "Display Posts by Author",
    "Display Posts by Date",
    "Add Comment to Post",
    "Like a Post",
    "Unlike a Post",
    "Quit",
];

#[derive(Debug, Default)]
pub struct SocialNetwork {
    feed: NewsFeed,
}

impl SocialNetwork {
    pub fn new() -> Self {
        SocialNetwork {
            feed: NewsFeed::new(),
        }
    }

    pub fn feed(&self) -> &NewsFeed {
        &self.feed
    }

    fn input_required<S: LineSource, W: Write>(
        console: &mut Console<S, W>,
        prompt: &str,
        what: &str,
    ) -> Result<String> {
        loop {
            let text = console.input_text(prompt)?;
            if !text.is_empty() {
                return Ok(text);
            }
            console.show_error(&format!("The {} cannot be empty.", what))?;
        }
    }

    fn input_author<S: LineSource, W: Write>(console: &mut Console<S, W>) -> Result<String> {
        Self::input_required(console, "\tPlease enter the author's name > ", "author's name")
    }

    fn input_post_id<S: LineSource, W: Write>(console: &mut Console<S, W>) -> Result<u32> {
        let id = console.input_integer_in_range("\tPlease enter the post ID > ", 1, u32::MAX as i64)?;
        Ok(id as u32)
    }

    fn input_date<S: LineSource, W: Write>(console: &mut Console<S, W>) -> Result<NaiveDate> {
        loop {
            let text = console.input_text("\tPlease enter the date (YYYY-MM-DD, blank for today) > ")?;
            if text.is_empty() {
                return Ok(Local::now().date_naive());
            }
            match NaiveDate::parse_from_str(&text, "%Y-%m-%d") {
                Ok(date) => return Ok(date),
                Err(_) => console.show_error("Invalid date. Use the format YYYY-MM-DD.")?,
            }
        }
    }

    fn show_posts<S: LineSource, W: Write>(console: &mut Console<S, W>, posts: &[&Post]) -> Result<()> {
        if posts.is_empty() {
            return console.say("\tNo posts to display.");
        }

        let now = Local::now();
        for post in posts {
            for line in post.render(now) {
                console.say(format!("\t{}", line))?;
            }
            console.blank()?;
        }
        Ok(())
    }

    /// Report a missing post without leaving the app
    fn report<S: LineSource, W: Write, T>(console: &mut Console<S, W>, result: Result<T>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(err @ AppError::PostNotFound { .. }) => {
                console.show_error(&err.to_string())?;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn post_message<S: LineSource, W: Write>(&mut self, console: &mut Console<S, W>) -> Result<()> {
        console.output_title("Add a Message")?;
        let author = Self::input_author(console)?;
        let text = Self::input_required(console, "\tPlease enter the message > ", "message")?;

        let id = self.feed.post_message(&author, &text);
        console.show_result("You have successfully posted your message.")?;
        let post = self.feed.find(id)?;
        Self::show_posts(console, &[post])
    }

    fn post_photo<S: LineSource, W: Write>(&mut self, console: &mut Console<S, W>) -> Result<()> {
        console.output_title("Add a Photo")?;
        let author = Self::input_author(console)?;
        let filename = Self::input_required(console, "\tPlease enter the image filename > ", "filename")?;
        let caption = console.input_text("\tPlease add a caption > ")?;

        let id = self.feed.post_photo(&author, &filename, &caption);
        console.show_result("You have successfully posted your photo.")?;
        let post = self.feed.find(id)?;
        Self::show_posts(console, &[post])
    }

    fn remove_post<S: LineSource, W: Write>(&mut self, console: &mut Console<S, W>) -> Result<()> {
        console.output_title("Removing a Post")?;
        let id = Self::input_post_id(console)?;
        if Self::report(console, self.feed.remove_post(id))?.is_some() {
            console.show_result(&format!("Post {} has been removed.", id))?;
        }
        Ok(())
    }

    fn display_all<S: LineSource, W: Write>(&self, console: &mut Console<S, W>) -> Result<()> {
        console.output_title("All Posts")?;
        let posts: Vec<&Post> = self.feed.posts().iter().collect();
        Self::show_posts(console, &posts)
    }

    fn display_by_author<S: LineSource, W: Write>(&self, console: &mut Console<S, W>) -> Result<()> {
        console.output_title("Posts by Author")?;
        let author = Self::input_author(console)?;
        let posts = self.feed.by_author(&author);
        Self::show_posts(console, &posts)
    }

    fn display_by_date<S: LineSource, W: Write>(&self, console: &mut Console<S, W>) -> Result<()> {
        console.output_title("Posts by Date")?;
        let date = Self::input_date(console)?;
        let posts = self.feed.by_date(date);
        Self::show_posts(console, &posts)
    }

    fn add_comment<S: LineSource, W: Write>(&mut self, console: &mut Console<S, W>) -> Result<()> {
        console.output_title("Adding a Comment")?;
        let id = Self::input_post_id(console)?;
        if Self::report(console, self.feed.find(id).map(|_| ()))?.is_none() {
            return Ok(());
        }
        let text = Self::input_required(console, "\tPlease enter your comment > ", "comment")?;
        self.feed.add_comment(id, &text)?;
        console.show_result("Your comment has been added.")
    }

    fn like<S: LineSource, W: Write>(&mut self, console: &mut Console<S, W>) -> Result<()> {
        console.output_title("Liking a Post")?;
        let id = Self::input_post_id(console)?;
        if let Some(likes) = Self::report(console, self.feed.like(id))? {
            console.show_result(&format!("Post {} now has {} like(s).", id, likes))?;
        }
        Ok(())
    }

    fn unlike<S: LineSource, W: Write>(&mut self, console: &mut Console<S, W>) -> Result<()> {
        console.output_title("Unliking a Post")?;
        let id = Self::input_post_id(console)?;
        if let Some(likes) = Self::report(console, self.feed.unlike(id))? {
            console.show_result(&format!("Post {} now has {} like(s).", id, likes))?;
        }
        Ok(())
    }
}

impl App for SocialNetwork {
    fn run<S: LineSource, W: Write>(&mut self, console: &mut Console<S, W>) -> Result<()> {
        console.output_heading("Social Network")?;

        loop {
            match console.select_choice(&MENU)? {
                1 => self.post_message(console)?,
                2 => self.post_photo(console)?,
                3 => self.remove_post(console)?,
                4 => self.display_all(console)?,
                5 => self.display_by_author(console)?,
                6 => self.display_by_date(console)?,
                7 => self.add_comment(console)?,
                8 => self.like(console)?,
                9 => self.unlike(console)?,
                _ => return Ok(()),
            }
        }
    }
}
