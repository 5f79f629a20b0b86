//! Podcast composition tests

mod compose;
