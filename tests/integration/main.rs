//! Integration tests for qstories

mod cli_test;
mod feed_test;
mod helpers;
mod playback_test;
