//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod chat_server;

use shotname_core::describe::{DescribeError, Describer};
use shotname_core::encode::EncodedImage;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Test double that answers with queued descriptions, in order.
///
/// Records the MIME type of every image it was shown.
pub struct ScriptedDescriber {
    answers: RefCell<VecDeque<Result<String, DescribeError>>>,
    seen: RefCell<Vec<&'static str>>,
}

impl ScriptedDescriber {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(|s| Ok(s.into())).collect()),
            seen: RefCell::new(Vec::new()),
        }
    }

    pub fn then_fail(self, err: DescribeError) -> Self {
        self.answers.borrow_mut().push_back(Err(err));
        self
    }

    pub fn seen_mimes(&self) -> Vec<&'static str> {
        self.seen.borrow().clone()
    }
}

impl Describer for ScriptedDescriber {
    fn describe(&self, image: &EncodedImage) -> Result<String, DescribeError> {
        self.seen.borrow_mut().push(image.mime);
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(DescribeError::InvalidResponse("no scripted answer left".into())))
    }
}
