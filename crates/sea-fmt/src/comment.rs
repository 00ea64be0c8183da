// SPDX-License-Identifier: (MIT OR Apache-2.0)

use sea_ast::token::Comment;

/// Sorted list of comments with a cursor for sequential consumption.
#[derive(Debug, Default)]
pub struct CommentList {
    comments: Vec<Comment>,
    cursor: usize,
}

impl CommentList {
    pub fn new(mut comments: Vec<Comment>) -> Self {
        comments.sort_by_key(|c| c.span.start);
        Self { comments, cursor: 0 }
    }

    /// Take all comments whose start position is before `pos`.
    pub fn take_before(&mut self, pos: usize) -> Vec<Comment> {
        let mut result = Vec::new();
        while self.cursor < self.comments.len() && self.comments[self.cursor].span.start < pos {
            result.push(self.comments[self.cursor].clone());
            self.cursor += 1;
        }
        result
    }

    /// Peek at the next unconsumed comment without advancing.
    pub fn peek_next(&self) -> Option<&Comment> {
        self.comments.get(self.cursor)
    }

    /// Drain any remaining comments.
    pub fn take_rest(&mut self) -> Vec<Comment> {
        let rest = self.comments[self.cursor..].to_vec();
        self.cursor = self.comments.len();
        rest
    }
}
