//! Response body types.
//!
//! Every success body carries an explicit `success: true`; the
//! constructors set it so handlers cannot forget.

use serde::Serialize;

use crate::store::{Category, Question};

/// GET /categories
#[derive(Debug, Clone, Serialize)]
pub struct CategoryList {
    pub categories: Vec<Category>,
    pub success: bool,
}

impl CategoryList {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories, success: true }
    }
}

/// GET /questions
#[derive(Debug, Clone, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: Vec<Category>,
    /// Always null here; the listing is category-agnostic
    pub current_category: Option<Category>,
    pub success: bool,
}

impl QuestionPage {
    pub fn new(questions: Vec<Question>, total_questions: usize, categories: Vec<Category>) -> Self {
        Self {
            questions,
            total_questions,
            categories,
            current_category: None,
            success: true,
        }
    }
}

/// DELETE /questions/{id}
#[derive(Debug, Clone, Serialize)]
pub struct Deleted {
    pub question_id: u64,
    pub success: bool,
}

impl Deleted {
    pub fn new(question_id: u64) -> Self {
        Self { question_id, success: true }
    }
}

/// POST /questions
#[derive(Debug, Clone, Serialize)]
pub struct Created {
    pub question: Question,
    pub total_questions: usize,
    pub success: bool,
}

impl Created {
    pub fn new(question: Question, total_questions: usize) -> Self {
        Self { question, total_questions, success: true }
    }
}

/// POST /questions/search
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<Category>,
    pub success: bool,
}

impl SearchResults {
    pub fn new(questions: Vec<Question>) -> Self {
        let total_questions = questions.len();
        Self {
            questions,
            total_questions,
            current_category: None,
            success: true,
        }
    }
}

/// GET /categories/{id}/questions
#[derive(Debug, Clone, Serialize)]
pub struct CategoryQuestions {
    pub current_category: Category,
    pub questions: Vec<Question>,
    /// Count of all matches before pagination
    pub total_questions: usize,
    pub success: bool,
}

impl CategoryQuestions {
    pub fn new(current_category: Category, questions: Vec<Question>, total_questions: usize) -> Self {
        Self {
            current_category,
            questions,
            total_questions,
            success: true,
        }
    }
}

/// POST /quizzes
#[derive(Debug, Clone, Serialize)]
pub struct NextQuestion {
    /// Null once the quiz is exhausted
    pub question: Option<Question>,
    pub success: bool,
}

impl NextQuestion {
    pub fn new(question: Option<Question>) -> Self {
        Self { question, success: true }
    }
}

/// GET /health
#[derive(Debug, Clone, Serialize)]
pub struct Health {
    pub status: &'static str,
}

impl Health {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}
