// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line definitions and request building.

use std::path::PathBuf;

use campus_assistant::ChatRequest;
use campus_core::{ChatContext, ConversationMessage, CourseContext, StudentContext, UserMode};
use clap::{Args, Parser, Subcommand};

/// Campus - tiered, cached answers for university students.
#[derive(Parser, Debug)]
#[command(name = "campus", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask one question and print the reply as JSON.
    Ask(AskArgs),
    /// Read a JSON chat request from a file (or stdin) and print the reply.
    Chat {
        /// Request file. Reads stdin when omitted.
        path: Option<PathBuf>,
    },
    /// Print the effective configuration with secrets masked.
    Config,
}

#[derive(Args, Debug, Default)]
pub struct AskArgs {
    /// The question.
    pub message: String,

    /// Cost/quality preference: fast, balanced, or smart.
    #[arg(long)]
    pub mode: Option<UserMode>,

    /// Ask about a course.
    #[arg(long, conflicts_with = "student_id")]
    pub course_code: Option<String>,

    #[arg(long, requires = "course_code")]
    pub course_name: Option<String>,

    /// Outline topic; repeat for each topic.
    #[arg(long = "outline", requires = "course_code")]
    pub outline: Vec<String>,

    #[arg(long, requires = "course_code")]
    pub instructor: Option<String>,

    /// Ask about a student's own performance.
    #[arg(long)]
    pub student_id: Option<String>,

    #[arg(long, requires = "student_id")]
    pub gpa: Option<f64>,

    #[arg(long, requires = "student_id")]
    pub study_hours: Option<f64>,

    /// Struggling subject; repeat for each subject.
    #[arg(long = "struggling", requires = "student_id")]
    pub struggling: Vec<String>,

    /// JSON file holding prior conversation messages.
    #[arg(long)]
    pub history: Option<PathBuf>,
}

impl AskArgs {
    pub fn context(&self) -> ChatContext {
        if let Some(code) = &self.course_code {
            return ChatContext::Course(CourseContext {
                course_code: code.clone(),
                course_name: self.course_name.clone().unwrap_or_default(),
                outline: non_empty(&self.outline),
                instructor: self.instructor.clone(),
                ..Default::default()
            });
        }
        if let Some(id) = &self.student_id {
            return ChatContext::Student(StudentContext {
                student_id: id.clone(),
                current_gpa: self.gpa,
                study_hours: self.study_hours,
                struggling_subjects: non_empty(&self.struggling),
                ..Default::default()
            });
        }
        ChatContext::General
    }

    pub fn into_request(self, history: Vec<ConversationMessage>) -> ChatRequest {
        ChatRequest {
            context: self.context(),
            message: self.message,
            history,
            user_mode: self.mode,
        }
    }
}

fn non_empty(items: &[String]) -> Option<Vec<String>> {
    (!items.is_empty()).then(|| items.to_vec())
}
