//! Core functionality for quicknote
//!
//! This module contains the core data structures and functionality for quicknote,
//! including QuickNote, NoteTitle, templates, and frontmatter injection.

pub mod frontmatter;
pub mod quick_note;
pub mod template;
pub mod title;
