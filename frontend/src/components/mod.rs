pub mod term_editor;
