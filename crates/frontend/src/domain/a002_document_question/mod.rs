//! Вопросы по документу: панель переписки
pub mod ui;
