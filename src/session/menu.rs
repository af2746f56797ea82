//! Main menu

use std::fmt;

pub const MENU_TEXT: &str = "\nMenu:\n1. Add option\n2. Show payoff graph\n3. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddOption,
    ShowGraph,
    Exit,
}

impl MenuChoice {
    /// Map a menu selection ("1", "2" or "3") to its action
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(MenuChoice::AddOption),
            "2" => Some(MenuChoice::ShowGraph),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuChoice::AddOption => write!(f, "Add option"),
            MenuChoice::ShowGraph => write!(f, "Show payoff graph"),
            MenuChoice::Exit => write!(f, "Exit"),
        }
    }
}
