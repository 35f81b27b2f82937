// MenuChoice enum to represent the numbered menu entries
#[derive(Debug, PartialEq)]
pub enum MenuChoice {
    Exit,
    List,
    ChangeDirectory,
    CreateFile,
    CreateDirectory,
    Delete,
    Copy,
    Move,
    Search,
    ShowPermissions,
    SetPermissions,
    Invalid(String),
}

#[derive(Debug, PartialEq)]
pub enum CommandResult {
    Quit,
    Continue,
}

// Parse a raw menu input line into a MenuChoice
pub fn parse_choice(raw: &str) -> MenuChoice {
    match raw.trim() {
        "0" => MenuChoice::Exit,
        "1" => MenuChoice::List,
        "2" => MenuChoice::ChangeDirectory,
        "3" => MenuChoice::CreateFile,
        "4" => MenuChoice::CreateDirectory,
        "5" => MenuChoice::Delete,
        "6" => MenuChoice::Copy,
        "7" => MenuChoice::Move,
        "8" => MenuChoice::Search,
        "9" => MenuChoice::ShowPermissions,
        "10" => MenuChoice::SetPermissions,
        other => MenuChoice::Invalid(other.to_string()),
    }
}
