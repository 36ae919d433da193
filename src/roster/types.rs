/// An educational program listed on the timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub name: String,
}

/// An academic group within a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
}

/// A student as shown on a course roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub name: String,
    pub surname: String,
    pub middle_name: String,
    pub email: String,
}

/// A program as the timetable source reports it. Group titles are raw:
/// one title may hold several comma-separated group names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramListing {
    pub name: String,
    pub group_titles: Vec<String>,
}

/// A student record as the directory service reports it.
/// Either attribute may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub cn: Option<String>,
    pub display_name: Option<String>,
}
